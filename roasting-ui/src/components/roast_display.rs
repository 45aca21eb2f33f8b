use leptos::prelude::*;

/// Shown when the roast request itself fails (network down, server gone).
pub const NETWORK_FALLBACK_ROAST: &str =
    "Selbst mein Roast-Generator hat aufgegeben. Das sagt alles.";

/// Empty result box, filled with plain text by the page script.
#[component]
pub fn RoastDisplay() -> impl IntoView {
    view! {
        <div class="roast" id="roast-result" hidden=true>
            <p class="roast__text" id="roast-text"></p>
        </div>
    }
}
