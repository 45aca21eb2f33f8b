use leptos::prelude::*;

pub const IDEA_PLACEHOLDER_TEXT: &str =
    "z.B. Uber für Hunde, Tinder für Pflanzen, Blockchain für Bäckereien...";
pub const SUBMIT_LABEL: &str = "ROAST ME";
pub const LOADING_LABEL: &str = "Lade Beleidigungen...";

/// Idea textarea and submit button. The button starts disabled and is
/// toggled by the page script once the textarea holds text.
#[component]
pub fn IdeaInput() -> impl IntoView {
    view! {
        <form class="idea-form" id="idea-form">
            <textarea
                name="idea"
                id="idea-input"
                class="idea-form__input"
                placeholder={IDEA_PLACEHOLDER_TEXT}
            ></textarea>
            <button
                type="submit"
                id="roast-button"
                class="idea-form__button"
                disabled=true
            >
                {SUBMIT_LABEL}
            </button>
        </form>
    }
}
