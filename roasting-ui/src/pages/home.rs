use crate::components::{IdeaInput, RoastDisplay};
use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="hero">
            <h1 class="hero__title">"Roast My Idea"</h1>
            <p class="hero__subtitle">
                "Gib deine Startup-Idee ein. Wir sagen dir warum sie scheitern wird."
            </p>
        </div>

        <IdeaInput/>
        <RoastDisplay/>

        <p class="footer">"Keine Idee ist zu dumm. Wir finden trotzdem was."</p>
    }
}
