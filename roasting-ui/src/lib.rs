pub mod components;
pub mod pages;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use pages::HomePage;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Roast My Idea"/>
        <Meta name="description" content="Gib deine Startup-Idee ein. Wir sagen dir warum sie scheitern wird."/>

        <Router>
            <main class="container">
                <Routes fallback=|| "Seite nicht gefunden. Genau wie dein Business Model.">
                    <Route path=path!("/") view=HomePage/>
                </Routes>
            </main>
        </Router>
    }
}

