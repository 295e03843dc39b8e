//! Tarot Frontend App
//!
//! Top-level component: session state, screen switching, ambient chrome.

use leptos::prelude::*;

use tarot_core::cards::Catalog;
use tarot_core::session::{Page, Session};

use crate::components::{
    AudioToggle, LandingScreen, MoonEmblem, ReadingScreen, SelectionScreen, Starfield,
};
use crate::context::AppContext;
use crate::styles::GLOBAL_STYLES;

#[component]
pub fn App() -> impl IntoView {
    // The embedded catalog is validated by the core crate's tests; a failure
    // here means a broken build, not a runtime condition.
    let catalog = Catalog::embedded().expect("embedded card catalog should parse");
    let catalog = StoredValue::new(catalog);

    // Session state
    let (session, set_session) = signal(Session::new());
    let (veiled, set_veiled) = signal(false);

    // Provide context to all children
    provide_context(AppContext::new(
        (session, set_session),
        (veiled, set_veiled),
        catalog,
    ));

    view! {
        <style>{GLOBAL_STYLES}</style>
        <div class="app-shell">
            <Starfield/>
            <MoonEmblem/>
            <AudioToggle/>

            // Screens remount whenever the page changes, so screen-local
            // state (the shuffled deck, the reveal cursor) starts fresh on
            // every visit.
            <main class="screen-stage">
                {move || match session.get().page {
                    Page::Landing => view! { <LandingScreen/> }.into_any(),
                    Page::Selection => view! { <SelectionScreen/> }.into_any(),
                    Page::Reading => view! { <ReadingScreen/> }.into_any(),
                }}
            </main>

            // Cosmetic only: the session has already moved when this fades.
            <div class=move || if veiled.get() { "veil active" } else { "veil" }></div>
        </div>
    }
}
