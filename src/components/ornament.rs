//! Ornaments
//!
//! Decorative divider and the fixed moon emblem.

use leptos::prelude::*;

#[component]
pub fn OrnamentDivider() -> impl IntoView {
    view! {
        <div class="ornament-divider" aria-hidden="true">
            <span class="ornament-line"></span>
            <span class="ornament-glyph">"☾ ✦ ☽"</span>
            <span class="ornament-line"></span>
        </div>
    }
}

#[component]
pub fn MoonEmblem() -> impl IntoView {
    view! {
        <div class="moon-emblem" aria-hidden="true">
            <div class="moon-disc"></div>
        </div>
    }
}
