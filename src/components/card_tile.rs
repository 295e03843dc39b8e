//! Card Tile Component
//!
//! One card in the selection grid: shared back, 3D flip, face with the
//! card's gradient and glyph, position badge while face-up.

use leptos::prelude::*;

use tarot_core::cards::TarotCard;
use tarot_core::spread::position_label;

#[component]
pub fn CardTile(
    card: TarotCard,
    /// Pick rank while face-up (0 = 过去), None while face-down.
    #[prop(into)] rank: Signal<Option<usize>>,
    /// True when three other cards are already up and this one is locked.
    #[prop(into)] disabled: Signal<bool>,
    #[prop(into)] on_flip: Callback<()>,
) -> impl IntoView {
    let face_style = format!(
        "background: linear-gradient(160deg, {}, {});",
        card.colors.from, card.colors.to
    );

    let tile_class = move || {
        let mut class = String::from("card-tile");
        if rank.get().is_some() {
            class.push_str(" flipped");
        }
        if disabled.get() {
            class.push_str(" disabled");
        }
        class
    };

    view! {
        <button
            type="button"
            class=tile_class
            on:click=move |_| {
                if !disabled.get() {
                    on_flip.run(());
                }
            }
        >
            <div class="card-inner">
                <div class="card-back">
                    <span class="card-back-glyph">"✦"</span>
                </div>
                <div class="card-face" style=face_style>
                    <span class="card-numeral">{card.numeral.clone()}</span>
                    <span class="card-symbol">{card.symbol.clone()}</span>
                    <span class="card-name">{card.name.clone()}</span>
                    {move || rank.get().map(|r| view! {
                        <span class="card-position">{position_label(r)}</span>
                    })}
                </div>
            </div>
        </button>
    }
}
