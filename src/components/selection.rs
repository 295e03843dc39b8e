//! Selection Screen
//!
//! The full deck laid face-down in a fixed shuffled order; the seeker flips
//! exactly three, in the order 过去 -> 现在 -> 未来.

use leptos::prelude::*;
use rand::thread_rng;

use tarot_core::session::SessionAction;
use tarot_core::shuffle::shuffled;
use tarot_core::spread::{SpreadPicks, SPREAD_SIZE};

use crate::components::{CardTile, OrnamentDivider};
use crate::context::AppContext;

#[component]
pub fn SelectionScreen() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    // One permutation per visit; re-renders must never re-shuffle.
    let deck = StoredValue::new(
        ctx.catalog
            .with_value(|catalog| shuffled(catalog.cards(), &mut thread_rng())),
    );
    let deck_len = deck.with_value(|d| d.len());

    let picks = RwSignal::new(SpreadPicks::new());

    let reveal = move |_| {
        let drawn = deck.with_value(|d| {
            picks
                .get_untracked()
                .as_slice()
                .iter()
                .map(|&i| d[i].clone())
                .collect::<Vec<_>>()
        });
        ctx.dispatch(SessionAction::RevealSpread(drawn));
    };

    view! {
        <section class="screen selection-screen">
            <h2 class="screen-title">"抽出三张牌"</h2>
            <OrnamentDivider/>
            <p class="selection-hint">
                {move || {
                    let n = picks.with(|p| p.len());
                    if n < SPREAD_SIZE {
                        format!("已选 {} / {} · 跟随直觉翻开牌面", n, SPREAD_SIZE)
                    } else {
                        "三张牌已就位".to_string()
                    }
                }}
            </p>

            <div class="card-grid">
                {(0..deck_len).map(|i| {
                    let card = deck.with_value(|d| d[i].clone());
                    view! {
                        <CardTile
                            card=card
                            rank=Signal::derive(move || picks.with(|p| p.rank_of(i)))
                            disabled=Signal::derive(move || {
                                picks.with(|p| p.is_full() && !p.contains(i))
                            })
                            on_flip=Callback::new(move |_| {
                                picks.update(|p| {
                                    let _ = p.toggle(i);
                                });
                            })
                        />
                    }
                }).collect_view()}
            </div>

            // Only rendered once the spread is complete; this is the single
            // path into the reading, so the generator always gets 3 cards.
            <Show when=move || picks.with(|p| p.is_full())>
                <button class="primary-btn reveal-btn" on:click=reveal>
                    "揭示命运"
                </button>
            </Show>
        </section>
    }
}
