//! Reading Screen
//!
//! Generates the reading once, then reveals it character by character with
//! a longer pause after sentence and clause terminators.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use tarot_core::cards::TarotCard;
use tarot_core::reading;
use tarot_core::session::{Session, SessionAction};
use tarot_core::spread::position_label;

use crate::components::OrnamentDivider;
use crate::context::AppContext;

/// Delay before the first character lands.
const REVEAL_START_MS: u32 = 900;
/// Pause after an ordinary character.
const PAUSE_SHORT_MS: u32 = 55;
/// Pause after a terminator.
const PAUSE_LONG_MS: u32 = 420;

/// Characters that earn the long pause.
fn is_terminator(c: char) -> bool {
    matches!(
        c,
        '。' | '，' | '、' | '！' | '？' | '：' | '；' | '.' | ',' | '!' | '?' | '\n'
    )
}

#[component]
pub fn ReadingScreen() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    // Computed once per mount; the reveal timer relies on this never moving.
    let Session {
        question, drawn, ..
    } = ctx.session.get_untracked();
    let spread: [TarotCard; 3] = drawn
        .try_into()
        .expect("reading screen requires a full spread");
    let full_text = reading::generate(&question, &spread);
    let chars = StoredValue::new(full_text.chars().collect::<Vec<char>>());
    let total = chars.with_value(|c| c.len());

    let (shown, set_shown) = signal(0usize);
    let (complete, set_complete) = signal(false);

    // Liveness flag for the reveal task: flipped on unmount so a pending
    // tick never mutates a dead screen.
    let alive = StoredValue::new(true);
    on_cleanup(move || {
        let _ = alive.try_update_value(|a| *a = false);
    });

    // Reveal loop. Each tick schedules the next only after running, so
    // ticks for one mount are strictly sequential.
    spawn_local(async move {
        TimeoutFuture::new(REVEAL_START_MS).await;
        loop {
            if !alive.try_get_value().unwrap_or(false) {
                return;
            }
            if complete.try_get_untracked().unwrap_or(true) {
                return;
            }
            let cursor = match shown.try_get_untracked() {
                Some(cursor) => cursor,
                None => return,
            };
            if cursor >= total {
                let _ = set_complete.try_set(true);
                return;
            }
            let next = cursor + 1;
            if set_shown.try_set(next).is_some() {
                return;
            }
            let just_revealed = match chars.try_with_value(|c| c[next - 1]) {
                Some(c) => c,
                None => return,
            };
            let delay = if is_terminator(just_revealed) {
                PAUSE_LONG_MS
            } else {
                PAUSE_SHORT_MS
            };
            TimeoutFuture::new(delay).await;
        }
    });

    // Keep the text pinned to the bottom as it grows.
    let scroll_ref = NodeRef::<leptos::html::Div>::new();
    Effect::new(move |_| {
        let _ = shown.get();
        if let Some(el) = scroll_ref.get() {
            el.set_scroll_top(el.scroll_height());
        }
    });

    let skip = move |_| {
        set_shown.set(total);
        set_complete.set(true);
    };

    let restart = move |_| {
        ctx.dispatch(SessionAction::Restart);
    };

    let displayed = move || {
        chars
            .try_with_value(|c| c[..shown.get().min(c.len())].iter().collect::<String>())
            .unwrap_or_default()
    };

    view! {
        <section class="screen reading-screen">
            <h2 class="screen-title">"命运的低语"</h2>
            <OrnamentDivider/>

            <div class="spread-row">
                {spread.iter().enumerate().map(|(rank, card)| {
                    let style = format!(
                        "background: linear-gradient(160deg, {}, {});",
                        card.colors.from, card.colors.to
                    );
                    view! {
                        <div class="spread-mini" style=style>
                            <span class="spread-mini-symbol">{card.symbol.clone()}</span>
                            <span class="spread-mini-name">{card.name.clone()}</span>
                            <span class="spread-mini-position">{position_label(rank)}</span>
                        </div>
                    }
                }).collect_view()}
            </div>

            <div class="reading-text" node_ref=scroll_ref>
                <span>{displayed}</span>
                <Show when=move || !complete.get()>
                    <span class="caret"></span>
                </Show>
            </div>

            <Show when=move || !complete.get()>
                <button class="skip-link" on:click=skip>
                    "跳过动画"
                </button>
            </Show>
            <Show when=move || complete.get()>
                <button class="primary-btn restart-btn" on:click=restart>
                    "再问一次"
                </button>
            </Show>
        </section>
    }
}
