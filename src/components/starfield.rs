//! Starfield Layer
//!
//! A fixed count of drifting glyphs, randomized once at mount and looped
//! forever by CSS. No interaction, no state after the initial roll.

use leptos::prelude::*;
use rand::Rng;

const STAR_COUNT: usize = 36;
const STAR_GLYPHS: [&str; 4] = ["✦", "✧", "⋆", "·"];

struct Star {
    glyph: &'static str,
    left_pct: f32,
    delay_s: f32,
    duration_s: f32,
    size_rem: f32,
}

#[component]
pub fn Starfield() -> impl IntoView {
    let stars: Vec<Star> = {
        let mut rng = rand::thread_rng();
        (0..STAR_COUNT)
            .map(|_| Star {
                glyph: STAR_GLYPHS[rng.gen_range(0..STAR_GLYPHS.len())],
                left_pct: rng.gen_range(0.0..100.0),
                delay_s: rng.gen_range(0.0..12.0),
                duration_s: rng.gen_range(8.0..20.0),
                size_rem: rng.gen_range(0.5..1.1),
            })
            .collect()
    };

    view! {
        <div class="starfield" aria-hidden="true">
            {stars.into_iter().map(|star| {
                let style = format!(
                    "left: {:.1}%; animation-delay: {:.1}s; animation-duration: {:.1}s; font-size: {:.2}rem;",
                    star.left_pct, star.delay_s, star.duration_s, star.size_rem
                );
                view! { <span class="star" style=style>{star.glyph}</span> }
            }).collect_view()}
        </div>
    }
}
