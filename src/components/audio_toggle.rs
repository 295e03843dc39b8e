//! Audio Toggle Component
//!
//! Lazily builds the ambient drone on first enable; disabling before any
//! context exists is a no-op. The graph is torn down on unmount regardless
//! of play state.

use leptos::prelude::*;

use crate::audio::AmbientDrone;

#[component]
pub fn AudioToggle() -> impl IntoView {
    let (playing, set_playing) = signal(false);
    // JS audio objects are not Send; keep them in arena-local storage.
    let drone = StoredValue::new_local(None::<AmbientDrone>);

    let toggle = move |_| {
        if playing.get() {
            if let Some(active) = drone.try_update_value(|slot| slot.take()).flatten() {
                active.stop();
            }
            set_playing.set(false);
        } else {
            match AmbientDrone::start() {
                Ok(active) => {
                    drone.set_value(Some(active));
                    set_playing.set(true);
                }
                Err(err) => web_sys::console::warn_1(&err),
            }
        }
    };

    on_cleanup(move || {
        if let Some(active) = drone.try_update_value(|slot| slot.take()).flatten() {
            active.stop();
        }
    });

    view! {
        <button
            class=move || if playing.get() { "audio-toggle on" } else { "audio-toggle" }
            title=move || if playing.get() { "关闭环境音" } else { "开启环境音" }
            on:click=toggle
        >
            "♪"
        </button>
    }
}
