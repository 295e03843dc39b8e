//! Application Context
//!
//! Shared state provided via Leptos Context API.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use tarot_core::cards::Catalog;
use tarot_core::session::{Session, SessionAction};

/// Total duration of the cosmetic veil shown around a screen swap.
pub const PAGE_FADE_MS: u32 = 600;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Cross-screen session state - read
    pub session: ReadSignal<Session>,
    /// Cross-screen session state - write
    set_session: WriteSignal<Session>,
    /// Whether the transition veil is currently up - read
    pub veiled: ReadSignal<bool>,
    set_veiled: WriteSignal<bool>,
    /// The parsed card catalog, shared with the screens
    pub catalog: StoredValue<Catalog>,
}

impl AppContext {
    pub fn new(
        session: (ReadSignal<Session>, WriteSignal<Session>),
        veiled: (ReadSignal<bool>, WriteSignal<bool>),
        catalog: StoredValue<Catalog>,
    ) -> Self {
        Self {
            session: session.0,
            set_session: session.1,
            veiled: veiled.0,
            set_veiled: veiled.1,
            catalog,
        }
    }

    /// Run one state-machine transition.
    ///
    /// The session changes immediately; the veil only masks the swap and is
    /// lowered again after `PAGE_FADE_MS`. A rejected action changes nothing
    /// and must not flash the veil.
    pub fn dispatch(&self, action: SessionAction) {
        let current = self.session.get_untracked();
        let next = current.apply(action);
        if next == current {
            return;
        }
        web_sys::console::log_1(&format!("[SESSION] page -> {:?}", next.page).into());
        self.set_session.set(next);

        self.set_veiled.set(true);
        let set_veiled = self.set_veiled;
        Timeout::new(PAGE_FADE_MS, move || {
            let _ = set_veiled.try_set(false);
        })
        .forget();
    }
}
