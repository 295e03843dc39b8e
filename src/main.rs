//! Tarot Frontend Entry Point

mod app;
mod audio;
mod components;
mod context;
mod styles;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
