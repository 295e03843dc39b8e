//! UI Components
//!
//! Reusable Leptos components.

mod audio_toggle;
mod card_tile;
mod landing;
mod ornament;
mod reading;
mod selection;
mod starfield;

pub use audio_toggle::AudioToggle;
pub use card_tile::CardTile;
pub use landing::LandingScreen;
pub use ornament::{MoonEmblem, OrnamentDivider};
pub use reading::ReadingScreen;
pub use selection::SelectionScreen;
pub use starfield::Starfield;
