//! Headless domain logic for the tarot reading frontend.
//!
//! Everything here is DOM-free and runs under native tests as well as wasm:
//! the card catalog, deck shuffling, three-card spread bookkeeping, reading
//! generation, and the cross-screen session state machine.

pub mod cards;
pub mod reading;
pub mod session;
pub mod shuffle;
pub mod spread;
