//! Presentation-agnostic session controller.
//!
//! `GameSession` holds what a game screen needs between taps: the current
//! board size, an optional custom game, and the live `MemoryGame`. It applies
//! the tap guards (game over, card already showing) before flipping and
//! produces the status texts a screen displays. Rendering, dialogs and
//! downloading custom games stay with the caller.

mod controller;

pub use controller::{FlipOutcome, GameSession, APP_NAME};
