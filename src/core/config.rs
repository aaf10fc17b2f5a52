//! Game configuration.
//!
//! Callers describe a board with `GameConfig` and hand it to
//! `MemoryGame::from_config` or a `GameSession`:
//! - `board_size`: grid shape and pair count
//! - `custom_images`: optional image list replacing the built-in icons
//! - `seed`: optional shuffle seed; `None` draws a fresh one per game

use serde::{Deserialize, Serialize};

use crate::board::BoardSize;

/// Complete configuration for building a game.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Grid shape.
    pub board_size: BoardSize,

    /// Custom image identifiers, one per pair. `None` uses the default icons.
    #[serde(default)]
    pub custom_images: Option<Vec<String>>,

    /// Shuffle seed. `None` for a random board every time.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl GameConfig {
    /// Create a configuration for the given board size with default icons.
    #[must_use]
    pub fn new(board_size: BoardSize) -> Self {
        Self {
            board_size,
            custom_images: None,
            seed: None,
        }
    }

    /// Use a custom image list instead of the default icons.
    #[must_use]
    pub fn with_custom_images(mut self, images: Vec<String>) -> Self {
        self.custom_images = Some(images);
        self
    }

    /// Fix the shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
