//! Error type shared by the game core and the session controller.

use thiserror::Error;

/// Errors raised by board construction, flips and session loading.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MemoryError {
    /// A custom image list does not cover the board exactly once per pair.
    #[error("custom board needs {expected} images, got {actual}")]
    ConstructionMismatch { expected: usize, actual: usize },

    /// A flip targeted a position outside the board.
    #[error("position {position} is outside the board of {len} cards")]
    InvalidPosition { position: usize, len: usize },

    /// A flip targeted a card that is already showing.
    #[error("card at position {position} is already face up")]
    RedundantFlip { position: usize },

    /// A downloaded custom game carried no image list.
    #[error("custom game '{name}' has no images")]
    MissingImages { name: String },

    /// A board size name did not match any variant.
    #[error("unknown board size '{0}'")]
    UnknownBoardSize(String),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, MemoryError>;
