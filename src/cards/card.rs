//! Card state on the board.
//!
//! A `Card` is one cell of the grid. Its `identifier` is the pair key: an
//! index into the game's image list, shared by exactly two cards.

use serde::{Deserialize, Serialize};

/// Index into a game's image list. Two cards share each id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ImageId(pub u32);

impl ImageId {
    /// Create a new image ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Position in the image list.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for ImageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Image({})", self.0)
    }
}

/// A single card on the board.
///
/// `is_matched` implies `is_face_up`; the game only sets `is_matched` on
/// cards it has already turned over, and never clears it.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Pair key.
    pub identifier: ImageId,

    /// Is the image showing?
    pub is_face_up: bool,

    /// Has this card been paired?
    pub is_matched: bool,
}

impl Card {
    /// Create a face-down, unmatched card.
    #[must_use]
    pub const fn new(identifier: ImageId) -> Self {
        Self {
            identifier,
            is_face_up: false,
            is_matched: false,
        }
    }

    /// Face up but not yet paired.
    #[must_use]
    pub const fn is_revealed_unmatched(&self) -> bool {
        self.is_face_up && !self.is_matched
    }
}
