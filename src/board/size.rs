//! Supported grid shapes.

use serde::{Deserialize, Serialize};

use crate::core::MemoryError;

/// Grid shape of a board. A closed set; every variant has an even card count.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BoardSize {
    /// 4 x 2, 4 pairs.
    #[default]
    Easy,
    /// 6 x 3, 9 pairs.
    Medium,
    /// 6 x 4, 12 pairs.
    Hard,
}

/// (width, height) per variant, in declaration order.
const DIMENSIONS: [(usize, usize); 3] = [(4, 2), (6, 3), (6, 4)];

impl BoardSize {
    /// All variants, smallest first.
    pub const ALL: [BoardSize; 3] = [BoardSize::Easy, BoardSize::Medium, BoardSize::Hard];

    #[must_use]
    pub const fn dimensions(self) -> (usize, usize) {
        DIMENSIONS[self as usize]
    }

    /// Number of columns.
    #[must_use]
    pub const fn width(self) -> usize {
        self.dimensions().0
    }

    /// Number of rows.
    #[must_use]
    pub const fn height(self) -> usize {
        self.dimensions().1
    }

    #[must_use]
    pub const fn num_cards(self) -> usize {
        let (w, h) = self.dimensions();
        w * h
    }

    #[must_use]
    pub const fn num_pairs(self) -> usize {
        self.num_cards() / 2
    }

    /// Pick the board for a custom game with `card_count` cards.
    ///
    /// Chooses the smallest variant holding at least `ceil(card_count / 2)`
    /// pairs, falling back to `Hard` when nothing is big enough:
    /// `0..=8 -> Easy`, `9..=18 -> Medium`, `19.. -> Hard`.
    #[must_use]
    pub fn from_card_count(card_count: usize) -> Self {
        let pairs = card_count.div_ceil(2);
        Self::ALL
            .into_iter()
            .find(|size| size.num_pairs() >= pairs)
            .unwrap_or(BoardSize::Hard)
    }

    /// Upper-case name used in status labels.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            BoardSize::Easy => "EASY",
            BoardSize::Medium => "MEDIUM",
            BoardSize::Hard => "HARD",
        }
    }
}

impl std::fmt::Display for BoardSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {} X {}", self.name(), self.width(), self.height())
    }
}

impl std::str::FromStr for BoardSize {
    type Err = MemoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|size| size.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| MemoryError::UnknownBoardSize(s.to_string()))
    }
}
