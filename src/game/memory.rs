//! The memory game board and flip resolution.
//!
//! ## Flip resolution
//!
//! Each accepted `flip_card` is one move. With no pending card the flip
//! starts a new pair attempt; with a pending card it completes one, either
//! matching both cards or leaving both face up and unmatched.
//!
//! Mismatched cards stay visible so the player can see them. The caller
//! turns them back with `hide_unmatched` after its own delay; if it never
//! does, the next pair attempt hides them before revealing its first card.

use tracing::{debug, info, warn};

use crate::board::BoardSize;
use crate::cards::{Card, ImageId, DEFAULT_ICONS};
use crate::core::{GameConfig, GameRng, MemoryError, Result};

/// One game on one board.
///
/// Owns the shuffled cards and the move/pair counters. Replace the whole
/// value to restart; nothing is shared between instances.
#[derive(Clone, Debug)]
pub struct MemoryGame {
    board_size: BoardSize,
    /// Image names the card identifiers index into.
    images: Vec<String>,
    cards: Vec<Card>,
    /// The face-up, unmatched card waiting for its partner.
    index_of_single_face_up_card: Option<usize>,
    num_pairs_found: usize,
    num_moves: usize,
    seed: u64,
}

impl MemoryGame {
    /// Build a shuffled board.
    ///
    /// `custom_images` must hold exactly one image per pair. Without it,
    /// `num_pairs` distinct icons are drawn from `DEFAULT_ICONS`.
    ///
    /// # Errors
    ///
    /// `ConstructionMismatch` if the custom list has the wrong length.
    pub fn new(
        board_size: BoardSize,
        custom_images: Option<Vec<String>>,
        rng: &GameRng,
    ) -> Result<Self> {
        let num_pairs = board_size.num_pairs();
        let is_custom = custom_images.is_some();

        let images = match custom_images {
            Some(images) if images.len() != num_pairs => {
                warn!(
                    expected = num_pairs,
                    actual = images.len(),
                    "Custom image list does not fit board"
                );
                return Err(MemoryError::ConstructionMismatch {
                    expected: num_pairs,
                    actual: images.len(),
                });
            }
            Some(images) => images,
            None => rng
                .for_context("icons")
                .choose_multiple(&DEFAULT_ICONS, num_pairs)
                .into_iter()
                .map(String::from)
                .collect(),
        };

        let mut identifiers: Vec<ImageId> = (0..images.len() as u32)
            .flat_map(|id| [ImageId::new(id); 2])
            .collect();
        rng.for_context("deck").shuffle(&mut identifiers);

        debug!(size = %board_size, seed = rng.seed(), custom = is_custom, "Created memory game");

        Ok(Self {
            board_size,
            images,
            cards: identifiers.into_iter().map(Card::new).collect(),
            index_of_single_face_up_card: None,
            num_pairs_found: 0,
            num_moves: 0,
            seed: rng.seed(),
        })
    }

    /// Build a board from a configuration, drawing a seed if none is set.
    ///
    /// # Errors
    ///
    /// `ConstructionMismatch` if the custom list has the wrong length.
    pub fn from_config(config: &GameConfig) -> Result<Self> {
        let rng = config.seed.map_or_else(GameRng::from_random_seed, GameRng::new);
        Self::new(config.board_size, config.custom_images.clone(), &rng)
    }

    /// Flip the card at `position` face up and resolve the pair attempt.
    ///
    /// Returns `true` iff this flip completed a match.
    ///
    /// # Errors
    ///
    /// - `InvalidPosition` if `position` is off the board
    /// - `RedundantFlip` if the card is already face up (or matched)
    ///
    /// Rejected flips leave the game untouched and are not counted as moves.
    pub fn flip_card(&mut self, position: usize) -> Result<bool> {
        if self.card(position)?.is_face_up {
            warn!(position, "Rejected flip of a face-up card");
            return Err(MemoryError::RedundantFlip { position });
        }

        self.num_moves += 1;
        let found_match = match self.index_of_single_face_up_card.take() {
            None => {
                self.hide_unmatched();
                self.cards[position].is_face_up = true;
                self.index_of_single_face_up_card = Some(position);
                false
            }
            Some(pending) => {
                self.cards[position].is_face_up = true;
                self.check_for_match(pending, position)
            }
        };

        debug!(position, moves = self.num_moves, found_match, "Flipped card");
        Ok(found_match)
    }

    fn check_for_match(&mut self, first: usize, second: usize) -> bool {
        if self.cards[first].identifier != self.cards[second].identifier {
            return false;
        }

        self.cards[first].is_matched = true;
        self.cards[second].is_matched = true;
        self.num_pairs_found += 1;
        info!(pairs_found = self.num_pairs_found, "Found a match");

        if self.have_won_game() {
            info!(moves = self.num_moves, "Game won");
        }
        true
    }

    /// Turn face-up, unmatched cards back over, except the pending one.
    ///
    /// Returns how many cards were hidden. Never changes the counters.
    pub fn hide_unmatched(&mut self) -> usize {
        let pending = self.index_of_single_face_up_card;
        let mut hidden = 0;
        for (index, card) in self.cards.iter_mut().enumerate() {
            if card.is_revealed_unmatched() && pending != Some(index) {
                card.is_face_up = false;
                hidden += 1;
            }
        }
        hidden
    }

    /// Is the card at `position` showing?
    ///
    /// # Errors
    ///
    /// `InvalidPosition` if `position` is off the board.
    pub fn is_card_face_up(&self, position: usize) -> Result<bool> {
        Ok(self.card(position)?.is_face_up)
    }

    /// Card at `position`.
    ///
    /// # Errors
    ///
    /// `InvalidPosition` if `position` is off the board.
    pub fn card(&self, position: usize) -> Result<&Card> {
        self.cards.get(position).ok_or(MemoryError::InvalidPosition {
            position,
            len: self.cards.len(),
        })
    }

    /// Image name shown by the card at `position`.
    ///
    /// # Errors
    ///
    /// `InvalidPosition` if `position` is off the board.
    pub fn image_for(&self, position: usize) -> Result<&str> {
        let card = self.card(position)?;
        Ok(&self.images[card.identifier.index()])
    }

    /// All pairs found?
    #[must_use]
    pub fn have_won_game(&self) -> bool {
        self.num_pairs_found == self.board_size.num_pairs()
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn images(&self) -> &[String] {
        &self.images
    }

    #[must_use]
    pub fn board_size(&self) -> BoardSize {
        self.board_size
    }

    #[must_use]
    pub fn num_moves(&self) -> usize {
        self.num_moves
    }

    #[must_use]
    pub fn num_pairs_found(&self) -> usize {
        self.num_pairs_found
    }

    /// Position of the card awaiting a partner flip, if any.
    #[must_use]
    pub fn pending_card(&self) -> Option<usize> {
        self.index_of_single_face_up_card
    }

    /// Seed the board was shuffled with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}
