//! Screen controller state.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::board::BoardSize;
use crate::cards::UserImageList;
use crate::core::{GameConfig, MemoryError, Result};
use crate::game::MemoryGame;

/// Title shown when no custom game is loaded.
pub const APP_NAME: &str = "Memory Matcher";

/// What a tap on a card did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlipOutcome {
    /// The game was already over; nothing changed.
    AlreadyWon,
    /// The card was already face up; nothing changed.
    InvalidMove,
    /// A card was turned over without completing a match.
    Flipped,
    /// A pair was completed.
    Matched { pairs_found: usize },
    /// The final pair was completed.
    Won { moves: usize },
}

impl FlipOutcome {
    /// Did the flip change the board?
    #[must_use]
    pub fn is_move(self) -> bool {
        !matches!(self, FlipOutcome::AlreadyWon | FlipOutcome::InvalidMove)
    }
}

/// Owns the current game and the choices that produced it.
///
/// Every restart builds a fresh `MemoryGame`; the old one is dropped whole.
#[derive(Clone, Debug)]
pub struct GameSession {
    config: GameConfig,
    game_name: Option<String>,
    game: MemoryGame,
}

impl GameSession {
    /// Start a session with its first game.
    ///
    /// # Errors
    ///
    /// `ConstructionMismatch` if the config's custom images don't fit its board.
    pub fn new(config: GameConfig) -> Result<Self> {
        let game = MemoryGame::from_config(&config)?;
        Ok(Self {
            config,
            game_name: None,
            game,
        })
    }

    /// Replace the game with a fresh board of the same size and images.
    ///
    /// # Errors
    ///
    /// `ConstructionMismatch` if the custom images don't fit the board.
    pub fn setup_board(&mut self) -> Result<()> {
        self.game = MemoryGame::from_config(&self.config)?;
        Ok(())
    }

    /// Switch to a default-icon board of another size.
    ///
    /// Drops any loaded custom game.
    ///
    /// # Errors
    ///
    /// Never in practice; default icons always fit.
    pub fn change_board_size(&mut self, board_size: BoardSize) -> Result<()> {
        let mut config = self.config.clone();
        config.board_size = board_size;
        config.custom_images = None;

        self.game = MemoryGame::from_config(&config)?;
        self.config = config;
        self.game_name = None;
        Ok(())
    }

    /// Install a downloaded custom game and start playing it.
    ///
    /// The board size follows `BoardSize::from_card_count`. On error the
    /// current game is left as it was.
    ///
    /// # Errors
    ///
    /// - `MissingImages` if the document has no image list
    /// - `ConstructionMismatch` if the image count fits no board exactly
    pub fn load_custom_game(&mut self, name: &str, image_list: UserImageList) -> Result<()> {
        let card_count = image_list.card_count();
        let (Some(card_count), Some(images)) = (card_count, image_list.images) else {
            warn!(name, "Invalid custom game data");
            return Err(MemoryError::MissingImages { name: name.to_string() });
        };

        let mut config = self.config.clone();
        config.board_size = BoardSize::from_card_count(card_count);
        config.custom_images = Some(images);

        self.game = MemoryGame::from_config(&config)?;
        self.config = config;
        self.game_name = Some(name.to_string());
        info!(name, size = %self.config.board_size, "Now playing custom game");
        Ok(())
    }

    /// Handle a tap on the card at `position`.
    ///
    /// # Errors
    ///
    /// `InvalidPosition` if `position` is off the board, even after a win.
    pub fn handle_flip(&mut self, position: usize) -> Result<FlipOutcome> {
        let face_up = self.game.is_card_face_up(position)?;
        if self.game.have_won_game() {
            return Ok(FlipOutcome::AlreadyWon);
        }
        if face_up {
            return Ok(FlipOutcome::InvalidMove);
        }

        if !self.game.flip_card(position)? {
            return Ok(FlipOutcome::Flipped);
        }
        if self.game.have_won_game() {
            Ok(FlipOutcome::Won {
                moves: self.game.num_moves(),
            })
        } else {
            Ok(FlipOutcome::Matched {
                pairs_found: self.game.num_pairs_found(),
            })
        }
    }

    /// Should restarting ask the player first?
    #[must_use]
    pub fn should_confirm_quit(&self) -> bool {
        self.game.num_moves() > 0 && !self.game.have_won_game()
    }

    /// Screen title: the custom game's name or the app name.
    #[must_use]
    pub fn title(&self) -> &str {
        self.game_name.as_deref().unwrap_or(APP_NAME)
    }

    /// Label shown before the first move, e.g. `EASY: 4 X 2`.
    #[must_use]
    pub fn board_label(&self) -> String {
        self.config.board_size.to_string()
    }

    #[must_use]
    pub fn moves_text(&self) -> String {
        format!("Moves: {}", self.game.num_moves())
    }

    #[must_use]
    pub fn pairs_text(&self) -> String {
        format!("Pairs: {} / {}", self.game.num_pairs_found(), self.config.board_size.num_pairs())
    }

    /// Fraction of pairs found, `0.0..=1.0`.
    #[must_use]
    pub fn progress(&self) -> f32 {
        self.game.num_pairs_found() as f32 / self.config.board_size.num_pairs() as f32
    }

    #[must_use]
    pub fn game(&self) -> &MemoryGame {
        &self.game
    }

    /// Mutable access, e.g. for the delayed `hide_unmatched`.
    pub fn game_mut(&mut self) -> &mut MemoryGame {
        &mut self.game
    }

    #[must_use]
    pub fn board_size(&self) -> BoardSize {
        self.config.board_size
    }

    #[must_use]
    pub fn game_name(&self) -> Option<&str> {
        self.game_name.as_deref()
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}
