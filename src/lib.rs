//! # memory-match
//!
//! Game-state core for a memory-matching ("concentration") card game.
//!
//! A grid of face-down cards is revealed two at a time; matching pairs stay
//! face up, and the player wins once every pair is found.
//!
//! ## Design Principles
//!
//! 1. **Synchronous**: Every operation runs to completion. No timers, no I/O.
//!    Flip-back delays belong to the caller.
//!
//! 2. **Deterministic**: A board is a pure function of its size, images and
//!    seed. Unseeded games still record the seed they drew.
//!
//! 3. **Guarded**: Out-of-range and repeated flips are errors, not silent
//!    no-ops, so a move is never counted twice.
//!
//! ## Modules
//!
//! - `core`: RNG, configuration, errors
//! - `board`: Supported grid shapes
//! - `cards`: Card state, default icons, custom image documents
//! - `game`: `MemoryGame`, flip resolution and win detection
//! - `session`: Screen controller driving one game at a time
//!
//! ## Example
//!
//! ```
//! use memory_match::{BoardSize, GameConfig, MemoryGame};
//!
//! let mut game = MemoryGame::from_config(&GameConfig::new(BoardSize::Easy).with_seed(7)).unwrap();
//! assert_eq!(game.cards().len(), 8);
//!
//! assert_eq!(game.flip_card(0), Ok(false));
//! assert_eq!(game.num_moves(), 1);
//! assert!(!game.have_won_game());
//! ```

pub mod board;
pub mod cards;
pub mod core;
pub mod game;
pub mod session;

// Re-export commonly used types
pub use crate::core::{GameConfig, GameRng, MemoryError, Result};

pub use crate::board::BoardSize;

pub use crate::cards::{Card, ImageId, UserImageList, DEFAULT_ICONS};

pub use crate::game::MemoryGame;

pub use crate::session::{FlipOutcome, GameSession, APP_NAME};
