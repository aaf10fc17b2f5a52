//! Core building blocks: RNG, configuration, errors.
//!
//! These are independent of any particular board and are shared by the
//! game model and the session controller.

pub mod config;
pub mod error;
pub mod rng;

pub use config::GameConfig;
pub use error::{MemoryError, Result};
pub use rng::GameRng;
