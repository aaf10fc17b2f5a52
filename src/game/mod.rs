//! The game model.
//!
//! `MemoryGame` owns one shuffled board and resolves flips synchronously.
//! It has no timers and performs no I/O; presentation layers drive it with
//! `flip_card` and read it back through the query methods.

mod memory;

pub use memory::MemoryGame;
