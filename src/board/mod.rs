//! Board geometry.
//!
//! `BoardSize` is pure lookup data: grid dimensions and pair counts for each
//! supported shape, plus the mapping from a custom game's card count to a shape.

pub mod size;

pub use size::BoardSize;
