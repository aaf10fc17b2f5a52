//! Cards and the images they show.
//!
//! - `Card`: per-cell state (pair key, face-up, matched)
//! - `ImageId`: the pair key, an index into a game's image list
//! - `DEFAULT_ICONS`: built-in images for non-custom games
//! - `UserImageList`: decoded custom game document

pub mod card;
pub mod icons;
pub mod image_list;

pub use card::{Card, ImageId};
pub use icons::DEFAULT_ICONS;
pub use image_list::UserImageList;
