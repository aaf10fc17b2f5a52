//! Custom game documents.
//!
//! A custom game is stored remotely as `{ "images": ["<url>", ...] }`.
//! Fetching it is the caller's job; this is only the decoded shape.

use serde::{Deserialize, Serialize};

/// Image list of a downloaded custom game.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserImageList {
    /// Image URLs, one per pair. Missing in malformed documents.
    #[serde(default)]
    pub images: Option<Vec<String>>,
}

impl UserImageList {
    #[must_use]
    pub fn new(images: Vec<String>) -> Self {
        Self { images: Some(images) }
    }

    /// Card count the images would produce (two per image).
    #[must_use]
    pub fn card_count(&self) -> Option<usize> {
        self.images.as_ref().map(|images| images.len() * 2)
    }
}
