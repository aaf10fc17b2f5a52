//! Built-in icon set used when a game has no custom images.

/// Default icon asset names. Large enough for the biggest board.
pub const DEFAULT_ICONS: [&str; 12] = [
    "ic_face",
    "ic_flower",
    "ic_gift",
    "ic_heart",
    "ic_home",
    "ic_lightning",
    "ic_moon",
    "ic_plane",
    "ic_school",
    "ic_send",
    "ic_star",
    "ic_work",
];
