//! Game scenario tests.
//!
//! These tests drive `MemoryGame` through whole pair attempts and games:
//! - Fresh boards for each size
//! - Matching and mismatching pairs
//! - Playing a board to the end
//! - Determinism of seeded boards

use std::collections::HashMap;

use memory_match::{BoardSize, GameConfig, GameRng, ImageId, MemoryError, MemoryGame};

fn game(size: BoardSize, seed: u64) -> MemoryGame {
    MemoryGame::new(size, None, &GameRng::new(seed)).expect("default icons always fit")
}

/// Group positions by identifier.
fn pairs_of(game: &MemoryGame) -> Vec<(usize, usize)> {
    let mut positions: HashMap<ImageId, Vec<usize>> = HashMap::new();
    for (position, card) in game.cards().iter().enumerate() {
        positions.entry(card.identifier).or_default().push(position);
    }

    let mut pairs: Vec<_> = positions.into_values().map(|p| (p[0], p[1])).collect();
    pairs.sort_unstable();
    pairs
}

/// A fresh EASY board has 4 default icons, each on two cards.
#[test]
fn test_easy_board_setup() {
    let game = game(BoardSize::Easy, 42);

    assert_eq!(game.cards().len(), 8);
    assert_eq!(game.num_moves(), 0);
    assert_eq!(game.num_pairs_found(), 0);
    assert!(!game.have_won_game());

    let mut counts: HashMap<ImageId, usize> = HashMap::new();
    for card in game.cards() {
        *counts.entry(card.identifier).or_default() += 1;
    }
    assert_eq!(counts.len(), 4);
    assert!(counts.values().all(|&n| n == 2));
}

/// Every board size deals two cards per pair.
#[test]
fn test_every_size_deals_pairs() {
    for size in BoardSize::ALL {
        let game = game(size, 7);
        assert_eq!(game.cards().len(), size.num_cards());
        assert_eq!(pairs_of(&game).len(), size.num_pairs());
    }
}

/// Flipping both cards of a pair completes a match.
#[test]
fn test_matching_pair() {
    let mut game = game(BoardSize::Easy, 1);
    let (first, second) = pairs_of(&game)[0];

    assert!(!game.flip_card(first).unwrap());
    assert!(game.flip_card(second).unwrap());

    assert!(game.cards()[first].is_matched);
    assert!(game.cards()[second].is_matched);
    assert_eq!(game.num_pairs_found(), 1);
    assert_eq!(game.num_moves(), 2);
}

/// Flipping two different cards leaves both visible and unmatched.
#[test]
fn test_mismatched_pair() {
    let mut game = game(BoardSize::Easy, 2);
    let pairs = pairs_of(&game);
    let (first, second) = (pairs[0].0, pairs[1].0);

    game.flip_card(first).unwrap();
    assert!(!game.flip_card(second).unwrap());

    assert_eq!(game.num_moves(), 2);
    assert_eq!(game.pending_card(), None);
    for position in [first, second] {
        assert!(game.cards()[position].is_face_up);
        assert!(!game.cards()[position].is_matched);
    }
}

/// Four straight matches win an EASY game in eight moves.
#[test]
fn test_full_easy_game() {
    let mut game = game(BoardSize::Easy, 3);

    for (first, second) in pairs_of(&game) {
        game.flip_card(first).unwrap();
        assert!(game.flip_card(second).unwrap());
    }

    assert!(game.have_won_game());
    assert_eq!(game.num_pairs_found(), 4);
    assert_eq!(game.num_moves(), 8);
    assert!(game.cards().iter().all(|c| c.is_face_up && c.is_matched));

    // Nothing is left to flip
    for position in 0..8 {
        assert_eq!(game.flip_card(position), Err(MemoryError::RedundantFlip { position }));
    }
    assert_eq!(game.num_moves(), 8);
}

/// A game with mistakes still ends once every pair is found.
#[test]
fn test_game_with_mismatches() {
    let mut game = game(BoardSize::Medium, 4);
    let pairs = pairs_of(&game);

    // Miss once before each match
    for window in pairs.windows(2) {
        let (a, b) = (window[0].0, window[1].0);
        game.flip_card(a).unwrap();
        assert!(!game.flip_card(b).unwrap());
        game.hide_unmatched();
    }
    for (first, second) in &pairs {
        game.flip_card(*first).unwrap();
        assert!(game.flip_card(*second).unwrap());
    }

    assert!(game.have_won_game());
    assert_eq!(game.num_moves(), 2 * (pairs.len() - 1) + 2 * pairs.len());
}

/// A HARD board rejects a 10-image custom list.
#[test]
fn test_hard_custom_wrong_length() {
    let images: Vec<String> = (0..10).map(|i| format!("https://example.com/{i}.jpg")).collect();
    let config = GameConfig::new(BoardSize::Hard).with_custom_images(images);

    assert_eq!(
        MemoryGame::from_config(&config).unwrap_err(),
        MemoryError::ConstructionMismatch { expected: 12, actual: 10 }
    );
}

/// Custom images are used as given, each on two cards.
#[test]
fn test_custom_board() {
    let images: Vec<String> = (0..12).map(|i| format!("https://example.com/{i}.jpg")).collect();
    let config = GameConfig::new(BoardSize::Hard).with_custom_images(images.clone()).with_seed(5);
    let game = MemoryGame::from_config(&config).unwrap();

    assert_eq!(game.images(), images.as_slice());
    for image in &images {
        let shown = (0..24).filter(|&p| game.image_for(p).unwrap() == image).count();
        assert_eq!(shown, 2);
    }
}

/// Same seed and inputs give the same board; different seeds differ.
#[test]
fn test_seeded_determinism() {
    let a = game(BoardSize::Hard, 99);
    let b = game(BoardSize::Hard, 99);
    assert_eq!(a.cards(), b.cards());
    assert_eq!(a.images(), b.images());

    let c = game(BoardSize::Hard, 100);
    assert_ne!(a.cards(), c.cards());
}

/// Unseeded boards draw independent seeds.
#[test]
fn test_unseeded_boards_differ() {
    let config = GameConfig::new(BoardSize::Hard);
    let a = MemoryGame::from_config(&config).unwrap();
    let b = MemoryGame::from_config(&config).unwrap();

    assert_ne!(a.seed(), b.seed());
    assert!(a.cards() != b.cards() || a.images() != b.images());
}

/// Two games never share state.
#[test]
fn test_games_are_independent() {
    let mut a = game(BoardSize::Easy, 6);
    let b = a.clone();

    a.flip_card(0).unwrap();

    assert_eq!(a.num_moves(), 1);
    assert_eq!(b.num_moves(), 0);
    assert!(!b.cards()[0].is_face_up);
}
