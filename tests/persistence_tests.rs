#![cfg(feature = "std")]

mod common;

use std::fs;
use std::path::PathBuf;

use common::fixed_game;
use seabattle::{persistence, BoardSize};

fn temp_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("seabattle-{}-{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    dir
}

#[test]
fn test_save_and_load_roundtrip() {
    let dir = temp_dir("roundtrip");
    let mut game = fixed_game();
    game.shoot(0, 0).unwrap();
    game.shoot(4, 4).unwrap();
    game.shoot(1, 3).unwrap();

    persistence::save(&dir, &game).unwrap();
    assert!(persistence::save_path(&dir, game.size()).exists());
    let loaded = persistence::load(&dir, game.size()).expect("saved game");
    assert_eq!(loaded, game);
    assert_eq!(loaded.turn(), 1);

    persistence::discard(&dir, game.size());
    assert!(persistence::load(&dir, game.size()).is_none());
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_missing_save_is_none() {
    let dir = temp_dir("missing");
    assert!(persistence::load(&dir, BoardSize::new(5, 5).unwrap()).is_none());
    // discarding nothing is fine
    persistence::discard(&dir, BoardSize::new(5, 5).unwrap());
}

#[test]
fn test_corrupt_save_is_none() {
    let dir = temp_dir("corrupt");
    let size = BoardSize::new(5, 5).unwrap();
    fs::create_dir_all(&dir).unwrap();
    fs::write(persistence::save_path(&dir, size), b"not a game").unwrap();
    assert!(persistence::load(&dir, size).is_none());
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_save_for_other_size_is_none() {
    let dir = temp_dir("mismatch");
    let game = fixed_game();
    persistence::save(&dir, &game).unwrap();
    let other = BoardSize::new(6, 6).unwrap();
    fs::rename(
        persistence::save_path(&dir, game.size()),
        persistence::save_path(&dir, other),
    )
    .unwrap();
    assert!(persistence::load(&dir, other).is_none());
    let _ = fs::remove_dir_all(&dir);
}

/// Saves a fresh `fixed_game`, lets `edit` tamper with the encoded bytes and
/// returns what `load` makes of the result.
fn load_tampered(name: &str, edit: impl FnOnce(&mut Vec<u8>)) -> Option<seabattle::Game> {
    let dir = temp_dir(name);
    let game = fixed_game();
    persistence::save(&dir, &game).unwrap();
    let path = persistence::save_path(&dir, game.size());
    let mut bytes = fs::read(&path).unwrap();
    edit(&mut bytes);
    fs::write(&path, &bytes).unwrap();
    let loaded = persistence::load(&dir, game.size());
    let _ = fs::remove_dir_all(&dir);
    loaded
}

#[test]
fn test_untouched_save_passes_validation() {
    let loaded = load_tampered("untouched", |_| {});
    assert_eq!(loaded, Some(fixed_game()));
}

#[test]
fn test_save_with_bad_turn_is_none() {
    // trailing fields: turn (u64), host (u64), status tag (u32)
    let loaded = load_tampered("bad-turn", |bytes| {
        let n = bytes.len();
        bytes[n - 20] = 7;
    });
    assert!(loaded.is_none());
}

#[test]
fn test_save_with_bad_host_is_none() {
    let loaded = load_tampered("bad-host", |bytes| {
        let n = bytes.len();
        bytes[n - 12] = 5;
    });
    assert!(loaded.is_none());
}

#[test]
fn test_save_finished_without_defeat_is_none() {
    // status tag 1 is `Finished`, followed by the winner
    let loaded = load_tampered("bad-status", |bytes| {
        let n = bytes.len();
        bytes[n - 4] = 1;
        bytes.extend_from_slice(&0u64.to_le_bytes());
    });
    assert!(loaded.is_none());
}

#[test]
fn test_finished_game_roundtrip_validates() {
    let dir = temp_dir("finished");
    let mut game = fixed_game();
    for (x, y) in [(0, 0), (0, 1), (4, 4), (2, 2)] {
        game.shoot(x, y).unwrap();
    }
    assert_eq!(game.winner(), Some(0));
    assert!(game.validate().is_ok());
    persistence::save(&dir, &game).unwrap();
    assert_eq!(persistence::load(&dir, game.size()), Some(game));
    let _ = fs::remove_dir_all(&dir);
}
