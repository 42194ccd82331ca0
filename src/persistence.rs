#![cfg(feature = "std")]
//! Save and resume matches. One slot per board size.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use crate::config::BoardSize;
use crate::game::Game;

/// File holding the saved match for `size` inside `dir`.
pub fn save_path(dir: &Path, size: BoardSize) -> PathBuf {
    dir.join(format!("seabattle-{}x{}.sav", size.length(), size.width()))
}

/// Write a full snapshot of `game`.
pub fn save(dir: &Path, game: &Game) -> anyhow::Result<()> {
    fs::create_dir_all(dir)?;
    let path = save_path(dir, game.size());
    let writer = BufWriter::new(File::create(&path)?);
    bincode::serialize_into(writer, game)?;
    log::info!("saved match to {}", path.display());
    Ok(())
}

/// Load the saved match for `size`. Any failure, including a snapshot that
/// does not pass [`Game::validate`], means there is no saved game.
pub fn load(dir: &Path, size: BoardSize) -> Option<Game> {
    let path = save_path(dir, size);
    if !path.exists() {
        return None;
    }
    let result = File::open(&path)
        .map_err(anyhow::Error::from)
        .and_then(|f| Ok(bincode::deserialize_from::<_, Game>(BufReader::new(f))?));
    match result {
        Ok(game) if game.size() == size => match game.validate() {
            Ok(()) => Some(game),
            Err(e) => {
                log::warn!("rejected {}: {}", path.display(), e);
                None
            }
        },
        Ok(_) => {
            log::warn!("{} holds a match of a different size", path.display());
            None
        }
        Err(e) => {
            log::warn!("could not load {}: {}", path.display(), e);
            None
        }
    }
}

/// Remove the saved match for `size`, if any.
pub fn discard(dir: &Path, size: BoardSize) {
    let path = save_path(dir, size);
    if let Err(e) = fs::remove_file(&path) {
        if e.kind() != std::io::ErrorKind::NotFound {
            log::warn!("could not remove {}: {}", path.display(), e);
        }
    }
}
