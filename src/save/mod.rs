//! Persistence of the high score: one bitcode-encoded record in a single file.

mod atomic_write;
mod save_error;

pub use atomic_write::atomic_write;
pub use save_error::SaveError;

use std::path::Path;

use bevy::{app::AppExit, prelude::*};
use bitcode::{Decode, Encode};

use crate::resources::{HighScore, SavePath};

#[derive(Encode, Decode, Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighScoreRecord {
    pub high_score: u32,
}

impl HighScoreRecord {
    pub fn encode(&self) -> Vec<u8> {
        bitcode::encode(self)
    }

    pub fn decode(bytes: &[u8]) -> Result<Self, SaveError> {
        Ok(bitcode::decode(bytes)?)
    }
}

/// Reads the high score at `path`. A missing file is a fresh install and yields 0.
pub fn load_high_score(path: &Path) -> Result<u32, SaveError> {
    match std::fs::read(path) {
        Ok(bytes) => Ok(HighScoreRecord::decode(&bytes)?.high_score),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(0),
        Err(e) => Err(e.into()),
    }
}

pub fn save_high_score(path: &Path, high_score: u32) -> Result<(), SaveError> {
    let bytes = HighScoreRecord { high_score }.encode();
    atomic_write(path, &bytes)?;

    Ok(())
}

/// Saves and logs the outcome; a failed save never interrupts the game.
pub fn persist_high_score(path: &Path, high_score: u32) {
    match save_high_score(path, high_score) {
        Ok(()) => info!("saved high score {} to {}", high_score, path.display()),
        Err(e) => warn!("could not save high score to {}: {e}", path.display()),
    }
}

pub fn load_high_score_system(mut commands: Commands, save_path: Res<SavePath>) {
    let high_score = match load_high_score(save_path.path()) {
        Ok(high_score) => high_score,
        Err(e) => {
            warn!(
                "could not read high score from {}: {e}; starting from 0",
                save_path.path().display()
            );
            0
        }
    };

    info!("high score is {high_score}");
    commands.insert_resource(HighScore(high_score));
}

pub fn save_high_score_on_exit(
    mut exit_events: EventReader<AppExit>,
    high_score: Res<HighScore>,
    save_path: Res<SavePath>,
) {
    if exit_events.read().next().is_some() {
        persist_high_score(save_path.path(), high_score.0);
    }
}
