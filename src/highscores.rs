//! High-score persistence
//!
//! A single integer survives between sessions. Storage is a capability the
//! driver injects; failures never reach gameplay. A broken or missing file
//! reads as 0 and a failed write is dropped with a warning.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// High-score storage capability. `load` returns 0 on any failure; `save`
/// failures are silently ignored.
pub trait HighScoreStore {
    fn load(&mut self) -> u64;
    fn save(&mut self, score: u64);
}

/// On-disk JSON envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
struct HighScoreFile {
    high_score: u64,
}

/// JSON-file-backed store
#[derive(Debug, Clone)]
pub struct FileHighScores {
    path: PathBuf,
}

impl FileHighScores {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl HighScoreStore for FileHighScores {
    fn load(&mut self) -> u64 {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(err) => {
                log::info!("no high score at {}: {err}", self.path.display());
                return 0;
            }
        };
        match serde_json::from_str::<HighScoreFile>(&json) {
            Ok(file) => file.high_score,
            Err(err) => {
                log::warn!("corrupt high score file {}: {err}", self.path.display());
                0
            }
        }
    }

    fn save(&mut self, score: u64) {
        let file = HighScoreFile { high_score: score };
        let json = match serde_json::to_string(&file) {
            Ok(json) => json,
            Err(err) => {
                log::warn!("failed to encode high score: {err}");
                return;
            }
        };
        if let Err(err) = fs::write(&self.path, json) {
            log::warn!("failed to save high score to {}: {err}", self.path.display());
        }
    }
}

/// In-memory store for tests and headless runs
#[derive(Debug, Clone, Copy, Default)]
pub struct MemoryHighScores {
    score: u64,
    saves: u32,
}

impl MemoryHighScores {
    pub fn with_score(score: u64) -> Self {
        Self { score, saves: 0 }
    }

    /// Number of times `save` was called
    pub fn saves(&self) -> u32 {
        self.saves
    }
}

impl HighScoreStore for MemoryHighScores {
    fn load(&mut self) -> u64 {
        self.score
    }

    fn save(&mut self, score: u64) {
        self.score = score;
        self.saves += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("teeter-pop-{}-{}", std::process::id(), name))
    }

    #[test]
    fn missing_file_reads_as_zero() {
        let mut store = FileHighScores::new(scratch_path("missing.json"));
        assert_eq!(store.load(), 0);
    }

    #[test]
    fn save_then_load_round_trips() {
        let path = scratch_path("roundtrip.json");
        let mut store = FileHighScores::new(&path);
        store.save(4321);
        assert_eq!(store.load(), 4321);
        let _ = fs::remove_file(path);
    }

    #[test]
    fn corrupt_file_reads_as_zero() {
        let path = scratch_path("corrupt.json");
        fs::write(&path, "not json {").unwrap();
        let mut store = FileHighScores::new(&path);
        assert_eq!(store.load(), 0);
        let _ = fs::remove_file(path);
    }

    #[test]
    fn unwritable_path_is_swallowed() {
        let mut store = FileHighScores::new("/definitely/not/a/real/dir/hs.json");
        store.save(10);
        assert_eq!(store.load(), 0);
    }

    #[test]
    fn memory_store_counts_saves() {
        let mut store = MemoryHighScores::with_score(5);
        assert_eq!(store.load(), 5);
        store.save(9);
        assert_eq!(store.load(), 9);
        assert_eq!(store.saves(), 1);
    }
}
