//! Best-score persistence.
//!
//! The backing file holds a single decimal integer. A missing or unreadable
//! file counts as a best score of zero.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, info};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScoreError {
    #[error("Could not write score file '{path}': {source}")]
    Write {
        path: String,
        #[source]
        source: io::Error,
    },
}

pub trait ScoreStore {
    /// Best score recorded so far, 0 when absent or corrupt.
    fn read_best(&self) -> u32;

    /// Record `score` if it beats the stored best. Returns whether it did.
    fn write_if_greater(&mut self, score: u32) -> Result<bool, ScoreError>;
}

/// Score store backed by a plain text file.
pub struct FileScoreStore {
    path: PathBuf,
}

impl FileScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the file holding `0` if it does not exist yet.
    pub fn ensure_exists(&self) -> Result<(), ScoreError> {
        if self.path.exists() {
            return Ok(());
        }
        info!("[ScoreStore] Creating {}", self.path.display());
        self.write(0)
    }

    fn write(&self, score: u32) -> Result<(), ScoreError> {
        fs::write(&self.path, score.to_string()).map_err(|source| ScoreError::Write {
            path: self.path.display().to_string(),
            source,
        })
    }
}

impl ScoreStore for FileScoreStore {
    fn read_best(&self) -> u32 {
        match fs::read_to_string(&self.path) {
            Ok(content) => parse_score(&content).unwrap_or_else(|| {
                debug!("[ScoreStore] Ignoring malformed score file {}", self.path.display());
                0
            }),
            Err(err) => {
                debug!("[ScoreStore] No readable score file {}: {}", self.path.display(), err);
                0
            }
        }
    }

    fn write_if_greater(&mut self, score: u32) -> Result<bool, ScoreError> {
        if score <= self.read_best() {
            return Ok(false);
        }
        self.write(score)?;
        info!("[ScoreStore] New best score {}", score);
        Ok(true)
    }
}

/// An empty file reads as zero, as does surrounding whitespace.
fn parse_score(content: &str) -> Option<u32> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Some(0);
    }
    trimmed.parse().ok()
}

/// Score store kept in memory.
#[derive(Debug, Default)]
pub struct MemoryScoreStore {
    pub best: u32,
}

impl ScoreStore for MemoryScoreStore {
    fn read_best(&self) -> u32 {
        self.best
    }

    fn write_if_greater(&mut self, score: u32) -> Result<bool, ScoreError> {
        if score > self.best {
            self.best = score;
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
