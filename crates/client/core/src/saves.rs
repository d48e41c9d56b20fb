//! Save file discovery for resuming games.

use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use infinity_core::BoardConfig;

/// A save file found on disk.
#[derive(Debug, Clone, PartialEq)]
pub struct SaveEntry {
    /// Full path to the save file
    pub path: PathBuf,

    /// File name with the save suffix stripped (e.g., "game-1700000000")
    pub short_name: String,

    /// Last modification time
    pub modified: SystemTime,
}

/// Save files in a single directory.
#[derive(Debug, Clone)]
pub struct SaveCatalog {
    dir: PathBuf,
}

impl SaveCatalog {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// List all `*.infinity.json` files, most recently modified first.
    ///
    /// A missing directory yields an empty list.
    pub fn list(&self) -> Result<Vec<SaveEntry>> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }

        let mut saves = Vec::new();

        for entry in std::fs::read_dir(&self.dir)
            .with_context(|| format!("Failed to read save directory {}", self.dir.display()))?
        {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }

            let file_name = entry.file_name();
            let Some(name) = file_name.to_str() else {
                continue;
            };
            let Some(short_name) = name.strip_suffix(BoardConfig::SAVE_FILE_SUFFIX) else {
                continue;
            };
            if short_name.is_empty() {
                continue;
            }

            let modified = entry.metadata()?.modified().unwrap_or(UNIX_EPOCH);
            saves.push(SaveEntry {
                path: entry.path(),
                short_name: short_name.to_string(),
                modified,
            });
        }

        // Most recent first; ties broken by name so the order is stable
        saves.sort_by(|a, b| {
            b.modified
                .cmp(&a.modified)
                .then_with(|| b.short_name.cmp(&a.short_name))
        });

        Ok(saves)
    }

    /// Most recently modified save, if any.
    pub fn latest(&self) -> Result<Option<SaveEntry>> {
        Ok(self.list()?.into_iter().next())
    }

    /// Path for a fresh save named after `now` (e.g., `game-1700000000.infinity.json`).
    pub fn new_game_path(&self, now: SystemTime) -> PathBuf {
        let secs = now
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs())
            .unwrap_or(0);
        self.dir
            .join(format!("game-{secs}{}", BoardConfig::SAVE_FILE_SUFFIX))
    }

    /// Create the directory if it does not exist yet.
    pub fn ensure_dir(&self) -> Result<()> {
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("Failed to create save directory {}", self.dir.display()))
    }
}
