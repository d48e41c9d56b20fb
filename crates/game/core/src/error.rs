//! Error types for block decoding and save-file I/O.
//!
//! Gameplay mutators never fail loudly: an illegal move or edit is reported as
//! `false` (or ignored) by [`crate::GameBoard`]. The types here cover the
//! places where a caller needs to know *why* something failed: decoding a
//! block record and reading or writing a save file.

use std::path::PathBuf;

use thiserror::Error;

use crate::block::BlockKind;

/// Failure to turn a serialized record back into a block.
#[derive(Debug, Error)]
pub enum BlockError {
    #[error("unknown block type tag {0}")]
    UnknownKind(u8),

    #[error("unknown floor type {0}")]
    UnknownFloorKind(u8),

    #[error("{kind} record is missing field `{field}`")]
    MissingField { kind: BlockKind, field: &'static str },

    #[error("malformed block record: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Failure to write a save file. In-memory state is never touched.
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("could not write save file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not encode save file: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Logical sections of a save file. Each one is loaded independently.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum SaveSection {
    Dimensions,
    Seed,
    WallProbability,
    Player,
    Changes,
}

/// A section of a save file that could not be applied.
#[derive(Debug, Error)]
#[error("{section} section rejected: {reason}")]
pub struct SectionError {
    pub section: SaveSection,
    pub reason: String,
}

impl SectionError {
    pub fn new(section: SaveSection, reason: impl Into<String>) -> Self {
        Self {
            section,
            reason: reason.into(),
        }
    }
}

/// Failure to load a save file.
///
/// `Io` and `Syntax` leave the board untouched. `Sections` means the file was
/// readable but some sections were rejected; every other section has already
/// been applied, so the board may hold a mix of loaded and pre-load values.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not read save file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("save file is not valid JSON: {0}")]
    Syntax(#[from] serde_json::Error),

    #[error("save file root must be an object")]
    NotAnObject,

    #[error("{} save section(s) rejected", .0.len())]
    Sections(Vec<SectionError>),
}

impl LoadError {
    /// Sections that failed, empty for whole-file failures.
    pub fn rejected_sections(&self) -> Vec<SaveSection> {
        match self {
            Self::Sections(errors) => errors.iter().map(|e| e.section).collect(),
            _ => Vec::new(),
        }
    }
}
