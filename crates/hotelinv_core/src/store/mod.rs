//! Persistence gateway for named record collections.
//!
//! # Responsibility
//! - Load and save whole collections as JSON arrays, one file per collection.
//! - Define the per-entity reconstruction contract (`StoredEntity`).
//!
//! # Invariants
//! - An absent or blank file loads as an empty collection.
//! - Malformed records abort the load; they are never skipped.
//! - Saves replace the file via temp-file + rename, so a crash mid-write keeps
//!   the previous snapshot readable.
//! - Every save rewrites the full collection; there is no append mode.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

mod json_store;

pub use json_store::JsonStore;

pub type StoreResult<T> = Result<T, StoreError>;

/// Conversion between an entity and its untyped stored form.
pub trait StoredEntity: Sized {
    fn to_stored(&self) -> serde_json::Value;

    /// Rebuilds an entity from one stored record.
    ///
    /// Returns a human-readable reason when the record has the wrong shape or
    /// violates entity invariants.
    fn from_stored(value: serde_json::Value) -> Result<Self, String>;
}

#[derive(Debug)]
pub enum StoreError {
    /// Collection name is empty or contains path-unsafe characters.
    InvalidCollection(String),
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Serialize(serde_json::Error),
    /// Stored contents cannot be reconstructed into entities.
    ///
    /// `index` is the offending array position, `None` for file-level issues.
    DataFormat {
        path: PathBuf,
        index: Option<usize>,
        message: String,
    },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCollection(name) => write!(f, "invalid collection name: `{name}`"),
            Self::Io { path, source } => write!(f, "i/o error on `{}`: {source}", path.display()),
            Self::Serialize(err) => write!(f, "failed to serialize collection: {err}"),
            Self::DataFormat {
                path,
                index: Some(index),
                message,
            } => write!(
                f,
                "invalid record #{index} in `{}`: {message}",
                path.display()
            ),
            Self::DataFormat {
                path,
                index: None,
                message,
            } => write!(f, "invalid data in `{}`: {message}", path.display()),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Serialize(err) => Some(err),
            Self::InvalidCollection(_) | Self::DataFormat { .. } => None,
        }
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value)
    }
}
