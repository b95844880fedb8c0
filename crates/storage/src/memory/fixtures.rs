//! Fixture document loading.
//!
//! The fixture document is the in-memory substitute for a persistent
//! database: a JSON object holding the user and forum collections. A
//! default data set is embedded in the crate; deployments may point the
//! binary at an alternative file.

use std::path::Path;

use serde::{Deserialize, Serialize};

use agora_core::error::{StorageError, StorageResult};
use agora_core::models::{Forum, User};

/// Embedded default fixture data set.
const DEFAULT_FIXTURES: &str = include_str!("fixtures.json");

/// The seed document for a [`MemoryStore`](super::MemoryStore).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fixtures {
    pub users: Vec<User>,
    pub forums: Vec<Forum>,
}

impl Fixtures {
    /// The data set embedded in the crate (3 users, 3 forums).
    pub fn embedded() -> StorageResult<Self> {
        Self::from_json(DEFAULT_FIXTURES)
    }

    /// Parse a fixture document from raw JSON.
    pub fn from_json(raw: &str) -> StorageResult<Self> {
        serde_json::from_str(raw).map_err(|e| StorageError::SerializationError(e.to_string()))
    }

    /// Read and parse a fixture document from a file.
    pub fn from_path(path: impl AsRef<Path>) -> StorageResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            StorageError::SerializationError(format!("{}: {}", path.display(), e))
        })?;
        Self::from_json(&raw)
    }
}
