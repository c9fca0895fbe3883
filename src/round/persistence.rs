//! Snapshot storage
//!
//! The round state writes a snapshot after every mutation and reads one at
//! startup. Storage failures never reach the player; the worst case is a fresh
//! round on the next launch.

use super::snapshot::Snapshot;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Snapshot storage error
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// File I/O error
    #[error("Failed to {operation} file: {path}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Snapshot could not be encoded
    #[error("Failed to serialize round snapshot")]
    Serialization {
        #[source]
        source: serde_json::Error,
    },

    /// Stored data is not a snapshot
    #[error("Failed to parse round snapshot at {path}")]
    Deserialization {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Temp file could not replace the target
    #[error("Failed to replace {target_path} with {temp_path}")]
    AtomicWriteFailed {
        temp_path: PathBuf,
        target_path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Key-value style store holding at most one snapshot
pub trait PersistenceGateway {
    /// Store `snapshot`, replacing any previous one
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot could not be stored.
    fn save(&mut self, snapshot: &Snapshot) -> Result<(), PersistenceError>;

    /// Fetch the stored snapshot, `None` if nothing has been saved
    ///
    /// # Errors
    ///
    /// Returns an error if stored data exists but cannot be read.
    fn load(&self) -> Result<Option<Snapshot>, PersistenceError>;
}

impl<G: PersistenceGateway + ?Sized> PersistenceGateway for Box<G> {
    fn save(&mut self, snapshot: &Snapshot) -> Result<(), PersistenceError> {
        (**self).save(snapshot)
    }

    fn load(&self) -> Result<Option<Snapshot>, PersistenceError> {
        (**self).load()
    }
}

/// Snapshot stored as a JSON file
///
/// Writes go to a temp file first and are renamed into place, so a crash
/// mid-write leaves the previous snapshot intact.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(operation: &'static str, path: &Path, source: io::Error) -> PersistenceError {
        PersistenceError::Io {
            operation,
            path: path.to_path_buf(),
            source,
        }
    }
}

impl PersistenceGateway for JsonFileStore {
    fn save(&mut self, snapshot: &Snapshot) -> Result<(), PersistenceError> {
        let json = snapshot
            .to_json()
            .map_err(|source| PersistenceError::Serialization { source })?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .map_err(|e| Self::io_error("create directory", parent, e))?;
        }

        let temp_path = self.path.with_extension("json.tmp");

        let mut file =
            File::create(&temp_path).map_err(|e| Self::io_error("create", &temp_path, e))?;
        file.write_all(json.as_bytes())
            .map_err(|e| Self::io_error("write", &temp_path, e))?;
        file.sync_all()
            .map_err(|e| Self::io_error("sync", &temp_path, e))?;

        fs::rename(&temp_path, &self.path).map_err(|source| {
            PersistenceError::AtomicWriteFailed {
                temp_path: temp_path.clone(),
                target_path: self.path.clone(),
                source,
            }
        })?;

        tracing::debug!(
            path = %self.path.display(),
            words = snapshot.used.len(),
            "Saved round snapshot"
        );
        Ok(())
    }

    fn load(&self) -> Result<Option<Snapshot>, PersistenceError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "No saved round");
                return Ok(None);
            }
            Err(e) => return Err(Self::io_error("read", &self.path, e)),
        };

        if content.trim().is_empty() {
            return Ok(None);
        }

        let snapshot =
            Snapshot::from_json(&content).map_err(|source| PersistenceError::Deserialization {
                path: self.path.clone(),
                source,
            })?;

        tracing::debug!(path = %self.path.display(), "Loaded round snapshot");
        Ok(Some(snapshot))
    }
}

/// Snapshot kept in memory only (for `--no-save` sessions and tests)
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    snapshot: Option<Snapshot>,
    saves: usize,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a snapshot
    #[must_use]
    pub const fn with_snapshot(snapshot: Snapshot) -> Self {
        Self {
            snapshot: Some(snapshot),
            saves: 0,
        }
    }

    /// Most recently saved snapshot
    #[must_use]
    pub const fn snapshot(&self) -> Option<&Snapshot> {
        self.snapshot.as_ref()
    }

    /// Number of successful saves
    #[must_use]
    pub const fn saves(&self) -> usize {
        self.saves
    }
}

impl PersistenceGateway for MemoryStore {
    fn save(&mut self, snapshot: &Snapshot) -> Result<(), PersistenceError> {
        self.snapshot = Some(snapshot.clone());
        self.saves += 1;
        Ok(())
    }

    fn load(&self) -> Result<Option<Snapshot>, PersistenceError> {
        Ok(self.snapshot.clone())
    }
}
