//! Persisted form of a round
//!
//! Stored as a small JSON record:
//!
//! ```json
//! { "version": 1, "root": "terminal", "used": ["mental", "lane"] }
//! ```
//!
//! Missing keys fall back to empty defaults. Records without a `version`
//! predate versioning (version 0) and carry the same fields.

use super::error::ResumeError;
use crate::core::Round;
use serde::{Deserialize, Serialize};

/// Current snapshot schema version
///
/// Increment this when the record layout changes, and teach
/// [`Snapshot::migrate`] how to upgrade the previous version.
pub const CURRENT_SNAPSHOT_VERSION: u32 = 1;

/// Serializable record of a round
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub version: u32,
    #[serde(default)]
    pub root: String,
    /// Accepted words, most recent first
    #[serde(default)]
    pub used: Vec<String>,
}

impl Snapshot {
    /// Capture a round at the current schema version
    #[must_use]
    pub fn from_round(round: &Round) -> Self {
        Self {
            version: CURRENT_SNAPSHOT_VERSION,
            root: round.root().text().to_string(),
            used: round
                .used_words()
                .iter()
                .map(|word| word.text().to_string())
                .collect(),
        }
    }

    /// Whether the snapshot holds no round at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.root.trim().is_empty()
    }

    /// Upgrade an older snapshot to [`CURRENT_SNAPSHOT_VERSION`]
    ///
    /// # Errors
    ///
    /// Returns [`ResumeError::UnsupportedVersion`] for snapshots newer than
    /// this build understands.
    pub fn migrate(self) -> Result<Self, ResumeError> {
        match self.version {
            // Unversioned records already have root + used
            0 => Ok(Self {
                version: CURRENT_SNAPSHOT_VERSION,
                ..self
            }),
            CURRENT_SNAPSHOT_VERSION => Ok(self),
            found => Err(ResumeError::UnsupportedVersion {
                found,
                max_supported: CURRENT_SNAPSHOT_VERSION,
            }),
        }
    }

    /// Serialize to pretty-printed JSON
    ///
    /// # Errors
    ///
    /// Returns a serialization error from `serde_json`.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Parse from JSON
    ///
    /// # Errors
    ///
    /// Returns a deserialization error if the text is not a snapshot record.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
