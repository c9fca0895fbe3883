//! Round state error types
//!
//! Player mistakes are [`RejectionReason`]s; everything here is a contract or
//! environment failure the caller has to handle.

use crate::core::WordError;
use crate::validation::RejectionReason;
use thiserror::Error;

/// Failure to start a round
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoundError {
    /// The pool had no words to choose from
    #[error("No words available to start a round")]
    EmptyPool,

    /// The root selector returned an index outside the pool
    #[error("Root selector picked index {index} from a pool of {len} words")]
    SelectionOutOfRange { index: usize, len: usize },
}

/// Failure to submit a candidate
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// The candidate broke a rule; show the reason to the player
    #[error(transparent)]
    Rejected(#[from] RejectionReason),

    /// `submit` was called before any round was started or resumed
    #[error("No active round; start or resume a round before submitting")]
    NoRound,
}

impl SubmitError {
    /// The rejection reason, if this is a player-facing rejection
    #[must_use]
    pub const fn rejection(&self) -> Option<RejectionReason> {
        match self {
            Self::Rejected(reason) => Some(*reason),
            Self::NoRound => None,
        }
    }
}

/// A snapshot that cannot be turned back into a round
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResumeError {
    /// Written by a newer version of the game
    #[error("Snapshot version {found} is not supported (maximum: {max_supported})")]
    UnsupportedVersion { found: u32, max_supported: u32 },

    /// No root word recorded
    #[error("Snapshot has no root word")]
    MissingRoot,

    /// Root word recorded but not a valid word
    #[error("Snapshot root word is invalid")]
    InvalidRoot(#[source] WordError),

    /// A recorded word could not have been accepted for this root
    #[error("Snapshot entry {word:?} is not valid for root {root:?}: {reason}")]
    InvalidEntry {
        word: String,
        root: String,
        reason: RejectionReason,
    },
}
