//! Validation rules, their fixed order, and the rejection reasons they produce

use super::spell::LanguageTag;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a candidate word was refused
///
/// Every reason is recoverable: the player simply tries another word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum RejectionReason {
    /// Candidate is the root word itself
    #[error("Same word")]
    SameWord,
    /// Candidate is not longer than the length threshold
    #[error("Word not long enough")]
    TooShort,
    /// Candidate needs letters the root does not have
    #[error("Word not possible")]
    NotPossible,
    /// Candidate was already accepted this round
    #[error("Word used already")]
    AlreadyUsed,
    /// Spell checker does not know the candidate
    #[error("Word not recognized")]
    NotReal,
}

/// A single check in the validation chain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    SameAsRoot,
    TooShort,
    NotSpellableFromRoot,
    AlreadyUsed,
    NotRecognizedWord,
}

impl Rule {
    /// Order in which rules run; the first failure wins
    pub const ORDER: [Self; 5] = [
        Self::SameAsRoot,
        Self::TooShort,
        Self::NotSpellableFromRoot,
        Self::AlreadyUsed,
        Self::NotRecognizedWord,
    ];

    /// Rules that need nothing beyond the round itself (no spell checker)
    pub const STRUCTURAL: [Self; 4] = [
        Self::SameAsRoot,
        Self::TooShort,
        Self::NotSpellableFromRoot,
        Self::AlreadyUsed,
    ];

    /// Rejection reported when this rule fails
    #[must_use]
    pub const fn rejection(self) -> RejectionReason {
        match self {
            Self::SameAsRoot => RejectionReason::SameWord,
            Self::TooShort => RejectionReason::TooShort,
            Self::NotSpellableFromRoot => RejectionReason::NotPossible,
            Self::AlreadyUsed => RejectionReason::AlreadyUsed,
            Self::NotRecognizedWord => RejectionReason::NotReal,
        }
    }
}

/// Tunable rule parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleConfig {
    /// Candidates with this many characters or fewer are too short
    pub min_length_threshold: usize,
    /// Language passed to the spell checker
    pub language: LanguageTag,
}

impl RuleConfig {
    pub const DEFAULT_MIN_LENGTH_THRESHOLD: usize = 3;

    /// Shortest length a candidate may have and still be accepted
    #[must_use]
    pub const fn min_accepted_length(&self) -> usize {
        self.min_length_threshold + 1
    }
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            min_length_threshold: Self::DEFAULT_MIN_LENGTH_THRESHOLD,
            language: LanguageTag::default(),
        }
    }
}
