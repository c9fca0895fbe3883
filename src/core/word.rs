//! Game word representation
//!
//! A Word keeps the text exactly as entered for display, plus a lowercase form
//! used for every comparison.

use super::LetterCounts;
use std::fmt;
use std::hash::{Hash, Hasher};
use thiserror::Error;

/// A word as it appears in the game: root words, pool entries and accepted answers
///
/// Equality and hashing are case-insensitive; [`Word::text`] preserves the
/// original casing.
#[derive(Debug, Clone)]
pub struct Word {
    text: String,
    folded: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must not be empty")]
    Empty,
    #[error("Word must not contain whitespace, got {0:?}")]
    Whitespace(String),
}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError` if the text is empty or contains whitespace.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::Word;
    ///
    /// let word = Word::new("Terminal").unwrap();
    /// assert_eq!(word.text(), "Terminal");
    /// assert_eq!(word.folded(), "terminal");
    ///
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("two words").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if text.chars().any(char::is_whitespace) {
            return Err(WordError::Whitespace(text));
        }

        Ok(Self::from_checked(text))
    }

    /// Build a word from text the caller has already checked
    pub(crate) fn from_checked(text: String) -> Self {
        let folded = text.to_lowercase();
        Self { text, folded }
    }

    /// Get the word with its original casing
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the lowercase form used for comparisons
    #[inline]
    #[must_use]
    pub fn folded(&self) -> &str {
        &self.folded
    }

    /// Number of characters in the word
    #[inline]
    #[must_use]
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Case-insensitive comparison against raw text
    #[must_use]
    pub fn matches(&self, text: &str) -> bool {
        self.folded == text.to_lowercase()
    }

    /// Letter multiset of the word (lowercase)
    #[must_use]
    pub fn letter_counts(&self) -> LetterCounts {
        LetterCounts::from_text(&self.folded)
    }
}

impl PartialEq for Word {
    fn eq(&self, other: &Self) -> bool {
        self.folded == other.folded
    }
}

impl Eq for Word {}

impl Hash for Word {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.folded.hash(state);
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
