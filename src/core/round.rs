//! Round aggregate: the root word plus the words accepted so far

use super::Word;

/// One game round
///
/// `used` is ordered most-recent-first. Only the round state mutates it, and
/// only with words that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    root: Word,
    used: Vec<Word>,
}

impl Round {
    /// Fresh round with no accepted words
    #[must_use]
    pub const fn new(root: Word) -> Self {
        Self {
            root,
            used: Vec::new(),
        }
    }

    /// Rebuild a round from already-checked parts (`used` most-recent-first)
    pub(crate) const fn from_parts(root: Word, used: Vec<Word>) -> Self {
        Self { root, used }
    }

    /// The root word
    #[inline]
    #[must_use]
    pub const fn root(&self) -> &Word {
        &self.root
    }

    /// Accepted words, most recent first
    #[inline]
    #[must_use]
    pub fn used_words(&self) -> &[Word] {
        &self.used
    }

    /// Number of accepted words
    #[inline]
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.used.len()
    }

    /// Whether `text` was already accepted (case-insensitive)
    #[must_use]
    pub fn has_used(&self, text: &str) -> bool {
        self.used.iter().any(|word| word.matches(text))
    }

    /// Record an accepted word at the front
    pub(crate) fn record(&mut self, word: Word) {
        self.used.insert(0, word);
    }
}
