//! Spell checking capability
//!
//! The engine only needs a yes/no answer for a word in a language. Real
//! spell checkers plug in through [`SpellChecker`]; [`WordListChecker`] is the
//! word-list adapter the game ships with.

use crate::wordlists::{DICTIONARY, loader::load_from_file};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io;
use std::path::Path;

/// Language identifier passed to the spell checker, stored lowercase (e.g. `en`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct LanguageTag(String);

impl LanguageTag {
    #[must_use]
    pub fn new(tag: &str) -> Self {
        Self(tag.trim().to_lowercase())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for LanguageTag {
    fn default() -> Self {
        Self::new("en")
    }
}

impl From<String> for LanguageTag {
    fn from(tag: String) -> Self {
        Self::new(&tag)
    }
}

impl From<&str> for LanguageTag {
    fn from(tag: &str) -> Self {
        Self::new(tag)
    }
}

impl From<LanguageTag> for String {
    fn from(tag: LanguageTag) -> Self {
        tag.0
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Something that can tell whether a word is real
pub trait SpellChecker {
    /// Whether `word` is a recognized word in `language`
    fn is_recognized(&self, word: &str, language: &LanguageTag) -> bool;
}

impl<T: SpellChecker + ?Sized> SpellChecker for &T {
    fn is_recognized(&self, word: &str, language: &LanguageTag) -> bool {
        (**self).is_recognized(word, language)
    }
}

impl<T: SpellChecker + ?Sized> SpellChecker for Box<T> {
    fn is_recognized(&self, word: &str, language: &LanguageTag) -> bool {
        (**self).is_recognized(word, language)
    }
}

/// Spell checker backed by a flat list of words in one language
#[derive(Debug, Clone)]
pub struct WordListChecker {
    language: LanguageTag,
    words: FxHashSet<String>,
}

impl WordListChecker {
    /// Build from any list of words; entries are lowercased and trimmed
    pub fn new<I, S>(language: LanguageTag, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { language, words }
    }

    /// English checker over the word list compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(LanguageTag::default(), DICTIONARY)
    }

    /// Load a checker from a file with one word per line
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read.
    pub fn from_file<P: AsRef<Path>>(path: P, language: LanguageTag) -> io::Result<Self> {
        let words = load_from_file(path)?;
        Ok(Self::new(language, words.iter().map(|w| w.folded())))
    }

    #[must_use]
    pub const fn language(&self) -> &LanguageTag {
        &self.language
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// All known words (lowercase, unordered)
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl SpellChecker for WordListChecker {
    fn is_recognized(&self, word: &str, language: &LanguageTag) -> bool {
        *language == self.language && self.words.contains(&word.to_lowercase())
    }
}
