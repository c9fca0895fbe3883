//! Hints: which known words the current root still allows

use super::session::Session;
use crate::core::Word;
use crate::validation::{SpellChecker, ValidationEngine, WordListChecker};
use anyhow::{Context, Result};
use rayon::prelude::*;

/// Words still playable in the current round
#[derive(Debug, Clone)]
pub struct HintsResult {
    pub root: String,
    /// Longest first, then alphabetical
    pub words: Vec<String>,
    pub used: usize,
}

/// Find every dictionary word the active round would accept
///
/// # Errors
///
/// Returns an error if no round can be started.
pub fn find_hints(session: &mut Session) -> Result<HintsResult> {
    session.ensure_round()?;

    let state = session.state();
    let root = state.root().context("No active round")?;
    let engine = state.engine();
    let vocabulary = dictionary_words(engine.checker());

    Ok(HintsResult {
        root: root.text().to_string(),
        words: playable_words(engine, &vocabulary, root, state.used_words()),
        used: state.used_words().len(),
    })
}

/// Sorted list of the checker's words
pub(crate) fn dictionary_words(checker: &WordListChecker) -> Vec<&str> {
    let mut words: Vec<&str> = checker.words().collect();
    words.par_sort_unstable();
    words
}

/// Candidates from `vocabulary` that pass every rule against `root`
#[must_use]
pub fn playable_words<C: SpellChecker + Sync>(
    engine: &ValidationEngine<C>,
    vocabulary: &[&str],
    root: &Word,
    used: &[Word],
) -> Vec<String> {
    let mut words: Vec<String> = vocabulary
        .par_iter()
        .filter(|&&candidate| engine.validate(candidate, root, used).is_ok())
        .map(|&candidate| candidate.to_string())
        .collect();

    words.sort_by(|a, b| {
        b.chars()
            .count()
            .cmp(&a.chars().count())
            .then_with(|| a.cmp(b))
    });
    words
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::LanguageTag;

    fn engine(words: &[&str]) -> ValidationEngine<WordListChecker> {
        ValidationEngine::with_defaults(WordListChecker::new(LanguageTag::default(), words))
    }

    #[test]
    fn only_playable_words_are_listed() {
        let vocabulary = ["terminal", "lane", "mental", "it", "banana", "train"];
        let engine = engine(&vocabulary);
        let root = Word::new("terminal").unwrap();

        let words = playable_words(&engine, &vocabulary, &root, &[]);
        assert_eq!(words, ["mental", "train", "lane"]);
    }

    #[test]
    fn used_words_are_excluded() {
        let vocabulary = ["lane", "mental"];
        let engine = engine(&vocabulary);
        let root = Word::new("terminal").unwrap();
        let used = [Word::new("Lane").unwrap()];

        assert_eq!(
            playable_words(&engine, &vocabulary, &root, &used),
            ["mental"]
        );
    }

    #[test]
    fn dictionary_words_are_sorted() {
        let checker = WordListChecker::new(LanguageTag::default(), ["tile", "lane", "mint"]);
        assert_eq!(dictionary_words(&checker), ["lane", "mint", "tile"]);
    }

    #[test]
    fn embedded_roots_have_hints() {
        let checker = WordListChecker::embedded();
        let vocabulary = dictionary_words(&checker);
        let engine = ValidationEngine::with_defaults(checker.clone());
        let root = Word::new("terminal").unwrap();

        let words = playable_words(&engine, &vocabulary, &root, &[]);
        assert!(words.iter().any(|w| w == "mental"));
        assert!(!words.iter().any(|w| w == "terminal"));
    }
}
