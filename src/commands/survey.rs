//! Survey of the root pool
//!
//! Ranks every root by how many dictionary words it admits, which shows how
//! generous each round can be.

use super::hints::{dictionary_words, playable_words};
use super::session::Session;
use crate::core::Word;
use crate::validation::{SpellChecker, ValidationEngine};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// Playable words for one root
#[derive(Debug, Clone)]
pub struct SurveyEntry {
    pub root: String,
    pub playable: usize,
    pub longest: Option<String>,
}

/// Statistics over the surveyed roots
#[derive(Debug)]
pub struct SurveyResult {
    /// Most playable words first
    pub entries: Vec<SurveyEntry>,
    pub vocabulary_size: usize,
    pub average_playable: f64,
    pub duration: Duration,
}

impl SurveyResult {
    /// Roots that admit no word at all
    #[must_use]
    pub fn dead_roots(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|entry| entry.playable == 0)
            .map(|entry| entry.root.as_str())
            .collect()
    }
}

/// Survey the session's pool against its dictionary
///
/// `limit` caps how many roots are checked, in pool order.
#[must_use]
pub fn run_survey(session: &Session, limit: Option<usize>, show_progress: bool) -> SurveyResult {
    let engine = session.state().engine();
    let vocabulary = dictionary_words(engine.checker());
    let pool = session.pool();
    let roots = &pool[..limit.unwrap_or(pool.len()).min(pool.len())];

    let progress = if show_progress {
        progress_bar(roots.len())
    } else {
        ProgressBar::hidden()
    };

    let result = survey_roots(engine, &vocabulary, roots, &progress);
    progress.finish_with_message("Complete!");
    result
}

/// Rank `roots` by how many words of `vocabulary` each one accepts
pub fn survey_roots<C: SpellChecker + Sync>(
    engine: &ValidationEngine<C>,
    vocabulary: &[&str],
    roots: &[Word],
    progress: &ProgressBar,
) -> SurveyResult {
    let start = Instant::now();

    let mut entries: Vec<SurveyEntry> = roots
        .par_iter()
        .map(|root| {
            let words = playable_words(engine, vocabulary, root, &[]);
            progress.inc(1);
            SurveyEntry {
                root: root.text().to_string(),
                playable: words.len(),
                longest: words.into_iter().next(),
            }
        })
        .collect();

    entries.sort_by(|a, b| b.playable.cmp(&a.playable).then_with(|| a.root.cmp(&b.root)));

    let total: usize = entries.iter().map(|entry| entry.playable).sum();
    let average_playable = if entries.is_empty() {
        0.0
    } else {
        total as f64 / entries.len() as f64
    };

    SurveyResult {
        entries,
        vocabulary_size: vocabulary.len(),
        average_playable,
        duration: start.elapsed(),
    }
}

fn progress_bar(len: usize) -> ProgressBar {
    let pb = ProgressBar::new(len as u64);
    let style = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
        .map_or_else(|_| ProgressStyle::default_bar(), |s| s.progress_chars("█▓▒░"));
    pb.set_style(style);
    pb.set_message("Surveying roots");
    pb
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{LanguageTag, WordListChecker};

    fn survey(roots: &[&str], vocabulary: &[&str]) -> SurveyResult {
        let checker = WordListChecker::new(LanguageTag::default(), vocabulary);
        let engine = ValidationEngine::with_defaults(checker);
        let roots: Vec<Word> = roots.iter().map(|r| Word::new(*r).unwrap()).collect();
        survey_roots(&engine, vocabulary, &roots, &ProgressBar::hidden())
    }

    #[test]
    fn roots_ranked_by_playable_count() {
        let result = survey(
            &["triangle", "terminal"],
            &["lane", "mental", "train", "rain", "tangle"],
        );

        // terminal: lane, mental, train, rain; triangle: lane, train, rain, tangle
        assert_eq!(result.entries.len(), 2);
        assert_eq!(result.entries[0].playable, 4);
        assert_eq!(result.entries[0].root, "terminal");
        assert_eq!(result.entries[1].root, "triangle");
        assert_eq!(result.vocabulary_size, 5);
    }

    #[test]
    fn longest_word_is_reported() {
        let result = survey(&["terminal"], &["lane", "mental"]);
        assert_eq!(result.entries[0].longest.as_deref(), Some("mental"));
    }

    #[test]
    fn dead_roots_are_found() {
        let result = survey(&["terminal", "zzzzzzzz"], &["lane"]);
        assert_eq!(result.dead_roots(), ["zzzzzzzz"]);
        assert!((result.average_playable - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_pool_has_zero_average() {
        let result = survey(&[], &["lane"]);
        assert!(result.entries.is_empty());
        assert!(result.average_playable.abs() < f64::EPSILON);
    }
}
