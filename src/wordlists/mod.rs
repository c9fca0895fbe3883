//! Word lists for the game
//!
//! Provides the embedded root pool and dictionary, plus sources for loading
//! pools from disk.

mod embedded;
pub mod loader;
mod source;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT, START_WORDS, START_WORDS_COUNT};
pub use source::{EmbeddedSource, FileSource, WordSource, load_pool_or_default};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_words_count_matches_const() {
        assert_eq!(START_WORDS.len(), START_WORDS_COUNT);
    }

    #[test]
    fn dictionary_count_matches_const() {
        assert_eq!(DICTIONARY.len(), DICTIONARY_COUNT);
    }

    #[test]
    fn start_words_are_eight_lowercase_letters() {
        for &word in START_WORDS {
            assert_eq!(word.len(), 8, "Word '{word}' is not 8 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn start_words_are_in_dictionary() {
        let dictionary: std::collections::HashSet<_> = DICTIONARY.iter().collect();

        for word in START_WORDS {
            assert!(
                dictionary.contains(word),
                "Root '{word}' not in dictionary"
            );
        }
    }

    #[test]
    fn dictionary_is_sorted_and_unique() {
        assert!(DICTIONARY.windows(2).all(|pair| pair[0] < pair[1]));
    }
}
