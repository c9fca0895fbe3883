//! Root word pool sources
//!
//! A [`WordSource`] supplies the pool root words are drawn from. An empty pool
//! means the source failed; [`load_pool_or_default`] falls back to the pool
//! compiled into the binary.

use super::START_WORDS;
use super::loader::{load_from_file, words_from_slice};
use crate::core::Word;
use std::path::PathBuf;

/// Supplies the full vocabulary of possible root words
pub trait WordSource {
    /// Load the pool; may be empty
    fn load_pool(&self) -> Vec<Word>;
}

/// Pool compiled into the binary from `data/start.txt`
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedSource;

impl WordSource for EmbeddedSource {
    fn load_pool(&self) -> Vec<Word> {
        words_from_slice(START_WORDS)
    }
}

/// Pool read from a file, one word per line
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl WordSource for FileSource {
    fn load_pool(&self) -> Vec<Word> {
        match load_from_file(&self.path) {
            Ok(words) => {
                tracing::debug!(
                    path = %self.path.display(),
                    words = words.len(),
                    "Loaded word pool"
                );
                words
            }
            Err(err) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %err,
                    "Could not read word pool"
                );
                Vec::new()
            }
        }
    }
}

/// Load from `source`, falling back to the embedded pool when it comes back empty
#[must_use]
pub fn load_pool_or_default(source: &dyn WordSource) -> Vec<Word> {
    let pool = source.load_pool();
    if pool.is_empty() {
        tracing::warn!("Word pool is empty; using the built-in word list");
        EmbeddedSource.load_pool()
    } else {
        pool
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    struct EmptySource;

    impl WordSource for EmptySource {
        fn load_pool(&self) -> Vec<Word> {
            Vec::new()
        }
    }

    #[test]
    fn embedded_source_is_not_empty() {
        let pool = EmbeddedSource.load_pool();
        assert_eq!(pool.len(), START_WORDS.len());
    }

    #[test]
    fn file_source_reads_pool() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pool.txt");
        fs::write(&path, "terminal\n\ntriangle\n").unwrap();

        let pool = FileSource::new(&path).load_pool();
        assert_eq!(pool.len(), 2);
    }

    #[test]
    fn file_source_missing_file_is_empty() {
        let pool = FileSource::new("/nonexistent/pool.txt").load_pool();
        assert!(pool.is_empty());
    }

    #[test]
    fn empty_source_falls_back_to_embedded() {
        let pool = load_pool_or_default(&EmptySource);
        assert_eq!(pool.len(), START_WORDS.len());
    }

    #[test]
    fn non_empty_source_is_kept() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pool.txt");
        fs::write(&path, "terminal\n").unwrap();

        let pool = load_pool_or_default(&FileSource::new(&path));
        assert_eq!(pool.len(), 1);
        assert_eq!(pool[0].text(), "terminal");
    }
}
