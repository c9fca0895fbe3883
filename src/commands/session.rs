//! Game session assembly
//!
//! Turns a [`GameConfig`] into a ready-to-play round state plus the pool root
//! words are drawn from.

use crate::config::GameConfig;
use crate::core::Word;
use crate::round::{
    JsonFileStore, MemoryStore, PersistenceGateway, RandomSelector, RoundOrigin, RoundState,
    SubmitError,
};
use crate::validation::{RuleConfig, ValidationEngine, WordListChecker};
use crate::wordlists::{EmbeddedSource, FileSource, WordSource, load_pool_or_default};
use anyhow::Result;

/// Round state as wired up by the binary
pub type GameState = RoundState<WordListChecker, Box<dyn PersistenceGateway>, RandomSelector>;

/// A round state together with its root pool
pub struct Session {
    state: GameState,
    pool: Vec<Word>,
    /// How the active round came about
    origin: Option<RoundOrigin>,
}

impl Session {
    /// Build a session that stores rounds where `config` says
    #[must_use]
    pub fn open(config: &GameConfig) -> Self {
        Self::with_gateway(config, build_gateway(config))
    }

    /// Build a session with an explicit persistence gateway
    #[must_use]
    pub fn with_gateway(config: &GameConfig, gateway: Box<dyn PersistenceGateway>) -> Self {
        let engine = ValidationEngine::new(config.rules.clone(), build_checker(config));
        let state = RoundState::new(engine, gateway, build_selector(config));

        Self {
            state,
            pool: build_pool(config),
            origin: None,
        }
    }

    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn pool(&self) -> &[Word] {
        &self.pool
    }

    #[must_use]
    pub const fn rules(&self) -> &RuleConfig {
        self.state.engine().config()
    }

    /// Current root, if a round is active
    #[must_use]
    pub fn root(&self) -> Option<&Word> {
        self.state.root()
    }

    /// Resume the saved round or start a new one
    ///
    /// An already active round is kept and reports how it was created.
    ///
    /// # Errors
    ///
    /// Returns an error if a new round is needed and no root is available.
    pub fn ensure_round(&mut self) -> Result<RoundOrigin> {
        if let Some(origin) = self.origin
            && self.state.is_active()
        {
            return Ok(origin);
        }

        let origin = self.state.resume_or_start(&self.pool)?;
        self.origin = Some(origin);
        Ok(origin)
    }

    /// Discard the current round and draw a new root
    ///
    /// # Errors
    ///
    /// Returns an error if no root is available.
    pub fn new_round(&mut self) -> Result<Word> {
        let root = self.state.start(&self.pool)?;
        self.origin = Some(RoundOrigin::Started);
        Ok(root)
    }

    /// Submit a word to the active round
    ///
    /// # Errors
    ///
    /// Returns the [`SubmitError`] from the round state.
    pub fn submit(&mut self, candidate: &str) -> Result<Word, SubmitError> {
        self.state.submit(candidate)
    }
}

/// Spell checker from `dictionary_path`, or the built-in word list
fn build_checker(config: &GameConfig) -> WordListChecker {
    let Some(path) = &config.dictionary_path else {
        return WordListChecker::embedded();
    };

    match WordListChecker::from_file(path, config.rules.language.clone()) {
        Ok(checker) if !checker.is_empty() => {
            tracing::debug!(
                path = %path.display(),
                words = checker.len(),
                "Loaded dictionary"
            );
            checker
        }
        Ok(_) => {
            tracing::warn!(path = %path.display(), "Dictionary is empty; using built-in list");
            WordListChecker::embedded()
        }
        Err(err) => {
            tracing::warn!(
                path = %path.display(),
                error = %err,
                "Could not read dictionary; using built-in list"
            );
            WordListChecker::embedded()
        }
    }
}

fn build_gateway(config: &GameConfig) -> Box<dyn PersistenceGateway> {
    match config.resolved_state_path() {
        Some(path) => Box::new(JsonFileStore::new(path)),
        None => {
            tracing::warn!("No location for saved rounds; progress will not be kept");
            Box::new(MemoryStore::new())
        }
    }
}

fn build_selector(config: &GameConfig) -> RandomSelector {
    config
        .seed
        .map_or_else(RandomSelector::from_os_rng, RandomSelector::seeded)
}

fn build_pool(config: &GameConfig) -> Vec<Word> {
    match &config.pool_path {
        Some(path) => load_pool_or_default(&FileSource::new(path)),
        None => EmbeddedSource.load_pool(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::round::Snapshot;
    use crate::validation::RejectionReason;
    use std::fs;

    fn seeded_config() -> GameConfig {
        GameConfig {
            seed: Some(42),
            ..GameConfig::default()
        }
    }

    fn memory_session(config: &GameConfig) -> Session {
        Session::with_gateway(config, Box::new(MemoryStore::new()))
    }

    #[test]
    fn ensure_round_starts_when_nothing_saved() {
        let mut session = memory_session(&seeded_config());
        assert_eq!(session.ensure_round().unwrap(), RoundOrigin::Started);
        assert!(session.root().is_some());
    }

    #[test]
    fn ensure_round_keeps_active_round() {
        let mut session = memory_session(&seeded_config());
        session.ensure_round().unwrap();
        let root = session.root().cloned();

        assert_eq!(session.ensure_round().unwrap(), RoundOrigin::Started);
        assert_eq!(session.root().cloned(), root);
    }

    #[test]
    fn new_round_is_not_reported_as_resumed() {
        let snapshot = Snapshot {
            root: "terminal".to_string(),
            ..Snapshot::default()
        };
        let mut session =
            Session::with_gateway(&seeded_config(), Box::new(MemoryStore::with_snapshot(snapshot)));

        assert_eq!(session.ensure_round().unwrap(), RoundOrigin::Resumed);
        assert_eq!(session.ensure_round().unwrap(), RoundOrigin::Resumed);

        session.new_round().unwrap();
        assert_eq!(session.ensure_round().unwrap(), RoundOrigin::Started);
    }

    #[test]
    fn ensure_round_resumes_saved_snapshot() {
        let snapshot = Snapshot {
            root: "terminal".to_string(),
            used: vec!["lane".to_string()],
            ..Snapshot::default()
        };
        let mut session =
            Session::with_gateway(&seeded_config(), Box::new(MemoryStore::with_snapshot(snapshot)));

        assert_eq!(session.ensure_round().unwrap(), RoundOrigin::Resumed);
        assert_eq!(session.root().map(Word::text), Some("terminal"));
        assert_eq!(session.state().used_words().len(), 1);
    }

    #[test]
    fn same_seed_same_root() {
        let mut first = memory_session(&seeded_config());
        let mut second = memory_session(&seeded_config());

        assert_eq!(first.new_round().unwrap(), second.new_round().unwrap());
    }

    #[test]
    fn submit_goes_through_rules() {
        let mut session = memory_session(&seeded_config());
        session.ensure_round().unwrap();

        let err = session.submit("it").unwrap_err();
        assert_eq!(err.rejection(), Some(RejectionReason::TooShort));
    }

    #[test]
    fn pool_file_is_used() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pool.txt");
        fs::write(&path, "triangle\n").unwrap();

        let config = GameConfig {
            pool_path: Some(path),
            ..seeded_config()
        };
        let mut session = memory_session(&config);

        assert_eq!(session.new_round().unwrap().text(), "triangle");
    }

    #[test]
    fn missing_pool_file_falls_back_to_embedded() {
        let config = GameConfig {
            pool_path: Some("/nonexistent/pool.txt".into()),
            ..seeded_config()
        };
        let session = memory_session(&config);
        assert_eq!(session.pool().len(), crate::wordlists::START_WORDS_COUNT);
    }

    #[test]
    fn dictionary_file_replaces_builtin_list() {
        let dir = tempfile::tempdir().unwrap();
        let pool = dir.path().join("pool.txt");
        let dictionary = dir.path().join("words.txt");
        fs::write(&pool, "terminal\n").unwrap();
        fs::write(&dictionary, "terminal\nmental\n").unwrap();

        let config = GameConfig {
            pool_path: Some(pool),
            dictionary_path: Some(dictionary),
            ..seeded_config()
        };
        let mut session = memory_session(&config);
        session.ensure_round().unwrap();

        assert!(session.submit("mental").is_ok());
        assert_eq!(
            session.submit("lane").unwrap_err().rejection(),
            Some(RejectionReason::NotReal)
        );
    }

    #[test]
    fn file_store_keeps_round_between_sessions() {
        let dir = tempfile::tempdir().unwrap();
        let config = GameConfig {
            state_path: Some(dir.path().join("round.json")),
            ..seeded_config()
        };

        let root = {
            let mut session = Session::open(&config);
            session.ensure_round().unwrap();
            session.submit("lane").ok();
            session.root().cloned().unwrap()
        };

        let mut session = Session::open(&config);
        assert_eq!(session.ensure_round().unwrap(), RoundOrigin::Resumed);
        assert_eq!(session.root(), Some(&root));
    }
}
