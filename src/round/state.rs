//! Round state: the only owner of the current round
//!
//! All changes go through [`RoundState::start`], [`RoundState::resume`] and
//! [`RoundState::submit`]. Every successful `start` and `submit` is followed by
//! a snapshot write.

use super::error::{ResumeError, RoundError, SubmitError};
use super::persistence::PersistenceGateway;
use super::selector::{RandomSelector, RootSelector};
use super::snapshot::Snapshot;
use crate::core::{Round, Word};
use crate::validation::{SpellChecker, ValidationEngine};

/// How [`RoundState::resume_or_start`] obtained its round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOrigin {
    /// Restored from the saved snapshot
    Resumed,
    /// No usable snapshot; a new round was started
    Started,
}

/// Owns the current round and mediates every change to it
pub struct RoundState<C: SpellChecker, G: PersistenceGateway, R: RootSelector = RandomSelector> {
    engine: ValidationEngine<C>,
    gateway: G,
    selector: R,
    round: Option<Round>,
}

impl<C, G, R> RoundState<C, G, R>
where
    C: SpellChecker,
    G: PersistenceGateway,
    R: RootSelector,
{
    /// Create a state with no active round
    pub const fn new(engine: ValidationEngine<C>, gateway: G, selector: R) -> Self {
        Self {
            engine,
            gateway,
            selector,
            round: None,
        }
    }

    /// The active round, if any
    pub const fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    pub const fn is_active(&self) -> bool {
        self.round.is_some()
    }

    /// Root word of the active round
    pub fn root(&self) -> Option<&Word> {
        self.round.as_ref().map(Round::root)
    }

    /// Accepted words, most recent first (empty without a round)
    pub fn used_words(&self) -> &[Word] {
        self.round.as_ref().map_or(&[], Round::used_words)
    }

    pub const fn engine(&self) -> &ValidationEngine<C> {
        &self.engine
    }

    pub const fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Snapshot of the active round
    pub fn snapshot(&self) -> Option<Snapshot> {
        self.round.as_ref().map(Snapshot::from_round)
    }

    /// Start a new round with a root word drawn from `pool`
    ///
    /// Replaces any active round and clears the used words.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::EmptyPool`] if `pool` is empty; the caller should
    /// retry with a fallback pool.
    pub fn start(&mut self, pool: &[Word]) -> Result<Word, RoundError> {
        if pool.is_empty() {
            return Err(RoundError::EmptyPool);
        }

        let index = self.selector.choose(pool).ok_or(RoundError::EmptyPool)?;
        let root = pool
            .get(index)
            .cloned()
            .ok_or(RoundError::SelectionOutOfRange {
                index,
                len: pool.len(),
            })?;

        tracing::info!(root = root.text(), pool_size = pool.len(), "Started new round");

        self.round = Some(Round::new(root.clone()));
        self.persist();
        Ok(root)
    }

    /// Rebuild the round recorded in `snapshot`
    ///
    /// Older snapshot versions are migrated first. Every recorded word is
    /// re-checked against the root (all rules except the spell check), oldest
    /// first. Nothing is persisted.
    ///
    /// # Errors
    ///
    /// Returns a [`ResumeError`] if the snapshot is empty, too new, or holds a
    /// word that could not have been accepted. The active round is left
    /// untouched; the caller should fall back to [`RoundState::start`].
    pub fn resume(&mut self, snapshot: Snapshot) -> Result<&Round, ResumeError> {
        let snapshot = snapshot.migrate()?;

        if snapshot.is_empty() {
            return Err(ResumeError::MissingRoot);
        }

        let root = Word::new(snapshot.root).map_err(ResumeError::InvalidRoot)?;

        let mut accepted: Vec<Word> = Vec::with_capacity(snapshot.used.len());
        for text in snapshot.used.into_iter().rev() {
            if let Err(reason) = self.engine.check_structure(&text, &root, &accepted) {
                return Err(ResumeError::InvalidEntry {
                    word: text,
                    root: root.text().to_string(),
                    reason,
                });
            }
            accepted.push(Word::from_checked(text));
        }
        accepted.reverse();

        tracing::info!(
            root = root.text(),
            words = accepted.len(),
            "Resumed saved round"
        );

        Ok(&*self.round.insert(Round::from_parts(root, accepted)))
    }

    /// Resume the stored round, or start a new one if there is none
    ///
    /// Storage read errors and unusable snapshots are logged and treated as
    /// "no saved round".
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::EmptyPool`] if a new round is needed and `pool`
    /// is empty.
    pub fn resume_or_start(&mut self, pool: &[Word]) -> Result<RoundOrigin, RoundError> {
        let stored = self.gateway.load().unwrap_or_else(|err| {
            tracing::warn!(error = %err, "Could not read saved round; starting fresh");
            None
        });

        if let Some(snapshot) = stored {
            match self.resume(snapshot) {
                Ok(_) => return Ok(RoundOrigin::Resumed),
                Err(err) => {
                    tracing::warn!(error = %err, "Saved round is unusable; starting fresh");
                }
            }
        }

        self.start(pool)?;
        Ok(RoundOrigin::Started)
    }

    /// Validate `candidate` and record it if it passes
    ///
    /// On success the word goes to the front of the used words and the round
    /// is persisted. On rejection nothing changes and nothing is written.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError::Rejected`] with the failing rule's reason, or
    /// [`SubmitError::NoRound`] if no round is active.
    pub fn submit(&mut self, candidate: &str) -> Result<Word, SubmitError> {
        let round = self.round.as_mut().ok_or(SubmitError::NoRound)?;

        let accepted = self
            .engine
            .validate(candidate, round.root(), round.used_words())
            .inspect_err(|reason| {
                tracing::debug!(candidate, %reason, "Rejected submission");
            })?;

        round.record(accepted.clone());
        tracing::debug!(word = accepted.text(), total = round.word_count(), "Accepted word");

        self.persist();
        Ok(accepted)
    }

    /// Write the active round; failures are logged, never returned
    fn persist(&mut self) {
        let Some(round) = &self.round else {
            return;
        };

        let snapshot = Snapshot::from_round(round);
        if let Err(err) = self.gateway.save(&snapshot) {
            tracing::warn!(error = %err, "Failed to save round; progress may not be resumable");
        }
    }
}
