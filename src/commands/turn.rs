//! One-shot round commands: `new`, `submit` and `status`

use super::session::Session;
use crate::round::{RoundOrigin, SubmitError};
use crate::validation::RejectionReason;
use anyhow::{Context, Result};

/// Snapshot of the active round for display
#[derive(Debug, Clone)]
pub struct RoundStatus {
    pub root: String,
    /// Most recent first
    pub used: Vec<String>,
    pub origin: RoundOrigin,
}

/// Outcome of submitting a single word
#[derive(Debug, Clone)]
pub struct SubmitResult {
    pub candidate: String,
    pub root: String,
    pub outcome: Result<String, RejectionReason>,
    pub total_words: usize,
}

impl SubmitResult {
    #[must_use]
    pub const fn accepted(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Describe the current round, resuming or starting one if needed
///
/// # Errors
///
/// Returns an error if no round can be started.
pub fn round_status(session: &mut Session) -> Result<RoundStatus> {
    let origin = session.ensure_round()?;
    status_of(session, origin)
}

/// Throw away the current round and start another
///
/// # Errors
///
/// Returns an error if no root word is available.
pub fn start_new_round(session: &mut Session) -> Result<RoundStatus> {
    session.new_round()?;
    status_of(session, RoundOrigin::Started)
}

/// Submit `candidate` to the saved (or a new) round
///
/// A rejection is a normal outcome, not an error.
///
/// # Errors
///
/// Returns an error if no round can be started.
pub fn submit_word(session: &mut Session, candidate: &str) -> Result<SubmitResult> {
    session.ensure_round()?;

    let outcome = match session.submit(candidate) {
        Ok(word) => Ok(word.text().to_string()),
        Err(SubmitError::Rejected(reason)) => Err(reason),
        Err(err @ SubmitError::NoRound) => return Err(err.into()),
    };

    let root = session.root().context("Round ended unexpectedly")?;

    Ok(SubmitResult {
        candidate: candidate.to_string(),
        root: root.text().to_string(),
        outcome,
        total_words: session.state().used_words().len(),
    })
}

fn status_of(session: &Session, origin: RoundOrigin) -> Result<RoundStatus> {
    let root = session.root().context("No active round")?;

    Ok(RoundStatus {
        root: root.text().to_string(),
        used: session
            .state()
            .used_words()
            .iter()
            .map(|word| word.text().to_string())
            .collect(),
        origin,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::round::{MemoryStore, Snapshot};

    fn terminal_session() -> Session {
        let snapshot = Snapshot {
            root: "terminal".to_string(),
            ..Snapshot::default()
        };
        Session::with_gateway(
            &GameConfig::default(),
            Box::new(MemoryStore::with_snapshot(snapshot)),
        )
    }

    #[test]
    fn status_reports_resumed_round() {
        let mut session = terminal_session();
        let status = round_status(&mut session).unwrap();

        assert_eq!(status.root, "terminal");
        assert!(status.used.is_empty());
        assert_eq!(status.origin, RoundOrigin::Resumed);
    }

    #[test]
    fn submit_accepts_and_counts() {
        let mut session = terminal_session();

        let result = submit_word(&mut session, "Lane").unwrap();
        assert!(result.accepted());
        assert_eq!(result.outcome, Ok("Lane".to_string()));
        assert_eq!(result.total_words, 1);

        let result = submit_word(&mut session, "mental").unwrap();
        assert_eq!(result.total_words, 2);

        let status = round_status(&mut session).unwrap();
        assert_eq!(status.used, ["mental", "Lane"]);
    }

    #[test]
    fn submit_reports_rejection() {
        let mut session = terminal_session();
        submit_word(&mut session, "lane").unwrap();

        let result = submit_word(&mut session, "LANE").unwrap();
        assert!(!result.accepted());
        assert_eq!(result.outcome, Err(RejectionReason::AlreadyUsed));
        assert_eq!(result.total_words, 1);
        assert_eq!(result.root, "terminal");
    }

    #[test]
    fn new_round_clears_words() {
        let mut session = terminal_session();
        submit_word(&mut session, "lane").unwrap();

        let status = start_new_round(&mut session).unwrap();
        assert!(status.used.is_empty());
        assert_eq!(status.origin, RoundOrigin::Started);
    }

    #[test]
    fn status_after_new_round_reports_started() {
        let mut session = terminal_session();
        assert_eq!(round_status(&mut session).unwrap().origin, RoundOrigin::Resumed);

        start_new_round(&mut session).unwrap();
        let status = round_status(&mut session).unwrap();
        assert_eq!(status.origin, RoundOrigin::Started);
    }
}
