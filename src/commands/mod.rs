//! Command implementations

pub mod hints;
pub mod session;
pub mod simple;
pub mod survey;
pub mod turn;

pub use hints::{HintsResult, find_hints};
pub use session::{GameState, Session};
pub use simple::run_simple;
pub use survey::{SurveyEntry, SurveyResult, run_survey};
pub use turn::{RoundStatus, SubmitResult, round_status, start_new_round, submit_word};
