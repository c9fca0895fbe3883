//! Core domain types for the word game
//!
//! Words, letter multisets and the round aggregate. Everything here is pure
//! data with no I/O.

mod letters;
mod round;
mod word;

pub use letters::LetterCounts;
pub use round::Round;
pub use word::{Word, WordError};
