//! Word Scramble
//!
//! A word game: make as many words as you can from the letters of a random
//! eight-letter root word. Rounds are saved and resumed between runs.
//!
//! # Quick Start
//!
//! ```rust
//! use word_scramble::core::Word;
//! use word_scramble::validation::{RejectionReason, ValidationEngine, WordListChecker};
//!
//! let engine = ValidationEngine::with_defaults(WordListChecker::embedded());
//! let root = Word::new("terminal").unwrap();
//!
//! assert!(engine.validate("mental", &root, &[]).is_ok());
//! assert_eq!(
//!     engine.validate("banana", &root, &[]),
//!     Err(RejectionReason::NotPossible)
//! );
//! ```

// Core domain types
pub mod core;

// Word validation rules
pub mod validation;

// Round lifecycle and persistence
pub mod round;

// Word lists
pub mod wordlists;

// Settings file
pub mod config;

// Tracing subscriber setup
pub mod logging;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
