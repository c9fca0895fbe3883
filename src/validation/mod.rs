//! Word validation
//!
//! The rule chain every candidate goes through, and the spell checking
//! capability it relies on.

mod engine;
mod rules;
pub mod spell;

pub use engine::ValidationEngine;
pub use rules::{RejectionReason, Rule, RuleConfig};
pub use spell::{LanguageTag, SpellChecker, WordListChecker};
