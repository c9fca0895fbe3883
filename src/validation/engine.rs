//! Validation engine
//!
//! Runs a candidate through the rule chain against the current root word and
//! the words already accepted. Pure: no state is read or written besides the
//! arguments.

use super::rules::{RejectionReason, Rule, RuleConfig};
use super::spell::SpellChecker;
use crate::core::Word;

/// Decides whether a candidate may be accepted into a round
pub struct ValidationEngine<C: SpellChecker> {
    config: RuleConfig,
    checker: C,
}

impl<C: SpellChecker> ValidationEngine<C> {
    /// Create an engine with explicit rule parameters
    pub const fn new(config: RuleConfig, checker: C) -> Self {
        Self { config, checker }
    }

    /// Create an engine with the default threshold (3) and language (`en`)
    pub fn with_defaults(checker: C) -> Self {
        Self::new(RuleConfig::default(), checker)
    }

    #[must_use]
    pub const fn config(&self) -> &RuleConfig {
        &self.config
    }

    pub const fn checker(&self) -> &C {
        &self.checker
    }

    /// Validate `candidate` against `root` and `used`
    ///
    /// Rules run in [`Rule::ORDER`]; the first failing rule decides the
    /// rejection. On success the accepted word keeps the candidate's casing.
    ///
    /// # Errors
    ///
    /// Returns the [`RejectionReason`] of the first rule the candidate fails.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::Word;
    /// use word_scramble::validation::{
    ///     LanguageTag, RejectionReason, ValidationEngine, WordListChecker,
    /// };
    ///
    /// let checker = WordListChecker::new(LanguageTag::default(), ["lane"]);
    /// let engine = ValidationEngine::with_defaults(checker);
    /// let root = Word::new("terminal").unwrap();
    ///
    /// assert_eq!(engine.validate("Lane", &root, &[]).unwrap().text(), "Lane");
    /// assert_eq!(engine.validate("it", &root, &[]), Err(RejectionReason::TooShort));
    /// ```
    pub fn validate(
        &self,
        candidate: &str,
        root: &Word,
        used: &[Word],
    ) -> Result<Word, RejectionReason> {
        self.run(&Rule::ORDER, candidate, root, used)?;
        // Non-empty and whitespace-free: the length and spellability rules passed
        Ok(Word::from_checked(candidate.to_string()))
    }

    /// Apply every rule except the spell check
    ///
    /// Used to re-check words restored from a snapshot, where the spell
    /// checker may have changed since the word was accepted.
    ///
    /// # Errors
    ///
    /// Returns the [`RejectionReason`] of the first structural rule that fails.
    pub fn check_structure(
        &self,
        candidate: &str,
        root: &Word,
        used: &[Word],
    ) -> Result<(), RejectionReason> {
        self.run(&Rule::STRUCTURAL, candidate, root, used)
    }

    fn run(
        &self,
        rules: &[Rule],
        candidate: &str,
        root: &Word,
        used: &[Word],
    ) -> Result<(), RejectionReason> {
        // Length is taken before folding; some letters lowercase to two chars
        let length = candidate.chars().count();
        let folded = candidate.to_lowercase();

        for &rule in rules {
            if !self.passes(rule, &folded, length, root, used) {
                tracing::trace!(candidate, root = root.text(), ?rule, "Candidate rejected");
                return Err(rule.rejection());
            }
        }

        Ok(())
    }

    fn passes(
        &self,
        rule: Rule,
        folded: &str,
        length: usize,
        root: &Word,
        used: &[Word],
    ) -> bool {
        match rule {
            Rule::SameAsRoot => folded != root.folded(),
            Rule::TooShort => length > self.config.min_length_threshold,
            Rule::NotSpellableFromRoot => root.letter_counts().can_spell(folded),
            Rule::AlreadyUsed => !used.iter().any(|word| word.folded() == folded),
            Rule::NotRecognizedWord => self.checker.is_recognized(folded, &self.config.language),
        }
    }
}
