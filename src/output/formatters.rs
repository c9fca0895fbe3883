//! Formatting utilities for terminal output

use crate::validation::{RejectionReason, RuleConfig};

/// Short headline for a rejection
#[must_use]
pub fn rejection_title(reason: RejectionReason) -> String {
    reason.to_string()
}

/// Player-facing explanation for a rejection
#[must_use]
pub fn rejection_message(reason: RejectionReason, root: &str, rules: &RuleConfig) -> String {
    match reason {
        RejectionReason::SameWord => "Too easy, don't use the same word!".to_string(),
        RejectionReason::TooShort => format!(
            "Let's keep this to {} letter words or greater!",
            number_word(rules.min_accepted_length())
        ),
        RejectionReason::NotPossible => format!("You can't spell that word from '{root}'!"),
        RejectionReason::AlreadyUsed => "Be more original!".to_string(),
        RejectionReason::NotReal => "You can't just make them up!".to_string(),
    }
}

/// Spell out small counts ("four"), digits beyond twelve
#[must_use]
pub fn number_word(n: usize) -> String {
    const WORDS: [&str; 13] = [
        "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
        "eleven", "twelve",
    ];

    WORDS
        .get(n)
        .map_or_else(|| n.to_string(), |word| (*word).to_string())
}

/// Root letters in capitals with spaces between them
#[must_use]
pub fn spaced_letters(root: &str) -> String {
    root.to_uppercase()
        .chars()
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_for_default_rules() {
        let rules = RuleConfig::default();

        assert_eq!(
            rejection_message(RejectionReason::SameWord, "terminal", &rules),
            "Too easy, don't use the same word!"
        );
        assert_eq!(
            rejection_message(RejectionReason::TooShort, "terminal", &rules),
            "Let's keep this to four letter words or greater!"
        );
        assert_eq!(
            rejection_message(RejectionReason::NotPossible, "terminal", &rules),
            "You can't spell that word from 'terminal'!"
        );
        assert_eq!(
            rejection_message(RejectionReason::AlreadyUsed, "terminal", &rules),
            "Be more original!"
        );
        assert_eq!(
            rejection_message(RejectionReason::NotReal, "terminal", &rules),
            "You can't just make them up!"
        );
    }

    #[test]
    fn length_message_follows_threshold() {
        let rules = RuleConfig {
            min_length_threshold: 4,
            ..RuleConfig::default()
        };
        assert_eq!(
            rejection_message(RejectionReason::TooShort, "terminal", &rules),
            "Let's keep this to five letter words or greater!"
        );
    }

    #[test]
    fn titles_are_distinct() {
        let titles: Vec<String> = [
            RejectionReason::SameWord,
            RejectionReason::TooShort,
            RejectionReason::NotPossible,
            RejectionReason::AlreadyUsed,
            RejectionReason::NotReal,
        ]
        .into_iter()
        .map(rejection_title)
        .collect();

        assert_eq!(titles[0], "Same word");
        for (i, title) in titles.iter().enumerate() {
            assert!(!titles[i + 1..].contains(title), "duplicate title {title}");
        }
    }

    #[test]
    fn number_words() {
        assert_eq!(number_word(4), "four");
        assert_eq!(number_word(12), "twelve");
        assert_eq!(number_word(20), "20");
    }

    #[test]
    fn spaced_root() {
        assert_eq!(spaced_letters("lane"), "L A N E");
        assert_eq!(spaced_letters(""), "");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(5.0, 0.0, 4), "░░░░");
    }
}
