//! Letter multiset used by the spellability rule
//!
//! A candidate can be spelled from a root when, for every letter, the candidate
//! needs no more copies than the root provides.

use rustc_hash::FxHashMap;

/// Count of each lowercase character in a piece of text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterCounts {
    counts: FxHashMap<char, u32>,
    total: usize,
}

impl LetterCounts {
    /// Build counts from text, lowercasing first
    ///
    /// No accent or diacritic folding is applied: `é` and `e` are different letters.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        let mut counts: FxHashMap<char, u32> = FxHashMap::default();
        let mut total = 0;

        for ch in text.to_lowercase().chars() {
            *counts.entry(ch).or_insert(0) += 1;
            total += 1;
        }

        Self { counts, total }
    }

    /// How many copies of `letter` are available
    #[inline]
    #[must_use]
    pub fn count(&self, letter: char) -> u32 {
        self.counts.get(&letter).copied().unwrap_or(0)
    }

    /// Total number of letters, duplicates included
    #[inline]
    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }

    /// Number of distinct letters
    #[inline]
    #[must_use]
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Check whether every letter of `other` is available here, respecting multiplicity
    #[must_use]
    pub fn contains(&self, other: &Self) -> bool {
        other.total <= self.total
            && other
                .counts
                .iter()
                .all(|(&letter, &needed)| self.count(letter) >= needed)
    }

    /// Check whether `candidate` can be spelled using only these letters
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::LetterCounts;
    ///
    /// let root = LetterCounts::from_text("terminal");
    /// assert!(root.can_spell("lane"));
    /// assert!(root.can_spell("LANE"));
    /// assert!(!root.can_spell("zebra"));
    /// assert!(!root.can_spell("animal")); // only one 'a' in terminal
    /// ```
    #[must_use]
    pub fn can_spell(&self, candidate: &str) -> bool {
        self.contains(&Self::from_text(candidate))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn counts_duplicates() {
        let counts = LetterCounts::from_text("balloon");
        assert_eq!(counts.count('l'), 2);
        assert_eq!(counts.count('o'), 2);
        assert_eq!(counts.count('b'), 1);
        assert_eq!(counts.count('z'), 0);
        assert_eq!(counts.total(), 7);
        assert_eq!(counts.distinct(), 5);
    }

    #[test]
    fn counts_are_lowercased() {
        let counts = LetterCounts::from_text("TerMinal");
        assert_eq!(counts.count('t'), 1);
        assert_eq!(counts.count('m'), 1);
        assert_eq!(counts.count('T'), 0);
    }

    #[test]
    fn empty_text_has_no_letters() {
        let counts = LetterCounts::from_text("");
        assert_eq!(counts.total(), 0);
        assert_eq!(counts.distinct(), 0);
    }

    #[test]
    fn can_spell_respects_multiplicity() {
        let root = LetterCounts::from_text("terminal");
        assert!(root.can_spell("mental"));
        assert!(root.can_spell("terminal"));
        // 'e' appears once in terminal
        assert!(!root.can_spell("teen"));
        assert!(!root.can_spell("terminals"));
    }

    #[test]
    fn can_spell_rejects_missing_letters() {
        let root = LetterCounts::from_text("terminal");
        assert!(!root.can_spell("zebra"));
        assert!(!root.can_spell("lance"));
    }

    #[test]
    fn can_spell_does_not_fold_accents() {
        let root = LetterCounts::from_text("cafe");
        assert!(!root.can_spell("café"));
        assert!(LetterCounts::from_text("café").can_spell("CAFÉ"));
    }

    #[test]
    fn empty_candidate_is_always_spellable() {
        assert!(LetterCounts::from_text("terminal").can_spell(""));
        assert!(LetterCounts::from_text("").can_spell(""));
    }

    proptest! {
        #[test]
        fn spellable_iff_per_letter_counts_fit(
            root in "[a-eA-E]{0,10}",
            candidate in "[a-eA-E]{0,10}",
        ) {
            let root_lower = root.to_lowercase();
            let candidate_lower = candidate.to_lowercase();
            let expected = candidate_lower.chars().all(|ch| {
                candidate_lower.matches(ch).count() <= root_lower.matches(ch).count()
            });

            prop_assert_eq!(LetterCounts::from_text(&root).can_spell(&candidate), expected);
        }

        #[test]
        fn any_permutation_of_root_is_spellable(root in "[a-z]{1,12}", seed in any::<u64>()) {
            let mut letters: Vec<char> = root.chars().collect();
            let len = letters.len();
            letters.rotate_left((seed as usize) % len);
            let candidate: String = letters.into_iter().collect();

            prop_assert!(LetterCounts::from_text(&root).can_spell(&candidate));
        }
    }
}
