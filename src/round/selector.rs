//! Root word selection
//!
//! Rounds pick their root through a [`RootSelector`] so tests and seeded runs
//! can control the choice.

use crate::core::Word;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Picks the index of the next root word from a pool
pub trait RootSelector {
    /// Index into `pool`, or `None` if the pool is empty
    fn choose(&mut self, pool: &[Word]) -> Option<usize>;
}

impl<R: RootSelector + ?Sized> RootSelector for Box<R> {
    fn choose(&mut self, pool: &[Word]) -> Option<usize> {
        (**self).choose(pool)
    }
}

/// Uniform random choice
pub struct RandomSelector {
    rng: StdRng,
}

impl RandomSelector {
    /// Seeded from the operating system
    #[must_use]
    pub fn from_os_rng() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic sequence for a given seed
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomSelector {
    fn default() -> Self {
        Self::from_os_rng()
    }
}

impl RootSelector for RandomSelector {
    fn choose(&mut self, pool: &[Word]) -> Option<usize> {
        if pool.is_empty() {
            None
        } else {
            Some(self.rng.random_range(0..pool.len()))
        }
    }
}

/// Selector backed by a closure
///
/// ```
/// use word_scramble::core::Word;
/// use word_scramble::round::{FnSelector, RootSelector};
///
/// let pool = vec![Word::new("terminal").unwrap(), Word::new("triangle").unwrap()];
/// let mut last = FnSelector(|pool: &[Word]| pool.len().checked_sub(1));
/// assert_eq!(last.choose(&pool), Some(1));
/// ```
pub struct FnSelector<F>(pub F);

impl<F> RootSelector for FnSelector<F>
where
    F: FnMut(&[Word]) -> Option<usize>,
{
    fn choose(&mut self, pool: &[Word]) -> Option<usize> {
        (self.0)(pool)
    }
}
