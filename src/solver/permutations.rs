//! Pool of untried orderings of the confirmed pegs
//!
//! Stored as a flat `Vec` so a uniform draw is an index pick followed by an
//! O(1) `swap_remove`.

use crate::core::{Code, HOLES};
use rand::Rng;

/// Distinct permutations of a multiset of pegs that have not been guessed yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermutationPool {
    permutations: Vec<Code>,
}

impl PermutationPool {
    /// Enumerate every distinct ordering of `pegs`
    ///
    /// Repeated pegs are accounted for: `[1, 1, 2, 2]` yields 6 orderings,
    /// not 24.
    ///
    /// # Examples
    /// ```
    /// use mastermind::solver::PermutationPool;
    ///
    /// assert_eq!(PermutationPool::new([1, 2, 3, 4]).len(), 24);
    /// assert_eq!(PermutationPool::new([2, 4, 4, 1]).len(), 12);
    /// assert_eq!(PermutationPool::new([6, 6, 6, 6]).len(), 1);
    /// ```
    #[must_use]
    pub fn new(mut pegs: [u8; HOLES]) -> Self {
        pegs.sort_unstable();

        let mut permutations = vec![Code::new_unchecked(pegs)];
        while next_permutation(&mut pegs) {
            permutations.push(Code::new_unchecked(pegs));
        }

        Self { permutations }
    }

    /// Number of permutations left
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.permutations.len()
    }

    /// Check if every permutation has been used up
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.permutations.is_empty()
    }

    /// Check if a code is still in the pool
    #[must_use]
    pub fn contains(&self, code: &Code) -> bool {
        self.permutations.contains(code)
    }

    /// Iterate over the remaining permutations
    pub fn iter(&self) -> impl Iterator<Item = &Code> {
        self.permutations.iter()
    }

    /// Keep only the permutations matching `keep`
    pub fn retain<F: FnMut(&Code) -> bool>(&mut self, keep: F) {
        self.permutations.retain(keep);
    }

    /// Remove and return a uniformly chosen permutation
    ///
    /// Returns `None` once the pool is empty.
    pub fn draw<R: Rng>(&mut self, rng: &mut R) -> Option<Code> {
        if self.permutations.is_empty() {
            return None;
        }

        let index = rng.random_range(0..self.permutations.len());
        Some(self.permutations.swap_remove(index))
    }
}

/// Rearrange `pegs` into the next lexicographic ordering
///
/// Returns `false` once `pegs` is the last (descending) ordering.
fn next_permutation(pegs: &mut [u8]) -> bool {
    let Some(pivot) = pegs.windows(2).rposition(|pair| pair[0] < pair[1]) else {
        return false;
    };

    // A larger element exists to the right of the pivot by construction
    let successor = pegs
        .iter()
        .rposition(|&peg| peg > pegs[pivot])
        .unwrap_or(pivot + 1);
    pegs.swap(pivot, successor);
    pegs[pivot + 1..].reverse();

    true
}
