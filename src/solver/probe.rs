//! Probing codebreaker
//!
//! Works in two phases:
//! 1. **Discover**: probe one peg value per turn, padding the confirmed pegs
//!    with copies of the probe value. The Perfect + Exists count tells how
//!    many copies of the probe value the code holds.
//! 2. **Permute**: once every code peg is known, guess orderings of them
//!    drawn at random from a pool pruned against all feedback so far.
//!
//! Pruning keeps a permutation only if it would have produced every key
//! observed in the game, discovery probes included. An all-Exists key is the
//! special case where no hole of that guess can be right.

use super::consistent::is_consistent;
use super::{PermutationPool, SolverError, Strategy};
use crate::core::{Code, Guess, HOLES, Key, PEGS};
use log::{debug, trace};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::iter;

/// Where the probing codebreaker is in its deduction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    /// Counting how often each peg value occurs; `probe` is the next value
    Discover { probe: u8 },
    /// All code pegs known, searching for their order
    Permute(PermutationPool),
    /// A perfect key has been seen
    Done,
}

/// Codebreaker that first counts peg values, then orders them
///
/// Feed it the full history each turn; it folds only the entries it has not
/// seen yet. Deterministic for a given seed.
///
/// # Examples
/// ```
/// use mastermind::core::{Code, Key, MAX_TURNS};
/// use mastermind::solver::{ProbeStrategy, Strategy};
///
/// let secret = Code::new([2, 4, 4, 1]).unwrap();
/// let mut solver = ProbeStrategy::new(42);
/// let mut history = Vec::new();
///
/// loop {
///     let guess = solver.next_guess(&history).unwrap();
///     let key = Key::calculate(&guess, &secret);
///     history.push((guess, key));
///     if key.is_perfect() {
///         break;
///     }
/// }
/// assert!(history.len() <= MAX_TURNS);
/// ```
#[derive(Debug, Clone)]
pub struct ProbeStrategy {
    phase: Phase,
    confirmed: Vec<u8>,
    folded: usize,
    rng: StdRng,
}

impl ProbeStrategy {
    /// Create a solver whose permutation draws are reproducible from `seed`
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            phase: Phase::Discover { probe: 1 },
            confirmed: Vec::with_capacity(HOLES),
            folded: 0,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Current phase of the deduction
    #[must_use]
    pub const fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Pegs known to be in the code, with multiplicity
    #[must_use]
    pub fn confirmed(&self) -> &[u8] {
        &self.confirmed
    }

    /// Untried permutations left, once in the permute phase
    #[must_use]
    pub fn remaining_permutations(&self) -> Option<usize> {
        match &self.phase {
            Phase::Permute(pool) => Some(pool.len()),
            _ => None,
        }
    }

    /// Fold the last entry of `seen` into the solver state
    fn fold(&mut self, seen: &[(Guess, Key)]) -> Result<(), SolverError> {
        let Some(&(guess, key)) = seen.last() else {
            return Ok(());
        };

        if key.is_perfect() {
            debug!("{guess} cracked the code on turn {}", seen.len());
            self.phase = Phase::Done;
            return Ok(());
        }

        let probe = match &mut self.phase {
            Phase::Discover { probe } => *probe,
            Phase::Permute(pool) => {
                pool.retain(|candidate| is_consistent(candidate, &guess, key));
                debug!("{guess} scored {key}: {} permutations remain", pool.len());
                return Ok(());
            }
            Phase::Done => return Err(SolverError::AlreadySolved),
        };

        self.confirm(probe, guess, key)?;
        self.advance_discovery(probe, seen)
    }

    /// Record the copies of `probe` revealed by a discovery key
    fn confirm(&mut self, probe: u8, guess: Guess, key: Key) -> Result<(), SolverError> {
        let hits = usize::from(key.hits());

        // Confirmed pegs are all in the code, so they account for exactly
        // `confirmed.len()` of the hits; the rest are copies of the probe.
        let Some(keep) = hits.checked_sub(self.confirmed.len()) else {
            return Err(SolverError::InconsistentKey { guess, key });
        };

        trace!("probe {probe}: {key} -> {keep} new");
        self.confirmed.extend(iter::repeat_n(probe, keep));
        Ok(())
    }

    /// Move to the next probe value, or to the permute phase
    fn advance_discovery(&mut self, probe: u8, seen: &[(Guess, Key)]) -> Result<(), SolverError> {
        let next = probe + 1;

        // Whatever is unconfirmed after every other value has been probed
        // must be copies of the last value
        if self.confirmed.len() < HOLES && next == PEGS {
            let rest = HOLES - self.confirmed.len();
            debug!("inferring {rest} x {PEGS} without probing");
            self.confirmed.extend(iter::repeat_n(PEGS, rest));
        }

        if self.confirmed.len() == HOLES {
            return self.enter_permute(seen);
        }

        if next > PEGS {
            return Err(SolverError::ExhaustedStrategy {
                confirmed: self.confirmed.len(),
            });
        }

        self.phase = Phase::Discover { probe: next };
        Ok(())
    }

    fn enter_permute(&mut self, seen: &[(Guess, Key)]) -> Result<(), SolverError> {
        let confirmed = self.confirmed.len();
        let pegs: [u8; HOLES] = self
            .confirmed
            .as_slice()
            .try_into()
            .map_err(|_| SolverError::ExhaustedStrategy { confirmed })?;

        let mut pool = PermutationPool::new(pegs);
        let total = pool.len();
        pool.retain(|candidate| {
            seen.iter()
                .all(|(guess, key)| is_consistent(candidate, guess, *key))
        });

        debug!(
            "confirmed pegs {:?} after {} turns: {}/{total} permutations consistent",
            self.confirmed,
            seen.len(),
            pool.len()
        );
        self.phase = Phase::Permute(pool);
        Ok(())
    }

    /// Confirmed pegs plus copies of `probe` in the free holes
    ///
    /// The confirmed block leads unless the previous key had no Perfect, in
    /// which case it moves to the back, off the holes just proven wrong.
    fn probe_guess(confirmed: &[u8], probe: u8, previous: Option<Key>) -> Guess {
        let free = HOLES - confirmed.len();
        let shift = !confirmed.is_empty() && previous.is_some_and(|key| key.perfect() == 0);

        let mut pegs = [probe; HOLES];
        if shift {
            pegs[free..].copy_from_slice(confirmed);
        } else {
            pegs[..confirmed.len()].copy_from_slice(confirmed);
        }

        Code::new_unchecked(pegs)
    }
}

impl Strategy for ProbeStrategy {
    fn next_guess(&mut self, history: &[(Guess, Key)]) -> Result<Guess, SolverError> {
        for seen in self.folded + 1..=history.len() {
            self.fold(&history[..seen])?;
            self.folded = seen;
        }

        match &mut self.phase {
            Phase::Discover { probe } => Ok(Self::probe_guess(
                &self.confirmed,
                *probe,
                history.last().map(|&(_, key)| key),
            )),
            Phase::Permute(pool) => pool
                .draw(&mut self.rng)
                .ok_or(SolverError::EmptyPermutationPool),
            Phase::Done => Err(SolverError::AlreadySolved),
        }
    }
}
