//! Mastermind code representation
//!
//! A Code stores the peg placed in each hole. Guesses have exactly the same
//! shape and validation rules, so they share the type.

use super::{CODE_COUNT, HOLES, PEGS};
use rand::Rng;
use rustc_hash::FxHashMap;
use std::fmt;
use std::str::FromStr;

/// A sequence of `HOLES` pegs, each in `1..=PEGS`
///
/// Only constructible through validating constructors, so every `Code` in the
/// program is well formed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Code([u8; HOLES]);

/// A codebreaker's attempt; same shape as the secret code
pub type Guess = Code;

/// Error type for malformed codes and guesses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeError {
    InvalidLength(usize),
    PegOutOfRange { hole: usize, peg: u8 },
    InvalidCharacter(char),
}

impl fmt::Display for CodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Code must have exactly {HOLES} pegs, got {len}")
            }
            Self::PegOutOfRange { hole, peg } => {
                write!(f, "Peg {peg} in hole {} is outside 1-{PEGS}", hole + 1)
            }
            Self::InvalidCharacter(ch) => write!(f, "Code contains invalid character '{ch}'"),
        }
    }
}

impl std::error::Error for CodeError {}

impl Code {
    /// Create a code from an array of pegs
    ///
    /// # Errors
    /// Returns `CodeError::PegOutOfRange` if any peg is outside `1..=PEGS`.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::Code;
    ///
    /// let code = Code::new([2, 4, 4, 1]).unwrap();
    /// assert_eq!(code.to_string(), "2441");
    ///
    /// assert!(Code::new([0, 1, 2, 3]).is_err());
    /// assert!(Code::new([1, 2, 3, 7]).is_err());
    /// ```
    pub fn new(pegs: [u8; HOLES]) -> Result<Self, CodeError> {
        if let Some((hole, &peg)) = pegs
            .iter()
            .enumerate()
            .find(|&(_, &peg)| !(1..=PEGS).contains(&peg))
        {
            return Err(CodeError::PegOutOfRange { hole, peg });
        }

        Ok(Self(pegs))
    }

    /// Create a code from a slice of arbitrary length
    ///
    /// # Errors
    /// Returns `CodeError::InvalidLength` if the slice does not hold exactly
    /// `HOLES` pegs, or `CodeError::PegOutOfRange` for an invalid peg.
    pub fn from_slice(pegs: &[u8]) -> Result<Self, CodeError> {
        let pegs: [u8; HOLES] = pegs
            .try_into()
            .map_err(|_| CodeError::InvalidLength(pegs.len()))?;
        Self::new(pegs)
    }

    /// Wrap pegs the caller has already proven to be in range
    #[inline]
    pub(crate) fn new_unchecked(pegs: [u8; HOLES]) -> Self {
        debug_assert!(pegs.iter().all(|peg| (1..=PEGS).contains(peg)));
        Self(pegs)
    }

    /// Draw a code uniformly at random, each hole independently
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self(std::array::from_fn(|_| rng.random_range(1..=PEGS)))
    }

    /// The code at position `index` in lexicographic order
    ///
    /// # Panics
    /// Panics in debug mode if `index >= CODE_COUNT`
    #[must_use]
    pub fn from_index(index: usize) -> Self {
        debug_assert!(index < CODE_COUNT, "Code index must be < {CODE_COUNT}");

        let mut pegs = [0u8; HOLES];
        let mut rest = index;
        for peg in pegs.iter_mut().rev() {
            *peg = (rest % PEGS as usize) as u8 + 1;
            rest /= PEGS as usize;
        }

        Self(pegs)
    }

    /// Iterate over every possible code in lexicographic order
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{CODE_COUNT, Code};
    ///
    /// assert_eq!(Code::all().count(), CODE_COUNT);
    /// assert_eq!(Code::all().next().unwrap().to_string(), "1111");
    /// ```
    pub fn all() -> impl Iterator<Item = Self> {
        (0..CODE_COUNT).map(Self::from_index)
    }

    /// Get the pegs as an array
    #[inline]
    #[must_use]
    pub const fn pegs(&self) -> &[u8; HOLES] {
        &self.0
    }

    /// Get the peg in a specific hole (0-based)
    ///
    /// # Panics
    /// Panics if `hole >= HOLES`
    #[inline]
    #[must_use]
    pub const fn peg_at(&self, hole: usize) -> u8 {
        self.0[hole]
    }

    /// Check if the code contains a specific peg value
    #[inline]
    #[must_use]
    pub fn contains(&self, peg: u8) -> bool {
        self.0.contains(&peg)
    }

    /// Get the count of each peg value in the code
    #[inline]
    pub(crate) fn peg_counts(&self) -> FxHashMap<u8, u8> {
        let mut counts = FxHashMap::default();
        for &peg in &self.0 {
            *counts.entry(peg).or_insert(0) += 1;
        }
        counts
    }
}

impl FromStr for Code {
    type Err = CodeError;

    /// Parse a code like `"2441"`, `"2 4 4 1"` or `"2,4,4,1"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut pegs = Vec::with_capacity(HOLES);

        for ch in s.chars() {
            if ch.is_whitespace() || ch == ',' {
                continue;
            }
            let digit = ch.to_digit(10).ok_or(CodeError::InvalidCharacter(ch))?;
            pegs.push(digit as u8);
        }

        Self::from_slice(&pegs)
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for peg in &self.0 {
            write!(f, "{peg}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn code_creation_valid() {
        let code = Code::new([1, 2, 3, 6]).unwrap();
        assert_eq!(code.pegs(), &[1, 2, 3, 6]);
        assert_eq!(code.peg_at(3), 6);
    }

    #[test]
    fn code_creation_peg_out_of_range() {
        assert_eq!(
            Code::new([1, 2, 0, 4]),
            Err(CodeError::PegOutOfRange { hole: 2, peg: 0 })
        );
        assert_eq!(
            Code::new([7, 2, 3, 4]),
            Err(CodeError::PegOutOfRange { hole: 0, peg: 7 })
        );
    }

    #[test]
    fn code_from_slice_invalid_length() {
        assert_eq!(Code::from_slice(&[1, 2, 3]), Err(CodeError::InvalidLength(3)));
        assert_eq!(
            Code::from_slice(&[1, 2, 3, 4, 5]),
            Err(CodeError::InvalidLength(5))
        );
        assert_eq!(Code::from_slice(&[]), Err(CodeError::InvalidLength(0)));
    }

    #[test]
    fn code_parse_accepts_separators() {
        let expected = Code::new([2, 4, 4, 1]).unwrap();
        assert_eq!("2441".parse::<Code>().unwrap(), expected);
        assert_eq!("2 4 4 1".parse::<Code>().unwrap(), expected);
        assert_eq!(" 2,4,4,1 ".parse::<Code>().unwrap(), expected);
    }

    #[test]
    fn code_parse_rejects_garbage() {
        assert_eq!("24a1".parse::<Code>(), Err(CodeError::InvalidCharacter('a')));
        assert_eq!("244".parse::<Code>(), Err(CodeError::InvalidLength(3)));
        assert_eq!(
            "2449".parse::<Code>(),
            Err(CodeError::PegOutOfRange { hole: 3, peg: 9 })
        );
    }

    #[test]
    fn code_display_round_trip() {
        let code = Code::new([6, 5, 1, 1]).unwrap();
        assert_eq!(code.to_string(), "6511");
        assert_eq!(code.to_string().parse::<Code>().unwrap(), code);
    }

    #[test]
    fn code_random_is_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let code = Code::random(&mut rng);
            assert!(code.pegs().iter().all(|peg| (1..=PEGS).contains(peg)));
        }
    }

    #[test]
    fn code_random_is_reproducible() {
        let first: Vec<Code> = {
            let mut rng = StdRng::seed_from_u64(42);
            (0..10).map(|_| Code::random(&mut rng)).collect()
        };
        let second: Vec<Code> = {
            let mut rng = StdRng::seed_from_u64(42);
            (0..10).map(|_| Code::random(&mut rng)).collect()
        };
        assert_eq!(first, second);
    }

    #[test]
    fn code_all_is_exhaustive_and_ordered() {
        let codes: Vec<Code> = Code::all().collect();
        assert_eq!(codes.len(), CODE_COUNT);
        assert_eq!(codes[0].to_string(), "1111");
        assert_eq!(codes[1].to_string(), "1112");
        assert_eq!(codes[6].to_string(), "1121");
        assert_eq!(codes[CODE_COUNT - 1].to_string(), "6666");
        assert!(codes.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn code_peg_counts_with_duplicates() {
        let code = Code::new([2, 4, 4, 1]).unwrap();
        let counts = code.peg_counts();
        assert_eq!(counts.len(), 3);
        assert_eq!(counts.get(&4), Some(&2));
        assert_eq!(counts.get(&2), Some(&1));
        assert_eq!(counts.get(&3), None);
    }

    #[test]
    fn code_contains() {
        let code = Code::new([2, 4, 4, 1]).unwrap();
        assert!(code.contains(4));
        assert!(!code.contains(6));
    }
}
