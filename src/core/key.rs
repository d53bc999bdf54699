//! Mastermind feedback key calculation and representation
//!
//! A key summarises how close a guess came to the secret code:
//! - Perfect = right peg in the right hole
//! - Exists = right peg in the wrong hole (after perfect matches are removed)
//! - Miss = peg has no unmatched occurrence left in the code
//!
//! Mark order carries no meaning, so the key is stored as two counts.

use super::{Code, CodeError, HOLES};
use std::fmt;
use std::str::FromStr;

/// A single feedback mark
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Perfect,
    Exists,
    Miss,
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Perfect => write!(f, "PERFECT"),
            Self::Exists => write!(f, "EXISTS"),
            Self::Miss => write!(f, "-"),
        }
    }
}

/// Feedback for one guess
///
/// Invariant: `perfect + exists <= HOLES`; the remaining holes are misses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Key {
    perfect: u8,
    exists: u8,
}

/// Error type for invalid keys
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyError {
    InvalidLength(usize),
    InvalidMark(char),
    TooManyMarks { perfect: u8, exists: u8 },
}

impl fmt::Display for KeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Key must have exactly {HOLES} marks, got {len}")
            }
            Self::InvalidMark(ch) => write!(f, "Invalid key mark '{ch}' (use P, E or -)"),
            Self::TooManyMarks { perfect, exists } => write!(
                f,
                "{perfect} perfect + {exists} exists exceeds {HOLES} holes"
            ),
        }
    }
}

impl std::error::Error for KeyError {}

impl Key {
    /// All pegs in the right holes
    pub const PERFECT: Self = Self {
        perfect: HOLES as u8,
        exists: 0,
    };

    /// Create a key from its counts
    ///
    /// # Errors
    /// Returns `KeyError::TooManyMarks` if the counts exceed `HOLES`.
    pub fn new(perfect: u8, exists: u8) -> Result<Self, KeyError> {
        if usize::from(perfect) + usize::from(exists) > HOLES {
            return Err(KeyError::TooManyMarks { perfect, exists });
        }
        Ok(Self { perfect, exists })
    }

    /// Number of Perfect marks
    #[inline]
    #[must_use]
    pub const fn perfect(self) -> u8 {
        self.perfect
    }

    /// Number of Exists marks
    #[inline]
    #[must_use]
    pub const fn exists(self) -> u8 {
        self.exists
    }

    /// Number of Miss marks
    #[inline]
    #[must_use]
    pub const fn miss(self) -> u8 {
        HOLES as u8 - self.perfect - self.exists
    }

    /// Perfect plus Exists: how many guessed pegs occur in the code
    #[inline]
    #[must_use]
    pub const fn hits(self) -> u8 {
        self.perfect + self.exists
    }

    /// Check if the guess cracked the code
    #[inline]
    #[must_use]
    pub const fn is_perfect(self) -> bool {
        self.perfect as usize == HOLES
    }

    /// Check if every peg is right but none is in the right hole
    #[inline]
    #[must_use]
    pub const fn is_all_exists(self) -> bool {
        self.exists as usize == HOLES
    }

    /// Calculate the key when `guess` is played against the secret `code`
    ///
    /// A peg value present k times in the code yields at most k marks in
    /// total, however often the guess repeats it.
    ///
    /// # Algorithm
    /// 1. Exact pass: count holes where guess and code agree; the other code
    ///    pegs form the pool of unmatched values
    /// 2. Partial pass: each remaining guess peg, in hole order, consumes one
    ///    occurrence from the pool and scores an Exists
    /// 3. Everything else is a Miss
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Code, Key};
    ///
    /// let code = Code::new([2, 4, 4, 1]).unwrap();
    /// let guess = Code::new([1, 4, 2, 4]).unwrap();
    /// let key = Key::calculate(&guess, &code);
    ///
    /// assert_eq!((key.perfect(), key.exists(), key.miss()), (1, 2, 1));
    /// ```
    #[must_use]
    pub fn calculate(guess: &Code, code: &Code) -> Self {
        let mut exact = [false; HOLES];
        let mut unmatched = code.peg_counts();
        let mut perfect = 0;

        // Allow: Index needed to compare both codes and flag the hole
        #[allow(clippy::needless_range_loop)]
        for hole in 0..HOLES {
            let peg = guess.peg_at(hole);
            if peg == code.peg_at(hole) {
                exact[hole] = true;
                perfect += 1;
                if let Some(count) = unmatched.get_mut(&peg) {
                    *count -= 1;
                }
            }
        }

        let mut exists = 0;
        for hole in (0..HOLES).filter(|&hole| !exact[hole]) {
            if let Some(count) = unmatched.get_mut(&guess.peg_at(hole))
                && *count > 0
            {
                *count -= 1;
                exists += 1;
            }
        }

        Self { perfect, exists }
    }

    /// Expand the key into marks: Perfect first, then Exists, then Miss
    #[must_use]
    pub fn marks(self) -> [Mark; HOLES] {
        std::array::from_fn(|i| {
            if i < usize::from(self.perfect) {
                Mark::Perfect
            } else if i < usize::from(self.hits()) {
                Mark::Exists
            } else {
                Mark::Miss
            }
        })
    }
}

/// Score a raw guess against a raw code, validating both first
///
/// # Errors
/// Returns `CodeError` if either slice has the wrong length or holds a peg
/// outside `1..=PEGS`; malformed input is rejected rather than miscounted.
///
/// # Examples
/// ```
/// use mastermind::core::score_pegs;
///
/// let key = score_pegs(&[1, 1, 2, 3], &[1, 2, 2, 2]).unwrap();
/// assert_eq!((key.perfect(), key.exists(), key.miss()), (1, 1, 2));
///
/// assert!(score_pegs(&[1, 1, 2, 3], &[1, 2, 2]).is_err());
/// ```
pub fn score_pegs(code: &[u8], guess: &[u8]) -> Result<Key, CodeError> {
    let code = Code::from_slice(code)?;
    let guess = Code::from_slice(guess)?;
    Ok(Key::calculate(&guess, &code))
}

impl FromStr for Key {
    type Err = KeyError;

    /// Parse a key like `"PE--"`; `.` is accepted for a miss as well
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let marks: Vec<char> = s.chars().filter(|ch| !ch.is_whitespace()).collect();

        if marks.len() != HOLES {
            return Err(KeyError::InvalidLength(marks.len()));
        }

        let mut perfect = 0;
        let mut exists = 0;
        for ch in marks {
            match ch {
                'P' | 'p' => perfect += 1,
                'E' | 'e' => exists += 1,
                '-' | '.' => {}
                _ => return Err(KeyError::InvalidMark(ch)),
            }
        }

        Self::new(perfect, exists)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mark in self.marks() {
            let symbol = match mark {
                Mark::Perfect => 'P',
                Mark::Exists => 'E',
                Mark::Miss => '-',
            };
            write!(f, "{symbol}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PEGS;

    fn code(pegs: [u8; HOLES]) -> Code {
        Code::new(pegs).unwrap()
    }

    fn counts(key: Key) -> (u8, u8, u8) {
        (key.perfect(), key.exists(), key.miss())
    }

    #[test]
    fn key_perfect_constant() {
        assert!(Key::PERFECT.is_perfect());
        assert_eq!(counts(Key::PERFECT), (4, 0, 0));
        assert_eq!(Key::PERFECT.marks(), [Mark::Perfect; HOLES]);
    }

    #[test]
    fn key_code_against_itself_is_perfect() {
        for secret in Code::all() {
            assert_eq!(Key::calculate(&secret, &secret), Key::PERFECT);
        }
    }

    #[test]
    fn key_marks_always_sum_to_holes() {
        let codes: Vec<Code> = Code::all().step_by(7).collect();
        for secret in &codes {
            for guess in &codes {
                let key = Key::calculate(guess, secret);
                let total = key.perfect() + key.exists() + key.miss();
                assert_eq!(usize::from(total), HOLES, "{guess} vs {secret}");
            }
        }
    }

    #[test]
    fn key_duplicate_guess_pegs_not_over_counted() {
        // Code 1123, guess 1222: hole 1 is exact, then a single 2 remains in
        // the code for the three leftover 2s
        let key = Key::calculate(&code([1, 2, 2, 2]), &code([1, 1, 2, 3]));
        assert_eq!(counts(key), (1, 1, 2));
    }

    #[test]
    fn key_duplicate_code_pegs() {
        // Code 2441, guess 1424: hole 2 is exact; 1, 2 and one 4 remain
        let key = Key::calculate(&code([1, 4, 2, 4]), &code([2, 4, 4, 1]));
        assert_eq!(counts(key), (1, 2, 1));
    }

    #[test]
    fn key_exact_match_takes_priority_over_exists() {
        // The 3 at hole 4 is exact, so the early 3 in the guess has nothing left
        let key = Key::calculate(&code([3, 1, 1, 3]), &code([2, 2, 2, 3]));
        assert_eq!(counts(key), (1, 0, 3));
    }

    #[test]
    fn key_all_exists() {
        let key = Key::calculate(&code([4, 3, 2, 1]), &code([1, 2, 3, 4]));
        assert!(key.is_all_exists());
        assert_eq!(key.marks(), [Mark::Exists; HOLES]);
    }

    #[test]
    fn key_single_absent_value_is_all_miss() {
        let secret = code([2, 4, 4, 1]);
        for peg in [3, 5, 6] {
            let key = Key::calculate(&code([peg; HOLES]), &secret);
            assert_eq!(counts(key), (0, 0, 4));
        }
    }

    #[test]
    fn key_repeated_probe_counts_multiplicity() {
        let secret = code([6, 2, 6, 6]);
        let key = Key::calculate(&code([PEGS; HOLES]), &secret);
        assert_eq!(counts(key), (3, 0, 1));
    }

    #[test]
    fn key_is_idempotent() {
        let secret = code([5, 1, 5, 2]);
        let guess = code([1, 5, 5, 6]);
        assert_eq!(
            Key::calculate(&guess, &secret),
            Key::calculate(&guess, &secret)
        );
    }

    #[test]
    fn key_marks_order_perfect_first() {
        let key = Key::new(1, 2).unwrap();
        assert_eq!(
            key.marks(),
            [Mark::Perfect, Mark::Exists, Mark::Exists, Mark::Miss]
        );
    }

    #[test]
    fn key_new_rejects_impossible_counts() {
        assert_eq!(
            Key::new(3, 2),
            Err(KeyError::TooManyMarks {
                perfect: 3,
                exists: 2
            })
        );
        assert!(Key::new(0, 4).is_ok());
    }

    #[test]
    fn key_from_str_valid() {
        let k1: Key = "PE--".parse().unwrap();
        let k2: Key = "-eP.".parse().unwrap();
        let k3: Key = "P E - -".parse().unwrap();

        assert_eq!(k1, k2);
        assert_eq!(k1, k3);
        assert_eq!(counts(k1), (1, 1, 2));
    }

    #[test]
    fn key_from_str_invalid() {
        assert_eq!("PE-".parse::<Key>(), Err(KeyError::InvalidLength(3)));
        assert_eq!("PE--P".parse::<Key>(), Err(KeyError::InvalidLength(5)));
        assert_eq!("PX--".parse::<Key>(), Err(KeyError::InvalidMark('X')));
    }

    #[test]
    fn key_display_matches_parse() {
        let key = Key::new(2, 1).unwrap();
        assert_eq!(key.to_string(), "PPE-");
        assert_eq!(key.to_string().parse::<Key>().unwrap(), key);
    }

    #[test]
    fn score_pegs_rejects_malformed_input() {
        assert_eq!(
            score_pegs(&[1, 2, 3, 4], &[1, 2, 3]),
            Err(CodeError::InvalidLength(3))
        );
        assert_eq!(
            score_pegs(&[1, 2, 3, 4], &[1, 2, 3, 7]),
            Err(CodeError::PegOutOfRange { hole: 3, peg: 7 })
        );
        assert_eq!(
            score_pegs(&[0, 2, 3, 4], &[1, 2, 3, 4]),
            Err(CodeError::PegOutOfRange { hole: 0, peg: 0 })
        );
    }

    #[test]
    fn score_pegs_matches_calculate() {
        let key = score_pegs(&[2, 4, 4, 1], &[1, 4, 2, 4]).unwrap();
        assert_eq!(counts(key), (1, 2, 1));
    }
}
