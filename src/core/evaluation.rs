//! Peg feedback for a guess
//!
//! - black: positions where guess and hidden code agree
//! - white: symbols present in the hidden code but guessed at the wrong position
//!
//! The sentinel symbol `0` never contributes to either count.

use super::{Code, SENTINEL};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Feedback for a single guess
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Evaluation {
    pub black: usize,
    pub white: usize,
}

impl Evaluation {
    #[must_use]
    pub const fn new(black: usize, white: usize) -> Self {
        Self { black, white }
    }

    /// Calculate the feedback when `guess` is played against `secret`
    ///
    /// # Algorithm
    /// 1. Black pegs: count positional matches
    /// 2. Total overlap: Σ min(guess count, secret count) over real symbols
    /// 3. White pegs: overlap minus black pegs
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::{Code, Evaluation};
    ///
    /// let secret = Code::secret(vec![3, 1, 4, 1, 5]).unwrap();
    /// let guess = Code::guess(vec![1, 1, 5, 0, 0], 5).unwrap();
    ///
    /// // position 1 matches; the first 1 and the 5 are misplaced
    /// assert_eq!(Evaluation::calculate(&guess, &secret), Evaluation::new(1, 2));
    /// ```
    #[must_use]
    pub fn calculate(guess: &Code, secret: &Code) -> Self {
        let black = guess
            .symbols()
            .iter()
            .zip(secret.symbols())
            .filter(|&(&g, &s)| g != SENTINEL && g == s)
            .count();

        let guess_counts = guess.frequencies();
        let secret_counts = secret.frequencies();
        let overlap: usize = guess_counts
            .iter()
            .zip(&secret_counts)
            .skip(1)
            .map(|(&g, &s)| g.min(s))
            .sum();

        Self {
            black,
            white: overlap - black,
        }
    }

    /// Check if every one of `length` positions matched
    #[inline]
    #[must_use]
    pub const fn is_solved(self, length: usize) -> bool {
        self.black == length
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}B{}W", self.black, self.white)
    }
}
