//! In-process oracle over a known hidden code

use super::{Oracle, OracleError, Response};
use crate::core::{Code, Evaluation};

/// Faithful simulation of the game server
///
/// Scores every guess with [`Evaluation::calculate`] and keeps the same
/// running guess counter the server reports.
#[derive(Debug, Clone)]
pub struct LocalOracle {
    secret: Code,
    guess_count: usize,
}

impl LocalOracle {
    #[must_use]
    pub const fn new(secret: Code) -> Self {
        Self {
            secret,
            guess_count: 0,
        }
    }

    #[must_use]
    pub const fn secret(&self) -> &Code {
        &self.secret
    }

    /// Number of guesses answered so far
    #[must_use]
    pub const fn guess_count(&self) -> usize {
        self.guess_count
    }
}

impl Oracle for LocalOracle {
    fn length(&self) -> usize {
        self.secret.len()
    }

    fn submit(&mut self, guess: &Code) -> Result<Response, OracleError> {
        guess.check_guess(self.secret.len())?;
        self.guess_count += 1;

        Ok(Response {
            evaluation: Evaluation::calculate(guess, &self.secret),
            guess_count: self.guess_count,
        })
    }
}
