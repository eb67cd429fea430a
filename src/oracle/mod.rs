//! Oracles answer guesses with peg feedback
//!
//! The solver only talks to the `Oracle` trait, so the same reconstruction
//! runs against a local simulation, the remote game server, or a human at
//! the terminal.

mod console;
mod local;
mod remote;

pub use console::ConsoleOracle;
pub use local::LocalOracle;
pub use remote::{RemoteOracle, SessionStart};

use crate::core::{Code, CodeError, Evaluation};

/// Answer to a single submitted guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Response {
    /// Peg feedback for the guess
    pub evaluation: Evaluation,
    /// Total guesses the oracle has seen in this game, including this one
    pub guess_count: usize,
}

/// A source of truth for one game
pub trait Oracle {
    /// Number of positions (and symbols) in the hidden code
    fn length(&self) -> usize;

    /// Submit a guess and wait for its feedback
    ///
    /// # Errors
    /// Returns `OracleError` when no valid feedback could be obtained. A
    /// failed submission is never reported as a zero evaluation.
    fn submit(&mut self, guess: &Code) -> Result<Response, OracleError>;
}

impl<O: Oracle + ?Sized> Oracle for &mut O {
    fn length(&self) -> usize {
        (**self).length()
    }

    fn submit(&mut self, guess: &Code) -> Result<Response, OracleError> {
        (**self).submit(guess)
    }
}

/// Failure to obtain feedback from an oracle
#[derive(Debug, thiserror::Error)]
pub enum OracleError {
    #[error("guess rejected before submission: {0}")]
    InvalidGuess(#[from] CodeError),
    #[error("request to {endpoint} failed")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{endpoint} returned {status}: {body}")]
    Status {
        endpoint: String,
        status: u16,
        body: String,
    },
    #[error("failed to decode response from {endpoint}")]
    Decode {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("terminal input failed")]
    Io(#[from] std::io::Error),
    #[error("input closed before feedback was entered")]
    InputClosed,
    #[error("game aborted by user")]
    Aborted,
}
