//! Reconstruction failures

use crate::core::Code;
use crate::oracle::OracleError;

/// Why a game could not be reconstructed
#[derive(Debug, thiserror::Error)]
pub enum SolveError {
    #[error("oracle failed")]
    Oracle(#[from] OracleError),

    /// The oracle reported counts that contradict earlier feedback
    #[error("inconsistent feedback: {0}")]
    Inconsistent(String),

    #[error("position {0} was resolved twice")]
    PositionWrittenTwice(usize),

    #[error("{unresolved} positions were never resolved")]
    Incomplete { unresolved: usize },

    /// The assembled code was submitted and did not match
    #[error("verification failed: {black} of {length} positions matched for {candidate}")]
    VerificationFailed {
        candidate: Code,
        black: usize,
        length: usize,
    },

    #[error("code length {0} is not playable")]
    InvalidLength(usize),
}

impl SolveError {
    /// Shorthand for [`SolveError::Inconsistent`]
    pub(crate) fn inconsistent(reason: impl Into<String>) -> Self {
        Self::Inconsistent(reason.into())
    }
}
