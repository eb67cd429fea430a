//! Main solver interface

use super::SolveError;
use super::session::{Probe, ProbePhase, Session};
use super::strategy::Strategy;
use crate::core::{Code, Evaluation};
use crate::oracle::Oracle;
use tracing::{info, warn};

/// Outcome of a verified reconstruction
#[derive(Debug, Clone)]
pub struct Reconstruction {
    /// The code, confirmed by the oracle
    pub code: Code,
    /// Oracle queries spent, including the final submission
    pub queries: usize,
    /// Guess count as reported by the oracle after the final submission
    pub reported_guesses: usize,
    /// Feedback for the final submission
    pub evaluation: Evaluation,
    /// Every probe in submission order
    pub probes: Vec<Probe>,
}

/// Main code-breaking solver
///
/// Runs a strategy against an oracle, then submits the assembled code once
/// more and accepts it only if every position matches.
#[derive(Debug, Clone, Default)]
pub struct Solver<S: Strategy> {
    strategy: S,
}

impl<S: Strategy> Solver<S> {
    pub const fn new(strategy: S) -> Self {
        Self { strategy }
    }

    pub const fn strategy(&self) -> &S {
        &self.strategy
    }

    /// Play one full game against `oracle`
    ///
    /// # Errors
    /// Returns `SolveError::VerificationFailed` if the final submission does
    /// not match on every position, and propagates any oracle or consistency
    /// failure met during reconstruction.
    pub fn solve<O: Oracle>(&self, oracle: O) -> Result<Reconstruction, SolveError> {
        let mut session = Session::new(oracle)?;
        let length = session.length();
        info!(strategy = self.strategy.name(), length, "reconstruction started");

        let code = self.strategy.reconstruct(&mut session)?;
        let evaluation = session.submit(&code, ProbePhase::Verify)?;

        if !evaluation.is_solved(length) {
            warn!(
                candidate = %code,
                black = evaluation.black,
                length,
                "final submission rejected"
            );
            return Err(SolveError::VerificationFailed {
                candidate: code,
                black: evaluation.black,
                length,
            });
        }

        info!(queries = session.queries(), code = %code, "code verified");
        Ok(Reconstruction {
            code,
            queries: session.queries(),
            reported_guesses: session.reported_guesses(),
            evaluation,
            probes: session.into_probes(),
        })
    }
}
