//! Per-game context threaded through every probe
//!
//! Owns the oracle, the query counter and the probe trace so the algorithms
//! themselves stay free of global state.

use super::SolveError;
use crate::core::{Code, Evaluation, Symbol};
use crate::oracle::Oracle;
use std::ops::Range;
use tracing::debug;

/// What a probe was asking
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbePhase {
    /// How often `symbol` occurs in the whole code
    Frequency { symbol: Symbol },
    /// How often `symbol` occurs inside `range`, at recursion `depth`
    Range {
        range: Range<usize>,
        symbol: Symbol,
        depth: usize,
    },
    /// Whether `symbol` sits at `position`
    Position { position: usize, symbol: Symbol },
    /// Final submission of the assembled code
    Verify,
}

/// One oracle round trip
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Probe {
    pub phase: ProbePhase,
    pub evaluation: Evaluation,
    /// Guess counter as reported by the oracle
    pub guess_count: usize,
}

/// State of one game against one oracle
pub struct Session<O> {
    oracle: O,
    length: usize,
    probes: Vec<Probe>,
}

impl<O: Oracle> Session<O> {
    /// # Errors
    /// Returns `SolveError::InvalidLength` if the oracle's code length is zero
    /// or cannot be expressed with [`Symbol`] values.
    pub fn new(oracle: O) -> Result<Self, SolveError> {
        let length = oracle.length();
        if length == 0 || length > usize::from(Symbol::MAX) {
            return Err(SolveError::InvalidLength(length));
        }

        Ok(Self {
            oracle,
            length,
            probes: Vec::new(),
        })
    }

    #[inline]
    #[must_use]
    pub const fn length(&self) -> usize {
        self.length
    }

    /// Queries spent so far in this session
    #[inline]
    #[must_use]
    pub fn queries(&self) -> usize {
        self.probes.len()
    }

    #[must_use]
    pub fn probes(&self) -> &[Probe] {
        &self.probes
    }

    /// Submit `guess` and return its black-peg count
    ///
    /// # Errors
    /// Propagates oracle failures as `SolveError::Oracle`, and rejects a
    /// black count larger than the code length.
    pub fn probe(&mut self, guess: &Code, phase: ProbePhase) -> Result<usize, SolveError> {
        Ok(self.submit(guess, phase)?.black)
    }

    /// Submit `guess` and return the full evaluation
    ///
    /// # Errors
    /// See [`Session::probe`].
    pub fn submit(&mut self, guess: &Code, phase: ProbePhase) -> Result<Evaluation, SolveError> {
        let response = self.oracle.submit(guess)?;
        let evaluation = response.evaluation;

        if evaluation.black > self.length {
            return Err(SolveError::inconsistent(format!(
                "{} black pegs reported for a code of length {}",
                evaluation.black, self.length
            )));
        }

        debug!(
            query = self.probes.len() + 1,
            phase = ?phase,
            black = evaluation.black,
            "probe answered"
        );

        self.probes.push(Probe {
            phase,
            evaluation,
            guess_count: response.guess_count,
        });
        Ok(evaluation)
    }

    /// Guess count last reported by the oracle
    #[must_use]
    pub fn reported_guesses(&self) -> usize {
        self.probes.last().map_or(0, |p| p.guess_count)
    }

    /// Finish the session, keeping the probe trace
    #[must_use]
    pub fn into_probes(self) -> Vec<Probe> {
        self.probes
    }
}
