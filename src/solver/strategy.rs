//! Reconstruction strategies
//!
//! Defines the Strategy trait and concrete implementations.

use super::SolveError;
use super::assembler::PartialSolution;
use super::cardinality::discover_frequencies;
use super::partition::resolve;
use super::session::{ProbePhase, Session};
use crate::core::{Code, Symbol};
use crate::oracle::Oracle;
use tracing::info;

/// A way of turning black-peg feedback into a fully determined code
pub trait Strategy {
    /// Short name used on the command line and in reports
    fn name(&self) -> &'static str;

    /// Probe the oracle until every position is known and return the code
    ///
    /// The returned code has not been submitted yet; the [`Solver`](super::Solver)
    /// verifies it.
    ///
    /// # Errors
    /// Returns `SolveError` on oracle failure or contradictory feedback.
    fn reconstruct<O: Oracle>(&self, session: &mut Session<O>) -> Result<Code, SolveError>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyType {
    /// Divide-and-conquer cardinality estimation (default)
    DivideAndConquer(DivideAndConquerStrategy),
    /// One position at a time
    Linear(LinearStrategy),
}

impl Strategy for StrategyType {
    fn name(&self) -> &'static str {
        match self {
            Self::DivideAndConquer(s) => s.name(),
            Self::Linear(s) => s.name(),
        }
    }

    fn reconstruct<O: Oracle>(&self, session: &mut Session<O>) -> Result<Code, SolveError> {
        match self {
            Self::DivideAndConquer(s) => s.reconstruct(session),
            Self::Linear(s) => s.reconstruct(session),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "divide", "dnc", "divide-and-conquer", "linear", "brute-force".
    /// Defaults to divide-and-conquer if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "linear" | "brute-force" => Self::Linear(LinearStrategy),
            _ => Self::DivideAndConquer(DivideAndConquerStrategy),
        }
    }
}

impl Default for StrategyType {
    fn default() -> Self {
        Self::DivideAndConquer(DivideAndConquerStrategy)
    }
}

/// Adaptive divide-and-conquer reconstruction
///
/// 1. Learn each symbol's global frequency (symbol 1 by elimination)
/// 2. Recursively halve the code, probing only left halves and deriving
///    right halves by subtraction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DivideAndConquerStrategy;

impl Strategy for DivideAndConquerStrategy {
    fn name(&self) -> &'static str {
        "divide"
    }

    fn reconstruct<O: Oracle>(&self, session: &mut Session<O>) -> Result<Code, SolveError> {
        let length = session.length();
        let frequencies = discover_frequencies(session)?;
        info!(
            queries = session.queries(),
            symbols = frequencies.present().count(),
            "global frequencies discovered"
        );

        let mut solution = PartialSolution::new(length);
        resolve(session, &mut solution, 0..length, &frequencies, 0)?;
        info!(
            queries = session.queries(),
            leaves = solution.leaves(),
            "partition resolved"
        );

        solution.into_code()
    }
}

/// Baseline: test each symbol at each free position
///
/// After frequency discovery, every symbol with occurrences left is tried at
/// every unresolved position in order until its frequency is used up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinearStrategy;

impl Strategy for LinearStrategy {
    fn name(&self) -> &'static str {
        "linear"
    }

    fn reconstruct<O: Oracle>(&self, session: &mut Session<O>) -> Result<Code, SolveError> {
        let length = session.length();
        let frequencies = discover_frequencies(session)?;
        let mut solution = PartialSolution::new(length);

        for symbol in frequencies.present().collect::<Vec<Symbol>>() {
            let mut left = frequencies.get(symbol);

            for position in 0..length {
                if left == 0 {
                    break;
                }
                if solution.is_resolved(position) {
                    continue;
                }

                let hit = session.probe(
                    &Code::single(length, position, symbol),
                    ProbePhase::Position { position, symbol },
                )?;
                match hit {
                    0 => {}
                    1 => {
                        solution.assign(position, symbol)?;
                        left -= 1;
                    }
                    n => {
                        return Err(SolveError::inconsistent(format!(
                            "{n} black pegs for a single-position probe"
                        )));
                    }
                }
            }

            if left > 0 {
                return Err(SolveError::inconsistent(format!(
                    "symbol {symbol} has {left} occurrences with no free position left"
                )));
            }
        }

        info!(queries = session.queries(), "linear scan finished");
        solution.into_code()
    }
}
