//! Code solving command
//!
//! Reconstructs a known secret against a local oracle and returns the probe path.

use crate::core::Code;
use crate::oracle::LocalOracle;
use crate::solver::{Reconstruction, SolveError, Solver, Strategy};
use std::time::{Duration, Instant};

/// Configuration for solving a code
pub struct SolveConfig {
    pub secret: Code,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(secret: Code) -> Self {
        Self { secret }
    }
}

/// Result of solving a code
pub struct SolveResult {
    pub secret: Code,
    pub strategy: &'static str,
    pub reconstruction: Reconstruction,
    pub duration: Duration,
}

impl SolveResult {
    /// Whether the verified code equals the secret
    #[must_use]
    pub fn success(&self) -> bool {
        self.reconstruction.code == self.secret
    }
}

/// Solve a specific code using the given solver and strategy
///
/// # Errors
///
/// Returns an error if reconstruction fails or the final submission does
/// not match the secret.
pub fn solve_code<S: Strategy>(
    config: SolveConfig,
    solver: &Solver<S>,
) -> Result<SolveResult, SolveError> {
    let start = Instant::now();
    let reconstruction = solver.solve(LocalOracle::new(config.secret.clone()))?;

    Ok(SolveResult {
        secret: config.secret,
        strategy: solver.strategy().name(),
        reconstruction,
        duration: start.elapsed(),
    })
}
