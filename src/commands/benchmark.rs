//! Benchmark command
//!
//! Tests solver performance across many random codes.

use super::analyze::query_lower_bound;
use crate::core::{Code, CodeError, Symbol};
use crate::oracle::LocalOracle;
use crate::solver::{Solver, Strategy};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};
use tracing::warn;

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub length: usize,
    pub total_codes: usize,
    pub failures: usize,
    pub total_queries: usize,
    pub average_queries: f64,
    pub min_queries: usize,
    pub max_queries: usize,
    pub lower_bound: f64,
    pub distribution: FxHashMap<usize, usize>,
    pub duration: Duration,
    pub codes_per_second: f64,
}

/// Generate `count` uniformly random codes of `length` from `seed`
///
/// # Errors
///
/// Returns an error if `length` is not a valid code length.
pub fn random_codes(length: usize, count: usize, seed: u64) -> Result<Vec<Code>, CodeError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let max = Symbol::try_from(length).map_err(|_| CodeError::TooLong(length))?;

    (0..count)
        .map(|_| Code::secret((0..length).map(|_| rng.random_range(1..=max)).collect()))
        .collect()
}

/// Run benchmark on a set of secret codes
///
/// Games are independent, so they are played in parallel.
pub fn run_benchmark<S: Strategy + Sync>(solver: &Solver<S>, codes: &[Code]) -> BenchmarkResult {
    let start = Instant::now();

    let outcomes: Vec<Option<usize>> = codes
        .par_iter()
        .map(|code| match solver.solve(LocalOracle::new(code.clone())) {
            Ok(reconstruction) => Some(reconstruction.queries),
            Err(e) => {
                warn!(code = %code, error = %e, "benchmark game failed");
                None
            }
        })
        .collect();

    let duration = start.elapsed();
    let solved: Vec<usize> = outcomes.iter().flatten().copied().collect();

    let mut distribution: FxHashMap<usize, usize> = FxHashMap::default();
    for &queries in &solved {
        *distribution.entry(queries).or_insert(0) += 1;
    }

    let total_queries: usize = solved.iter().sum();
    let total_codes = codes.len();

    BenchmarkResult {
        length: codes.first().map_or(0, Code::len),
        total_codes,
        failures: total_codes - solved.len(),
        total_queries,
        average_queries: if solved.is_empty() {
            0.0
        } else {
            total_queries as f64 / solved.len() as f64
        },
        min_queries: solved.iter().copied().min().unwrap_or(0),
        max_queries: solved.iter().copied().max().unwrap_or(0),
        lower_bound: codes.first().map_or(0.0, |c| query_lower_bound(c.len())),
        distribution,
        duration,
        codes_per_second: total_codes as f64 / duration.as_secs_f64(),
    }
}
