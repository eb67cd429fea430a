//! Query analysis command
//!
//! Breaks down where the divide-and-conquer strategy spends its queries on a
//! specific code and compares it with the linear baseline and the
//! information-theoretic lower bound.

use crate::core::Code;
use crate::oracle::LocalOracle;
use crate::solver::{DivideAndConquerStrategy, LinearStrategy, ProbePhase, SolveError, Solver};

/// Result of analyzing a code
pub struct AnalysisResult {
    pub secret: Code,
    pub frequency_queries: usize,
    pub range_queries: usize,
    pub total_queries: usize,
    pub max_depth: usize,
    pub linear_queries: usize,
    pub lower_bound: f64,
}

/// Minimum expected number of black-peg queries for a code of `length`
///
/// Each answer is one of `length + 1` values and there are `length^length`
/// codes, so at least `length·ln(length) / ln(length + 1)` answers are needed.
#[must_use]
pub fn query_lower_bound(length: usize) -> f64 {
    if length < 2 {
        return 0.0;
    }
    let n = length as f64;
    n * n.ln() / (n + 1.0).ln()
}

/// Analyze the query cost of reconstructing `secret`
///
/// # Errors
///
/// Returns an error if either strategy fails to reconstruct the code.
pub fn analyze_code(secret: &Code) -> Result<AnalysisResult, SolveError> {
    let divide = Solver::new(DivideAndConquerStrategy).solve(LocalOracle::new(secret.clone()))?;
    let linear = Solver::new(LinearStrategy).solve(LocalOracle::new(secret.clone()))?;

    let mut frequency_queries = 0;
    let mut range_queries = 0;
    let mut max_depth = 0;
    for probe in &divide.probes {
        match probe.phase {
            ProbePhase::Frequency { .. } => frequency_queries += 1,
            ProbePhase::Range { depth, .. } => {
                range_queries += 1;
                max_depth = max_depth.max(depth);
            }
            ProbePhase::Position { .. } | ProbePhase::Verify => {}
        }
    }

    Ok(AnalysisResult {
        secret: secret.clone(),
        frequency_queries,
        range_queries,
        total_queries: divide.queries,
        max_depth,
        linear_queries: linear.queries,
        lower_bound: query_lower_bound(secret.len()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analyze_example_code() {
        let secret: Code = "3,1,4,1,5".parse().unwrap();
        let result = analyze_code(&secret).unwrap();

        assert_eq!(result.frequency_queries, 4);
        assert_eq!(result.range_queries, 6);
        assert_eq!(result.total_queries, 11);
        assert_eq!(result.max_depth, 3);
        assert!(result.linear_queries > 0);
    }

    #[test]
    fn phases_add_up_to_total() {
        let secret: Code = "5,5,1,2,3,3".parse().unwrap();
        let result = analyze_code(&secret).unwrap();

        // the remaining query is the final submission
        assert_eq!(
            result.frequency_queries + result.range_queries + 1,
            result.total_queries
        );
    }

    #[test]
    fn lower_bound_values() {
        assert!(query_lower_bound(1).abs() < f64::EPSILON);
        let bound = query_lower_bound(5);
        assert!(bound > 4.0 && bound < 5.0, "bound = {bound}");
    }
}
