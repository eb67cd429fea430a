//! Test all codes - exhaustive solver evaluation
//!
//! Runs the solver against every possible code of a given length and
//! generates statistics.

use crate::core::{Code, CodeError, Symbol};
use crate::oracle::LocalOracle;
use crate::solver::{Solver, Strategy};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Statistics from testing all codes
#[derive(Debug)]
pub struct TestAllStatistics {
    pub length: usize,
    pub total_codes: usize,
    pub solved: usize,
    pub failed: usize,
    pub query_distribution: HashMap<usize, usize>,
    pub total_time: Duration,
    pub average_queries: f64,
    pub max_queries: usize,
    pub min_queries: usize,
    pub hardest_codes: Vec<(Code, usize)>,
    pub failures: Vec<(Code, String)>,
}

/// Number of distinct codes of `length`, saturating at `u64::MAX`
#[must_use]
pub fn code_space(length: usize) -> u64 {
    let base = length as u64;
    (0..length).fold(1u64, |acc, _| acc.saturating_mul(base))
}

/// The `index`-th code of `length` in lexicographic order
///
/// # Errors
///
/// Returns an error if `length` is not a valid code length.
pub fn code_at(length: usize, mut index: u64) -> Result<Code, CodeError> {
    let base = length as u64;
    let mut symbols = vec![0 as Symbol; length];
    for slot in symbols.iter_mut().rev() {
        *slot = (index % base) as Symbol + 1;
        index /= base;
    }
    Code::secret(symbols)
}

/// Run solver on every code of `length` (or the first `limit` of them)
///
/// # Errors
///
/// Returns an error if `length` is not a valid code length.
pub fn run_test_all<S: Strategy + Sync>(
    solver: &Solver<S>,
    length: usize,
    limit: Option<u64>,
) -> Result<TestAllStatistics, CodeError> {
    if length == 0 {
        return Err(CodeError::Empty);
    }
    let space = code_space(length);
    let total = limit.map_or(space, |l| l.min(space));

    println!("🎯 Testing {total} codes of length {length}...");

    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );

    let total_start = Instant::now();
    let results: Vec<(Code, Result<usize, String>)> = (0..total)
        .into_par_iter()
        .map(|index| {
            let code = code_at(length, index)?;
            let outcome = solver
                .solve(LocalOracle::new(code.clone()))
                .map(|r| r.queries)
                .map_err(|e| e.to_string());
            pb.inc(1);
            Ok((code, outcome))
        })
        .collect::<Result<_, CodeError>>()?;
    pb.finish_with_message("Complete!");

    let total_time = total_start.elapsed();

    let mut query_distribution: HashMap<usize, usize> = HashMap::new();
    let mut solved_runs: Vec<(Code, usize)> = Vec::new();
    let mut failures = Vec::new();
    for (code, outcome) in results {
        match outcome {
            Ok(queries) => {
                *query_distribution.entry(queries).or_insert(0) += 1;
                solved_runs.push((code, queries));
            }
            Err(message) => failures.push((code, message)),
        }
    }

    let solved = solved_runs.len();
    let total_queries: usize = solved_runs.iter().map(|(_, q)| q).sum();
    let average_queries = if solved > 0 {
        total_queries as f64 / solved as f64
    } else {
        0.0
    };
    let max_queries = solved_runs.iter().map(|(_, q)| *q).max().unwrap_or(0);
    let min_queries = solved_runs.iter().map(|(_, q)| *q).min().unwrap_or(0);

    let mut hardest_codes = solved_runs;
    hardest_codes.sort_by_key(|(_, q)| std::cmp::Reverse(*q));
    hardest_codes.truncate(10);

    Ok(TestAllStatistics {
        length,
        total_codes: solved + failures.len(),
        solved,
        failed: failures.len(),
        query_distribution,
        total_time,
        average_queries,
        max_queries,
        min_queries,
        hardest_codes,
        failures,
    })
}

/// Print test-all statistics
pub fn print_test_all_statistics(stats: &TestAllStatistics) {
    println!("\n{}", "═".repeat(70));
    println!(" Test Results ");
    println!("{}", "═".repeat(70));

    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("  Code length:         {}", stats.length);
    println!("  Total codes tested:  {}", stats.total_codes);
    println!(
        "  Verified:            {} {}",
        stats.solved,
        format!(
            "({:.1}%)",
            stats.solved as f64 / stats.total_codes.max(1) as f64 * 100.0
        )
        .green()
    );
    if stats.failed > 0 {
        println!(
            "  Failed:              {} {}",
            stats.failed,
            format!(
                "({:.1}%)",
                stats.failed as f64 / stats.total_codes.max(1) as f64 * 100.0
            )
            .red()
        );
    }
    println!(
        "  Average queries:     {}",
        format!("{:.3}", stats.average_queries)
            .bright_yellow()
            .bold()
    );
    println!(
        "  Range:               {} – {}",
        stats.min_queries, stats.max_queries
    );
    println!(
        "  Total time:          {:.2}s",
        stats.total_time.as_secs_f64()
    );

    println!("\n📈 {}", "Query Distribution".bright_cyan().bold());
    let max_count = stats.query_distribution.values().copied().max().unwrap_or(1);
    let mut keys: Vec<usize> = stats.query_distribution.keys().copied().collect();
    keys.sort_unstable();
    for queries in keys {
        let count = stats.query_distribution[&queries];
        let percentage = count as f64 / stats.solved.max(1) as f64 * 100.0;
        let bar_len = (count * 40 / max_count).max(usize::from(count > 0));
        let bar = format!(
            "{}{}",
            "█".repeat(bar_len).green(),
            "░".repeat(40_usize.saturating_sub(bar_len)).bright_black()
        );
        println!("  {queries:3} queries: {bar} {count:6} ({percentage:5.1}%)");
    }

    if !stats.hardest_codes.is_empty() {
        println!("\n😰 {}", "Most Expensive Codes".yellow().bold());
        for (code, queries) in stats.hardest_codes.iter().take(5) {
            println!("  [{}] ({} queries)", code.to_string().yellow(), queries);
        }
    }

    if !stats.failures.is_empty() {
        println!("\n❌ {}", "Failures".red().bold());
        for (code, message) in stats.failures.iter().take(10) {
            println!("  [{}] {}", code.to_string().red(), message);
        }
    }
}
