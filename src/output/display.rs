//! Display functions for command results

use super::formatters::{cost_bar, describe_phase};
use crate::commands::{AnalysisResult, BenchmarkResult, PlayResult, SolveResult};
use crate::solver::Reconstruction;
use colored::Colorize;

/// Print the result of solving a code
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: [{}] with {}",
        result.secret.to_string().bright_yellow().bold(),
        result.strategy
    );
    println!("{}", "─".repeat(60).cyan());

    if verbose {
        for (i, probe) in result.reconstruction.probes.iter().enumerate() {
            println!(
                "  #{:<4} {:<40} → {}",
                i + 1,
                describe_phase(&probe.phase),
                probe.evaluation.black
            );
        }
    }

    println!();
    if result.success() {
        println!(
            "{}",
            format!(
                "✅ Solved [{}] in {} queries ({:.2}ms)",
                result.reconstruction.code,
                result.reconstruction.queries,
                result.duration.as_secs_f64() * 1000.0
            )
            .green()
            .bold()
        );
    } else {
        println!(
            "{}",
            format!(
                "❌ Verified [{}] but the secret was [{}]",
                result.reconstruction.code, result.secret
            )
            .red()
            .bold()
        );
    }
}

/// Print a verified reconstruction (interactive and remote games)
pub fn print_reconstruction(reconstruction: &Reconstruction) {
    println!(
        "\n🔓 Code: [{}]",
        reconstruction.code.to_string().bright_green().bold()
    );
    println!("   Queries:          {}", reconstruction.queries);
    println!(
        "   Oracle guesses:   {}",
        reconstruction.reported_guesses
    );
    println!("   Final feedback:   {}", reconstruction.evaluation);
}

/// Print the result of a remote game
pub fn print_play_result(result: &PlayResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "REMOTE GAME".bright_cyan().bold(),
        result.game_id.bright_yellow()
    );
    println!("{}", "═".repeat(60).cyan());
    print_reconstruction(&result.reconstruction);
    println!(
        "\n{}",
        format!(
            "Eureka! Guess count: {}",
            result.reconstruction.reported_guesses
        )
        .green()
        .bold()
    );
}

/// Print the result of query analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} [{}] ",
        "QUERY ANALYSIS:".bright_cyan().bold(),
        result.secret.to_string().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 Divide-and-conquer on {} positions:", result.secret.len());
    println!("   Frequency probes: {}", result.frequency_queries);
    println!("   Range probes:     {}", result.range_queries);
    println!("   Final submission: 1");
    println!("   Recursion depth:  {}", result.max_depth);

    let bar = cost_bar(result.total_queries, result.linear_queries, 30);
    println!(
        "\n   Divide:  [{}] {}",
        bar.green(),
        format!("{} queries", result.total_queries).bright_yellow()
    );
    println!(
        "   Linear:  [{}] {} queries",
        cost_bar(result.linear_queries, result.linear_queries, 30).bright_black(),
        result.linear_queries
    );
    println!(
        "   Lower bound:  {:.1} queries (information-theoretic)",
        result.lower_bound
    );
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Code length:      {}", result.length);
    println!("   Codes tested:     {}", result.total_codes);
    if result.failures > 0 {
        println!(
            "   Failures:         {}",
            format!("{}", result.failures).red().bold()
        );
    }
    println!(
        "   Average queries:  {}",
        format!("{:.2}", result.average_queries)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_queries).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_queries).yellow()
    );
    println!("   Lower bound:      {:.1}", result.lower_bound);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Codes/second:     {:.1}", result.codes_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let mut buckets: Vec<(usize, usize)> = result
        .distribution
        .iter()
        .map(|(&queries, &count)| (queries, count))
        .collect();
    buckets.sort_unstable();

    for (queries, count) in buckets {
        let pct = (count as f64 / result.total_codes.max(1) as f64) * 100.0;
        let bar_width = (pct / 2.5) as usize;
        let bar = format!(
            "{}{}",
            "█".repeat(bar_width).green(),
            "░"
                .repeat(40_usize.saturating_sub(bar_width))
                .bright_black()
        );
        println!("   {queries:4}: {bar} {count:5} ({pct:5.1}%)");
    }
}
