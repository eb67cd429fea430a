//! Mastermind Solver - CLI
//!
//! Black-peg code breaker with local, interactive and remote modes.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use mastermind_solver::{
    commands::{
        SolveConfig, analyze_code, print_test_all_statistics, random_codes, run_benchmark,
        run_play, run_simple, run_test_all, solve_code,
    },
    config::RemoteConfig,
    core::Code,
    logging,
    output::{
        print_analysis_result, print_benchmark_result, print_play_result, print_reconstruction,
        print_solve_result,
    },
    solver::{Solver, Strategy, StrategyType},
};

#[derive(Parser)]
#[command(
    name = "mastermind_solver",
    about = "Black-peg code breaker using adaptive divide-and-conquer",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Strategy: divide (default) or linear
    #[arg(short, long, global = true, default_value = "divide")]
    strategy: String,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a specific secret code, e.g. "3,1,4,1,5"
    Solve {
        /// The secret code, comma or space separated
        secret: String,

        /// List every probe and its feedback
        #[arg(long)]
        trace: bool,
    },

    /// Compare query counts for a code against the linear baseline
    Analyze {
        /// Code to analyze
        secret: String,
    },

    /// Benchmark solver performance on random codes
    Benchmark {
        /// Number of random codes to test
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,

        /// Code length
        #[arg(short, long, default_value = "10")]
        length: usize,

        /// Seed for the code generator
        #[arg(long, default_value = "0")]
        seed: u64,
    },

    /// Test solver on every code of a given length
    TestAll {
        /// Code length
        #[arg(short, long, default_value = "4")]
        length: usize,

        /// Limit number of codes to test
        #[arg(long)]
        limit: Option<u64>,
    },

    /// Interactive mode: you hold the code and answer each probe
    Simple {
        /// Code length
        #[arg(short, long, default_value = "5")]
        length: usize,
    },

    /// Play against the remote game server
    Play {
        /// Code length
        #[arg(short, long, default_value = "100")]
        length: usize,

        /// Server base URL (overrides MASTERMIND_BASE_URL)
        #[arg(long)]
        base_url: Option<String>,

        /// Player nickname (overrides MASTERMIND_NICKNAME)
        #[arg(long)]
        nickname: Option<String>,

        /// Player email (overrides MASTERMIND_EMAIL)
        #[arg(long)]
        email: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose).context("Failed to initialize logging")?;

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let solver = Solver::new(StrategyType::from_name(&cli.strategy));

    match command {
        Commands::Solve { secret, trace } => solve_command(&secret, trace, &solver),
        Commands::Analyze { secret } => analyze_command(&secret),
        Commands::Benchmark {
            count,
            length,
            seed,
        } => benchmark_command(count, length, seed, &solver),
        Commands::TestAll { length, limit } => {
            let stats = run_test_all(&solver, length, limit)?;
            print_test_all_statistics(&stats);
            Ok(())
        }
        Commands::Simple { length } => {
            let reconstruction = run_simple(&solver, length)?;
            print_reconstruction(&reconstruction);
            Ok(())
        }
        Commands::Play {
            length,
            base_url,
            nickname,
            email,
        } => {
            let config = RemoteConfig::from_env()?.with_overrides(base_url, nickname, email);
            let result = run_play(&solver, &config, length)?;
            print_play_result(&result);
            Ok(())
        }
    }
}

fn parse_code(text: &str) -> Result<Code> {
    text.parse()
        .with_context(|| format!("Invalid code '{text}'"))
}

fn solve_command<S: Strategy>(secret: &str, trace: bool, solver: &Solver<S>) -> Result<()> {
    let config = SolveConfig::new(parse_code(secret)?);
    let result = solve_code(config, solver)?;

    print_solve_result(&result, trace);
    Ok(())
}

fn analyze_command(secret: &str) -> Result<()> {
    let result = analyze_code(&parse_code(secret)?)?;
    print_analysis_result(&result);
    Ok(())
}

fn benchmark_command<S: Strategy + Sync>(
    count: usize,
    length: usize,
    seed: u64,
    solver: &Solver<S>,
) -> Result<()> {
    println!(
        "Running benchmark on {count} random codes of length {length} with {}...",
        solver.strategy().name()
    );

    let codes = random_codes(length, count, seed)?;
    let result = run_benchmark(solver, &codes);
    print_benchmark_result(&result);
    Ok(())
}
