//! Simple interactive CLI mode
//!
//! The user holds the secret code and answers each probe with its black-peg count.

use crate::oracle::ConsoleOracle;
use crate::solver::{Reconstruction, SolveError, Solver, Strategy};
use colored::Colorize;
use std::io;

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if reading user input fails, the user quits, the answers
/// contradict each other, or the final guess is not confirmed.
pub fn run_simple<S: Strategy>(
    solver: &Solver<S>,
    length: usize,
) -> Result<Reconstruction, SolveError> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║          Black-Peg Code Breaker - Interactive Mode           ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Think of a code of {length} symbols, each between 1 and {length}.");
    println!("For every guess, enter how many positions match exactly.");
    println!("  - '·' marks a masked position that never matches");
    println!("  - Optionally add the white-peg count after the black count");
    println!("  - Type 'q' to give up\n");
    println!(
        "Strategy: {}",
        solver.strategy().name().bright_yellow().bold()
    );

    let stdin = io::stdin();
    let oracle = ConsoleOracle::new(stdin.lock(), io::stdout(), length);
    let reconstruction = solver.solve(oracle)?;

    println!("\n{}", "═".repeat(70).bright_cyan());
    println!(
        "{}",
        "        🎉  C O D E   B R O K E N !  🎉        "
            .bright_green()
            .bold()
    );
    println!("{}", "═".repeat(70).bright_cyan());

    Ok(reconstruction)
}
