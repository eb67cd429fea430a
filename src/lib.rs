//! Mastermind Solver
//!
//! Reconstructs a hidden code of N symbols over the alphabet 1..=N from
//! black-peg feedback alone, using adaptive divide-and-conquer: learn each
//! symbol's global count, then recursively halve the code, probing only the
//! left half and deriving the right half by subtraction.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use mastermind_solver::core::Code;
//! use mastermind_solver::oracle::LocalOracle;
//! use mastermind_solver::solver::{Solver, StrategyType};
//!
//! let secret: Code = "3,1,4,1,5".parse().unwrap();
//! let solver = Solver::new(StrategyType::default());
//!
//! let result = solver.solve(LocalOracle::new(secret.clone())).unwrap();
//! assert_eq!(result.code, secret);
//! println!("Solved in {} queries", result.queries);
//! ```

// Core domain types
pub mod core;

// Feedback sources
pub mod oracle;

// Solving algorithms
pub mod solver;

// Remote game configuration
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Tracing setup
pub mod logging;
