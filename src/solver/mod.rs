//! Code reconstruction algorithms
//!
//! This module contains the reconstruction strategies and the pieces the
//! divide-and-conquer strategy is built from.

mod assembler;
pub mod cardinality;
mod engine;
mod error;
pub mod partition;
pub mod session;
pub mod strategy;

pub use assembler::PartialSolution;
pub use cardinality::{Cardinalities, Estimate};
pub use engine::{Reconstruction, Solver};
pub use error::SolveError;
pub use session::{Probe, ProbePhase, Session};
pub use strategy::{DivideAndConquerStrategy, LinearStrategy, Strategy, StrategyType};
