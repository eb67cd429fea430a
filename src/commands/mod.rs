//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod play;
pub mod simple;
pub mod solve;
pub mod test_all;

pub use analyze::{AnalysisResult, analyze_code, query_lower_bound};
pub use benchmark::{BenchmarkResult, random_codes, run_benchmark};
pub use play::{PlayResult, run_play};
pub use simple::run_simple;
pub use solve::{SolveConfig, SolveResult, solve_code};
pub use test_all::{TestAllStatistics, print_test_all_statistics, run_test_all};
