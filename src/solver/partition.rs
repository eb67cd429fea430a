//! Recursive range partitioning
//!
//! A range whose table names a single symbol is resolved outright. Any other
//! range is split in half: the left half's table is estimated with probes,
//! the right half's table is the parent minus the left, at no query cost.

use super::SolveError;
use super::assembler::PartialSolution;
use super::cardinality::{Cardinalities, estimate_range};
use super::session::Session;
use crate::oracle::Oracle;
use std::ops::Range;

/// Resolve `range` into `solution`, given the range's cardinality table
///
/// # Errors
/// Propagates oracle failures and inconsistent feedback.
pub fn resolve<O: Oracle>(
    session: &mut Session<O>,
    solution: &mut PartialSolution,
    range: Range<usize>,
    table: &Cardinalities,
    depth: usize,
) -> Result<(), SolveError> {
    debug_assert_eq!(table.total(), range.len(), "table must cover {range:?}");

    if let Some(symbol) = table.single_symbol() {
        return solution.fill(range, symbol);
    }
    if range.len() < 2 {
        return Err(SolveError::inconsistent(format!(
            "range {range:?} cannot hold symbols {:?}",
            table.present().collect::<Vec<_>>()
        )));
    }

    let mid = range.start + range.len() / 2;
    let left = estimate_range(session, range.start..mid, table, depth + 1)?;
    resolve(session, solution, range.start..mid, &left.table, depth + 1)?;

    let right = table.remainder(&left.table)?;
    resolve(session, solution, mid..range.end, &right, depth + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Code;
    use crate::oracle::LocalOracle;
    use crate::solver::cardinality::discover_frequencies;
    use crate::solver::session::ProbePhase;

    fn reconstruct(symbols: Vec<u16>) -> (Code, Session<LocalOracle>) {
        let secret = Code::secret(symbols).unwrap();
        let mut session = Session::new(LocalOracle::new(secret)).unwrap();
        let table = discover_frequencies(&mut session).unwrap();

        let length = session.length();
        let mut solution = PartialSolution::new(length);
        resolve(&mut session, &mut solution, 0..length, &table, 0).unwrap();
        (solution.into_code().unwrap(), session)
    }

    #[test]
    fn single_symbol_range_costs_nothing() {
        let mut session = Session::new(LocalOracle::new(Code::secret(vec![2, 2, 2]).unwrap()))
            .unwrap();
        let mut solution = PartialSolution::new(3);
        let table = Cardinalities::from_counts(&[0, 3, 0]);

        resolve(&mut session, &mut solution, 0..3, &table, 0).unwrap();

        assert_eq!(session.queries(), 0);
        assert_eq!(solution.leaves(), 1);
    }

    #[test]
    fn reconstructs_example_code() {
        let (code, session) = reconstruct(vec![3, 1, 4, 1, 5]);
        assert_eq!(code.symbols(), &[3, 1, 4, 1, 5]);
        // 4 frequency probes, then 3 + 1 + 1 + 1 range probes
        assert_eq!(session.queries(), 10);
    }

    #[test]
    fn odd_ranges_split_without_gaps() {
        let (code, _) = reconstruct(vec![7, 6, 5, 4, 3, 2, 1]);
        assert_eq!(code.symbols(), &[7, 6, 5, 4, 3, 2, 1]);
    }

    #[test]
    fn right_halves_are_never_probed_directly() {
        let (_, session) = reconstruct(vec![2, 1, 2, 1, 2, 1]);

        for probe in session.probes() {
            if let ProbePhase::Range { range, .. } = &probe.phase {
                // [3, 6) is the right half of the top-level split
                assert_ne!(range, &(3..6));
            }
        }
    }

    #[test]
    fn depth_grows_with_each_split() {
        let (_, session) = reconstruct(vec![1, 2, 3, 4]);
        let depths: Vec<usize> = session
            .probes()
            .iter()
            .filter_map(|p| match p.phase {
                ProbePhase::Range { depth, .. } => Some(depth),
                _ => None,
            })
            .collect();

        assert!(depths.contains(&1));
        assert!(depths.contains(&2));
    }
}
