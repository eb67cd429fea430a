//! Cardinality tables and elimination-based estimation
//!
//! A cardinality table maps each symbol to the number of positions holding
//! it within some range. Estimation fills such a table with as few probes as
//! possible:
//!
//! - the first candidate (the pivot) is never probed; its count is whatever
//!   the other candidates leave over
//! - probing stops as soon as every position in the range is accounted for

use super::SolveError;
use super::session::{ProbePhase, Session};
use crate::core::{Code, Symbol};
use crate::oracle::Oracle;
use std::ops::Range;
use tracing::trace;

/// Per-symbol occurrence counts for one range
///
/// Indexed by symbol `1..=N`; entries for symbols that were considered but
/// found absent are kept as explicit zeros.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cardinalities {
    counts: Vec<usize>,
}

impl Cardinalities {
    /// An all-zero table for an alphabet of `alphabet` symbols
    #[must_use]
    pub fn new(alphabet: usize) -> Self {
        Self {
            counts: vec![0; alphabet + 1],
        }
    }

    /// Build a table from counts for symbols `1..=counts.len()`
    #[must_use]
    pub fn from_counts(counts: &[usize]) -> Self {
        let mut table = Self::new(counts.len());
        table.counts[1..].copy_from_slice(counts);
        table
    }

    /// Number of symbols in the alphabet
    #[must_use]
    pub fn alphabet(&self) -> usize {
        self.counts.len() - 1
    }

    #[inline]
    #[must_use]
    pub fn get(&self, symbol: Symbol) -> usize {
        self.counts.get(usize::from(symbol)).copied().unwrap_or(0)
    }

    /// # Panics
    /// Panics if `symbol` is the sentinel or outside the alphabet
    pub fn set(&mut self, symbol: Symbol, count: usize) {
        assert!(symbol != 0, "the sentinel has no cardinality");
        self.counts[usize::from(symbol)] = count;
    }

    /// Sum over all symbols; equals the length of the range the table describes
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Symbols with a nonzero count, in ascending order
    pub fn present(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.counts
            .iter()
            .enumerate()
            .skip(1)
            .filter(|&(_, &count)| count > 0)
            .map(|(symbol, _)| symbol as Symbol)
    }

    /// The only present symbol, if exactly one symbol is present
    #[must_use]
    pub fn single_symbol(&self) -> Option<Symbol> {
        let mut present = self.present();
        match (present.next(), present.next()) {
            (Some(symbol), None) => Some(symbol),
            _ => None,
        }
    }

    /// Counts for the complement of `part` within `self`
    ///
    /// # Errors
    /// Returns `SolveError::Inconsistent` if `part` claims more occurrences
    /// of a symbol than `self` holds.
    pub fn remainder(&self, part: &Self) -> Result<Self, SolveError> {
        let counts = self
            .counts
            .iter()
            .zip(part.counts.iter().chain(std::iter::repeat(&0)))
            .enumerate()
            .map(|(symbol, (&whole, &piece))| {
                whole.checked_sub(piece).ok_or_else(|| {
                    SolveError::inconsistent(format!(
                        "symbol {symbol} has {piece} occurrences in a part of a range holding {whole}"
                    ))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { counts })
    }

    #[must_use]
    pub fn as_slice(&self) -> &[usize] {
        &self.counts[1..]
    }
}

/// Output of estimating one range
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Estimate {
    /// Counts inside the range for every candidate (zeros included)
    pub table: Cardinalities,
    /// Candidates with a nonzero count inside the range
    pub present: Vec<Symbol>,
}

/// Discover how often each symbol occurs in the whole code
///
/// Symbol 1 is the pivot: symbols `2..=N` are probed with uniform guesses
/// until the code is fully accounted for, and symbol 1 takes the remainder.
///
/// # Errors
/// Propagates oracle failures and rejects counts that exceed the positions
/// left unaccounted for.
pub fn discover_frequencies<O: Oracle>(
    session: &mut Session<O>,
) -> Result<Cardinalities, SolveError> {
    let length = session.length();
    let candidates = (1..=length).map(|s| s as Symbol);

    let estimate = eliminate(session, 0..length, candidates, |symbol, _| {
        (
            Code::filled(length, symbol),
            ProbePhase::Frequency { symbol },
        )
    })?;

    Ok(estimate.table)
}

/// Count, for each symbol present in `parent`, its occurrences inside `range`
///
/// Each non-pivot candidate is probed with a guess holding it inside `range`
/// and the sentinel everywhere else.
///
/// # Errors
/// Propagates oracle failures and rejects counts that exceed either the
/// unaccounted positions in `range` or the symbol's count in `parent`.
pub fn estimate_range<O: Oracle>(
    session: &mut Session<O>,
    range: Range<usize>,
    parent: &Cardinalities,
    depth: usize,
) -> Result<Estimate, SolveError> {
    let length = session.length();
    let estimate = eliminate(session, range, parent.present(), |symbol, range| {
        (
            Code::masked(length, range.clone(), symbol),
            ProbePhase::Range {
                range,
                symbol,
                depth,
            },
        )
    })?;

    for symbol in estimate.table.present() {
        if estimate.table.get(symbol) > parent.get(symbol) {
            return Err(SolveError::inconsistent(format!(
                "symbol {symbol} occurs {} times in a sub-range but only {} times in its parent",
                estimate.table.get(symbol),
                parent.get(symbol)
            )));
        }
    }

    Ok(estimate)
}

/// Shared elimination loop for whole-code and sub-range estimation
fn eliminate<O, I, F>(
    session: &mut Session<O>,
    range: Range<usize>,
    candidates: I,
    make_probe: F,
) -> Result<Estimate, SolveError>
where
    O: Oracle,
    I: IntoIterator<Item = Symbol>,
    F: Fn(Symbol, Range<usize>) -> (Code, ProbePhase),
{
    let mut candidates = candidates.into_iter();
    let mut table = Cardinalities::new(session.length());
    let mut present = Vec::new();

    let Some(pivot) = candidates.next() else {
        return Err(SolveError::inconsistent(format!(
            "range {range:?} has no candidate symbols"
        )));
    };

    let mut remaining = range.len();
    for symbol in candidates {
        if remaining == 0 {
            break;
        }

        let (guess, phase) = make_probe(symbol, range.clone());
        let count = session.probe(&guess, phase)?;
        if count > remaining {
            return Err(SolveError::inconsistent(format!(
                "symbol {symbol} reported {count} times in {range:?} with only {remaining} positions unaccounted for"
            )));
        }

        remaining -= count;
        table.set(symbol, count);
        if count > 0 {
            present.push(symbol);
        }
    }

    table.set(pivot, remaining);
    if remaining > 0 {
        present.push(pivot);
    }

    trace!(range = ?range, pivot, present = ?present, "range estimated");
    Ok(Estimate { table, present })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oracle::LocalOracle;

    fn session(symbols: Vec<Symbol>) -> Session<LocalOracle> {
        Session::new(LocalOracle::new(Code::secret(symbols).unwrap())).unwrap()
    }

    #[test]
    fn table_basics() {
        let table = Cardinalities::from_counts(&[2, 0, 1, 1, 1]);
        assert_eq!(table.alphabet(), 5);
        assert_eq!(table.total(), 5);
        assert_eq!(table.get(1), 2);
        assert_eq!(table.get(2), 0);
        assert_eq!(table.present().collect::<Vec<_>>(), vec![1, 3, 4, 5]);
        assert_eq!(table.single_symbol(), None);
    }

    #[test]
    fn single_symbol_detected() {
        let table = Cardinalities::from_counts(&[0, 0, 3]);
        assert_eq!(table.single_symbol(), Some(3));
    }

    #[test]
    fn remainder_subtracts_per_symbol() {
        let whole = Cardinalities::from_counts(&[2, 0, 1, 1, 1]);
        let left = Cardinalities::from_counts(&[1, 0, 1, 0, 0]);
        let right = whole.remainder(&left).unwrap();
        assert_eq!(right.as_slice(), &[1, 0, 0, 1, 1]);
    }

    #[test]
    fn remainder_rejects_negative_counts() {
        let whole = Cardinalities::from_counts(&[1, 1]);
        let part = Cardinalities::from_counts(&[2, 0]);
        assert!(matches!(
            whole.remainder(&part),
            Err(SolveError::Inconsistent(_))
        ));
    }

    #[test]
    fn frequencies_use_pivot_for_symbol_one() {
        let mut session = session(vec![3, 1, 4, 1, 5]);
        let table = discover_frequencies(&mut session).unwrap();

        assert_eq!(table.as_slice(), &[2, 0, 1, 1, 1]);
        assert_eq!(session.queries(), 4);
        assert!(
            session
                .probes()
                .iter()
                .all(|p| !matches!(p.phase, ProbePhase::Frequency { symbol: 1 }))
        );
    }

    #[test]
    fn frequencies_stop_once_accounted_for() {
        // symbol 2 fills the whole code: no other symbol needs a probe
        let mut session = session(vec![2, 2, 2, 2]);
        let table = discover_frequencies(&mut session).unwrap();

        assert_eq!(table.as_slice(), &[0, 4, 0, 0]);
        assert_eq!(session.queries(), 1);
    }

    #[test]
    fn single_position_code_needs_no_frequency_probe() {
        let mut session = session(vec![1]);
        let table = discover_frequencies(&mut session).unwrap();

        assert_eq!(table.as_slice(), &[1]);
        assert_eq!(session.queries(), 0);
    }

    #[test]
    fn range_estimate_counts_inside_range_only() {
        let mut session = session(vec![3, 1, 4, 1, 5]);
        let parent = Cardinalities::from_counts(&[2, 0, 1, 1, 1]);

        let estimate = estimate_range(&mut session, 0..2, &parent, 1).unwrap();

        assert_eq!(estimate.table.as_slice(), &[1, 0, 1, 0, 0]);
        assert_eq!(estimate.table.total(), 2);
        assert_eq!(estimate.present, vec![3, 1]);
        // pivot 1 skipped: probes for 3, 4 and 5
        assert_eq!(session.queries(), 3);
    }

    #[test]
    fn range_estimate_never_exceeds_k_minus_one_probes() {
        let mut session = session(vec![1, 2, 3, 4, 5, 6]);
        let parent = Cardinalities::from_counts(&[1, 1, 1, 1, 1, 1]);

        estimate_range(&mut session, 0..3, &parent, 1).unwrap();
        assert!(session.queries() <= 5);
    }

    #[test]
    fn full_count_forces_pivot_to_explicit_zero() {
        // two candidates, the probed one fills the whole left half
        let mut session = session(vec![3, 3, 2, 2]);
        let parent = Cardinalities::from_counts(&[0, 2, 2, 0]);

        let estimate = estimate_range(&mut session, 0..2, &parent, 1).unwrap();

        assert_eq!(session.queries(), 1);
        assert_eq!(estimate.table.get(3), 2);
        assert_eq!(estimate.table.get(2), 0);
        assert_eq!(estimate.present, vec![3]);

        let right = parent.remainder(&estimate.table).unwrap();
        assert_eq!(right.as_slice(), &[0, 2, 0, 0]);
        assert_eq!(right.total(), 2);
    }

    #[test]
    fn range_estimate_rejects_counts_beyond_parent() {
        // parent allows one occurrence of symbol 2, the left half holds two
        let mut session = session(vec![2, 2, 1, 1]);
        let parent = Cardinalities::from_counts(&[1, 1, 0, 0]);

        let err = estimate_range(&mut session, 0..2, &parent, 1).unwrap_err();
        assert!(matches!(err, SolveError::Inconsistent(_)));
    }
}
