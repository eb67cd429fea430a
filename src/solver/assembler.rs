//! Write-once buffer for the code being reconstructed

use super::SolveError;
use crate::core::{Code, Symbol};
use std::ops::Range;
use tracing::trace;

/// The code under reconstruction; every position is written exactly once
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartialSolution {
    slots: Vec<Option<Symbol>>,
    leaves: usize,
}

impl PartialSolution {
    #[must_use]
    pub fn new(length: usize) -> Self {
        Self {
            slots: vec![None; length],
            leaves: 0,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Resolve every position in `range` to `symbol`
    ///
    /// # Errors
    /// Returns `SolveError::PositionWrittenTwice` if any position in `range`
    /// was already resolved; nothing is written in that case.
    ///
    /// # Panics
    /// Panics if `range` extends past the end of the code.
    pub fn fill(&mut self, range: Range<usize>, symbol: Symbol) -> Result<(), SolveError> {
        let slots = &mut self.slots[range.clone()];
        if let Some(offset) = slots.iter().position(Option::is_some) {
            return Err(SolveError::PositionWrittenTwice(range.start + offset));
        }

        slots.fill(Some(symbol));
        self.leaves += 1;
        trace!(range = ?range, symbol, "range resolved");
        Ok(())
    }

    /// Resolve a single position
    ///
    /// # Errors
    /// See [`PartialSolution::fill`].
    pub fn assign(&mut self, position: usize, symbol: Symbol) -> Result<(), SolveError> {
        self.fill(position..position + 1, symbol)
    }

    #[must_use]
    pub fn is_resolved(&self, position: usize) -> bool {
        self.slots[position].is_some()
    }

    /// Positions not written yet
    #[must_use]
    pub fn unresolved(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_none()).count()
    }

    /// Number of `fill` calls, i.e. leaf ranges of the partition
    #[must_use]
    pub const fn leaves(&self) -> usize {
        self.leaves
    }

    /// Finish assembly
    ///
    /// # Errors
    /// Returns `SolveError::Incomplete` if any position is unresolved, or
    /// `SolveError::Inconsistent` if the symbols do not form a valid code.
    pub fn into_code(self) -> Result<Code, SolveError> {
        let unresolved = self.unresolved();
        if unresolved > 0 {
            return Err(SolveError::Incomplete { unresolved });
        }

        let symbols = self.slots.into_iter().flatten().collect();
        Code::secret(symbols).map_err(|e| SolveError::inconsistent(e.to_string()))
    }
}
