//! Code sequence representation
//!
//! A Code is an ordered sequence of symbols. Hidden codes use the alphabet
//! `1..=N` where N is the code length; guesses may also use the sentinel `0`
//! to mask positions out of a probe.

use std::fmt;
use std::ops::Range;
use std::str::FromStr;

/// A single peg symbol
pub type Symbol = u16;

/// Guess value that never matches a hidden symbol
pub const SENTINEL: Symbol = 0;

/// An ordered sequence of symbols (hidden code or guess)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Code {
    symbols: Vec<Symbol>,
}

/// Error type for invalid codes
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodeError {
    #[error("code must contain at least one symbol")]
    Empty,
    #[error("code length {0} exceeds the largest supported length {max}", max = Symbol::MAX)]
    TooLong(usize),
    #[error("symbol {symbol} at position {position} is outside {min}..={length}")]
    SymbolOutOfRange {
        position: usize,
        symbol: Symbol,
        min: Symbol,
        length: usize,
    },
    #[error("cannot parse '{0}' as a symbol")]
    InvalidSymbol(String),
    #[error("expected {expected} symbols, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}

impl Code {
    /// Create a hidden code; every symbol must lie in `1..=len`
    ///
    /// # Errors
    /// Returns `CodeError` if the code is empty, too long, or contains a
    /// symbol outside its alphabet.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::Code;
    ///
    /// let code = Code::secret(vec![3, 1, 4, 1, 5]).unwrap();
    /// assert_eq!(code.len(), 5);
    ///
    /// assert!(Code::secret(vec![1, 6, 2]).is_err());
    /// assert!(Code::secret(vec![0, 1]).is_err());
    /// ```
    pub fn secret(symbols: Vec<Symbol>) -> Result<Self, CodeError> {
        validate(&symbols, symbols.len(), 1)?;
        Ok(Self { symbols })
    }

    /// Create a guess for a game of `length` positions; `0` is allowed
    ///
    /// # Errors
    /// Returns `CodeError` if the length does not match or a symbol is
    /// outside `0..=length`.
    pub fn guess(symbols: Vec<Symbol>, length: usize) -> Result<Self, CodeError> {
        let code = Self { symbols };
        code.check_guess(length)?;
        Ok(code)
    }

    /// Check that this code is a legal guess for a game of `length` positions
    ///
    /// # Errors
    /// Returns `CodeError::LengthMismatch` or `CodeError::SymbolOutOfRange`.
    pub fn check_guess(&self, length: usize) -> Result<(), CodeError> {
        if self.symbols.len() != length {
            return Err(CodeError::LengthMismatch {
                expected: length,
                actual: self.symbols.len(),
            });
        }
        validate(&self.symbols, length, SENTINEL)
    }

    /// A guess holding `symbol` at every position
    #[must_use]
    pub fn filled(length: usize, symbol: Symbol) -> Self {
        Self {
            symbols: vec![symbol; length],
        }
    }

    /// A guess holding `symbol` inside `range` and the sentinel elsewhere
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::Code;
    ///
    /// let probe = Code::masked(5, 1..3, 4);
    /// assert_eq!(probe.symbols(), &[0, 4, 4, 0, 0]);
    /// ```
    #[must_use]
    pub fn masked(length: usize, range: Range<usize>, symbol: Symbol) -> Self {
        debug_assert!(range.end <= length);
        let mut symbols = vec![SENTINEL; length];
        symbols[range].fill(symbol);
        Self { symbols }
    }

    /// A guess with a single `symbol` at `position`
    #[must_use]
    pub fn single(length: usize, position: usize, symbol: Symbol) -> Self {
        Self::masked(length, position..position + 1, symbol)
    }

    /// Number of positions
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always false for validated codes
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Get the symbol at a specific position
    ///
    /// # Panics
    /// Panics if position >= len
    #[inline]
    #[must_use]
    pub fn symbol_at(&self, position: usize) -> Symbol {
        self.symbols[position]
    }

    /// Occurrence count per symbol, indexed by symbol (index 0 counts sentinels)
    #[must_use]
    pub fn frequencies(&self) -> Vec<usize> {
        let mut counts = vec![0; self.len() + 1];
        for &symbol in &self.symbols {
            if let Some(count) = counts.get_mut(usize::from(symbol)) {
                *count += 1;
            }
        }
        counts
    }
}

fn validate(symbols: &[Symbol], length: usize, min: Symbol) -> Result<(), CodeError> {
    if symbols.is_empty() {
        return Err(CodeError::Empty);
    }
    if length > usize::from(Symbol::MAX) {
        return Err(CodeError::TooLong(length));
    }

    match symbols
        .iter()
        .enumerate()
        .find(|&(_, &s)| s < min || usize::from(s) > length)
    {
        Some((position, &symbol)) => Err(CodeError::SymbolOutOfRange {
            position,
            symbol,
            min,
            length,
        }),
        None => Ok(()),
    }
}

impl FromStr for Code {
    type Err = CodeError;

    /// Parse a hidden code such as `"3,1,4,1,5"` or `"3 1 4 1 5"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty())
            .map(|token| {
                token
                    .parse::<Symbol>()
                    .map_err(|_| CodeError::InvalidSymbol(token.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::secret(symbols)
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, symbol) in self.symbols.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{symbol}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn secret_accepts_full_alphabet() {
        let code = Code::secret(vec![3, 1, 4, 1, 5]).unwrap();
        assert_eq!(code.len(), 5);
        assert_eq!(code.symbol_at(2), 4);
    }

    #[test]
    fn secret_rejects_sentinel() {
        let err = Code::secret(vec![1, 0, 2]).unwrap_err();
        assert_eq!(
            err,
            CodeError::SymbolOutOfRange {
                position: 1,
                symbol: 0,
                min: 1,
                length: 3
            }
        );
    }

    #[test]
    fn secret_rejects_symbol_above_length() {
        assert!(Code::secret(vec![1, 2, 4]).is_err());
    }

    #[test]
    fn secret_rejects_empty() {
        assert_eq!(Code::secret(vec![]).unwrap_err(), CodeError::Empty);
    }

    #[test]
    fn guess_allows_sentinel() {
        let guess = Code::guess(vec![0, 2, 0], 3).unwrap();
        assert_eq!(guess.symbols(), &[0, 2, 0]);
    }

    #[test]
    fn guess_rejects_wrong_length() {
        let err = Code::guess(vec![1, 2], 3).unwrap_err();
        assert_eq!(
            err,
            CodeError::LengthMismatch {
                expected: 3,
                actual: 2
            }
        );
    }

    #[test]
    fn masked_only_touches_range() {
        let probe = Code::masked(6, 2..5, 3);
        assert_eq!(probe.symbols(), &[0, 0, 3, 3, 3, 0]);
    }

    #[test]
    fn single_places_one_symbol() {
        assert_eq!(Code::single(4, 3, 2).symbols(), &[0, 0, 0, 2]);
    }

    #[test]
    fn frequencies_count_each_symbol() {
        let code = Code::secret(vec![3, 1, 4, 1, 5]).unwrap();
        assert_eq!(code.frequencies(), vec![0, 2, 0, 1, 1, 1]);
    }

    #[test]
    fn parse_commas_and_spaces() {
        let a: Code = "3,1,4,1,5".parse().unwrap();
        let b: Code = "3 1 4 1 5".parse().unwrap();
        let c: Code = " 3, 1, 4, 1, 5 ".parse().unwrap();
        assert_eq!(a, b);
        assert_eq!(a, c);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert_eq!(
            "1,x,2".parse::<Code>().unwrap_err(),
            CodeError::InvalidSymbol("x".to_string())
        );
    }

    #[test]
    fn display_round_trips() {
        let code = Code::secret(vec![2, 2, 1]).unwrap();
        assert_eq!(code.to_string(), "2,2,1");
        assert_eq!(code.to_string().parse::<Code>().unwrap(), code);
    }
}
