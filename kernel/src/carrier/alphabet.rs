//! `Alphabet`: the ordered symbol set a machine operates over.
//!
//! Every component works on symbol *indices* (`0..len()`); the alphabet is the
//! only place that converts between symbols and indices. It is an explicit
//! value owned by each machine and shared with its components, never a
//! process-wide global, so tests can build isolated fixtures and alternate
//! orderings.
//!
//! # Invariants
//!
//! - No symbol appears twice (the symbol ↔ index mapping is a bijection).
//! - The length is even and at least 2, so a reflector can pair every contact
//!   with a different one.

use std::collections::BTreeMap;
use std::fmt;

/// The 26-letter Latin alphabet used by every bundled machine model.
pub const LATIN: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Error type for alphabet construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AlphabetError {
    /// Fewer than two symbols.
    #[error("alphabet must contain at least two symbols, got {len}")]
    TooShort { len: usize },
    /// An odd number of symbols cannot be fully paired by a reflector.
    #[error("alphabet must contain an even number of symbols, got {len}")]
    OddLength { len: usize },
    /// A symbol was listed more than once.
    #[error("symbol {symbol:?} appears more than once in the alphabet")]
    DuplicateSymbol { symbol: char },
}

/// An ordered, immutable symbol set with an index bijection.
#[derive(Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<char>,
    index: BTreeMap<char, usize>,
}

impl Alphabet {
    /// Build an alphabet from its symbols in order.
    ///
    /// # Errors
    ///
    /// Returns [`AlphabetError`] if the symbol list is too short, has odd
    /// length, or repeats a symbol.
    pub fn new(symbols: &str) -> Result<Self, AlphabetError> {
        let symbols: Vec<char> = symbols.chars().collect();
        if symbols.len() < 2 {
            return Err(AlphabetError::TooShort { len: symbols.len() });
        }
        if symbols.len() % 2 != 0 {
            return Err(AlphabetError::OddLength { len: symbols.len() });
        }

        let mut index = BTreeMap::new();
        for (i, &symbol) in symbols.iter().enumerate() {
            if index.insert(symbol, i).is_some() {
                return Err(AlphabetError::DuplicateSymbol { symbol });
            }
        }

        Ok(Self { symbols, index })
    }

    /// The Latin alphabet `A..=Z`.
    ///
    /// # Panics
    ///
    /// Never in practice: [`LATIN`] is a constant that satisfies every
    /// alphabet invariant.
    #[must_use]
    pub fn latin() -> Self {
        Self::new(LATIN).expect("LATIN is a valid alphabet")
    }

    /// Number of symbols.
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always false for a constructed alphabet; present for API symmetry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Index of `symbol`, or `None` if it is not part of the alphabet.
    #[must_use]
    pub fn index_of(&self, symbol: char) -> Option<usize> {
        self.index.get(&symbol).copied()
    }

    /// Whether `symbol` is part of the alphabet.
    #[must_use]
    pub fn contains(&self, symbol: char) -> bool {
        self.index.contains_key(&symbol)
    }

    /// Symbol at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`. Components only ever hold indices
    /// produced by this alphabet or by permutations of the same size.
    #[must_use]
    pub fn symbol_at(&self, index: usize) -> char {
        self.symbols[index]
    }

    /// All symbols in order.
    #[must_use]
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// Whether `wiring` lists every symbol of this alphabet exactly once.
    #[must_use]
    pub fn is_complete_wiring(&self, wiring: &str) -> bool {
        let mut seen = vec![false; self.len()];
        let mut count = 0usize;
        for symbol in wiring.chars() {
            match self.index_of(symbol) {
                Some(i) if !seen[i] => {
                    seen[i] = true;
                    count += 1;
                }
                _ => return false,
            }
        }
        count == self.len()
    }
}

impl fmt::Debug for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Alphabet({self})")
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.symbols {
            write!(f, "{symbol}")?;
        }
        Ok(())
    }
}
