//! `Plugboard`: a partial involution at the machine boundary.
//!
//! Unpaired symbols pass straight through. The plugboard never turns, so
//! translation is a direct lookup.

use std::sync::Arc;

use crate::carrier::alphabet::Alphabet;
use crate::carrier::permutation::{Permutation, WiringError};
use crate::error::ConfigurationError;

#[derive(Debug, Clone)]
pub struct Plugboard {
    alphabet: Arc<Alphabet>,
    configurable: bool,
    wiring: Permutation,
}

impl Plugboard {
    /// An empty plugboard. `configurable` is false for models without one;
    /// such a plugboard stays the identity.
    #[must_use]
    pub fn new(alphabet: Arc<Alphabet>, configurable: bool) -> Self {
        let wiring = Permutation::identity(alphabet.len());
        Self {
            alphabet,
            configurable,
            wiring,
        }
    }

    #[must_use]
    pub fn is_configurable(&self) -> bool {
        self.configurable
    }

    /// Replace the current pairing with `pairs`. An empty list clears it.
    ///
    /// # Errors
    ///
    /// - [`ConfigurationError::PlugboardUnavailable`] if not configurable.
    /// - [`ConfigurationError::UnsupportedSymbol`] for a symbol outside the alphabet.
    /// - [`ConfigurationError::SelfPairing`] for a pair like `AA`.
    /// - [`ConfigurationError::SymbolAlreadyConnected`] if a symbol appears twice.
    ///
    /// On error the previous pairing stays installed.
    pub fn setup(&mut self, pairs: &[(char, char)]) -> Result<(), ConfigurationError> {
        if !self.configurable {
            return Err(ConfigurationError::PlugboardUnavailable);
        }

        let mut wiring = Permutation::identity(self.alphabet.len());
        for &(a, b) in pairs {
            let index = |symbol| {
                self.alphabet
                    .index_of(symbol)
                    .ok_or(ConfigurationError::UnsupportedSymbol { symbol })
            };
            let (ia, ib) = (index(a)?, index(b)?);
            wiring.connect(ia, ib).map_err(|err| match err {
                WiringError::AlreadyPaired { index } => ConfigurationError::SymbolAlreadyConnected {
                    symbol: self.alphabet.symbol_at(index),
                },
                _ => ConfigurationError::SelfPairing { symbol: a },
            })?;
        }

        self.wiring = wiring;
        Ok(())
    }

    #[must_use]
    pub fn translate(&self, input: usize) -> usize {
        self.wiring.forward(input)
    }

    /// Installed pairs, each ordered by alphabet index and sorted.
    #[must_use]
    pub fn pairs(&self) -> Vec<(char, char)> {
        self.wiring
            .transpositions()
            .into_iter()
            .map(|(a, b)| (self.alphabet.symbol_at(a), self.alphabet.symbol_at(b)))
            .collect()
    }
}
