//! `Reflector`: the involution that turns the signal around.
//!
//! Three flavors share one type:
//!
//! - fixed: bundled wiring, position pinned at the first symbol;
//! - movable: may be set to any of its allowed positions, which rotates the
//!   lookup like a rotor that never steps;
//! - rewirable: the bundled wiring is only a placeholder. A field wiring of
//!   exactly `N/2 - 1` caller pairs plus one permanently wired pair must be
//!   installed with [`Reflector::set_wiring`] before the reflector is usable.

use std::sync::Arc;

use crate::carrier::alphabet::Alphabet;
use crate::carrier::permutation::{Permutation, WiringError};
use crate::components::catalog::{ReflectorId, RewiringSpec};
use crate::error::ConfigurationError;

#[derive(Debug, Clone)]
pub struct Reflector {
    id: ReflectorId,
    alphabet: Arc<Alphabet>,
    wiring: Permutation,
    wheel: usize,
    rewiring: Option<FieldWiring>,
}

/// Rewiring state of a rewirable reflector.
#[derive(Debug, Clone)]
struct FieldWiring {
    /// `forward(contact)` is the alphabet index of that contact's label.
    labels: Permutation,
    fixed_pair: (char, char),
    /// Caller pairs of the installed wiring; `None` until wired.
    pairs: Option<Vec<(char, char)>>,
}

impl Reflector {
    /// # Errors
    ///
    /// [`ConfigurationError::IncompatibleAlphabet`] if the bundled wiring or
    /// contact labeling cannot be expressed over `alphabet`.
    ///
    /// # Panics
    ///
    /// Panics if a bundled reflector wiring is not a fixed-point-free
    /// involution. That is a defect in the static tables, not bad input.
    pub fn new(id: ReflectorId, alphabet: Arc<Alphabet>) -> Result<Self, ConfigurationError> {
        let spec = id.spec();
        let incompatible = |reason| ConfigurationError::IncompatibleAlphabet {
            component: format!("reflector {id}"),
            reason,
        };

        let wiring = Permutation::from_wiring(&alphabet, spec.wiring).map_err(incompatible)?;
        assert!(
            wiring.is_involution() && wiring.is_derangement(),
            "bundled reflector {id} is not a fixed-point-free involution"
        );

        let rewiring = spec
            .rewiring
            .map(|RewiringSpec { contacts, fixed_pair }| {
                let labels = Permutation::from_wiring(&alphabet, contacts)?;
                for symbol in [fixed_pair.0, fixed_pair.1] {
                    if !alphabet.contains(symbol) {
                        return Err(WiringError::UnknownSymbol { symbol });
                    }
                }
                Ok(FieldWiring {
                    labels,
                    fixed_pair,
                    pairs: None,
                })
            })
            .transpose()
            .map_err(incompatible)?;

        Ok(Self {
            id,
            alphabet,
            wiring,
            wheel: 0,
            rewiring,
        })
    }

    #[must_use]
    pub fn id(&self) -> ReflectorId {
        self.id
    }

    #[must_use]
    pub fn is_movable(&self) -> bool {
        self.id.spec().movable
    }

    #[must_use]
    pub fn is_rewirable(&self) -> bool {
        self.rewiring.is_some()
    }

    #[must_use]
    pub fn is_thin(&self) -> bool {
        self.id.spec().thin
    }

    /// False only for a rewirable reflector that has not been wired yet.
    #[must_use]
    pub fn is_wired(&self) -> bool {
        self.rewiring
            .as_ref()
            .is_none_or(|field| field.pairs.is_some())
    }

    /// Positions this reflector may be set to: every symbol if movable,
    /// none otherwise.
    #[must_use]
    pub fn allowed_positions(&self) -> Vec<char> {
        if self.is_movable() {
            self.alphabet.symbols().to_vec()
        } else {
            Vec::new()
        }
    }

    #[must_use]
    pub fn wheel_position(&self) -> char {
        self.alphabet.symbol_at(self.wheel)
    }

    /// # Errors
    ///
    /// - [`ConfigurationError::ReflectorNotMovable`] for a fixed reflector.
    /// - [`ConfigurationError::ReflectorPositionNotAllowed`] if `symbol` is
    ///   not an allowed position.
    pub fn set_wheel_position(&mut self, symbol: char) -> Result<(), ConfigurationError> {
        if !self.is_movable() {
            return Err(ConfigurationError::ReflectorNotMovable { reflector: self.id });
        }
        let index = self
            .alphabet
            .index_of(symbol)
            .ok_or(ConfigurationError::ReflectorPositionNotAllowed {
                reflector: self.id,
                symbol,
            })?;
        self.wheel = index;
        Ok(())
    }

    /// Install a field wiring. Pairs are written in the reflector's contact
    /// labeling. The permanently wired pair is added implicitly.
    ///
    /// # Errors
    ///
    /// Checked in this order, stopping at the first failure:
    ///
    /// - [`ConfigurationError::ReflectorNotRewirable`]
    /// - [`ConfigurationError::WrongPairCount`] unless exactly `N/2 - 1` pairs
    /// - per pair: [`ConfigurationError::UnsupportedSymbol`],
    ///   [`ConfigurationError::SelfPairing`], [`ConfigurationError::FixedContact`],
    ///   [`ConfigurationError::SymbolAlreadyConnected`]
    ///
    /// On error the previous wiring stays installed.
    pub fn set_wiring(&mut self, pairs: &[(char, char)]) -> Result<(), ConfigurationError> {
        let Some(field) = self.rewiring.as_mut() else {
            return Err(ConfigurationError::ReflectorNotRewirable { reflector: self.id });
        };

        let expected = self.alphabet.len() / 2 - 1;
        if pairs.len() != expected {
            return Err(ConfigurationError::WrongPairCount {
                expected,
                actual: pairs.len(),
            });
        }

        let contact = |symbol: char| {
            self.alphabet
                .index_of(symbol)
                .map(|index| field.labels.inverse(index))
                .ok_or(ConfigurationError::UnsupportedSymbol { symbol })
        };

        let mut wiring = Permutation::identity(self.alphabet.len());
        let (fixed_a, fixed_b) = field.fixed_pair;
        wiring
            .connect(contact(fixed_a)?, contact(fixed_b)?)
            .map_err(|_| ConfigurationError::FixedContact { symbol: fixed_a })?;

        for &(a, b) in pairs {
            let (ca, cb) = (contact(a)?, contact(b)?);
            if ca == cb {
                return Err(ConfigurationError::SelfPairing { symbol: a });
            }
            for symbol in [a, b] {
                if symbol == fixed_a || symbol == fixed_b {
                    return Err(ConfigurationError::FixedContact { symbol });
                }
            }
            wiring.connect(ca, cb).map_err(|err| match err {
                WiringError::AlreadyPaired { index } if index == ca => {
                    ConfigurationError::SymbolAlreadyConnected { symbol: a }
                }
                _ => ConfigurationError::SymbolAlreadyConnected { symbol: b },
            })?;
        }

        self.wiring = wiring;
        field.pairs = Some(pairs.to_vec());
        Ok(())
    }

    /// Caller pairs of the installed field wiring, as given. Empty for
    /// reflectors that are not rewirable or not yet wired.
    #[must_use]
    pub fn custom_pairs(&self) -> &[(char, char)] {
        self.rewiring
            .as_ref()
            .and_then(|field| field.pairs.as_deref())
            .unwrap_or(&[])
    }

    #[must_use]
    pub fn translate(&self, input: usize) -> usize {
        self.wiring.forward_rotated(input, self.wheel)
    }
}
