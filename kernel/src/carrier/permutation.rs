//! `Permutation`: a bijective wiring over alphabet indices.
//!
//! Stored as two fixed-length index tables built once at construction:
//! `forward[i]` is the contact that input contact `i` is wired to, and
//! `inverse` is its exact inverse. Every index appears exactly once in each
//! table.
//!
//! # Rotated lookup
//!
//! A wheel that has turned by `offset` positions presents its fixed wiring
//! shifted: the signal enters at `input + offset`, crosses the wiring, and
//! leaves at `output - offset` (all mod N). [`Permutation::forward_rotated`]
//! and [`Permutation::inverse_rotated`] implement exactly that.
//!
//! # Involutions
//!
//! Reflectors and the plugboard are involutions built from disjoint pairs
//! ([`Permutation::connect`]). A reflector additionally has no fixed point.

use crate::carrier::alphabet::Alphabet;

/// Error type for permutation construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WiringError {
    /// The wiring string does not have exactly one contact per symbol.
    #[error("wiring has {actual} contacts, expected {expected}")]
    LengthMismatch { expected: usize, actual: usize },
    /// A wiring symbol is not part of the alphabet.
    #[error("wiring symbol {symbol:?} is not in the alphabet")]
    UnknownSymbol { symbol: char },
    /// Two contacts are wired to the same target.
    #[error("wiring maps more than one contact to {symbol:?}")]
    DuplicateTarget { symbol: char },
    /// A pair references a contact outside the permutation.
    #[error("contact {index} is out of range for a {size}-contact wiring")]
    OutOfRange { index: usize, size: usize },
    /// A pair connects a contact to itself.
    #[error("contact {index} cannot be paired with itself")]
    SelfPaired { index: usize },
    /// A pair touches a contact that is already paired.
    #[error("contact {index} is already paired")]
    AlreadyPaired { index: usize },
}

/// A bijection over `0..len()` with precomputed inverse.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Permutation {
    forward: Box<[usize]>,
    inverse: Box<[usize]>,
}

impl Permutation {
    /// The identity wiring: every contact maps to itself.
    #[must_use]
    pub fn identity(size: usize) -> Self {
        let table: Box<[usize]> = (0..size).collect();
        Self {
            forward: table.clone(),
            inverse: table,
        }
    }

    /// Build from a wiring string: the symbol at position `i` is the
    /// contact that input `i` is wired to.
    ///
    /// # Errors
    ///
    /// Returns [`WiringError`] if the string is not a complete bijection over
    /// `alphabet` (wrong length, foreign symbol, or duplicate target).
    pub fn from_wiring(alphabet: &Alphabet, wiring: &str) -> Result<Self, WiringError> {
        let size = alphabet.len();
        let actual = wiring.chars().count();
        if actual != size {
            return Err(WiringError::LengthMismatch {
                expected: size,
                actual,
            });
        }

        let mut forward = vec![0usize; size];
        let mut inverse: Vec<Option<usize>> = vec![None; size];
        for (i, symbol) in wiring.chars().enumerate() {
            let target = alphabet
                .index_of(symbol)
                .ok_or(WiringError::UnknownSymbol { symbol })?;
            if inverse[target].is_some() {
                return Err(WiringError::DuplicateTarget { symbol });
            }
            forward[i] = target;
            inverse[target] = Some(i);
        }

        // Length matches and no target repeats, so every slot is filled.
        let inverse = inverse.into_iter().map(|i| i.unwrap_or(0)).collect();
        Ok(Self {
            forward: forward.into_boxed_slice(),
            inverse,
        })
    }

    /// Build an involution from the identity plus disjoint transpositions.
    ///
    /// # Errors
    ///
    /// Returns the first [`WiringError`] raised by [`Permutation::connect`].
    pub fn from_pairs(size: usize, pairs: &[(usize, usize)]) -> Result<Self, WiringError> {
        let mut permutation = Self::identity(size);
        for &(a, b) in pairs {
            permutation.connect(a, b)?;
        }
        Ok(permutation)
    }

    /// Swap two currently unpaired contacts, keeping both tables consistent.
    ///
    /// Only meaningful on an involution (a permutation built from the
    /// identity by earlier `connect` calls). Fails without mutating on error.
    ///
    /// # Errors
    ///
    /// - [`WiringError::OutOfRange`] if either contact is `>= len()`.
    /// - [`WiringError::SelfPaired`] if `a == b`.
    /// - [`WiringError::AlreadyPaired`] if either contact is not a fixed point.
    pub fn connect(&mut self, a: usize, b: usize) -> Result<(), WiringError> {
        let size = self.len();
        for index in [a, b] {
            if index >= size {
                return Err(WiringError::OutOfRange { index, size });
            }
        }
        if a == b {
            return Err(WiringError::SelfPaired { index: a });
        }
        for index in [a, b] {
            if self.forward[index] != index {
                return Err(WiringError::AlreadyPaired { index });
            }
        }

        self.forward[a] = b;
        self.forward[b] = a;
        self.inverse[a] = b;
        self.inverse[b] = a;
        Ok(())
    }

    /// Number of contacts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.forward.len()
    }

    /// Whether the permutation has no contacts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    /// Direct lookup in the forward direction.
    #[must_use]
    pub fn forward(&self, input: usize) -> usize {
        self.forward[input]
    }

    /// Direct lookup in the inverse direction.
    #[must_use]
    pub fn inverse(&self, input: usize) -> usize {
        self.inverse[input]
    }

    /// Forward lookup through wiring that has turned by `offset` positions.
    #[must_use]
    pub fn forward_rotated(&self, input: usize, offset: usize) -> usize {
        Self::rotated(&self.forward, input, offset)
    }

    /// Inverse lookup through wiring that has turned by `offset` positions.
    #[must_use]
    pub fn inverse_rotated(&self, input: usize, offset: usize) -> usize {
        Self::rotated(&self.inverse, input, offset)
    }

    fn rotated(table: &[usize], input: usize, offset: usize) -> usize {
        let size = table.len();
        let offset = offset % size;
        let output = table[(input + offset) % size];
        (output + size - offset) % size
    }

    /// Whether applying the permutation twice is the identity.
    #[must_use]
    pub fn is_involution(&self) -> bool {
        self.forward
            .iter()
            .enumerate()
            .all(|(i, &target)| self.forward[target] == i)
    }

    /// Whether no contact maps to itself.
    #[must_use]
    pub fn is_derangement(&self) -> bool {
        self.forward.iter().enumerate().all(|(i, &target)| target != i)
    }

    /// The non-trivial pairs `(a, b)` with `a < b` of an involution, in
    /// ascending order of `a`.
    #[must_use]
    pub fn transpositions(&self) -> Vec<(usize, usize)> {
        self.forward
            .iter()
            .enumerate()
            .filter(|&(i, &target)| i < target && self.forward[target] == i)
            .map(|(i, &target)| (i, target))
            .collect()
    }
}
