//! `Rotor`: fixed wiring plus mutable wheel and ring offsets.
//!
//! The wiring never changes after construction. What changes is the offset
//! the signal sees: `wheel - (ring - 1)` (mod N). The wheel advances once per
//! keystroke for stepping rotors; the ring is set before use.

use std::sync::Arc;

use crate::carrier::alphabet::Alphabet;
use crate::carrier::permutation::{Permutation, WiringError};
use crate::components::catalog::RotorId;
use crate::error::ConfigurationError;

/// One rotor installed in a slot.
#[derive(Debug, Clone)]
pub struct Rotor {
    id: RotorId,
    alphabet: Arc<Alphabet>,
    wiring: Permutation,
    notches: Vec<usize>,
    /// 1-based ring setting (Ringstellung).
    ring: usize,
    wheel: usize,
    /// Baseline restored by [`Rotor::reset`].
    initial_wheel: usize,
}

impl Rotor {
    /// Build a rotor at wheel position zero, ring 1.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::IncompatibleAlphabet`] if the bundled
    /// wiring or a notch cannot be expressed over `alphabet`.
    pub fn new(id: RotorId, alphabet: Arc<Alphabet>) -> Result<Self, ConfigurationError> {
        let spec = id.spec();
        let incompatible = |reason| ConfigurationError::IncompatibleAlphabet {
            component: format!("rotor {id}"),
            reason,
        };

        let wiring = Permutation::from_wiring(&alphabet, spec.wiring).map_err(incompatible)?;
        let notches = spec
            .notches
            .chars()
            .map(|symbol| {
                alphabet
                    .index_of(symbol)
                    .ok_or(WiringError::UnknownSymbol { symbol })
            })
            .collect::<Result<Vec<_>, _>>()
            .map_err(incompatible)?;

        Ok(Self {
            id,
            alphabet,
            wiring,
            notches,
            ring: 1,
            wheel: 0,
            initial_wheel: 0,
        })
    }

    #[must_use]
    pub fn id(&self) -> RotorId {
        self.id
    }

    #[must_use]
    pub fn is_thin(&self) -> bool {
        self.id.spec().thin
    }

    /// Current window symbol.
    #[must_use]
    pub fn wheel_position(&self) -> char {
        self.alphabet.symbol_at(self.wheel)
    }

    /// The configured baseline window symbol.
    #[must_use]
    pub fn initial_wheel_position(&self) -> char {
        self.alphabet.symbol_at(self.initial_wheel)
    }

    #[must_use]
    pub fn ring_position(&self) -> usize {
        self.ring
    }

    /// Window symbols that carry a turnover notch.
    #[must_use]
    pub fn notches(&self) -> Vec<char> {
        self.notches
            .iter()
            .map(|&i| self.alphabet.symbol_at(i))
            .collect()
    }

    /// Set the window symbol and record it as the reset baseline.
    ///
    /// # Errors
    ///
    /// [`ConfigurationError::InvalidWheelPosition`] if `symbol` is not in the
    /// alphabet. The rotor is left unchanged.
    pub fn set_wheel_position(&mut self, symbol: char) -> Result<(), ConfigurationError> {
        let index = self
            .alphabet
            .index_of(symbol)
            .ok_or(ConfigurationError::InvalidWheelPosition { symbol })?;
        self.wheel = index;
        self.initial_wheel = index;
        Ok(())
    }

    /// Set the 1-based ring setting.
    ///
    /// # Errors
    ///
    /// [`ConfigurationError::RingPositionOutOfRange`] unless `1 <= ring <= N`.
    pub fn set_ring_position(&mut self, ring: usize) -> Result<(), ConfigurationError> {
        let max = self.alphabet.len();
        if !(1..=max).contains(&ring) {
            return Err(ConfigurationError::RingPositionOutOfRange { ring, max });
        }
        self.ring = ring;
        Ok(())
    }

    /// Restore the wheel to its configured baseline.
    pub fn reset(&mut self) {
        self.wheel = self.initial_wheel;
    }

    /// Advance the wheel by one position.
    pub fn step(&mut self) {
        self.wheel = (self.wheel + 1) % self.alphabet.len();
    }

    /// Whether the current (pre-step) wheel position sits on a notch, so the
    /// left neighbor turns on the next keystroke.
    #[must_use]
    pub fn should_step_next(&self) -> bool {
        self.notches.contains(&self.wheel)
    }

    /// Right-to-left pass.
    #[must_use]
    pub fn translate_forward(&self, input: usize) -> usize {
        self.wiring.forward_rotated(input, self.offset())
    }

    /// Left-to-right pass after the reflector.
    #[must_use]
    pub fn translate_backward(&self, input: usize) -> usize {
        self.wiring.inverse_rotated(input, self.offset())
    }

    fn offset(&self) -> usize {
        let size = self.alphabet.len();
        (self.wheel + size - (self.ring - 1)) % size
    }
}
