//! `EntryWheel`: static permutation between keyboard order and contact order.

use crate::carrier::alphabet::Alphabet;
use crate::carrier::permutation::Permutation;
use crate::components::catalog::EntryWheelWiring;
use crate::error::ConfigurationError;

#[derive(Debug, Clone)]
pub struct EntryWheel {
    variant: EntryWheelWiring,
    wiring: Permutation,
}

impl EntryWheel {
    /// # Errors
    ///
    /// [`ConfigurationError::IncompatibleAlphabet`] if the variant's wiring is
    /// not a complete bijection over `alphabet`.
    pub fn new(variant: EntryWheelWiring, alphabet: &Alphabet) -> Result<Self, ConfigurationError> {
        let wiring = Permutation::from_wiring(alphabet, variant.wiring()).map_err(|reason| {
            ConfigurationError::IncompatibleAlphabet {
                component: format!("entry wheel {variant}"),
                reason,
            }
        })?;
        Ok(Self { variant, wiring })
    }

    #[must_use]
    pub fn variant(&self) -> EntryWheelWiring {
        self.variant
    }

    /// Keyboard side to rotor side.
    #[must_use]
    pub fn translate_in(&self, input: usize) -> usize {
        self.wiring.inverse(input)
    }

    /// Rotor side back to keyboard side.
    #[must_use]
    pub fn translate_out(&self, input: usize) -> usize {
        self.wiring.forward(input)
    }
}
