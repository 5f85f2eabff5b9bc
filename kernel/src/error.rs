//! Configuration and encoding error kinds.
//!
//! Both are synchronous, local validation failures. A failed configuration
//! call leaves the previously valid state untouched; a failed encode call
//! produces no output.

use crate::carrier::permutation::WiringError;
use crate::components::catalog::{ReflectorId, RotorId};

/// A rejected configuration request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("unknown machine model {name:?}")]
    UnknownModel { name: String },

    #[error("unknown rotor {name:?}")]
    UnknownRotor { name: String },

    #[error("unknown reflector {name:?}")]
    UnknownReflector { name: String },

    #[error("unknown rotor slot {name:?}")]
    UnknownSlot { name: String },

    /// The slot exists in general but not in this model (e.g. Fourth on M3).
    #[error("model {model} has no {slot} rotor slot")]
    UnsupportedSlot { model: &'static str, slot: &'static str },

    /// A full rotor selection must name every slot of the model.
    #[error("model {model} has {expected} rotor slots, {actual} were given")]
    SlotCountMismatch {
        model: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("rotor {rotor} is not allowed in the {slot} slot of model {model}")]
    RotorNotAllowed {
        model: &'static str,
        slot: &'static str,
        rotor: RotorId,
    },

    #[error("rotor {rotor} is selected in more than one slot")]
    DuplicateRotor { rotor: RotorId },

    #[error("reflector {reflector} is not supported by model {model}")]
    ReflectorNotAllowed {
        model: &'static str,
        reflector: ReflectorId,
    },

    #[error("ring position {ring} is outside 1..={max}")]
    RingPositionOutOfRange { ring: usize, max: usize },

    #[error("wheel position {symbol:?} is not in the alphabet")]
    InvalidWheelPosition { symbol: char },

    #[error("reflector {reflector} cannot be repositioned")]
    ReflectorNotMovable { reflector: ReflectorId },

    #[error("reflector {reflector} cannot be set to position {symbol:?}")]
    ReflectorPositionNotAllowed { reflector: ReflectorId, symbol: char },

    #[error("reflector {reflector} cannot be rewired")]
    ReflectorNotRewirable { reflector: ReflectorId },

    #[error("expected exactly {expected} wiring pairs, {actual} were given")]
    WrongPairCount { expected: usize, actual: usize },

    /// A pair names a symbol the component cannot accept.
    #[error("symbol {symbol:?} is not in the alphabet")]
    UnsupportedSymbol { symbol: char },

    #[error("symbol {symbol:?} cannot be paired with itself")]
    SelfPairing { symbol: char },

    #[error("symbol {symbol:?} is already connected")]
    SymbolAlreadyConnected { symbol: char },

    /// The contact belongs to the permanently wired pair of a rewirable reflector.
    #[error("contact {symbol:?} is permanently wired and cannot be reassigned")]
    FixedContact { symbol: char },

    #[error("this model has no plugboard")]
    PlugboardUnavailable,

    #[error("reflector {reflector} has not been wired")]
    ReflectorNotWired { reflector: ReflectorId },

    /// A bundled wiring cannot be expressed over the machine's alphabet.
    #[error("{component} wiring is incompatible with the alphabet: {reason}")]
    IncompatibleAlphabet {
        component: String,
        reason: WiringError,
    },
}

/// A rejected encode request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EncodingError {
    /// Input symbol outside the alphabet. `position` is the character offset
    /// within the call's input text.
    #[error("symbol {symbol:?} at position {position} is not in the alphabet")]
    UnsupportedSymbol { symbol: char, position: usize },
}
