//! Components module: the physical parts of a rotor machine.
//!
//! Every component indexes into the same shared [`Alphabet`] and is built
//! from the bundled [`catalog`]. Components know nothing about models or
//! slots; the machine crate enforces which combinations are legal.
//!
//! Depends on `carrier` and `error`.
//!
//! [`Alphabet`]: crate::carrier::alphabet::Alphabet

pub mod catalog;
pub mod entry_wheel;
pub mod plugboard;
pub mod reflector;
pub mod rotor;
