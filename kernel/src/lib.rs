//! Stecker Kernel: the wiring and rotor primitives of a rotor cipher machine.
//!
//! # API Surface
//!
//! - [`carrier::alphabet::Alphabet`] -- the ordered symbol set every component indexes into
//! - [`carrier::permutation::Permutation`] -- bijective wiring with forward/inverse tables and rotated lookup
//! - [`components`] -- plugboard, entry wheel, rotor and reflector, plus the bundled historical catalog
//! - [`proof`] -- canonical JSON and domain-separated SHA-256 for key-sheet and trace digests
//! - [`error`] -- the configuration and encoding error kinds shared with the machine crate
//!
//! # Module Dependency Direction
//!
//! `carrier` ← `components`
//!
//! One-way only. `components` depends on `carrier` and `error`. `carrier`
//! depends on nothing internal. `proof` is leaf-level and used by the
//! machine crate for digests.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod carrier;
pub mod components;
pub mod error;
pub mod proof;
