//! Stecker Machine: model registry, orchestrator and diagnostics.
//!
//! Builds complete rotor machines out of `stecker_kernel` components.
//!
//! # Crate dependency graph
//!
//! ```text
//! stecker_kernel  ←  stecker_machine  ←  lock-tests / benchmarks
//! (components)       (models, encode)
//! ```
//!
//! # Key types
//!
//! - [`ModelId`] / [`RotorSlot`] -- the static capability matrix
//! - [`Machine`] -- configuration, stepping, encode and trace
//! - [`MachineSettings`] -- structured key sheet with canonical digest
//! - [`SymbolTrace`] -- per-symbol stage-by-stage record
//! - [`MachineError`] -- configuration or encoding failure
//!
//! # Example
//!
//! ```
//! use stecker_machine::{Machine, MachineSettings, ModelId, RotorSettings, RotorSlot};
//! use stecker_kernel::components::catalog::{ReflectorId, RotorId};
//! use stecker_machine::ReflectorSettings;
//!
//! let sheet = MachineSettings::new(ModelId::M3)
//!     .with_rotor(RotorSlot::Right, RotorSettings::new().with_rotor(RotorId::III))
//!     .with_rotor(RotorSlot::Middle, RotorSettings::new().with_rotor(RotorId::II))
//!     .with_rotor(RotorSlot::Left, RotorSettings::new().with_rotor(RotorId::I))
//!     .with_reflector(ReflectorSettings::new().with_reflector(ReflectorId::B));
//!
//! let mut machine = Machine::from_settings(&sheet)?;
//! let cipher = machine.encode("AAAAA")?;
//! assert_eq!(cipher, "BDZGO");
//!
//! machine.reset();
//! assert_eq!(machine.encode(&cipher)?, "AAAAA");
//! # Ok::<(), stecker_machine::MachineError>(())
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod machine;
pub mod model;
pub mod settings;
pub mod trace;

pub use error::MachineError;
pub use machine::Machine;
pub use model::{ModelId, RotorSlot};
pub use settings::{MachineSettings, ReflectorSettings, RotorSettings};
pub use trace::{trace_digest, Direction, Stage, StageRecord, SymbolTrace};
