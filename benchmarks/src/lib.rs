//! Shared helpers for the stecker benchmark suites.

use stecker_machine::{Machine, MachineSettings, ModelId, ReflectorSettings};

/// Field wiring used whenever a benchmark needs a wired UKW-D.
pub const FIELD_WIRING: [(char, char); 12] = [
    ('A', 'Q'),
    ('B', 'G'),
    ('C', 'K'),
    ('D', 'I'),
    ('E', 'L'),
    ('F', 'X'),
    ('H', 'Z'),
    ('M', 'W'),
    ('N', 'V'),
    ('O', 'T'),
    ('P', 'U'),
    ('R', 'S'),
];

/// Plugboard pairs for models that have one.
pub const PLUGBOARD: [(char, char); 10] = [
    ('A', 'I'),
    ('B', 'X'),
    ('C', 'U'),
    ('D', 'F'),
    ('E', 'N'),
    ('G', 'Q'),
    ('H', 'M'),
    ('J', 'L'),
    ('K', 'T'),
    ('O', 'P'),
];

/// A ready-to-encode key sheet for `model`: defaults, a wired reflector and a
/// full plugboard where the model has one.
#[must_use]
pub fn bench_settings(model: ModelId) -> MachineSettings {
    let mut settings = MachineSettings::new(model);
    if model.default_reflector().spec().rewiring.is_some() {
        settings = settings.with_reflector(ReflectorSettings::new().with_wiring(&FIELD_WIRING));
    }
    if model.has_plugboard() {
        settings = settings.with_plugboard(&PLUGBOARD);
    }
    settings
}

/// Build the machine for [`bench_settings`].
///
/// # Panics
///
/// Panics if the bundled benchmark key is rejected. Benchmark setup failures are fatal.
#[must_use]
pub fn bench_machine(model: ModelId) -> Machine {
    Machine::from_settings(&bench_settings(model)).expect("benchmark key is valid")
}

/// A deterministic message of `len` letters cycling through the alphabet.
#[must_use]
pub fn message(len: usize) -> String {
    (b'A'..=b'Z').cycle().take(len).map(char::from).collect()
}
