//! Structured key-sheet records.
//!
//! These records are the only configuration input format the machine takes.
//! `None` (or an empty list) means "keep what the machine has". A complete
//! record, as returned by [`crate::machine::Machine::settings`], rebuilds the
//! same key through [`crate::machine::Machine::from_settings`].

use std::collections::BTreeMap;

use stecker_kernel::components::catalog::{ReflectorId, RotorId};
use stecker_kernel::proof::canon::{canonical_json_bytes, CanonError};
use stecker_kernel::proof::hash::{canonical_hash, ContentHash};
use stecker_kernel::proof::hash_domain::HashDomain;

use crate::model::{ModelId, RotorSlot};

/// Settings for one rotor slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RotorSettings {
    pub rotor: Option<RotorId>,
    /// Wheel position (Grundstellung), also the reset baseline.
    pub wheel: Option<char>,
    /// Ring setting (Ringstellung), 1-based.
    pub ring: Option<usize>,
}

impl RotorSettings {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_rotor(mut self, rotor: RotorId) -> Self {
        self.rotor = Some(rotor);
        self
    }

    #[must_use]
    pub fn with_wheel(mut self, wheel: char) -> Self {
        self.wheel = Some(wheel);
        self
    }

    #[must_use]
    pub fn with_ring(mut self, ring: usize) -> Self {
        self.ring = Some(ring);
        self
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "rotor": self.rotor.map(RotorId::as_str),
            "wheel": self.wheel.map(String::from),
            "ring": self.ring,
        })
    }
}

/// Reflector settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReflectorSettings {
    pub reflector: Option<ReflectorId>,
    /// Only for movable reflectors.
    pub wheel: Option<char>,
    /// Field wiring for a rewirable reflector, in its contact labeling.
    /// Empty keeps the current wiring.
    pub wiring: Vec<(char, char)>,
}

impl ReflectorSettings {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_reflector(mut self, reflector: ReflectorId) -> Self {
        self.reflector = Some(reflector);
        self
    }

    #[must_use]
    pub fn with_wheel(mut self, wheel: char) -> Self {
        self.wheel = Some(wheel);
        self
    }

    #[must_use]
    pub fn with_wiring(mut self, pairs: &[(char, char)]) -> Self {
        self.wiring = pairs.to_vec();
        self
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "reflector": self.reflector.map(ReflectorId::as_str),
            "wheel": self.wheel.map(String::from),
            "wiring": pairs_to_json(&self.wiring),
        })
    }
}

/// A full key sheet for one machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MachineSettings {
    pub model: ModelId,
    pub rotors: BTreeMap<RotorSlot, RotorSettings>,
    pub reflector: ReflectorSettings,
    /// Plugboard pairs. Empty leaves the plugboard unconnected.
    pub plugboard: Vec<(char, char)>,
}

impl MachineSettings {
    /// A key sheet that keeps every model default.
    #[must_use]
    pub fn new(model: ModelId) -> Self {
        Self {
            model,
            rotors: BTreeMap::new(),
            reflector: ReflectorSettings::default(),
            plugboard: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_rotor(mut self, slot: RotorSlot, settings: RotorSettings) -> Self {
        self.rotors.insert(slot, settings);
        self
    }

    #[must_use]
    pub fn with_reflector(mut self, settings: ReflectorSettings) -> Self {
        self.reflector = settings;
        self
    }

    #[must_use]
    pub fn with_plugboard(mut self, pairs: &[(char, char)]) -> Self {
        self.plugboard = pairs.to_vec();
        self
    }

    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        let rotors: serde_json::Map<String, serde_json::Value> = self
            .rotors
            .iter()
            .map(|(slot, settings)| (slot.as_str().to_string(), settings.to_json()))
            .collect();

        serde_json::json!({
            "model": self.model.as_str(),
            "rotors": rotors,
            "reflector": self.reflector.to_json(),
            "plugboard": pairs_to_json(&self.plugboard),
        })
    }

    /// Canonical JSON of the key sheet.
    ///
    /// # Errors
    ///
    /// Propagates [`CanonError`]; key sheets hold only strings and integers.
    pub fn canonical_bytes(&self) -> Result<Vec<u8>, CanonError> {
        canonical_json_bytes(&self.to_json())
    }

    /// Domain-separated SHA-256 of [`MachineSettings::canonical_bytes`].
    ///
    /// # Errors
    ///
    /// Propagates [`CanonError`].
    pub fn digest(&self) -> Result<ContentHash, CanonError> {
        Ok(canonical_hash(
            HashDomain::MachineSettings,
            &self.canonical_bytes()?,
        ))
    }
}

fn pairs_to_json(pairs: &[(char, char)]) -> serde_json::Value {
    pairs
        .iter()
        .map(|&(a, b)| serde_json::json!([a.to_string(), b.to_string()]))
        .collect()
}
