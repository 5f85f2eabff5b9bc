//! Model registry: the static capability matrix.
//!
//! Each [`ModelId`] resolves to one immutable [`ModelCapabilities`] record.
//! Every model-dependent rule (slot list, which rotors fit which slot, which
//! reflectors are allowed, plugboard presence, entry wheel) is answered from
//! that record rather than from per-model branches.

use std::collections::BTreeSet;

use stecker_kernel::components::catalog::{EntryWheelWiring, ReflectorId, RotorId};
use stecker_kernel::error::ConfigurationError;

// ---------------------------------------------------------------------------
// RotorSlot
// ---------------------------------------------------------------------------

/// A rotor slot, ordered by signal flow: the signal meets `Right` first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RotorSlot {
    Right,
    Middle,
    Left,
    /// The non-stepping thin slot of four-rotor models.
    Fourth,
}

impl RotorSlot {
    pub const ALL: &[RotorSlot] = &[Self::Right, Self::Middle, Self::Left, Self::Fourth];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Right => "Right",
            Self::Middle => "Middle",
            Self::Left => "Left",
            Self::Fourth => "Fourth",
        }
    }

    #[must_use]
    pub fn parse(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|slot| slot.as_str() == label)
    }

    /// Index in signal order.
    #[must_use]
    pub const fn position(self) -> usize {
        self as usize
    }

    /// Whether a rotor in this slot turns during stepping.
    #[must_use]
    pub const fn steps(self) -> bool {
        !matches!(self, Self::Fourth)
    }
}

impl core::fmt::Display for RotorSlot {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for RotorSlot {
    type Err = ConfigurationError;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        Self::parse(label).ok_or_else(|| ConfigurationError::UnknownSlot {
            name: label.to_string(),
        })
    }
}

// ---------------------------------------------------------------------------
// Capability records
// ---------------------------------------------------------------------------

const THREE_SLOTS: &[RotorSlot] = &[RotorSlot::Right, RotorSlot::Middle, RotorSlot::Left];
const FOUR_SLOTS: &[RotorSlot] = RotorSlot::ALL;

const ARMY_ROTORS: &[RotorId] = &[RotorId::I, RotorId::II, RotorId::III, RotorId::IV, RotorId::V];
const NAVY_ROTORS: &[RotorId] = &[
    RotorId::I,
    RotorId::II,
    RotorId::III,
    RotorId::IV,
    RotorId::V,
    RotorId::VI,
    RotorId::VII,
    RotorId::VIII,
];

/// Everything a machine needs to know about its model.
#[derive(Debug)]
pub struct ModelCapabilities {
    pub name: &'static str,
    pub description: &'static str,
    pub year_introduced: u16,
    pub slots: &'static [RotorSlot],
    /// Full rotor set in declaration order; thin rotors go to the fourth slot.
    pub rotors: &'static [RotorId],
    /// Allowed reflectors; the first is the default.
    pub reflectors: &'static [ReflectorId],
    pub plugboard: bool,
    pub entry_wheel: EntryWheelWiring,
}

static COMMERCIAL: ModelCapabilities = ModelCapabilities {
    name: "Commercial K",
    description: "The most successful commercial model. Three swappable rotors and a \
                  movable reflector, the core design all later models built on.",
    year_introduced: 1927,
    slots: THREE_SLOTS,
    rotors: &[RotorId::IK, RotorId::IIK, RotorId::IIIK],
    reflectors: &[ReflectorId::K],
    plugboard: false,
    entry_wheel: EntryWheelWiring::Qwertz,
};

static ENIGMA_I: ModelCapabilities = ModelCapabilities {
    name: "Enigma I",
    description: "Army and air force version of the commercial machine. Adds a plugboard \
                  and fixes the reflector in place. Shipped with three rotors, two more \
                  were added in 1938.",
    year_introduced: 1932,
    slots: THREE_SLOTS,
    rotors: ARMY_ROTORS,
    reflectors: &[ReflectorId::A, ReflectorId::B],
    plugboard: true,
    entry_wheel: EntryWheelWiring::Alphabetical,
};

static M3: ModelCapabilities = ModelCapabilities {
    name: "Enigma M3",
    description: "Navy variant of Enigma I. Compatible with the army machine, later given \
                  three extra navy-only rotors.",
    year_introduced: 1934,
    slots: THREE_SLOTS,
    rotors: NAVY_ROTORS,
    reflectors: &[ReflectorId::A, ReflectorId::B, ReflectorId::C, ReflectorId::D],
    plugboard: true,
    entry_wheel: EntryWheelWiring::Alphabetical,
};

static M4: ModelCapabilities = ModelCapabilities {
    name: "Enigma M4",
    description: "Four-rotor navy machine used mainly for U-boat traffic. A thin reflector \
                  and a thin, non-stepping fourth rotor share the space of the old reflector.",
    year_introduced: 1942,
    slots: FOUR_SLOTS,
    rotors: &[
        RotorId::I,
        RotorId::II,
        RotorId::III,
        RotorId::IV,
        RotorId::V,
        RotorId::VI,
        RotorId::VII,
        RotorId::VIII,
        RotorId::Beta,
        RotorId::Gamma,
    ],
    reflectors: &[ReflectorId::BThin, ReflectorId::CThin],
    plugboard: true,
    entry_wheel: EntryWheelWiring::Alphabetical,
};

static M4_UKW_D: ModelCapabilities = ModelCapabilities {
    name: "Enigma M4 with UKW-D",
    description: "The field-rewirable reflector UKW-D plugged in place of the thin reflector \
                  and fourth rotor. Its wiring was typically changed every ten days.",
    year_introduced: 1944,
    slots: THREE_SLOTS,
    rotors: NAVY_ROTORS,
    reflectors: &[ReflectorId::D],
    plugboard: true,
    entry_wheel: EntryWheelWiring::Alphabetical,
};

static SWISS_K: ModelCapabilities = ModelCapabilities {
    name: "Swiss-K",
    description: "Commercial K built for the Swiss army, with its own rotor wiring and an \
                  extra lamp panel.",
    year_introduced: 1938,
    slots: THREE_SLOTS,
    rotors: &[RotorId::ISK, RotorId::IISK, RotorId::IIISK],
    reflectors: &[ReflectorId::K],
    plugboard: false,
    entry_wheel: EntryWheelWiring::Qwertz,
};

static TRIPITZ: ModelCapabilities = ModelCapabilities {
    name: "Enigma T (Tripitz)",
    description: "Built for traffic between the German and Japanese navies. No plugboard, \
                  but its own entry wheel wiring and five turnover notches per rotor.",
    year_introduced: 1942,
    slots: THREE_SLOTS,
    rotors: &[
        RotorId::IT,
        RotorId::IIT,
        RotorId::IIIT,
        RotorId::IVT,
        RotorId::VT,
        RotorId::VIT,
        RotorId::VIIT,
        RotorId::VIIIT,
    ],
    reflectors: &[ReflectorId::T],
    plugboard: false,
    entry_wheel: EntryWheelWiring::Tripitz,
};

// ---------------------------------------------------------------------------
// ModelId
// ---------------------------------------------------------------------------

/// Supported machine models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ModelId {
    Commercial,
    EnigmaI,
    M3,
    M4,
    M4UkwD,
    SwissK,
    Tripitz,
}

impl ModelId {
    pub const ALL: &[ModelId] = &[
        Self::Commercial,
        Self::EnigmaI,
        Self::M3,
        Self::M4,
        Self::M4UkwD,
        Self::SwissK,
        Self::Tripitz,
    ];

    /// Stable identifier (e.g. `"M4-UKW-D"`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Commercial => "Commercial",
            Self::EnigmaI => "I",
            Self::M3 => "M3",
            Self::M4 => "M4",
            Self::M4UkwD => "M4-UKW-D",
            Self::SwissK => "Swiss-K",
            Self::Tripitz => "Tripitz",
        }
    }

    #[must_use]
    pub fn parse(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|model| model.as_str() == label)
    }

    #[must_use]
    pub fn capabilities(self) -> &'static ModelCapabilities {
        match self {
            Self::Commercial => &COMMERCIAL,
            Self::EnigmaI => &ENIGMA_I,
            Self::M3 => &M3,
            Self::M4 => &M4,
            Self::M4UkwD => &M4_UKW_D,
            Self::SwissK => &SWISS_K,
            Self::Tripitz => &TRIPITZ,
        }
    }

    /// Display name (e.g. `"Enigma M3"`).
    #[must_use]
    pub fn name(self) -> &'static str {
        self.capabilities().name
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        self.capabilities().description
    }

    #[must_use]
    pub fn year_introduced(self) -> u16 {
        self.capabilities().year_introduced
    }

    /// Slots in signal order.
    #[must_use]
    pub fn slots(self) -> &'static [RotorSlot] {
        self.capabilities().slots
    }

    #[must_use]
    pub fn has_slot(self, slot: RotorSlot) -> bool {
        self.slots().contains(&slot)
    }

    /// Rotors that fit `slot`: thin rotors for the fourth slot, normal rotors
    /// everywhere else, none for a slot the model lacks.
    #[must_use]
    pub fn allowed_rotors(self, slot: RotorSlot) -> Vec<RotorId> {
        if !self.has_slot(slot) {
            return Vec::new();
        }
        let thin_slot = slot == RotorSlot::Fourth;
        self.capabilities()
            .rotors
            .iter()
            .copied()
            .filter(|rotor| rotor.spec().thin == thin_slot)
            .collect()
    }

    #[must_use]
    pub fn supports_rotor(self, rotor: RotorId, slot: RotorSlot) -> bool {
        self.allowed_rotors(slot).contains(&rotor)
    }

    #[must_use]
    pub fn allowed_reflectors(self) -> &'static [ReflectorId] {
        self.capabilities().reflectors
    }

    #[must_use]
    pub fn supports_reflector(self, reflector: ReflectorId) -> bool {
        self.allowed_reflectors().contains(&reflector)
    }

    /// # Panics
    ///
    /// Never: every capability record lists at least one reflector.
    #[must_use]
    pub fn default_reflector(self) -> ReflectorId {
        self.allowed_reflectors()[0]
    }

    /// Default assignment in signal order: each slot gets the first allowed
    /// rotor not already placed.
    #[must_use]
    pub fn default_rotors(self) -> Vec<(RotorSlot, RotorId)> {
        let mut placed = BTreeSet::new();
        let mut assignment = Vec::with_capacity(self.slots().len());
        for &slot in self.slots() {
            if let Some(rotor) = self
                .allowed_rotors(slot)
                .into_iter()
                .find(|rotor| !placed.contains(rotor))
            {
                placed.insert(rotor);
                assignment.push((slot, rotor));
            }
        }
        assignment
    }

    #[must_use]
    pub fn has_plugboard(self) -> bool {
        self.capabilities().plugboard
    }

    #[must_use]
    pub fn entry_wheel(self) -> EntryWheelWiring {
        self.capabilities().entry_wheel
    }
}

impl core::fmt::Display for ModelId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for ModelId {
    type Err = ConfigurationError;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        Self::parse(label).ok_or_else(|| ConfigurationError::UnknownModel {
            name: label.to_string(),
        })
    }
}
