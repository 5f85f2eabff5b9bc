//! Bundled historical wiring tables.
//!
//! This module is the single authority for rotor, reflector and entry-wheel
//! data. Each identifier enum, its `as_str()`, `parse()`, `ALL` and `spec()`
//! are generated from one macro invocation, so the name list and the data
//! cannot diverge.
//!
//! Wirings are written over the Latin alphabet: the symbol at position `i`
//! is the contact that input `i` is wired to. Notches are listed as the
//! wheel-position symbols at which the rotor drives its left neighbor.

use crate::error::ConfigurationError;

/// Static description of one rotor type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotorSpec {
    pub wiring: &'static str,
    /// Wheel positions that carry a turnover notch. Empty for thin rotors.
    pub notches: &'static str,
    /// Thin rotors fit only the fourth slot of four-rotor models.
    pub thin: bool,
}

/// Field-rewiring conventions of a rewirable reflector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RewiringSpec {
    /// Contact labels in contact order. Caller pairs are written in this
    /// labeling: the label at position `i` names contact `i`.
    pub contacts: &'static str,
    /// The permanently wired pair, in contact labels.
    pub fixed_pair: (char, char),
}

/// Static description of one reflector type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReflectorSpec {
    /// Default wiring. For a rewirable reflector this is only a placeholder
    /// until the field wiring is installed.
    pub wiring: &'static str,
    pub movable: bool,
    pub thin: bool,
    pub rewiring: Option<RewiringSpec>,
}

/// Declares an identifier enum with its labels, lookup and static data.
macro_rules! define_catalog {
    (
        $(#[$enum_meta:meta])*
        pub enum $name:ident -> $spec:ident, unknown: $unknown:ident {
            $(
                $(#[$meta:meta])*
                $variant:ident = $label:literal => $value:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum $name {
            $(
                $(#[$meta])*
                $variant,
            )+
        }

        impl $name {
            /// Every identifier in declaration order.
            pub const ALL: &[$name] = &[
                $( Self::$variant, )+
            ];

            /// The historical label (e.g. `"VIII"`, `"I-SK"`).
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $( Self::$variant => $label, )+
                }
            }

            /// Look up an identifier by its label. Exact match only.
            #[must_use]
            pub fn parse(label: &str) -> Option<Self> {
                match label {
                    $( $label => Some(Self::$variant), )+
                    _ => None,
                }
            }

            /// Bundled static data.
            #[must_use]
            pub const fn spec(self) -> $spec {
                match self {
                    $( Self::$variant => $value, )+
                }
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl core::str::FromStr for $name {
            type Err = ConfigurationError;

            fn from_str(label: &str) -> Result<Self, Self::Err> {
                Self::parse(label).ok_or_else(|| ConfigurationError::$unknown {
                    name: label.to_string(),
                })
            }
        }
    };
}

const fn rotor(wiring: &'static str, notches: &'static str) -> RotorSpec {
    RotorSpec {
        wiring,
        notches,
        thin: false,
    }
}

const fn thin_rotor(wiring: &'static str) -> RotorSpec {
    RotorSpec {
        wiring,
        notches: "",
        thin: true,
    }
}

const fn reflector(wiring: &'static str) -> ReflectorSpec {
    ReflectorSpec {
        wiring,
        movable: false,
        thin: false,
        rewiring: None,
    }
}

define_catalog! {
    /// Rotor types across every bundled model.
    #[allow(clippy::upper_case_acronyms)]
    pub enum RotorId -> RotorSpec, unknown: UnknownRotor {
        // -------------------------------------------------------------------
        // Commercial K
        // -------------------------------------------------------------------
        IK = "I-K" => rotor("LPGSZMHAEOQKVXRFYBUTNICJDW", "Y"),
        IIK = "II-K" => rotor("SLVGBTFXJQOHEWIRZYAMKPCNDU", "E"),
        IIIK = "III-K" => rotor("CJGDPSHKTURAWZXFMYNQOBVLIE", "N"),

        // -------------------------------------------------------------------
        // Army / Navy
        // -------------------------------------------------------------------
        I = "I" => rotor("EKMFLGDQVZNTOWYHXUSPAIBRCJ", "Q"),
        II = "II" => rotor("AJDKSIRUXBLHWTMCQGZNPYFVOE", "E"),
        III = "III" => rotor("BDFHJLCPRTXVZNYEIWGAKMUSQO", "V"),
        IV = "IV" => rotor("ESOVPZJAYQUIRHXLNFTGKDCMWB", "J"),
        V = "V" => rotor("VZBRGITYUPSDNHLXAWMJQOFECK", "Z"),
        VI = "VI" => rotor("JPGVOUMFYQBENHZRDKASXLICTW", "ZM"),
        VII = "VII" => rotor("NZJHGRCXMYSWBOUFAIVLPEKQDT", "ZM"),
        VIII = "VIII" => rotor("FKQHTLXOCBJSPDZRAMEWNIUYGV", "ZM"),

        /// Thin, fourth slot only.
        Beta = "beta" => thin_rotor("LEYJVCNIXWPBQMDRTAKZGFUHOS"),
        /// Thin, fourth slot only.
        Gamma = "gamma" => thin_rotor("FSOKANUERHMBTIYCWLQPZXVGJD"),

        // -------------------------------------------------------------------
        // Swiss-K
        // -------------------------------------------------------------------
        ISK = "I-SK" => rotor("PEZUOHXSCVFMTBGLRINQJWAYDK", "Y"),
        IISK = "II-SK" => rotor("ZOUESYDKFWPCIQXHMVBLGNJRAT", "E"),
        IIISK = "III-SK" => rotor("EHRVXGAOBQUSIMZFLYNWKTPDJC", "N"),

        // -------------------------------------------------------------------
        // Tripitz
        // -------------------------------------------------------------------
        IT = "I-T" => rotor("KPTYUELOCVGRFQDANJMBSWHZXI", "WZEKQ"),
        IIT = "II-T" => rotor("UPHZLWEQMTDJXCAKSOIGVBYFNR", "WZFLR"),
        IIIT = "III-T" => rotor("QUDLYRFEKONVZAXWHMGPJBSICT", "WZEKQ"),
        IVT = "IV-T" => rotor("CIWTBKXNRESPFLYDAGVHQUOJZM", "WZFLR"),
        VT = "V-T" => rotor("UAXGISNJBVERDYLFZWTPCKOHMQ", "YCFKR"),
        VIT = "VI-T" => rotor("XFUZGALVHCNYSEWQTDMRBKPIOJ", "XEIMQ"),
        VIIT = "VII-T" => rotor("BJVFTXPLNAYOZIKWGDQERUCHSM", "YCFKR"),
        VIIIT = "VIII-T" => rotor("YMTPNZHWKODAJXELUQVGCBISFR", "XEIMQ"),
    }
}

define_catalog! {
    /// Reflector (Umkehrwalze) types across every bundled model.
    pub enum ReflectorId -> ReflectorSpec, unknown: UnknownReflector {
        /// Movable to any position.
        K = "K" => ReflectorSpec {
            wiring: "IMETCGFRAYSQBZXWLHKDVUPOJN",
            movable: true,
            thin: false,
            rewiring: None,
        },
        A = "A" => reflector("EJMZALYXVBWFCRQUONTSPIKHGD"),
        B = "B" => reflector("YRUHQSLDPXNGOKMIEBFZCWVJAT"),
        C = "C" => reflector("FVPJIAOYEDRZXWGCTKUQSBNMHL"),
        BThin = "BThin" => ReflectorSpec {
            wiring: "ENKQAUYWJICOPBLMDXZVFTHRGS",
            movable: false,
            thin: true,
            rewiring: None,
        },
        CThin = "CThin" => ReflectorSpec {
            wiring: "RDOBJNTKVEHMLFCWZAXGYIPSUQ",
            movable: false,
            thin: true,
            rewiring: None,
        },
        /// Field-rewirable; must be wired before use.
        D = "D" => ReflectorSpec {
            wiring: "FOWULAQYSRTEZVBXGJIKDNCPHM",
            movable: false,
            thin: false,
            rewiring: Some(RewiringSpec {
                contacts: "AJZXWVUTSRQPONYMLKIHGFEDCB",
                fixed_pair: ('J', 'Y'),
            }),
        },
        T = "T" => reflector("GEKPBTAUMOCNILJDXZYFHWVQSR"),
    }
}

/// Entry wheel (Eintrittswalze) variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryWheelWiring {
    /// Straight-through: keyboard order equals alphabet order.
    Alphabetical,
    /// Commercial keyboard order.
    Qwertz,
    Tripitz,
}

impl EntryWheelWiring {
    pub const ALL: &[EntryWheelWiring] = &[Self::Alphabetical, Self::Qwertz, Self::Tripitz];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Alphabetical => "ABCDEF",
            Self::Qwertz => "QWERTZ",
            Self::Tripitz => "Tripitz",
        }
    }

    /// Contact order: the symbol at position `i` is wired to internal contact `i`.
    #[must_use]
    pub const fn wiring(self) -> &'static str {
        match self {
            Self::Alphabetical => "ABCDEFGHIJKLMNOPQRSTUVWXYZ",
            Self::Qwertz => "QWERTZUIOASDFGHJKPYXCVBNML",
            Self::Tripitz => "KZROUQHYAIGBLWVSTDXFPNMCJE",
        }
    }
}

impl core::fmt::Display for EntryWheelWiring {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
