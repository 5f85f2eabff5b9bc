//! Typed domain separators for canonical hashing.
//!
//! Every digest selects a domain via [`HashDomain`], so a key-sheet digest can
//! never collide with a trace digest over the same bytes.

/// Declares `HashDomain`, `as_bytes()`, `ALL` and `Display` from one list.
macro_rules! define_hash_domains {
    (
        $(
            $(#[$meta:meta])*
            $variant:ident => $bytes:expr
        ),+ $(,)?
    ) => {
        /// Domain separator for [`super::hash::canonical_hash`].
        ///
        /// Each variant maps to a unique, null-terminated prefix fed to
        /// SHA-256 ahead of the payload.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum HashDomain {
            $(
                $(#[$meta])*
                $variant,
            )+
        }

        impl HashDomain {
            /// The raw prefix bytes.
            #[must_use]
            pub const fn as_bytes(&self) -> &'static [u8] {
                match self {
                    $( Self::$variant => $bytes, )+
                }
            }

            /// All domains in declaration order.
            pub const ALL: &[HashDomain] = &[
                $( Self::$variant, )+
            ];
        }

        impl core::fmt::Display for HashDomain {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                match self {
                    $( Self::$variant => write!(f, stringify!($variant)), )+
                }
            }
        }
    };
}

define_hash_domains! {
    /// Canonical JSON of a machine key sheet.
    MachineSettings => b"STECKER::MACHINE_SETTINGS::V1\0",

    /// Canonical JSON of a per-symbol diagnostic trace.
    SymbolTrace => b"STECKER::SYMBOL_TRACE::V1\0",

    /// Ciphertext produced by the cross-process fixture.
    Ciphertext => b"STECKER::CIPHERTEXT::V1\0",
}
