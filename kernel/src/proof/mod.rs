//! Proof module: canonical JSON and domain-separated hashing.
//!
//! Used by the machine crate to commit key sheets and traces. Depends on
//! nothing internal.

pub mod canon;
pub mod hash;
pub mod hash_domain;
