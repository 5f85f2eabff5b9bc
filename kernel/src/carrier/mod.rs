//! Carrier module: the alphabet and the permutation primitive.
//!
//! This is the foundational layer. No other kernel module is imported here.

pub mod alphabet;
pub mod permutation;
