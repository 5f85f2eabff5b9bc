//! Per-symbol diagnostic trace records.
//!
//! A trace is plain structured data. Rendering it for humans is left to the
//! caller; [`SymbolTrace::to_json`] and [`trace_digest`] exist so traces can
//! be stored and compared.

use stecker_kernel::proof::canon::{canonical_json_bytes, CanonError};
use stecker_kernel::proof::hash::{canonical_hash, ContentHash};
use stecker_kernel::proof::hash_domain::HashDomain;

use crate::model::RotorSlot;

/// Which half of the round trip a stage belongs to. The reflector closes the
/// forward half.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Forward => "forward",
            Self::Backward => "backward",
        }
    }
}

/// A component the signal passes through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Plugboard,
    EntryWheel,
    Rotor(RotorSlot),
    Reflector,
}

impl Stage {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Plugboard => "plugboard",
            Self::EntryWheel => "entry_wheel",
            Self::Rotor(_) => "rotor",
            Self::Reflector => "reflector",
        }
    }
}

/// The signal as it leaves one stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageRecord {
    pub stage: Stage,
    pub direction: Direction,
    pub symbol: char,
}

/// Everything that happened to one input symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolTrace {
    pub input: char,
    /// Rotor windows after stepping, i.e. the positions used for this symbol,
    /// in signal order.
    pub rotor_positions: Vec<(RotorSlot, char)>,
    pub stages: Vec<StageRecord>,
    pub output: char,
}

impl SymbolTrace {
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        let positions: serde_json::Map<String, serde_json::Value> = self
            .rotor_positions
            .iter()
            .map(|(slot, symbol)| (slot.as_str().to_string(), symbol.to_string().into()))
            .collect();

        let stages: Vec<serde_json::Value> = self
            .stages
            .iter()
            .map(|record| {
                let mut entry = serde_json::json!({
                    "stage": record.stage.as_str(),
                    "direction": record.direction.as_str(),
                    "symbol": record.symbol.to_string(),
                });
                if let Stage::Rotor(slot) = record.stage {
                    entry["slot"] = slot.as_str().into();
                }
                entry
            })
            .collect();

        serde_json::json!({
            "input": self.input.to_string(),
            "rotor_positions": positions,
            "stages": stages,
            "output": self.output.to_string(),
        })
    }
}

/// Commit a whole trace: SHA-256 over the canonical JSON array of records.
///
/// # Errors
///
/// Propagates [`CanonError`]; trace JSON holds only strings, so this does
/// not fail in practice.
pub fn trace_digest(traces: &[SymbolTrace]) -> Result<ContentHash, CanonError> {
    let value = serde_json::Value::Array(traces.iter().map(SymbolTrace::to_json).collect());
    let bytes = canonical_json_bytes(&value)?;
    Ok(canonical_hash(HashDomain::SymbolTrace, &bytes))
}
