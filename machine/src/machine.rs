//! `Machine`: assembles the components of one model and runs the cipher.
//!
//! # Lifecycle
//!
//! A machine is built from its model's defaults, optionally reconfigured,
//! then used to encode. Encoding and decoding are the same operation: reset
//! to the starting key and encode the ciphertext to get the plaintext back.
//!
//! # Atomicity
//!
//! Every configuration call validates against a staged copy of the affected
//! components and commits only on success, so a rejected call leaves the
//! machine exactly as it was. Encoding is not rolled back: if a symbol is
//! rejected mid-message, the rotors keep the steps already taken for the
//! symbols before it and the call returns no output.
//!
//! # Signal path
//!
//! ```text
//! plugboard → entry wheel → rotors (Right … Left/Fourth) → reflector
//!           ← entry wheel ← rotors (Fourth/Left … Right) ←
//! ```

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use stecker_kernel::carrier::alphabet::Alphabet;
use stecker_kernel::components::catalog::{ReflectorId, RotorId};
use stecker_kernel::components::entry_wheel::EntryWheel;
use stecker_kernel::components::plugboard::Plugboard;
use stecker_kernel::components::reflector::Reflector;
use stecker_kernel::components::rotor::Rotor;
use stecker_kernel::error::{ConfigurationError, EncodingError};
use tracing::{debug, trace, warn};

use crate::error::MachineError;
use crate::model::{ModelId, RotorSlot};
use crate::settings::{MachineSettings, ReflectorSettings, RotorSettings};
use crate::trace::{Direction, Stage, StageRecord, SymbolTrace};

/// One configured machine instance.
///
/// Not internally synchronized: callers serialize configuration and encode
/// calls on the same instance. Separate instances share nothing.
#[derive(Debug, Clone)]
pub struct Machine {
    model: ModelId,
    alphabet: Arc<Alphabet>,
    plugboard: Plugboard,
    entry_wheel: EntryWheel,
    /// Keyed by slot; iteration order is signal order.
    rotors: BTreeMap<RotorSlot, Rotor>,
    reflector: Reflector,
}

impl Machine {
    // -----------------------------------------------------------------------
    // Construction
    // -----------------------------------------------------------------------

    /// A machine with the model's default rotors and reflector over the
    /// Latin alphabet.
    ///
    /// # Errors
    ///
    /// Does not fail for bundled models; the signature matches
    /// [`Machine::with_alphabet`].
    pub fn new(model: ModelId) -> Result<Self, ConfigurationError> {
        Self::with_alphabet(model, Arc::new(Alphabet::latin()))
    }

    /// A machine over a caller-provided alphabet.
    ///
    /// # Errors
    ///
    /// [`ConfigurationError::IncompatibleAlphabet`] if any bundled wiring the
    /// model uses cannot be expressed over `alphabet`.
    pub fn with_alphabet(model: ModelId, alphabet: Arc<Alphabet>) -> Result<Self, ConfigurationError> {
        let entry_wheel = EntryWheel::new(model.entry_wheel(), &alphabet)?;
        let plugboard = Plugboard::new(Arc::clone(&alphabet), model.has_plugboard());
        let rotors = model
            .default_rotors()
            .into_iter()
            .map(|(slot, id)| Ok((slot, Rotor::new(id, Arc::clone(&alphabet))?)))
            .collect::<Result<BTreeMap<_, _>, ConfigurationError>>()?;
        let reflector = Reflector::new(model.default_reflector(), Arc::clone(&alphabet))?;

        debug!(
            model = model.as_str(),
            alphabet = %alphabet,
            "machine built with model defaults"
        );

        Ok(Self {
            model,
            alphabet,
            plugboard,
            entry_wheel,
            rotors,
            reflector,
        })
    }

    /// Build and fully configure a machine from a key sheet: model defaults,
    /// then rotors, reflector and plugboard.
    ///
    /// # Errors
    ///
    /// The first [`ConfigurationError`] raised along the way.
    pub fn from_settings(settings: &MachineSettings) -> Result<Self, ConfigurationError> {
        let mut machine = Self::new(settings.model)?;
        if !settings.rotors.is_empty() {
            machine.configure_rotors(&settings.rotors)?;
        }
        machine.configure_reflector(&settings.reflector)?;
        if !settings.plugboard.is_empty() {
            machine.configure_plugboard(&settings.plugboard)?;
        }
        Ok(machine)
    }

    // -----------------------------------------------------------------------
    // Rotors
    // -----------------------------------------------------------------------

    /// Replace every rotor at once. The selection must name each slot of the
    /// model exactly once. All rotors come back fresh: wheel at the first
    /// symbol, ring 1.
    ///
    /// # Errors
    ///
    /// - [`ConfigurationError::SlotCountMismatch`]
    /// - [`ConfigurationError::UnsupportedSlot`]
    /// - [`ConfigurationError::RotorNotAllowed`]
    /// - [`ConfigurationError::DuplicateRotor`]
    pub fn select_rotors(
        &mut self,
        selection: &BTreeMap<RotorSlot, RotorId>,
    ) -> Result<(), ConfigurationError> {
        let expected = self.model.slots().len();
        if selection.len() != expected {
            return Err(ConfigurationError::SlotCountMismatch {
                model: self.model.as_str(),
                expected,
                actual: selection.len(),
            });
        }
        for &slot in selection.keys() {
            self.check_slot(slot)?;
        }
        self.check_assignment(selection)?;

        let rotors = selection
            .iter()
            .map(|(&slot, &id)| Ok((slot, Rotor::new(id, Arc::clone(&self.alphabet))?)))
            .collect::<Result<BTreeMap<_, _>, ConfigurationError>>()?;
        self.rotors = rotors;

        debug!(
            model = self.model.as_str(),
            rotors = ?selection,
            "rotors selected"
        );
        Ok(())
    }

    /// Merge partial per-slot settings into the installed rotors and commit
    /// atomically. A slot whose rotor identity changes gets a fresh rotor
    /// before its wheel and ring settings apply; other slots keep their
    /// current state except for the fields given.
    ///
    /// # Errors
    ///
    /// Any slot, compatibility, duplicate, wheel or ring error. Nothing is
    /// committed unless every slot validates.
    pub fn configure_rotors(
        &mut self,
        settings: &BTreeMap<RotorSlot, RotorSettings>,
    ) -> Result<(), ConfigurationError> {
        for &slot in settings.keys() {
            self.check_slot(slot)?;
        }

        let mut assignment: BTreeMap<RotorSlot, RotorId> = self
            .rotors
            .iter()
            .map(|(&slot, rotor)| (slot, rotor.id()))
            .collect();
        for (&slot, wanted) in settings {
            if let Some(id) = wanted.rotor {
                assignment.insert(slot, id);
            }
        }
        self.check_assignment(&assignment)?;

        let mut staged = self.rotors.clone();
        for (&slot, wanted) in settings {
            let mut rotor = match (wanted.rotor, staged.get(&slot)) {
                (Some(id), Some(current)) if current.id() == id => current.clone(),
                (Some(id), _) => Rotor::new(id, Arc::clone(&self.alphabet))?,
                (None, Some(current)) => current.clone(),
                (None, None) => {
                    return Err(ConfigurationError::UnsupportedSlot {
                        model: self.model.as_str(),
                        slot: slot.as_str(),
                    })
                }
            };
            if let Some(wheel) = wanted.wheel {
                rotor.set_wheel_position(wheel)?;
            }
            if let Some(ring) = wanted.ring {
                rotor.set_ring_position(ring)?;
            }
            staged.insert(slot, rotor);
        }
        self.rotors = staged;

        debug!(
            model = self.model.as_str(),
            slots = settings.len(),
            rotors = ?assignment,
            "rotors configured"
        );
        Ok(())
    }

    /// Set one rotor's wheel position, which also becomes its reset baseline.
    ///
    /// # Errors
    ///
    /// [`ConfigurationError::UnsupportedSlot`] or
    /// [`ConfigurationError::InvalidWheelPosition`].
    pub fn set_rotor_wheel(&mut self, slot: RotorSlot, wheel: char) -> Result<(), ConfigurationError> {
        self.rotor_mut(slot)?.set_wheel_position(wheel)?;
        debug!(slot = slot.as_str(), wheel = %wheel, "rotor wheel set");
        Ok(())
    }

    /// Set one rotor's ring setting.
    ///
    /// # Errors
    ///
    /// [`ConfigurationError::UnsupportedSlot`] or
    /// [`ConfigurationError::RingPositionOutOfRange`].
    pub fn set_rotor_ring(&mut self, slot: RotorSlot, ring: usize) -> Result<(), ConfigurationError> {
        self.rotor_mut(slot)?.set_ring_position(ring)?;
        debug!(slot = slot.as_str(), ring, "rotor ring set");
        Ok(())
    }

    fn check_slot(&self, slot: RotorSlot) -> Result<(), ConfigurationError> {
        if self.model.has_slot(slot) {
            Ok(())
        } else {
            Err(ConfigurationError::UnsupportedSlot {
                model: self.model.as_str(),
                slot: slot.as_str(),
            })
        }
    }

    fn check_assignment(
        &self,
        assignment: &BTreeMap<RotorSlot, RotorId>,
    ) -> Result<(), ConfigurationError> {
        let mut seen = BTreeSet::new();
        for (&slot, &rotor) in assignment {
            if !self.model.supports_rotor(rotor, slot) {
                return Err(ConfigurationError::RotorNotAllowed {
                    model: self.model.as_str(),
                    slot: slot.as_str(),
                    rotor,
                });
            }
            if !seen.insert(rotor) {
                return Err(ConfigurationError::DuplicateRotor { rotor });
            }
        }
        Ok(())
    }

    fn rotor_mut(&mut self, slot: RotorSlot) -> Result<&mut Rotor, ConfigurationError> {
        let model = self.model.as_str();
        self.rotors
            .get_mut(&slot)
            .ok_or(ConfigurationError::UnsupportedSlot {
                model,
                slot: slot.as_str(),
            })
    }

    // -----------------------------------------------------------------------
    // Reflector
    // -----------------------------------------------------------------------

    /// Install a fresh reflector. A rewirable reflector starts unwired.
    ///
    /// # Errors
    ///
    /// [`ConfigurationError::ReflectorNotAllowed`] if the model does not
    /// accept `id`.
    pub fn select_reflector(&mut self, id: ReflectorId) -> Result<(), ConfigurationError> {
        self.reflector = self.fresh_reflector(id)?;
        debug!(model = self.model.as_str(), reflector = id.as_str(), "reflector selected");
        Ok(())
    }

    /// # Errors
    ///
    /// [`ConfigurationError::ReflectorNotMovable`] or
    /// [`ConfigurationError::ReflectorPositionNotAllowed`].
    pub fn set_reflector_wheel(&mut self, wheel: char) -> Result<(), ConfigurationError> {
        self.reflector.set_wheel_position(wheel)?;
        debug!(reflector = self.reflector.id().as_str(), wheel = %wheel, "reflector positioned");
        Ok(())
    }

    /// Install a field wiring on a rewirable reflector.
    ///
    /// # Errors
    ///
    /// See [`Reflector::set_wiring`].
    pub fn rewire_reflector(&mut self, pairs: &[(char, char)]) -> Result<(), ConfigurationError> {
        self.reflector.set_wiring(pairs)?;
        debug!(
            reflector = self.reflector.id().as_str(),
            pairs = pairs.len(),
            "reflector rewired"
        );
        Ok(())
    }

    /// Select (or keep), position and rewire the reflector in one atomic step.
    /// Naming the installed reflector keeps its current state.
    ///
    /// # Errors
    ///
    /// Any error of [`Machine::select_reflector`],
    /// [`Machine::set_reflector_wheel`] or [`Machine::rewire_reflector`].
    pub fn configure_reflector(&mut self, settings: &ReflectorSettings) -> Result<(), ConfigurationError> {
        let mut staged = match settings.reflector {
            Some(id) if id != self.reflector.id() => self.fresh_reflector(id)?,
            _ => self.reflector.clone(),
        };
        if let Some(wheel) = settings.wheel {
            staged.set_wheel_position(wheel)?;
        }
        if !settings.wiring.is_empty() {
            staged.set_wiring(&settings.wiring)?;
        }
        self.reflector = staged;

        debug!(
            model = self.model.as_str(),
            reflector = self.reflector.id().as_str(),
            wheel = %self.reflector.wheel_position(),
            wired = self.reflector.is_wired(),
            "reflector configured"
        );
        Ok(())
    }

    fn fresh_reflector(&self, id: ReflectorId) -> Result<Reflector, ConfigurationError> {
        if !self.model.supports_reflector(id) {
            return Err(ConfigurationError::ReflectorNotAllowed {
                model: self.model.as_str(),
                reflector: id,
            });
        }
        Reflector::new(id, Arc::clone(&self.alphabet))
    }

    // -----------------------------------------------------------------------
    // Plugboard
    // -----------------------------------------------------------------------

    /// Replace the plugboard pairing. An empty list clears it.
    ///
    /// # Errors
    ///
    /// [`ConfigurationError::PlugboardUnavailable`] on models without a
    /// plugboard, otherwise any error of [`Plugboard::setup`].
    pub fn configure_plugboard(&mut self, pairs: &[(char, char)]) -> Result<(), ConfigurationError> {
        if !self.model.has_plugboard() {
            return Err(ConfigurationError::PlugboardUnavailable);
        }
        self.plugboard.setup(pairs)?;
        debug!(model = self.model.as_str(), pairs = pairs.len(), "plugboard configured");
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Running
    // -----------------------------------------------------------------------

    /// Return every rotor to its configured wheel baseline. Ring settings,
    /// reflector and plugboard are untouched.
    pub fn reset(&mut self) {
        for rotor in self.rotors.values_mut() {
            rotor.reset();
        }
        debug!(model = self.model.as_str(), "rotors reset");
    }

    /// One keystroke's worth of stepping, without encoding.
    ///
    /// Turnover is decided from the positions before anything moves. The
    /// right rotor always steps. The middle rotor steps when the right rotor
    /// sits on a notch. When the middle rotor itself sits on a notch, it steps
    /// again together with the left rotor (double stepping). The fourth rotor
    /// never steps.
    pub fn step_rotors(&mut self) {
        let turns = |slot: RotorSlot| {
            self.rotors
                .get(&slot)
                .is_some_and(Rotor::should_step_next)
        };
        let middle_steps = turns(RotorSlot::Right);
        let left_steps = turns(RotorSlot::Middle);

        let mut step = |slot: RotorSlot| {
            if let Some(rotor) = self.rotors.get_mut(&slot) {
                rotor.step();
            }
        };
        step(RotorSlot::Right);
        if middle_steps {
            step(RotorSlot::Middle);
        }
        if left_steps {
            step(RotorSlot::Middle);
            step(RotorSlot::Left);
        }
    }

    /// Encode (or decode) `text`.
    ///
    /// # Errors
    ///
    /// - [`ConfigurationError::ReflectorNotWired`] (as [`MachineError::Configuration`])
    ///   before anything moves.
    /// - [`EncodingError::UnsupportedSymbol`] for the first symbol outside the
    ///   alphabet. Rotors stay advanced for the symbols before it and no
    ///   output is returned.
    pub fn encode(&mut self, text: &str) -> Result<String, MachineError> {
        self.ensure_ready()?;
        let mut output = String::with_capacity(text.len());
        for (position, symbol) in text.chars().enumerate() {
            let input = self.accept(symbol, position)?;
            self.step_rotors();
            let out = self.signal_path(input, |_, _, _| {});
            let out = self.alphabet.symbol_at(out);
            trace!(input = %symbol, output = %out, window = %self.window(), "symbol encoded");
            output.push(out);
        }
        Ok(output)
    }

    /// Encode `text` and record every stage for every symbol.
    ///
    /// # Errors
    ///
    /// Same as [`Machine::encode`].
    pub fn trace(&mut self, text: &str) -> Result<Vec<SymbolTrace>, MachineError> {
        self.ensure_ready()?;
        let mut traces = Vec::with_capacity(text.len());
        for (position, symbol) in text.chars().enumerate() {
            let input = self.accept(symbol, position)?;
            self.step_rotors();
            let rotor_positions = self.rotor_positions();
            let mut stages = Vec::with_capacity(2 * self.rotors.len() + 5);
            let out = self.signal_path(input, |stage, direction, index| {
                stages.push(StageRecord {
                    stage,
                    direction,
                    symbol: self.alphabet.symbol_at(index),
                });
            });
            traces.push(SymbolTrace {
                input: symbol,
                rotor_positions,
                stages,
                output: self.alphabet.symbol_at(out),
            });
        }
        Ok(traces)
    }

    fn ensure_ready(&self) -> Result<(), ConfigurationError> {
        if self.reflector.is_wired() {
            Ok(())
        } else {
            Err(ConfigurationError::ReflectorNotWired {
                reflector: self.reflector.id(),
            })
        }
    }

    fn accept(&self, symbol: char, position: usize) -> Result<usize, EncodingError> {
        self.alphabet.index_of(symbol).ok_or_else(|| {
            warn!(
                model = self.model.as_str(),
                symbol = %symbol,
                position,
                window = %self.window(),
                "encode aborted on unsupported symbol; rotors keep the steps already taken"
            );
            EncodingError::UnsupportedSymbol { symbol, position }
        })
    }

    /// Push one symbol index through the full round trip, reporting the
    /// signal after each stage.
    fn signal_path(&self, input: usize, mut record: impl FnMut(Stage, Direction, usize)) -> usize {
        let mut signal = self.plugboard.translate(input);
        record(Stage::Plugboard, Direction::Forward, signal);
        signal = self.entry_wheel.translate_in(signal);
        record(Stage::EntryWheel, Direction::Forward, signal);

        for (&slot, rotor) in &self.rotors {
            signal = rotor.translate_forward(signal);
            record(Stage::Rotor(slot), Direction::Forward, signal);
        }

        signal = self.reflector.translate(signal);
        record(Stage::Reflector, Direction::Forward, signal);

        for (&slot, rotor) in self.rotors.iter().rev() {
            signal = rotor.translate_backward(signal);
            record(Stage::Rotor(slot), Direction::Backward, signal);
        }

        signal = self.entry_wheel.translate_out(signal);
        record(Stage::EntryWheel, Direction::Backward, signal);
        signal = self.plugboard.translate(signal);
        record(Stage::Plugboard, Direction::Backward, signal);
        signal
    }

    /// Rotor windows read left to right, as an operator sees them.
    fn window(&self) -> String {
        self.rotors.values().rev().map(Rotor::wheel_position).collect()
    }

    // -----------------------------------------------------------------------
    // Introspection
    // -----------------------------------------------------------------------

    #[must_use]
    pub fn model(&self) -> ModelId {
        self.model
    }

    #[must_use]
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Installed rotor identities in signal order.
    #[must_use]
    pub fn rotor_ids(&self) -> Vec<(RotorSlot, RotorId)> {
        self.rotors.iter().map(|(&slot, rotor)| (slot, rotor.id())).collect()
    }

    /// Current rotor windows in signal order.
    #[must_use]
    pub fn rotor_positions(&self) -> Vec<(RotorSlot, char)> {
        self.rotors
            .iter()
            .map(|(&slot, rotor)| (slot, rotor.wheel_position()))
            .collect()
    }

    #[must_use]
    pub fn rotor(&self, slot: RotorSlot) -> Option<&Rotor> {
        self.rotors.get(&slot)
    }

    #[must_use]
    pub fn reflector(&self) -> &Reflector {
        &self.reflector
    }

    #[must_use]
    pub fn reflector_id(&self) -> ReflectorId {
        self.reflector.id()
    }

    #[must_use]
    pub fn plugboard_pairs(&self) -> Vec<(char, char)> {
        self.plugboard.pairs()
    }

    /// Snapshot of the current key. Wheel positions are the reset baselines,
    /// not the current windows.
    #[must_use]
    pub fn settings(&self) -> MachineSettings {
        let rotors = self
            .rotors
            .iter()
            .map(|(&slot, rotor)| {
                let settings = RotorSettings::new()
                    .with_rotor(rotor.id())
                    .with_wheel(rotor.initial_wheel_position())
                    .with_ring(rotor.ring_position());
                (slot, settings)
            })
            .collect();

        let mut reflector = ReflectorSettings::new()
            .with_reflector(self.reflector.id())
            .with_wiring(self.reflector.custom_pairs());
        if self.reflector.is_movable() {
            reflector = reflector.with_wheel(self.reflector.wheel_position());
        }

        MachineSettings {
            model: self.model,
            rotors,
            reflector,
            plugboard: self.plugboard.pairs(),
        }
    }
}
