//! Decoding is encoding from the same starting key.

use lock_tests::key_sheets::{machine, pairs, rotor, three_rotor_sheet};
use stecker_kernel::components::catalog::{ReflectorId, RotorId};
use stecker_machine::{MachineSettings, ModelId, ReflectorSettings};

const MESSAGE: &str = "WEATHERQQREPORTQQSIXQQHUNDREDQQHOURSQQNOQQCONTACTQQWITHQQTHEQQENEMY";

fn round_trip(settings: &MachineSettings) {
    let mut sender = machine(settings);
    let mut receiver = machine(settings);
    let ciphertext = sender.encode(MESSAGE).unwrap();
    assert_ne!(ciphertext, MESSAGE);
    for (plain, cipher) in MESSAGE.chars().zip(ciphertext.chars()) {
        assert_ne!(plain, cipher, "a symbol encoded to itself");
    }
    assert_eq!(receiver.encode(&ciphertext).unwrap(), MESSAGE);
}

#[test]
fn m3_with_plugboard_round_trips() {
    let settings = three_rotor_sheet(
        ModelId::M3,
        rotor(RotorId::VI, 'B', 12),
        rotor(RotorId::I, 'T', 1),
        rotor(RotorId::V, 'H', 5),
    )
    .with_reflector(ReflectorSettings::new().with_reflector(ReflectorId::C))
    .with_plugboard(&pairs("AB CD EF GH IJ KL MN OP"));
    round_trip(&settings);
}

#[test]
fn field_rewired_reflector_round_trips() {
    let settings = three_rotor_sheet(
        ModelId::M4UkwD,
        rotor(RotorId::II, 'Q', 11),
        rotor(RotorId::VIII, 'N', 11),
        rotor(RotorId::I, 'G', 9),
    )
    .with_reflector(
        ReflectorSettings::new()
            .with_reflector(ReflectorId::D)
            .with_wiring(&pairs("IQ HG CL DA NK FX BZ MW EV OR PU TS")),
    )
    .with_plugboard(&pairs("ZY WV JF ES LO"));
    round_trip(&settings);
}

#[test]
fn every_model_round_trips_with_defaults() {
    for &model in ModelId::ALL {
        let mut settings = MachineSettings::new(model);
        if model == ModelId::M4UkwD {
            settings = settings.with_reflector(
                ReflectorSettings::new()
                    .with_wiring(&pairs("AQ BG CK DI EL FX HZ MW NV OT PU RS")),
            );
        }
        round_trip(&settings);
    }
}
