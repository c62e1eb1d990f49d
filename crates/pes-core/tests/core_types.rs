use std::str::FromStr;

use pes_core::{AcquisitionMode, EnergyMode, SesRegion};
use strum::IntoEnumIterator;

#[test]
fn kinetic_window_passes_through_unchanged() {
    assert_eq!(
        EnergyMode::Kinetic.kinetic_window(8.0, 20.0, 1000.0),
        (8.0, 20.0)
    );
}

#[test]
fn binding_window_inverts_against_excitation() {
    // Binding [800, 990] at 1000 eV excitation is kinetic [10, 200].
    assert_eq!(
        EnergyMode::Binding.kinetic_window(800.0, 990.0, 1000.0),
        (10.0, 200.0)
    );
}

#[test]
fn binding_conversion_is_an_involution() {
    let (k_low, k_high) = EnergyMode::Binding.kinetic_window(84.0, 91.5, 700.0);
    assert_eq!(EnergyMode::Binding.kinetic_window(k_low, k_high, 700.0), (84.0, 91.5));
}

#[test]
fn energy_mode_parses_case_insensitively() {
    assert_eq!(EnergyMode::from_str("Kinetic").unwrap(), EnergyMode::Kinetic);
    assert_eq!(EnergyMode::from_str("binding").unwrap(), EnergyMode::Binding);
    assert!(EnergyMode::from_str("Momentum").is_err());
}

#[test]
fn acquisition_mode_round_trips_through_display() {
    for mode in AcquisitionMode::iter() {
        assert_eq!(AcquisitionMode::from_str(&mode.to_string()).unwrap(), mode);
    }
}

#[test]
fn region_builder_applies_fields_over_defaults() {
    let region = SesRegion::new("Kinetic_valid1")
        .with_lens_mode("Angular56")
        .with_pass_energy(25.0)
        .with_energy_window(8.0, 20.0);
    assert_eq!(region.name, "Kinetic_valid1");
    assert_eq!(region.lens_mode, "Angular56");
    assert_eq!(region.pass_energy, 25.0);
    assert_eq!(region.energy_mode, EnergyMode::Kinetic);
    assert_eq!(region.acquisition_mode, AcquisitionMode::Swept);
}

#[test]
fn region_kinetic_window_respects_energy_mode() {
    let region = SesRegion::new("Binding_valid1")
        .with_energy_mode(EnergyMode::Binding)
        .with_energy_window(800.0, 990.0);
    assert_eq!(region.kinetic_window(1000.0), (10.0, 200.0));
}

#[test]
fn region_serde_round_trip() {
    let region = SesRegion::new("r1")
        .with_lens_mode("Angular45")
        .with_pass_energy(50.0)
        .with_energy_mode(EnergyMode::Binding)
        .with_energy_window(84.0, 91.5)
        .with_acquisition_mode(AcquisitionMode::Fixed);
    let json = serde_json::to_string(&region).unwrap();
    let decoded: SesRegion = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, region);
}
