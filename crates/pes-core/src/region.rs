use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::{EnergyMode, Ev};

/// Analyser sweep strategy for a region.
#[derive(
    Debug,
    Copy,
    Clone,
    Default,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
pub enum AcquisitionMode {
    /// Sweep the energy window across the detector.
    #[default]
    Swept,
    /// Hold the analyser at a single kinetic energy.
    Fixed,
}

/// One requested acquisition window from an analyser sequence.
///
/// Read-only input to validation; the energy window is expressed in the
/// units of [`SesRegion::energy_mode`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SesRegion {
    /// Display name, unique within a sequence.
    pub name: String,
    /// Analyser lens-mode preset, e.g. `"Angular56"`.
    pub lens_mode: String,
    /// Discrete analyser pass energy in eV.
    pub pass_energy: Ev,
    /// Axis convention for `low_energy` / `high_energy`.
    pub energy_mode: EnergyMode,
    /// Lower edge of the requested window, in `energy_mode` units.
    pub low_energy: Ev,
    /// Upper edge of the requested window, in `energy_mode` units.
    pub high_energy: Ev,
    /// Sweep strategy; carried through sequence files, not validated.
    pub acquisition_mode: AcquisitionMode,
}

impl SesRegion {
    /// Creates a region with the instrument defaults (Transmission lens,
    /// 5 eV pass energy, kinetic mode, swept acquisition).
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            lens_mode: "Transmission".to_string(),
            pass_energy: 5.0,
            energy_mode: EnergyMode::default(),
            low_energy: 0.0,
            high_energy: 0.0,
            acquisition_mode: AcquisitionMode::default(),
        }
    }

    /// Sets the lens mode.
    pub fn with_lens_mode(mut self, lens_mode: impl Into<String>) -> Self {
        self.lens_mode = lens_mode.into();
        self
    }

    /// Sets the pass energy in eV.
    pub fn with_pass_energy(mut self, pass_energy: Ev) -> Self {
        self.pass_energy = pass_energy;
        self
    }

    /// Sets the energy window in the units of the current energy mode.
    pub fn with_energy_window(mut self, low: Ev, high: Ev) -> Self {
        self.low_energy = low;
        self.high_energy = high;
        self
    }

    /// Sets the energy-axis convention for the window.
    pub fn with_energy_mode(mut self, energy_mode: EnergyMode) -> Self {
        self.energy_mode = energy_mode;
        self
    }

    /// Sets the sweep strategy.
    pub fn with_acquisition_mode(mut self, acquisition_mode: AcquisitionMode) -> Self {
        self.acquisition_mode = acquisition_mode;
        self
    }

    /// Requested window converted to kinetic energy at the given
    /// excitation energy.
    pub fn kinetic_window(&self, excitation: Ev) -> (Ev, Ev) {
        self.energy_mode
            .kinetic_window(self.low_energy, self.high_energy, excitation)
    }
}
