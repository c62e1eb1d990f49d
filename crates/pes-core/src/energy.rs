use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::Ev;

/// Axis convention for a region's energy window.
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
pub enum EnergyMode {
    /// Window expressed directly as electron kinetic energy.
    #[default]
    Kinetic,
    /// Window expressed as `excitation - kinetic`. The axis runs opposite
    /// to kinetic energy, so conversion swaps the bounds.
    Binding,
}

impl EnergyMode {
    /// Converts a `[low, high]` window in this mode to a kinetic-energy
    /// window at the given excitation energy.
    ///
    /// A binding window maps to `[excitation - high, excitation - low]`;
    /// a kinetic window passes through unchanged.
    ///
    /// The binding transform is its own inverse, so the same call maps a
    /// kinetic window back into binding mode.
    pub fn kinetic_window(&self, low: Ev, high: Ev, excitation: Ev) -> (Ev, Ev) {
        match self {
            Self::Kinetic => (low, high),
            Self::Binding => (excitation - high, excitation - low),
        }
    }
}
