//! Core types shared by photoemission-spectroscopy analyser tooling.

pub mod energy;
pub mod region;

pub use energy::EnergyMode;
pub use region::{AcquisitionMode, SesRegion};

/// Energy scalar in electronvolts.
pub type Ev = f64;
