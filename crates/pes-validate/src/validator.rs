use std::sync::Arc;

use pes_core::{Ev, SesRegion};
use pes_lenstable::EnergyRangeTable;
use serde::Serialize;
use thiserror::Error;

/// Why a region failed validation.
///
/// Surfaced through [`RegionValidator::check_region`] and the tracing
/// log; it never alters the boolean contract of
/// [`RegionValidator::is_valid_region`].
#[derive(Error, Debug, Clone, PartialEq, Serialize)]
pub enum ValidationFailure {
    /// The region's lens mode has no calibration for this element set.
    #[error("lens mode {lens_mode:?} not known for element set {element_set:?}")]
    UnknownLensMode {
        /// Requested lens mode.
        lens_mode: String,
        /// Element set the sequence runs under.
        element_set: String,
    },
    /// The region's pass energy has no exactly-matching calibration
    /// entry. Uncalibrated pass energies are rejected, not interpolated.
    #[error("pass energy {pass_energy} eV not calibrated for lens mode {lens_mode:?}")]
    UnknownPassEnergy {
        /// Requested pass energy in eV.
        pass_energy: Ev,
        /// Requested lens mode.
        lens_mode: String,
    },
    /// The requested window is inverted (low above high) in its own
    /// energy mode.
    #[error("malformed energy window: low {low} eV exceeds high {high} eV")]
    MalformedWindow {
        /// Requested lower edge.
        low: Ev,
        /// Requested upper edge.
        high: Ev,
    },
    /// The converted kinetic window is not entirely contained in the
    /// achievable range.
    #[error(
        "kinetic window [{low}, {high}] eV outside achievable range [{achievable_low}, {achievable_high}] eV"
    )]
    WindowOutOfRange {
        /// Converted kinetic lower edge.
        low: Ev,
        /// Converted kinetic upper edge.
        high: Ev,
        /// Achievable lower bound from the lens table.
        achievable_low: Ev,
        /// Achievable upper bound from the lens table.
        achievable_high: Ev,
    },
}

/// Stateless feasibility check for acquisition regions against one
/// analyser lens table.
///
/// The table is injected at construction and never mutated afterwards;
/// clones share it, and calls are safe from any thread.
#[derive(Debug, Clone)]
pub struct RegionValidator {
    table: Arc<EnergyRangeTable>,
}

impl RegionValidator {
    /// Binds a validator to a loaded lens table.
    pub fn new(table: EnergyRangeTable) -> Self {
        Self {
            table: Arc::new(table),
        }
    }

    /// The lens table this validator checks against.
    pub fn table(&self) -> &EnergyRangeTable {
        &self.table
    }

    /// Boolean verdict used by batch callers.
    ///
    /// Total over well-formed regions: every failure cause collapses to
    /// `false`, with the reason logged at debug level.
    pub fn is_valid_region(
        &self,
        region: &SesRegion,
        element_set: &str,
        excitation_energy: Ev,
    ) -> bool {
        match self.check_region(region, element_set, excitation_energy) {
            Ok(()) => true,
            Err(failure) => {
                tracing::debug!(
                    region = %region.name,
                    reason = %failure,
                    "region failed validation"
                );
                false
            }
        }
    }

    /// Full verdict carrying the failure reason.
    ///
    /// The region's window is converted to kinetic energy (binding mode
    /// inverts against the excitation energy) and must lie entirely,
    /// bounds inclusive, within the calibrated achievable range for its
    /// lens mode and pass energy.
    pub fn check_region(
        &self,
        region: &SesRegion,
        element_set: &str,
        excitation_energy: Ev,
    ) -> Result<(), ValidationFailure> {
        if !self.table.has_lens_mode(&region.lens_mode, element_set) {
            return Err(ValidationFailure::UnknownLensMode {
                lens_mode: region.lens_mode.clone(),
                element_set: element_set.to_string(),
            });
        }
        if region.low_energy > region.high_energy {
            return Err(ValidationFailure::MalformedWindow {
                low: region.low_energy,
                high: region.high_energy,
            });
        }
        // Lens mode is known, so the only remaining lookup failure is an
        // uncalibrated pass energy.
        let achievable = self
            .table
            .energy_range(&region.lens_mode, element_set, region.pass_energy)
            .map_err(|_| ValidationFailure::UnknownPassEnergy {
                pass_energy: region.pass_energy,
                lens_mode: region.lens_mode.clone(),
            })?;
        let (kinetic_low, kinetic_high) = region.kinetic_window(excitation_energy);
        if !achievable.contains_window(kinetic_low, kinetic_high) {
            return Err(ValidationFailure::WindowOutOfRange {
                low: kinetic_low,
                high: kinetic_high,
                achievable_low: achievable.low(),
                achievable_high: achievable.high(),
            });
        }
        Ok(())
    }
}
