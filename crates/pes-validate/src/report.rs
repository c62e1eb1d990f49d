use chrono::{DateTime, Utc};
use pes_core::{Ev, SesRegion};
use serde::Serialize;

use crate::{
    excitation::ExcitationEnergySource,
    validator::{RegionValidator, ValidationFailure},
};

/// Verdict for one region in a sequence.
#[derive(Debug, Clone, Serialize)]
pub struct RegionVerdict {
    name: String,
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    failure: Option<ValidationFailure>,
}

impl RegionVerdict {
    /// Name of the region this verdict belongs to.
    pub fn name(&self) -> &str {
        &self.name
    }
    /// Whether the region passed validation.
    pub fn is_valid(&self) -> bool {
        self.valid
    }
    /// Failure reason, when invalid.
    pub fn failure(&self) -> Option<&ValidationFailure> {
        self.failure.as_ref()
    }
}

/// Whole-sequence validation results.
///
/// Invalid regions are collected, not fail-fast: every region gets a
/// verdict so the operator sees all problems at once.
#[derive(Debug, Clone, Serialize)]
pub struct SequenceReport {
    generated_at: DateTime<Utc>,
    element_set: String,
    excitation_energy: Ev,
    verdicts: Vec<RegionVerdict>,
}

impl SequenceReport {
    /// When the report was produced.
    pub fn generated_at(&self) -> DateTime<Utc> {
        self.generated_at
    }
    /// Element set the sequence was validated under.
    pub fn element_set(&self) -> &str {
        &self.element_set
    }
    /// Excitation energy (eV) resolved for this validation pass.
    pub fn excitation_energy(&self) -> Ev {
        self.excitation_energy
    }
    /// Per-region verdicts, in sequence order.
    pub fn verdicts(&self) -> &[RegionVerdict] {
        &self.verdicts
    }
    /// Whether every region passed.
    pub fn all_valid(&self) -> bool {
        self.verdicts.iter().all(RegionVerdict::is_valid)
    }
    /// Names of the regions that failed, in sequence order.
    pub fn invalid_names(&self) -> Vec<&str> {
        self.verdicts
            .iter()
            .filter(|v| !v.valid)
            .map(RegionVerdict::name)
            .collect()
    }
}

impl RegionValidator {
    /// Validates every region in a sequence against one element set.
    ///
    /// The excitation energy is resolved from the source once per call,
    /// at validation time, and recorded in the report so binding-mode
    /// verdicts can be traced back to the beamline energy they were
    /// computed at.
    pub fn validate_sequence(
        &self,
        regions: &[SesRegion],
        element_set: &str,
        source: &dyn ExcitationEnergySource,
    ) -> SequenceReport {
        let excitation_energy = source.excitation_energy();
        let verdicts: Vec<RegionVerdict> = regions
            .iter()
            .map(|region| {
                let failure = self
                    .check_region(region, element_set, excitation_energy)
                    .err();
                RegionVerdict {
                    name: region.name.clone(),
                    valid: failure.is_none(),
                    failure,
                }
            })
            .collect();
        let invalid = verdicts.iter().filter(|v| !v.valid).count();
        if invalid > 0 {
            tracing::warn!(
                invalid,
                total = verdicts.len(),
                element_set,
                excitation_energy,
                "sequence contains invalid regions"
            );
        } else {
            tracing::debug!(total = verdicts.len(), "all regions valid");
        }
        SequenceReport {
            generated_at: Utc::now(),
            element_set: element_set.to_string(),
            excitation_energy,
            verdicts,
        }
    }
}
