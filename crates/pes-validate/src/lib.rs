//! Acquisition-region validation for electron-analyser sequences.
//!
//! Given a loaded lens table, [`RegionValidator`] decides whether each
//! requested region's energy window is physically realizable by the
//! analyser at the current excitation energy. Validation is a pure
//! function of its inputs: the table is immutable after load and every
//! failure cause collapses to a `false` verdict, so batch callers can
//! validate a whole sequence without per-region error handling.

pub mod cli;
pub mod excitation;
pub mod report;
pub mod validator;

pub use excitation::{ExcitationEnergySource, FixedExcitationEnergy};
pub use report::{RegionVerdict, SequenceReport};
pub use validator::{RegionValidator, ValidationFailure};

/// Re-exports for the most common types.
pub mod prelude {
    pub use crate::{
        excitation::{ExcitationEnergySource, FixedExcitationEnergy},
        report::{RegionVerdict, SequenceReport},
        validator::{RegionValidator, ValidationFailure},
    };
    pub use pes_core::{EnergyMode, Ev, SesRegion};
    pub use pes_lenstable::EnergyRangeTable;
}
