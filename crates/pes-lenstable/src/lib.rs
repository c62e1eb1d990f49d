//! Analyser lens-table loader and query engine.
//!
//! A lens table is the manufacturer-supplied calibration file describing
//! which kinetic-energy window an electron analyser can record for each
//! `(lensMode, elementSet, passEnergy)` configuration. The table is
//! loaded once, is immutable afterwards, and answers exact-match lookups
//! only: pass energies are discrete instrument presets, so a value
//! absent from the table is rejected rather than interpolated.

pub mod models;
pub mod table;

pub use models::{CalibrationEntry, EnergyRange};
pub use table::EnergyRangeTable;

use thiserror::Error;

/// Convenience alias for results returned from lens-table operations.
pub type LensTableResult<T> = Result<T, LensTableError>;

/// Errors raised while loading or querying a lens table.
#[derive(Error, Debug)]
pub enum LensTableError {
    /// The calibration file could not be opened or read.
    #[error("{0}")]
    IoError(#[from] std::io::Error),
    /// A row did not carry the five required columns.
    #[error(
        "line {line}: expected 5 columns (elementSet lensMode passEnergy low high), found {found}"
    )]
    ColumnCountMismatch {
        /// 1-based line number in the calibration file.
        line: usize,
        /// Number of whitespace-separated fields actually present.
        found: usize,
    },
    /// A numeric field failed to parse.
    #[error("line {line}: could not parse {column} value {text:?}")]
    ParseError {
        /// 1-based line number in the calibration file.
        line: usize,
        /// Column the bad value belonged to.
        column: &'static str,
        /// Raw field text.
        text: String,
    },
    /// A row's energy bounds were inverted.
    #[error("line {line}: low bound {low} eV exceeds high bound {high} eV")]
    InvalidBounds {
        /// 1-based line number in the calibration file.
        line: usize,
        /// Offending low bound.
        low: f64,
        /// Offending high bound.
        high: f64,
    },
    /// The file parsed cleanly but contained no calibration rows.
    #[error("lens table contains no calibration entries")]
    EmptyTable,
    /// No entries exist for the requested lens mode / element set pair.
    #[error("lens mode {lens_mode:?} not known for element set {element_set:?}")]
    LensModeNotFound {
        /// Requested lens mode.
        lens_mode: String,
        /// Requested element set.
        element_set: String,
    },
    /// The lens mode is known but the pass energy is not calibrated.
    #[error(
        "pass energy {pass_energy} eV not calibrated for lens mode {lens_mode:?} (element set {element_set:?})"
    )]
    PassEnergyNotFound {
        /// Requested pass energy in eV.
        pass_energy: f64,
        /// Requested lens mode.
        lens_mode: String,
        /// Requested element set.
        element_set: String,
    },
}

/// Re-exports for the most common types.
pub mod prelude {
    pub use crate::{
        models::{CalibrationEntry, EnergyRange},
        table::EnergyRangeTable,
        LensTableError, LensTableResult,
    };
}
