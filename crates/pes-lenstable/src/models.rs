use pes_core::Ev;
use serde::Serialize;

/// One manufacturer calibration row: the achievable kinetic-energy window
/// for a specific `(lensMode, elementSet, passEnergy)` triple.
#[derive(Debug, Clone, PartialEq)]
pub struct CalibrationEntry {
    pub(crate) element_set: String,
    pub(crate) lens_mode: String,
    pub(crate) pass_energy: Ev,
    pub(crate) range: EnergyRange,
}

impl CalibrationEntry {
    /// Element set this entry belongs to.
    pub fn element_set(&self) -> &str {
        &self.element_set
    }
    /// Lens mode this entry belongs to.
    pub fn lens_mode(&self) -> &str {
        &self.lens_mode
    }
    /// Pass energy this entry was calibrated at, in eV.
    pub fn pass_energy(&self) -> Ev {
        self.pass_energy
    }
    /// Achievable kinetic-energy window.
    pub fn range(&self) -> EnergyRange {
        self.range
    }
}

/// Inclusive kinetic-energy window achievable by the analyser.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct EnergyRange {
    pub(crate) low: Ev,
    pub(crate) high: Ev,
}

impl EnergyRange {
    /// Builds a range; callers must uphold `low <= high`.
    pub fn new(low: Ev, high: Ev) -> Self {
        debug_assert!(low <= high);
        Self { low, high }
    }
    /// Lower bound in eV.
    pub fn low(&self) -> Ev {
        self.low
    }
    /// Upper bound in eV.
    pub fn high(&self) -> Ev {
        self.high
    }
    /// Width of the window in eV.
    pub fn width(&self) -> Ev {
        self.high - self.low
    }
    /// Whether `[low, high]` lies entirely inside this range. Containment
    /// is inclusive on both bounds and strict: a partly overlapping
    /// window does not count.
    pub fn contains_window(&self, low: Ev, high: Ev) -> bool {
        low >= self.low && high <= self.high
    }
}
