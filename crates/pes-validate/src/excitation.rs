use pes_core::Ev;

/// Source of the live beamline excitation energy.
///
/// Binding-mode windows are converted to kinetic energy at validation
/// time, so the value is read per validation pass rather than cached at
/// configuration time; verdicts track the monochromator.
pub trait ExcitationEnergySource {
    /// Current excitation energy in eV.
    fn excitation_energy(&self) -> Ev;
}

/// Constant excitation energy, for tests and offline validation.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FixedExcitationEnergy(pub Ev);

impl ExcitationEnergySource for FixedExcitationEnergy {
    fn excitation_energy(&self) -> Ev {
        self.0
    }
}
