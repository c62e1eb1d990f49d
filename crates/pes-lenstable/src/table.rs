use std::{
    collections::HashMap,
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
    str::FromStr,
};

use itertools::Itertools;
use pes_core::Ev;

use crate::{
    models::{CalibrationEntry, EnergyRange},
    LensTableError, LensTableResult,
};

/// Tolerance when matching a requested pass energy against a tabulated
/// one. This absorbs formatting noise (`"25"` vs `"25.0"`), not
/// interpolation: pass energies remain a discrete preset axis.
const PASS_ENERGY_TOLERANCE: Ev = 1e-6;

/// Parsed calibration file mapping `(elementSet, lensMode)` to the
/// achievable kinetic-energy ranges sampled per pass energy.
///
/// Built once from a whitespace-delimited text file whose rows read
/// `elementSet lensMode passEnergy lowBound highBound`; blank lines and
/// `#` comments are skipped, anything else malformed fails the load.
/// Immutable after construction, so it can be shared read-only across
/// threads.
#[derive(Debug, Clone)]
pub struct EnergyRangeTable {
    // Values are kept ordered by pass energy.
    entries: HashMap<(String, String), Vec<CalibrationEntry>>,
}

impl EnergyRangeTable {
    /// Loads a lens table from a calibration file.
    ///
    /// The file handle is scoped to this call and released on every
    /// path, including parse failure.
    pub fn from_path(path: impl AsRef<Path>) -> LensTableResult<Self> {
        let file = File::open(path.as_ref())?;
        let table = Self::from_reader(BufReader::new(file))?;
        tracing::debug!(
            path = %path.as_ref().display(),
            entries = table.len(),
            "loaded lens table"
        );
        Ok(table)
    }

    /// Parses a lens table from any buffered reader.
    pub fn from_reader(reader: impl BufRead) -> LensTableResult<Self> {
        let mut entries: HashMap<(String, String), Vec<CalibrationEntry>> = HashMap::new();
        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            let row = line.trim();
            if row.is_empty() || row.starts_with('#') {
                continue;
            }
            let entry = parse_row(row, idx + 1)?;
            entries
                .entry((entry.element_set.clone(), entry.lens_mode.clone()))
                .or_default()
                .push(entry);
        }
        if entries.is_empty() {
            return Err(LensTableError::EmptyTable);
        }
        for list in entries.values_mut() {
            list.sort_by(|a, b| a.pass_energy.total_cmp(&b.pass_energy));
        }
        Ok(Self { entries })
    }

    /// Achievable kinetic-energy range for an exact `(lensMode,
    /// elementSet, passEnergy)` combination.
    ///
    /// Fails with [`LensTableError::LensModeNotFound`] when the lens
    /// mode / element set pair is absent and with
    /// [`LensTableError::PassEnergyNotFound`] when the pass energy has no
    /// exactly-matching entry. Uncalibrated pass energies are never
    /// interpolated.
    pub fn energy_range(
        &self,
        lens_mode: &str,
        element_set: &str,
        pass_energy: Ev,
    ) -> LensTableResult<EnergyRange> {
        let list = self
            .entries
            .get(&(element_set.to_string(), lens_mode.to_string()))
            .ok_or_else(|| LensTableError::LensModeNotFound {
                lens_mode: lens_mode.to_string(),
                element_set: element_set.to_string(),
            })?;
        list.iter()
            .find(|e| (e.pass_energy - pass_energy).abs() <= PASS_ENERGY_TOLERANCE)
            .map(CalibrationEntry::range)
            .ok_or_else(|| LensTableError::PassEnergyNotFound {
                pass_energy,
                lens_mode: lens_mode.to_string(),
                element_set: element_set.to_string(),
            })
    }

    /// Whether the table knows this lens mode for the given element set.
    pub fn has_lens_mode(&self, lens_mode: &str, element_set: &str) -> bool {
        self.entries
            .contains_key(&(element_set.to_string(), lens_mode.to_string()))
    }

    /// Element sets present in the table, sorted and deduplicated.
    pub fn element_sets(&self) -> Vec<&str> {
        self.entries
            .keys()
            .map(|(element_set, _)| element_set.as_str())
            .sorted_unstable()
            .dedup()
            .collect()
    }

    /// Lens modes calibrated for an element set, sorted.
    pub fn lens_modes(&self, element_set: &str) -> Vec<&str> {
        self.entries
            .keys()
            .filter(|(es, _)| es == element_set)
            .map(|(_, lens_mode)| lens_mode.as_str())
            .sorted_unstable()
            .collect()
    }

    /// Pass energies calibrated for a lens mode / element set pair, in
    /// ascending order.
    pub fn pass_energies(&self, lens_mode: &str, element_set: &str) -> LensTableResult<Vec<Ev>> {
        let list = self
            .entries
            .get(&(element_set.to_string(), lens_mode.to_string()))
            .ok_or_else(|| LensTableError::LensModeNotFound {
                lens_mode: lens_mode.to_string(),
                element_set: element_set.to_string(),
            })?;
        Ok(list.iter().map(CalibrationEntry::pass_energy).collect())
    }

    /// Total number of calibration entries.
    pub fn len(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    /// Whether the table holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromStr for EnergyRangeTable {
    type Err = LensTableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_reader(s.as_bytes())
    }
}

fn parse_row(row: &str, line: usize) -> LensTableResult<CalibrationEntry> {
    let fields: Vec<&str> = row.split_whitespace().collect();
    if fields.len() != 5 {
        return Err(LensTableError::ColumnCountMismatch {
            line,
            found: fields.len(),
        });
    }
    let pass_energy = parse_field(fields[2], "passEnergy", line)?;
    let low = parse_field(fields[3], "lowEnergyBound", line)?;
    let high = parse_field(fields[4], "highEnergyBound", line)?;
    if low > high {
        return Err(LensTableError::InvalidBounds { line, low, high });
    }
    Ok(CalibrationEntry {
        element_set: fields[0].to_string(),
        lens_mode: fields[1].to_string(),
        pass_energy,
        range: EnergyRange::new(low, high),
    })
}

fn parse_field(text: &str, column: &'static str, line: usize) -> LensTableResult<Ev> {
    text.parse().map_err(|_| LensTableError::ParseError {
        line,
        column,
        text: text.to_string(),
    })
}
