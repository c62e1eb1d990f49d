//! Command-line entry point: validate a JSON sequence file against a
//! lens table and print the report to stdout.

use std::{env, ffi::OsString, fs::File, io::BufReader, path::PathBuf};

use clap::Parser;
use pes_core::SesRegion;
use pes_lenstable::EnergyRangeTable;
use serde_json::to_writer_pretty;

use crate::{FixedExcitationEnergy, RegionValidator};

#[derive(Parser)]
#[command(name = "pes-validate", version)]
struct Cli {
    /// Lens table file (or env PES_LENS_TABLE)
    #[arg(long, env = "PES_LENS_TABLE")]
    table: PathBuf,

    /// Sequence file: a JSON array of regions
    #[arg(long)]
    sequence: PathBuf,

    /// Element set partition of the lens table
    #[arg(long, default_value = "High")]
    element_set: String,

    /// Excitation energy in eV
    #[arg(long, env = "PES_EXCITATION_ENERGY")]
    excitation_energy: f64,
}

/// Execute the command-line interface with a custom argv iterator.
pub fn run_with_args<I, T>(args: I) -> Result<(), Box<dyn std::error::Error>>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = Cli::parse_from(args);
    let table = EnergyRangeTable::from_path(&cli.table)?;
    let regions: Vec<SesRegion> = serde_json::from_reader(BufReader::new(File::open(
        &cli.sequence,
    )?))?;
    let validator = RegionValidator::new(table);
    let report = validator.validate_sequence(
        &regions,
        &cli.element_set,
        &FixedExcitationEnergy(cli.excitation_energy),
    );
    to_writer_pretty(std::io::stdout(), &report)?;
    println!();
    Ok(())
}

/// Execute the command-line interface with the process argv.
pub fn cli() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
    run_with_args(env::args_os())
}
