use clap::{Parser, Subcommand};
use serde::Serialize;
use thiserror::Error;
use tracing_subscriber::EnvFilter;
use vp_antoine::{AntoineError, Coefficient, CoefficientLibrary, CoefficientSet};
use vp_core::Real;

mod bootstrap;

#[derive(Parser)]
#[command(name = "vp-cli")]
#[command(about = "Antoine vapor pressure lookups against built-in coefficient tables", long_about = None)]
struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List species and their coefficient sets
    Species,
    /// Show the coefficient set used for a species at a temperature
    Coeffs {
        /// Species name, as registered (case-sensitive)
        species: String,
        /// Temperature in the library's units
        #[arg(allow_negative_numbers = true)]
        temperature: Real,
        /// Print only one coefficient (A, B or C)
        #[arg(long)]
        which: Option<Coefficient>,
    },
    /// Compute saturation pressure at a temperature
    Pressure {
        /// Species name, as registered (case-sensitive)
        species: String,
        /// Temperature in the library's units
        #[arg(allow_negative_numbers = true)]
        temperature: Real,
    },
    /// Compute saturation (boiling) temperature at a pressure
    Boiling {
        /// Species name, as registered (case-sensitive)
        species: String,
        /// Pressure in the library's units
        pressure: Real,
    },
}

#[derive(Error, Debug)]
enum CliError {
    #[error(transparent)]
    Antoine(#[from] AntoineError),

    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}

type CliResult<T> = Result<T, CliError>;

#[derive(Serialize)]
struct SpeciesReport<'a> {
    species: &'a str,
    sets: &'a [CoefficientSet],
}

#[derive(Serialize)]
struct CoeffsReport<'a> {
    species: &'a str,
    temperature: Real,
    temperature_units: &'a str,
    set: &'a CoefficientSet,
}

#[derive(Serialize)]
struct CoefficientReport<'a> {
    species: &'a str,
    temperature: Real,
    temperature_units: &'a str,
    coefficient: &'static str,
    value: Real,
}

#[derive(Serialize)]
struct PressureReport<'a> {
    species: &'a str,
    temperature: Real,
    temperature_units: &'a str,
    pressure: Real,
    pressure_units: &'a str,
}

fn main() -> CliResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let lib = bootstrap::boublik_et_al();

    match cli.command {
        Commands::Species => cmd_species(&lib, cli.json),
        Commands::Coeffs {
            species,
            temperature,
            which: Some(which),
        } => cmd_coefficient(&lib, &species, temperature, which, cli.json),
        Commands::Coeffs {
            species,
            temperature,
            which: None,
        } => cmd_coeffs(&lib, &species, temperature, cli.json),
        Commands::Pressure {
            species,
            temperature,
        } => cmd_pressure(&lib, &species, temperature, cli.json),
        Commands::Boiling { species, pressure } => {
            cmd_boiling(&lib, &species, pressure, cli.json)
        }
    }
}

fn cmd_species(lib: &CoefficientLibrary, json: bool) -> CliResult<()> {
    let mut reports = Vec::with_capacity(lib.len());
    for species in lib.species() {
        reports.push(SpeciesReport {
            species,
            sets: lib.coefficient_sets(species)?,
        });
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(());
    }

    println!("Source: {}", lib.source());
    println!(
        "Units: {} / {} ({})",
        lib.temperature_units(),
        lib.pressure_units(),
        lib.log_base().label()
    );
    for report in &reports {
        println!("  {}", report.species);
        for set in report.sets {
            println!("    {set}");
        }
    }
    Ok(())
}

fn cmd_coeffs(
    lib: &CoefficientLibrary,
    species: &str,
    temperature: Real,
    json: bool,
) -> CliResult<()> {
    let set = lib.resolve(species, temperature)?;

    if json {
        let report = CoeffsReport {
            species,
            temperature,
            temperature_units: lib.temperature_units(),
            set,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{} at {} {}:", species, temperature, lib.temperature_units());
        for which in Coefficient::ALL {
            println!("  {} = {}", which.key(), set.coefficient(which));
        }
        println!("  range = [{}, {}]", set.lower_limit, set.upper_limit);
    }
    Ok(())
}

fn cmd_coefficient(
    lib: &CoefficientLibrary,
    species: &str,
    temperature: Real,
    which: Coefficient,
    json: bool,
) -> CliResult<()> {
    let value = lib.get_coefficient(species, temperature, which)?;

    if json {
        let report = CoefficientReport {
            species,
            temperature,
            temperature_units: lib.temperature_units(),
            coefficient: which.key(),
            value,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{} = {}", which.key(), value);
    }
    Ok(())
}

fn cmd_pressure(
    lib: &CoefficientLibrary,
    species: &str,
    temperature: Real,
    json: bool,
) -> CliResult<()> {
    let pressure = lib.get_saturation_pressure(species, temperature)?;
    print_point(lib, species, temperature, pressure, json)
}

fn cmd_boiling(
    lib: &CoefficientLibrary,
    species: &str,
    pressure: Real,
    json: bool,
) -> CliResult<()> {
    let temperature = lib.get_saturation_temperature(species, pressure)?;
    print_point(lib, species, temperature, pressure, json)
}

fn print_point(
    lib: &CoefficientLibrary,
    species: &str,
    temperature: Real,
    pressure: Real,
    json: bool,
) -> CliResult<()> {
    if json {
        let report = PressureReport {
            species,
            temperature,
            temperature_units: lib.temperature_units(),
            pressure,
            pressure_units: lib.pressure_units(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!(
            "{}: {:.4} {} at {:.4} {}",
            species,
            pressure,
            lib.pressure_units(),
            temperature,
            lib.temperature_units()
        );
    }
    Ok(())
}
