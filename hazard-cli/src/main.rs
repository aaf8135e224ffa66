use clap::Parser;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use thiserror::Error;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;
use volcano_hazard_core::{
    validate_input, HazardError, HazardEstimator, HazardParameters, Location, VolcanoInput,
};

/// Volcanic eruption hazard estimate for a single volcano
#[derive(Parser, Debug)]
#[command(name = "hazard-cli")]
#[command(about = "Estimate blast radius, ash spread and risk tier for a volcano", long_about = None)]
struct Args {
    /// Volcano name (informational only)
    #[arg(short, long, default_value = "unnamed")]
    name: String,

    /// Vent elevation in meters (negative for submarine vents)
    #[arg(short, long, allow_negative_numbers = true)]
    elevation: f64,

    /// Activity status (e.g. Active, Dormant, Extinct, Holocene)
    #[arg(short, long, default_value = "active")]
    status: String,

    /// Latitude in decimal degrees
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    latitude: f64,

    /// Longitude in decimal degrees
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    longitude: f64,

    /// Seed for a repeatable estimate
    #[arg(long)]
    seed: Option<u64>,

    /// JSON file overriding model parameters (missing fields keep defaults)
    #[arg(short, long)]
    params: Option<PathBuf>,

    /// Pretty-print the report
    #[arg(long)]
    pretty: bool,

    /// Log every pipeline stage to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Error, Debug)]
enum CliError {
    #[error("could not read parameters from {}: {source}", .path.display())]
    ReadParams {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse parameters: {0}")]
    ParseParams(#[from] serde_json::Error),
    #[error(transparent)]
    Hazard(#[from] HazardError),
}

fn load_params(path: &Path) -> Result<HazardParameters, CliError> {
    let text = std::fs::read_to_string(path).map_err(|source| CliError::ReadParams {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&text)?)
}

fn run(args: &Args) -> Result<String, CliError> {
    let params = match &args.params {
        Some(path) => load_params(path)?,
        None => HazardParameters::default(),
    };
    let estimator = HazardEstimator::new(params)?;

    let input = VolcanoInput::new(
        args.name.as_str(),
        args.elevation,
        args.status.as_str(),
        Location::new(args.latitude, args.longitude),
    );
    validate_input(&input)?;
    debug!("Validated input: {:?}", input);

    let report = match args.seed {
        Some(seed) => estimator.estimate_seeded(&input, seed)?,
        None => estimator.estimate(&input, &mut rand::rng())?,
    };

    let json = if args.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    Ok(json)
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(&args) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("hazard-cli").chain(argv.iter().copied())).unwrap()
    }

    #[test]
    fn parses_negative_coordinates() {
        let args = parse(&["--elevation", "-200", "--latitude", "-45.5", "--longitude", "-120"]);
        assert_eq!(args.elevation, -200.0);
        assert_eq!(args.latitude, -45.5);
        assert_eq!(args.longitude, -120.0);
        assert_eq!(args.status, "active");
    }

    #[test]
    fn seeded_run_prints_wire_json() {
        let args = parse(&["-e", "3000", "-s", "Active", "--seed", "42"]);
        let first = run(&args).unwrap();
        let second = run(&args).unwrap();
        assert_eq!(first, second);

        let value: Value = serde_json::from_str(&first).unwrap();
        assert!(value.get("final_decision").is_some());
        assert!(value.get("atmosphere").is_some());
    }

    #[test]
    fn invalid_input_is_an_error() {
        let args = parse(&["-e", "1000", "--latitude", "91"]);
        assert!(matches!(
            run(&args),
            Err(CliError::Hazard(HazardError::InvalidInput { .. }))
        ));
    }

    #[test]
    fn missing_params_file_is_reported() {
        let args = parse(&["-e", "1000", "--params", "/nonexistent/params.json"]);
        let err = run(&args).unwrap_err();
        assert!(err.to_string().starts_with("could not read parameters"));
    }

    #[test]
    fn partial_params_file_overrides_defaults() {
        let path = std::env::temp_dir().join(format!("hazard-cli-params-{}.json", std::process::id()));
        std::fs::write(&path, r#"{"physics": {"particle_count": 10}}"#).unwrap();

        let args = parse(&["-e", "1000", "--seed", "1", "--params", path.to_str().unwrap()]);
        let result = run(&args);
        std::fs::remove_file(&path).unwrap();
        assert!(result.is_ok());
    }
}
