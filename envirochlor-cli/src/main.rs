use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueEnum};
use envirochlor_core::{AppContext, DosageError, EnviroChlorConfig, RawInputs};
use log::{debug, info};

mod render;

/// Exit code for operator fields that are not numbers.
const EXIT_INPUT_ERROR: u8 = 2;

/// Exit code for every other failure.
const EXIT_FAILURE: u8 = 1;

/// Simulate water-quality readings and estimate chlorine dosage.
#[derive(Parser)]
#[command(name = "envirochlor", version)]
struct Cli {
    /// JSON config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed for reproducible readings (overrides the config)
    #[arg(short, long)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Take readings and print them
    Read {
        #[command(flatten)]
        fields: Fields,

        /// Number of read actions
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,
    },

    /// Take readings, then print the dosage analysis
    Analyze {
        #[command(flatten)]
        fields: Fields,

        /// Number of read actions before analysing
        #[arg(short, long, default_value_t = 5)]
        reads: usize,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

/// Operator fields, passed through as typed
#[derive(Args)]
struct Fields {
    /// Turbidity before treatment (NTU)
    #[arg(long, allow_hyphen_values = true)]
    inlet: String,

    /// Turbidity after treatment (NTU)
    #[arg(long, allow_hyphen_values = true)]
    outlet: String,

    /// Water temperature (°C)
    #[arg(short, long, allow_hyphen_values = true)]
    temperature: String,
}

impl Fields {
    fn into_raw(self) -> RawInputs {
        RawInputs::new(self.inlet, self.outlet, self.temperature)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let status = exit_status(&e);
            if status == EXIT_INPUT_ERROR {
                eprintln!("Input error: {e}");
            } else {
                eprintln!("Error: {e:#}");
            }
            ExitCode::from(status)
        }
    }
}

/// Exit code for a failed run: 2 for bad operator fields, 1 otherwise
fn exit_status(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<DosageError>() {
        Some(e) if e.is_input_error() => EXIT_INPUT_ERROR,
        _ => EXIT_FAILURE,
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = match &cli.config {
        Some(path) => EnviroChlorConfig::from_path(path)
            .with_context(|| format!("Config {}", path.display()))?,
        None => EnviroChlorConfig::default(),
    };
    if let Some(seed) = cli.seed {
        config.simulation.seed = Some(seed);
    }
    debug!("Simulation: {:?}", config.simulation);

    let mut app = AppContext::from_config(config)?;

    match cli.command {
        Command::Read { fields, count } => {
            let raw = fields.into_raw();
            for _ in 0..count {
                println!("{}", app.read_values(&raw)?);
            }
        }
        Command::Analyze {
            fields,
            reads,
            format,
        } => {
            let raw = fields.into_raw();
            for _ in 0..reads {
                println!("{}", app.read_values(&raw)?);
            }

            let chart = app.show_graphs(&raw)?;
            info!(
                "Average dosage {:.2} mg/L over {} readings",
                chart.estimate.average,
                chart.trend.values.len()
            );

            match format {
                OutputFormat::Text => print!("{}", render::TextChart(&chart)),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&chart)?),
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use envirochlor_core::ConfigError;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn fields_are_kept_as_text() {
        let cli = Cli::try_parse_from([
            "envirochlor",
            "read",
            "--inlet",
            "NTU Inlet",
            "--outlet",
            "-1.5",
            "-t",
            "20",
            "-n",
            "3",
        ])
        .unwrap();

        match cli.command {
            Command::Read { fields, count } => {
                assert_eq!(count, 3);
                let raw = fields.into_raw();
                assert_eq!(raw.turbidity_inlet, "NTU Inlet");
                assert_eq!(raw.turbidity_outlet, "-1.5");
                assert_eq!(raw.temperature, "20");
            }
            Command::Analyze { .. } => panic!("expected read"),
        }
    }

    #[test]
    fn analyze_defaults() {
        let cli = Cli::try_parse_from([
            "envirochlor",
            "--seed",
            "7",
            "analyze",
            "--inlet",
            "2",
            "--outlet",
            "7",
            "--temperature",
            "10",
        ])
        .unwrap();

        assert_eq!(cli.seed, Some(7));
        match cli.command {
            Command::Analyze { reads, format, .. } => {
                assert_eq!(reads, 5);
                assert_eq!(format, OutputFormat::Text);
            }
            Command::Read { .. } => panic!("expected analyze"),
        }
    }

    #[test]
    fn bad_field_is_an_input_error() {
        let cli = Cli::try_parse_from([
            "envirochlor",
            "read",
            "--inlet",
            "2",
            "--outlet",
            "muddy",
            "-t",
            "10",
        ])
        .unwrap();

        let err = run(cli).unwrap_err();
        let input = err.downcast_ref::<DosageError>().unwrap();
        assert!(input.is_input_error());
        assert_eq!(exit_status(&err), EXIT_INPUT_ERROR);
    }

    #[test]
    fn analyze_without_reads_fails_cleanly() {
        let cli = Cli::try_parse_from([
            "envirochlor",
            "analyze",
            "--inlet",
            "2",
            "--outlet",
            "7",
            "-t",
            "10",
            "--reads",
            "0",
        ])
        .unwrap();

        let err = run(cli).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<DosageError>(),
            Some(DosageError::InsufficientData { .. })
        ));
        assert_eq!(exit_status(&err), EXIT_FAILURE);
    }

    #[test]
    fn input_errors_exit_with_two() {
        let invalid = anyhow::Error::new(DosageError::InvalidInput {
            field: "temperature",
            raw: "warm".to_string(),
        });
        assert_eq!(exit_status(&invalid), 2);

        let non_finite = anyhow::Error::new(DosageError::NonFiniteInput { field: "turbidity inlet" });
        assert_eq!(exit_status(&non_finite), 2);
    }

    #[test]
    fn other_errors_exit_with_one() {
        let missing = anyhow::Error::new(DosageError::InsufficientData {
            required: 1,
            available: 0,
        });
        assert_eq!(exit_status(&missing), 1);

        let config = anyhow::Error::new(ConfigError::Invalid {
            reason: "reading_min must be below reading_max",
        })
        .context("Config envirochlor.json");
        assert_eq!(exit_status(&config), 1);
    }

    #[test]
    fn missing_config_file_exits_with_one() {
        let path = std::env::temp_dir().join("envirochlor-absent-config.json");
        let cli = Cli::try_parse_from([
            "envirochlor",
            "--config",
            path.to_str().unwrap(),
            "read",
            "--inlet",
            "2",
            "--outlet",
            "7",
            "-t",
            "10",
        ])
        .unwrap();

        let err = run(cli).unwrap_err();
        assert!(err.downcast_ref::<ConfigError>().is_some());
        assert_eq!(exit_status(&err), 1);
    }
}
