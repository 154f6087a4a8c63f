//! Command-line entry point for replaying picker scenarios.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use choice_picker_core::{PickerConfig, PickerConfigSource};
use choice_picker_replay::{Scenario, logging, run_scenario};
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "choice-picker-replay",
    about = "Replay scripted gestures against the choice picker engine"
)]
struct Cli {
    /// Trace every drag move
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run a scenario file and print the transcript
    Run {
        scenario: PathBuf,
        /// Tuning overrides (TOML or JSON). Defaults to the environment
        #[arg(long)]
        config: Option<PathBuf>,
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// Print the effective configuration as TOML
    Config {
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn load_config(path: Option<&Path>) -> Result<PickerConfig> {
    let (config, source) = match path {
        Some(path) => (
            PickerConfig::load_from_file(path)?,
            PickerConfigSource::File(path.to_path_buf()),
        ),
        None => PickerConfig::load_from_env()
            .context("failed to load picker config from environment")?,
    };
    log::info!("picker config source: {source:?}");
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logger(cli.verbose);

    match cli.command {
        Command::Run {
            scenario,
            config,
            format,
        } => {
            let config = load_config(config.as_deref())?;
            let loaded = Scenario::load_from_file(&scenario)?;
            let transcript = run_scenario(&loaded, config).with_context(
                || format!("failed to replay {}", scenario.display()),
            )?;
            match format {
                OutputFormat::Text => print!("{transcript}"),
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&transcript)?)
                }
            }
        }
        Command::Config { config } => {
            let config = load_config(config.as_deref())?;
            print!("{}", toml::to_string_pretty(&config)?);
        }
    }
    Ok(())
}
