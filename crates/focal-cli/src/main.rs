//! Focal CLI - replay touch scripts against the focus indicator.

#![allow(clippy::needless_pass_by_value, clippy::doc_markdown)]

mod error;
mod script;

use clap::{ArgAction, Parser, Subcommand};
use error::CliError;
use focal_widgets::FocusConfig;
use script::{Replay, Script};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{info, Level};

#[derive(Parser)]
#[command(name = "focal")]
#[command(about = "Camera focus indicator - replay touch scripts and check configs")]
#[command(version)]
struct Cli {
    /// Log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a YAML touch script and print every frame
    Replay {
        /// Path to script file
        script: PathBuf,

        /// TOML configuration (defaults when omitted)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print frames as JSON lines
        #[arg(long)]
        json: bool,
    },

    /// Print the default configuration, or validate a config file
    Config {
        /// Config file to validate
        #[arg(long)]
        validate: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Replay {
            script,
            config,
            json,
        } => replay(&script, config.as_deref(), json),
        Commands::Config { validate } => match validate {
            Some(path) => validate_config(&path),
            None => print_default_config(),
        },
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(verbose > 1)
        .with_writer(io::stderr)
        .init();
}

fn read(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|e| CliError::io(path, e))
}

fn load_config(path: Option<&Path>) -> Result<FocusConfig, CliError> {
    match path {
        Some(path) => Ok(FocusConfig::from_toml_str(&read(path)?)?),
        None => Ok(FocusConfig::default()),
    }
}

fn replay(path: &Path, config: Option<&Path>, json: bool) -> Result<(), CliError> {
    let script = Script::from_yaml(&read(path)?)?;
    let config = load_config(config)?;
    info!(
        script = %path.display(),
        steps = script.steps.len(),
        "replaying script"
    );

    let records = Replay::new(&script, config)?.run(&script.steps);

    let mut out = io::stdout().lock();
    for record in &records {
        let line = if json {
            serde_json::to_string(record)?
        } else {
            record.to_string()
        };
        writeln!(out, "{line}").map_err(|e| CliError::io("<stdout>", e))?;
    }
    info!(records = records.len(), "replay finished");
    Ok(())
}

fn validate_config(path: &Path) -> Result<(), CliError> {
    println!("Checking config: {}", path.display());
    let config = load_config(Some(path))?;
    println!("Config valid!");
    println!("  Radius: {} -> {}", config.max_radius, config.min_radius);
    println!(
        "  Animation: {}px every {}ms",
        config.step_px, config.tick_interval_ms
    );
    println!("  Long press: > {}ms", config.long_press_ms);
    println!(
        "  Hold: {}ms (auto-dismiss {})",
        config.hold_ms,
        if config.auto_dismiss { "on" } else { "off" }
    );
    Ok(())
}

fn print_default_config() -> Result<(), CliError> {
    print!("{}", FocusConfig::default().to_toml_string()?);
    Ok(())
}
