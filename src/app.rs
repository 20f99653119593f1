//! Application startup and utilities.
//!
//! This module contains the CLI definition, exit codes, and tracing setup
//! that support the main entry point.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Application exit codes.
pub mod exit_code {
    use std::process::ExitCode;

    /// Success (exit code 0).
    pub const SUCCESS: ExitCode = ExitCode::SUCCESS;

    /// Configuration error (exit code 1) - unreadable or invalid config file.
    pub const CONFIG_ERROR: ExitCode = ExitCode::FAILURE;

    /// Runtime error (exit code 2) - unsupported platform, enumeration failure.
    ///
    /// Note: This is a function rather than a constant because `ExitCode::from()` is not `const fn`.
    pub fn runtime_error() -> ExitCode {
        ExitCode::from(2)
    }
}

/// Command line arguments.
#[derive(Debug, Parser)]
#[command(name = "ipx-ifcache", version, about = "Inspect the virtual IPX interface cache")]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// Parses command line arguments.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Subcommands. Without one, the tool lists the cached interfaces.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Write a configuration template
    Init {
        /// Where to write the template
        #[arg(default_value = "ipx-ifcache.toml")]
        output: PathBuf,
    },
}

/// Returns the default configuration file location, if resolvable.
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("ipx-ifcache").join("config.toml"))
}

/// Sets up the tracing subscriber for logging.
pub fn setup_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
