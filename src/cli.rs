//! Command-line interface definitions.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Inspect and initialise the eocvsim_workspace.json file of a workspace.
#[derive(Parser, Debug)]
#[command(name = "workspace-config", version, about, long_about = None)]
pub struct Cli {
    /// Workspace root directory.
    #[arg(short, long, default_value = ".", env = "EOCVSIM_WORKSPACE", global = true)]
    pub workspace: PathBuf,

    /// Increase logging verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Returns the log level based on verbosity flags.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the path of the workspace config file.
    Path,

    /// Display the workspace config, if one can be loaded.
    Show(ShowArgs),

    /// Report whether the workspace config is absent, valid, or corrupt.
    Check,

    /// Write a default workspace config.
    Init(InitArgs),
}

/// Arguments for the show subcommand.
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
}

/// Rendering used by the show subcommand.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Yaml,
}

/// Arguments for the init subcommand.
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(long, default_value = "false")]
    pub force: bool,

    /// Simulator version to stamp into the new config.
    #[arg(long = "sim-version", default_value = env!("CARGO_PKG_VERSION"))]
    pub sim_version: String,
}
