//! EOCV-Sim workspace configuration.
//!
//! Persists the `eocvsim_workspace.json` document kept at the root of a
//! workspace and loads it back on demand. Loading is fail-soft: a missing or
//! unreadable file reads as "no config". Saving is fail-loud.
//!
//! ```no_run
//! use eocvsim_workspace::config::{WorkspaceConfig, WorkspaceConfigStore};
//!
//! let store = WorkspaceConfigStore::<WorkspaceConfig>::new("/tmp/ws1");
//! let config = store.load_config().unwrap_or_default();
//! store.save_config(&config)?;
//! # Ok::<(), eocvsim_workspace::error::ConfigError>(())
//! ```

pub mod cli;
pub mod config;
pub mod error;

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::cli::{Cli, Commands, InitArgs, OutputFormat, ShowArgs};
use crate::config::{RawWorkspaceConfig, WorkspaceConfig, WorkspaceConfigStore};
use crate::error::ConfigError;

/// Runs the command selected on the command line.
pub fn run(cli: Cli) -> Result<()> {
    setup_logging(cli.log_level())?;

    match cli.command {
        Commands::Path => show_path(&cli.workspace),
        Commands::Show(args) => show_config(&cli.workspace, &args),
        Commands::Check => check_config(&cli.workspace),
        Commands::Init(args) => init_config(&cli.workspace, &args),
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// Logs go to stderr; stdout carries command output.
fn setup_logging(level: &str) -> Result<()> {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    fmt()
        .with_env_filter(filter)
        .json()
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {e}"))?;

    Ok(())
}

/// Prints the location of the workspace config file.
fn show_path(workspace: &Path) -> Result<()> {
    let store = WorkspaceConfigStore::<RawWorkspaceConfig>::new(workspace);
    println!("{}", store.config_file_path().display());
    Ok(())
}

/// Displays the workspace config as stored, without imposing a schema.
fn show_config(workspace: &Path, args: &ShowArgs) -> Result<()> {
    match render_config(workspace, args.format)? {
        Some(rendered) => println!("{}", rendered),
        None => println!(
            "No usable workspace config at {}",
            workspace.join(config::CONFIG_FILE_NAME).display()
        ),
    }

    Ok(())
}

/// Renders the workspace config in the requested format, keeping key order.
fn render_config(workspace: &Path, format: OutputFormat) -> Result<Option<String>> {
    let store = WorkspaceConfigStore::<RawWorkspaceConfig>::new(workspace);

    let Some(config) = store.load_config() else {
        return Ok(None);
    };

    let rendered = match format {
        OutputFormat::Json => serde_json::to_string_pretty(&config)?,
        OutputFormat::Yaml => serde_yaml::to_string(&config)?,
    };

    Ok(Some(rendered))
}

/// Checks the workspace config against the simulator's schema.
fn check_config(workspace: &Path) -> Result<()> {
    let store = WorkspaceConfigStore::<WorkspaceConfig>::new(workspace);

    let config = match store.try_load_config() {
        Ok(config) => config,
        Err(e) if e.is_read_side() => {
            return Err(anyhow::Error::new(e).context("Workspace config is not usable"))
        }
        Err(e) => return Err(e.into()),
    };

    match config {
        Some(config) => {
            println!("Workspace config is valid.");
            println!("  sources:   {}", config.sources_path);
            println!("  resources: {}", config.resources_path);
            if !config.excluded_paths.is_empty() {
                println!("  excluded:  {}", config.excluded_paths.join(", "));
            }
        }
        None => println!(
            "No workspace config at {}",
            store.config_file_path().display()
        ),
    }

    Ok(())
}

/// Writes a default workspace config.
fn init_config(workspace: &Path, args: &InitArgs) -> Result<()> {
    let store = WorkspaceConfigStore::<WorkspaceConfig>::new(workspace);
    let path = store.config_file_path();

    if store.config_exists() && !args.force {
        anyhow::bail!(ConfigError::AlreadyExists { path });
    }

    store
        .save_config(&WorkspaceConfig::new(args.sim_version.as_str()))
        .context("Failed to initialize workspace config")?;

    info!(path = %path.display(), "Workspace config initialized");
    println!("Wrote {}", path.display());

    Ok(())
}
