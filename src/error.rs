//! Error types for workspace configuration handling.

use std::path::PathBuf;
use thiserror::Error;

/// Workspace configuration loading and saving errors.
///
/// The read-side variants are only ever returned by
/// [`WorkspaceConfigStore::try_load_config`](crate::config::WorkspaceConfigStore::try_load_config);
/// the fail-soft loader folds them into "no config".
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read workspace config '{path}'")]
    ReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse workspace config '{path}'")]
    ParseFailed {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Workspace config '{path}' must be a JSON object, found {found}")]
    NotAnObject { path: PathBuf, found: &'static str },

    #[error("Failed to serialize workspace config for '{path}'")]
    SerializeFailed {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Failed to write workspace config '{path}'")]
    WriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Workspace config already exists at '{path}'")]
    AlreadyExists { path: PathBuf },
}

impl ConfigError {
    /// Returns true for errors raised while reading an existing file.
    pub fn is_read_side(&self) -> bool {
        matches!(
            self,
            Self::ReadFailed { .. } | Self::ParseFailed { .. } | Self::NotAnObject { .. }
        )
    }
}
