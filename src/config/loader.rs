//! Workspace config file loading and saving.

use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use super::CONFIG_FILE_NAME;
use crate::error::ConfigError;

/// Reads and writes the config document of one workspace.
///
/// The document type `T` is chosen by the caller; it only has to serialize
/// to a JSON object. The file location is derived from the workspace root on
/// every call, so [`set_workspace_root`](Self::set_workspace_root) takes
/// effect immediately and never moves an existing file.
#[derive(Debug, Clone)]
pub struct WorkspaceConfigStore<T> {
    workspace_root: PathBuf,
    _document: PhantomData<fn() -> T>,
}

impl<T> WorkspaceConfigStore<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Creates a store for the given workspace root. The path is not checked.
    pub fn new(workspace_root: impl Into<PathBuf>) -> Self {
        Self {
            workspace_root: workspace_root.into(),
            _document: PhantomData,
        }
    }

    /// Returns the workspace root this store reads from and writes to.
    pub fn workspace_root(&self) -> &Path {
        &self.workspace_root
    }

    /// Points the store at a different workspace.
    pub fn set_workspace_root(&mut self, workspace_root: impl Into<PathBuf>) {
        self.workspace_root = workspace_root.into();
    }

    /// Returns `<workspace root>/eocvsim_workspace.json`.
    pub fn config_file_path(&self) -> PathBuf {
        self.workspace_root.join(CONFIG_FILE_NAME)
    }

    /// Returns true if a config file is present in the workspace.
    pub fn config_exists(&self) -> bool {
        self.config_file_path().is_file()
    }

    /// Loads the workspace config, treating anything unreadable as unset.
    ///
    /// Returns `None` when the file is missing, cannot be read, is not valid
    /// JSON, or does not fit `T`. The file itself is never touched.
    pub fn load_config(&self) -> Option<T> {
        match self.try_load_config() {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(error = %e, "Ignoring unreadable workspace config");
                None
            }
        }
    }

    /// Loads the workspace config, keeping the reason a load failed.
    ///
    /// `Ok(None)` means no file is present.
    pub fn try_load_config(&self) -> Result<Option<T>, ConfigError> {
        let path = self.config_file_path();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No workspace config present");
            return Ok(None);
        }

        let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadFailed {
            path: path.clone(),
            source: e,
        })?;

        let value: Value =
            serde_json::from_str(&content).map_err(|e| ConfigError::ParseFailed {
                path: path.clone(),
                source: e,
            })?;

        if !value.is_object() {
            return Err(ConfigError::NotAnObject {
                found: json_kind(&value),
                path,
            });
        }

        let config = serde_json::from_value(value).map_err(|e| ConfigError::ParseFailed {
            path: path.clone(),
            source: e,
        })?;

        tracing::debug!(path = %path.display(), "Loaded workspace config");
        Ok(Some(config))
    }

    /// Writes the config as pretty-printed JSON, replacing any existing file.
    ///
    /// The workspace directory must already exist.
    pub fn save_config(&self, config: &T) -> Result<(), ConfigError> {
        let path = self.config_file_path();

        let value = serde_json::to_value(config).map_err(|e| ConfigError::SerializeFailed {
            path: path.clone(),
            source: e,
        })?;
        if !value.is_object() {
            return Err(ConfigError::NotAnObject {
                found: json_kind(&value),
                path,
            });
        }

        // `preserve_order` keeps struct field order through `Value`.
        let content =
            serde_json::to_string_pretty(&value).map_err(|e| ConfigError::SerializeFailed {
                path: path.clone(),
                source: e,
            })?;

        std::fs::write(&path, content).map_err(|e| ConfigError::WriteFailed {
            path: path.clone(),
            source: e,
        })?;

        tracing::info!(path = %path.display(), "Saved workspace config");
        Ok(())
    }
}

/// Names the JSON kind of a value for error messages.
fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
