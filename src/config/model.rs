//! Workspace configuration data structures.

use serde::{Deserialize, Serialize};

/// Any JSON object, with keys kept in the order they were read.
///
/// Use this as the store's document type when the caller does not want to
/// commit to a schema.
pub type RawWorkspaceConfig = serde_json::Map<String, serde_json::Value>;

/// Settings the simulator keeps for a workspace.
///
/// Missing keys fall back to their defaults and unknown keys are ignored, so
/// files written by older or newer builds still load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkspaceConfig {
    /// Directory scanned for input sources, relative to the workspace root.
    pub sources_path: String,

    /// Directory holding pipeline resources, relative to the workspace root.
    pub resources_path: String,

    /// Paths skipped while scanning the workspace.
    pub excluded_paths: Vec<String>,

    /// Version of the simulator that last wrote this file.
    pub eocv_sim_version: String,
}

impl WorkspaceConfig {
    /// Creates a default config stamped with the given simulator version.
    pub fn new(eocv_sim_version: impl Into<String>) -> Self {
        Self {
            eocv_sim_version: eocv_sim_version.into(),
            ..Self::default()
        }
    }
}

fn default_scan_path() -> String {
    ".".to_string()
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        Self {
            sources_path: default_scan_path(),
            resources_path: default_scan_path(),
            excluded_paths: Vec::new(),
            eocv_sim_version: String::new(),
        }
    }
}
