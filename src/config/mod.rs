//! Workspace configuration document and its on-disk store.

pub mod loader;
pub mod model;

pub use loader::WorkspaceConfigStore;
pub use model::{RawWorkspaceConfig, WorkspaceConfig};

/// Name of the config file kept at the root of every workspace.
pub const CONFIG_FILE_NAME: &str = "eocvsim_workspace.json";
