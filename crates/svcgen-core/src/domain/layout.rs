//! Where services live inside a workspace and what a fresh one looks like.
//!
//! ```text
//! <workspace>/
//! ├── scripts/          <- create-service is installed here
//! └── services/
//!     └── <service>/
//!         ├── src/
//!         ├── config/
//!         ├── models/
//!         └── scripts/
//! ```

use std::path::{Path, PathBuf};

/// Directory under the workspace root that holds every service.
pub const SERVICES_DIR: &str = "services";

/// Subdirectories created inside every new service, in creation order.
pub const SERVICE_DIRECTORIES: [&str; 4] = ["src", "config", "models", "scripts"];

/// Resolved locations for one workspace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceLayout {
    services_root: PathBuf,
}

impl WorkspaceLayout {
    /// Use an explicit services root.
    pub fn new(services_root: impl Into<PathBuf>) -> Self {
        Self {
            services_root: services_root.into(),
        }
    }

    /// Derive the layout from the location of the running executable.
    ///
    /// The executable sits in `<workspace>/scripts/`, so the services root is
    /// `<workspace>/services`. Returns `None` when the executable path is too
    /// shallow to have a workspace above it.
    pub fn from_executable(executable: &Path) -> Option<Self> {
        let scripts_dir = executable.parent()?;
        let workspace_root = scripts_dir.parent()?;
        Some(Self::new(workspace_root.join(SERVICES_DIR)))
    }

    pub fn services_root(&self) -> &Path {
        &self.services_root
    }

    /// Workspace root, i.e. the directory `pnpm install` runs in.
    pub fn workspace_root(&self) -> &Path {
        self.services_root
            .parent()
            .unwrap_or(self.services_root.as_path())
    }

    pub fn service_dir(&self, service_name: &str) -> PathBuf {
        self.services_root.join(service_name)
    }
}
