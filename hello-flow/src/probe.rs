//! Host environment probe
//!
//! Abstracts the two checks environment detection relies on so the flow's
//! tasks can be run against a fake host in tests.

use std::path::{Path, PathBuf};

/// Variable Kubernetes injects into every pod
pub const KUBERNETES_SERVICE_HOST: &str = "KUBERNETES_SERVICE_HOST";

/// Marker file Docker creates at the container root
pub const DOCKER_MARKER_PATH: &str = "/.dockerenv";

/// Read-only view of the host a flow runs on
pub trait EnvironmentProbe: Send + Sync {
    /// Returns true when `key` is set to a non-empty value
    fn var_is_set(&self, key: &str) -> bool;

    /// Returns true when `path` exists; access failures count as absent
    fn path_exists(&self, path: &Path) -> bool;
}

/// Probe backed by the real process environment and filesystem
#[derive(Debug, Clone)]
pub struct HostProbe {
    /// Directory absolute paths are resolved against
    root: PathBuf,
}

impl HostProbe {
    /// Creates a probe that resolves absolute paths under `root` instead of `/`
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        match path.strip_prefix("/") {
            Ok(relative) => self.root.join(relative),
            Err(_) => self.root.join(path),
        }
    }
}

impl Default for HostProbe {
    fn default() -> Self {
        Self::with_root("/")
    }
}

impl EnvironmentProbe for HostProbe {
    fn var_is_set(&self, key: &str) -> bool {
        std::env::var_os(key).is_some_and(|value| !value.is_empty())
    }

    fn path_exists(&self, path: &Path) -> bool {
        self.resolve(path).try_exists().unwrap_or(false)
    }
}
