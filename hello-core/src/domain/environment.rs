//! Runtime environment reported by the greeting flow

use serde::{Deserialize, Serialize};

/// Where a flow run is executing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuntimeEnvironment {
    /// A Kubernetes pod (service-host variable present)
    Kubernetes,

    /// A Docker container (marker file present)
    Docker,

    /// Anything else
    Local,
}

impl RuntimeEnvironment {
    /// Lowercase label used in log output
    pub fn as_str(&self) -> &'static str {
        match self {
            RuntimeEnvironment::Kubernetes => "kubernetes",
            RuntimeEnvironment::Docker => "docker",
            RuntimeEnvironment::Local => "local",
        }
    }
}

impl std::fmt::Display for RuntimeEnvironment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
