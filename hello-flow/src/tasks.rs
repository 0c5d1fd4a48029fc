//! Tasks composed by the greeting flow

use hello_core::domain::environment::RuntimeEnvironment;
use std::path::Path;

use crate::probe::{DOCKER_MARKER_PATH, EnvironmentProbe, KUBERNETES_SERVICE_HOST};

pub const GREET_TASK: &str = "greet";
pub const DETECT_ENVIRONMENT_TASK: &str = "detect_environment";

/// Construct a greeting for the provided name
pub fn greet(name: &str) -> String {
    format!("Hello, {}!", name)
}

/// Report which runtime environment the flow is executing in
///
/// Kubernetes takes priority over Docker, since pods usually run inside
/// containers that also carry the Docker marker.
pub fn detect_environment(probe: &dyn EnvironmentProbe) -> RuntimeEnvironment {
    if probe.var_is_set(KUBERNETES_SERVICE_HOST) {
        return RuntimeEnvironment::Kubernetes;
    }
    if probe.path_exists(Path::new(DOCKER_MARKER_PATH)) {
        return RuntimeEnvironment::Docker;
    }
    RuntimeEnvironment::Local
}
