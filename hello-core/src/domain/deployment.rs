//! Deployment domain types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// Job variable key carrying the container image reference
pub const IMAGE_JOB_VARIABLE: &str = "image";

/// Remote repository checkout a deployment runs from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitRepository {
    pub url: String,
    pub commit_sha: String,
}

impl GitRepository {
    pub fn new(url: impl Into<String>, commit_sha: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            commit_sha: commit_sha.into(),
        }
    }
}

/// A deployment as the registrar describes it, before submission
///
/// `name` and `work_pool_name` together identify the deployment slot in the
/// orchestration service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentDescriptor {
    pub name: String,
    pub work_pool_name: String,
    pub source: GitRepository,
    pub entrypoint: String,
    #[serde(default)]
    pub job_variables: BTreeMap<String, String>,
}

impl DeploymentDescriptor {
    /// Creates a descriptor with no job variables
    pub fn new(
        name: impl Into<String>,
        work_pool_name: impl Into<String>,
        source: GitRepository,
        entrypoint: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            work_pool_name: work_pool_name.into(),
            source,
            entrypoint: entrypoint.into(),
            job_variables: BTreeMap::new(),
        }
    }

    /// Adds a job variable, replacing any previous value for the key
    pub fn with_job_variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.job_variables.insert(key.into(), value.into());
        self
    }

    /// The `(name, work pool)` pair identifying this deployment slot
    pub fn slot(&self) -> (&str, &str) {
        (&self.name, &self.work_pool_name)
    }

    /// Container image reference, when one was supplied as a job variable
    pub fn image(&self) -> Option<&str> {
        self.job_variables.get(IMAGE_JOB_VARIABLE).map(String::as_str)
    }
}

/// A deployment record as returned by the orchestration service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deployment {
    pub id: Uuid,
    pub name: String,
    pub flow_id: Uuid,
    #[serde(default)]
    pub work_pool_name: Option<String>,
    #[serde(default)]
    pub entrypoint: Option<String>,
    #[serde(default)]
    pub job_variables: BTreeMap<String, serde_json::Value>,
    #[serde(default)]
    pub created: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source() -> GitRepository {
        GitRepository::new("https://example.com/repo.git", "abc123")
    }

    #[test]
    fn test_descriptor_without_job_variables() {
        let descriptor = DeploymentDescriptor::new("hello:local-cpu", "local-cpu-pool", source(), "a:b");
        assert!(descriptor.job_variables.is_empty());
        assert_eq!(descriptor.image(), None);
        assert_eq!(descriptor.slot(), ("hello:local-cpu", "local-cpu-pool"));
    }

    #[test]
    fn test_descriptor_image_job_variable() {
        let descriptor = DeploymentDescriptor::new("hello:docker-cpu", "docker-cpu-pool", source(), "a:b")
            .with_job_variable(IMAGE_JOB_VARIABLE, "ghcr.io/acme/app:1")
            .with_job_variable(IMAGE_JOB_VARIABLE, "ghcr.io/acme/app:2");

        assert_eq!(descriptor.job_variables.len(), 1);
        assert_eq!(descriptor.image(), Some("ghcr.io/acme/app:2"));
    }

    #[test]
    fn test_deployment_deserializes_service_response() {
        let json = serde_json::json!({
            "id": "5b0f4c9e-2f5e-4a57-9a51-0c2a3f1d8e11",
            "name": "hello:docker-cpu",
            "flow_id": "0d6a3c2b-7f0e-4c1d-8f3e-2b9a6d5c4e10",
            "work_pool_name": "docker-cpu-pool",
            "entrypoint": "hello-flow/src/flow.rs:hello_flow",
            "job_variables": { "image": "ghcr.io/acme/app:1" },
            "created": "2026-01-02T03:04:05Z",
            "tags": ["ignored"]
        });

        let deployment: Deployment = serde_json::from_value(json).unwrap();
        assert_eq!(deployment.name, "hello:docker-cpu");
        assert_eq!(deployment.work_pool_name.as_deref(), Some("docker-cpu-pool"));
        assert_eq!(deployment.job_variables["image"], "ghcr.io/acme/app:1");
        assert!(deployment.updated.is_none());
    }
}
