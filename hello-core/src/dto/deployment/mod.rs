//! Deployment DTOs for the orchestration service API

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

use crate::domain::deployment::DeploymentDescriptor;

/// A step a worker performs to fetch the flow's code before running it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PullStep {
    /// Clone the repository and check out a specific commit
    #[serde(rename = "prefect.deployments.steps.git_clone")]
    GitClone {
        repository: String,
        commit_sha: String,
    },
}

/// Request to create or update a deployment
///
/// The service upserts on `(flow_id, name)`, so re-running the registrar
/// replaces the previous definition in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDeployment {
    pub name: String,
    pub flow_id: Uuid,
    pub work_pool_name: String,
    pub entrypoint: String,
    pub pull_steps: Vec<PullStep>,
    pub job_variables: BTreeMap<String, String>,
}

impl CreateDeployment {
    /// Builds the request body for a descriptor attached to `flow_id`
    pub fn from_descriptor(descriptor: &DeploymentDescriptor, flow_id: Uuid) -> Self {
        Self {
            name: descriptor.name.clone(),
            flow_id,
            work_pool_name: descriptor.work_pool_name.clone(),
            entrypoint: descriptor.entrypoint.clone(),
            pull_steps: vec![PullStep::GitClone {
                repository: descriptor.source.url.clone(),
                commit_sha: descriptor.source.commit_sha.clone(),
            }],
            job_variables: descriptor.job_variables.clone(),
        }
    }
}
