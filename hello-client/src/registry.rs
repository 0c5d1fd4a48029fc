//! Registration seam used by the deployment registrar

use async_trait::async_trait;
use hello_core::domain::deployment::Deployment;
use hello_core::domain::flow::Flow;
use hello_core::domain::work_pool::WorkPool;
use hello_core::dto::deployment::CreateDeployment;
use hello_core::dto::flow::CreateFlow;

use crate::OrchestratorClient;
use crate::error::Result;

/// The subset of the orchestration API needed to publish deployments
#[async_trait]
pub trait DeploymentRegistry: Send + Sync {
    /// Resolves the flow deployments will be attached to, creating it if needed
    async fn ensure_flow(&self, name: &str) -> Result<Flow>;

    /// Creates or replaces a deployment
    async fn register_deployment(&self, req: CreateDeployment) -> Result<Deployment>;

    /// Looks up a work pool by name
    async fn find_work_pool(&self, name: &str) -> Result<WorkPool>;
}

#[async_trait]
impl DeploymentRegistry for OrchestratorClient {
    async fn ensure_flow(&self, name: &str) -> Result<Flow> {
        self.create_flow(CreateFlow {
            name: name.to_string(),
        })
        .await
    }

    async fn register_deployment(&self, req: CreateDeployment) -> Result<Deployment> {
        self.create_deployment(req).await
    }

    async fn find_work_pool(&self, name: &str) -> Result<WorkPool> {
        self.read_work_pool(name).await
    }
}
