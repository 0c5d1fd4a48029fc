//! Deployment-related API endpoints

use crate::OrchestratorClient;
use crate::error::Result;
use hello_core::domain::deployment::Deployment;
use hello_core::dto::deployment::CreateDeployment;
use reqwest::Request;

impl OrchestratorClient {
    /// Create a deployment, replacing any existing one with the same flow and name
    ///
    /// # Arguments
    /// * `req` - The deployment creation request
    ///
    /// # Returns
    /// The stored deployment
    ///
    /// # Example
    /// ```no_run
    /// # use hello_client::OrchestratorClient;
    /// # use hello_core::dto::deployment::CreateDeployment;
    /// # use std::collections::BTreeMap;
    /// # async fn example(flow_id: uuid::Uuid) -> anyhow::Result<()> {
    /// let client = OrchestratorClient::new("http://127.0.0.1:4200/api");
    /// let deployment = client.create_deployment(CreateDeployment {
    ///     name: "hello:local-cpu".to_string(),
    ///     flow_id,
    ///     work_pool_name: "local-cpu-pool".to_string(),
    ///     entrypoint: "hello-flow/src/flow.rs:hello_flow".to_string(),
    ///     pull_steps: Vec::new(),
    ///     job_variables: BTreeMap::new(),
    /// }).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn create_deployment(&self, req: CreateDeployment) -> Result<Deployment> {
        tracing::debug!(
            deployment = %req.name,
            work_pool = %req.work_pool_name,
            "Creating deployment"
        );
        let request = self.create_deployment_request(&req)?;

        self.execute(request).await
    }

    fn create_deployment_request(&self, req: &CreateDeployment) -> Result<Request> {
        Ok(self.client.post(self.url("/deployments/")).json(req).build()?)
    }
}
