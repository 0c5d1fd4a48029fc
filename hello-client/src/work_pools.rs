//! Work pool API endpoints

use crate::OrchestratorClient;
use crate::error::Result;
use hello_core::domain::work_pool::WorkPool;
use reqwest::Request;

impl OrchestratorClient {
    /// Get a work pool by name
    ///
    /// # Arguments
    /// * `name` - The work pool name (e.g. "docker-cpu-pool")
    pub async fn read_work_pool(&self, name: &str) -> Result<WorkPool> {
        let request = self.read_work_pool_request(name)?;

        self.execute(request).await
    }

    fn read_work_pool_request(&self, name: &str) -> Result<Request> {
        let url = self.url(&format!("/work_pools/{}", name));
        Ok(self.client.get(&url).build()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::Method;

    #[test]
    fn test_read_work_pool_request() {
        let client = OrchestratorClient::new("http://127.0.0.1:4200/api/");
        let request = client.read_work_pool_request("docker-cpu-pool").unwrap();

        assert_eq!(request.method(), Method::GET);
        assert_eq!(
            request.url().as_str(),
            "http://127.0.0.1:4200/api/work_pools/docker-cpu-pool"
        );
        assert!(request.body().is_none());
    }
}
