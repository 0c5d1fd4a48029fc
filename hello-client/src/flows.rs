//! Flow-related API endpoints

use crate::OrchestratorClient;
use crate::error::Result;
use hello_core::domain::flow::Flow;
use hello_core::dto::flow::CreateFlow;
use reqwest::Request;

impl OrchestratorClient {
    /// Create a flow, or return the existing one with the same name
    pub async fn create_flow(&self, req: CreateFlow) -> Result<Flow> {
        tracing::debug!(flow = %req.name, "Creating flow");
        let request = self.create_flow_request(&req)?;

        self.execute(request).await
    }

    fn create_flow_request(&self, req: &CreateFlow) -> Result<Request> {
        Ok(self.client.post(self.url("/flows/")).json(req).build()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::Method;

    #[test]
    fn test_create_flow_request() {
        let client = OrchestratorClient::new("http://127.0.0.1:4200/api");
        let request = client
            .create_flow_request(&CreateFlow {
                name: "hello-flow".to_string(),
            })
            .unwrap();

        assert_eq!(request.method(), Method::POST);
        assert_eq!(request.url().as_str(), "http://127.0.0.1:4200/api/flows/");

        let body = request.body().and_then(|b| b.as_bytes()).unwrap();
        let json: serde_json::Value = serde_json::from_slice(body).unwrap();
        assert_eq!(json, serde_json::json!({ "name": "hello-flow" }));
    }
}
