//! Hello Pipeline HTTP Client
//!
//! A small, type-safe HTTP client for the orchestration service API that
//! deployments are registered with.
//!
//! # Example
//!
//! ```no_run
//! use hello_client::OrchestratorClient;
//! use hello_core::dto::flow::CreateFlow;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = OrchestratorClient::new("http://127.0.0.1:4200/api");
//!
//!     let flow = client.create_flow(CreateFlow {
//!         name: "hello-flow".to_string(),
//!     }).await?;
//!
//!     println!("Flow id: {}", flow.id);
//!     Ok(())
//! }
//! ```

pub mod error;
mod deployments;
mod flows;
mod registry;
mod work_pools;

// Re-export commonly used types
pub use error::{ClientError, Result};
pub use registry::DeploymentRegistry;

use reqwest::Client;
use serde::de::DeserializeOwned;

/// HTTP client for the orchestration service API
///
/// Endpoints are grouped by resource:
/// - Flows (create)
/// - Deployments (create/upsert)
/// - Work pools (read)
#[derive(Debug, Clone)]
pub struct OrchestratorClient {
    /// Base URL of the API (e.g., "http://127.0.0.1:4200/api")
    base_url: String,
    /// HTTP client instance
    client: Client,
}

impl OrchestratorClient {
    /// Create a new orchestrator client
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the API (e.g., "http://127.0.0.1:4200/api")
    ///
    /// # Example
    /// ```
    /// use hello_client::OrchestratorClient;
    ///
    /// let client = OrchestratorClient::new("http://127.0.0.1:4200/api");
    /// ```
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, Client::new())
    }

    /// Create a new orchestrator client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    /// Get the base URL of the API
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    // =============================================================================
    // Request Execution
    // =============================================================================

    /// Send a built request and deserialize the JSON response
    ///
    /// Non-success status codes are turned into [`ClientError::ApiError`]
    /// carrying the response body as the message.
    async fn execute<T: DeserializeOwned>(&self, request: reqwest::Request) -> Result<T> {
        let response = self.client.execute(request).await?;
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
    }
}
