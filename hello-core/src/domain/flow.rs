//! Flow domain model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Name the hello-world flow runs and is deployed under
pub const HELLO_FLOW_NAME: &str = "hello-flow";

/// A flow known to the orchestration service
///
/// Deployments are attached to a flow by id, so the registrar has to resolve
/// the flow before it can publish any deployment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Flow {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub created: Option<DateTime<Utc>>,
}
