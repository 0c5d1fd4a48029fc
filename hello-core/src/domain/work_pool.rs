//! Work pool domain model

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A named execution pool that the service dispatches runs to
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkPool {
    pub id: Uuid,
    pub name: String,

    /// Worker type backing the pool (e.g. "docker", "process")
    #[serde(rename = "type")]
    pub pool_type: String,

    #[serde(default)]
    pub is_paused: bool,
}
