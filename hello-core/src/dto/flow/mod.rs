//! Flow DTOs

use serde::{Deserialize, Serialize};

/// Request to create (or look up) a flow by name
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateFlow {
    pub name: String,
}
