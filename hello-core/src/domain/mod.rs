//! Core domain types
//!
//! These types describe what the registrar publishes to the orchestration
//! service and what the greeting flow reports when it runs.

pub mod deployment;
pub mod environment;
pub mod flow;
pub mod log;
pub mod work_pool;
