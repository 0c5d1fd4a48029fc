//! Data Transfer Objects for the orchestration service API
//!
//! Request bodies are kept separate from the domain records the service
//! returns, since the service assigns ids and timestamps on its side.

pub mod deployment;
pub mod flow;
