//! Hello Pipeline Core
//!
//! Core types shared by the deployment registrar and the greeting flow.
//!
//! This crate contains:
//! - Domain types: Deployments, flows, work pools, runtime environments and log entries
//! - DTOs: Request bodies sent to the orchestration service API

pub mod domain;
pub mod dto;
