//! # Isle Shared Server Plumbing (`common::server`)
//!
//! File: cli/src/common/server/mod.rs
//!
//! ## Overview
//!
//! Everything both services need in order to listen for HTTP traffic:
//! - `config`: Listener flags (`ServeArgs`) and their merge into `ServerConfig`
//! - `runtime`: Middleware, binding, and graceful shutdown
//!
//! It also defines the `/status` payload, which is identical in shape for
//! every service.
//!
use axum::Json;
use serde::Serialize;

pub mod config;
pub mod runtime;

pub use config::{ServeArgs, ServerConfig};

/// Body of every service's `GET /status`. Always reports `running`.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ServiceStatus {
    pub status: &'static str,
    pub service: &'static str,
}

impl ServiceStatus {
    /// Status for a service that is up and serving.
    pub fn running(service: &'static str) -> Self {
        Self {
            status: "running",
            service,
        }
    }
}

/// Convenience for handlers: the JSON response for `service`'s status.
pub fn status_response(service: &'static str) -> Json<ServiceStatus> {
    Json(ServiceStatus::running(service))
}
