//! # Isle Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types used throughout the Isle services.
//! Request handling never fails: every HTTP input is normalized into a valid
//! response. The errors here are process-level failures that stop a service
//! before (or while) it serves traffic.
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `IsleError`: A custom error enum using `thiserror` for specific failures
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling
//!
//! ## Examples
//!
//! ```rust
//! // Return a specific error type
//! return Err(IsleError::Config(format!("Invalid host '{}'", host)))?;
//!
//! // Add context to errors using anyhow
//! let content = fs::read_to_string(&path)
//!     .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
//! ```
//!
use std::net::SocketAddr;
use thiserror::Error;

/// Custom error type for the Isle services.
#[derive(Error, Debug)]
pub enum IsleError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to bind {addr}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("Template rendering error")]
    Template {
        #[source]
        source: tera::Error,
    },
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;
