//! # Isle Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//!
//! ## Overview
//!
//! Shared building blocks used by the service commands, kept apart from
//! service-specific logic (`commands::`) and core infrastructure (`core::`).
//!
//! - **`server`**: Listener configuration, middleware, and the serve loop.
//!

/// Listener configuration, middleware, and the graceful-shutdown serve loop.
pub mod server;
