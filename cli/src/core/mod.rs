//! # Isle Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the core infrastructure shared by both services:
//! - `config`: Configuration file loading and merging
//! - `error`: Error types and the crate-wide `Result` alias
//!
//! ```rust
//! use crate::core::config; // For loading configuration
//! use crate::core::error::{IsleError, Result}; // For error handling
//! ```
//!
pub mod config;
pub mod error;
