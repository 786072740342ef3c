//! # Isle Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! One module per service subcommand. Each defines its own arguments
//! structure and a `handle_*` function that loads configuration and runs
//! the service until shutdown. The two services share nothing at runtime.
//!
//! - `chatbot`: Keyword-matching guide (`POST /chat`)
//! - `navigation`: Map page and canned directions (`GET /directions`)
//!

/// The keyword-matching chatbot service.
pub mod chatbot;
/// The map page and directions service.
pub mod navigation;
