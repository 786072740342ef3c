//! # Isle Chatbot Service
//!
//! File: cli/src/commands/chatbot/mod.rs
//!
//! ## Overview
//!
//! `isle chatbot` runs Finn, the island's keyword-matching guide. It is a
//! stateless HTTP service: every `/chat` request is answered from a fixed
//! keyword table, with no sessions and no persistence.
//!
//! ## Architecture
//!
//! - `replies.rs`: The ordered keyword → reply table and its matcher
//! - `routes.rs`: Axum handlers for `/chat`, `/status`, and `/`
//!
//! ## Examples
//!
//! ```bash
//! # Listen on the default port (5001) on all interfaces
//! isle chatbot
//!
//! # Local-only, custom port, no CORS headers
//! isle chatbot --host 127.0.0.1 --port 6001 --no-cors
//!
//! # Ask a question
//! curl -X POST localhost:5001/chat -H 'content-type: application/json' \
//!      -d '{"message": "Where is the boat?"}'
//! ```
//!
use crate::common::server::{runtime, ServeArgs, ServerConfig};
use crate::core::config;
use crate::core::error::Result;
use clap::Parser;
use std::path::Path;
use tracing::info;

pub mod replies;
pub mod routes;

/// Name reported by `/status` and in the startup banner.
pub const SERVICE_NAME: &str = "chatbot";

/// Port used when neither the config file nor `--port` sets one.
pub const DEFAULT_PORT: u16 = 5001;

/// # Chatbot Command Arguments (`ChatbotArgs`)
#[derive(Parser, Debug)]
pub struct ChatbotArgs {
    #[command(flatten)]
    pub serve: ServeArgs,
}

/// # Handle Chatbot Command (`handle_chatbot`)
///
/// Loads configuration, resolves the listener settings, and serves the
/// chatbot routes until shutdown.
///
/// ## Errors
///
/// Fails if the configuration cannot be loaded or the address cannot be bound.
pub async fn handle_chatbot(args: ChatbotArgs, config_path: Option<&Path>) -> Result<()> {
    info!("Handling chatbot command with args: {:?}", args);

    let file_config = config::load_config(config_path)?;
    let server_config = ServerConfig::resolve(
        ServerConfig::with_default_port(DEFAULT_PORT),
        &file_config.chatbot,
        &args.serve,
    )?;
    info!("Effective chatbot config: {:?}", server_config);
    info!(
        "Known keywords: {}",
        replies::ISLAND_REPLIES
            .keywords()
            .collect::<Vec<_>>()
            .join(", ")
    );

    runtime::run_server(SERVICE_NAME, &server_config, routes::create_app()).await
}
