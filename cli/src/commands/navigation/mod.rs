//! # Isle Navigation Service
//!
//! File: cli/src/commands/navigation/mod.rs
//!
//! ## Overview
//!
//! `isle navigation` serves the island map page and the canned directions
//! its icons ask for. Directions are fixed text per destination; there is
//! no pathfinding.
//!
//! ## Architecture
//!
//! - `directions.rs`: The destination → steps table
//! - `page.rs`: The HTML map page and its clickable icons
//! - `routes.rs`: Axum handlers for `/`, `/status`, `/directions`, `/static`
//!
//! ## Examples
//!
//! ```bash
//! # Listen on the default port (5000), serving ./static under /static
//! isle navigation
//!
//! # Custom asset directory and port
//! isle navigation --static-dir ./public --port 8080
//!
//! curl 'localhost:5000/directions?to=maze'
//! ```
//!
use crate::common::server::{runtime, ServeArgs, ServerConfig};
use crate::core::config;
use crate::core::error::Result;
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

pub mod directions;
pub mod page;
pub mod routes;

/// Name reported by `/status` and in the startup banner.
pub const SERVICE_NAME: &str = "navigation";

/// Port used when neither the config file nor `--port` sets one.
pub const DEFAULT_PORT: u16 = 5000;

/// Static asset directory used when neither the config file nor `--static-dir` sets one.
pub const DEFAULT_STATIC_DIR: &str = "static";

/// # Navigation Command Arguments (`NavigationArgs`)
#[derive(Parser, Debug)]
pub struct NavigationArgs {
    #[command(flatten)]
    pub serve: ServeArgs,

    /// Directory whose files are served under `/static`.
    /// Defaults to `./static`.
    #[arg(long)]
    pub static_dir: Option<PathBuf>,
}

/// # Handle Navigation Command (`handle_navigation`)
///
/// Loads configuration, resolves the listener settings and static directory,
/// and serves the navigation routes until shutdown.
///
/// ## Errors
///
/// Fails if the configuration cannot be loaded or the address cannot be bound.
/// A missing static directory is only a warning.
pub async fn handle_navigation(args: NavigationArgs, config_path: Option<&Path>) -> Result<()> {
    info!("Handling navigation command with args: {:?}", args);

    let file_config = config::load_config(config_path)?;
    let server_config = ServerConfig::resolve(
        ServerConfig::with_default_port(DEFAULT_PORT),
        &file_config.navigation.listener(),
        &args.serve,
    )?;
    let static_dir = resolve_static_dir(args.static_dir, file_config.navigation.static_dir);
    info!(
        "Effective navigation config: {:?}, static dir: {}",
        server_config,
        static_dir.display()
    );

    if !static_dir.is_dir() {
        warn!(
            "Static directory '{}' does not exist; /static requests will return 404.",
            static_dir.display()
        );
    }

    let app = routes::create_app(&static_dir)?;
    runtime::run_server(SERVICE_NAME, &server_config, app).await
}

/// CLI flag, then config file, then `DEFAULT_STATIC_DIR`.
fn resolve_static_dir(from_args: Option<PathBuf>, from_file: Option<String>) -> PathBuf {
    from_args
        .or_else(|| from_file.map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR))
}
