//! # Isle Listener Configuration
//!
//! File: cli/src/common/server/config.rs
//!
//! ## Overview
//!
//! This module turns the listener settings of one service into a final
//! `ServerConfig`. It combines settings from:
//! 1. Command-line arguments (highest priority)
//! 2. The service's section of the loaded configuration file
//! 3. The service's built-in defaults (lowest priority)
//!
//! The resolved config is what `runtime::run_server` binds to.
//!
use crate::core::config::ServiceSection;
use crate::core::error::{IsleError, Result};
use clap::Args;
use std::net::{IpAddr, Ipv4Addr};
use tracing::debug;

/// # Listener Arguments (`ServeArgs`)
///
/// Flags shared by every service subcommand. They are optional so the
/// merge can tell an explicit flag from an absent one.
#[derive(Args, Debug, Clone, Default)]
pub struct ServeArgs {
    /// Port to listen on. Defaults to the service's standard port.
    #[arg(long, short)]
    pub port: Option<u16>,

    /// IP address to bind. Use `127.0.0.1` to accept only local connections.
    /// Defaults to `0.0.0.0` (all interfaces).
    #[arg(long)]
    pub host: Option<IpAddr>,

    /// Disables Cross-Origin Resource Sharing (CORS) headers.
    /// By default, CORS is enabled (permissive).
    #[arg(long)]
    pub no_cors: bool,
}

/// # Effective Listener Configuration (`ServerConfig`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// The network port the server will listen on.
    pub port: u16,
    /// The network IP address the server will bind to.
    pub host: IpAddr,
    /// Indicates whether CORS headers should be enabled.
    pub enable_cors: bool,
}

impl ServerConfig {
    /// Defaults for a service listening on `port` on all interfaces.
    pub fn with_default_port(port: u16) -> Self {
        Self {
            port,
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            enable_cors: true,
        }
    }

    /// # Resolve Configuration (`resolve`)
    ///
    /// Layers file settings over `defaults`, then explicit CLI flags over
    /// both. `--no-cors` always wins when present.
    ///
    /// ## Errors
    ///
    /// Returns `IsleError::Config` if the file's `host` is not a valid IP address.
    pub fn resolve(defaults: ServerConfig, file: &ServiceSection, args: &ServeArgs) -> Result<Self> {
        let file_host = match file.host.as_deref() {
            Some(host_str) => Some(host_str.parse::<IpAddr>().map_err(|e| {
                IsleError::Config(format!("Invalid host '{}' in config file: {}", host_str, e))
            })?),
            None => None,
        };

        let config = ServerConfig {
            port: args.port.or(file.port).unwrap_or(defaults.port),
            host: args.host.or(file_host).unwrap_or(defaults.host),
            enable_cors: !args.no_cors && file.enable_cors.unwrap_or(defaults.enable_cors),
        };
        debug!("Resolved listener config: {:?}", config);
        Ok(config)
    }
}
