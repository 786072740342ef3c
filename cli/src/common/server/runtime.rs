//! # Isle HTTP Server Runtime
//!
//! File: cli/src/common/server/runtime.rs
//!
//! ## Overview
//!
//! Runs one service's Axum router until shutdown:
//! 1. Wrap the router with tracing and CORS middleware
//! 2. Bind the configured address (a bound port is fatal, there is no fallback)
//! 3. Print connection information
//! 4. Serve with graceful shutdown on Ctrl+C / SIGTERM
//!
use super::config::ServerConfig;
use crate::core::error::{IsleError, Result};
use anyhow::Context;
use axum::Router;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{error, info, Level};

/// # Run HTTP Server (`run_server`)
///
/// Binds `config`'s address and serves `app` (with middleware applied)
/// until a shutdown signal arrives.
///
/// ## Errors
///
/// - `IsleError::Bind` if the address cannot be bound (e.g. port in use).
/// - The Axum server itself encounters a fatal error during operation.
pub async fn run_server(service: &str, config: &ServerConfig, app: Router) -> Result<()> {
    let addr = SocketAddr::new(config.host, config.port);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| IsleError::Bind { addr, source })?;

    let app = with_middleware(app, config.enable_cors);

    println!("\n=================================================================");
    println!("🏝️  Mystery Island {} service", service);
    println!("🌐 Local URL:         http://localhost:{}", addr.port());
    println!("⚙️  Binding to address: {}", addr);
    println!("🔒 CORS enabled:      {}", config.enable_cors);
    println!("=================================================================\n");

    info!("Starting {} service on {}", service, addr);
    println!("Server starting! Press Ctrl+C to stop.");

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    println!("\nServer shutdown complete.");
    Ok(())
}

/// # Apply Middleware (`with_middleware`)
///
/// Adds request tracing and, when `enable_cors` is set, permissive CORS.
pub fn with_middleware(app: Router, enable_cors: bool) -> Router {
    let cors_layer = if enable_cors {
        info!("CORS middleware enabled (permissive).");
        CorsLayer::permissive()
    } else {
        info!("CORS middleware disabled.");
        CorsLayer::new() // Effectively a no-op layer.
    };

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::default().include_headers(true))
        .on_request(DefaultOnRequest::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    app.layer(
        ServiceBuilder::new()
            .layer(trace_layer) // Apply tracing first.
            .layer(cors_layer), // Then apply CORS.
    )
}

/// Resolves when Ctrl+C or (on Unix) SIGTERM is received.
async fn shutdown_signal() {
    let ctrl_c = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, initiating graceful shutdown..."),
            Err(e) => {
                error!("Failed to install Ctrl+C handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut term) => {
                term.recv().await;
                info!("Received SIGTERM, initiating graceful shutdown...");
            }
            Err(e) => {
                error!(
                    "Failed to install SIGTERM handler: {}. Shutdown on SIGTERM might not work.",
                    e
                );
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
