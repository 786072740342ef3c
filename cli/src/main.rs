//! # Isle Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! This file serves as the main entry point for the `isle` binary, which runs
//! one of the Mystery Island web services per invocation. It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Routing execution to the selected service
//!
//! ## Examples
//!
//! ```bash
//! # Run the chatbot on port 5001
//! isle chatbot
//!
//! # Run the navigation page on port 5000 with request logging
//! isle -v navigation
//!
//! # Use a specific configuration file
//! isle --config ./island.toml chatbot
//! ```
//!
//! Command processing flow:
//! 1. Parse command-line args via Clap
//! 2. Configure logging based on verbosity level
//! 3. Route to the service handler
//! 4. Format and display any errors that occur
//!
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

mod commands; // Service subcommands (chatbot, navigation)
mod common; // Shared server plumbing
mod core; // Core infrastructure (errors, config)

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "isle",
    about = "🏝️ Isle: Mystery Island web services",
    long_about = "Runs one of the Mystery Island web services:\n\
                  the keyword chatbot or the map navigation page.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    /// Read settings from this file instead of the user and project config files.
    #[arg(long, global = true, env = "ISLE_CONFIG")]
    config: Option<PathBuf>,
}

/// Enum defining all available services.
#[derive(Parser, Debug)]
enum Commands {
    /// Run the keyword-matching chatbot (default port 5001).
    #[command(alias = "c")]
    Chatbot(commands::chatbot::ChatbotArgs),
    /// Run the map page and directions service (default port 5000).
    #[command(alias = "n")]
    Navigation(commands::navigation::NavigationArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let config_path = cli.config.as_deref();
    let command_result = match cli.command {
        Commands::Chatbot(args) => commands::chatbot::handle_chatbot(args, config_path).await,
        Commands::Navigation(args) => {
            commands::navigation::handle_navigation(args, config_path).await
        }
    };

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}
