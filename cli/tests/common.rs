//! # Isle Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration test files. Every command built here
//! runs with an explicit, empty `--config` file so a developer's own
//! `.isle.toml` or user config cannot leak into the tests.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::net::{SocketAddr, TcpListener};
use std::path::Path;
use std::process::{Child, Stdio};
use std::time::Duration;
use tempfile::TempDir;

/// # Get Isle Command (`isle_cmd`)
///
/// An `assert_cmd::Command` for the compiled `isle` binary.
pub fn isle_cmd() -> Command {
    Command::cargo_bin("isle").expect("Failed to find isle binary for testing")
}

/// A temporary directory holding `island.toml` with the given contents.
pub fn config_dir(contents: &str) -> TempDir {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    std::fs::write(dir.path().join("island.toml"), contents).expect("Failed to write config");
    dir
}

/// `isle --config <dir>/island.toml`, run from inside `dir`.
pub fn isle_cmd_in(dir: &Path) -> Command {
    let mut cmd = isle_cmd();
    cmd.current_dir(dir)
        .env_remove("ISLE_CONFIG")
        .env_remove("RUST_LOG")
        .arg("--config")
        .arg(dir.join("island.toml"));
    cmd
}

/// Asks the OS for a port that is free right now.
pub fn free_port() -> u16 {
    TcpListener::bind("127.0.0.1:0")
        .and_then(|listener| listener.local_addr())
        .map(|addr| addr.port())
        .expect("Failed to reserve a local port")
}

/// A service process that is killed when dropped.
pub struct RunningService {
    child: Child,
    pub addr: SocketAddr,
}

impl RunningService {
    /// Absolute URL of `path` on this service.
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

impl Drop for RunningService {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

/// Starts `isle <service>` on a free local port and waits until it accepts connections.
pub async fn spawn_service(dir: &Path, service: &str, extra_args: &[&str]) -> RunningService {
    let port = free_port();
    let child = std::process::Command::new(env!("CARGO_BIN_EXE_isle"))
        .current_dir(dir)
        .env_remove("ISLE_CONFIG")
        .arg("--config")
        .arg(dir.join("island.toml"))
        .arg(service)
        .args(["--host", "127.0.0.1", "--port", &port.to_string()])
        .args(extra_args)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .expect("Failed to start isle");
    let running = RunningService {
        child,
        addr: SocketAddr::from(([127, 0, 0, 1], port)),
    };

    for _ in 0..100 {
        if tokio::net::TcpStream::connect(running.addr).await.is_ok() {
            return running;
        }
        tokio::time::sleep(Duration::from_millis(50)).await;
    }
    panic!("isle {} did not start listening on {}", service, running.addr);
}
