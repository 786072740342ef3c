//! # Isle Configuration System
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! This module loads the optional configuration files shared by both
//! services. Each service reads its own section (`[chatbot]` or
//! `[navigation]`); every field is optional so a file only needs to name
//! what it overrides.
//!
//! Configuration sources (in order of precedence):
//! 1. An explicit `--config <path>` (replaces the two below)
//! 2. Project-specific `.isle.toml` in current directory or ancestors
//! 3. User-specific `config.toml` in the platform config directory
//!
//! Command-line flags are applied afterwards by
//! `common::server::config::ServerConfig::resolve`.
//!
//! ## Examples
//!
//! ```toml
//! [chatbot]
//! host = "127.0.0.1"
//! port = 6001
//! enable_cors = false
//!
//! [navigation]
//! port = 6000
//! static_dir = "~/island/static"
//! ```
//!
use crate::core::error::{IsleError, Result};
use anyhow::Context;
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

const PROJECT_CONFIG_FILENAME: &str = ".isle.toml";
const USER_CONFIG_FILENAME: &str = "config.toml";

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub chatbot: ServiceSection,
    #[serde(default)]
    pub navigation: NavigationSection,
}

/// Listener settings for the chatbot service.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ServiceSection {
    /// IP address to bind, kept as a string until resolution so a bad value
    /// is reported as a configuration error rather than a TOML one.
    pub host: Option<String>,
    pub port: Option<u16>,
    pub enable_cors: Option<bool>,
}

/// Listener settings plus the static asset directory for the navigation service.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct NavigationSection {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub enable_cors: Option<bool>,
    /// Directory served under `/static` (can use ~). Relative paths are
    /// taken from the directory of the file that set them.
    pub static_dir: Option<String>,
}

impl ServiceSection {
    /// Field-wise merge: values set in `over` win.
    fn merged_with(self, over: ServiceSection) -> ServiceSection {
        ServiceSection {
            host: over.host.or(self.host),
            port: over.port.or(self.port),
            enable_cors: over.enable_cors.or(self.enable_cors),
        }
    }
}

impl NavigationSection {
    /// The listener part of this section, in the shape shared with the chatbot.
    pub fn listener(&self) -> ServiceSection {
        ServiceSection {
            host: self.host.clone(),
            port: self.port,
            enable_cors: self.enable_cors,
        }
    }

    fn merged_with(self, over: NavigationSection) -> NavigationSection {
        NavigationSection {
            host: over.host.or(self.host),
            port: over.port.or(self.port),
            enable_cors: over.enable_cors.or(self.enable_cors),
            static_dir: over.static_dir.or(self.static_dir),
        }
    }
}

/// # Load Configuration (`load_config`)
///
/// Loads the effective file configuration. With an explicit path only that
/// file is read and it must exist; otherwise the user config and the nearest
/// project config are merged, both being optional.
pub fn load_config(explicit_path: Option<&Path>) -> Result<Config> {
    let config = match explicit_path {
        Some(path) => {
            if !path.is_file() {
                return Err(IsleError::Config(format!(
                    "Configuration file '{}' does not exist.",
                    path.display()
                ))
                .into());
            }
            info!("Loading configuration from: {}", path.display());
            load_config_from_path(path)?
        }
        None => {
            let user_config = load_user_config()?;
            let current_dir =
                std::env::current_dir().context("Failed to get current directory")?;
            let project_config = load_project_config(&current_dir)?;
            merge_configs(user_config.unwrap_or_default(), project_config)
        }
    };
    debug!("Final loaded configuration: {:?}", config);
    Ok(config)
}

fn load_user_config() -> Result<Option<Config>> {
    if let Some(proj_dirs) = ProjectDirs::from("com", "Isle", "isle") {
        let config_path = proj_dirs.config_dir().join(USER_CONFIG_FILENAME);
        if config_path.is_file() {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_project_config(start_dir: &Path) -> Result<Option<Config>> {
    if let Some(project_config_path) = find_project_config_path(start_dir) {
        info!(
            "Loading project configuration from: {}",
            project_config_path.display()
        );
        load_config_from_path(&project_config_path).map(Some)
    } else {
        debug!("No project configuration file (.isle.toml) found in current directory or ancestors.");
        Ok(None)
    }
}

/// Walks from `start_dir` towards the filesystem root looking for
/// `.isle.toml`. The search stops at the first directory containing `.git`.
fn find_project_config_path(start_dir: &Path) -> Option<PathBuf> {
    for dir in start_dir.ancestors() {
        let project_config = dir.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if dir.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                dir.display()
            );
            return None;
        }
    }
    None
}

fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    let mut config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))?;
    resolve_config_paths(&mut config, path.parent());
    Ok(config)
}

fn merge_configs(user: Config, project: Option<Config>) -> Config {
    match project {
        Some(project) => Config {
            chatbot: user.chatbot.merged_with(project.chatbot),
            navigation: user.navigation.merged_with(project.navigation),
        },
        None => user,
    }
}

/// Expands `~` in path settings, then anchors relative ones at `base_dir`
/// (the directory holding the config file they came from).
fn resolve_config_paths(config: &mut Config, base_dir: Option<&Path>) {
    if let Some(dir) = config.navigation.static_dir.as_mut() {
        let expanded = PathBuf::from(shellexpand::tilde(dir.as_str()).into_owned());
        let resolved = match base_dir {
            Some(base) if expanded.is_relative() => base.join(expanded),
            _ => expanded,
        };
        *dir = resolved.to_string_lossy().into_owned();
        debug!("Resolved static directory: {}", dir);
    }
}
