//! Configuration file loading with precedence handling.
//!
//! Precedence, lowest to highest: hardcoded defaults, config file,
//! environment variables, CLI arguments.

use crate::lazy::{LazyOptions, LazyTuning};
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read an explicitly requested config file.
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional; unset fields fall back to defaults.
/// Corresponds to `~/.config/icv/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Issues endpoint URL.
    #[serde(default)]
    pub api_url: Option<String>,

    /// API token for the Authorization header.
    #[serde(default)]
    pub token: Option<String>,

    /// Milliseconds after which off-viewport cards load anyway.
    #[serde(default)]
    pub load_after_initial_rendering_ms: Option<u64>,

    /// Placeholder width bound in cells.
    #[serde(default)]
    pub max_width: Option<u16>,

    /// Placeholder height bound in cells.
    #[serde(default)]
    pub max_height: Option<u16>,

    /// Near-viewport safety margin in cells.
    #[serde(default)]
    pub near_viewport_margin: Option<u16>,

    /// Viewport event throttle window in milliseconds.
    #[serde(default)]
    pub throttle_ms: Option<u64>,

    /// Settle wait before the initial visibility check, in milliseconds.
    #[serde(default)]
    pub render_wait_ms: Option<u64>,

    /// Path to the log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Issues endpoint URL.
    pub api_url: String,
    /// API token, if any.
    pub token: Option<String>,
    /// Deferred-load delay in milliseconds, if configured.
    pub load_after_initial_rendering_ms: Option<u64>,
    /// Placeholder width bound.
    pub max_width: Option<u16>,
    /// Placeholder height bound.
    pub max_height: Option<u16>,
    /// Near-viewport safety margin in cells.
    pub near_viewport_margin: u16,
    /// Viewport event throttle window in milliseconds.
    pub throttle_ms: u64,
    /// Settle wait before the initial visibility check, in milliseconds.
    pub render_wait_ms: u64,
    /// Path to the log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.github.com/issues".to_string(),
            token: None,
            load_after_initial_rendering_ms: None,
            max_width: None,
            max_height: None,
            near_viewport_margin: crate::lazy::NEAR_VIEWPORT_MARGIN,
            throttle_ms: crate::lazy::THROTTLE_WINDOW.as_millis() as u64,
            render_wait_ms: crate::lazy::RENDER_WAIT.as_millis() as u64,
            log_file_path: default_log_path(),
        }
    }
}

impl ResolvedConfig {
    /// Wrap-time lazy-load options derived from this configuration.
    pub fn lazy_options(&self) -> LazyOptions {
        LazyOptions {
            max_width: self.max_width,
            max_height: self.max_height,
            load_after_initial_rendering: self
                .load_after_initial_rendering_ms
                .map(Duration::from_millis),
        }
    }

    /// Runtime lazy-load tuning derived from this configuration.
    pub fn lazy_tuning(&self) -> LazyTuning {
        LazyTuning {
            throttle_window: Duration::from_millis(self.throttle_ms),
            render_wait: Duration::from_millis(self.render_wait_ms),
            near_viewport_margin: self.near_viewport_margin,
        }
    }
}

/// Resolve the default log file path, `~/.local/state/icv/icv.log` on
/// Unix-like systems or the platform equivalent elsewhere.
pub fn default_log_path() -> PathBuf {
    dirs::state_dir()
        .or_else(dirs::data_local_dir)
        .unwrap_or_else(std::env::temp_dir)
        .join("icv")
        .join("icv.log")
}

/// Resolve the default config file path, `~/.config/icv/config.toml`.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("icv").join("config.toml"))
}

/// Load the config file honoring precedence.
///
/// An explicitly supplied path must exist and parse; errors are surfaced.
/// Without an explicit path, the default location is tried and silently
/// skipped when absent.
///
/// # Errors
///
/// Returns `ConfigError` when an explicit path cannot be read or either
/// path contains invalid TOML.
pub fn load_config_with_precedence(
    explicit: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    match explicit {
        Some(path) => {
            let content =
                std::fs::read_to_string(&path).map_err(|err| ConfigError::ReadError {
                    path: path.clone(),
                    reason: err.to_string(),
                })?;
            parse_config(&content, &path).map(Some)
        }
        None => match default_config_path() {
            Some(path) if path.exists() => {
                let content =
                    std::fs::read_to_string(&path).map_err(|err| ConfigError::ReadError {
                        path: path.clone(),
                        reason: err.to_string(),
                    })?;
                parse_config(&content, &path).map(Some)
            }
            _ => Ok(None),
        },
    }
}

fn parse_config(content: &str, path: &std::path::Path) -> Result<ConfigFile, ConfigError> {
    toml::from_str(content).map_err(|err| ConfigError::ParseError {
        path: path.to_path_buf(),
        reason: err.to_string(),
    })
}

/// Merge a loaded config file over the hardcoded defaults.
pub fn merge_config(file: Option<ConfigFile>) -> ResolvedConfig {
    let mut resolved = ResolvedConfig::default();
    let Some(file) = file else {
        return resolved;
    };

    if let Some(api_url) = file.api_url {
        resolved.api_url = api_url;
    }
    if file.token.is_some() {
        resolved.token = file.token;
    }
    if file.load_after_initial_rendering_ms.is_some() {
        resolved.load_after_initial_rendering_ms = file.load_after_initial_rendering_ms;
    }
    if file.max_width.is_some() {
        resolved.max_width = file.max_width;
    }
    if file.max_height.is_some() {
        resolved.max_height = file.max_height;
    }
    if let Some(margin) = file.near_viewport_margin {
        resolved.near_viewport_margin = margin;
    }
    if let Some(throttle_ms) = file.throttle_ms {
        resolved.throttle_ms = throttle_ms;
    }
    if let Some(render_wait_ms) = file.render_wait_ms {
        resolved.render_wait_ms = render_wait_ms;
    }
    if let Some(log_file_path) = file.log_file_path {
        resolved.log_file_path = log_file_path;
    }
    resolved
}

/// Apply environment variable overrides.
///
/// `ICV_API_URL` overrides the endpoint; `ICV_TOKEN` (or `GITHUB_TOKEN` as
/// a fallback) overrides the token.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(url) = std::env::var("ICV_API_URL") {
        if !url.is_empty() {
            config.api_url = url;
        }
    }
    if let Ok(token) = std::env::var("ICV_TOKEN") {
        if !token.is_empty() {
            config.token = Some(token);
        }
    } else if let Ok(token) = std::env::var("GITHUB_TOKEN") {
        if !token.is_empty() {
            config.token = Some(token);
        }
    }
    config
}

/// Apply CLI argument overrides (highest precedence).
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    url: Option<String>,
    token: Option<String>,
    delay_ms: Option<u64>,
) -> ResolvedConfig {
    if let Some(url) = url {
        config.api_url = url;
    }
    if token.is_some() {
        config.token = token;
    }
    if delay_ms.is_some() {
        config.load_after_initial_rendering_ms = delay_ms;
    }
    config
}
