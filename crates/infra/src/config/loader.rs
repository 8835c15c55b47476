//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. If `MESSENGER_ACCESS_TOKEN` is set, loads from environment variables;
//!    an invalid value in any other variable is reported, not skipped
//! 2. If the access token is missing, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `MESSENGER_ACCESS_TOKEN`: Page access token (required)
//! - `MESSENGER_APP_SECRET`: App secret for `appsecret_proof`
//! - `MESSENGER_GRAPH_API_URL`: Graph API base URL
//! - `MESSENGER_PROFILE_API_VERSION`: Version segment for profile lookups
//! - `MESSENGER_ACCOUNT_LINKING_API_VERSION`: Version segment for PSID lookups
//! - `MESSENGER_QUERY_ENCODING`: `verbatim` or `percent`
//! - `MESSENGER_HTTP_TIMEOUT_SECS`: Request timeout in seconds
//! - `MESSENGER_HTTP_USER_AGENT`: User agent override
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./messenger.json` or `./messenger.toml` (current working directory)
//! 2. `./config.json` or `./config.toml` (current working directory)
//! 3. `../config.json` or `../config.toml` (parent directory)
//! 4. `../../config.json` or `../../config.toml` (grandparent directory)
//! 5. Relative to executable location

use std::path::{Path, PathBuf};
use std::str::FromStr;

use messenger_domain::{
    ApiVersions, Config, GraphConfig, HttpConfig, MessengerError, QueryEncoding, Result,
};

const ACCESS_TOKEN_VAR: &str = "MESSENGER_ACCESS_TOKEN";

/// Load configuration with automatic fallback strategy
///
/// Loads from environment variables when the access token is set. If that
/// variable is missing, falls back to loading from a config file.
///
/// # Errors
/// Returns `MessengerError::Config` if:
/// - The token is set but another variable has an invalid value
/// - The token is unset and no config file can be loaded
/// - File format is invalid
/// - Required fields are missing
pub fn load() -> Result<Config> {
    if env_opt(ACCESS_TOKEN_VAR).is_none() {
        tracing::debug!("{} not set, trying file", ACCESS_TOKEN_VAR);
        return load_from_file(None);
    }

    let config = load_from_env()?;
    tracing::info!("Configuration loaded from environment variables");
    Ok(config)
}

/// Load configuration from environment variables
///
/// Only `MESSENGER_ACCESS_TOKEN` is required; every other variable falls back
/// to its default.
///
/// # Errors
/// Returns `MessengerError::Config` if the token is missing or a variable has
/// an invalid value.
pub fn load_from_env() -> Result<Config> {
    let access_token = env_var(ACCESS_TOKEN_VAR)?;
    let app_secret = env_opt("MESSENGER_APP_SECRET");

    let mut graph = GraphConfig::new(access_token);
    graph.app_secret = app_secret;

    if let Some(base_url) = env_opt("MESSENGER_GRAPH_API_URL") {
        graph.base_url = base_url;
    }

    let defaults = ApiVersions::default();
    graph.versions = ApiVersions {
        profile: env_opt("MESSENGER_PROFILE_API_VERSION").unwrap_or(defaults.profile),
        account_linking: env_opt("MESSENGER_ACCOUNT_LINKING_API_VERSION")
            .unwrap_or(defaults.account_linking),
    };

    if let Some(encoding) = env_opt("MESSENGER_QUERY_ENCODING") {
        graph.query_encoding = QueryEncoding::from_str(&encoding).map_err(MessengerError::Config)?;
    }

    let mut http = HttpConfig::default();
    if let Some(timeout) = env_opt("MESSENGER_HTTP_TIMEOUT_SECS") {
        http.timeout_secs = timeout.parse::<u64>().map_err(|e| {
            MessengerError::Config(format!("Invalid HTTP timeout: {}", e))
        })?;
    }
    http.user_agent = env_opt("MESSENGER_HTTP_USER_AGENT");

    Ok(Config { graph, http })
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Arguments
/// * `path` - Optional path to config file. If `None`, uses
///   [`probe_config_paths`].
///
/// # Errors
/// Returns `MessengerError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
/// - Required fields are missing
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(MessengerError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            MessengerError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| MessengerError::Config(format!("Failed to read config file: {}", e)))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
///
/// # Errors
/// Returns `MessengerError::Config` if format is invalid or parsing fails.
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| MessengerError::Config(format!("Invalid TOML format: {}", e))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| MessengerError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(MessengerError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// Probe multiple paths for configuration files
///
/// Searches for config files in the following locations (in order):
/// 1. Current working directory (`./messenger.{json,toml}`,
///    `./config.{json,toml}`)
/// 2. Parent directories (up to 2 levels)
/// 3. Relative to executable location
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        candidates.extend(candidate_paths(&cwd));
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.extend(candidate_paths(exe_dir));
        }
    }

    candidates.into_iter().find(|path| path.exists())
}

fn candidate_paths(dir: &Path) -> Vec<PathBuf> {
    vec![
        dir.join("messenger.json"),
        dir.join("messenger.toml"),
        dir.join("config.json"),
        dir.join("config.toml"),
        dir.join("../config.json"),
        dir.join("../config.toml"),
        dir.join("../../config.json"),
        dir.join("../../config.toml"),
    ]
}

/// Get required environment variable
///
/// # Errors
/// Returns `MessengerError::Config` if the variable is not set or empty.
fn env_var(key: &str) -> Result<String> {
    env_opt(key).ok_or_else(|| {
        MessengerError::Config(format!("Missing required environment variable: {}", key))
    })
}

/// Optional environment variable; empty values count as unset.
fn env_opt(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.trim().is_empty())
}
