//! Configuration structures
//!
//! Loaded from environment variables or JSON/TOML files by
//! `messenger_infra::config`. Everything except the access token has a
//! default, so a minimal file only needs `[graph] access_token = "..."`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_ACCOUNT_LINKING_API_VERSION, DEFAULT_HTTP_TIMEOUT_SECS, DEFAULT_PROFILE_API_VERSION,
    GRAPH_API_URL,
};
use crate::impl_domain_enum_conversions;

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub graph: GraphConfig,
    #[serde(default)]
    pub http: HttpConfig,
}

/// Graph API credentials and endpoint layout
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Page access token attached to every request
    pub access_token: String,
    /// App secret used to sign requests with `appsecret_proof`
    #[serde(default)]
    pub app_secret: Option<String>,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub versions: ApiVersions,
    #[serde(default)]
    pub query_encoding: QueryEncoding,
}

impl GraphConfig {
    /// Configuration with default endpoints for the given token.
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            app_secret: None,
            base_url: default_base_url(),
            versions: ApiVersions::default(),
            query_encoding: QueryEncoding::default(),
        }
    }
}

impl fmt::Debug for GraphConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GraphConfig")
            .field("access_token", &"<redacted>")
            .field("app_secret", &self.app_secret.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("versions", &self.versions)
            .field("query_encoding", &self.query_encoding)
            .finish()
    }
}

/// API version path segment used by each operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiVersions {
    #[serde(default = "default_profile_version")]
    pub profile: String,
    #[serde(default = "default_account_linking_version")]
    pub account_linking: String,
}

impl Default for ApiVersions {
    fn default() -> Self {
        Self {
            profile: default_profile_version(),
            account_linking: default_account_linking_version(),
        }
    }
}

/// How caller-supplied values are placed into request URLs.
///
/// `Verbatim` reproduces the historical byte-for-byte interpolation; values
/// containing reserved characters (`&`, `#`, `?`, spaces) then change the
/// meaning of the request. `Percent` escapes them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryEncoding {
    #[default]
    Verbatim,
    Percent,
}

impl_domain_enum_conversions!(QueryEncoding {
    Verbatim => "verbatim",
    Percent => "percent",
});

/// Transport settings for the HTTP executor
///
/// Requests are never retried, so unknown keys such as `max_attempts` are
/// rejected rather than ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HttpConfig {
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            user_agent: None,
        }
    }
}

fn default_base_url() -> String {
    GRAPH_API_URL.to_string()
}

fn default_profile_version() -> String {
    DEFAULT_PROFILE_API_VERSION.to_string()
}

fn default_account_linking_version() -> String {
    DEFAULT_ACCOUNT_LINKING_API_VERSION.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_HTTP_TIMEOUT_SECS
}
