//! Application constants
//!
//! Centralized location for the Graph API defaults shared by every crate.

// Graph API host and versions
pub const GRAPH_API_URL: &str = "https://graph.facebook.com";
pub const DEFAULT_PROFILE_API_VERSION: &str = "v14.0";
pub const DEFAULT_ACCOUNT_LINKING_API_VERSION: &str = "v10.0";

// Error reporting
/// Prefix of every remote API error message. The spelling is part of the
/// observable contract and must not be corrected.
pub const API_ERROR_PREFIX: &str = "Error occured: ";

// HTTP defaults
pub const HTTP_STATUS_OK: u16 = 200;
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

// Query parameter names attached by the request executor
pub const ACCESS_TOKEN_PARAM: &str = "access_token";
pub const APPSECRET_PROOF_PARAM: &str = "appsecret_proof";
