//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::API_ERROR_PREFIX;
use crate::types::GraphApiError;

/// Main error type for the Messenger Graph client
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum MessengerError {
    /// Transport failure (connection, DNS, TLS, timeout, body read).
    #[error("Network error: {0}")]
    Network(String),

    /// The Graph API answered with a non-200 status.
    #[error("{}{}", API_ERROR_PREFIX, .0.message)]
    Api(GraphApiError),

    /// A 200 response whose body does not match the expected shape.
    #[error("Invalid response: {0}")]
    Decode(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl MessengerError {
    /// Structured Graph error, when the failure came from the remote API.
    pub fn api_error(&self) -> Option<&GraphApiError> {
        match self {
            Self::Api(err) => Some(err),
            _ => None,
        }
    }
}

/// Result type alias for Messenger operations
pub type Result<T> = std::result::Result<T, MessengerError>;
