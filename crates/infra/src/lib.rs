//! # Messenger Infrastructure
//!
//! Infrastructure implementations of the `messenger-core` ports.
//!
//! This crate contains:
//! - The reqwest HTTP client with a request timeout
//! - The Graph API executor (access token and `appsecret_proof` signing)
//! - Configuration loading from environment variables and files
//!
//! ## Architecture
//! - Implements traits defined in `messenger-core`
//! - Depends on `messenger-domain` and `messenger-core`
//! - Contains all "impure" code (network and filesystem I/O)

pub mod config;
pub mod errors;
pub mod graph;
pub mod http;
pub mod service;

// Re-export commonly used items
pub use errors::InfraError;
pub use graph::{appsecret_proof, HttpGraphExecutor};
pub use http::{HttpClient, HttpClientBuilder};
pub use service::build_service;
