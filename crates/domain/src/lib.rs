//! # Messenger Domain
//!
//! Domain types and models for the Messenger Graph client.
//!
//! This crate contains:
//! - Graph API wire types (Profile, AccountLinking, GraphApiError)
//! - Domain error types and Result definitions
//! - Configuration structures
//! - Graph API constants
//!
//! ## Architecture
//! - No dependencies on other messenger crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
