//! # Messenger Core
//!
//! Graph API operations with no transport dependencies.
//!
//! This crate contains:
//! - The executor port (`GraphExecutor`, `ResponseBody`)
//! - URL construction for each Graph endpoint
//! - Response classification and decoding
//! - `MessengerService` with the profile and PSID operations
//!
//! ## Architecture Principles
//! - Only depends on `messenger-domain`
//! - No HTTP client code; transports plug in through `GraphExecutor`
//! - Pure, testable request/response logic

pub mod graph;
pub mod messenger;

// Re-export specific items to avoid ambiguity
pub use graph::{
    decode_response, read_outcome, BufferedBody, GraphEndpoints, GraphExecutor, GraphOutcome,
    GraphResponse, ResponseBody,
};
pub use messenger::MessengerService;
