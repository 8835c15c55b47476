//! Graph API transport
//!
//! Implements the `messenger-core` executor port on top of [`crate::http::HttpClient`].
//!
//! # Usage
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use messenger_core::{GraphEndpoints, MessengerService};
//! use messenger_infra::graph::HttpGraphExecutor;
//! use messenger_infra::http::HttpClient;
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let http_client = HttpClient::new()?;
//! let token = std::env::var("MESSENGER_ACCESS_TOKEN")?;
//! let executor = HttpGraphExecutor::new(http_client, token, None);
//!
//! let service = MessengerService::new(Arc::new(executor), GraphEndpoints::default());
//! let profile = service.get_profile("1234567890", "first_name,last_name").await?;
//! println!("Hello, {}", profile.first_name);
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! - **Network errors**: returned as `MessengerError::Network`
//! - **Non-200 statuses**: returned as responses; `MessengerService` turns
//!   them into `MessengerError::Api`
//! - **Retries**: none; each call sends exactly one request

pub mod executor;
pub mod proof;

pub use executor::HttpGraphExecutor;
pub use proof::appsecret_proof;
