//! Wiring of configuration into a ready-to-use `MessengerService`

use std::sync::Arc;

use messenger_core::{GraphEndpoints, MessengerService};
use messenger_domain::{Config, MessengerError, Result};
use tracing::info;

use crate::graph::HttpGraphExecutor;
use crate::http::HttpClient;

/// Build a `MessengerService` backed by the reqwest executor.
///
/// # Errors
/// Returns `MessengerError::Config` when the access token is empty and
/// propagates HTTP client construction failures.
pub fn build_service(config: &Config) -> Result<MessengerService> {
    if config.graph.access_token.trim().is_empty() {
        return Err(MessengerError::Config("Graph access token must not be empty".to_string()));
    }

    let http_client = HttpClient::from_config(&config.http)?;
    let executor = HttpGraphExecutor::from_config(http_client, &config.graph);
    let endpoints = GraphEndpoints::from_config(&config.graph);

    info!(
        base_url = endpoints.base_url(),
        profile_version = %endpoints.versions().profile,
        account_linking_version = %endpoints.versions().account_linking,
        encoding = %endpoints.encoding(),
        signed = config.graph.app_secret.is_some(),
        "Messenger service configured"
    );

    Ok(MessengerService::new(Arc::new(executor), endpoints))
}
