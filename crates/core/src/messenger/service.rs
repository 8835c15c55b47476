//! Messenger service - profile and account-linking lookups

use std::sync::Arc;

use messenger_domain::{AccountLinking, HttpMethod, Profile, Result};
use tracing::debug;

use crate::graph::{decode_response, GraphEndpoints, GraphExecutor};

/// Messenger Platform operations backed by a [`GraphExecutor`].
///
/// Holds no mutable state, so a single instance can be shared across tasks.
#[derive(Clone)]
pub struct MessengerService {
    executor: Arc<dyn GraphExecutor>,
    endpoints: GraphEndpoints,
}

impl MessengerService {
    /// Create a new messenger service
    pub fn new(executor: Arc<dyn GraphExecutor>, endpoints: GraphEndpoints) -> Self {
        Self { executor, endpoints }
    }

    pub fn endpoints(&self) -> &GraphEndpoints {
        &self.endpoints
    }

    /// Fetch a user's profile.
    ///
    /// `user_id` must be non-empty. `scope` is a comma-separated field list;
    /// when empty the Graph API returns its default field set.
    ///
    /// # Errors
    /// - `MessengerError::Api` when the Graph API answers with a non-200 status
    /// - `MessengerError::Decode` when a 200 body is not a profile
    /// - any transport error from the executor, unchanged
    pub async fn get_profile(&self, user_id: &str, scope: &str) -> Result<Profile> {
        let url = self.endpoints.profile_url(user_id, scope);
        debug!(user_id, scope, "Fetching Messenger profile");

        let response = self.executor.execute(HttpMethod::Get, &url, None).await?;
        decode_response(response).await
    }

    /// Resolve the page-scoped ID of the user who completed account linking.
    ///
    /// `token` is the account-linking token issued by the platform; its
    /// validity and expiry are checked remotely.
    ///
    /// # Errors
    /// Same classes as [`MessengerService::get_profile`].
    pub async fn get_psid(&self, token: &str) -> Result<String> {
        let url = self.endpoints.psid_url(token);
        debug!("Resolving page-scoped ID from account linking token");

        let response = self.executor.execute(HttpMethod::Get, &url, None).await?;
        let linking: AccountLinking = decode_response(response).await?;
        Ok(linking.into_psid())
    }
}

impl std::fmt::Debug for MessengerService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MessengerService").field("endpoints", &self.endpoints).finish()
    }
}
