/// reqwest-backed Graph API executor
use async_trait::async_trait;
use messenger_core::{GraphExecutor, GraphResponse, ResponseBody};
use messenger_domain::constants::{ACCESS_TOKEN_PARAM, APPSECRET_PROOF_PARAM};
use messenger_domain::{GraphConfig, HttpMethod, MessengerError, Result};
use reqwest::header::CONTENT_TYPE;
use reqwest::Method;
use tracing::debug;
use url::Url;

use super::proof::appsecret_proof;
use crate::errors::InfraError;
use crate::http::HttpClient;

/// Executes Graph requests authenticated with a page access token.
///
/// Every request carries `access_token`, plus `appsecret_proof` when an app
/// secret is configured. Non-200 statuses are returned as ordinary responses
/// for the caller to classify.
#[derive(Clone)]
pub struct HttpGraphExecutor {
    http_client: HttpClient,
    access_token: String,
    appsecret_proof: Option<String>,
}

impl HttpGraphExecutor {
    /// Create a new executor
    ///
    /// # Arguments
    /// * `http_client` - Transport with timeout and user agent
    /// * `access_token` - Page access token
    /// * `app_secret` - App secret; enables `appsecret_proof` when present
    pub fn new(http_client: HttpClient, access_token: String, app_secret: Option<&str>) -> Self {
        let appsecret_proof = app_secret.map(|secret| appsecret_proof(&access_token, secret));
        Self { http_client, access_token, appsecret_proof }
    }

    pub fn from_config(http_client: HttpClient, config: &GraphConfig) -> Self {
        Self::new(http_client, config.access_token.clone(), config.app_secret.as_deref())
    }

    /// Append the credential parameters to `url`.
    fn authenticated_url(&self, url: &str) -> Result<Url> {
        let mut url = Url::parse(url).map_err(|e| MessengerError::from(InfraError::from(e)))?;
        {
            let mut query = url.query_pairs_mut();
            query.append_pair(ACCESS_TOKEN_PARAM, &self.access_token);
            if let Some(proof) = &self.appsecret_proof {
                query.append_pair(APPSECRET_PROOF_PARAM, proof);
            }
        }
        Ok(url)
    }
}

#[async_trait]
impl GraphExecutor for HttpGraphExecutor {
    async fn execute(
        &self,
        method: HttpMethod,
        url: &str,
        body: Option<Vec<u8>>,
    ) -> Result<GraphResponse> {
        let url = self.authenticated_url(url)?;
        debug!(
            %method,
            path = url.path(),
            signed = self.appsecret_proof.is_some(),
            "Executing Graph API request"
        );

        let mut request = self
            .http_client
            .request(to_reqwest_method(method), url)
            .header(CONTENT_TYPE, "application/json");
        if let Some(body) = body {
            request = request.body(body);
        }

        let response = self.http_client.send(request).await?;
        let status = response.status().as_u16();

        Ok(GraphResponse::new(status, Box::new(ReqwestBody(response))))
    }
}

impl std::fmt::Debug for HttpGraphExecutor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpGraphExecutor")
            .field("access_token", &"<redacted>")
            .field("signed", &self.appsecret_proof.is_some())
            .finish()
    }
}

fn to_reqwest_method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
    }
}

/// Response body backed by a live reqwest response.
///
/// The connection is returned to the pool when the response is consumed or
/// dropped.
struct ReqwestBody(reqwest::Response);

#[async_trait]
impl ResponseBody for ReqwestBody {
    async fn read_all(self: Box<Self>) -> Result<Vec<u8>> {
        let bytes = self.0.bytes().await.map_err(|e| MessengerError::from(InfraError::from(e)))?;
        Ok(bytes.to_vec())
    }
}
