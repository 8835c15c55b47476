use std::time::Duration;

use messenger_domain::{HttpConfig, MessengerError};
use reqwest::{Client as ReqwestClient, Method, RequestBuilder, Response};
use tracing::debug;

use crate::errors::InfraError;

/// HTTP client with a request timeout.
///
/// Every request is sent exactly once; failures are reported to the caller
/// as they occur.
#[derive(Clone)]
pub struct HttpClient {
    client: ReqwestClient,
}

impl HttpClient {
    /// Start building a new HTTP client.
    pub fn builder() -> HttpClientBuilder {
        HttpClientBuilder::default()
    }

    /// Convenience constructor with default configuration.
    pub fn new() -> Result<Self, MessengerError> {
        Self::builder().build()
    }

    /// Build a client from the `[http]` configuration section.
    pub fn from_config(config: &HttpConfig) -> Result<Self, MessengerError> {
        let mut builder = Self::builder().timeout(Duration::from_secs(config.timeout_secs));

        if let Some(agent) = &config.user_agent {
            builder = builder.user_agent(agent.clone());
        }

        builder.build()
    }

    /// Create a request builder using the underlying reqwest client.
    pub fn request<U>(&self, method: Method, url: U) -> RequestBuilder
    where
        U: reqwest::IntoUrl,
    {
        self.client.request(method, url)
    }

    /// Execute the provided request builder.
    ///
    /// Any status code is returned as a response; only transport failures
    /// become errors.
    pub async fn send(&self, builder: RequestBuilder) -> Result<Response, MessengerError> {
        let request = builder.build().map_err(|err| MessengerError::from(InfraError::from(err)))?;

        // The query string carries credentials; log host and path only.
        let method = request.method().clone();
        let host = request.url().host_str().unwrap_or_default().to_string();
        let path = request.url().path().to_string();
        debug!(%method, %host, %path, "sending HTTP request");

        match self.client.execute(request).await {
            Ok(response) => {
                debug!(%method, %path, status = %response.status(), "received HTTP response");
                Ok(response)
            }
            Err(mut err) => {
                if let Some(url) = err.url_mut() {
                    url.set_query(None);
                }
                debug!(%method, %path, error = %err, "HTTP request failed");
                Err(MessengerError::from(InfraError::from(err)))
            }
        }
    }
}

/// Builder for [`HttpClient`].
#[derive(Debug)]
pub struct HttpClientBuilder {
    timeout: Duration,
    user_agent: Option<String>,
}

impl Default for HttpClientBuilder {
    fn default() -> Self {
        Self { timeout: Duration::from_secs(HttpConfig::default().timeout_secs), user_agent: None }
    }
}

impl HttpClientBuilder {
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    pub fn build(self) -> Result<HttpClient, MessengerError> {
        let mut builder = ReqwestClient::builder().timeout(self.timeout).no_proxy();

        if let Some(agent) = self.user_agent {
            builder = builder.user_agent(agent);
        }

        let client = builder.build().map_err(|err| MessengerError::from(InfraError::from(err)))?;

        Ok(HttpClient { client })
    }
}
