//! Graph API URL construction
//!
//! Every request URL the client issues is built here, so the API version
//! segments and the encoding policy live in one place.

use std::borrow::Cow;

use messenger_domain::{ApiVersions, GraphConfig, QueryEncoding};

/// Base URL, API versions and encoding policy for Graph requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphEndpoints {
    base_url: String,
    versions: ApiVersions,
    encoding: QueryEncoding,
}

impl GraphEndpoints {
    pub fn new(
        base_url: impl Into<String>,
        versions: ApiVersions,
        encoding: QueryEncoding,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, versions, encoding }
    }

    pub fn from_config(config: &GraphConfig) -> Self {
        Self::new(config.base_url.clone(), config.versions.clone(), config.query_encoding)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn versions(&self) -> &ApiVersions {
        &self.versions
    }

    pub fn encoding(&self) -> QueryEncoding {
        self.encoding
    }

    /// `<base>/<profile version>/<user_id>[?fields=<scope>]`
    ///
    /// An empty `scope` leaves the URL without a query string.
    pub fn profile_url(&self, user_id: &str, scope: &str) -> String {
        let mut url =
            format!("{}/{}/{}", self.base_url, self.versions.profile, self.encode(user_id));

        if !scope.is_empty() {
            url.push_str("?fields=");
            url.push_str(&self.encode(scope));
        }

        url
    }

    /// `<base>/<account linking version>/me?fields=recipient&account_linking_token=<token>`
    pub fn psid_url(&self, token: &str) -> String {
        format!(
            "{}/{}/me?fields=recipient&account_linking_token={}",
            self.base_url,
            self.versions.account_linking,
            self.encode(token)
        )
    }

    fn encode<'a>(&self, value: &'a str) -> Cow<'a, str> {
        match self.encoding {
            QueryEncoding::Verbatim => Cow::Borrowed(value),
            QueryEncoding::Percent => urlencoding::encode(value),
        }
    }
}

impl Default for GraphEndpoints {
    fn default() -> Self {
        Self::new(
            messenger_domain::constants::GRAPH_API_URL,
            ApiVersions::default(),
            QueryEncoding::default(),
        )
    }
}
