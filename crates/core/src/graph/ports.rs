//! Port interfaces for talking to the Graph API
//!
//! These traits define the boundary between the Messenger operations and
//! whatever transport actually performs the HTTP exchange.

use async_trait::async_trait;
use messenger_domain::{HttpMethod, Result};

/// Executes authenticated requests against the Graph API.
///
/// Implementations attach credentials and perform the HTTP exchange.
/// Transport failures are returned as errors and are propagated to callers
/// unchanged; non-200 statuses are returned as ordinary responses.
#[async_trait]
pub trait GraphExecutor: Send + Sync {
    /// Issue `method` against `url` with an optional request body.
    async fn execute(
        &self,
        method: HttpMethod,
        url: &str,
        body: Option<Vec<u8>>,
    ) -> Result<GraphResponse>;
}

/// Readable response body.
///
/// `read_all` consumes the body, so it is released exactly once whichever
/// way the caller leaves: fully read, read error, or dropped unread.
#[async_trait]
pub trait ResponseBody: Send {
    /// Read the remaining body to completion.
    async fn read_all(self: Box<Self>) -> Result<Vec<u8>>;
}

/// Status and body of a completed Graph request.
pub struct GraphResponse {
    pub status: u16,
    pub body: Box<dyn ResponseBody>,
}

impl GraphResponse {
    pub fn new(status: u16, body: Box<dyn ResponseBody>) -> Self {
        Self { status, body }
    }
}

impl std::fmt::Debug for GraphResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GraphResponse").field("status", &self.status).finish_non_exhaustive()
    }
}

/// Body that is already fully buffered in memory.
#[derive(Debug, Clone, Default)]
pub struct BufferedBody(pub Vec<u8>);

#[async_trait]
impl ResponseBody for BufferedBody {
    async fn read_all(self: Box<Self>) -> Result<Vec<u8>> {
        Ok(self.0)
    }
}

impl From<&str> for BufferedBody {
    fn from(value: &str) -> Self {
        Self(value.as_bytes().to_vec())
    }
}
