//! Response handling shared by every Graph operation

use messenger_domain::constants::HTTP_STATUS_OK;
use messenger_domain::{GraphApiError, MessengerError, Result};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::ports::GraphResponse;

/// Outcome of a Graph request once the body has been read.
#[derive(Debug, Clone, PartialEq)]
pub enum GraphOutcome<T> {
    Success(T),
    Failure(GraphApiError),
}

impl<T> GraphOutcome<T> {
    pub fn into_result(self) -> Result<T> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(err) => Err(MessengerError::Api(err)),
        }
    }
}

/// Read the body and classify the response.
///
/// Status 200 decodes into `T`, where a decode failure is a
/// `MessengerError::Decode`. Any other status decodes the Graph error
/// envelope best-effort. Body read errors are returned unchanged.
pub async fn read_outcome<T: DeserializeOwned>(response: GraphResponse) -> Result<GraphOutcome<T>> {
    let GraphResponse { status, body } = response;
    let bytes = body.read_all().await?;

    if status != HTTP_STATUS_OK {
        let error = GraphApiError::from_response(status, &bytes);
        warn!(
            status,
            code = ?error.code,
            error_subcode = ?error.error_subcode,
            fbtrace_id = ?error.fbtrace_id,
            "Graph API returned an error"
        );
        return Ok(GraphOutcome::Failure(error));
    }

    debug!(status, bytes = bytes.len(), "Graph API response received");

    serde_json::from_slice(&bytes)
        .map(GraphOutcome::Success)
        .map_err(|e| MessengerError::Decode(format!("Failed to parse Graph response: {e}")))
}

/// [`read_outcome`] with API failures folded into `MessengerError::Api`.
pub async fn decode_response<T: DeserializeOwned>(response: GraphResponse) -> Result<T> {
    read_outcome(response).await?.into_result()
}
