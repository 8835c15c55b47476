//! Conversions from external infrastructure errors into domain errors.

use messenger_domain::MessengerError;
use reqwest::Error as HttpError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub MessengerError);

impl From<InfraError> for MessengerError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<MessengerError> for InfraError {
    fn from(value: MessengerError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoMessengerError {
    fn into_messenger(self) -> MessengerError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → MessengerError */
/* -------------------------------------------------------------------------- */

impl IntoMessengerError for HttpError {
    fn into_messenger(self) -> MessengerError {
        if self.is_timeout() {
            return MessengerError::Network("HTTP request timed out".into());
        }

        #[cfg(not(target_arch = "wasm32"))]
        if self.is_connect() {
            return MessengerError::Network("HTTP connection failure".into());
        }

        if self.is_builder() {
            return MessengerError::InvalidInput(format!("invalid HTTP request: {self}"));
        }

        if self.is_body() || self.is_decode() {
            return MessengerError::Network(format!("failed to read HTTP response body: {self}"));
        }

        if let Some(status) = self.status() {
            return MessengerError::Network(format!(
                "HTTP {} {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("unknown status")
            ));
        }

        // Strip the URL: it carries the access token in its query string.
        MessengerError::Network(self.without_url().to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_messenger())
    }
}

/* -------------------------------------------------------------------------- */
/* url::ParseError → MessengerError */
/* -------------------------------------------------------------------------- */

impl IntoMessengerError for url::ParseError {
    fn into_messenger(self) -> MessengerError {
        MessengerError::InvalidInput(format!("invalid Graph API URL: {self}"))
    }
}

impl From<url::ParseError> for InfraError {
    fn from(value: url::ParseError) -> Self {
        InfraError(value.into_messenger())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
