//! Error types for envelope-level API operations.
//!
//! # Error Handling
//!
//! Every [`ApiClient`](crate::ApiClient) operation returns `Result<T, ApiError>`.
//! The two categories callers most often distinguish are:
//!
//! - [`ApiError::Transport`]: the HTTP status was not 2xx
//! - [`ApiError::Application`]: the status was 2xx but the envelope reported
//!   `success: false`
//!
//! # Example
//!
//! ```rust,ignore
//! use shop_backend::ApiError;
//!
//! match client.list_users().await {
//!     Ok(users) => println!("{} users", users.len()),
//!     Err(ApiError::Transport(e)) => println!("HTTP {} {}", e.code, e.status_text),
//!     Err(ApiError::Application { message }) => println!("Rejected: {message}"),
//!     Err(e) => println!("{e}"),
//! }
//! ```

use crate::clients::{HttpError, HttpResponseError, InvalidHttpRequestError};
use thiserror::Error;

/// Error type for API operations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The response carried a non-2xx HTTP status.
    #[error("API transport error: {0}")]
    Transport(#[from] HttpResponseError),

    /// The envelope reported `success: false`.
    #[error("API application error: {message}")]
    Application {
        /// The message supplied by the server.
        message: String,
    },

    /// The response body was not a valid envelope, or its `data` did not
    /// match the expected type.
    #[error("Failed to parse response body: {0}")]
    Deserialization(#[source] serde_json::Error),

    /// The request body could not be serialized to JSON.
    #[error("Failed to serialize request body: {0}")]
    Serialization(#[source] serde_json::Error),

    /// The request failed before a response was received.
    #[error("Network error: {0}")]
    Network(#[source] reqwest::Error),

    /// The request failed validation before sending.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),
}

impl ApiError {
    /// Returns `true` for a non-2xx HTTP status.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// Returns `true` when the server answered `success: false`.
    #[must_use]
    pub const fn is_application(&self) -> bool {
        matches!(self, Self::Application { .. })
    }

    /// Returns the HTTP status code for transport errors.
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Transport(e) => Some(e.code),
            _ => None,
        }
    }
}

impl From<HttpError> for ApiError {
    fn from(error: HttpError) -> Self {
        match error {
            HttpError::InvalidRequest(e) => Self::InvalidRequest(e),
            HttpError::Network(e) => Self::Network(e),
        }
    }
}
