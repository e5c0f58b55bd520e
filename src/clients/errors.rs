//! HTTP-specific error types.
//!
//! - [`HttpResponseError`]: a non-2xx HTTP response
//! - [`InvalidHttpRequestError`]: a request that fails validation before sending
//! - [`HttpError`]: failures that prevent a response from being received
//!
//! # Example
//!
//! ```rust,ignore
//! use shop_backend::clients::{HttpClient, HttpError};
//!
//! match client.request(request).await {
//!     Ok(response) => match response.error_for_status() {
//!         Ok(response) => println!("Body: {}", response.body),
//!         Err(e) => println!("{e}"),
//!     },
//!     Err(HttpError::InvalidRequest(e)) => println!("Invalid request: {e}"),
//!     Err(HttpError::Network(e)) => println!("Network error: {e}"),
//! }
//! ```

use thiserror::Error;

/// Error returned when a response carries a non-successful HTTP status.
///
/// # Example
///
/// ```rust
/// use shop_backend::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 404,
///     status_text: "Not Found".to_string(),
///     error_reference: None,
/// };
///
/// assert_eq!(error.to_string(), "HTTP status 404 Not Found");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("HTTP status {code} {status_text}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The canonical reason phrase for the status code, or `"Unknown Status"`
    /// for codes without one. The server's own reason phrase is not used.
    pub status_text: String,
    /// Reference ID for error reporting (from the `X-Request-Id` header).
    pub error_reference: Option<String>,
}

/// Error returned when an HTTP request fails validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A request body was provided without specifying the body type.
    #[error("Cannot set a body without also setting body_type.")]
    MissingBodyType,

    /// A POST request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },

    /// An extra header has a name or value that cannot be sent.
    #[error("Invalid header '{name}': names must be tokens and values visible ASCII.")]
    InvalidHeader {
        /// The offending header name.
        name: String,
    },
}

/// Error type for failures that prevent a response from being received.
///
/// A non-2xx status is not an `HttpError`: the response is returned and the
/// caller decides with [`HttpResponse::error_for_status`](crate::clients::HttpResponse::error_for_status).
#[derive(Debug, Error)]
pub enum HttpError {
    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}
