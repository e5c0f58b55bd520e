//! HTTP response type.

use std::collections::HashMap;

use crate::clients::errors::HttpResponseError;

/// An HTTP response from the backend.
///
/// The body is kept as raw text; decoding the envelope is the job of
/// [`ApiClient`](crate::ApiClient).
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// The canonical reason phrase for the status code (may be empty).
    pub status_text: String,
    /// Response headers, lower-cased (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The raw response body.
    pub body: String,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    #[must_use]
    pub fn new(
        code: u16,
        status_text: impl Into<String>,
        headers: HashMap<String, Vec<String>>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            code,
            status_text: status_text.into(),
            headers,
            body: body.into(),
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the `X-Request-Id` header value, if present.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.headers
            .get("x-request-id")
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Turns a non-2xx response into an [`HttpResponseError`].
    ///
    /// # Errors
    ///
    /// Returns [`HttpResponseError`] carrying the status code, status text,
    /// and request ID when [`is_ok`](Self::is_ok) is `false`.
    pub fn error_for_status(self) -> Result<Self, HttpResponseError> {
        if self.is_ok() {
            return Ok(self);
        }

        Err(HttpResponseError {
            code: self.code,
            error_reference: self.request_id().map(String::from),
            status_text: self.status_text,
        })
    }
}
