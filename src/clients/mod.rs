//! HTTP transport types for backend communication.
//!
//! This module is the layer underneath [`ApiClient`](crate::ApiClient). It
//! builds URLs, attaches the JSON headers, performs a single request, and
//! returns the raw response. It knows nothing about the response envelope.
//!
//! # Overview
//!
//! - [`HttpClient`]: the async HTTP client
//! - [`HttpRequest`]: a request to be sent to the backend
//! - [`HttpResponse`]: the status, headers, and raw body of a response
//! - [`HttpMethod`]: supported HTTP methods (GET, POST)
//! - [`DataType`]: content types for request bodies
//!
//! # Retry Behavior
//!
//! There is none. Every request performs exactly one network round trip.

mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use errors::{HttpError, HttpResponseError, InvalidHttpRequestError};
pub use http_client::{HttpClient, CLIENT_VERSION};
pub use http_request::{DataType, HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;
