//! Envelope-level API client.
//!
//! - [`ApiClient`]: typed operations over `/api/users`, `/api/products`, `/api/orders`
//! - [`Envelope`]: the `{success, message, data}` response wrapper
//! - [`ApiError`]: the error type returned by every operation

mod client;
mod envelope;
mod errors;

pub use client::ApiClient;
pub use envelope::Envelope;
pub use errors::ApiError;
