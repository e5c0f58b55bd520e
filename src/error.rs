//! Configuration error types for the shop backend client.
//!
//! All configuration constructors return `Result<T, ConfigError>` so invalid
//! values are rejected before any client is built.
//!
//! # Example
//!
//! ```rust
//! use shop_backend::{BaseUrl, ConfigError};
//!
//! let result = BaseUrl::new("not a url");
//! assert!(matches!(result, Err(ConfigError::InvalidBaseUrl { .. })));
//! ```

use thiserror::Error;

/// Errors that can occur while building client configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The base URL is neither empty nor an absolute URL.
    #[error("Invalid base URL '{url}'. Expected an absolute URL with scheme (e.g., 'https://api.example.com') or an empty string.")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// An environment variable is set but does not hold valid Unicode.
    #[error("Environment variable '{name}' does not contain valid Unicode.")]
    InvalidEnvVar {
        /// The name of the variable.
        name: String,
    },
}
