//! Configuration types for the shop backend client.
//!
//! # Overview
//!
//! - [`ApiConfig`]: the configuration handed to [`ApiClient::new`](crate::ApiClient::new)
//! - [`ApiConfigBuilder`]: a builder for constructing [`ApiConfig`] instances
//! - [`BaseUrl`]: a validated base URL with trailing slashes stripped
//!
//! Configuration is instance-based. Nothing is read from the environment
//! unless [`ApiConfig::from_env`] is called explicitly.
//!
//! # Example
//!
//! ```rust
//! use shop_backend::{ApiConfig, BaseUrl};
//!
//! let config = ApiConfig::builder()
//!     .base_url(BaseUrl::new("https://api.example.com/").unwrap())
//!     .user_agent_prefix("MyApp/1.0")
//!     .build();
//!
//! assert_eq!(config.base_url().as_ref(), "https://api.example.com");
//! ```

mod newtypes;

pub use newtypes::{normalize_path, BaseUrl};

use crate::error::ConfigError;

/// Name of the environment variable read by [`ApiConfig::from_env`].
pub const BASE_URL_ENV_VAR: &str = "API_BASE_URL";

/// Configuration for the shop backend client.
///
/// `ApiConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug, Default)]
pub struct ApiConfig {
    base_url: BaseUrl,
    user_agent_prefix: Option<String>,
}

impl ApiConfig {
    /// Creates a new builder for constructing an `ApiConfig`.
    #[must_use]
    pub fn builder() -> ApiConfigBuilder {
        ApiConfigBuilder::new()
    }

    /// Loads the configuration from the `API_BASE_URL` environment variable.
    ///
    /// An unset variable yields an empty base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the variable is not valid Unicode or is not
    /// a valid base URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_var(BASE_URL_ENV_VAR)
    }

    /// Loads the configuration from the named environment variable.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the variable is not valid Unicode or is not
    /// a valid base URL.
    pub fn from_env_var(name: &str) -> Result<Self, ConfigError> {
        let raw = match std::env::var(name) {
            Ok(value) => value,
            Err(std::env::VarError::NotPresent) => String::new(),
            Err(std::env::VarError::NotUnicode(_)) => {
                return Err(ConfigError::InvalidEnvVar {
                    name: name.to_string(),
                })
            }
        };

        Ok(Self::builder().base_url(BaseUrl::new(raw)?).build())
    }

    /// Returns the base URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify ApiConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ApiConfig>();
};

/// Builder for constructing [`ApiConfig`] instances.
///
/// # Defaults
///
/// - `base_url`: empty (relative requests)
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct ApiConfigBuilder {
    base_url: Option<BaseUrl>,
    user_agent_prefix: Option<String>,
}

impl ApiConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the base URL.
    #[must_use]
    pub fn base_url(mut self, base_url: BaseUrl) -> Self {
        self.base_url = Some(base_url);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`ApiConfig`].
    #[must_use]
    pub fn build(self) -> ApiConfig {
        ApiConfig {
            base_url: self.base_url.unwrap_or_default(),
            user_agent_prefix: self.user_agent_prefix,
        }
    }
}
