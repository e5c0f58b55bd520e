//! Validated newtype wrappers for configuration values.

use crate::error::ConfigError;
use std::fmt;

/// A validated API base URL.
///
/// The base URL is the origin (and optional prefix) prepended to every
/// endpoint path. Trailing slashes are stripped on construction so joining
/// with a normalized path never produces `//`.
///
/// An empty base URL is accepted and means requests target relative paths.
///
/// # Example
///
/// ```rust
/// use shop_backend::BaseUrl;
///
/// let base = BaseUrl::new("https://api.example.com///").unwrap();
/// assert_eq!(base.as_ref(), "https://api.example.com");
/// assert_eq!(base.join("api/users"), "https://api.example.com/api/users");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BaseUrl(String);

impl BaseUrl {
    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the value is non-empty and
    /// lacks a scheme or host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().trim_end_matches('/').to_string();

        if url.is_empty() {
            return Ok(Self(url));
        }

        let scheme_end = url
            .find("://")
            .ok_or_else(|| ConfigError::InvalidBaseUrl { url: url.clone() })?;

        let scheme = &url[..scheme_end];
        if scheme.is_empty() || !scheme.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ConfigError::InvalidBaseUrl { url });
        }

        let remainder = &url[scheme_end + 3..];
        let host_end = remainder
            .find([':', '/', '?', '#'])
            .unwrap_or(remainder.len());
        if remainder[..host_end].is_empty() {
            return Err(ConfigError::InvalidBaseUrl { url });
        }

        Ok(Self(url))
    }

    /// Returns `true` if no base URL is configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Joins the base URL with an endpoint path.
    ///
    /// The path is normalized with [`normalize_path`] first.
    #[must_use]
    pub fn join(&self, path: &str) -> String {
        format!("{}{}", self.0, normalize_path(path))
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Normalizes an endpoint path so it begins with exactly one `/`.
///
/// ```rust
/// use shop_backend::config::normalize_path;
///
/// assert_eq!(normalize_path("api/users"), "/api/users");
/// assert_eq!(normalize_path("/api/users"), "/api/users");
/// assert_eq!(normalize_path("//api/users"), "/api/users");
/// ```
#[must_use]
pub fn normalize_path(path: &str) -> String {
    format!("/{}", path.trim_start_matches('/'))
}
