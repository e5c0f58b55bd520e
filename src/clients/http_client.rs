//! HTTP client for backend communication.
//!
//! This module provides the [`HttpClient`] type, which performs exactly one
//! round trip per request and hands back the raw [`HttpResponse`].

use std::collections::HashMap;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE, USER_AGENT};
use reqwest::StatusCode;

use crate::clients::errors::HttpError;
use crate::clients::http_request::{header_pair, HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::config::{ApiConfig, BaseUrl};

/// Client version from Cargo.toml.
pub const CLIENT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// `User-Agent` value sent when no prefix is configured.
const BASE_USER_AGENT: &str = concat!(
    "Shop Backend Client v",
    env!("CARGO_PKG_VERSION"),
    " | Rust ",
    env!("CARGO_PKG_RUST_VERSION")
);

/// Status text for codes without a canonical reason phrase.
const UNKNOWN_STATUS_TEXT: &str = "Unknown Status";

/// HTTP client for making requests to the backend.
///
/// The client handles:
/// - URL construction from the configured [`BaseUrl`]
/// - Default headers (`User-Agent`, `Accept`, `Content-Type`)
/// - Response header collection
///
/// It does not retry, time out, or interpret status codes.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use shop_backend::{ApiConfig, BaseUrl};
/// use shop_backend::clients::{HttpClient, HttpMethod, HttpRequest};
///
/// let config = ApiConfig::builder()
///     .base_url(BaseUrl::new("https://api.example.com").unwrap())
///     .build();
/// let client = HttpClient::new(&config);
///
/// let request = HttpRequest::builder(HttpMethod::Get, "/api/users")
///     .build()
///     .unwrap();
///
/// let response = client.request(request).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URL, trailing slashes already stripped.
    base_url: BaseUrl,
    /// Default headers to include in all requests.
    default_headers: HeaderMap,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from the given configuration.
    ///
    /// A `user_agent_prefix` that is not a valid header value is dropped with
    /// a warning.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    #[must_use]
    pub fn new(config: &ApiConfig) -> Self {
        let user_agent = config
            .user_agent_prefix()
            .and_then(|prefix| {
                let value = HeaderValue::from_str(&format!("{prefix} | {BASE_USER_AGENT}")).ok();
                if value.is_none() {
                    tracing::warn!(
                        prefix,
                        "ignoring user agent prefix that is not a valid header value"
                    );
                }
                value
            })
            .unwrap_or_else(|| HeaderValue::from_static(BASE_USER_AGENT));

        let mut default_headers = HeaderMap::new();
        default_headers.insert(USER_AGENT, user_agent);
        default_headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        default_headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: config.base_url().clone(),
            default_headers,
        }
    }

    /// Returns the base URL for this client.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HeaderMap {
        &self.default_headers
    }

    /// Sends an HTTP request and returns the response, whatever its status.
    ///
    /// Headers are merged case-insensitively, so each name is sent once: the
    /// request's body type and extra headers replace defaults of the same name.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - The request cannot be sent or the body cannot be read (`Network`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = self.base_url.join(&request.path);

        let mut headers = self.default_headers.clone();
        if let Some(body_type) = &request.body_type {
            headers.insert(
                CONTENT_TYPE,
                HeaderValue::from_static(body_type.as_content_type()),
            );
        }
        for (key, value) in request.extra_headers.iter().flatten() {
            let (name, value) = header_pair(key, value)?;
            headers.insert(name, value);
        }

        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
        }
        .headers(headers);

        if let Some(body) = &request.body {
            req_builder = req_builder.body(body.to_string());
        }

        tracing::debug!(method = %request.http_method, url = %url, "sending request");

        let res = req_builder.send().await?;

        let status = res.status();
        let code = status.as_u16();
        let status_text = Self::status_text(status);
        let res_headers = Self::parse_response_headers(res.headers());
        let body = res.text().await?;

        tracing::debug!(
            method = %request.http_method,
            url = %url,
            status = code,
            "received response"
        );

        Ok(HttpResponse::new(code, status_text, res_headers, body))
    }

    /// Returns the canonical reason phrase for `status`.
    fn status_text(status: StatusCode) -> String {
        status
            .canonical_reason()
            .unwrap_or(UNKNOWN_STATUS_TEXT)
            .to_string()
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}
