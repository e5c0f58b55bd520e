//! Envelope-aware client for the users, products, and orders endpoints.
//!
//! This module provides the [`ApiClient`] type. Each call performs exactly
//! one HTTP round trip, checks the status, decodes the envelope, checks the
//! success flag, and returns the typed payload.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::api::{ApiError, Envelope};
use crate::clients::{DataType, HttpClient, HttpMethod, HttpRequest, HttpResponse};
use crate::config::{normalize_path, ApiConfig, BaseUrl};
use crate::error::ConfigError;
use crate::models::{NewOrder, NewProduct, NewUser, Order, OrderItemInput, Product, User};

const USERS_PATH: &str = "/api/users";
const PRODUCTS_PATH: &str = "/api/products";
const ORDERS_PATH: &str = "/api/orders";

/// Typed client for the shop backend.
///
/// # Thread Safety
///
/// `ApiClient` is `Send + Sync` and holds no mutable state, so one client can
/// serve concurrent calls from many tasks.
///
/// # Example
///
/// ```rust,ignore
/// use shop_backend::{ApiClient, ApiConfig, BaseUrl, OrderItemInput};
///
/// let config = ApiConfig::builder()
///     .base_url(BaseUrl::new("https://api.example.com")?)
///     .build();
/// let client = ApiClient::new(&config);
///
/// let users = client.list_users().await?;
/// let user = client.create_user("ada", "ada@example.com").await?;
///
/// let items = [OrderItemInput { product_id: 2, quantity: 3, price: 9.99 }];
/// let order = client.create_order(user.id, &items, None).await?;
/// ```
#[derive(Debug)]
pub struct ApiClient {
    http_client: HttpClient,
}

// Verify ApiClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ApiClient>();
};

impl ApiClient {
    /// Creates a new client from the given configuration.
    #[must_use]
    pub fn new(config: &ApiConfig) -> Self {
        tracing::debug!(base_url = %config.base_url(), "creating API client");

        Self {
            http_client: HttpClient::new(config),
        }
    }

    /// Creates a new client configured from the `API_BASE_URL` environment
    /// variable.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the variable holds an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self::new(&ApiConfig::from_env()?))
    }

    /// Returns the base URL requests are sent to.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        self.http_client.base_url()
    }

    /// Sends a GET request and unwraps the envelope payload as `T`.
    ///
    /// `path` is normalized to start with exactly one `/`.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Transport`] for a non-2xx status
    /// - [`ApiError::Deserialization`] for a malformed body
    /// - [`ApiError::Application`] when the envelope reports `success: false`
    /// - [`ApiError::Network`] when no response is received
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let request = HttpRequest::builder(HttpMethod::Get, normalize_path(path)).build()?;
        self.send(request).await
    }

    /// Sends a POST request with `body` as JSON and unwraps the envelope
    /// payload as `T`.
    ///
    /// The body is sent verbatim; no client-side validation is performed.
    ///
    /// # Errors
    ///
    /// Same as [`get`](Self::get), plus [`ApiError::Serialization`] if `body`
    /// cannot be converted to JSON.
    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let body = serde_json::to_value(body).map_err(ApiError::Serialization)?;
        let request = HttpRequest::builder(HttpMethod::Post, normalize_path(path))
            .body(body)
            .body_type(DataType::Json)
            .build()?;
        self.send(request).await
    }

    /// Lists all users.
    ///
    /// # Errors
    ///
    /// See [`get`](Self::get).
    pub async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        self.get(USERS_PATH).await
    }

    /// Lists all products.
    ///
    /// # Errors
    ///
    /// See [`get`](Self::get).
    pub async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        self.get(PRODUCTS_PATH).await
    }

    /// Lists all orders.
    ///
    /// # Errors
    ///
    /// See [`get`](Self::get).
    pub async fn list_orders(&self) -> Result<Vec<Order>, ApiError> {
        self.get(ORDERS_PATH).await
    }

    /// Creates a user.
    ///
    /// # Errors
    ///
    /// See [`post`](Self::post).
    pub async fn create_user(&self, username: &str, email: &str) -> Result<User, ApiError> {
        self.post(USERS_PATH, &NewUser { username, email }).await
    }

    /// Creates a product.
    ///
    /// # Errors
    ///
    /// See [`post`](Self::post).
    pub async fn create_product(
        &self,
        name: &str,
        description: &str,
        price: f64,
        stock: i64,
    ) -> Result<Product, ApiError> {
        let body = NewProduct {
            name,
            description,
            price,
            stock,
        };
        self.post(PRODUCTS_PATH, &body).await
    }

    /// Creates an order.
    ///
    /// When `status` is `None` the field is omitted from the request and the
    /// backend applies its default.
    ///
    /// # Errors
    ///
    /// See [`post`](Self::post).
    pub async fn create_order(
        &self,
        user_id: i64,
        items: &[OrderItemInput],
        status: Option<&str>,
    ) -> Result<Order, ApiError> {
        let body = NewOrder {
            user_id,
            items,
            status,
        };
        self.post(ORDERS_PATH, &body).await
    }

    async fn send<T: DeserializeOwned>(&self, request: HttpRequest) -> Result<T, ApiError> {
        let path = request.path.clone();
        let response = self.http_client.request(request).await?;
        decode_response(&path, response)
    }
}

/// Checks the status, decodes the envelope, and unwraps the payload.
fn decode_response<T: DeserializeOwned>(path: &str, response: HttpResponse) -> Result<T, ApiError> {
    let response = response.error_for_status()?;
    let envelope = Envelope::from_body(&response.body)?;

    if !envelope.success {
        tracing::debug!(
            path,
            message = %envelope.message,
            "request rejected by backend"
        );
    }

    envelope.into_data()
}
