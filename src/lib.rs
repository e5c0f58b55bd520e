//! # Shop Backend Client
//!
//! A typed async client for the shop backend REST API, covering the users,
//! products, and orders resources.
//!
//! ## Overview
//!
//! Every backend response is wrapped in an envelope:
//!
//! ```json
//! { "success": true, "message": "", "data": ... }
//! ```
//!
//! [`ApiClient`] sends one request per call, treats any non-2xx status as a
//! transport error, treats `success: false` as an application error carrying
//! the server's message, and otherwise returns `data` decoded into a typed
//! record.
//!
//! This crate provides:
//! - Explicit configuration via [`ApiConfig`] and [`ApiConfigBuilder`]
//! - A validated [`BaseUrl`] with trailing slashes stripped
//! - Typed records ([`User`], [`Product`], [`Order`]) and request inputs
//! - A layered error model ([`ApiError`], [`ConfigError`])
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use shop_backend::{ApiClient, ApiConfig, BaseUrl, OrderItemInput};
//!
//! let config = ApiConfig::builder()
//!     .base_url(BaseUrl::new("https://api.example.com/")?)
//!     .build();
//! let client = ApiClient::new(&config);
//!
//! for product in client.list_products().await? {
//!     println!("{} ({} in stock)", product.name, product.stock);
//! }
//!
//! let items = [OrderItemInput { product_id: 2, quantity: 3, price: 9.99 }];
//! let order = client.create_order(1, &items, None).await?;
//! println!("order {} is {}", order.id, order.status);
//! ```
//!
//! ## Configuration from the Environment
//!
//! ```rust,ignore
//! // Reads API_BASE_URL; an unset variable means relative paths.
//! let client = shop_backend::ApiClient::from_env()?;
//! ```
//!
//! ## Error Handling
//!
//! ```rust,ignore
//! use shop_backend::ApiError;
//!
//! match client.list_orders().await {
//!     Ok(orders) => println!("{} orders", orders.len()),
//!     Err(ApiError::Transport(e)) => eprintln!("HTTP {}", e.code),
//!     Err(ApiError::Application { message }) => eprintln!("backend said: {message}"),
//!     Err(e) => eprintln!("{e}"),
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: configuration is passed explicitly to the client
//! - **One round trip per call**: no retries, caching, or timeouts
//! - **Thread-safe**: clients are `Send + Sync` and hold no mutable state
//! - **Nothing swallowed**: every failure is returned to the caller

pub mod api;
pub mod clients;
pub mod config;
pub mod error;
pub mod models;

pub use api::{ApiClient, ApiError, Envelope};
pub use config::{ApiConfig, ApiConfigBuilder, BaseUrl, BASE_URL_ENV_VAR};
pub use error::ConfigError;
pub use models::{NewOrder, NewProduct, NewUser, Order, OrderItem, OrderItemInput, Product, User};

pub use clients::{
    DataType, HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    HttpResponseError, InvalidHttpRequestError,
};
