//! The `{success, message, data}` wrapper every backend response uses.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

use crate::api::ApiError;

/// A backend response envelope.
///
/// When `success` is `false` the `data` field is ignored and `message` is the
/// error. `message` and `data` may both be absent or `null`; a missing
/// `message` reads as the empty string.
///
/// The default type parameter keeps `data` as raw JSON so the success flag can
/// be checked before the payload is interpreted; see [`Envelope::into_data`].
///
/// # Example
///
/// ```rust
/// use shop_backend::Envelope;
///
/// let envelope: Envelope = serde_json::from_str(
///     r#"{"success": true, "message": "", "data": [1, 2, 3]}"#,
/// ).unwrap();
///
/// let data: Vec<u32> = envelope.into_data().unwrap();
/// assert_eq!(data, vec![1, 2, 3]);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Envelope<T = serde_json::Value> {
    /// Application-level success flag.
    pub success: bool,

    /// Human-readable status, the error text when `success` is `false`.
    #[serde(default, deserialize_with = "deserialize_message")]
    pub message: String,

    /// The payload.
    #[serde(default)]
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    /// Creates a successful envelope wrapping `data`.
    pub const fn success(data: T) -> Self {
        Self {
            success: true,
            message: String::new(),
            data: Some(data),
        }
    }

    /// Creates a failed envelope carrying `message`.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
        }
    }
}

impl Envelope {
    /// Parses an envelope from a raw response body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Deserialization`] if the body is not a JSON object
    /// with a boolean `success` field.
    pub fn from_body(body: &str) -> Result<Self, ApiError> {
        serde_json::from_str(body).map_err(ApiError::Deserialization)
    }

    /// Unwraps the payload as `T`.
    ///
    /// A missing `data` field is treated as JSON `null`, so `T = ()` or
    /// `T = Option<_>` work for endpoints that return no payload.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Application`] if `success` is `false`
    /// - [`ApiError::Deserialization`] if `data` does not match `T`
    pub fn into_data<T: DeserializeOwned>(self) -> Result<T, ApiError> {
        if !self.success {
            return Err(ApiError::Application {
                message: self.message,
            });
        }

        serde_json::from_value(self.data.unwrap_or(serde_json::Value::Null))
            .map_err(ApiError::Deserialization)
    }
}

fn deserialize_message<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
