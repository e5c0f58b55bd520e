//! User records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::lenient::deserialize_opt_timestamp;

/// A user account as returned by `/api/users`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    /// The unique identifier of the user.
    pub id: i64,

    /// The user's login name.
    pub username: String,

    /// The user's email address.
    pub email: String,

    /// When the user was created.
    #[serde(
        default,
        deserialize_with = "deserialize_opt_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<DateTime<Utc>>,
}

/// Request body for creating a user.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct NewUser<'a> {
    /// The login name for the new user.
    pub username: &'a str,
    /// The email address for the new user.
    pub email: &'a str,
}
