// Public User entity exchanged over HTTP.
//
// Missing or null fields fall back to their zero value so that the
// controller, not the deserializer, decides which fields are required.

use serde::{Deserialize, Deserializer, Serialize};

/// Treat an explicit JSON `null` like an absent field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A user as seen by API clients
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    /// Store-assigned identifier; ignored on create
    #[serde(alias = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(deserialize_with = "null_as_default")]
    pub name: String,

    #[serde(deserialize_with = "null_as_default")]
    pub email: String,

    /// Free-text classification, e.g. "Customer"
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub user_type: String,

    #[serde(deserialize_with = "null_as_default")]
    pub age: i64,

    #[serde(
        rename = "isActive",
        alias = "is_active",
        deserialize_with = "null_as_default"
    )]
    pub is_active: bool,
}

/// Response body for `GET /users`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsersResponse {
    pub total: usize,
    pub users: Vec<User>,
}

impl From<Vec<User>> for UsersResponse {
    fn from(users: Vec<User>) -> Self {
        Self {
            total: users.len(),
            users,
        }
    }
}

/// Response body for `POST /users`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateUserResponse {
    pub id: String,
}
