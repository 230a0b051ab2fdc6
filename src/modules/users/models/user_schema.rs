// Stored representation of a User in the "users" collection.
//
// Structurally parallel to `User`; the identifier is the store's native
// ObjectId under `_id`.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use super::user::User;

/// Document shape persisted in the users collection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSchema {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub email: String,

    #[serde(rename = "type", default)]
    pub user_type: String,

    #[serde(default)]
    pub age: i64,

    #[serde(rename = "isActive", default)]
    pub is_active: bool,
}

impl From<User> for UserSchema {
    /// An id that is not a well-formed ObjectId is dropped.
    fn from(user: User) -> Self {
        Self {
            id: user
                .id
                .as_deref()
                .and_then(|id| ObjectId::parse_str(id.trim()).ok()),
            name: user.name,
            email: user.email,
            user_type: user.user_type,
            age: user.age,
            is_active: user.is_active,
        }
    }
}

impl From<UserSchema> for User {
    fn from(schema: UserSchema) -> Self {
        Self {
            id: schema.id.map(|id| id.to_hex()),
            name: schema.name,
            email: schema.email,
            user_type: schema.user_type,
            age: schema.age,
            is_active: schema.is_active,
        }
    }
}
