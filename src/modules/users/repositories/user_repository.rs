// User persistence against the "users" document collection.
//
// Translates find-by-id, find-all, insert, update and delete into single
// store calls and maps store identifiers to and from the entity key.

use std::sync::Arc;

use async_trait::async_trait;
use mongodb::bson::{self, doc, oid::ObjectId, Bson};

use crate::core::{AppError, RequestContext, Result};
use crate::database::{DatabaseClient, DocumentCollection};
use crate::modules::users::models::{User, UserSchema};

/// Default collection name for users
pub const USERS_COLLECTION: &str = "users";

/// Persistence operations for users
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fetch one user by its hex identifier
    async fn find_by_id(&self, ctx: &RequestContext, id: &str) -> Result<User>;

    /// Fetch every user; order is whatever the store returns
    async fn find_all(&self, ctx: &RequestContext) -> Result<Vec<User>>;

    /// Insert a user and return the store-assigned identifier
    async fn insert(&self, ctx: &RequestContext, user: UserSchema) -> Result<String>;

    /// Replace the user stored under `id`
    async fn update(&self, ctx: &RequestContext, user: UserSchema, id: &str) -> Result<()>;

    /// Remove the user stored under `id`
    async fn delete(&self, ctx: &RequestContext, id: &str) -> Result<()>;
}

/// Repository backed by any [`DocumentCollection`]
#[derive(Clone)]
pub struct DocumentUserRepository {
    collection: Arc<dyn DocumentCollection>,
}

impl DocumentUserRepository {
    pub fn new(collection: Arc<dyn DocumentCollection>) -> Self {
        Self { collection }
    }

    /// Bind to the named collection of `client`
    pub fn from_client(client: &dyn DatabaseClient, collection_name: &str) -> Self {
        Self::new(client.collection(collection_name))
    }
}

fn parse_id(id: &str) -> Result<ObjectId> {
    ObjectId::parse_str(id.trim()).map_err(|_| AppError::invalid_identifier())
}

fn id_to_string(id: Bson) -> String {
    match id {
        Bson::ObjectId(oid) => oid.to_hex(),
        Bson::String(value) => value,
        other => other.to_string(),
    }
}

/// Serialize for writes; `_id` is owned by the store
fn to_document(mut user: UserSchema) -> Result<bson::Document> {
    user.id = None;
    Ok(bson::to_document(&user)?)
}

#[async_trait]
impl UserRepository for DocumentUserRepository {
    async fn find_by_id(&self, ctx: &RequestContext, id: &str) -> Result<User> {
        tracing::debug!(correlation_id = %ctx.correlation_id(), user_id = %id, "Finding user by id");
        let oid = parse_id(id)?;

        let document = self
            .collection
            .find_one(doc! { "_id": oid })
            .await?
            .ok_or_else(AppError::not_found)?;
        let user: UserSchema = bson::from_document(document)?;

        tracing::debug!(correlation_id = %ctx.correlation_id(), user_id = %id, "Found user");
        Ok(user.into())
    }

    async fn find_all(&self, ctx: &RequestContext) -> Result<Vec<User>> {
        tracing::debug!(correlation_id = %ctx.correlation_id(), "Finding all users");
        let documents = self.collection.find_many(doc! {}).await?;

        let users = documents
            .into_iter()
            .map(|document| bson::from_document::<UserSchema>(document).map(User::from))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        tracing::debug!(correlation_id = %ctx.correlation_id(), count = users.len(), "Found users");
        Ok(users)
    }

    async fn insert(&self, ctx: &RequestContext, user: UserSchema) -> Result<String> {
        tracing::debug!(correlation_id = %ctx.correlation_id(), "Inserting user");
        let document = to_document(user)?;

        let id = id_to_string(self.collection.insert_one(document).await?);

        tracing::debug!(correlation_id = %ctx.correlation_id(), user_id = %id, "Inserted user");
        Ok(id)
    }

    async fn update(&self, ctx: &RequestContext, user: UserSchema, id: &str) -> Result<()> {
        tracing::debug!(correlation_id = %ctx.correlation_id(), user_id = %id, "Updating user");
        let oid = parse_id(id)?;
        let document = to_document(user)?;

        let matched = self
            .collection
            .replace_one(doc! { "_id": oid }, document)
            .await?;
        if matched == 0 {
            return Err(AppError::not_found());
        }

        tracing::debug!(correlation_id = %ctx.correlation_id(), user_id = %id, "Updated user");
        Ok(())
    }

    async fn delete(&self, ctx: &RequestContext, id: &str) -> Result<()> {
        tracing::debug!(correlation_id = %ctx.correlation_id(), user_id = %id, "Deleting user");
        let oid = parse_id(id)?;

        let deleted = self.collection.delete_one(doc! { "_id": oid }).await?;
        if deleted == 0 {
            return Err(AppError::not_found());
        }

        tracing::debug!(correlation_id = %ctx.correlation_id(), user_id = %id, "Deleted user");
        Ok(())
    }
}
