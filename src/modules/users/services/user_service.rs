use std::sync::Arc;

use async_trait::async_trait;

use crate::core::{RequestContext, Result};
use crate::modules::users::models::{User, UserSchema};
use crate::modules::users::repositories::UserRepository;

/// User workflow seen by the HTTP layer
///
/// Implementations do not validate input and do not reinterpret errors.
#[async_trait]
pub trait UserService: Send + Sync {
    async fn get_user_by_id(&self, ctx: &RequestContext, id: &str) -> Result<User>;

    async fn get_users(&self, ctx: &RequestContext) -> Result<Vec<User>>;

    async fn create_user(&self, ctx: &RequestContext, user: User) -> Result<String>;

    async fn update_user(&self, ctx: &RequestContext, user: User, id: &str) -> Result<()>;

    async fn delete_user_by_id(&self, ctx: &RequestContext, id: &str) -> Result<()>;
}

/// Service for user business logic
///
/// Converts between the public entity and the stored schema and delegates
/// one-to-one to the repository. Business rules such as enrichment or event
/// emission belong here.
pub struct UserEventService {
    user_repo: Arc<dyn UserRepository>,
}

impl UserEventService {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }
}

#[async_trait]
impl UserService for UserEventService {
    async fn get_user_by_id(&self, ctx: &RequestContext, id: &str) -> Result<User> {
        tracing::debug!(correlation_id = %ctx.correlation_id(), user_id = %id, "Executing get_user_by_id");
        self.user_repo.find_by_id(ctx, id).await
    }

    async fn get_users(&self, ctx: &RequestContext) -> Result<Vec<User>> {
        tracing::debug!(correlation_id = %ctx.correlation_id(), "Executing get_users");
        self.user_repo.find_all(ctx).await
    }

    async fn create_user(&self, ctx: &RequestContext, user: User) -> Result<String> {
        tracing::debug!(correlation_id = %ctx.correlation_id(), "Executing create_user");
        let schema = UserSchema::from(user);
        self.user_repo.insert(ctx, schema).await
    }

    async fn update_user(&self, ctx: &RequestContext, user: User, id: &str) -> Result<()> {
        tracing::debug!(correlation_id = %ctx.correlation_id(), user_id = %id, "Executing update_user");
        let schema = UserSchema::from(user);
        self.user_repo.update(ctx, schema, id).await
    }

    async fn delete_user_by_id(&self, ctx: &RequestContext, id: &str) -> Result<()> {
        tracing::debug!(correlation_id = %ctx.correlation_id(), user_id = %id, "Executing delete_user_by_id");
        self.user_repo.delete(ctx, id).await
    }
}
