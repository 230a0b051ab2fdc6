//! User controller for HTTP endpoints
//!
//! Binds path parameters and bodies, validates them, calls the user service
//! and shapes the responses. Validation runs in a fixed order (id, payload,
//! name, email) and stops at the first failure.

use std::sync::Arc;

use actix_web::{web, HttpResponse};

use crate::core::{AppError, RequestContext};
use crate::modules::users::models::{CreateUserResponse, User, UsersResponse};
use crate::modules::users::services::UserService;

/// Reject ids that are empty once trimmed
pub fn require_id(id: &str) -> Result<&str, AppError> {
    if id.trim().is_empty() {
        return Err(AppError::validation("'id' is required"));
    }
    Ok(id)
}

/// Parse a request body into a User and check its required fields
pub fn parse_user_payload(body: &[u8]) -> Result<User, AppError> {
    let user: User = serde_json::from_slice(body)
        .map_err(|_| AppError::validation("invalid request payload"))?;

    if user.name.trim().is_empty() {
        return Err(AppError::validation("'name' is required"));
    }
    if user.email.trim().is_empty() {
        return Err(AppError::validation("'email' is required"));
    }

    Ok(user)
}

fn log_failure(ctx: &RequestContext, operation: &str, err: &AppError) {
    tracing::error!(
        correlation_id = %ctx.correlation_id(),
        operation,
        error = %err,
        "Request failed"
    );
}

/// Get user by ID
///
/// GET /users/{id}
pub async fn get_user_by_id(
    service: web::Data<Arc<dyn UserService>>,
    ctx: RequestContext,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let user_id = path.into_inner();
    tracing::info!(correlation_id = %ctx.correlation_id(), user_id = %user_id, "Executing GetUserById");

    let id = require_id(&user_id).inspect_err(|err| log_failure(&ctx, "GetUserById", err))?;
    let user = service
        .get_user_by_id(&ctx, id)
        .await
        .inspect_err(|err| log_failure(&ctx, "GetUserById", err))?;

    tracing::info!(correlation_id = %ctx.correlation_id(), user_id = %user_id, "Executed GetUserById");
    Ok(HttpResponse::Ok().json(user))
}

/// List all users
///
/// GET /users
pub async fn get_users(
    service: web::Data<Arc<dyn UserService>>,
    ctx: RequestContext,
) -> Result<HttpResponse, AppError> {
    tracing::info!(correlation_id = %ctx.correlation_id(), "Executing GetUsers");

    let users = service
        .get_users(&ctx)
        .await
        .inspect_err(|err| log_failure(&ctx, "GetUsers", err))?;

    tracing::info!(correlation_id = %ctx.correlation_id(), total = users.len(), "Executed GetUsers");
    Ok(HttpResponse::Ok().json(UsersResponse::from(users)))
}

/// Create a new user
///
/// POST /users
pub async fn create_user(
    service: web::Data<Arc<dyn UserService>>,
    ctx: RequestContext,
    body: web::Bytes,
) -> Result<HttpResponse, AppError> {
    tracing::info!(correlation_id = %ctx.correlation_id(), "Executing CreateUser");

    let user = parse_user_payload(&body).inspect_err(|err| log_failure(&ctx, "CreateUser", err))?;
    let id = service
        .create_user(&ctx, user)
        .await
        .inspect_err(|err| log_failure(&ctx, "CreateUser", err))?;

    tracing::info!(correlation_id = %ctx.correlation_id(), user_id = %id, "Executed CreateUser");
    Ok(HttpResponse::Created().json(CreateUserResponse { id }))
}

/// Replace an existing user
///
/// PUT /users/{id} (POST is accepted as well)
pub async fn update_user(
    service: web::Data<Arc<dyn UserService>>,
    ctx: RequestContext,
    path: web::Path<String>,
    body: web::Bytes,
) -> Result<HttpResponse, AppError> {
    let user_id = path.into_inner();
    tracing::info!(correlation_id = %ctx.correlation_id(), user_id = %user_id, "Executing UpdateUser");

    let id = require_id(&user_id).inspect_err(|err| log_failure(&ctx, "UpdateUser", err))?;
    let user = parse_user_payload(&body).inspect_err(|err| log_failure(&ctx, "UpdateUser", err))?;
    service
        .update_user(&ctx, user, id)
        .await
        .inspect_err(|err| log_failure(&ctx, "UpdateUser", err))?;

    tracing::info!(correlation_id = %ctx.correlation_id(), user_id = %user_id, "Executed UpdateUser");
    Ok(HttpResponse::Ok().finish())
}

/// Delete user by ID
///
/// DELETE /users/{id}
pub async fn delete_user_by_id(
    service: web::Data<Arc<dyn UserService>>,
    ctx: RequestContext,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let user_id = path.into_inner();
    tracing::info!(correlation_id = %ctx.correlation_id(), user_id = %user_id, "Executing DeleteUserById");

    let id = require_id(&user_id).inspect_err(|err| log_failure(&ctx, "DeleteUserById", err))?;
    service
        .delete_user_by_id(&ctx, id)
        .await
        .inspect_err(|err| log_failure(&ctx, "DeleteUserById", err))?;

    tracing::info!(correlation_id = %ctx.correlation_id(), user_id = %user_id, "Executed DeleteUserById");
    Ok(HttpResponse::NoContent().finish())
}

/// Configure user routes
///
/// The id segment may be empty so that `/users/` reaches the id validation.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/users")
            .service(
                web::resource("")
                    .route(web::get().to(get_users))
                    .route(web::post().to(create_user)),
            )
            .service(
                web::resource("/{id:[^/]*}")
                    .route(web::get().to(get_user_by_id))
                    .route(web::put().to(update_user))
                    .route(web::post().to(update_user))
                    .route(web::delete().to(delete_user_by_id)),
            ),
    );
}
