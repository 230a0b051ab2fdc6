//! Operational endpoints: `/health` never touches the store, `/ready` pings it.

use std::sync::Arc;

use actix_web::{http::StatusCode, web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::database::DatabaseClient;

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub checks: HealthChecks,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthChecks {
    pub database: String,
    pub application: String,
}

impl HealthResponse {
    fn live() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            checks: HealthChecks {
                database: "not_checked".to_string(),
                application: "healthy".to_string(),
            },
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ReadinessResponse {
    pub ready: bool,
    pub checks: ReadinessChecks,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ReadinessChecks {
    pub database: bool,
    pub application: bool,
}

impl ReadinessResponse {
    fn with_store(reachable: bool) -> Self {
        Self {
            ready: reachable,
            checks: ReadinessChecks {
                database: reachable,
                application: true,
            },
        }
    }

    fn status_code(&self) -> StatusCode {
        if self.ready {
            StatusCode::OK
        } else {
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}

/// GET /health
pub async fn liveness() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse::live())
}

/// GET /ready
///
/// 503 while the document store does not answer a ping.
pub async fn readiness(database: web::Data<Arc<dyn DatabaseClient>>) -> HttpResponse {
    let reachable = database
        .ping()
        .await
        .inspect_err(|err| tracing::warn!(error = %err, "Document store ping failed"))
        .is_ok();

    let response = ReadinessResponse::with_store(reachable);
    HttpResponse::build(response.status_code()).json(response)
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(liveness))
        .route("/ready", web::get().to(readiness));
}
