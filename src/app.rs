//! Composition root: builds the layers once and hands them to actix-web.

use std::sync::Arc;

use actix_web::web;

use crate::database::DatabaseClient;
use crate::modules::health;
use crate::modules::users::{
    controllers as user_controllers, DocumentUserRepository, UserEventService, UserService,
};

/// Shared, immutable handles injected into every worker
#[derive(Clone)]
pub struct AppState {
    pub database: Arc<dyn DatabaseClient>,
    pub user_service: Arc<dyn UserService>,
}

impl AppState {
    /// Wire repository and service on top of `database`
    pub fn new(database: Arc<dyn DatabaseClient>, users_collection: &str) -> Self {
        let user_repo = Arc::new(DocumentUserRepository::from_client(
            database.as_ref(),
            users_collection,
        ));
        let user_service: Arc<dyn UserService> = Arc::new(UserEventService::new(user_repo));

        Self {
            database,
            user_service,
        }
    }

    /// Register application data and every route
    pub fn configure(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(web::Data::new(self.user_service.clone()))
            .app_data(web::Data::new(self.database.clone()))
            .configure(health::configure)
            .configure(user_controllers::configure);
    }
}
