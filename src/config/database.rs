use std::env;
use std::sync::Arc;

use serde::Deserialize;

use crate::core::{AppError, Result};
use crate::database::{DatabaseClient, MemoryDatabaseClient, MongoDatabaseClient};
use crate::modules::users::repositories::USERS_COLLECTION;

/// Which document store backs the service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseBackend {
    Mongodb,
    Memory,
}

impl std::str::FromStr for DatabaseBackend {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mongodb" | "mongo" => Ok(DatabaseBackend::Mongodb),
            "memory" => Ok(DatabaseBackend::Memory),
            other => Err(AppError::configuration(format!(
                "Invalid DATABASE_BACKEND: {}",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub backend: DatabaseBackend,
    pub url: String,
    pub name: String,
    pub users_collection: String,
}

impl DatabaseConfig {
    pub fn from_env() -> Result<Self> {
        let backend: DatabaseBackend = env::var("DATABASE_BACKEND")
            .unwrap_or_else(|_| "mongodb".to_string())
            .parse()?;

        let url = match backend {
            DatabaseBackend::Mongodb => env::var("DATABASE_URL")
                .map_err(|_| AppError::configuration("DATABASE_URL not set"))?,
            DatabaseBackend::Memory => env::var("DATABASE_URL").unwrap_or_default(),
        };

        Ok(DatabaseConfig {
            backend,
            url,
            name: env::var("DATABASE_NAME").unwrap_or_else(|_| "user_management".to_string()),
            users_collection: env::var("USERS_COLLECTION")
                .unwrap_or_else(|_| USERS_COLLECTION.to_string()),
        })
    }

    pub fn validate(&self) -> Result<()> {
        if self.backend == DatabaseBackend::Mongodb && self.url.trim().is_empty() {
            return Err(AppError::configuration("DATABASE_URL must not be empty"));
        }

        if self.name.trim().is_empty() {
            return Err(AppError::configuration("DATABASE_NAME must not be empty"));
        }

        if self.users_collection.trim().is_empty() {
            return Err(AppError::configuration(
                "USERS_COLLECTION must not be empty",
            ));
        }

        Ok(())
    }

    /// Create the database client for the configured backend
    pub async fn create_client(&self) -> Result<Arc<dyn DatabaseClient>> {
        match self.backend {
            DatabaseBackend::Mongodb => {
                let client = MongoDatabaseClient::connect(&self.url, &self.name).await?;
                Ok(Arc::new(client))
            }
            DatabaseBackend::Memory => Ok(Arc::new(MemoryDatabaseClient::new())),
        }
    }
}
