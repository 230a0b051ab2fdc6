//! Document store abstraction consumed by the repositories.
//!
//! A [`DatabaseClient`] hands out named [`DocumentCollection`] handles. Two
//! backends exist: MongoDB for deployments and a process-local store used by
//! tests and the `memory` backend.

use std::sync::Arc;

use async_trait::async_trait;
use mongodb::bson::{Bson, Document};

use crate::core::Result;

pub mod memory;
pub mod mongo;

pub use memory::{MemoryCollection, MemoryDatabaseClient};
pub use mongo::{MongoCollection, MongoDatabaseClient};

/// Operations available on a single collection
///
/// Each method is one store round-trip.
#[async_trait]
pub trait DocumentCollection: Send + Sync {
    /// First document matching `filter`, if any
    async fn find_one(&self, filter: Document) -> Result<Option<Document>>;

    /// Every document matching `filter`, in the store's natural order
    async fn find_many(&self, filter: Document) -> Result<Vec<Document>>;

    /// Insert one document and return the identifier the store assigned
    async fn insert_one(&self, document: Document) -> Result<Bson>;

    /// Replace the first document matching `filter`; returns the matched count
    async fn replace_one(&self, filter: Document, replacement: Document) -> Result<u64>;

    /// Delete the first document matching `filter`; returns the deleted count
    async fn delete_one(&self, filter: Document) -> Result<u64>;
}

/// Source of named collection handles
#[async_trait]
pub trait DatabaseClient: Send + Sync {
    fn collection(&self, name: &str) -> Arc<dyn DocumentCollection>;

    /// Round-trip to the store to check it is reachable
    async fn ping(&self) -> Result<()>;
}
