use std::sync::Arc;

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::{doc, Bson, Document};
use mongodb::{Client, Collection, Database};

use super::{DatabaseClient, DocumentCollection};
use crate::core::Result;

/// MongoDB-backed database client
#[derive(Clone)]
pub struct MongoDatabaseClient {
    database: Database,
}

impl MongoDatabaseClient {
    pub fn new(database: Database) -> Self {
        Self { database }
    }

    /// Connect using a `mongodb://` connection string and select `database_name`
    pub async fn connect(url: &str, database_name: &str) -> Result<Self> {
        let client = Client::with_uri_str(url).await?;
        Ok(Self::new(client.database(database_name)))
    }
}

#[async_trait]
impl DatabaseClient for MongoDatabaseClient {
    fn collection(&self, name: &str) -> Arc<dyn DocumentCollection> {
        Arc::new(MongoCollection::new(self.database.collection::<Document>(name)))
    }

    async fn ping(&self) -> Result<()> {
        self.database.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }
}

/// Collection handle over raw BSON documents
#[derive(Clone)]
pub struct MongoCollection {
    inner: Collection<Document>,
}

impl MongoCollection {
    pub fn new(inner: Collection<Document>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl DocumentCollection for MongoCollection {
    async fn find_one(&self, filter: Document) -> Result<Option<Document>> {
        Ok(self.inner.find_one(filter).await?)
    }

    async fn find_many(&self, filter: Document) -> Result<Vec<Document>> {
        let cursor = self.inner.find(filter).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn insert_one(&self, document: Document) -> Result<Bson> {
        let result = self.inner.insert_one(document).await?;
        Ok(result.inserted_id)
    }

    async fn replace_one(&self, filter: Document, replacement: Document) -> Result<u64> {
        let result = self.inner.replace_one(filter, replacement).await?;
        Ok(result.matched_count)
    }

    async fn delete_one(&self, filter: Document) -> Result<u64> {
        let result = self.inner.delete_one(filter).await?;
        Ok(result.deleted_count)
    }
}
