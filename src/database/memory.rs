use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, Bson, Document};
use tokio::sync::RwLock;

use super::{DatabaseClient, DocumentCollection};
use crate::core::Result;

const ID_FIELD: &str = "_id";

/// Process-local database client
///
/// Collections are created on first use and live as long as the client.
#[derive(Default)]
pub struct MemoryDatabaseClient {
    collections: Mutex<HashMap<String, Arc<MemoryCollection>>>,
}

impl MemoryDatabaseClient {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DatabaseClient for MemoryDatabaseClient {
    fn collection(&self, name: &str) -> Arc<dyn DocumentCollection> {
        let mut collections = self
            .collections
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let collection = collections
            .entry(name.to_string())
            .or_insert_with(|| Arc::new(MemoryCollection::new()));
        collection.clone()
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}

/// Documents kept in insertion order
#[derive(Default)]
pub struct MemoryCollection {
    documents: RwLock<Vec<Document>>,
}

impl MemoryCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.documents.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.documents.read().await.is_empty()
    }
}

/// Field-by-field equality; an empty filter matches everything
fn matches(document: &Document, filter: &Document) -> bool {
    filter
        .iter()
        .all(|(key, expected)| document.get(key) == Some(expected))
}

#[async_trait]
impl DocumentCollection for MemoryCollection {
    async fn find_one(&self, filter: Document) -> Result<Option<Document>> {
        let documents = self.documents.read().await;
        Ok(documents.iter().find(|doc| matches(doc, &filter)).cloned())
    }

    async fn find_many(&self, filter: Document) -> Result<Vec<Document>> {
        let documents = self.documents.read().await;
        Ok(documents
            .iter()
            .filter(|doc| matches(doc, &filter))
            .cloned()
            .collect())
    }

    async fn insert_one(&self, mut document: Document) -> Result<Bson> {
        if !document.contains_key(ID_FIELD) {
            document.insert(ID_FIELD, ObjectId::new());
        }
        let id = document.get(ID_FIELD).cloned().unwrap_or(Bson::Null);

        self.documents.write().await.push(document);
        Ok(id)
    }

    async fn replace_one(&self, filter: Document, mut replacement: Document) -> Result<u64> {
        let mut documents = self.documents.write().await;
        let Some(existing) = documents.iter_mut().find(|doc| matches(doc, &filter)) else {
            return Ok(0);
        };

        // The stored identifier survives a replace.
        if let Some(id) = existing.get(ID_FIELD).cloned() {
            replacement.insert(ID_FIELD, id);
        }
        *existing = replacement;
        Ok(1)
    }

    async fn delete_one(&self, filter: Document) -> Result<u64> {
        let mut documents = self.documents.write().await;
        match documents.iter().position(|doc| matches(doc, &filter)) {
            Some(index) => {
                documents.remove(index);
                Ok(1)
            }
            None => Ok(0),
        }
    }
}
