//! MongoDB implementation of DocumentStore

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId, Bson, Document},
    Collection, Database,
};
use tracing::instrument;

use crate::error::{CatalogError, CatalogResult};
use crate::repository::DocumentStore;

/// MongoDB-backed [`DocumentStore`]; without a database every call reports
/// the store as unavailable.
#[derive(Clone)]
pub struct MongoDocumentStore {
    db: Option<Database>,
}

impl MongoDocumentStore {
    pub fn new(db: Database) -> Self {
        Self { db: Some(db) }
    }

    /// Store used when no database is configured
    pub fn unavailable() -> Self {
        Self { db: None }
    }

    /// The underlying database, if configured
    pub fn database(&self) -> Option<&Database> {
        self.db.as_ref()
    }

    fn collection(&self, name: &str) -> CatalogResult<Collection<Document>> {
        self.db
            .as_ref()
            .map(|db| db.collection::<Document>(name))
            .ok_or(CatalogError::StoreUnavailable)
    }
}

#[async_trait]
impl DocumentStore for MongoDocumentStore {
    fn is_available(&self) -> bool {
        self.db.is_some()
    }

    #[instrument(skip(self, filter))]
    async fn find(&self, collection: &str, filter: Document) -> CatalogResult<Vec<Document>> {
        let cursor = self.collection(collection)?.find(filter).await?;
        let documents: Vec<Document> = cursor.try_collect().await?;
        Ok(documents)
    }

    #[instrument(skip(self, filter))]
    async fn find_one(
        &self,
        collection: &str,
        filter: Document,
    ) -> CatalogResult<Option<Document>> {
        Ok(self.collection(collection)?.find_one(filter).await?)
    }

    #[instrument(skip(self, document))]
    async fn insert(&self, collection: &str, document: Document) -> CatalogResult<ObjectId> {
        let result = self.collection(collection)?.insert_one(document).await?;

        match result.inserted_id {
            Bson::ObjectId(id) => Ok(id),
            other => Err(CatalogError::Database(format!(
                "Unexpected inserted id type: {:?}",
                other.element_type()
            ))),
        }
    }

    #[instrument(skip(self, documents), fields(count = documents.len()))]
    async fn insert_many(&self, collection: &str, documents: Vec<Document>) -> CatalogResult<u64> {
        if documents.is_empty() {
            return Ok(0);
        }

        let result = self.collection(collection)?.insert_many(documents).await?;
        Ok(result.inserted_ids.len() as u64)
    }

    #[instrument(skip(self))]
    async fn distinct(&self, collection: &str, field: &str) -> CatalogResult<Vec<Bson>> {
        Ok(self
            .collection(collection)?
            .distinct(field, doc! {})
            .await?)
    }

    #[instrument(skip(self, filter))]
    async fn count(&self, collection: &str, filter: Document) -> CatalogResult<u64> {
        Ok(self.collection(collection)?.count_documents(filter).await?)
    }

    #[instrument(skip(self))]
    async fn collection_names(&self) -> CatalogResult<Vec<String>> {
        let db = self.db.as_ref().ok_or(CatalogError::StoreUnavailable)?;
        Ok(db.list_collection_names().await?)
    }
}
