use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, Bson, Document};

use crate::error::CatalogResult;

/// Untyped document store the catalog is persisted in.
///
/// Every operation fails with [`CatalogError::StoreUnavailable`] when no
/// database is configured.
///
/// [`CatalogError::StoreUnavailable`]: crate::error::CatalogError::StoreUnavailable
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Whether a database is configured
    fn is_available(&self) -> bool;

    /// All documents in `collection` matching `filter`
    async fn find(&self, collection: &str, filter: Document) -> CatalogResult<Vec<Document>>;

    /// First document matching `filter`
    async fn find_one(&self, collection: &str, filter: Document)
        -> CatalogResult<Option<Document>>;

    /// Insert one document and return its assigned identifier
    async fn insert(&self, collection: &str, document: Document) -> CatalogResult<ObjectId>;

    /// Insert several documents and return how many were written
    async fn insert_many(&self, collection: &str, documents: Vec<Document>) -> CatalogResult<u64>;

    /// Distinct raw values of `field` across the collection
    async fn distinct(&self, collection: &str, field: &str) -> CatalogResult<Vec<Bson>>;

    /// Number of documents matching `filter`
    async fn count(&self, collection: &str, filter: Document) -> CatalogResult<u64>;

    /// Collection names in the database
    async fn collection_names(&self) -> CatalogResult<Vec<String>>;
}
