//! Catalog Service - Business logic layer

use std::sync::Arc;

use mongodb::bson::{doc, oid::ObjectId, Document};
use tracing::instrument;
use validator::Validate;

use crate::codec;
use crate::error::{CatalogError, CatalogResult};
use crate::models::{
    NewProduct, Product, ProductQuery, SeedReport, StoreDiagnostics, PRODUCT_COLLECTION,
};
use crate::repository::DocumentStore;
use crate::seed;

/// Most collection names reported by diagnostics
pub const MAX_DIAGNOSTIC_COLLECTIONS: usize = 10;

/// Catalog operations over a [`DocumentStore`].
///
/// Reads that have a sensible empty answer (listing, categories) degrade to it
/// when no database is configured; everything else reports the store as
/// unavailable.
pub struct CatalogService<S: DocumentStore> {
    store: Arc<S>,
}

impl<S: DocumentStore> CatalogService<S> {
    pub fn new(store: S) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    pub fn is_store_available(&self) -> bool {
        self.store.is_available()
    }

    /// List products, optionally restricted to one category (exact match)
    #[instrument(skip(self))]
    pub async fn list_products(&self, query: ProductQuery) -> CatalogResult<Vec<Product>> {
        let filter = build_filter(&query);

        let documents = match self.store.find(PRODUCT_COLLECTION, filter).await {
            Ok(documents) => documents,
            Err(CatalogError::StoreUnavailable) => {
                tracing::warn!("Listing products without a database; returning empty list");
                return Ok(Vec::new());
            }
            Err(e) => return Err(e),
        };

        documents
            .into_iter()
            .map(codec::product_from_document)
            .collect()
    }

    /// Validate and store a new product, returning its hex id
    #[instrument(skip(self, input), fields(title = %input.title))]
    pub async fn create_product(&self, input: NewProduct) -> CatalogResult<String> {
        input.validate()?;

        let id = self
            .store
            .insert(PRODUCT_COLLECTION, codec::new_product_document(&input))
            .await?;

        tracing::info!(product_id = %id, "Product created");
        Ok(id.to_hex())
    }

    #[instrument(skip(self))]
    pub async fn get_product(&self, id: ObjectId) -> CatalogResult<Product> {
        let document = self
            .store
            .find_one(PRODUCT_COLLECTION, doc! { "_id": id })
            .await?
            .ok_or_else(|| CatalogError::NotFound(id.to_hex()))?;

        codec::product_from_document(document)
    }

    /// Sorted distinct non-empty categories; empty when the store cannot answer
    #[instrument(skip(self))]
    pub async fn list_categories(&self) -> Vec<String> {
        match self.store.distinct(PRODUCT_COLLECTION, "category").await {
            Ok(values) => codec::distinct_text_values(values),
            Err(e) => {
                tracing::warn!(error = %e, "Category lookup failed; returning empty list");
                Vec::new()
            }
        }
    }

    /// Insert the demo catalog unless the collection already holds products
    #[instrument(skip(self))]
    pub async fn seed_demo_products(&self) -> CatalogResult<SeedReport> {
        let existing = self.store.count(PRODUCT_COLLECTION, doc! {}).await?;
        if existing > 0 {
            tracing::info!(existing, "Seed skipped, products already exist");
            return Ok(SeedReport::already_seeded());
        }

        let documents: Vec<Document> = seed::demo_products()
            .iter()
            .map(codec::new_product_document)
            .collect();

        let inserted = self
            .store
            .insert_many(PRODUCT_COLLECTION, documents)
            .await?;

        tracing::info!(inserted, "Demo products seeded");
        Ok(SeedReport::inserted(inserted))
    }

    /// Connectivity snapshot; never fails
    #[instrument(skip(self))]
    pub async fn diagnostics(&self) -> StoreDiagnostics {
        if !self.store.is_available() {
            return StoreDiagnostics {
                available: false,
                collections: Ok(Vec::new()),
            };
        }

        let collections = self
            .store
            .collection_names()
            .await
            .map(|mut names| {
                names.truncate(MAX_DIAGNOSTIC_COLLECTIONS);
                names
            })
            .map_err(|e| e.to_string());

        StoreDiagnostics {
            available: true,
            collections,
        }
    }
}

fn build_filter(query: &ProductQuery) -> Document {
    match query.category() {
        Some(category) => doc! { "category": category },
        None => doc! {},
    }
}
