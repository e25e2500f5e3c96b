//! Catalog Domain
//!
//! Clothing product catalog stored in MongoDB.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Validation, degraded-mode rules, seeding
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ DocumentStore│ ← Untyped document access (trait + MongoDB implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │    Codec    │  ← `_id` → `id`, ObjectId → hex, schema projection
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_catalog::{handlers, CatalogService, MongoDocumentStore};
//! use mongodb::Client;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::with_uri_str("mongodb://localhost:27017").await?;
//! let store = MongoDocumentStore::new(client.database("catalog"));
//!
//! // Without a database: MongoDocumentStore::unavailable()
//! let router = handlers::router(CatalogService::new(store));
//! # Ok(())
//! # }
//! ```

pub mod codec;
pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod seed;
pub mod service;

pub use error::{CatalogError, CatalogResult};
pub use handlers::ApiDoc;
pub use models::{
    CreatedProduct, NewProduct, Product, ProductQuery, SeedReport, StoreDiagnostics,
    PRODUCT_COLLECTION,
};
pub use self::mongodb::MongoDocumentStore;
pub use repository::DocumentStore;
pub use service::CatalogService;
