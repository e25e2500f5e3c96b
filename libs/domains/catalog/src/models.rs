use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Collection holding catalog products
pub const PRODUCT_COLLECTION: &str = "product";

fn default_in_stock() -> bool {
    true
}

/// Product as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Hex ObjectId of the stored document
    #[schema(example = "65a1b2c3d4e5f6a7b8c9d0e1")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    pub category: String,
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
    /// Image URL
    #[serde(default)]
    pub image: Option<String>,
}

/// Payload for creating a product
///
/// Client-supplied `id`/`_id` fields are ignored; the store assigns the identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct NewProduct {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,

    #[serde(default)]
    pub description: Option<String>,

    #[validate(range(min = 0.0, message = "price must not be negative"))]
    pub price: f64,

    #[validate(length(min = 1, message = "category must not be empty"))]
    pub category: String,

    #[serde(default = "default_in_stock")]
    pub in_stock: bool,

    #[serde(default)]
    pub image: Option<String>,
}

/// Query parameters for listing products
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct ProductQuery {
    /// Exact category match; an empty value lists everything
    pub category: Option<String>,
}

impl ProductQuery {
    pub fn by_category(category: impl Into<String>) -> Self {
        Self {
            category: Some(category.into()),
        }
    }

    /// Category to filter on, if any
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref().filter(|c| !c.is_empty())
    }
}

/// Response for a created product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CreatedProduct {
    #[schema(example = "65a1b2c3d4e5f6a7b8c9d0e1")]
    pub id: String,
}

/// Outcome of seeding the demo catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SeedReport {
    pub inserted: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl SeedReport {
    pub fn inserted(count: u64) -> Self {
        Self {
            inserted: count,
            message: None,
        }
    }

    pub fn already_seeded() -> Self {
        Self {
            inserted: 0,
            message: Some("Products already exist".to_string()),
        }
    }
}

/// Store connectivity snapshot used by the diagnostics endpoint
#[derive(Debug, Clone, PartialEq)]
pub struct StoreDiagnostics {
    pub available: bool,
    /// Up to ten collection names, or the listing error
    pub collections: Result<Vec<String>, String>,
}
