//! Conversion between stored documents and API shapes.
//!
//! Stored documents carry their identifier in `_id` as an ObjectId. Outbound
//! documents expose it as a hex string under `id`, and any other top-level
//! ObjectId value is rendered as hex as well.

use std::collections::BTreeSet;

use mongodb::bson::{self, doc, Bson, Document};

use crate::error::CatalogResult;
use crate::models::{NewProduct, Product};

pub const STORED_ID_FIELD: &str = "_id";
pub const ID_FIELD: &str = "id";

/// Rewrite a stored document for external consumption.
///
/// `_id` is removed and re-emitted as the string field `id`, replacing any
/// stored `id`, whatever its stored type. An empty document passes through
/// unchanged.
pub fn serialize_document(mut stored: Document) -> Document {
    let stored_id = stored.remove(STORED_ID_FIELD);

    let mut out = Document::new();
    if let Some(id) = stored_id {
        out.insert(ID_FIELD, id_to_string(id));
    }

    for (key, value) in stored {
        if key == ID_FIELD && out.contains_key(ID_FIELD) {
            continue;
        }
        out.insert(key, externalize(value));
    }

    out
}

fn id_to_string(id: Bson) -> String {
    match id {
        Bson::ObjectId(oid) => oid.to_hex(),
        Bson::String(s) => s,
        other => other.to_string(),
    }
}

fn externalize(value: Bson) -> Bson {
    match value {
        Bson::ObjectId(oid) => Bson::String(oid.to_hex()),
        other => other,
    }
}

/// Decode a stored document into a [`Product`]; unknown fields are dropped.
pub fn product_from_document(stored: Document) -> CatalogResult<Product> {
    Ok(bson::from_document(serialize_document(stored))?)
}

/// Document written to the store for a new product, without an identifier.
pub fn new_product_document(input: &NewProduct) -> Document {
    doc! {
        "title": input.title.clone(),
        "description": input.description.clone(),
        "price": input.price,
        "category": input.category.clone(),
        "in_stock": input.in_stock,
        "image": input.image.clone(),
    }
}

/// Sorted, de-duplicated non-empty strings from raw distinct values.
pub fn distinct_text_values(values: Vec<Bson>) -> Vec<String> {
    values
        .into_iter()
        .filter_map(|value| match value {
            Bson::String(s) if !s.is_empty() => Some(s),
            _ => None,
        })
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
