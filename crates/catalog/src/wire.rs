//! Catalog feed decoding.
//!
//! Feeds come in two shapes that differ only in how ratings are expressed:
//!
//! ```text
//! { "id": 1, ..., "rating": 4.3, "ratingCount": 214 }
//! { "id": 1, ..., "rating": { "rate": 4.3, "count": 214 } }
//! ```
//!
//! Both are normalized into [`Rating`] here so nothing downstream sees the wire
//! shape.

use std::collections::HashSet;

use serde::Deserialize;
use serde_json::Value;

use storefront_core::{DomainResult, Price, ProductId, Rating};

use crate::product::Product;
use crate::source::SourceError;

/// One product record as it appears in a catalog feed.
#[derive(Debug, Clone, Deserialize)]
pub struct WireProduct {
    pub id: ProductId,
    pub title: String,
    pub price: f64,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub rating: Option<WireRating>,
    #[serde(default, rename = "ratingCount", alias = "rating_count")]
    pub rating_count: Option<u64>,
    #[serde(default)]
    pub image: String,
}

/// Rating as sent by a feed: a bare average, or `{rate, count}`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum WireRating {
    Flat(f64),
    Detailed {
        rate: f64,
        #[serde(default)]
        count: Option<u64>,
    },
}

impl WireProduct {
    /// Validate and convert into a domain [`Product`].
    pub fn normalize(self) -> DomainResult<Product> {
        let price = Price::from_decimal(self.price)?;
        let rating = match self.rating {
            Some(WireRating::Flat(rate)) => Rating::new(rate, self.rating_count.unwrap_or(0)),
            Some(WireRating::Detailed { rate, count }) => {
                Rating::new(rate, count.or(self.rating_count).unwrap_or(0))
            }
            None => Rating::new(0.0, self.rating_count.unwrap_or(0)),
        };

        Ok(Product::new(self.id, self.title, price, self.category)?
            .with_description(self.description)
            .with_rating(rating)
            .with_image(self.image))
    }
}

/// Decode a JSON catalog feed (an array of product records).
///
/// A document that is not a JSON array fails as a whole. Individual records
/// that are malformed or invalid are skipped with a warning, as are records
/// whose id was already seen (the first one wins).
pub fn parse_catalog(json: &str) -> Result<Vec<Product>, SourceError> {
    let document: Value =
        serde_json::from_str(json).map_err(|e| SourceError::Parse(e.to_string()))?;
    parse_catalog_value(document)
}

/// Same as [`parse_catalog`] for an already-parsed document.
pub fn parse_catalog_value(document: Value) -> Result<Vec<Product>, SourceError> {
    let Value::Array(records) = document else {
        return Err(SourceError::Parse("catalog feed is not a JSON array".to_string()));
    };

    let mut seen = HashSet::with_capacity(records.len());
    let mut products = Vec::with_capacity(records.len());

    for (index, record) in records.into_iter().enumerate() {
        let wire: WireProduct = match serde_json::from_value(record) {
            Ok(wire) => wire,
            Err(err) => {
                tracing::warn!(index, error = %err, "skipping malformed catalog record");
                continue;
            }
        };

        let id = wire.id;
        if seen.contains(&id) {
            tracing::warn!(index, product_id = %id, "skipping duplicate catalog record");
            continue;
        }

        match wire.normalize() {
            Ok(product) => {
                seen.insert(id);
                products.push(product);
            }
            Err(err) => {
                tracing::warn!(index, product_id = %id, error = %err, "skipping invalid catalog record");
            }
        }
    }

    Ok(products)
}
