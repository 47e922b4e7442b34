use async_trait::async_trait;

use crate::product::Product;
use crate::source::{CatalogSource, SourceError};
use crate::wire::parse_catalog;

/// Catalog compiled into the binary (flat rating shape).
const BUILTIN_CATALOG: &str = include_str!("../data/products.json");

/// In-process catalog source: the built-in product list, or any fixed list of
/// products supplied by the caller.
#[derive(Debug, Clone, Default)]
pub struct EmbeddedCatalog {
    products: Option<Vec<Product>>,
}

impl EmbeddedCatalog {
    /// The built-in twelve-product catalog.
    pub fn builtin() -> Self {
        Self { products: None }
    }

    /// A fixed catalog, served in the given order.
    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products: Some(products),
        }
    }
}

#[async_trait(?Send)]
impl CatalogSource for EmbeddedCatalog {
    fn describe(&self) -> String {
        match &self.products {
            None => "embedded:builtin".to_string(),
            Some(products) => format!("embedded:{} products", products.len()),
        }
    }

    async fn fetch(&self) -> Result<Vec<Product>, SourceError> {
        match &self.products {
            None => parse_catalog(BUILTIN_CATALOG),
            Some(products) => Ok(products.clone()),
        }
    }
}
