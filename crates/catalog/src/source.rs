//! Where a catalog snapshot comes from.

use async_trait::async_trait;
use thiserror::Error;

use storefront_core::DomainError;

use crate::product::Product;

/// Public demo catalog endpoint used when a remote source is configured
/// without an explicit URL.
pub const DEFAULT_CATALOG_URL: &str = "https://fakestoreapi.com/products";

/// Failure to obtain a catalog from its source.
///
/// Mapped to [`DomainError::CatalogUnavailable`] at the store boundary.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("network error: {0}")]
    Network(String),
    #[error("catalog endpoint error ({0}): {1}")]
    Api(u16, String),
    #[error("parse error: {0}")]
    Parse(String),
}

impl From<SourceError> for DomainError {
    fn from(err: SourceError) -> Self {
        DomainError::catalog_unavailable(err.to_string())
    }
}

/// A one-shot producer of catalog records.
///
/// `fetch` is the only suspension point of the storefront. It is not required
/// to be `Send`: everything runs on one cooperative thread (browser event loop
/// or a current-thread runtime).
#[async_trait(?Send)]
pub trait CatalogSource {
    /// Human-readable description used in logs (e.g. the endpoint URL).
    fn describe(&self) -> String;

    /// Produce the catalog in feed order.
    async fn fetch(&self) -> Result<Vec<Product>, SourceError>;
}
