//! Domain error model.

use thiserror::Error;

use crate::id::ProductId;

/// Result type used across the storefront core.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every core entry point returns either a normal value or one of these
/// conditions. An empty filter result is *not* an error; it is a listing state.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The catalog could not be loaded (e.g. remote fetch failed).
    ///
    /// Recoverable: the caller may retry the load or fall back to an empty
    /// catalog with a visible message.
    #[error("catalog unavailable: {0}")]
    CatalogUnavailable(String),

    /// A cart operation referenced a product that is not in the catalog.
    #[error("unknown product: {0}")]
    UnknownProduct(ProductId),

    /// A value failed validation (e.g. malformed input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A domain invariant was violated.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),
}

impl DomainError {
    pub fn catalog_unavailable(msg: impl Into<String>) -> Self {
        Self::CatalogUnavailable(msg.into())
    }

    pub fn unknown_product(id: ProductId) -> Self {
        Self::UnknownProduct(id)
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }

    /// Whether retrying the failed operation may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::CatalogUnavailable(_))
    }
}
