//! Catalog Store.
//!
//! This crate owns the product catalog: decoding catalog feeds into
//! [`Product`]s, holding the loaded snapshot, and the sources a snapshot can
//! come from (embedded list or a remote endpoint behind the `remote` feature).

pub mod embedded;
pub mod product;
#[cfg(feature = "remote")]
pub mod remote;
pub mod source;
pub mod store;
pub mod wire;

pub use embedded::EmbeddedCatalog;
pub use product::Product;
#[cfg(feature = "remote")]
pub use remote::RemoteCatalog;
pub use source::{CatalogSource, DEFAULT_CATALOG_URL, SourceError};
pub use store::{Catalog, CatalogStatus, CatalogStore};
pub use wire::{WireProduct, WireRating, parse_catalog, parse_catalog_value};
