//! Catalog snapshot and the store that loads it once per session.

use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use chrono::{DateTime, Utc};

use storefront_core::{DomainError, DomainResult, Entity, ProductId};

use crate::product::Product;
use crate::source::CatalogSource;

/// Immutable, ordered product list with id lookup.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
    index: HashMap<ProductId, usize>,
    loaded_at: DateTime<Utc>,
}

impl Catalog {
    /// Build a snapshot from products in catalog order.
    ///
    /// Ids must be unique; a repeated id keeps its first product.
    pub fn new(products: Vec<Product>) -> Self {
        let mut index = HashMap::with_capacity(products.len());
        let mut unique = Vec::with_capacity(products.len());

        for product in products {
            let id = product.id();
            if index.contains_key(&id) {
                tracing::warn!(product_id = %id, "dropping product with duplicate id");
                continue;
            }
            index.insert(id, unique.len());
            unique.push(product);
        }

        Self {
            products: unique,
            index,
            loaded_at: Utc::now(),
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Products in original catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.index.get(&id).map(|&i| &self.products[i])
    }

    /// Resolve an id, failing with [`DomainError::UnknownProduct`].
    pub fn require(&self, id: ProductId) -> DomainResult<&Product> {
        self.get(id).ok_or(DomainError::unknown_product(id))
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.index.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Distinct categories, sorted, for the category selector.
    pub fn categories(&self) -> Vec<&str> {
        self.products
            .iter()
            .map(|p| p.category())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }
}

/// Load status of a [`CatalogStore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogStatus {
    NotLoaded,
    Ready,
    /// Last load attempt failed; a later `load` retries.
    Unavailable(String),
}

#[derive(Debug, Default)]
enum LoadState {
    #[default]
    NotLoaded,
    Ready(Arc<Catalog>),
    Failed(String),
}

/// Holds the session's catalog snapshot.
///
/// `load` is idempotent: once a snapshot exists, every call returns it without
/// consulting the source again. A failed load leaves the store retryable.
#[derive(Debug, Default)]
pub struct CatalogStore {
    state: LoadState,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `catalog`.
    pub fn preloaded(catalog: Catalog) -> Self {
        Self {
            state: LoadState::Ready(Arc::new(catalog)),
        }
    }

    pub async fn load<S>(&mut self, source: &S) -> DomainResult<Arc<Catalog>>
    where
        S: CatalogSource + ?Sized,
    {
        if let LoadState::Ready(catalog) = &self.state {
            return Ok(Arc::clone(catalog));
        }

        let origin = source.describe();
        match source.fetch().await {
            Ok(products) => {
                let catalog = Arc::new(Catalog::new(products));
                tracing::info!(
                    source = %origin,
                    products = catalog.len(),
                    "catalog loaded"
                );
                self.state = LoadState::Ready(Arc::clone(&catalog));
                Ok(catalog)
            }
            Err(err) => {
                let err = DomainError::from(err);
                tracing::warn!(source = %origin, error = %err, "catalog load failed");
                self.state = LoadState::Failed(err.to_string());
                Err(err)
            }
        }
    }

    /// The loaded snapshot, if any.
    pub fn snapshot(&self) -> Option<Arc<Catalog>> {
        match &self.state {
            LoadState::Ready(catalog) => Some(Arc::clone(catalog)),
            _ => None,
        }
    }

    /// Borrow the loaded catalog, if any.
    pub fn catalog(&self) -> Option<&Catalog> {
        match &self.state {
            LoadState::Ready(catalog) => Some(catalog),
            _ => None,
        }
    }

    pub fn status(&self) -> CatalogStatus {
        match &self.state {
            LoadState::NotLoaded => CatalogStatus::NotLoaded,
            LoadState::Ready(_) => CatalogStatus::Ready,
            LoadState::Failed(reason) => CatalogStatus::Unavailable(reason.clone()),
        }
    }
}
