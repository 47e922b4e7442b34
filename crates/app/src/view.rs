//! Read-only view models handed to the view layer.
//!
//! Each render pass rebuilds these from controller state; nothing here holds
//! a reference into the controller.

use serde::Serialize;

use storefront_cart::CartLine;
use storefront_catalog::Product;
use storefront_core::ProductId;
use storefront_listing::{PageWindow, SortKey};

pub const NO_MATCHES_MESSAGE: &str = "No products match your filters.";
pub const EMPTY_CATALOG_MESSAGE: &str = "No products available.";
pub const LOADING_MESSAGE: &str = "Loading products…";

/// Product tile in the grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductCard {
    pub id: ProductId,
    pub title: String,
    pub image: String,
    pub price_label: String,
    pub category: String,
    pub description: String,
    pub rating_label: String,
    pub stars: String,
    /// Units of this product already in the cart.
    pub in_cart: u32,
}

impl ProductCard {
    pub fn new(product: &Product, in_cart: u32) -> Self {
        let rating = product.rating();
        Self {
            id: product.id_typed(),
            title: product.title().to_string(),
            image: product.image().to_string(),
            price_label: product.price().to_string(),
            category: product.category().to_string(),
            description: product.description().to_string(),
            rating_label: rating.label(),
            stars: "★".repeat(rating.stars()),
            in_cart,
        }
    }
}

/// Contents of the product detail modal.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductDetail {
    pub id: ProductId,
    pub title: String,
    pub image: String,
    pub image_alt: String,
    pub price_label: String,
    /// `" • Electronics"`.
    pub category_label: String,
    pub description: String,
    pub rating_label: String,
}

impl ProductDetail {
    pub fn new(product: &Product) -> Self {
        Self {
            id: product.id_typed(),
            title: product.title().to_string(),
            image: product.image().to_string(),
            image_alt: product.title().to_string(),
            price_label: product.price().to_string(),
            category_label: format!(" • {}", product.category()),
            description: product.description().to_string(),
            rating_label: product.rating().label(),
        }
    }
}

/// State of the product grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ListingView {
    /// Catalog load has not completed yet.
    Loading,
    /// Catalog load failed.
    Unavailable { message: String },
    /// The catalog itself has no products.
    Empty,
    /// The catalog has products but none pass the filters.
    NoMatches,
    Products {
        cards: Vec<ProductCard>,
        page: usize,
        total_pages: usize,
        total_items: usize,
        pagination: PageWindow,
    },
}

impl ListingView {
    /// Banner text for the non-product states.
    pub fn message(&self) -> Option<String> {
        match self {
            ListingView::Loading => Some(LOADING_MESSAGE.to_string()),
            ListingView::Unavailable { message } => {
                Some(format!("Could not load products: {message}"))
            }
            ListingView::Empty => Some(EMPTY_CATALOG_MESSAGE.to_string()),
            ListingView::NoMatches => Some(NO_MATCHES_MESSAGE.to_string()),
            ListingView::Products { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartLineView {
    pub id: ProductId,
    pub title: String,
    pub price_label: String,
    pub quantity: u32,
    pub subtotal_label: String,
}

impl From<&CartLine<'_>> for CartLineView {
    fn from(line: &CartLine<'_>) -> Self {
        Self {
            id: line.product.id_typed(),
            title: line.product.title().to_string(),
            price_label: line.product.price().to_string(),
            quantity: line.quantity,
            subtotal_label: line.subtotal.to_string(),
        }
    }
}

/// Cart panel and header badge.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartSummary {
    pub lines: Vec<CartLineView>,
    pub count: u64,
    pub total_label: String,
    /// Checkout is not implemented; the control renders disabled.
    pub checkout_enabled: bool,
}

/// One `<option>` of a `<select>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

/// Current values of the filter controls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterPanel {
    pub search: String,
    pub categories: Vec<SelectOption>,
    pub sorts: Vec<SelectOption>,
    pub min_price: String,
    pub max_price: String,
    /// Whether the "Apply Filters" button is needed (on-apply mode).
    pub show_apply: bool,
    /// Staged edits not yet applied.
    pub has_pending_changes: bool,
}

pub(crate) fn sort_options(current: SortKey) -> Vec<SelectOption> {
    SortKey::ALL
        .iter()
        .map(|&key| SelectOption {
            value: key.as_str().to_string(),
            label: key.label().to_string(),
            selected: key == current,
        })
        .collect()
}
