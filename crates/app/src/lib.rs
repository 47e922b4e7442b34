//! `storefront-app`
//!
//! **Responsibility:** Application shell around the storefront core.
//!
//! This crate provides:
//! - Configuration from the environment
//! - The [`Storefront`] controller: single owner of catalog, filters, page and cart
//! - Typed [`Intent`]s and read-only view models for the view layer
//! - A Leptos browser frontend (wasm32 only) and the `storefront` CLI

pub mod config;
pub mod controller;
pub mod intent;
pub mod state;
pub mod view;

#[cfg(target_arch = "wasm32")]
pub mod frontend;

pub use config::{CatalogSourceConfig, FilterMode, StorefrontConfig};
pub use controller::{ListingPage, Storefront};
pub use intent::{Intent, Outcome};
pub use view::{
    CartLineView, CartSummary, FilterPanel, ListingView, ProductCard, ProductDetail, SelectOption,
};
