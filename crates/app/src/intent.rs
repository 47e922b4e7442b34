//! Typed user intents dispatched from the view layer.

use serde::{Deserialize, Serialize};

use storefront_core::{Price, ProductId};
use storefront_listing::{CategorySelector, SortKey};

/// A user action, translated from a raw UI event by the view layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Intent {
    SetSearch { text: String },
    SetCategory { category: CategorySelector },
    SetPriceRange { min: Option<Price>, max: Option<Price> },
    SetSort { sort: SortKey },
    /// Commit the staged filter controls (the "Apply Filters" button).
    ApplyFilters,
    ResetFilters,
    GoToPage { page: usize },
    AddToCart { product_id: ProductId },
    /// Add the product open in the detail view, then close the view.
    AddSelectedToCart,
    RemoveFromCart { product_id: ProductId },
    ClearCart,
    /// Open the product detail view.
    ViewProduct { product_id: ProductId },
    CloseProduct,
    Checkout,
}

impl Intent {
    /// Search edit from the raw text of the search box; surrounding
    /// whitespace is not part of the query.
    pub fn search(raw: &str) -> Self {
        Intent::SetSearch {
            text: raw.trim().to_string(),
        }
    }
}

/// What the view layer has to re-render after a dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Outcome {
    /// Nothing visible changed.
    Unchanged,
    /// Only the staged filter controls changed (on-apply mode).
    DraftChanged,
    /// Product grid and pagination.
    ListingChanged,
    /// Cart panel and counters; `quantity` is the product's new quantity.
    CartChanged {
        product_id: Option<ProductId>,
        quantity: u32,
    },
    DetailChanged,
    /// Checkout is not offered; the control stays disabled.
    CheckoutUnavailable,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_values_decode_into_intents() {
        let sort: Intent = serde_json::from_str(r#"{"type":"set_sort","sort":"default"}"#).unwrap();
        assert_eq!(sort, Intent::SetSort { sort: SortKey::None });

        let all: Intent = serde_json::from_str(r#"{"type":"set_category","category":""}"#).unwrap();
        assert_eq!(all, Intent::SetCategory { category: CategorySelector::All });

        let home: Intent =
            serde_json::from_str(r#"{"type":"set_category","category":"Home"}"#).unwrap();
        assert_eq!(
            home,
            Intent::SetCategory {
                category: CategorySelector::Only("Home".to_string())
            }
        );
    }

    #[test]
    fn search_box_text_is_trimmed() {
        assert_eq!(Intent::search("  mug "), Intent::SetSearch { text: "mug".to_string() });
        assert_eq!(Intent::search("   "), Intent::SetSearch { text: String::new() });
        assert_eq!(
            Intent::search(" desk lamp"),
            Intent::SetSearch { text: "desk lamp".to_string() }
        );
    }

    #[test]
    fn filter_intents_encode_select_values() {
        let json = serde_json::to_value(Intent::SetSort { sort: SortKey::PriceDesc }).unwrap();
        assert_eq!(json, serde_json::json!({ "type": "set_sort", "sort": "price-desc" }));

        let json = serde_json::to_value(Intent::SetCategory {
            category: CategorySelector::Only("Home".to_string()),
        })
        .unwrap();
        assert_eq!(json, serde_json::json!({ "type": "set_category", "category": "Home" }));

        let back: Intent = serde_json::from_value(json).unwrap();
        assert!(matches!(back, Intent::SetCategory { category: CategorySelector::Only(c) } if c == "Home"));
    }
}
