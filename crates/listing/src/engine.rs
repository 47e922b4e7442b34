//! Filter/Sort Engine.

use core::cmp::Ordering;

use storefront_catalog::Product;

use crate::criteria::{FilterCriteria, SortKey};

/// Filter `products` by `criteria`, then order the survivors.
///
/// Pure and deterministic. Every ordering is stable: products that compare
/// equal keep their relative catalog order. An empty catalog or a pass that
/// matches nothing yields an empty list.
pub fn apply<'a>(products: &'a [Product], criteria: &FilterCriteria) -> Vec<&'a Product> {
    let needle = criteria.search.to_lowercase();

    let mut retained: Vec<&Product> = products
        .iter()
        .filter(|p| retains(p, criteria, &needle))
        .collect();

    if criteria.sort != SortKey::None {
        retained.sort_by(|a, b| compare(criteria.sort, a, b));
    }

    tracing::debug!(
        catalog = products.len(),
        retained = retained.len(),
        sort = criteria.sort.as_str(),
        "applied filter criteria"
    );

    retained
}

fn retains(product: &Product, criteria: &FilterCriteria, needle: &str) -> bool {
    if !needle.is_empty() && !product.title().to_lowercase().contains(needle) {
        return false;
    }
    if !criteria.category.matches(product.category()) {
        return false;
    }
    if criteria.min_price.is_some_and(|min| product.price() < min) {
        return false;
    }
    if criteria.max_price.is_some_and(|max| product.price() > max) {
        return false;
    }
    true
}

fn compare(sort: SortKey, a: &Product, b: &Product) -> Ordering {
    match sort {
        SortKey::None => Ordering::Equal,
        SortKey::PriceAsc => a.price().cmp(&b.price()),
        SortKey::PriceDesc => b.price().cmp(&a.price()),
        SortKey::RatingDesc => b.rating().rate().total_cmp(&a.rating().rate()),
        SortKey::RatingCountDesc => b.rating().count().cmp(&a.rating().count()),
        SortKey::NameAsc => collate(a.title(), b.title()),
        SortKey::NameDesc => collate(b.title(), a.title()),
    }
}

/// Human ordering for titles: case-insensitive first, exact bytes as tie-break.
fn collate(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));
    folded.then_with(|| a.cmp(b))
}
