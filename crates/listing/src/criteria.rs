//! Filter criteria: what a single filter/sort pass retains and how it orders.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use storefront_core::{DomainError, DomainResult, Price};

/// Category filter: every category, or exactly one.
///
/// Serializes as the select value: `"all"` or the bare category name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum CategorySelector {
    #[default]
    All,
    Only(String),
}

impl CategorySelector {
    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategorySelector::All => true,
            CategorySelector::Only(wanted) => wanted == category,
        }
    }

    /// Value used by the category `<select>` (`"all"` for the sentinel).
    pub fn as_str(&self) -> &str {
        match self {
            CategorySelector::All => "all",
            CategorySelector::Only(category) => category,
        }
    }
}

impl FromStr for CategorySelector {
    type Err = DomainError;

    /// `""` and `"all"` select every category; anything else is a category name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" | "all" => Ok(CategorySelector::All),
            other => Ok(CategorySelector::Only(other.to_string())),
        }
    }
}

impl TryFrom<String> for CategorySelector {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CategorySelector> for String {
    fn from(selector: CategorySelector) -> Self {
        match selector {
            CategorySelector::All => "all".to_string(),
            CategorySelector::Only(category) => category,
        }
    }
}

/// Ordering applied after filtering. Serializes as its select value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum SortKey {
    /// Keep catalog order.
    #[default]
    None,
    PriceAsc,
    PriceDesc,
    RatingDesc,
    RatingCountDesc,
    NameAsc,
    NameDesc,
}

impl SortKey {
    pub const ALL: [SortKey; 7] = [
        SortKey::None,
        SortKey::PriceAsc,
        SortKey::PriceDesc,
        SortKey::RatingDesc,
        SortKey::RatingCountDesc,
        SortKey::NameAsc,
        SortKey::NameDesc,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::None => "default",
            SortKey::PriceAsc => "price-asc",
            SortKey::PriceDesc => "price-desc",
            SortKey::RatingDesc => "rating-desc",
            SortKey::RatingCountDesc => "rating-count-desc",
            SortKey::NameAsc => "name-asc",
            SortKey::NameDesc => "name-desc",
        }
    }

    /// Text shown in the sort `<select>`.
    pub fn label(self) -> &'static str {
        match self {
            SortKey::None => "Featured",
            SortKey::PriceAsc => "Price: Low to High",
            SortKey::PriceDesc => "Price: High to Low",
            SortKey::RatingDesc => "Top Rated",
            SortKey::RatingCountDesc => "Most Reviewed",
            SortKey::NameAsc => "Name: A to Z",
            SortKey::NameDesc => "Name: Z to A",
        }
    }
}

impl FromStr for SortKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" | "default" | "none" => Ok(SortKey::None),
            "price-asc" => Ok(SortKey::PriceAsc),
            "price-desc" => Ok(SortKey::PriceDesc),
            "rating-desc" => Ok(SortKey::RatingDesc),
            "rating-count-desc" => Ok(SortKey::RatingCountDesc),
            "name-asc" => Ok(SortKey::NameAsc),
            "name-desc" => Ok(SortKey::NameDesc),
            other => Err(DomainError::validation(format!("unknown sort key: {other}"))),
        }
    }
}

impl TryFrom<String> for SortKey {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SortKey> for String {
    fn from(key: SortKey) -> Self {
        key.as_str().to_string()
    }
}

/// Search text, category, price bounds and sort key for one pass.
///
/// Inverted bounds (`min > max`) are accepted and simply match nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub search: String,
    pub category: CategorySelector,
    pub min_price: Option<Price>,
    pub max_price: Option<Price>,
    pub sort: SortKey,
}

impl FilterCriteria {
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_category(mut self, category: CategorySelector) -> Self {
        self.category = category;
        self
    }

    pub fn with_price_range(mut self, min: Option<Price>, max: Option<Price>) -> Self {
        self.min_price = min;
        self.max_price = max;
        self
    }

    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    /// Whether this pass would return the catalog unchanged.
    pub fn is_identity(&self) -> bool {
        self.search.is_empty()
            && self.category == CategorySelector::All
            && self.min_price.is_none()
            && self.max_price.is_none()
            && self.sort == SortKey::None
    }
}

/// Parse a price-bound input field: blank means "no bound".
pub fn parse_price_bound(input: &str) -> DomainResult<Option<Price>> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }
    let amount: f64 = input
        .parse()
        .map_err(|_| DomainError::validation(format!("price bound {input:?} is not a number")))?;
    Price::from_decimal(amount).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_keys_parse_from_select_values() {
        for key in SortKey::ALL {
            assert_eq!(key.as_str().parse::<SortKey>().unwrap(), key);
        }
        assert_eq!("".parse::<SortKey>().unwrap(), SortKey::None);
        assert!(matches!("cheapest".parse::<SortKey>(), Err(DomainError::Validation(_))));
    }

    #[test]
    fn sort_key_serde_uses_select_values() {
        let key: SortKey = serde_json::from_str("\"rating-count-desc\"").unwrap();
        assert_eq!(key, SortKey::RatingCountDesc);
        assert_eq!(serde_json::from_str::<SortKey>("\"default\"").unwrap(), SortKey::None);
        assert_eq!(serde_json::from_str::<SortKey>("\"\"").unwrap(), SortKey::None);
        assert_eq!(serde_json::to_string(&SortKey::None).unwrap(), "\"default\"");
        assert!(serde_json::from_str::<SortKey>("\"cheapest\"").is_err());
    }

    #[test]
    fn category_selector_serde_uses_plain_names() {
        let home: CategorySelector = serde_json::from_str("\"Home\"").unwrap();
        assert_eq!(home, CategorySelector::Only("Home".to_string()));
        assert_eq!(serde_json::to_string(&home).unwrap(), "\"Home\"");
        assert_eq!(serde_json::to_string(&CategorySelector::All).unwrap(), "\"all\"");
        assert_eq!(
            serde_json::from_str::<CategorySelector>("\"\"").unwrap(),
            CategorySelector::All
        );
    }

    #[test]
    fn category_selector_sentinel() {
        assert_eq!("all".parse::<CategorySelector>().unwrap(), CategorySelector::All);
        assert_eq!("".parse::<CategorySelector>().unwrap(), CategorySelector::All);
        let home: CategorySelector = "Home".parse().unwrap();
        assert!(home.matches("Home"));
        assert!(!home.matches("home"));
        assert!(CategorySelector::All.matches("anything"));
    }

    #[test]
    fn price_bounds_parse_blank_as_absent() {
        assert_eq!(parse_price_bound("  ").unwrap(), None);
        assert_eq!(parse_price_bound("12.5").unwrap(), Some(Price::from_cents(1250)));
        assert!(parse_price_bound("ten").is_err());
        assert!(parse_price_bound("-3").is_err());
    }

    #[test]
    fn default_criteria_is_identity() {
        assert!(FilterCriteria::default().is_identity());
        assert!(!FilterCriteria::default().with_sort(SortKey::NameAsc).is_identity());
    }
}
