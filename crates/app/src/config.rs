//! Storefront configuration (environment variables with defaults).

use core::num::NonZeroUsize;
use core::str::FromStr;

use serde::Serialize;

use storefront_catalog::{CatalogSource, EmbeddedCatalog, RemoteCatalog};
use storefront_listing::{DEFAULT_PAGE_SIZE, DEFAULT_WINDOW_WIDTH};

pub const CATALOG_URL_ENV: &str = "STOREFRONT_CATALOG_URL";
pub const PAGE_SIZE_ENV: &str = "STOREFRONT_PAGE_SIZE";
pub const PAGE_WINDOW_ENV: &str = "STOREFRONT_PAGE_WINDOW";
pub const FILTER_MODE_ENV: &str = "STOREFRONT_FILTER_MODE";

/// When edits to the filter controls take effect.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FilterMode {
    /// Every edit re-filters immediately.
    #[default]
    Live,
    /// Edits are staged until "Apply Filters".
    OnApply,
}

impl FromStr for FilterMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "live" => Ok(FilterMode::Live),
            "on-apply" | "apply" => Ok(FilterMode::OnApply),
            other => Err(format!("unknown filter mode: {other}")),
        }
    }
}

/// Where the catalog is loaded from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase", tag = "kind")]
pub enum CatalogSourceConfig {
    /// Built-in product list.
    #[default]
    Embedded,
    /// JSON endpoint.
    Remote { url: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StorefrontConfig {
    pub catalog: CatalogSourceConfig,
    pub page_size: NonZeroUsize,
    pub page_window: NonZeroUsize,
    pub filter_mode: FilterMode,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            catalog: CatalogSourceConfig::Embedded,
            page_size: non_zero(DEFAULT_PAGE_SIZE),
            page_window: non_zero(DEFAULT_WINDOW_WIDTH),
            filter_mode: FilterMode::Live,
        }
    }
}

impl StorefrontConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`; unparsable values keep their
    /// default and are logged.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(url) = lookup(CATALOG_URL_ENV).filter(|u| !u.trim().is_empty()) {
            config.catalog = CatalogSourceConfig::Remote {
                url: url.trim().to_string(),
            };
        }
        if let Some(size) = parse_var::<NonZeroUsize>(&lookup, PAGE_SIZE_ENV) {
            config.page_size = size;
        }
        if let Some(width) = parse_var::<NonZeroUsize>(&lookup, PAGE_WINDOW_ENV) {
            config.page_window = width;
        }
        if let Some(mode) = parse_var::<FilterMode>(&lookup, FILTER_MODE_ENV) {
            config.filter_mode = mode;
        }

        config
    }

    /// Build the configured catalog source.
    pub fn catalog_source(&self) -> Box<dyn CatalogSource> {
        match &self.catalog {
            CatalogSourceConfig::Embedded => Box::new(EmbeddedCatalog::builtin()),
            CatalogSourceConfig::Remote { url } => Box::new(RemoteCatalog::new(url.clone())),
        }
    }
}

fn parse_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: FromStr,
    T::Err: core::fmt::Display,
{
    let raw = lookup(key)?;
    match raw.trim().parse::<T>() {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::warn!(key, value = %raw, error = %err, "ignoring invalid configuration value");
            None
        }
    }
}

fn non_zero(n: usize) -> NonZeroUsize {
    NonZeroUsize::new(n).unwrap_or(NonZeroUsize::MIN)
}
