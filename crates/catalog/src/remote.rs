//! Remote catalog over HTTP (`remote` feature).

use async_trait::async_trait;

use crate::product::Product;
use crate::source::{CatalogSource, DEFAULT_CATALOG_URL, SourceError};
use crate::wire::parse_catalog;

/// Read-only JSON endpoint returning an array of product records.
///
/// One GET per fetch; no retry and no timeout of its own. The caller decides
/// whether to retry after a failure.
#[derive(Debug, Clone)]
pub struct RemoteCatalog {
    url: String,
    client: reqwest::Client,
}

impl RemoteCatalog {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            client: reqwest::Client::new(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Default for RemoteCatalog {
    fn default() -> Self {
        Self::new(DEFAULT_CATALOG_URL)
    }
}

#[async_trait(?Send)]
impl CatalogSource for RemoteCatalog {
    fn describe(&self) -> String {
        self.url.clone()
    }

    async fn fetch(&self) -> Result<Vec<Product>, SourceError> {
        let resp = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| SourceError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(SourceError::Api(
                status.as_u16(),
                resp.text().await.unwrap_or_default(),
            ));
        }

        let body = resp
            .text()
            .await
            .map_err(|e| SourceError::Network(e.to_string()))?;

        parse_catalog(&body)
    }
}
