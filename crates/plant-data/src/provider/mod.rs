//! Provider seam for the external species listing API.

use async_trait::async_trait;
use std::time::Duration;

use crate::errors::Result;
use crate::models::SpeciesPage;

pub mod perenual;

/// Maximum page size accepted by the upstream listing endpoint.
pub const MAX_PER_PAGE: u32 = 30;

/// Hard ceiling on pages fetched in one run; protects against pathological
/// pagination from a misbehaving upstream.
pub const DEFAULT_MAX_PAGES: u32 = 100;

/// Pause between page requests so the upstream rate limit is respected.
pub const DEFAULT_PAGE_DELAY: Duration = Duration::from_secs(1);

/// Configuration for the external plant API, injected at construction
/// rather than read from process-wide state.
#[derive(Debug, Clone)]
pub struct PlantApiConfig {
    pub base_url: String,
    pub api_key: String,
    pub per_page: u32,
    pub max_pages: u32,
    pub page_delay: Duration,
}

impl PlantApiConfig {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            per_page: MAX_PER_PAGE,
            max_pages: DEFAULT_MAX_PAGES,
            page_delay: DEFAULT_PAGE_DELAY,
        }
    }
}

/// One paginated call against a species listing source.
///
/// Implementations must not panic on transient upstream failure; they
/// return an error carrying the page number and let the caller decide
/// whether to continue or stop.
#[async_trait]
pub trait SpeciesProvider: Send + Sync {
    async fn fetch_page(&self, page: u32, per_page: u32) -> Result<SpeciesPage>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_trims_trailing_slash() {
        let config = PlantApiConfig::new("https://perenual.com/api/v2/", "sk-test");
        assert_eq!(config.base_url, "https://perenual.com/api/v2");
        assert_eq!(config.per_page, 30);
        assert_eq!(config.max_pages, 100);
        assert_eq!(config.page_delay, Duration::from_secs(1));
    }
}
