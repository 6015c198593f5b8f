//! Perenual species-list provider.
//!
//! Fetches paginated species data from the Perenual listing API. Requires an
//! API key passed as a query parameter. Pagination is signalled either by a
//! `links.next` URL or by a `last_page` counter; absent both signals, a page
//! is treated as final.

use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::errors::{PlantDataError, Result};
use crate::models::{RawSpecies, SpeciesPage};
use crate::provider::{PlantApiConfig, SpeciesProvider, MAX_PER_PAGE};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);
const MAX_LOG_BODY_CHARS: usize = 512;

/// Top-level species listing response.
#[derive(Debug, Deserialize)]
struct SpeciesListResponse {
    #[serde(default)]
    data: Vec<RawSpecies>,
    #[serde(default)]
    last_page: Option<u32>,
    #[serde(default)]
    links: Option<PageLinks>,
}

/// Laravel-style pagination links block.
#[derive(Debug, Deserialize)]
struct PageLinks {
    #[serde(default)]
    next: Option<String>,
}

impl SpeciesListResponse {
    fn has_next(&self, page: u32) -> bool {
        if self
            .links
            .as_ref()
            .and_then(|links| links.next.as_deref())
            .is_some()
        {
            return true;
        }
        self.last_page.is_some_and(|last| page < last)
    }
}

fn body_preview(body: &str) -> String {
    let mut preview = body.chars().take(MAX_LOG_BODY_CHARS).collect::<String>();
    if body.chars().count() > MAX_LOG_BODY_CHARS {
        preview.push_str("...");
    }
    preview
}

/// Perenual species listing provider.
pub struct PerenualProvider {
    client: Client,
    config: PlantApiConfig,
}

impl PerenualProvider {
    pub fn new(config: PlantApiConfig) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client, config }
    }
}

#[async_trait]
impl SpeciesProvider for PerenualProvider {
    async fn fetch_page(&self, page: u32, per_page: u32) -> Result<SpeciesPage> {
        if page == 0 {
            return Err(PlantDataError::invalid_request("page numbers start at 1"));
        }
        let per_page = per_page.min(MAX_PER_PAGE);
        let url = format!("{}/species-list", self.config.base_url);

        let resp = self
            .client
            .get(&url)
            .query(&[
                ("key", self.config.api_key.clone()),
                ("page", page.to_string()),
                ("per_page", per_page.to_string()),
            ])
            .send()
            .await
            .map_err(|e| PlantDataError::fetch(page, format!("HTTP request failed: {}", e)))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(PlantDataError::fetch(
                page,
                format!("HTTP {}: {}", status, body_preview(&body)),
            ));
        }

        let body: SpeciesListResponse = resp
            .json()
            .await
            .map_err(|e| PlantDataError::fetch(page, format!("JSON parse error: {}", e)))?;

        debug!("species-list page {}: {} records", page, body.data.len());

        let has_next = body.has_next(page);
        Ok(SpeciesPage {
            records: body.data,
            has_next,
        })
    }
}
