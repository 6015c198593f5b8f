//! Sequential pagination over a species provider.
//!
//! The loop is deliberately single-flight: each page must complete, and the
//! inter-page pause must elapse, before the next request goes out.

use log::{error, info, warn};
use tokio::time::sleep;

use crate::models::RawSpecies;
use crate::provider::{PlantApiConfig, SpeciesProvider};

/// Fetch every available species page, sequentially, starting at page 1.
///
/// Never fails: a fetch error, an empty page, an exhausted continuation
/// signal, or the `max_pages` ceiling all stop the loop, and whatever was
/// accumulated up to that point is returned in arrival order. The ceiling
/// guarantees termination even when the upstream `has_next` signal is
/// buggy.
pub async fn fetch_all<P>(provider: &P, config: &PlantApiConfig) -> Vec<RawSpecies>
where
    P: SpeciesProvider + ?Sized,
{
    let mut all: Vec<RawSpecies> = Vec::new();
    let mut page: u32 = 1;

    loop {
        info!("fetching species page {}", page);

        let result = match provider.fetch_page(page, config.per_page).await {
            Ok(result) => result,
            Err(e) => {
                error!("species fetch stopped on page {}: {}", page, e);
                break;
            }
        };

        if result.records.is_empty() {
            info!("no species on page {}, stopping", page);
            break;
        }

        all.extend(result.records);
        info!("page {} fetched, {} species so far", page, all.len());

        if !result.has_next {
            info!("last page reached at page {}", page);
            break;
        }

        page += 1;
        if page > config.max_pages {
            warn!("page ceiling of {} reached, stopping", config.max_pages);
            break;
        }

        sleep(config.page_delay).await;
    }

    info!("species fetch finished with {} records", all.len());
    all
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{PlantDataError, Result};
    use crate::models::SpeciesPage;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Mutex;
    use std::time::Duration;

    fn species(name: &str) -> RawSpecies {
        RawSpecies {
            common_name: Some(name.to_string()),
            ..Default::default()
        }
    }

    fn page_of(names: &[&str], has_next: bool) -> SpeciesPage {
        SpeciesPage {
            records: names.iter().map(|n| species(n)).collect(),
            has_next,
        }
    }

    fn test_config(max_pages: u32) -> PlantApiConfig {
        PlantApiConfig {
            per_page: 30,
            max_pages,
            page_delay: Duration::ZERO,
            ..PlantApiConfig::new("https://example.test", "sk-test")
        }
    }

    /// Replays a fixed script of page results, then empty pages forever.
    struct ScriptedProvider {
        pages: Mutex<VecDeque<Result<SpeciesPage>>>,
    }

    impl ScriptedProvider {
        fn new(pages: Vec<Result<SpeciesPage>>) -> Self {
            Self {
                pages: Mutex::new(pages.into()),
            }
        }
    }

    #[async_trait]
    impl SpeciesProvider for ScriptedProvider {
        async fn fetch_page(&self, _page: u32, _per_page: u32) -> Result<SpeciesPage> {
            self.pages
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Ok(SpeciesPage::default()))
        }
    }

    /// Always reports another page; used to exercise the ceiling.
    struct EndlessProvider {
        calls: AtomicU32,
    }

    #[async_trait]
    impl SpeciesProvider for EndlessProvider {
        async fn fetch_page(&self, page: u32, _per_page: u32) -> Result<SpeciesPage> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(page_of(&[&format!("species-{}", page)], true))
        }
    }

    #[tokio::test]
    async fn stops_when_has_next_is_false() {
        let provider = ScriptedProvider::new(vec![
            Ok(page_of(&["Ficus", "Aloe"], true)),
            Ok(page_of(&["Monstera"], false)),
        ]);

        let all = fetch_all(&provider, &test_config(100)).await;
        let names: Vec<_> = all.iter().map(|s| s.common_name.clone().unwrap()).collect();
        assert_eq!(names, vec!["Ficus", "Aloe", "Monstera"]);
    }

    #[tokio::test]
    async fn stops_on_empty_page() {
        let provider = ScriptedProvider::new(vec![
            Ok(page_of(&["Ficus"], true)),
            Ok(SpeciesPage {
                records: vec![],
                has_next: true,
            }),
        ]);

        let all = fetch_all(&provider, &test_config(100)).await;
        assert_eq!(all.len(), 1);
    }

    #[tokio::test]
    async fn fetch_error_returns_partial_results_in_order() {
        let provider = ScriptedProvider::new(vec![
            Ok(page_of(&["Ficus"], true)),
            Ok(page_of(&["Aloe"], true)),
            Err(PlantDataError::fetch(3, "HTTP 503")),
            Ok(page_of(&["Monstera"], false)),
        ]);

        let all = fetch_all(&provider, &test_config(100)).await;
        let names: Vec<_> = all.iter().map(|s| s.common_name.clone().unwrap()).collect();
        assert_eq!(names, vec!["Ficus", "Aloe"]);
    }

    #[tokio::test]
    async fn error_on_first_page_yields_empty_result() {
        let provider = ScriptedProvider::new(vec![Err(PlantDataError::fetch(1, "HTTP 401"))]);
        let all = fetch_all(&provider, &test_config(100)).await;
        assert!(all.is_empty());
    }

    #[tokio::test]
    async fn page_ceiling_guarantees_termination() {
        let provider = EndlessProvider {
            calls: AtomicU32::new(0),
        };

        let all = fetch_all(&provider, &test_config(5)).await;
        assert_eq!(provider.calls.load(Ordering::SeqCst), 5);
        assert_eq!(all.len(), 5);
    }
}
