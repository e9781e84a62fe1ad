//! Result validation by image reachability
//!
//! Search results frequently reference cover images that no longer resolve
//! (moved CDNs, deleted entries). The validator probes every candidate's
//! `image_url` concurrently and keeps only results whose image answered
//! with a plain 200.

use futures::future::join_all;
use std::collections::HashSet;
use std::sync::Arc;

use crate::transport::Transport;
use crate::types::SearchResult;

/// Filters search results down to those with a reachable image
pub struct ResultValidator {
    transport: Arc<dyn Transport>,
}

impl ResultValidator {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Return the subset of `results` whose `image_url` probes as valid
    ///
    /// All probes are issued at once and joined, so total latency tracks the
    /// slowest single probe. A probe is valid only on an exact 200; probe
    /// transport failures are logged and count as invalid without affecting
    /// sibling probes. Validity is keyed by URL value, so duplicate URLs
    /// share one outcome. Input order is preserved.
    pub async fn validate(&self, results: Vec<SearchResult>) -> Vec<SearchResult> {
        if results.is_empty() {
            return results;
        }

        let probes = results.iter().map(|result| {
            let transport = Arc::clone(&self.transport);
            let url = result.image_url.clone();
            async move {
                match transport.probe_status(&url).await {
                    Ok(200) => Some(url),
                    Ok(status) => {
                        tracing::debug!("Image probe for {} returned status {}", url, status);
                        None
                    }
                    Err(e) => {
                        tracing::warn!("Image probe for {} failed: {}", url, e);
                        None
                    }
                }
            }
        });

        let valid_urls: HashSet<String> = join_all(probes).await.into_iter().flatten().collect();

        results
            .into_iter()
            .filter(|result| valid_urls.contains(&result.image_url))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SearchError;
    use crate::types::FetchRequest;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::time::Duration;

    /// Probe-only transport: statuses per URL, missing URLs fail at the
    /// transport level, optional per-URL latency.
    struct ProbeTable {
        statuses: HashMap<String, u16>,
        delay_ms: u64,
    }

    impl ProbeTable {
        fn new(entries: &[(&str, u16)]) -> Self {
            Self {
                statuses: entries
                    .iter()
                    .map(|(url, status)| (url.to_string(), *status))
                    .collect(),
                delay_ms: 0,
            }
        }
    }

    #[async_trait]
    impl Transport for ProbeTable {
        async fn fetch_json(
            &self,
            _request: &FetchRequest,
        ) -> Result<serde_json::Value, SearchError> {
            unreachable!("validator only probes")
        }

        async fn probe_status(&self, url: &str) -> Result<u16, SearchError> {
            if self.delay_ms > 0 {
                tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;
            }
            self.statuses
                .get(url)
                .copied()
                .ok_or_else(|| url::Url::parse("not a url").unwrap_err().into())
        }
    }

    fn result(title: &str, image_url: &str) -> SearchResult {
        SearchResult::new(title, format!("https://example.org/{title}"), image_url)
    }

    #[tokio::test]
    async fn keeps_only_exact_200_and_swallows_probe_failures() {
        let transport = Arc::new(ProbeTable::new(&[
            ("https://img.test/a.jpg", 200),
            ("https://img.test/b.jpg", 404),
            // c.jpg absent: probe errors at the transport level
        ]));
        let validator = ResultValidator::new(transport);

        let results = vec![
            result("a", "https://img.test/a.jpg"),
            result("b", "https://img.test/b.jpg"),
            result("c", "https://img.test/c.jpg"),
        ];

        let valid = validator.validate(results).await;
        assert_eq!(valid.len(), 1);
        assert_eq!(valid[0].title, "a");
    }

    #[tokio::test]
    async fn redirects_are_not_valid() {
        let transport = Arc::new(ProbeTable::new(&[("https://img.test/a.jpg", 301)]));
        let validator = ResultValidator::new(transport);

        let valid = validator
            .validate(vec![result("a", "https://img.test/a.jpg")])
            .await;
        assert!(valid.is_empty());
    }

    #[tokio::test]
    async fn duplicate_urls_share_one_fate_and_order_is_preserved() {
        let transport = Arc::new(ProbeTable::new(&[
            ("https://img.test/shared.jpg", 200),
            ("https://img.test/gone.jpg", 410),
        ]));
        let validator = ResultValidator::new(transport);

        let results = vec![
            result("first", "https://img.test/shared.jpg"),
            result("gone", "https://img.test/gone.jpg"),
            result("second", "https://img.test/shared.jpg"),
        ];

        let valid = validator.validate(results).await;
        let titles: Vec<&str> = valid.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["first", "second"]);
    }

    #[tokio::test]
    async fn empty_input_probes_nothing() {
        let transport = Arc::new(ProbeTable::new(&[]));
        let validator = ResultValidator::new(transport);
        assert!(validator.validate(Vec::new()).await.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn probes_run_concurrently_not_serially() {
        let mut table = ProbeTable::new(&[
            ("https://img.test/0.jpg", 200),
            ("https://img.test/1.jpg", 200),
            ("https://img.test/2.jpg", 200),
            ("https://img.test/3.jpg", 200),
            ("https://img.test/4.jpg", 200),
        ]);
        table.delay_ms = 100;
        let validator = ResultValidator::new(Arc::new(table));

        let results: Vec<SearchResult> = (0..5)
            .map(|i| result(&i.to_string(), &format!("https://img.test/{i}.jpg")))
            .collect();

        let start = tokio::time::Instant::now();
        let valid = validator.validate(results).await;
        let elapsed = start.elapsed();

        assert_eq!(valid.len(), 5);
        // Serial chaining would take 500ms of virtual time; the fan-out
        // joins after a single 100ms round.
        assert!(elapsed < Duration::from_millis(200), "took {elapsed:?}");
    }
}
