//! Search provider core
//!
//! `SearchProvider` drives one backend through the full request lifecycle:
//! query-length gating, tab normalization, stale-result suppression via a
//! monotonic request token, delegation to the backend's pure request
//! builder and parser, and image validation of the parsed results.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::backend::SearchBackend;
use crate::config::Config;
use crate::error::SearchError;
use crate::transport::{HttpTransport, Transport};
use crate::types::SearchResult;
use crate::validate::ResultValidator;

/// Queries shorter than this resolve empty without touching the network.
/// Part of the search contract, not a configuration knob.
pub const MIN_QUERY_LEN: usize = 3;

/// Orchestrates searches against one backend
///
/// One provider instance per backend, constructed once and kept for the
/// lifetime of the UI session. The request token lives and dies with the
/// instance; independent instances never affect each other's staleness.
pub struct SearchProvider {
    backend: Arc<dyn SearchBackend>,
    transport: Arc<dyn Transport>,
    validator: ResultValidator,
    last_id: AtomicU64,
}

impl SearchProvider {
    pub fn new(backend: Arc<dyn SearchBackend>, transport: Arc<dyn Transport>) -> Self {
        let validator = ResultValidator::new(Arc::clone(&transport));
        Self {
            backend,
            transport,
            validator,
            last_id: AtomicU64::new(0),
        }
    }

    /// Convenience constructor wiring up a real HTTP transport
    pub fn from_config(backend: Arc<dyn SearchBackend>, config: &Config) -> Self {
        Self::new(backend, Arc::new(HttpTransport::new(&config.http)))
    }

    /// Display identity of the underlying backend
    pub fn name(&self) -> &str {
        self.backend.name()
    }

    /// Search categories the underlying backend supports
    pub fn tabs(&self) -> &[String] {
        self.backend.tabs()
    }

    /// Whether the underlying backend implements pagination
    pub fn has_show_more(&self) -> bool {
        self.backend.has_show_more()
    }

    /// Legacy tab rename kept for compatibility with existing backends:
    /// callers say "character", backends expect "characters".
    fn normalize_tab(tab: &str) -> &str {
        if tab == "character" {
            "characters"
        } else {
            tab
        }
    }

    /// Run one search and return validated results
    ///
    /// Resolves empty (not an error) when the query is under
    /// [`MIN_QUERY_LEN`] characters or when a newer search on this instance
    /// superseded this one while its response was in flight. Transport and
    /// backend-parse failures propagate to the caller untouched.
    pub async fn search(&self, query: &str, tab: &str) -> Result<Vec<SearchResult>, SearchError> {
        if query.chars().count() < MIN_QUERY_LEN {
            return Ok(Vec::new());
        }

        let tab = Self::normalize_tab(tab);

        // Taken before the first await: concurrent calls on this instance
        // observe strictly increasing, distinct tokens in call order.
        let my_token = self.last_id.fetch_add(1, Ordering::SeqCst) + 1;

        let request = self.backend.fetch_url(tab, query);
        tracing::debug!(
            "Searching {} tab '{}' for '{}' (token {})",
            self.backend.name(),
            tab,
            query,
            my_token
        );

        let raw = self.transport.fetch_json(&request).await?;

        // A newer search was initiated while this response was in flight.
        // The request ran to completion; only its result is discarded.
        if self.last_id.load(Ordering::SeqCst) > my_token {
            tracing::debug!(
                "Discarding stale {} response (token {}, now {})",
                self.backend.name(),
                my_token,
                self.last_id.load(Ordering::SeqCst)
            );
            return Ok(Vec::new());
        }

        let results = self.backend.process_result(&raw, tab)?;
        Ok(self.validator.validate(results).await)
    }

    /// Fetch a further page of results relative to `selected`
    ///
    /// Backends without pagination inherit the trait default, which
    /// resolves empty without I/O.
    pub async fn show_more(
        &self,
        tab: &str,
        selected: &SearchResult,
    ) -> Result<Vec<SearchResult>, SearchError> {
        self.backend.show_more(tab, selected).await
    }
}
