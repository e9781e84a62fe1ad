//! Search backend abstraction
//!
//! This module provides the trait every concrete data source implements.
//! A backend contributes two pure functions (request construction and
//! response parsing) plus static identity metadata; the request lifecycle
//! itself is owned by [`SearchProvider`](crate::provider::SearchProvider).

use async_trait::async_trait;

use crate::error::SearchError;
use crate::types::{FetchRequest, SearchResult};

/// Trait for search backends
///
/// All backends must implement this trait to be driven by a
/// `SearchProvider`. Implementations must be cheap to call: `fetch_url` and
/// `process_result` perform no I/O.
#[async_trait]
pub trait SearchBackend: Send + Sync {
    /// Display identity of this backend
    fn name(&self) -> &str;

    /// Ordered, non-empty list of search categories this backend supports
    fn tabs(&self) -> &[String];

    /// Whether [`show_more`](Self::show_more) is meaningfully implemented
    fn has_show_more(&self) -> bool {
        false
    }

    /// Build the request for a given tab and raw query string
    ///
    /// Pure: must not perform I/O.
    fn fetch_url(&self, tab: &str, query: &str) -> FetchRequest;

    /// Parse a decoded response body into zero or more results
    ///
    /// Malformed-but-decodable input should yield an empty or partial list
    /// rather than an error; `Err` is reserved for truly exceptional
    /// conditions and propagates to the caller of `search` unhandled.
    fn process_result(
        &self,
        raw: &serde_json::Value,
        tab: &str,
    ) -> Result<Vec<SearchResult>, SearchError>;

    /// Fetch a further page of results relative to `selected`
    ///
    /// The default returns an empty list unconditionally, without I/O.
    /// Backends that report `has_show_more() == true` override this with
    /// their own pagination contract.
    async fn show_more(
        &self,
        tab: &str,
        selected: &SearchResult,
    ) -> Result<Vec<SearchResult>, SearchError> {
        let _ = (tab, selected);
        Ok(Vec::new())
    }
}
