//! Common types shared by search backends and the provider core
//!
//! These types are used across all search backends to provide a consistent
//! interface for search results and request construction.

use serde::{Deserialize, Serialize};

/// A single search result
///
/// Backends populate whatever fields their data source offers; the core only
/// ever inspects `image_url`. Extra backend-specific fields survive
/// serialization round-trips via the flattened map.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchResult {
    /// The display title of the result
    pub title: String,
    /// The URL of the result's detail page
    pub url: String,
    /// The URL of the result's cover/preview image
    pub image_url: String,
    /// Backend-specific fields (media type, year, score, ...)
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl SearchResult {
    pub fn new(
        title: impl Into<String>,
        url: impl Into<String>,
        image_url: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            image_url: image_url.into(),
            extra: serde_json::Map::new(),
        }
    }
}

/// The request a backend wants the transport to issue
///
/// Produced by [`SearchBackend::fetch_url`](crate::backend::SearchBackend::fetch_url);
/// building one performs no I/O.
#[derive(Debug, Clone)]
pub struct FetchRequest {
    /// Fully constructed request URL, query string included
    pub url: String,
    /// Transport parameters; the default is a plain GET with no extra headers
    pub options: RequestOptions,
}

impl FetchRequest {
    /// A plain GET request for `url`
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            options: RequestOptions::default(),
        }
    }

    pub fn with_options(url: impl Into<String>, options: RequestOptions) -> Self {
        Self {
            url: url.into(),
            options,
        }
    }
}

/// Optional transport parameters for a [`FetchRequest`]
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// HTTP method override; `None` means GET
    pub method: Option<reqwest::Method>,
    /// Extra request headers as (name, value) pairs
    pub headers: Vec<(String, String)>,
    /// Request body, typically a JSON or GraphQL payload
    pub body: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extra_fields_survive_serde() {
        let json = serde_json::json!({
            "title": "Cowboy Bebop",
            "url": "https://example.org/anime/1",
            "image_url": "https://example.org/covers/1.jpg",
            "media_type": "tv",
            "year": 1998,
        });

        let result: SearchResult = serde_json::from_value(json.clone()).unwrap();
        assert_eq!(result.title, "Cowboy Bebop");
        assert_eq!(result.extra["media_type"], "tv");
        assert_eq!(result.extra["year"], 1998);

        let back = serde_json::to_value(&result).unwrap();
        assert_eq!(back, json);
    }

    #[test]
    fn fetch_request_defaults_to_get() {
        let request = FetchRequest::get("https://example.org/search?q=abc");
        assert!(request.options.method.is_none());
        assert!(request.options.headers.is_empty());
        assert!(request.options.body.is_none());
    }
}
