//! media-search — pluggable incremental-search providers
//!
//! A generic search-provider core for driving an incremental-search UI.
//! Concrete backends implement [`SearchBackend`] (static identity plus two
//! pure functions: request construction and response parsing); the core
//! owns the request lifecycle:
//!
//! - **Stale-result suppression**: each provider instance carries a
//!   monotonic request token, so an older, slower response never
//!   overwrites a newer one. Requests are not cancelled, only their
//!   results discarded.
//! - **Image validation**: parsed results are filtered by concurrently
//!   HEAD-probing each `image_url`, tolerating per-item failure.
//!
//! # Usage as Library
//!
//! ```rust,ignore
//! use media_search::{Config, SearchProvider};
//! use std::sync::Arc;
//!
//! let backend = Arc::new(MyBackend::new());
//! let provider = SearchProvider::from_config(backend, &Config::load()?);
//!
//! let results = provider.search("bebop", "anime").await?;
//! ```
//!
//! An empty result list means "nothing to show now" — too-short query,
//! superseded request, or genuinely no matches are indistinguishable by
//! design.

pub mod backend;
pub mod config;
pub mod error;
pub mod init;
pub mod provider;
pub mod transport;
pub mod types;
pub mod validate;

// Re-export the main surface
pub use backend::SearchBackend;
pub use config::{Config, HttpConfig};
pub use error::SearchError;
pub use init::init_tracing;
pub use provider::{SearchProvider, MIN_QUERY_LEN};
pub use transport::{HttpTransport, Transport};
pub use types::{FetchRequest, RequestOptions, SearchResult};
pub use validate::ResultValidator;
