//! Search core for a per-user document application: inverted-index
//! construction, tokenized BM25-scored search, match positioning, context
//! snippet extraction and highlight rendering.
//!
//! The pipeline: a [`search::service::SearchService`] loads a user's
//! documents from a [`store::DocumentStore`], feeds them to the
//! [`index::inverted::InvertedIndex`], queries it with normalized terms,
//! then attaches position, context and highlight to each candidate and
//! returns results sorted by score.

pub mod analysis;
pub mod core;
pub mod index;
pub mod scoring;
pub mod search;
pub mod snippet;
pub mod store;

pub use crate::core::config::SearchConfig;
pub use crate::core::error::{Error, ErrorKind, Result};
pub use crate::core::types::{DocId, Document, Field, IndexEntry};
pub use crate::index::inverted::{InvertedIndex, SearchOptions};
pub use crate::search::debounce::Debouncer;
pub use crate::search::results::SearchResult;
pub use crate::search::service::SearchService;
pub use crate::snippet::position::MatchPosition;
pub use crate::store::memory::MemoryStore;
pub use crate::store::DocumentStore;
