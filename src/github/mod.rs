//! GitHub repository search
//!
//! Thin client for the public search endpoint plus the types it decodes into.

pub mod api;
pub mod error;
pub mod types;

pub use api::GithubClient;
pub use error::SearchError;
pub use types::SearchResult;
