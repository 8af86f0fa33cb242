//! Search failures and the messages the user sees for them

use thiserror::Error;

/// Everything that can end a search without results.
///
/// `Display` is the exact text shown in the search view, so the variants
/// carry strings rather than source errors and the type stays `Clone` for
/// use inside `Message`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("Search query is empty")]
    EmptyQuery,

    #[error("No repositories found")]
    NoResults,

    #[error("Error fetching repositories")]
    Status(u16),

    #[error("{0}")]
    Transport(String),

    #[error("Invalid response from GitHub: {0}")]
    Decode(String),

    #[error("Invalid repository {full_name}: {reason}")]
    InvalidItem { full_name: String, reason: String },
}

impl From<reqwest::Error> for SearchError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            SearchError::Status(status.as_u16())
        } else if err.is_decode() {
            SearchError::Decode(err.to_string())
        } else {
            SearchError::Transport(err.to_string())
        }
    }
}
