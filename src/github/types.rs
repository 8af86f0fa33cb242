//! Wire and domain types for the repository search endpoint

use reqwest::Url;
use serde::Deserialize;

use super::error::SearchError;

/// Raw body of `GET /search/repositories`
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub total_count: Option<u64>,
    #[serde(default)]
    pub incomplete_results: bool,
    /// Missing `items` decodes as an empty list.
    #[serde(default)]
    pub items: Vec<RepoItem>,
}

/// One repository as GitHub sends it (only the fields we render)
#[derive(Debug, Clone, Deserialize)]
pub struct RepoItem {
    pub id: u64,
    pub full_name: String,
    pub description: Option<String>,
    pub stargazers_count: u64,
    pub html_url: String,
}

/// Repository record shown as a card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    #[allow(dead_code)]
    pub id: u64,
    pub full_name: String,
    pub description: Option<String>,
    pub stargazers_count: u64,
    pub html_url: String,
}

impl TryFrom<RepoItem> for SearchResult {
    type Error = SearchError;

    fn try_from(item: RepoItem) -> Result<Self, Self::Error> {
        let url_ok = Url::parse(&item.html_url)
            .map(|url| matches!(url.scheme(), "http" | "https"))
            .unwrap_or(false);
        if !url_ok {
            return Err(SearchError::InvalidItem {
                full_name: item.full_name,
                reason: format!("bad html_url {:?}", item.html_url),
            });
        }

        Ok(Self {
            id: item.id,
            full_name: item.full_name,
            description: item.description,
            stargazers_count: item.stargazers_count,
            html_url: item.html_url,
        })
    }
}

impl SearchResponse {
    /// Narrow the response into domain records, keeping upstream order.
    pub fn into_results(self) -> Result<Vec<SearchResult>, SearchError> {
        self.items.into_iter().map(SearchResult::try_from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const THREE_ITEMS: &str = r#"{
        "total_count": 3,
        "incomplete_results": false,
        "items": [
            {"id": 10270250, "full_name": "facebook/react", "description": "The library for web and native user interfaces.",
             "stargazers_count": 230000, "html_url": "https://github.com/facebook/react", "language": "JavaScript"},
            {"id": 75396575, "full_name": "vercel/next.js", "description": null,
             "stargazers_count": 125000, "html_url": "https://github.com/vercel/next.js"},
            {"id": 7, "full_name": "someone/react-thing",
             "stargazers_count": 12, "html_url": "https://github.com/someone/react-thing"}
        ]
    }"#;

    #[test]
    fn test_decode_preserves_order() {
        let response: SearchResponse = serde_json::from_str(THREE_ITEMS).unwrap();
        assert_eq!(response.total_count, Some(3));

        let results = response.into_results().unwrap();
        let names: Vec<&str> = results.iter().map(|r| r.full_name.as_str()).collect();
        assert_eq!(names, ["facebook/react", "vercel/next.js", "someone/react-thing"]);
        assert_eq!(results[0].stargazers_count, 230000);
        assert_eq!(results[1].description, None);
        assert_eq!(results[2].description, None);
    }

    #[test]
    fn test_missing_items_is_empty() {
        let response: SearchResponse = serde_json::from_str(r#"{"total_count": 0}"#).unwrap();
        assert!(response.into_results().unwrap().is_empty());
    }

    #[test]
    fn test_negative_stars_rejected() {
        let body = r#"{"items": [{"id": 1, "full_name": "a/b", "stargazers_count": -4,
                       "html_url": "https://github.com/a/b"}]}"#;
        assert!(serde_json::from_str::<SearchResponse>(body).is_err());
    }

    #[test]
    fn test_non_web_url_rejected() {
        let item = RepoItem {
            id: 1,
            full_name: "a/b".to_string(),
            description: None,
            stargazers_count: 0,
            html_url: "javascript:alert(1)".to_string(),
        };
        match SearchResult::try_from(item) {
            Err(SearchError::InvalidItem { full_name, .. }) => assert_eq!(full_name, "a/b"),
            other => panic!("Expected InvalidItem, got {:?}", other),
        }
    }
}
