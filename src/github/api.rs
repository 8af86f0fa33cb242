//! HTTP client for the GitHub repository search API

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::{Client, ClientBuilder, RequestBuilder};

use super::error::SearchError;
use super::types::{SearchResponse, SearchResult};
use crate::config::Config;

const USER_AGENT: &str = concat!("repofinder/", env!("CARGO_PKG_VERSION"));

/// Client for `GET /search/repositories`.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct GithubClient {
    client: Client,
    base_url: String,
}

impl GithubClient {
    pub fn new(config: &Config) -> Result<Self, SearchError> {
        let client = Self::client_builder(config).build()?;
        Ok(Self::with_client(client, &config.api_base_url))
    }

    /// Builder with the headers GitHub expects and the configured timeout
    pub fn client_builder(config: &Config) -> ClientBuilder {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));

        let mut builder = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers);
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        builder
    }

    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Request for `query`, most-starred first
    pub fn search_request(&self, query: &str) -> RequestBuilder {
        let url = format!("{}/search/repositories", self.base_url);
        self.client
            .get(&url)
            .query(&[("q", query), ("sort", "stars"), ("order", "desc")])
    }

    /// Run one search. An empty `items` list is returned as `Ok(vec![])`;
    /// deciding what that means is up to the caller.
    pub async fn search(&self, query: &str) -> Result<Vec<SearchResult>, SearchError> {
        let response = self.search_request(query).send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "GitHub search failed for {:?}", query);
            return Err(SearchError::Status(status.as_u16()));
        }

        let body: SearchResponse = response.json().await?;
        tracing::debug!(
            total = ?body.total_count,
            returned = body.items.len(),
            "GitHub search answered for {:?}",
            query
        );
        if body.incomplete_results {
            tracing::debug!("GitHub reported incomplete results for {:?}", query);
        }
        body.into_results()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    /// Serve exactly one HTTP response, handing back the request head
    async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut head = Vec::new();
            let mut buf = [0u8; 1024];
            while !head.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                head.extend_from_slice(&buf[..n]);
            }

            let response = format!(
                "HTTP/1.1 {}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
            String::from_utf8_lossy(&head).to_string()
        });

        (format!("http://{}", addr), handle)
    }

    fn local_client(base_url: &str) -> GithubClient {
        let client = GithubClient::client_builder(&Config::default())
            .no_proxy()
            .build()
            .unwrap();
        GithubClient::with_client(client, base_url)
    }

    #[test]
    fn test_request_url() {
        let client = local_client("https://api.github.com/");
        let request = client.search_request("react").build().unwrap();
        assert_eq!(request.method(), reqwest::Method::GET);
        assert_eq!(
            request.url().as_str(),
            "https://api.github.com/search/repositories?q=react&sort=stars&order=desc"
        );
    }

    #[test]
    fn test_request_query_is_encoded() {
        let client = local_client("https://api.github.com");
        let request = client.search_request("c++ lang:rust").build().unwrap();
        assert_eq!(
            request.url().query(),
            Some("q=c%2B%2B+lang%3Arust&sort=stars&order=desc")
        );
    }

    #[tokio::test]
    async fn test_search_success() {
        let body = r#"{"total_count": 2, "incomplete_results": false, "items": [
            {"id": 1, "full_name": "rust-lang/rust", "description": "Empowering everyone",
             "stargazers_count": 100000, "html_url": "https://github.com/rust-lang/rust"},
            {"id": 2, "full_name": "rust-lang/cargo", "description": null,
             "stargazers_count": 13000, "html_url": "https://github.com/rust-lang/cargo"}
        ]}"#;
        let (base_url, server) = serve_once("200 OK", body).await;

        let results = local_client(&base_url).search("rust").await.unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].full_name, "rust-lang/rust");
        assert_eq!(results[1].full_name, "rust-lang/cargo");

        let head = server.await.unwrap().to_lowercase();
        assert!(head.starts_with("get /search/repositories?q=rust&sort=stars&order=desc "));
        assert!(head.contains("user-agent: repofinder/"));
        assert!(head.contains("accept: application/vnd.github+json"));
    }

    #[tokio::test]
    async fn test_search_empty_items_is_ok() {
        let (base_url, server) = serve_once("200 OK", r#"{"total_count": 0, "items": []}"#).await;
        let results = local_client(&base_url).search("zzzznonexistentrepoxyz").await.unwrap();
        assert!(results.is_empty());
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_search_error_status() {
        let (base_url, server) =
            serve_once("403 Forbidden", r#"{"message": "API rate limit exceeded"}"#).await;
        let err = local_client(&base_url).search("react").await.unwrap_err();
        assert_eq!(err, SearchError::Status(403));
        assert_eq!(err.to_string(), "Error fetching repositories");
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_search_malformed_json() {
        let (base_url, server) = serve_once("200 OK", "<html>not json</html>").await;
        match local_client(&base_url).search("react").await {
            Err(SearchError::Decode(_)) => {}
            other => panic!("Expected Decode error, got {:?}", other),
        }
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_search_connection_refused() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        match local_client(&format!("http://{}", addr)).search("react").await {
            Err(SearchError::Transport(message)) => assert!(!message.is_empty()),
            other => panic!("Expected Transport error, got {:?}", other),
        }
    }
}
