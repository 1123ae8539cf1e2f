//! HTTP fetcher implementation
//!
//! One shared client, built once from the user-agent configuration, and a
//! single-GET page fetch with a bounded timeout. Redirects are followed by
//! the client; the final URL after redirects is what gets recorded on
//! harvested recipes.

use crate::config::UserAgentConfig;
use crate::{LadleError, Result};
use reqwest::{Client, StatusCode};
use std::time::Duration;
use url::Url;

/// A fetched page body plus the response metadata the crawler records
#[derive(Debug)]
pub struct FetchedPage {
    /// Final URL after redirects
    pub final_url: Url,

    /// HTTP status code; non-2xx bodies still go to extraction
    pub status: StatusCode,

    /// Declared Content-Length header, when the server sent one
    pub content_length: Option<u64>,

    /// Decoded page body
    pub body: String,
}

impl FetchedPage {
    /// Bytes to account for this response
    ///
    /// The declared Content-Length when present (a compressed size for
    /// compressed responses), otherwise the decoded body length. The two
    /// are not reconciled, so the downloaded-bytes total is an
    /// approximation.
    pub fn byte_count(&self) -> u64 {
        self.content_length.unwrap_or(self.body.len() as u64)
    }
}

/// Builds the HTTP client shared by every site crawler
///
/// # Arguments
///
/// * `config` - The user agent configuration
/// * `timeout_secs` - Per-request timeout in seconds
///
/// # Example
///
/// ```no_run
/// use ladle::config::UserAgentConfig;
/// use ladle::crawler::build_http_client;
///
/// let config = UserAgentConfig {
///     crawler_name: "LadleBot".to_string(),
///     crawler_version: "0.3.0".to_string(),
///     contact_url: "https://example.com/ladle".to_string(),
/// };
///
/// let client = build_http_client(&config, 5).unwrap();
/// ```
pub fn build_http_client(
    config: &UserAgentConfig,
    timeout_secs: u64,
) -> std::result::Result<Client, reqwest::Error> {
    // Format: CrawlerName/Version (+ContactURL)
    let user_agent = format!(
        "{}/{} (+{})",
        config.crawler_name, config.crawler_version, config.contact_url
    );

    Client::builder()
        .user_agent(user_agent)
        .timeout(Duration::from_secs(timeout_secs))
        .connect_timeout(Duration::from_secs(timeout_secs))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches one page with a single GET
///
/// Transient failures (timeout, connection error) are not retried; they
/// surface as an error for the crawler's current step.
///
/// # Arguments
///
/// * `client` - The shared HTTP client
/// * `url` - The URL to fetch
pub async fn fetch_page(client: &Client, url: &Url) -> Result<FetchedPage> {
    let response = client
        .get(url.clone())
        .send()
        .await
        .map_err(|source| LadleError::Http {
            url: url.to_string(),
            source,
        })?;

    let final_url = response.url().clone();
    let status = response.status();
    let content_length = response.content_length();

    let body = response
        .text()
        .await
        .map_err(|source| LadleError::Http {
            url: url.to_string(),
            source,
        })?;

    Ok(FetchedPage {
        final_url,
        status,
        content_length,
        body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_config() -> UserAgentConfig {
        UserAgentConfig {
            crawler_name: "TestCrawler".to_string(),
            crawler_version: "1.0".to_string(),
            contact_url: "https://example.com/about".to_string(),
        }
    }

    #[test]
    fn test_build_http_client() {
        let config = create_test_config();
        let client = build_http_client(&config, 5);
        assert!(client.is_ok());
    }

    #[test]
    fn test_byte_count_prefers_content_length() {
        let page = FetchedPage {
            final_url: Url::parse("https://example.com/").unwrap(),
            status: StatusCode::OK,
            content_length: Some(1234),
            body: "short".to_string(),
        };
        assert_eq!(page.byte_count(), 1234);
    }

    #[test]
    fn test_byte_count_falls_back_to_body_length() {
        let page = FetchedPage {
            final_url: Url::parse("https://example.com/").unwrap(),
            status: StatusCode::OK,
            content_length: None,
            body: "twelve bytes".to_string(),
        };
        assert_eq!(page.byte_count(), 12);
    }
}
