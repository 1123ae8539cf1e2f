//! Per-site robots policy
//!
//! A thin wrapper around the robotstxt crate, reduced to the two operations
//! the crawler needs: build a policy from a site's robots file, and ask
//! whether a URL is allowed for our agent.

use crate::{LadleError, Result};
use reqwest::Client;
use robotstxt::DefaultMatcher;
use url::Url;

/// Fetch permission oracle for one site
#[derive(Debug, Clone)]
pub struct RobotsPolicy {
    /// Raw robots.txt content (empty string means allow all)
    content: String,
}

impl RobotsPolicy {
    /// Fetches and builds the policy for a site
    ///
    /// Retrieves `{base authority}/robots.txt` with one GET. A failed
    /// request is a hard per-site failure: without a policy the site must
    /// not be crawled, so this never degrades to allow-all on error. A
    /// non-2xx response means the site publishes no robots file and yields
    /// a permissive policy.
    ///
    /// # Arguments
    ///
    /// * `client` - The shared HTTP client
    /// * `base_url` - The site base URL
    ///
    /// # Returns
    ///
    /// * `Ok(RobotsPolicy)` - Policy ready for `allows` checks
    /// * `Err(LadleError::RobotsFetch)` - The robots file could not be retrieved
    pub async fn fetch(client: &Client, base_url: &Url) -> Result<Self> {
        let robots_url = base_url.join("/robots.txt")?;
        tracing::debug!("Reading robots.txt at: {}", robots_url);

        let response = client
            .get(robots_url.clone())
            .send()
            .await
            .map_err(|source| LadleError::RobotsFetch {
                site: base_url.to_string(),
                source,
            })?;

        if !response.status().is_success() {
            // No robots file published; nothing is disallowed
            return Ok(Self::allow_all());
        }

        let content = response
            .text()
            .await
            .map_err(|source| LadleError::RobotsFetch {
                site: base_url.to_string(),
                source,
            })?;

        Ok(Self::from_content(&content))
    }

    /// Builds a policy from raw robots.txt content
    pub fn from_content(content: &str) -> Self {
        Self {
            content: content.to_string(),
        }
    }

    /// A permissive policy that allows everything
    pub fn allow_all() -> Self {
        Self {
            content: String::new(),
        }
    }

    /// Checks whether a URL is allowed for the given agent name
    ///
    /// # Arguments
    ///
    /// * `agent` - The agent token (crawler name, without version)
    /// * `url` - The absolute URL to check
    pub fn allows(&self, agent: &str, url: &str) -> bool {
        if self.content.is_empty() {
            return true;
        }

        let mut matcher = DefaultMatcher::default();
        matcher.one_agent_allowed_by_robots(&self.content, agent, url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allow_all() {
        let policy = RobotsPolicy::allow_all();
        assert!(policy.allows("TestBot", "https://example.com/any/path"));
        assert!(policy.allows("TestBot", "https://example.com/admin"));
    }

    #[test]
    fn test_disallow_all() {
        let policy = RobotsPolicy::from_content("User-agent: *\nDisallow: /");
        assert!(!policy.allows("TestBot", "https://example.com/"));
        assert!(!policy.allows("TestBot", "https://example.com/page"));
    }

    #[test]
    fn test_disallow_specific() {
        let policy = RobotsPolicy::from_content("User-agent: *\nDisallow: /admin");
        assert!(policy.allows("TestBot", "https://example.com/"));
        assert!(policy.allows("TestBot", "https://example.com/page"));
        assert!(!policy.allows("TestBot", "https://example.com/admin"));
        assert!(!policy.allows("TestBot", "https://example.com/admin/users"));
    }

    #[test]
    fn test_allow_and_disallow() {
        let policy = RobotsPolicy::from_content(
            "User-agent: *\nDisallow: /private\nAllow: /private/public",
        );
        assert!(policy.allows("TestBot", "https://example.com/"));
        assert!(!policy.allows("TestBot", "https://example.com/private"));
        assert!(policy.allows("TestBot", "https://example.com/private/public"));
    }

    #[test]
    fn test_specific_user_agent() {
        let policy =
            RobotsPolicy::from_content("User-agent: BadBot\nDisallow: /\n\nUser-agent: *\nAllow: /");
        assert!(policy.allows("GoodBot", "https://example.com/page"));
        assert!(!policy.allows("BadBot", "https://example.com/page"));
    }

    #[test]
    fn test_empty_robots_txt() {
        let policy = RobotsPolicy::from_content("");
        assert!(policy.allows("TestBot", "https://example.com/any/path"));
    }

    #[test]
    fn test_garbage_robots_txt() {
        let policy = RobotsPolicy::from_content("This is not valid robots.txt {{{");
        // Unparseable content disallows nothing
        assert!(policy.allows("TestBot", "https://example.com/any/path"));
    }
}
