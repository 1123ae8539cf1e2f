use serde::Deserialize;

/// Main configuration structure for Ladle
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub crawler: CrawlerConfig,
    #[serde(rename = "user-agent")]
    pub user_agent: UserAgentConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default, rename = "site")]
    pub sites: Vec<SiteEntry>,
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlerConfig {
    /// Number of recipes to collect before the run stops
    #[serde(rename = "recipe-limit", default = "default_recipe_limit")]
    pub recipe_limit: usize,

    /// Per-request timeout in seconds
    #[serde(rename = "fetch-timeout", default = "default_fetch_timeout")]
    pub fetch_timeout: u64,

    /// Fixed delay between scheduler steps in milliseconds (0 disables)
    #[serde(rename = "step-delay", default = "default_step_delay")]
    pub step_delay: u64,

    /// Seed for the low-tier selection RNG; absent means seed from entropy
    #[serde(rename = "rng-seed")]
    pub rng_seed: Option<u64>,
}

fn default_recipe_limit() -> usize {
    20
}

fn default_fetch_timeout() -> u64 {
    5
}

fn default_step_delay() -> u64 {
    1000
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
pub struct UserAgentConfig {
    /// Name of the crawler; also the agent token checked against robots.txt
    #[serde(rename = "crawler-name")]
    pub crawler_name: String,

    /// Version of the crawler
    #[serde(rename = "crawler-version")]
    pub crawler_version: String,

    /// URL with information about the crawler
    #[serde(rename = "contact-url")]
    pub contact_url: String,
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Path to the JSON cookbook file; empty means derive a unique name
    #[serde(rename = "cookbook-path", default)]
    pub cookbook_path: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            cookbook_path: String::new(),
        }
    }
}

/// Per-site descriptor; read-only for the lifetime of a crawl
#[derive(Debug, Clone, Deserialize)]
pub struct SiteEntry {
    /// Base URL; its authority is used for same-domain checks
    pub url: String,

    /// URL prefix that marks a candidate link as likely to hold a recipe
    #[serde(rename = "recipe-path")]
    pub recipe_path: Option<String>,

    /// License URL, or "proprietary" meaning do not attach a license
    pub license: Option<String>,

    /// Seed URL differing from the base (e.g. a recipe index page)
    #[serde(rename = "start-url")]
    pub start_url: Option<String>,

    /// Display title for the license report
    pub title: Option<String>,
}

impl SiteEntry {
    /// The license URL to attach to harvested recipes, if any.
    ///
    /// "proprietary" (any casing) and non-absolute values mean no license
    /// is attached, mirroring how the site list has always been read.
    pub fn effective_license(&self) -> Option<&str> {
        match &self.license {
            Some(l)
                if !l.eq_ignore_ascii_case("proprietary")
                    && crate::url::is_absolute_url(l) =>
            {
                Some(l.as_str())
            }
            _ => None,
        }
    }

    /// The URL the crawl of this site starts from.
    pub fn seed_url(&self) -> &str {
        self.start_url.as_deref().unwrap_or(&self.url)
    }
}
