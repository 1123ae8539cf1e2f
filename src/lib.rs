//! Ladle: a focused recipe crawler
//!
//! This crate implements a web crawler that walks a fixed set of seed
//! websites, harvests schema.org/Recipe records, deduplicates them, and
//! stops once a recipe target is met or every site is exhausted.

pub mod config;
pub mod crawler;
pub mod extract;
pub mod output;
pub mod robots;
pub mod url;

use thiserror::Error;

/// Main error type for Ladle operations
#[derive(Debug, Error)]
pub enum LadleError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("Failed to fetch robots.txt for {site}: {source}")]
    RobotsFetch { site: String, source: reqwest::Error },

    /// Both frontier tiers were empty on pop. Expected once per site;
    /// the scheduler recovers by retiring the crawler.
    #[error("Frontier exhausted for {site}")]
    FrontierExhausted { site: String },

    #[error("Page {url} yielded {count} recipes; multiple recipes on one page are unsupported")]
    MultipleRecipes { url: String, count: usize },

    #[error("Scheduler rotation does not contain crawler for {site}")]
    SchedulerConsistency { site: String },

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Output file already exists: {0}")]
    OutputExists(String),

    #[error("Site filter matched no configured sites")]
    NoSitesSelected,

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for Ladle operations
pub type Result<T> = std::result::Result<T, LadleError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use crate::config::{Config, SiteEntry};
pub use crate::crawler::{MultiCrawler, SiteCrawler};
pub use crate::extract::RecipeRecord;
pub use crate::url::{rank_url, ClassifyContext, Decision, RejectReason};
