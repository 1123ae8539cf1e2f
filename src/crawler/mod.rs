//! Crawler module: the fetch-extract-expand engine
//!
//! This module contains the core crawling logic, including:
//! - The two-tier per-site frontier and visited set
//! - The per-site recipe ledger with similarity dedup
//! - HTTP fetching and anchor mining
//! - The multi-site round-robin scheduler

mod anchors;
mod fetcher;
mod frontier;
mod ledger;
mod multi;
mod site;

pub use anchors::anchor_hrefs;
pub use fetcher::{build_http_client, fetch_page, FetchedPage};
pub use frontier::Frontier;
pub use ledger::Ledger;
pub use multi::{MultiCrawler, SiteSummary};
pub use site::SiteCrawler;
