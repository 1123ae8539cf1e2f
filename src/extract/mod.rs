//! Recipe extraction module
//!
//! This module turns raw HTML into zero or more [`RecipeRecord`]s. Most
//! sites expose schema.org/Recipe markup as JSON-LD and go through the
//! [`StandardExtractor`]; a couple of known sites publish no structured
//! data and are handled by the selector-driven [`AdapterExtractor`].
//!
//! Which extractor a site gets is decided once, at site-crawler
//! construction, from the site's host, never per page.

mod adapter;
mod record;
mod schema;

pub use adapter::AdapterExtractor;
pub use record::RecipeRecord;
pub use schema::StandardExtractor;

use url::Url;

/// Capability interface for turning one page body into recipe records
///
/// Implementations return every recipe they can find; the site crawler
/// treats more than one record from a single page as a fatal condition.
pub trait Extractor: Send + Sync {
    fn extract(&self, html: &str, final_url: &Url) -> Vec<RecipeRecord>;
}

/// Chooses the extractor for a site from its identity
///
/// Sites whose host matches a known adapter profile get the
/// [`AdapterExtractor`]; everything else gets the [`StandardExtractor`].
pub fn for_site(base_url: &Url) -> Box<dyn Extractor> {
    let host = base_url.host_str().unwrap_or("");
    match AdapterExtractor::for_host(host) {
        Some(adapter) => Box::new(adapter),
        None => Box::new(StandardExtractor),
    }
}

/// Formats a minute count as an ISO-8601 duration string
///
/// 75 minutes becomes "PT1H15M".
pub(crate) fn minutes_to_iso8601(minutes: u32) -> String {
    let hours = minutes / 60;
    let mins = minutes % 60;
    match (hours, mins) {
        (0, m) => format!("PT{}M", m),
        (h, 0) => format!("PT{}H", h),
        (h, m) => format!("PT{}H{}M", h, m),
    }
}
