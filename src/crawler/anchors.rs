//! Anchor mining
//!
//! Pulls the href of every `<a>` element out of a page body, in document
//! order. No filtering happens here: anchors without an href come back as
//! None so the classifier can account for them, and every raw value is
//! passed through the ranking rules before it can reach the frontier.

use scraper::{Html, Selector};

/// Collects the raw href of every anchor in the document
pub fn anchor_hrefs(html: &str) -> Vec<Option<String>> {
    let document = Html::parse_document(html);

    let selector = match Selector::parse("a") {
        Ok(s) => s,
        Err(_) => return Vec::new(),
    };

    document
        .select(&selector)
        .map(|a| a.value().attr("href").map(String::from))
        .collect()
}
