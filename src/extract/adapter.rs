//! Site-profile extraction for sites without schema.org markup
//!
//! A small number of sites publish recipes as plain HTML only. Each gets a
//! selector profile keyed by host; the adapter assembles a record the same
//! shape the standard path produces, including the `@context`/`@type` tags
//! and an ISO-8601 total time.

use crate::extract::{minutes_to_iso8601, Extractor, RecipeRecord};
use scraper::{ElementRef, Html, Selector};
use url::Url;

/// Selector set for one supported host
struct SiteProfile {
    hosts: &'static [&'static str],
    name: &'static str,
    ingredient: &'static str,
    instruction: &'static str,
    total_time_minutes: Option<&'static str>,
    image: Option<(&'static str, &'static str)>,
    recipe_yield: Option<&'static str>,
}

/// Profiles for the sites the standard extractor cannot handle.
/// Check for schema.org markup before adding a profile here.
const PROFILES: &[SiteProfile] = &[
    SiteProfile {
        hosts: &["myplate.gov", "www.myplate.gov"],
        name: "h1.mp-recipe-full__title",
        ingredient: ".mp-recipe-full__ingredients li",
        instruction: ".mp-recipe-full__instructions li",
        total_time_minutes: Some(".mp-recipe-full__detail--time .mp-recipe-full__detail-value"),
        image: Some((".mp-recipe-full__image img", "src")),
        recipe_yield: Some(".mp-recipe-full__detail--yield .mp-recipe-full__detail-value"),
    },
    SiteProfile {
        hosts: &["healthyeating.nhlbi.nih.gov"],
        name: "h1.recipe-title",
        ingredient: ".recipe-ingredients li",
        instruction: ".recipe-directions li",
        total_time_minutes: Some(".recipe-time .value"),
        image: Some((".recipe-photo img", "src")),
        recipe_yield: Some(".recipe-yield .value"),
    },
];

/// Extractor for sites with a selector profile
pub struct AdapterExtractor {
    profile: &'static SiteProfile,
}

impl AdapterExtractor {
    /// Looks up the profile for a host
    ///
    /// Returns None when the host has no profile, meaning the site should
    /// use the standard extractor.
    pub fn for_host(host: &str) -> Option<Self> {
        PROFILES
            .iter()
            .find(|p| p.hosts.iter().any(|h| host.eq_ignore_ascii_case(h)))
            .map(|profile| Self { profile })
    }
}

impl Extractor for AdapterExtractor {
    fn extract(&self, html: &str, final_url: &Url) -> Vec<RecipeRecord> {
        let document = Html::parse_document(html);

        // No ingredients means this page is not a recipe
        let ingredients = select_texts(&document, self.profile.ingredient);
        if ingredients.is_empty() {
            return Vec::new();
        }

        let name = match select_texts(&document, self.profile.name).into_iter().next() {
            Some(n) => n,
            None => return Vec::new(),
        };

        let mut record = RecipeRecord::new(name);
        record.ingredients = ingredients;
        record.instructions = select_texts(&document, self.profile.instruction);

        if let Some(selector) = self.profile.total_time_minutes {
            record.total_time = select_texts(&document, selector)
                .into_iter()
                .next()
                .and_then(|text| leading_minutes(&text))
                .filter(|&m| m > 0)
                .map(minutes_to_iso8601);
        }

        if let Some((selector, attr)) = self.profile.image {
            record.image = select_attr(&document, selector, attr)
                .map(|src| absolutize(&src, final_url));
        }

        if let Some(selector) = self.profile.recipe_yield {
            record.recipe_yield = select_texts(&document, selector).into_iter().next();
        }

        record.url = Some(final_url.to_string());

        vec![record]
    }
}

/// Collects the trimmed text of every element matching a selector
fn select_texts(document: &Html, selector: &str) -> Vec<String> {
    let selector = match Selector::parse(selector) {
        Ok(s) => s,
        Err(_) => return Vec::new(),
    };

    document
        .select(&selector)
        .map(element_text)
        .filter(|t| !t.is_empty())
        .collect()
}

fn element_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Reads an attribute from the first element matching a selector
fn select_attr(document: &Html, selector: &str, attr: &str) -> Option<String> {
    let selector = Selector::parse(selector).ok()?;
    document
        .select(&selector)
        .next()
        .and_then(|el| el.value().attr(attr))
        .map(String::from)
}

/// Parses the leading integer from time text like "25 minutes"
fn leading_minutes(text: &str) -> Option<u32> {
    let digits: String = text.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().ok()
}

/// Resolves a possibly relative image src against the page URL
fn absolutize(src: &str, final_url: &Url) -> String {
    match final_url.join(src) {
        Ok(url) => url.to_string(),
        Err(_) => src.to_string(),
    }
}
