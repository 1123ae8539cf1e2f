//! Single-site crawler
//!
//! Owns everything one site needs: the frontier, the visited set, the
//! ledger, the robots policy, and the extractor chosen for the site. Each
//! `step()` call performs exactly one fetch-extract-expand cycle and blocks
//! on exactly one network round trip.

use crate::config::SiteEntry;
use crate::crawler::anchors::anchor_hrefs;
use crate::crawler::fetcher::{fetch_page, FetchedPage};
use crate::crawler::frontier::Frontier;
use crate::crawler::ledger::Ledger;
use crate::extract::{self, Extractor};
use crate::robots::RobotsPolicy;
use crate::url::{rank_url, ClassifyContext, Decision};
use crate::{LadleError, Result};
use rand::rngs::StdRng;
use reqwest::Client;
use std::collections::HashSet;
use url::Url;

/// Crawls one website
pub struct SiteCrawler {
    site: SiteEntry,
    base_url: Url,
    agent: String,
    client: Client,
    robots: RobotsPolicy,
    extractor: Box<dyn Extractor>,
    frontier: Frontier,
    visited: HashSet<String>,
    ledger: Ledger,
    /// License URL attached to harvested recipes that carry none
    license: Option<String>,
    rng: StdRng,
    fetch_count: u64,
    bytes_downloaded: u64,
}

impl SiteCrawler {
    /// Creates a crawler for one site
    ///
    /// Fetches the site's robots policy (a failed fetch is fatal; the
    /// crawler is never activated without one), chooses the extractor from
    /// the site's host, and seeds the high tier with the start URL when one
    /// is configured, else the base URL.
    ///
    /// # Arguments
    ///
    /// * `site` - The site descriptor from configuration
    /// * `client` - The shared HTTP client
    /// * `agent` - Agent token checked against robots.txt
    /// * `rng` - Random source for low-tier selection
    pub async fn new(site: SiteEntry, client: Client, agent: String, rng: StdRng) -> Result<Self> {
        let base_url = Url::parse(&site.url)?;

        let robots = RobotsPolicy::fetch(&client, &base_url).await?;
        let extractor = extract::for_site(&base_url);

        let seed = Url::parse(site.seed_url())?;
        tracing::debug!("Seeding crawler for {} with {}", site.url, seed);
        let mut frontier = Frontier::new();
        frontier.push_high(seed);

        let license = site.effective_license().map(String::from);

        Ok(Self {
            site,
            base_url,
            agent,
            client,
            robots,
            extractor,
            frontier,
            visited: HashSet::new(),
            ledger: Ledger::new(),
            license,
            rng,
            fetch_count: 0,
            bytes_downloaded: 0,
        })
    }

    /// Crawls a single page; returns the number of recipes found (0 or 1)
    ///
    /// An empty frontier surfaces as `LadleError::FrontierExhausted`: the
    /// crawler is done and the scheduler retires it. Any other error is
    /// fatal for the run.
    pub async fn step(&mut self) -> Result<usize> {
        let url = self
            .frontier
            .pop(&mut self.rng)
            .ok_or_else(|| LadleError::FrontierExhausted {
                site: self.site.url.clone(),
            })?;

        self.visited.insert(url.to_string());
        tracing::debug!("Visiting {}", url);

        let page = fetch_page(&self.client, &url).await?;
        self.fetch_count += 1;
        self.bytes_downloaded += page.byte_count();

        let found = self.harvest(&page, &url)?;
        self.expand(&page.body);

        tracing::debug!(
            "High list: {} Low list: {}",
            self.frontier.high_len(),
            self.frontier.low_len()
        );

        Ok(found)
    }

    /// Runs extraction on a fetched page and records a novel recipe
    fn harvest(&mut self, page: &FetchedPage, url: &Url) -> Result<usize> {
        let mut records = self.extractor.extract(&page.body, &page.final_url);

        // Recipe pages carry one recipe each; a page with several is an
        // assumption violation, not something to silently truncate.
        if records.len() > 1 {
            return Err(LadleError::MultipleRecipes {
                url: url.to_string(),
                count: records.len(),
            });
        }

        let mut record = match records.pop() {
            Some(r) => r,
            None => return Ok(0),
        };

        // Fill in source URL and license only where extraction left them absent
        if record.url.is_none() {
            record.url = Some(page.final_url.to_string());
        }
        if record.license.is_none() {
            record.license = self.license.clone();
        }

        if let Some(idx) = self.ledger.find_similar(&record) {
            tracing::debug!(
                "Skipping a similar recipe: {} (matches entry {})",
                record.name,
                idx
            );
            Ok(0)
        } else {
            tracing::debug!("Adding a recipe: {}", record.name);
            self.ledger.push(record);
            Ok(1)
        }
    }

    /// Mines all anchors from a page body and grows the frontier
    fn expand(&mut self, body: &str) {
        let ctx = ClassifyContext {
            base: &self.base_url,
            recipe_path: self.site.recipe_path.as_deref(),
            visited: &self.visited,
            robots: &self.robots,
            agent: &self.agent,
        };

        for href in anchor_hrefs(body) {
            match rank_url(href.as_deref(), &ctx) {
                Decision::High(url) => {
                    self.frontier.push_high(url);
                }
                Decision::Low(url) => {
                    self.frontier.push_low(url);
                }
                Decision::Reject(reason) => {
                    tracing::trace!("Skipping href ({}): {:?}", reason, href);
                }
            }
        }
    }

    /// The site descriptor this crawler was built from
    pub fn site(&self) -> &SiteEntry {
        &self.site
    }

    /// Display title for reports: the configured title or the base URL
    pub fn title(&self) -> &str {
        self.site.title.as_deref().unwrap_or(&self.site.url)
    }

    /// License URL attached to this site's recipes, if any
    pub fn license(&self) -> Option<&str> {
        self.license.as_deref()
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Number of page GETs issued so far
    pub fn fetch_count(&self) -> u64 {
        self.fetch_count
    }

    /// Approximate bytes downloaded (see `FetchedPage::byte_count`)
    pub fn bytes_downloaded(&self) -> u64 {
        self.bytes_downloaded
    }
}

impl std::fmt::Debug for SiteCrawler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SiteCrawler")
            .field("site", &self.site.url)
            .field("visited", &self.visited.len())
            .field("frontier_high", &self.frontier.high_len())
            .field("frontier_low", &self.frontier.low_len())
            .field("recipes", &self.ledger.len())
            .finish()
    }
}
