//! Multi-site scheduler
//!
//! Drives every site crawler with a round-robin rotation, one step per
//! crawler per turn. A crawler whose frontier runs dry is retired from the
//! rotation; the run stops once the global recipe target is met or no
//! active crawlers remain, whichever comes first.

use crate::config::Config;
use crate::crawler::fetcher::build_http_client;
use crate::crawler::site::SiteCrawler;
use crate::extract::RecipeRecord;
use crate::{LadleError, Result, SiteEntry};
use rand::rngs::StdRng;
use rand::SeedableRng;
use reqwest::Client;
use std::time::Duration;

/// Read view over one site's crawl, for report generation
#[derive(Debug)]
pub struct SiteSummary<'a> {
    pub title: &'a str,
    pub url: &'a str,
    pub license: Option<&'a str>,
    pub records: &'a [RecipeRecord],
}

/// Manages multiple site crawlers toward a shared recipe target
pub struct MultiCrawler {
    client: Client,
    agent: String,
    recipe_limit: usize,
    step_delay: Duration,
    rng_seed: Option<u64>,

    /// All crawlers in registration order; never reordered
    crawlers: Vec<SiteCrawler>,

    /// Indices of active crawlers, in rotation order
    rotation: Vec<usize>,

    /// Indices of retired crawlers, in retirement order
    retired: Vec<usize>,

    /// Position of the next rotation entry to step
    cursor: usize,

    /// Recipes accepted across all ledgers so far
    num_recipes: usize,
}

impl MultiCrawler {
    /// Creates a scheduler from the crawler configuration
    pub fn new(config: &Config) -> Result<Self> {
        let client = build_http_client(&config.user_agent, config.crawler.fetch_timeout)?;

        Ok(Self {
            client,
            agent: config.user_agent.crawler_name.clone(),
            recipe_limit: config.crawler.recipe_limit,
            step_delay: Duration::from_millis(config.crawler.step_delay),
            rng_seed: config.crawler.rng_seed,
            crawlers: Vec::new(),
            rotation: Vec::new(),
            retired: Vec::new(),
            cursor: 0,
            num_recipes: 0,
        })
    }

    /// Overrides the configured recipe target (CLI `--limit`)
    pub fn set_recipe_limit(&mut self, limit: usize) {
        self.recipe_limit = limit;
    }

    /// Registers a site and activates its crawler
    ///
    /// Construction fetches the site's robots policy; a robots failure
    /// propagates here and the crawler is never added to the rotation.
    pub async fn register(&mut self, site: SiteEntry) -> Result<()> {
        let ordinal = self.crawlers.len();

        // Derive a per-site RNG stream so a configured seed reproduces the
        // whole run, not just one crawler
        let rng = match self.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(ordinal as u64)),
            None => StdRng::from_entropy(),
        };

        tracing::debug!("Adding crawler for: {}", site.url);
        let crawler = SiteCrawler::new(site, self.client.clone(), self.agent.clone(), rng).await?;

        self.rotation.push(ordinal);
        self.crawlers.push(crawler);
        Ok(())
    }

    /// Runs crawlers sequentially until enough recipes are collected
    ///
    /// The loop exits the moment the recipe counter reaches the target, or
    /// the instant the rotation is empty, even mid-target and even when
    /// zero sites were registered. No progress is possible without
    /// crawlers, so the short-circuit is deliberate.
    pub async fn run(&mut self) -> Result<()> {
        while self.num_recipes < self.recipe_limit {
            if self.rotation.is_empty() {
                tracing::info!("All crawlers exhausted before reaching the target");
                break;
            }

            if self.cursor >= self.rotation.len() {
                self.cursor = 0;
            }
            let idx = self.rotation[self.cursor];

            match self.crawlers[idx].step().await {
                Ok(found) => {
                    self.num_recipes += found;
                    self.cursor += 1;
                }
                Err(LadleError::FrontierExhausted { site }) => {
                    tracing::info!("Terminating crawler for {}", site);
                    self.retire(idx)?;
                }
                Err(e) => return Err(e),
            }

            tracing::debug!("Recipes collected: {}/{}", self.num_recipes, self.recipe_limit);

            if !self.step_delay.is_zero() {
                tokio::time::sleep(self.step_delay).await;
            }
        }

        Ok(())
    }

    /// Moves a crawler out of the active rotation
    ///
    /// Not finding the crawler in the rotation means the scheduler's own
    /// bookkeeping is broken, which is not recoverable.
    fn retire(&mut self, idx: usize) -> Result<()> {
        let pos = self
            .rotation
            .iter()
            .position(|&i| i == idx)
            .ok_or_else(|| LadleError::SchedulerConsistency {
                site: self.crawlers[idx].site().url.clone(),
            })?;

        self.rotation.remove(pos);
        self.retired.push(idx);

        // The removal shifts the next crawler into this slot; keep the
        // cursor in place so rotation order is preserved
        if pos < self.cursor {
            self.cursor -= 1;
        }

        Ok(())
    }

    /// Every accepted recipe: site registration order, then per-site
    /// insertion order. Retired crawlers' ledgers are included.
    pub fn results(&self) -> Vec<&RecipeRecord> {
        self.crawlers
            .iter()
            .flat_map(|c| c.ledger().records())
            .collect()
    }

    /// Recipes accepted across all sites
    pub fn recipes_found(&self) -> usize {
        self.num_recipes
    }

    /// Total page GETs issued by all crawlers
    pub fn fetch_count(&self) -> u64 {
        self.crawlers.iter().map(|c| c.fetch_count()).sum()
    }

    /// Approximate total bytes downloaded by all crawlers
    pub fn bytes_downloaded(&self) -> u64 {
        self.crawlers.iter().map(|c| c.bytes_downloaded()).sum()
    }

    /// Number of crawlers still in the rotation
    pub fn active_count(&self) -> usize {
        self.rotation.len()
    }

    /// Number of crawlers retired after exhausting their frontier
    pub fn retired_count(&self) -> usize {
        self.retired.len()
    }

    /// Per-site read views for the license report, registration order
    pub fn site_summaries(&self) -> Vec<SiteSummary<'_>> {
        self.crawlers
            .iter()
            .map(|c| SiteSummary {
                title: c.title(),
                url: &c.site().url,
                license: c.license(),
                records: c.ledger().records(),
            })
            .collect()
    }

    /// The registered crawlers, registration order
    pub fn crawlers(&self) -> &[SiteCrawler] {
        &self.crawlers
    }
}
