//! Two-tier URL frontier
//!
//! Each site crawler owns one frontier. The high tier holds URLs believed
//! likely to contain a recipe and is consumed last-in-first-out, so freshly
//! discovered high-value links are explored before older ones. The low tier
//! holds URLs of unknown value and is consumed by uniformly random
//! selection. A URL lives in at most one tier and never twice in the same
//! tier.

use rand::Rng;
use url::Url;

/// The not-yet-fetched URLs one site crawler intends to visit
#[derive(Debug, Default)]
pub struct Frontier {
    high: Vec<Url>,
    low: Vec<Url>,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a URL to the high-priority tier unless it is already queued
    ///
    /// Returns true if the URL was inserted.
    pub fn push_high(&mut self, url: Url) -> bool {
        if self.high.contains(&url) {
            return false;
        }
        self.high.push(url);
        true
    }

    /// Adds a URL to the low-priority tier unless it is already queued
    ///
    /// Returns true if the URL was inserted.
    pub fn push_low(&mut self, url: Url) -> bool {
        if self.low.contains(&url) {
            return false;
        }
        self.low.push(url);
        true
    }

    /// Takes the next URL to fetch
    ///
    /// Prefers the most recently added high-tier URL; falls back to a
    /// uniformly random low-tier URL. None means both tiers are empty and
    /// the crawler is exhausted.
    pub fn pop<R: Rng>(&mut self, rng: &mut R) -> Option<Url> {
        if let Some(url) = self.high.pop() {
            return Some(url);
        }
        if self.low.is_empty() {
            return None;
        }
        let idx = rng.gen_range(0..self.low.len());
        // Selection is random, so the order disturbance is harmless
        Some(self.low.swap_remove(idx))
    }

    pub fn high_len(&self) -> usize {
        self.high.len()
    }

    pub fn low_len(&self) -> usize {
        self.low.len()
    }

    pub fn is_empty(&self) -> bool {
        self.high.is_empty() && self.low.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn url(path: &str) -> Url {
        Url::parse(&format!("https://www.example.com{}", path)).unwrap()
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn test_high_is_lifo() {
        let mut frontier = Frontier::new();
        frontier.push_high(url("/a"));
        frontier.push_high(url("/b"));
        frontier.push_high(url("/c"));

        let mut rng = rng();
        assert_eq!(frontier.pop(&mut rng), Some(url("/c")));
        assert_eq!(frontier.pop(&mut rng), Some(url("/b")));
        assert_eq!(frontier.pop(&mut rng), Some(url("/a")));
        assert_eq!(frontier.pop(&mut rng), None);
    }

    #[test]
    fn test_high_drained_before_low() {
        let mut frontier = Frontier::new();
        frontier.push_low(url("/low"));
        frontier.push_high(url("/high"));

        let mut rng = rng();
        assert_eq!(frontier.pop(&mut rng), Some(url("/high")));
        assert_eq!(frontier.pop(&mut rng), Some(url("/low")));
    }

    #[test]
    fn test_low_pop_is_seeded_deterministic() {
        let build = || {
            let mut f = Frontier::new();
            for path in ["/a", "/b", "/c", "/d", "/e"] {
                f.push_low(url(path));
            }
            f
        };

        let mut first = Vec::new();
        let mut f = build();
        let mut r = rng();
        while let Some(u) = f.pop(&mut r) {
            first.push(u);
        }

        let mut second = Vec::new();
        let mut f = build();
        let mut r = rng();
        while let Some(u) = f.pop(&mut r) {
            second.push(u);
        }

        assert_eq!(first, second);
        assert_eq!(first.len(), 5);
    }

    #[test]
    fn test_no_duplicates_within_tier() {
        let mut frontier = Frontier::new();
        assert!(frontier.push_high(url("/a")));
        assert!(!frontier.push_high(url("/a")));
        assert_eq!(frontier.high_len(), 1);

        assert!(frontier.push_low(url("/b")));
        assert!(!frontier.push_low(url("/b")));
        assert_eq!(frontier.low_len(), 1);
    }

    #[test]
    fn test_empty_frontier() {
        let mut frontier = Frontier::new();
        assert!(frontier.is_empty());
        assert_eq!(frontier.pop(&mut rng()), None);
    }
}
