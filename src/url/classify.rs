//! Candidate link ranking
//!
//! Every anchor href mined from a fetched page passes through [`rank_url`],
//! which either rejects it or resolves it to an absolute URL destined for
//! one of the two frontier tiers. Classification is pure given the crawler's
//! current visited set and robots policy; the resolved URL, not the raw
//! href, is what downstream logic enqueues.

use crate::robots::RobotsPolicy;
use crate::url::domain::{is_absolute_url, same_authority};
use std::collections::HashSet;
use std::fmt;
use url::Url;

/// Outcome of ranking one candidate href
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Likely to hold a recipe; goes to the high-priority tier
    High(Url),

    /// Unknown value; goes to the low-priority tier
    Low(Url),

    /// Not worth visiting
    Reject(RejectReason),
}

/// Why a candidate href was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// Missing, empty, or unresolvable href
    NotALink,
    /// Fragment, javascript:, or mailto: href
    NonNavigational,
    /// Authority differs from the site base
    OffDomain,
    /// Already fetched this URL
    AlreadyVisited,
    /// Robots policy disallows it for our agent
    RobotsDisallowed,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::NotALink => "not a usable link",
            Self::NonNavigational => "non-navigational",
            Self::OffDomain => "off-domain",
            Self::AlreadyVisited => "already visited",
            Self::RobotsDisallowed => "robots-disallowed",
        };
        f.write_str(s)
    }
}

/// Everything the classifier needs to know about the crawler's current state
pub struct ClassifyContext<'a> {
    /// The site base URL relative hrefs resolve against
    pub base: &'a Url,

    /// Configured recipe-path prefix, if any
    pub recipe_path: Option<&'a str>,

    /// URLs already fetched by this crawler
    pub visited: &'a HashSet<String>,

    /// This site's robots policy
    pub robots: &'a RobotsPolicy,

    /// Agent token checked against the robots policy
    pub agent: &'a str,
}

/// Ranks a candidate href mined from a page
///
/// Rules are applied in order; the first match wins:
/// 1. Missing or empty href → reject
/// 2. `#`, `javascript:`, `mailto:` prefixes → reject
/// 3. Off-domain absolute hrefs → reject; relative hrefs resolve against
///    the base first
/// 4. Already visited → reject
/// 5. Disallowed by robots → reject
/// 6. Matches the recipe-path prefix → high
/// 7. Otherwise → low
pub fn rank_url(href: Option<&str>, ctx: &ClassifyContext<'_>) -> Decision {
    let href = match href {
        Some(h) if !h.is_empty() => h,
        _ => return Decision::Reject(RejectReason::NotALink),
    };

    // These hrefs won't lead to a webpage
    if href.starts_with('#') || href.starts_with("javascript:") || href.starts_with("mailto:") {
        return Decision::Reject(RejectReason::NonNavigational);
    }

    let url = if is_absolute_url(href) {
        let url = match Url::parse(href) {
            Ok(u) => u,
            Err(_) => return Decision::Reject(RejectReason::NotALink),
        };
        if !same_authority(ctx.base, &url) {
            return Decision::Reject(RejectReason::OffDomain);
        }
        url
    } else {
        // Convert the relative href into an absolute URL
        match ctx.base.join(href) {
            Ok(u) => u,
            Err(_) => return Decision::Reject(RejectReason::NotALink),
        }
    };

    if ctx.visited.contains(url.as_str()) {
        return Decision::Reject(RejectReason::AlreadyVisited);
    }

    if !ctx.robots.allows(ctx.agent, url.as_str()) {
        return Decision::Reject(RejectReason::RobotsDisallowed);
    }

    match ctx.recipe_path {
        Some(prefix) if !prefix.is_empty() && url.as_str().starts_with(prefix) => {
            Decision::High(url)
        }
        _ => Decision::Low(url),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://www.example.com/").unwrap()
    }

    struct Fixture {
        base: Url,
        recipe_path: Option<String>,
        visited: HashSet<String>,
        robots: RobotsPolicy,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                base: base(),
                recipe_path: None,
                visited: HashSet::new(),
                robots: RobotsPolicy::allow_all(),
            }
        }

        fn ctx(&self) -> ClassifyContext<'_> {
            ClassifyContext {
                base: &self.base,
                recipe_path: self.recipe_path.as_deref(),
                visited: &self.visited,
                robots: &self.robots,
                agent: "TestBot",
            }
        }
    }

    #[test]
    fn test_missing_href_rejected() {
        let fx = Fixture::new();
        assert_eq!(
            rank_url(None, &fx.ctx()),
            Decision::Reject(RejectReason::NotALink)
        );
        assert_eq!(
            rank_url(Some(""), &fx.ctx()),
            Decision::Reject(RejectReason::NotALink)
        );
    }

    #[test]
    fn test_non_navigational_rejected() {
        let fx = Fixture::new();
        for href in ["#", "#section", "javascript:void(0)", "mailto:a@b.com"] {
            assert_eq!(
                rank_url(Some(href), &fx.ctx()),
                Decision::Reject(RejectReason::NonNavigational),
                "href: {}",
                href
            );
        }
    }

    #[test]
    fn test_off_domain_rejected() {
        let fx = Fixture::new();
        assert_eq!(
            rank_url(Some("https://www.other.com/recipes/"), &fx.ctx()),
            Decision::Reject(RejectReason::OffDomain)
        );
    }

    #[test]
    fn test_same_domain_case_insensitive() {
        let fx = Fixture::new();
        let decision = rank_url(Some("https://WWW.EXAMPLE.COM/about"), &fx.ctx());
        assert!(matches!(decision, Decision::Low(_)));
    }

    #[test]
    fn test_relative_href_resolved() {
        let fx = Fixture::new();
        match rank_url(Some("/recipes/pizza"), &fx.ctx()) {
            Decision::Low(url) => {
                assert_eq!(url.as_str(), "https://www.example.com/recipes/pizza")
            }
            other => panic!("expected Low, got {:?}", other),
        }
    }

    #[test]
    fn test_recipe_path_prefix_high() {
        let mut fx = Fixture::new();
        fx.recipe_path = Some("https://www.example.com/recipes/".to_string());

        match rank_url(Some("https://www.example.com/recipes/pizza"), &fx.ctx()) {
            Decision::High(url) => {
                assert_eq!(url.as_str(), "https://www.example.com/recipes/pizza")
            }
            other => panic!("expected High, got {:?}", other),
        }

        // A page outside the prefix stays low
        assert!(matches!(
            rank_url(Some("https://www.example.com/about"), &fx.ctx()),
            Decision::Low(_)
        ));
    }

    #[test]
    fn test_relative_href_matches_prefix() {
        let mut fx = Fixture::new();
        fx.recipe_path = Some("https://www.example.com/recipes/".to_string());

        assert!(matches!(
            rank_url(Some("/recipes/pizza"), &fx.ctx()),
            Decision::High(_)
        ));
    }

    #[test]
    fn test_visited_rejected_regardless_of_prefix() {
        let mut fx = Fixture::new();
        fx.recipe_path = Some("https://www.example.com/recipes/".to_string());
        fx.visited
            .insert("https://www.example.com/recipes/pizza".to_string());

        assert_eq!(
            rank_url(Some("https://www.example.com/recipes/pizza"), &fx.ctx()),
            Decision::Reject(RejectReason::AlreadyVisited)
        );

        // Re-classifying is idempotent
        assert_eq!(
            rank_url(Some("/recipes/pizza"), &fx.ctx()),
            Decision::Reject(RejectReason::AlreadyVisited)
        );
    }

    #[test]
    fn test_robots_disallowed_rejected() {
        let mut fx = Fixture::new();
        fx.robots = RobotsPolicy::from_content("User-agent: *\nDisallow: /private");

        assert_eq!(
            rank_url(Some("/private/stash"), &fx.ctx()),
            Decision::Reject(RejectReason::RobotsDisallowed)
        );
        assert!(matches!(
            rank_url(Some("/public"), &fx.ctx()),
            Decision::Low(_)
        ));
    }

    #[test]
    fn test_off_domain_checked_before_visited() {
        let mut fx = Fixture::new();
        fx.visited
            .insert("https://www.other.com/page".to_string());

        // Off-domain wins even though the URL is in the visited set
        assert_eq!(
            rank_url(Some("https://www.other.com/page"), &fx.ctx()),
            Decision::Reject(RejectReason::OffDomain)
        );
    }
}
