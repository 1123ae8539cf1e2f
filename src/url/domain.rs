use url::Url;

/// Simplistic test for an absolute URL
///
/// Deliberately a prefix test rather than a full parse: anything that does
/// not start with an http(s) scheme is treated as relative and later resolved
/// against the site base.
///
/// # Examples
///
/// ```
/// use ladle::url::is_absolute_url;
///
/// assert!(is_absolute_url("https://www.example.com/"));
/// assert!(is_absolute_url("http://www.example.com/"));
/// assert!(!is_absolute_url("/relative_url"));
/// assert!(!is_absolute_url("#"));
/// ```
pub fn is_absolute_url(href: &str) -> bool {
    href.starts_with("http://") || href.starts_with("https://")
}

/// Tests whether two URLs share an authority
///
/// Hosts are compared case-insensitively; ports are compared after filling
/// in the scheme default, so `https://example.com/` and
/// `https://EXAMPLE.COM:443/` count as the same authority.
///
/// # Examples
///
/// ```
/// use url::Url;
/// use ladle::url::same_authority;
///
/// let base = Url::parse("https://www.example.com/").unwrap();
/// let candidate = Url::parse("https://WWW.EXAMPLE.COM/tacos/").unwrap();
/// assert!(same_authority(&base, &candidate));
/// ```
pub fn same_authority(base: &Url, candidate: &Url) -> bool {
    let base_host = base.host_str().unwrap_or("");
    let candidate_host = candidate.host_str().unwrap_or("");

    base_host.eq_ignore_ascii_case(candidate_host)
        && base.port_or_known_default() == candidate.port_or_known_default()
}
