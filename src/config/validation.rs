use crate::config::types::{Config, CrawlerConfig, SiteEntry, UserAgentConfig};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_crawler_config(&config.crawler)?;
    validate_user_agent_config(&config.user_agent)?;
    validate_sites(&config.sites)?;
    Ok(())
}

/// Validates crawler configuration
fn validate_crawler_config(config: &CrawlerConfig) -> Result<(), ConfigError> {
    if config.recipe_limit < 1 {
        return Err(ConfigError::Validation(format!(
            "recipe_limit must be >= 1, got {}",
            config.recipe_limit
        )));
    }

    if config.fetch_timeout < 1 {
        return Err(ConfigError::Validation(format!(
            "fetch_timeout must be >= 1 second, got {}",
            config.fetch_timeout
        )));
    }

    Ok(())
}

/// Validates user agent configuration
fn validate_user_agent_config(config: &UserAgentConfig) -> Result<(), ConfigError> {
    // Validate crawler name: non-empty, alphanumeric + hyphens only
    if config.crawler_name.is_empty() {
        return Err(ConfigError::Validation(
            "crawler_name cannot be empty".to_string(),
        ));
    }

    if !config
        .crawler_name
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-')
    {
        return Err(ConfigError::Validation(format!(
            "crawler_name must contain only alphanumeric characters and hyphens, got '{}'",
            config.crawler_name
        )));
    }

    if config.crawler_version.is_empty() {
        return Err(ConfigError::Validation(
            "crawler_version cannot be empty".to_string(),
        ));
    }

    // Validate contact URL
    Url::parse(&config.contact_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid contact_url: {}", e)))?;

    Ok(())
}

/// Validates the site list
fn validate_sites(sites: &[SiteEntry]) -> Result<(), ConfigError> {
    for site in sites {
        validate_site_url(&site.url, "site url")?;

        if let Some(start_url) = &site.start_url {
            validate_site_url(start_url, "start-url")?;
        }

        if let Some(recipe_path) = &site.recipe_path {
            validate_site_url(recipe_path, "recipe-path")?;
        }

        if let Some(license) = &site.license {
            if !license.eq_ignore_ascii_case("proprietary") {
                validate_site_url(license, "license")?;
            }
        }
    }

    Ok(())
}

/// Validates that a configured URL is absolute http(s)
fn validate_site_url(raw: &str, field: &str) -> Result<(), ConfigError> {
    let url = Url::parse(raw)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid {} '{}': {}", field, raw, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::Validation(format!(
            "{} '{}' must use an http or https scheme",
            field, raw
        )));
    }

    if url.host_str().is_none() {
        return Err(ConfigError::Validation(format!(
            "{} '{}' is missing a host",
            field, raw
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_site_url() {
        assert!(validate_site_url("https://www.example.com/", "site url").is_ok());
        assert!(validate_site_url("http://example.com/recipes/", "site url").is_ok());

        assert!(validate_site_url("", "site url").is_err());
        assert!(validate_site_url("/relative/path", "site url").is_err());
        assert!(validate_site_url("ftp://example.com/", "site url").is_err());
    }

    fn test_site(license: Option<&str>) -> SiteEntry {
        SiteEntry {
            url: "https://www.example.com/".to_string(),
            recipe_path: None,
            license: license.map(String::from),
            start_url: None,
            title: None,
        }
    }

    #[test]
    fn test_validate_sites_license_proprietary() {
        assert!(validate_sites(&[test_site(Some("proprietary"))]).is_ok());
        assert!(validate_sites(&[test_site(Some("Proprietary"))]).is_ok());
    }

    #[test]
    fn test_validate_sites_license_url() {
        assert!(
            validate_sites(&[test_site(Some("https://creativecommons.org/licenses/by/4.0/"))])
                .is_ok()
        );
        assert!(validate_sites(&[test_site(Some("not a url"))]).is_err());
    }

    #[test]
    fn test_validate_sites_bad_start_url() {
        let mut site = test_site(None);
        site.start_url = Some("recipes/index".to_string());
        assert!(validate_sites(&[site]).is_err());
    }

    #[test]
    fn test_validate_user_agent_name_charset() {
        let mut ua = UserAgentConfig {
            crawler_name: "LadleBot".to_string(),
            crawler_version: "0.3.0".to_string(),
            contact_url: "https://example.com/about".to_string(),
        };
        assert!(validate_user_agent_config(&ua).is_ok());

        ua.crawler_name = "Ladle Bot".to_string();
        assert!(validate_user_agent_config(&ua).is_err());

        ua.crawler_name = String::new();
        assert!(validate_user_agent_config(&ua).is_err());
    }
}
