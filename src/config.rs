use crate::catalog::PageSize;
use std::time::Duration;
use tracing::{info, warn};

const DEFAULT_BASE_URL: &str = "https://openlibrary.org";
const DEFAULT_SUBJECT: &str = "science_fiction";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Application configuration
/// In debug builds: loads a .env file first, then reads the environment
/// In release builds: reads the environment only
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Root of the catalog API, without a trailing slash
    pub base_url: String,
    /// Subject the dashboard lists works for
    pub subject: String,
    /// Page size the dashboard opens with
    pub default_page_size: PageSize,
    /// Timeout applied to every catalog request
    pub request_timeout: Duration,
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            subject: DEFAULT_SUBJECT.to_string(),
            default_page_size: PageSize::default(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: format!("catalog-admin/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl Config {
    /// Load configuration based on build mode
    pub fn load() -> Self {
        #[cfg(debug_assertions)]
        {
            if dotenvy::dotenv().is_ok() {
                info!("Config: Dev mode activated - loaded .env file");
            } else {
                info!("Config: No .env file found, using environment only");
            }
        }

        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build a config from a variable lookup, falling back to defaults for
    /// anything missing or malformed
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let base_url = lookup("CATALOG_BASE_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or(defaults.base_url);

        let subject = lookup("CATALOG_SUBJECT")
            .filter(|subject| !subject.trim().is_empty())
            .unwrap_or(defaults.subject);

        let default_page_size = match lookup("CATALOG_PAGE_SIZE") {
            Some(raw) => raw.parse::<PageSize>().unwrap_or_else(|e| {
                warn!("Config: {}, using {}", e, defaults.default_page_size);
                defaults.default_page_size
            }),
            None => defaults.default_page_size,
        };

        let request_timeout = match lookup("CATALOG_TIMEOUT_SECS") {
            Some(raw) => match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    warn!("Config: invalid CATALOG_TIMEOUT_SECS '{}'", raw);
                    defaults.request_timeout
                }
            },
            None => defaults.request_timeout,
        };

        info!("Config: catalog {} (subject {})", base_url, subject);

        Self {
            base_url,
            subject,
            default_page_size,
            request_timeout,
            user_agent: defaults.user_agent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults_when_environment_is_empty() {
        let config = Config::from_lookup(|_| None);
        assert_eq!(config, Config::default());
        assert_eq!(config.base_url, "https://openlibrary.org");
        assert_eq!(config.subject, "science_fiction");
        assert_eq!(config.default_page_size, PageSize::Ten);
    }

    #[test]
    fn test_overrides_are_applied() {
        let config = Config::from_lookup(lookup_from(&[
            ("CATALOG_BASE_URL", "http://localhost:8080/"),
            ("CATALOG_SUBJECT", "fantasy"),
            ("CATALOG_PAGE_SIZE", "50"),
            ("CATALOG_TIMEOUT_SECS", "5"),
        ]));
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.subject, "fantasy");
        assert_eq!(config.default_page_size, PageSize::Fifty);
        assert_eq!(config.request_timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_malformed_values_fall_back() {
        let zero_timeout = Config::from_lookup(lookup_from(&[("CATALOG_TIMEOUT_SECS", "0")]));
        assert_eq!(zero_timeout.request_timeout, Duration::from_secs(30));

        let config = Config::from_lookup(lookup_from(&[
            ("CATALOG_PAGE_SIZE", "25"),
            ("CATALOG_TIMEOUT_SECS", "soon"),
            ("CATALOG_SUBJECT", "  "),
        ]));
        assert_eq!(config.default_page_size, PageSize::Ten);
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert_eq!(config.subject, "science_fiction");
    }
}
