//! Application configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

/// Errors raised while reading configuration
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("SITE_URL must be an absolute http(s) URL, got {0:?}")]
    InvalidSiteUrl(String),
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Public base URL of the site, advertised as `og:url`
    /// Example: https://www.datawise.io
    pub site_url: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(std::env::var("SITE_URL").ok())
    }

    fn from_values(site_url: Option<String>) -> Result<Self, ConfigError> {
        let site_url = site_url
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty());

        if let Some(url) = &site_url {
            if !(url.starts_with("https://") || url.starts_with("http://")) {
                return Err(ConfigError::InvalidSiteUrl(url.clone()));
            }
        }

        Ok(Self { site_url })
    }

    /// Check if a public site URL is configured
    pub fn has_site_url(&self) -> bool {
        self.site_url.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Parsing (no env var dependencies - thread safe)
    // ========================================================================

    #[test]
    fn test_config_without_site_url() {
        let config = Config::from_values(None).unwrap();
        assert!(!config.has_site_url());
    }

    #[test]
    fn test_config_blank_site_url_is_unset() {
        let config = Config::from_values(Some("   ".to_string())).unwrap();
        assert!(config.site_url.is_none());
    }

    #[test]
    fn test_config_trims_trailing_slash() {
        let config = Config::from_values(Some("https://datawise.io/".to_string())).unwrap();
        assert_eq!(config.site_url.as_deref(), Some("https://datawise.io"));
    }

    #[test]
    fn test_config_rejects_relative_url() {
        let err = Config::from_values(Some("datawise.io".to_string())).unwrap_err();
        assert_eq!(err, ConfigError::InvalidSiteUrl("datawise.io".to_string()));
        assert!(err.to_string().contains("SITE_URL"));
    }

    #[test]
    fn test_config_debug() {
        let config = Config {
            site_url: Some("http://localhost:3000".to_string()),
        };
        let debug_str = format!("{:?}", config);
        assert!(debug_str.contains("Config"));
        assert!(debug_str.contains("site_url"));
    }
}
