//! Host configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.
//! Server address, site root and reload port come from
//! `[package.metadata.leptos]` (overridable via `LEPTOS_*` variables) and are
//! not duplicated here.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("SITE_URL must start with http:// or https://, got '{0}'")]
    InvalidSiteUrl(String),
}

/// Host configuration loaded from environment variables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Public origin of the deployed site, used for the canonical link and
    /// Open Graph URL.
    /// Example: https://mckenzie.dev
    pub site_url: Option<String>,

    /// `tracing` filter directive
    /// Example: info,tower_http=debug
    pub log_filter: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(
            std::env::var("SITE_URL").ok(),
            std::env::var("RUST_LOG").ok(),
        )
    }

    /// Build a config from raw values, treating blank strings as unset.
    pub fn from_values(
        site_url: Option<String>,
        log_filter: Option<String>,
    ) -> Result<Self, ConfigError> {
        let site_url = site_url
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty());

        if let Some(url) = &site_url {
            if !(url.starts_with("https://") || url.starts_with("http://")) {
                return Err(ConfigError::InvalidSiteUrl(url.clone()));
            }
        }

        let log_filter = log_filter
            .map(|filter| filter.trim().to_string())
            .filter(|filter| !filter.is_empty());

        Ok(Self {
            site_url,
            log_filter,
        })
    }

    /// Check if a public site URL is configured
    pub fn has_site_url(&self) -> bool {
        self.site_url.is_some()
    }

    /// Canonical URL of the landing page (origin with a trailing slash)
    pub fn canonical_url(&self) -> Option<String> {
        self.site_url.as_ref().map(|url| format!("{}/", url))
    }

    /// Filter directive for the log subscriber, `info` when unset
    pub fn log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or("info")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Config Struct Tests (no env var dependencies - thread safe)
    // ========================================================================

    #[test]
    fn test_config_with_all_fields() {
        let config = Config::from_values(
            Some("https://mckenzie.dev".to_string()),
            Some("debug".to_string()),
        )
        .unwrap();

        assert_eq!(config.site_url, Some("https://mckenzie.dev".to_string()));
        assert_eq!(config.log_filter(), "debug");
        assert!(config.has_site_url());
    }

    #[test]
    fn test_config_with_no_fields() {
        let config = Config::from_values(None, None).unwrap();

        assert!(config.site_url.is_none());
        assert!(!config.has_site_url());
        assert!(config.canonical_url().is_none());
        assert_eq!(config.log_filter(), "info");
    }

    #[test]
    fn test_blank_values_are_unset() {
        let config =
            Config::from_values(Some("   ".to_string()), Some("".to_string())).unwrap();

        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_trailing_slash_is_normalized() {
        let config = Config::from_values(Some("https://mckenzie.dev/".to_string()), None).unwrap();

        assert_eq!(config.site_url.as_deref(), Some("https://mckenzie.dev"));
        assert_eq!(
            config.canonical_url().as_deref(),
            Some("https://mckenzie.dev/")
        );
    }

    #[test]
    fn test_site_url_without_scheme_is_rejected() {
        let result = Config::from_values(Some("mckenzie.dev".to_string()), None);

        assert_eq!(
            result,
            Err(ConfigError::InvalidSiteUrl("mckenzie.dev".to_string()))
        );
    }

    #[test]
    fn test_http_site_url_allowed_for_local_preview() {
        let config = Config::from_values(Some("http://localhost:3000".to_string()), None).unwrap();

        assert_eq!(
            config.canonical_url().as_deref(),
            Some("http://localhost:3000/")
        );
    }
}
