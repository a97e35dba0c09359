use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

use fetcharr_targets::{
    LazyLibrarianSettings, ListenarrSettings, OverseerrSettings, RadarrSettings, SonarrSettings,
};

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub jellyfin: JellyfinConfig,
    pub tmdb: TmdbConfig,
    pub openlibrary: OpenLibraryConfig,
    pub googlebooks: GoogleBooksConfig,
    pub overseerr: OverseerrSettings,
    pub radarr: RadarrSettings,
    pub sonarr: SonarrSettings,
    pub lazylibrarian: LazyLibrarianSettings,
    pub listenarr: ListenarrSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub http_port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            http_port: 8080,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String, // "json" or "pretty"
    pub file_path: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
            file_path: None,
        }
    }
}

/// Jellyfin identity backend
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct JellyfinConfig {
    /// Base URL of the Jellyfin server, e.g. `http://jellyfin:8096`
    pub url: Option<String>,
}

/// TMDB movie/TV catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TmdbConfig {
    pub api_key: Option<String>,
    pub base_url: String,
}

impl Default for TmdbConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: fetcharr_providers::TmdbClient::DEFAULT_BASE_URL.to_string(),
        }
    }
}

/// Open Library book catalog (no credentials required)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OpenLibraryConfig {
    pub base_url: String,
}

impl Default for OpenLibraryConfig {
    fn default() -> Self {
        Self {
            base_url: fetcharr_providers::OpenLibraryClient::DEFAULT_BASE_URL.to_string(),
        }
    }
}

/// Google Books audiobook catalog (no credentials required)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GoogleBooksConfig {
    pub base_url: String,
}

impl Default for GoogleBooksConfig {
    fn default() -> Self {
        Self {
            base_url: fetcharr_providers::GoogleBooksClient::DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from multiple sources with priority:
    /// 1. Environment variables (highest priority)
    /// 2. Config file (if provided)
    /// 3. Defaults (lowest priority)
    ///
    /// Environment variables use a double underscore between the section
    /// and the field, so snake_case field names survive the split:
    /// `FETCHARR_TMDB__API_KEY`, `FETCHARR_RADARR__ROOT_FOLDER`,
    /// `FETCHARR_SERVER__HTTP_PORT`.
    pub fn load(config_file: Option<&str>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        // Load config file if provided
        if let Some(path) = config_file {
            if Path::new(path).exists() {
                builder = builder.add_source(File::with_name(path));
            }
        }

        // Override with environment variables (FETCHARR_JELLYFIN__URL, etc.)
        builder = builder.add_source(
            Environment::with_prefix("FETCHARR")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// Load from environment variables only (for Docker/K8s)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::load(None)
    }

    /// Load from file path
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        Self::load(Some(path))
    }

    /// Check for missing configuration the server cannot run without.
    /// Target credentials are allowed to be absent; those requests fail
    /// per-dispatch with a service-unavailable outcome instead.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut missing = Vec::new();

        if self.jellyfin.url.as_deref().unwrap_or_default().is_empty() {
            missing.push("jellyfin.url (FETCHARR_JELLYFIN__URL)".to_string());
        }
        if self.tmdb.api_key.as_deref().unwrap_or_default().is_empty() {
            missing.push("tmdb.api_key (FETCHARR_TMDB__API_KEY)".to_string());
        }

        if missing.is_empty() {
            Ok(())
        } else {
            Err(missing)
        }
    }

    /// Get HTTP address
    #[must_use]
    pub fn http_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.http_port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert!(config.server.http_port > 0);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.tmdb.base_url, "https://api.themoviedb.org");
        assert_eq!(config.openlibrary.base_url, "https://openlibrary.org");
        assert!(!config.overseerr.is_configured());
        assert!(!config.radarr.is_configured());
    }

    #[test]
    fn test_http_address() {
        let config = Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                http_port: 8080,
            },
            ..Config::default()
        };

        assert_eq!(config.http_address(), "127.0.0.1:8080");
    }

    #[test]
    fn test_validate_reports_missing_required() {
        let err = Config::default().validate().unwrap_err();
        assert_eq!(err.len(), 2);
        assert!(err[0].contains("jellyfin.url"));
        assert!(err[1].contains("tmdb.api_key"));
    }

    #[test]
    fn test_validate_accepts_minimal_config() {
        let mut config = Config::default();
        config.jellyfin.url = Some("http://jellyfin:8096".to_string());
        config.tmdb.api_key = Some("key".to_string());

        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_overrides_reach_snake_case_fields() {
        // The documented variable shape must land in nested snake_case
        // fields; a single-underscore separator would split api_key into
        // api.key and silently drop it.
        std::env::set_var("FETCHARR_TMDB__API_KEY", "from-env");
        std::env::set_var("FETCHARR_JELLYFIN__URL", "http://jellyfin:8096");
        std::env::set_var("FETCHARR_RADARR__ROOT_FOLDER", "/data/movies");
        std::env::set_var("FETCHARR_SERVER__HTTP_PORT", "9090");

        let config = Config::from_env().unwrap();

        std::env::remove_var("FETCHARR_TMDB__API_KEY");
        std::env::remove_var("FETCHARR_JELLYFIN__URL");
        std::env::remove_var("FETCHARR_RADARR__ROOT_FOLDER");
        std::env::remove_var("FETCHARR_SERVER__HTTP_PORT");

        assert_eq!(config.tmdb.api_key.as_deref(), Some("from-env"));
        assert_eq!(config.jellyfin.url.as_deref(), Some("http://jellyfin:8096"));
        assert_eq!(config.radarr.root_folder.as_deref(), Some("/data/movies"));
        assert_eq!(config.server.http_port, 9090);
        assert!(config.validate().is_ok());
    }
}
