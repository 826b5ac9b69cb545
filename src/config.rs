use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Main search configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct SearchConfig {
    /// Recipe search service settings
    #[serde(default)]
    pub service: ServiceConfig,
    /// Search timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

/// Configuration for the HTTP recipe search service
#[derive(Debug, Deserialize, Clone)]
pub struct ServiceConfig {
    /// Base URL of the search API
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// API key for authentication (can also be set via SPOONACULAR_API_KEY)
    pub api_key: Option<String>,
    /// Maximum number of recipes to return per search
    #[serde(default = "default_max_results")]
    pub max_results: u32,
    /// 1 maximizes used ingredients, 2 minimizes missing ingredients
    #[serde(default = "default_ranking")]
    pub ranking: u8,
    /// Ignore typical pantry items such as water, salt and flour
    #[serde(default = "default_ignore_pantry")]
    pub ignore_pantry: bool,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            max_results: default_max_results(),
            ranking: default_ranking(),
            ignore_pantry: default_ignore_pantry(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            service: ServiceConfig::default(),
            timeout: default_timeout(),
        }
    }
}

// Default value functions
fn default_base_url() -> String {
    "https://api.spoonacular.com".to_string()
}

fn default_max_results() -> u32 {
    12
}

fn default_ranking() -> u8 {
    1
}

fn default_ignore_pantry() -> bool {
    true
}

fn default_timeout() -> u64 {
    15
}

impl SearchConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with FLAVOUR_HUNT__ prefix
    /// 2. flavour-hunt.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: FLAVOUR_HUNT__SERVICE__API_KEY
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }
}

/// Load configuration from file and environment variables
///
/// See [`SearchConfig::load`] for the source priority.
pub fn load_config() -> Result<SearchConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("flavour-hunt").required(false))
        // Use double underscore for nested: FLAVOUR_HUNT__SERVICE__BASE_URL
        .add_source(
            Environment::with_prefix("FLAVOUR_HUNT")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_default_values() {
        let config = SearchConfig::default();
        assert_eq!(config.timeout, 15);
        assert_eq!(config.service.base_url, "https://api.spoonacular.com");
        assert_eq!(config.service.max_results, 12);
        assert_eq!(config.service.ranking, 1);
        assert!(config.service.ignore_pantry);
        assert!(config.service.api_key.is_none());
    }

    #[test]
    fn test_load_config_from_environment() {
        env::set_var("FLAVOUR_HUNT__SERVICE__MAX_RESULTS", "5");
        env::set_var("FLAVOUR_HUNT__TIMEOUT", "3");

        let config = load_config().unwrap();

        env::remove_var("FLAVOUR_HUNT__SERVICE__MAX_RESULTS");
        env::remove_var("FLAVOUR_HUNT__TIMEOUT");

        assert_eq!(config.service.max_results, 5);
        assert_eq!(config.timeout, 3);
        assert_eq!(config.service.base_url, default_base_url());
    }

    #[test]
    fn test_partial_service_section_keeps_defaults() {
        let config: SearchConfig = Config::builder()
            .add_source(config::File::from_str(
                "[service]\nbase_url = \"http://localhost:9000\"\n",
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.service.base_url, "http://localhost:9000");
        assert_eq!(config.service.max_results, 12);
        assert_eq!(config.timeout, 15);
    }
}
