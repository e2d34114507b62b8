use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Top-level application configuration.
///
/// Credentials and backend locations are injected into [`crate::RecipeScout`]
/// through this struct; nothing in the crate reads the environment ambiently.
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// Structured recipe-search API (random, complexSearch, findByNutrients)
    #[serde(default = "default_recipe_api")]
    pub recipe_api: ApiConfig,
    /// Business-search API used for the companion venue lookup
    #[serde(default = "default_venue_api")]
    pub venue_api: ApiConfig,
    /// Recipe site scraped for meal-type searches
    #[serde(default)]
    pub site: SiteConfig,
    /// Per-request timeout in seconds, applied to every backend call
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

/// Location and credential for one JSON backend
#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    #[serde(default)]
    pub api_key: String,
}

/// Location of the scraped recipe site
#[derive(Debug, Deserialize, Clone)]
pub struct SiteConfig {
    #[serde(default = "default_site_url")]
    pub base_url: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: default_site_url(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            recipe_api: default_recipe_api(),
            venue_api: default_venue_api(),
            site: SiteConfig::default(),
            timeout_secs: default_timeout(),
        }
    }
}

// Default value functions
fn default_recipe_api() -> ApiConfig {
    ApiConfig {
        base_url: "https://api.spoonacular.com".to_string(),
        api_key: String::new(),
    }
}

fn default_venue_api() -> ApiConfig {
    ApiConfig {
        base_url: "https://api.yelp.com/v3".to_string(),
        api_key: String::new(),
    }
}

fn default_site_url() -> String {
    "https://www.allrecipes.com".to_string()
}

fn default_timeout() -> u64 {
    30
}

impl AppConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE_SCOUT__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPE_SCOUT__RECIPE_API__API_KEY
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Optional config file (can be missing)
            .add_source(File::with_name("config").required(false))
            // Use double underscore for nested: RECIPE_SCOUT__RECIPE_API__API_KEY
            .add_source(
                Environment::with_prefix("RECIPE_SCOUT")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}
