//! Application configuration loaded from environment variables.

use crate::catalog::CatalogVariant;
use anyhow::{Context, Result};
use secrecy::SecretString;
use serde::Deserialize;
use std::time::Duration;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Discord application credentials
    pub discord: DiscordConfig,

    /// Register commands in the test guild instead of globally
    #[serde(default)]
    pub development: bool,

    /// Command catalog selection
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Joke provider configuration
    #[serde(default)]
    pub joke: JokeConfig,

    /// Outbound HTTP configuration
    #[serde(default)]
    pub http: HttpConfig,

    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Logging configuration
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DiscordConfig {
    /// Application (client) id
    pub application_id: String,

    /// Bot token for REST calls
    pub token: SecretString,

    /// Hex-encoded Ed25519 public key used to verify interactions
    pub public_key: String,

    /// Guild used for development registration
    #[serde(default)]
    pub test_guild_id: Option<String>,

    /// REST API base URL
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogConfig {
    #[serde(default)]
    pub variant: CatalogVariant,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JokeConfig {
    /// Random joke endpoint
    #[serde(default = "default_joke_url")]
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HttpConfig {
    /// Timeout for outbound requests
    #[serde(default = "default_timeout", with = "humantime_serde")]
    pub timeout: Duration,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Server listen address
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON lines instead of human readable output
    #[serde(default)]
    pub json: bool,
}

impl Default for JokeConfig {
    fn default() -> Self {
        Self {
            url: default_joke_url(),
        }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: default_timeout(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            port: default_port(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

// Default value functions
fn default_api_base_url() -> String {
    discord_client::DEFAULT_API_BASE_URL.into()
}

fn default_joke_url() -> String {
    joke_client::DEFAULT_JOKE_URL.into()
}

fn default_timeout() -> Duration {
    Duration::from_secs(10)
}

fn default_listen_addr() -> String {
    "0.0.0.0".into()
}

fn default_port() -> u16 {
    8787
}

fn default_log_level() -> String {
    "info".into()
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        Self::from_environment(config::Environment::default())
    }

    /// Build configuration from an environment source.
    pub fn from_environment(environment: config::Environment) -> Result<Self> {
        let config = config::Config::builder()
            .add_source(
                environment
                    .separator("__")
                    // Snowflake ids must stay strings.
                    .try_parsing(false),
            )
            .build()
            .context("Failed to build configuration")?;

        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }

    /// Guild to register commands in, or `None` for global registration.
    pub fn registration_guild(&self) -> Result<Option<&str>> {
        if !self.development {
            return Ok(None);
        }

        self.discord
            .test_guild_id
            .as_deref()
            .filter(|id| !id.is_empty())
            .map(Some)
            .context("DEVELOPMENT is set but DISCORD__TEST_GUILD_ID is missing")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use std::collections::HashMap;

    fn environment(vars: &[(&str, &str)]) -> config::Environment {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        config::Environment::default().source(Some(map))
    }

    const REQUIRED: [(&str, &str); 3] = [
        ("DISCORD__APPLICATION_ID", "880218394199220334"),
        ("DISCORD__TOKEN", "bot-token"),
        ("DISCORD__PUBLIC_KEY", "abcd"),
    ];

    #[test]
    fn test_defaults() {
        let config = Config::from_environment(environment(&REQUIRED)).unwrap();

        assert_eq!(config.discord.application_id, "880218394199220334");
        assert_eq!(config.discord.token.expose_secret(), "bot-token");
        assert_eq!(config.discord.api_base_url, "https://discord.com/api/v10");
        assert!(!config.development);
        assert_eq!(config.catalog.variant, CatalogVariant::Activity);
        assert_eq!(config.http.timeout, Duration::from_secs(10));
        assert_eq!(config.server.port, 8787);
        assert_eq!(config.log.level, "info");
        assert!(config.registration_guild().unwrap().is_none());
    }

    #[test]
    fn test_overrides() {
        let mut vars = REQUIRED.to_vec();
        vars.extend([
            ("DEVELOPMENT", "true"),
            ("DISCORD__TEST_GUILD_ID", "7"),
            ("CATALOG__VARIANT", "youtube"),
            ("HTTP__TIMEOUT", "3s"),
            ("SERVER__PORT", "9000"),
            ("LOG__JSON", "true"),
        ]);
        let config = Config::from_environment(environment(&vars)).unwrap();

        assert!(config.development);
        assert_eq!(config.registration_guild().unwrap(), Some("7"));
        assert_eq!(config.catalog.variant, CatalogVariant::Youtube);
        assert_eq!(config.http.timeout, Duration::from_secs(3));
        assert_eq!(config.server.port, 9000);
        assert!(config.log.json);
    }

    #[test]
    fn test_development_requires_test_guild() {
        let mut vars = REQUIRED.to_vec();
        vars.push(("DEVELOPMENT", "true"));
        let config = Config::from_environment(environment(&vars)).unwrap();

        assert!(config.registration_guild().is_err());
    }

    #[test]
    fn test_missing_credentials_fail() {
        assert!(Config::from_environment(environment(&[])).is_err());
    }

    #[test]
    fn test_debug_output_hides_token() {
        let config = Config::from_environment(environment(&REQUIRED)).unwrap();
        assert!(!format!("{:?}", config).contains("bot-token"));
    }
}
