use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    pub provider: ProviderSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 3000 }

/// Screening provider connection
///
/// `api_key` has no default: a deployment without one is misconfigured.
#[derive(Clone, Deserialize)]
pub struct ProviderSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    pub api_key: String,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl std::fmt::Debug for ProviderSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderSettings")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("timeout_ms", &self.timeout_ms)
            .finish()
    }
}

fn default_base_url() -> String { "https://api.ofac-api.com/v4".to_string() }
fn default_timeout_ms() -> u64 { 5000 }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Environment variables (prefixed with SSA__)
    /// 4. `API_KEY` and `PORT`
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Add default config file
            .add_source(File::with_name("config/default").required(false))
            // Add local config file (for development overrides)
            .add_source(File::with_name("config/local").required(false))
            // e.g., SSA__PROVIDER__TIMEOUT_MS -> provider.timeout_ms
            .add_source(
                Environment::with_prefix("SSA")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings = apply_legacy_env(settings)?;

        settings.try_deserialize()
    }
}

/// Apply the plain `API_KEY` and `PORT` variables used by existing deployments
fn apply_legacy_env(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let mut builder = Config::builder().add_source(settings);

    if let Ok(api_key) = env::var("API_KEY") {
        builder = builder.set_override("provider.api_key", api_key)?;
    }
    if let Ok(port) = env::var("PORT") {
        let port: u16 = port
            .parse()
            .map_err(|_| ConfigError::Message(format!("PORT is not a valid port: {}", port)))?;
        builder = builder.set_override("server.port", i64::from(port))?;
    }

    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_minimal_config() {
        let settings: Settings = Config::builder()
            .set_override("provider.api_key", "test_key")
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(settings.server.host, "0.0.0.0");
        assert_eq!(settings.server.port, 3000);
        assert_eq!(settings.provider.base_url, "https://api.ofac-api.com/v4");
        assert_eq!(settings.provider.timeout_ms, 5000);
    }

    #[test]
    fn test_missing_api_key_is_an_error() {
        let result = Config::builder()
            .set_override("provider.timeout_ms", 1000i64)
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize::<Settings>();

        assert!(result.is_err());
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let provider = ProviderSettings {
            base_url: default_base_url(),
            api_key: "super-secret".to_string(),
            timeout_ms: 5000,
        };
        assert!(!format!("{:?}", provider).contains("super-secret"));
    }

    #[test]
    fn test_shipped_default_config_parses() {
        #[derive(Deserialize)]
        struct Shipped {
            server: ServerSettings,
            provider: toml::Table,
        }

        let shipped: Shipped = toml::from_str(include_str!("../config/default.toml")).unwrap();
        assert_eq!(shipped.server.port, 3000);
        assert!(!shipped.provider.contains_key("api_key"));
    }
}
