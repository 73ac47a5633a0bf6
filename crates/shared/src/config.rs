//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Server configuration.
    pub server: ServerConfig,
    /// Generative advice configuration.
    pub advisor: AdvisorConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Configuration for the generative advice backend.
#[derive(Debug, Clone, Deserialize)]
pub struct AdvisorConfig {
    /// API key. Advice requests answer with a setup hint when absent.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Model name.
    #[serde(default = "default_model")]
    pub model: String,
    /// Base URL of the generative language API.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Sampling temperature.
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_model(),
            base_url: default_base_url(),
            temperature: default_temperature(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_temperature() -> f32 {
    0.7
}

fn default_timeout_secs() -> u64 {
    30
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// `GOOGLE_API_KEY` seeds `advisor.api_key` at the lowest priority, so an
    /// explicit `FINBOT__ADVISOR__API_KEY` or config file value wins.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let mut builder = config::Config::builder();
        if let Ok(key) = std::env::var("GOOGLE_API_KEY") {
            builder = builder.set_default("advisor.api_key", key)?;
        }

        let config = builder
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(
                config::Environment::with_prefix("FINBOT")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VARS: [&str; 4] = [
        "RUN_MODE",
        "GOOGLE_API_KEY",
        "FINBOT__SERVER__PORT",
        "FINBOT__ADVISOR__API_KEY",
    ];

    /// Every variable `load` reads, unset unless listed in `set`.
    fn env(set: &[(&'static str, &'static str)]) -> Vec<(&'static str, Option<&'static str>)> {
        VARS.iter()
            .map(|var| {
                let value = set.iter().find(|(k, _)| k == var).map(|(_, v)| *v);
                (*var, value)
            })
            .collect()
    }

    #[test]
    fn test_defaults_without_sources() {
        temp_env::with_vars(env(&[]), || {
            let config = AppConfig::load().expect("config should load");
            assert_eq!(config.server.host, "0.0.0.0");
            assert_eq!(config.server.port, 8080);
            assert_eq!(config.advisor.model, "gemini-2.5-flash");
            assert_eq!(config.advisor.timeout_secs, 30);
            assert!(config.advisor.api_key.is_none());
        });
    }

    #[test]
    fn test_environment_overrides() {
        let vars = env(&[
            ("FINBOT__SERVER__PORT", "9090"),
            ("GOOGLE_API_KEY", "google-key"),
        ]);
        temp_env::with_vars(vars, || {
            let config = AppConfig::load().expect("config should load");
            assert_eq!(config.server.port, 9090);
            assert_eq!(config.advisor.api_key.as_deref(), Some("google-key"));
        });
    }

    #[test]
    fn test_prefixed_api_key_beats_google_key() {
        let vars = env(&[
            ("GOOGLE_API_KEY", "google-key"),
            ("FINBOT__ADVISOR__API_KEY", "finbot-key"),
        ]);
        temp_env::with_vars(vars, || {
            let config = AppConfig::load().expect("config should load");
            assert_eq!(config.advisor.api_key.as_deref(), Some("finbot-key"));
        });
    }
}
