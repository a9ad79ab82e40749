use serde::Deserialize;
use std::path::PathBuf;

use crate::error::{AppError, Result};

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub github: GitHubConfig,
    pub checker: CheckerConfig,
    #[serde(default)]
    pub bot: BotConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct GitHubConfig {
    pub app_id: u64,
    pub private_key_path: PathBuf,
    pub installation_id: u64,
}

#[derive(Deserialize, Clone)]
pub struct CheckerConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    #[serde(default = "default_checker_timeout_secs")]
    pub timeout_secs: u64,
}

// Manual Debug impl to avoid leaking the API key
impl std::fmt::Debug for CheckerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CheckerConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct BotConfig {
    #[serde(default = "default_trigger_label")]
    pub trigger_label: String,
    #[serde(default = "default_escalation_login")]
    pub escalation_login: String,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            trigger_label: default_trigger_label(),
            escalation_login: default_escalation_login(),
        }
    }
}

fn default_checker_timeout_secs() -> u64 {
    // Checking large profiles can take minutes
    300
}

fn default_trigger_label() -> String {
    "check".to_string()
}

fn default_escalation_login() -> String {
    "maintainers".to_string()
}

impl AppConfig {
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        let mut builder = config::Config::builder();

        // Load from file if specified
        if let Some(path) = config_path {
            builder = builder.add_source(config::File::with_name(path));
        } else {
            // Try default paths
            builder = builder.add_source(
                config::File::with_name("roost")
                    .required(false),
            );
        }

        // Environment variable overrides with ROOST_ prefix
        builder = builder.add_source(
            config::Environment::with_prefix("ROOST")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder
            .build()
            .map_err(|e| AppError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::Config(e.to_string()))
    }
}
