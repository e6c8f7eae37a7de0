use anyhow::Context;
use galaxy_core::AppConfig;
use galaxy_egress::client::HttpClientConfig;
use galaxy_ui::UiConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    /// Public URL of the Galaxy instance
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default)]
    pub ui: UiConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub http: HttpSettings,

    /// Galaxy application settings read by the masthead
    #[serde(default)]
    pub galaxy: AppConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpSettings {
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            ui: UiConfig::default(),
            logging: LoggingConfig::default(),
            http: HttpSettings::default(),
            galaxy: AppConfig::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
        }
    }
}

impl ServerSettings {
    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        let settings = if path.extension().and_then(|s| s.to_str()) == Some("toml") {
            toml::from_str(&contents)?
        } else {
            // Default to YAML
            serde_yaml::from_str(&contents)?
        };

        Ok(settings)
    }

    /// Settings file (or defaults) with an optional application config
    /// replacing the `galaxy` section. Environment is not consulted.
    pub fn load(config: Option<&str>, app_config: Option<&str>) -> anyhow::Result<Self> {
        let mut settings = match config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        if let Some(path) = app_config {
            settings.galaxy = AppConfig::from_file(path)
                .with_context(|| format!("Failed to load application config {}", path))?;
        }
        Ok(settings)
    }

    /// Log level to start with, before the rest of the environment is merged
    pub fn initial_log_level(&self) -> String {
        std::env::var("GALAXY_LOG_LEVEL").unwrap_or_else(|_| self.logging.level.clone())
    }

    /// Apply `KEY=VALUE` overrides to the application config.
    ///
    /// Returns the keys that matched no known setting.
    pub fn apply_overrides(&mut self, pairs: &[String]) -> anyhow::Result<Vec<String>> {
        let mut unknown = Vec::new();
        for pair in pairs {
            let (key, value) = parse_override(pair)?;
            if !self.galaxy.apply_override(key, value)? {
                unknown.push(key.to_string());
            }
        }
        Ok(unknown)
    }

    /// Merge environment variables into settings (env vars take precedence)
    pub fn merge_env(&mut self) {
        if let Ok(val) = std::env::var("GALAXY_URL") {
            self.base_url = val;
        }

        if let Ok(val) = std::env::var("GALAXY_HOST") {
            self.ui.host = val;
        }

        if let Ok(val) = std::env::var("GALAXY_PORT") {
            match val.parse::<u16>() {
                Ok(port) => self.ui.port = port,
                Err(_) => tracing::warn!("Invalid GALAXY_PORT '{}', keeping {}", val, self.ui.port),
            }
        }

        if let Ok(val) = std::env::var("GALAXY_LOG_LEVEL") {
            self.logging.level = val;
        }

        self.galaxy.merge_env();
    }

    /// Path component of `base_url`, used to mount root-relative URLs
    pub fn root_path(&self) -> anyhow::Result<String> {
        let url = reqwest::Url::parse(&self.base_url)
            .with_context(|| format!("Invalid base_url '{}'", self.base_url))?;
        Ok(url.path().to_string())
    }

    pub fn http_client_config(&self) -> HttpClientConfig {
        HttpClientConfig {
            timeout_secs: self.http.timeout_secs,
            connect_timeout_secs: self.http.connect_timeout_secs,
            ..Default::default()
        }
    }
}

/// Split `KEY=VALUE`; the value may itself contain `=`
pub fn parse_override(pair: &str) -> anyhow::Result<(&str, &str)> {
    let (key, value) = pair
        .split_once('=')
        .with_context(|| format!("Override '{}' must be KEY=VALUE", pair))?;
    let key = key.trim();
    anyhow::ensure!(!key.is_empty(), "Override '{}' has an empty key", pair);
    Ok((key, value))
}

fn default_base_url() -> String {
    "http://localhost:8080/".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_timeout_secs() -> u64 {
    60
}

fn default_connect_timeout_secs() -> u64 {
    10
}
