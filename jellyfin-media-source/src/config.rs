use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Media source configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub source: SourceConfig,
    pub logging: LoggingConfig,
}

/// Jellyfin server and the session to use on it
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub url: String,
    pub token: String,
    pub user_id: String,
    pub device_id: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost:8096".to_string(),
            token: String::new(),
            user_id: String::new(),
            device_id: "jellyfin-media-source".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Title of the root node
    pub name: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            name: "Jellyfin".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
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

impl Config {
    /// Load configuration from an optional file, then environment variables
    pub fn load(config_file: Option<&str>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        // An explicitly named file must exist
        if let Some(path) = config_file {
            if !Path::new(path).exists() {
                return Err(ConfigError::Message(format!(
                    "configuration file {path} not found"
                )));
            }
            builder = builder.add_source(File::with_name(path));
        }

        // Override with environment variables (JELLYFIN_SERVER__USER_ID, etc.)
        builder = builder.add_source(
            Environment::with_prefix("JELLYFIN")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// Load from environment variables only
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::load(None)
    }

    /// Load from file path
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        Self::load(Some(path))
    }

    /// Check that a session can be built from this configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.url.is_empty() {
            return Err(ConfigError::Message("server.url must not be empty".to_string()));
        }
        if self.server.token.is_empty() {
            return Err(ConfigError::Message("server.token must not be empty".to_string()));
        }
        if self.server.user_id.is_empty() {
            return Err(ConfigError::Message("server.user_id must not be empty".to_string()));
        }
        Ok(())
    }
}
