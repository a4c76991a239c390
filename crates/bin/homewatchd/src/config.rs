//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `homewatch.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Window controller link settings.
    pub device: DeviceSection,
    /// Sensor store settings.
    pub store: StoreSection,
    /// Logging settings.
    pub logging: LoggingSection,
}

/// Window controller endpoint.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DeviceSection {
    /// Controller host.
    pub host: String,
    /// Controller TCP port.
    pub port: u16,
}

/// Sensor store connection settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct StoreSection {
    /// Database host.
    pub host: String,
    /// Database port.
    pub port: u16,
    /// Schema name.
    pub database: String,
    /// Login user.
    pub user: String,
    /// Login password.
    pub password: String,
    /// Home identifier forwarded to latest-value queries.
    pub home_id: String,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `homewatch.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or a
    /// value fails validation.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("homewatch.toml")?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("HOMEWATCH_DEVICE_HOST") {
            self.device.host = val;
        }
        if let Ok(val) = std::env::var("HOMEWATCH_DEVICE_PORT") {
            if let Ok(port) = val.parse() {
                self.device.port = port;
            }
        }
        if let Ok(val) = std::env::var("HOMEWATCH_STORE_HOST") {
            self.store.host = val;
        }
        if let Ok(val) = std::env::var("HOMEWATCH_STORE_PORT") {
            if let Ok(port) = val.parse() {
                self.store.port = port;
            }
        }
        if let Ok(val) = std::env::var("HOMEWATCH_STORE_DATABASE") {
            self.store.database = val;
        }
        if let Ok(val) = std::env::var("HOMEWATCH_STORE_USER") {
            self.store.user = val;
        }
        if let Ok(val) = std::env::var("HOMEWATCH_STORE_PASSWORD") {
            self.store.password = val;
        }
        if let Ok(val) = std::env::var("HOMEWATCH_HOME_ID") {
            self.store.home_id = val;
        }
        if let Ok(val) = std::env::var("HOMEWATCH_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.device.port == 0 {
            return Err(ConfigError::Validation(
                "device port must be non-zero".to_string(),
            ));
        }
        if self.store.port == 0 {
            return Err(ConfigError::Validation(
                "store port must be non-zero".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for DeviceSection {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

impl Default for StoreSection {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3306,
            database: "homewatch".to_string(),
            user: "homewatch".to_string(),
            password: String::new(),
            home_id: "home-1".to_string(),
        }
    }
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            filter: "homewatchd=info,homewatch=info".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
