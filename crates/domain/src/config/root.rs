use serde::{Deserialize, Serialize};

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::resolver::ResolverConfig;
use super::rewrite::RewriteConfig;
use super::store::StoreConfig;

const LOCAL_CONFIG_PATH: &str = "sidestep.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/sidestep/config.toml";

/// Main configuration structure for Sidestep
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// DNS-over-HTTPS lookup settings
    #[serde(default)]
    pub resolver: ResolverConfig,

    /// Record table persistence and sweep policy
    #[serde(default)]
    pub store: StoreConfig,

    /// Request rewrite engine tuning
    #[serde(default)]
    pub rewrite: RewriteConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. sidestep.toml in current directory
    /// 3. /etc/sidestep/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path.map(str::to_string).or_else(Self::get_config_path) {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(path) = overrides.store_path {
            self.store.path = path;
        }
        if let Some(endpoint) = overrides.resolver_endpoint {
            self.resolver.endpoint = endpoint;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.resolver.endpoint.starts_with("https://") {
            return Err(ConfigError::Validation(format!(
                "Resolver endpoint must be an https URL, got '{}'",
                self.resolver.endpoint
            )));
        }

        if self.resolver.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "Resolver timeout cannot be 0".to_string(),
            ));
        }

        if self.store.path.trim().is_empty() {
            return Err(ConfigError::Validation("Store path is empty".to_string()));
        }

        if self.store.sweep_interval_secs == 0 {
            return Err(ConfigError::Validation(
                "Sweep interval cannot be 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        [LOCAL_CONFIG_PATH, SYSTEM_CONFIG_PATH]
            .into_iter()
            .find(|path| std::path::Path::new(path).exists())
            .map(str::to_string)
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub store_path: Option<String>,
    pub resolver_endpoint: Option<String>,
    pub log_level: Option<String>,
}
