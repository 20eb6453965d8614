use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::params::ProtocolParams;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Protocol limits the gate validates against
    #[serde(default)]
    pub protocol: ProtocolParams,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Enable JSON formatted logs
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

impl AppConfig {
    /// Load configuration from files and environment
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();

        let builder = Config::builder()
            .set_default("logging.level", "info")?
            .set_default("logging.json", false)?
            // Load default config file
            .add_source(File::from(config_dir.join("default.toml")).required(false))
            // Load environment-specific config (e.g., config/production.toml)
            .add_source(
                File::from(config_dir.join(
                    std::env::var("DEXGATE_ENV").unwrap_or_else(|_| "development".to_string()),
                ))
                .required(false),
            )
            // Override with environment variables (DEXGATE_PROTOCOL__BECH32_PREFIX, etc.)
            .add_source(
                Environment::with_prefix("DEXGATE")
                    .separator("__")
                    .try_parsing(true),
            );

        builder.build()?.try_deserialize()
    }

    /// Check the loaded limits make sense before a gate is built on them
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();
        let protocol = &self.protocol;

        if protocol.bech32_prefix.is_empty() {
            errors.push("protocol.bech32_prefix must not be empty".to_string());
        }
        if protocol.max_order_price <= bigdecimal::BigDecimal::from(0) {
            errors.push("protocol.max_order_price must be positive".to_string());
        }
        if protocol.max_order_quantity <= bigdecimal::BigDecimal::from(0) {
            errors.push("protocol.max_order_quantity must be positive".to_string());
        }
        if protocol.max_decimal_places < 0 {
            errors.push("protocol.max_decimal_places cannot be negative".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
