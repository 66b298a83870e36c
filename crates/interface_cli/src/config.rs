//! CLI configuration

use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;

use core_kernel::Currency;

use crate::error::CliError;

/// Config file looked up in the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "insurance";

/// Prefix of environment variable overrides, e.g. `INSURANCE_LOG_LEVEL`
pub const ENV_PREFIX: &str = "INSURANCE";

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// CLI configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CliConfig {
    /// Log level or `EnvFilter` directive
    pub log_level: String,
    /// Log output format
    pub log_format: LogFormat,
    /// ISO code of the currency used for entered amounts
    pub currency: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
            currency: "USD".to_string(),
        }
    }
}

impl CliConfig {
    /// Loads configuration from defaults, a config file and the environment
    ///
    /// With `path` the file must exist; without it an `insurance.toml` in
    /// the working directory is used if present.
    ///
    /// # Errors
    ///
    /// Returns `CliError::Config` if a source cannot be read or a value has
    /// the wrong type
    pub fn load(path: Option<&Path>) -> Result<Self, CliError> {
        let defaults = Self::default();
        let builder = config::Config::builder()
            .set_default("log_level", defaults.log_level)?
            .set_default("log_format", "pretty")?
            .set_default("currency", defaults.currency)?;

        let builder = match path {
            Some(path) => builder.add_source(config::File::from(path).required(true)),
            None => builder.add_source(config::File::with_name(DEFAULT_CONFIG_FILE).required(false)),
        };

        let config = builder
            .add_source(config::Environment::with_prefix(ENV_PREFIX))
            .build()?
            .try_deserialize()?;
        Ok(config)
    }

    /// Parses the configured currency code
    ///
    /// # Errors
    ///
    /// Returns `CliError::InvalidInput` for an unknown code
    pub fn currency(&self) -> Result<Currency, CliError> {
        Currency::from_str(&self.currency).map_err(|e| CliError::InvalidInput(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_defaults() {
        let config = CliConfig::default();
        assert_eq!(config.log_level, "info");
        assert_eq!(config.log_format, LogFormat::Pretty);
        assert_eq!(config.currency().unwrap(), Currency::USD);
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("insurance-cli-{}.toml", uuid::Uuid::new_v4()));
        fs::write(&path, "log_level = \"debug\"\nlog_format = \"json\"\ncurrency = \"eur\"\n").unwrap();

        let config = CliConfig::load(Some(&path)).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(config.log_level, "debug");
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.currency().unwrap(), Currency::EUR);
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let path = std::env::temp_dir().join("insurance-cli-does-not-exist.toml");
        assert!(matches!(CliConfig::load(Some(&path)), Err(CliError::Config(_))));
    }

    #[test]
    fn test_unknown_currency() {
        let config = CliConfig {
            currency: "XYZ".to_string(),
            ..CliConfig::default()
        };
        assert!(matches!(config.currency(), Err(CliError::InvalidInput(_))));
    }
}
