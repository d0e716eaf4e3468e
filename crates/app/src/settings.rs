//! Handles settings for the application. Configuration is read from
//! `config/fincalc.toml` (or the file passed with `--config`) and from
//! `FINCALC_*` environment variables, e.g. `FINCALC_LEDGER__DIR=/tmp/ledger`.
use config::{Config, ConfigError, Environment, File};
use engine::Currency;
use serde::Deserialize;

pub const DEFAULT_CONFIG_PATH: &str = "config/fincalc";

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct App {
    pub level: String,
}

impl Default for App {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Ledger {
    /// Directory holding the ledger file.
    pub dir: String,
    /// Replaces the built-in category list.
    pub categories: Option<Vec<String>>,
}

impl Default for Ledger {
    fn default() -> Self {
        Self {
            dir: "data".to_string(),
            categories: None,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct Server {
    pub bind: Option<String>,
    pub port: u16,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub app: App,
    pub ledger: Ledger,
    pub currency: Currency,
    pub server: Option<Server>,
}

impl Settings {
    pub fn new(path: Option<&str>) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name(path.unwrap_or(DEFAULT_CONFIG_PATH)).required(path.is_some()))
            .add_source(Environment::with_prefix("FINCALC").separator("__"))
            .build()?;

        settings.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_default_file_gives_defaults() {
        let settings = Settings::new(None).unwrap();
        assert_eq!(settings.app.level, "info");
        assert_eq!(settings.ledger.dir, "data");
        assert_eq!(settings.currency, Currency::Usd);
        assert!(settings.server.is_none());
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        assert!(Settings::new(Some("does/not/exist.toml")).is_err());
    }
}
