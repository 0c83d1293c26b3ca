use serde::Deserialize;
use std::env;
use std::fmt;
use std::path::PathBuf;

use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError, Environment, File};
use ekz_core::VendorAllowList;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub auth: AuthConfig,
    pub data: DataConfig,
    pub vendors: VendorsConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    pub api_key: ApiKey,
}

/// Paths of the static JSON files loaded at startup.
#[derive(Debug, Deserialize, Clone)]
pub struct DataConfig {
    pub vendors: PathBuf,
    pub shipping_tiers: PathBuf,
    pub products: PathBuf,
    pub categories: PathBuf,
    pub brands: PathBuf,
}

#[derive(Debug, Deserialize, Clone)]
pub struct VendorsConfig {
    pub allowed_ids: VendorAllowList,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub format: LogFormat,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// One JSON object per event.
    #[default]
    Json,
    Pretty,
}

/// Shared secret clients send in `X-API-Key`. Masked in Debug output.
#[derive(Clone, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Byte-exact comparison against a request-supplied key.
    pub fn matches(&self, candidate: impl AsRef<[u8]>) -> bool {
        self.0.as_bytes() == candidate.as_ref()
    }

    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "********")
    }
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = Self::defaults()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Local overrides, not checked in
            .add_source(File::with_name("config/local").required(false))
            // Eg. `EKZ__SERVER__PORT=9000`
            .add_source(
                Environment::with_prefix("EKZ")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("vendors.allowed_ids"),
            )
            .set_override_option("auth.api_key", env::var("API_KEY").ok())?
            .build()?;

        Self::from_source(s)
    }

    /// Built-in defaults every other source is layered on top of.
    pub fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        config::Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8000)?
            .set_default("auth.api_key", "")?
            .set_default("data.vendors", "data/vendor_id_data.json")?
            .set_default("data.shipping_tiers", "data/vendor_shipping_data.json")?
            .set_default("data.products", "data/final_sample_data.json")?
            .set_default("data.categories", "data/vendor_category_data.json")?
            .set_default("data.brands", "data/vendor_brand_data.json")?
            .set_default("vendors.allowed_ids", vec![1i64, 2, 3, 4, 5, 6])?
            .set_default("logging.format", "json")
    }

    pub fn from_source(source: config::Config) -> Result<Self, ConfigError> {
        let config: Config = source.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.auth.api_key.is_blank() {
            return Err(ConfigError::Message(
                "auth.api_key is empty; set API_KEY before starting the server".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    fn build(toml: &str) -> Result<Config, ConfigError> {
        let source = Config::defaults()?
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?;
        Config::from_source(source)
    }

    #[test]
    fn test_defaults_with_api_key() {
        let config = build("[auth]\napi_key = \"s3cret\"").unwrap();

        assert_eq!(config.server.port, 8000);
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.data.brands, PathBuf::from("data/vendor_brand_data.json"));
        assert_eq!(config.vendors.allowed_ids, VendorAllowList::default());
        assert!(config.auth.api_key.matches("s3cret"));
    }

    #[test]
    fn test_missing_api_key_is_rejected() {
        let err = build("").unwrap_err();
        assert!(err.to_string().contains("API_KEY"));

        assert!(build("[auth]\napi_key = \"   \"").is_err());
    }

    #[test]
    fn test_overrides_allow_list_and_format() {
        let config = build(concat!(
            "[auth]\napi_key = \"k\"\n",
            "[vendors]\nallowed_ids = [10, 11]\n",
            "[logging]\nformat = \"pretty\"",
        ))
        .unwrap();

        assert!(config.vendors.allowed_ids.contains(10));
        assert!(!config.vendors.allowed_ids.contains(1));
        assert_eq!(config.logging.format, LogFormat::Pretty);
    }

    #[test]
    fn test_api_key_is_masked_and_exact() {
        let key = ApiKey::new("abc");
        assert_eq!(format!("{:?}", key), "********");
        assert!(key.matches("abc"));
        assert!(!key.matches("ABC"));
        assert!(!key.matches("abc "));
    }
}
