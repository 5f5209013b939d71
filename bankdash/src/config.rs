use bank_api::endpoints::GroupId;
use config::{Config, ConfigError, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    /// Bank service address, including the `/bank` prefix
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_group_id")]
    pub group_id: i64,
}

fn default_base_url() -> String {
    bank_api::DEFAULT_BASE_URL.to_string()
}

fn default_group_id() -> i64 {
    1
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let config_path =
            std::env::var("BANKDASH_CONFIG").unwrap_or_else(|_| "config.toml".to_string());
        Self::load(&config_path)
    }

    /// Read `config_path` if it exists, then apply `BANKDASH__*` overrides.
    /// Trailing slashes are dropped from `base_url`; endpoint paths start with one.
    pub fn load(config_path: &str) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name(config_path).required(false))
            .add_source(config::Environment::with_prefix("BANKDASH").separator("__"))
            .build()?;

        let mut settings: Settings = settings.try_deserialize()?;
        settings.base_url = settings.base_url.trim_end_matches('/').to_string();
        Ok(settings)
    }

    pub fn group_id(&self) -> GroupId {
        GroupId::new(self.group_id)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.is_empty() {
            return Err("base_url is required".to_string());
        }
        if !self.base_url.starts_with("http") {
            return Err("base_url must be a valid HTTP(S) URL".to_string());
        }
        Ok(())
    }
}
