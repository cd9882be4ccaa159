use config::{Config, ConfigError};
use serde::Deserialize;
use std::collections::HashMap;
use tracing::debug;

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub api: ApiSettings,
    pub search: SearchSettings,
    pub output: OutputSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiSettings {
    pub base_url: String,
    pub headers: HashMap<String, String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SearchSettings {
    /// "1" = keyword search, "2" = pasted search-page URL.
    pub mode: String,
    /// The keyword or the URL, depending on mode.
    pub query: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct OutputSettings {
    pub path: String,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let builder = Config::builder()
            .add_source(config::File::with_name("config/default.yaml"))
            .add_source(config::Environment::with_prefix("APP"));

        let config = builder.build()?;
        let settings: Settings = config.try_deserialize()?;

        debug!(
            base_url = settings.api.base_url,
            mode = settings.search.mode,
            output = settings.output.path,
            "Loaded settings"
        );

        Ok(settings)
    }
}
