use std::time::Duration;

use anyhow::Result;
use config::builder::{ConfigBuilder, DefaultState};
use serde::{Deserialize, Serialize};

const DEFAULT_CONFIG_FILE: &str = "translate";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Credential for the chat-completion provider
    #[serde(default, skip_serializing)]
    pub api_key: String,
    pub primary_url: String,
    pub fallback_base_url: String,
    pub fallback_model: String,
    /// Artificial delay applied by the `/translate-delay` routes
    pub delay_ms: u64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3555
}

fn default_primary_url() -> String {
    "http://translate.google.com/m".to_string()
}

fn default_fallback_base_url() -> String {
    "https://api.groq.com/openai/v1".to_string()
}

fn default_fallback_model() -> String {
    "llama-3.3-70b-versatile".to_string()
}

fn default_delay_ms() -> u64 {
    2000
}

impl Config {
    /// Load configuration from an optional file and the process environment.
    ///
    /// `CONFIG_PATH` names the file (extension optional); environment
    /// variables such as `PORT` and `API_KEY` override it.
    pub fn load() -> Result<Self> {
        let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());

        let builder = config::Config::builder()
            .add_source(config::File::with_name(&path).required(false))
            .add_source(config::Environment::default());

        Self::from_builder(builder)
    }

    pub fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self> {
        let settings = builder
            .set_default("host", default_host())?
            .set_default("port", default_port() as i64)?
            .set_default("primary_url", default_primary_url())?
            .set_default("fallback_base_url", default_fallback_base_url())?
            .set_default("fallback_model", default_fallback_model())?
            .set_default("delay_ms", default_delay_ms() as i64)?
            .build()?;

        let config: Config = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            anyhow::bail!("Missing API_KEY in environment variables.");
        }
        Ok(())
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            api_key: String::new(),
            primary_url: default_primary_url(),
            fallback_base_url: default_fallback_base_url(),
            fallback_model: default_fallback_model(),
            delay_ms: default_delay_ms(),
        }
    }
}
