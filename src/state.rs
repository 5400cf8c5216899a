use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;

use crate::config::Config;
use crate::tasks::TaskRegistry;
use crate::translate::{ChatCompletionTranslator, GoogleWebTranslator, TranslationResolver};

#[derive(Clone)]
pub struct AppState {
    pub resolver: Arc<TranslationResolver>,
    pub delayed_tasks: TaskRegistry,
    pub delay: Duration,
}

impl AppState {
    /// Build the production providers from configuration.
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let client = Client::builder().build()?;

        let primary = Arc::new(GoogleWebTranslator::new(
            client.clone(),
            config.primary_url.clone(),
        ));
        let fallback = Arc::new(ChatCompletionTranslator::new(
            client,
            config.fallback_base_url.clone(),
            config.api_key.clone(),
            config.fallback_model.clone(),
        ));

        Ok(Self::with_resolver(
            TranslationResolver::new(primary, fallback),
            config.delay(),
        ))
    }

    pub fn with_resolver(resolver: TranslationResolver, delay: Duration) -> Self {
        Self {
            resolver: Arc::new(resolver),
            delayed_tasks: TaskRegistry::new(),
            delay,
        }
    }
}
