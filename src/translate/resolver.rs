use std::sync::Arc;
use tracing::{debug, info};

use super::classifier::contains_target_script;
use super::interface::{FallbackTranslator, PrimaryTranslator};
use crate::error::{TranslateError, TranslateResult};

/// Primary provider first, fallback only when the primary result does not
/// look translated.
pub struct TranslationResolver {
    primary: Arc<dyn PrimaryTranslator>,
    fallback: Arc<dyn FallbackTranslator>,
}

impl TranslationResolver {
    pub fn new(primary: Arc<dyn PrimaryTranslator>, fallback: Arc<dyn FallbackTranslator>) -> Self {
        Self { primary, fallback }
    }

    pub async fn resolve(
        &self,
        source_lang: &str,
        target_lang: &str,
        query: &str,
    ) -> TranslateResult<String> {
        let primary = self
            .primary
            .fetch_primary(source_lang, target_lang, query)
            .await
            .map_err(failed)?;

        if let Some(text) = primary {
            if contains_target_script(&text) {
                debug!("Primary result accepted");
                return Ok(text);
            }
        }

        info!("Primary result lacks target script, using fallback");
        self.fallback.fetch_fallback(query).await.map_err(failed)
    }
}

fn failed(err: TranslateError) -> TranslateError {
    TranslateError::TranslationFailed(err.to_string())
}
