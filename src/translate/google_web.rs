use async_trait::async_trait;
use reqwest::{Client, Url};
use std::sync::Arc;
use tracing::{debug, error, info};

use super::extraction::MarkerExtractor;
use super::interface::{FragmentExtractor, PrimaryTranslator};
use crate::error::{TranslateError, TranslateResult};

const PROVIDER: &str = "google_web";

/// Scrapes the public mobile translation page
pub struct GoogleWebTranslator {
    client: Client,
    base_url: String,
    extractor: Arc<dyn FragmentExtractor>,
}

impl GoogleWebTranslator {
    pub fn new(client: Client, base_url: String) -> Self {
        Self::with_extractor(client, base_url, Arc::new(MarkerExtractor))
    }

    pub fn with_extractor(
        client: Client,
        base_url: String,
        extractor: Arc<dyn FragmentExtractor>,
    ) -> Self {
        info!("Initialized GoogleWebTranslator: base_url={}", base_url);
        Self {
            client,
            base_url,
            extractor,
        }
    }

    pub fn request_url(
        &self,
        source_lang: &str,
        target_lang: &str,
        query: &str,
    ) -> TranslateResult<Url> {
        Url::parse_with_params(
            &self.base_url,
            &[
                ("hl", "en"),
                ("sl", source_lang),
                ("tl", target_lang),
                ("ie", "UTF-8"),
                ("prev", "_m"),
                ("q", query),
            ],
        )
        .map_err(|e| TranslateError::provider_unavailable(PROVIDER, e))
    }
}

#[async_trait]
impl PrimaryTranslator for GoogleWebTranslator {
    async fn fetch_primary(
        &self,
        source_lang: &str,
        target_lang: &str,
        query: &str,
    ) -> TranslateResult<Option<String>> {
        let url = self.request_url(source_lang, target_lang, query)?;

        let html = async {
            self.client
                .get(url)
                .send()
                .await?
                .error_for_status()?
                .text()
                .await
        }
        .await
        .map_err(|e| {
            error!("Error fetching data from web translator: {}", e);
            TranslateError::provider_unavailable(PROVIDER, e)
        })?;

        let fragment = self.extractor.extract_fragment(&html).map(str::to_string);
        debug!("Web translator fragment: {:?}", fragment);
        Ok(fragment)
    }
}
