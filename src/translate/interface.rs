/// Translation interfaces shared by the providers and the resolver

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::{TranslateError, TranslateResult};

/// Raw translation parameters as sent by clients, either as a query
/// string or a JSON body
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct TranslateParams {
    pub sl: Option<String>,
    pub tl: Option<String>,
    pub query: Option<String>,
}

/// A validated translation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslateRequest {
    pub source_lang: String,
    pub target_lang: String,
    pub query: String,
}

impl TranslateParams {
    /// Validate that `sl`, `tl` and `query` are all present and non-empty.
    ///
    /// `missing_message` is returned verbatim as the validation error.
    pub fn into_request(self, missing_message: &str) -> TranslateResult<TranslateRequest> {
        match (non_empty(self.sl), non_empty(self.tl), non_empty(self.query)) {
            (Some(source_lang), Some(target_lang), Some(query)) => Ok(TranslateRequest {
                source_lang,
                target_lang,
                query,
            }),
            _ => Err(TranslateError::Validation(missing_message.to_string())),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// First-stage provider: a public web translation page
#[async_trait]
pub trait PrimaryTranslator: Send + Sync {
    /// Fetch a translation. `Ok(None)` means the page carried no
    /// recognisable result.
    async fn fetch_primary(
        &self,
        source_lang: &str,
        target_lang: &str,
        query: &str,
    ) -> TranslateResult<Option<String>>;
}

/// Second-stage provider: a hosted chat-completion model
#[async_trait]
pub trait FallbackTranslator: Send + Sync {
    /// Translate `query`. An empty string is a valid answer.
    async fn fetch_fallback(&self, query: &str) -> TranslateResult<String>;
}

/// Locates the translated fragment inside a provider's HTML page
pub trait FragmentExtractor: Send + Sync {
    fn extract_fragment<'a>(&self, html: &'a str) -> Option<&'a str>;
}

#[cfg(test)]
mod tests {
    use super::*;

    const MISSING: &str = "Missing required query parameters: sl, tl, query";

    fn params(sl: Option<&str>, tl: Option<&str>, query: Option<&str>) -> TranslateParams {
        TranslateParams {
            sl: sl.map(str::to_string),
            tl: tl.map(str::to_string),
            query: query.map(str::to_string),
        }
    }

    #[test]
    fn complete_params_become_a_request() {
        let request = params(Some("en"), Some("ar"), Some("hello"))
            .into_request(MISSING)
            .unwrap();
        assert_eq!(request.source_lang, "en");
        assert_eq!(request.target_lang, "ar");
        assert_eq!(request.query, "hello");
    }

    #[test]
    fn absent_field_is_a_validation_error() {
        let err = params(Some("en"), Some("ar"), None).into_request(MISSING).unwrap_err();
        match err {
            TranslateError::Validation(message) => assert_eq!(message, MISSING),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn empty_field_counts_as_missing() {
        assert!(params(Some(""), Some("ar"), Some("hello")).into_request(MISSING).is_err());
        assert!(params(Some("en"), Some(""), Some("hello")).into_request(MISSING).is_err());
        assert!(params(Some("en"), Some("ar"), Some("")).into_request(MISSING).is_err());
    }
}
