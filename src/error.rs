use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

pub const TRANSLATION_FAILED_MESSAGE: &str = "Error processing translation";

/// Errors raised while handling a translation request
#[derive(Debug, Error)]
pub enum TranslateError {
    /// One or more required request fields are missing or empty
    #[error("{0}")]
    Validation(String),

    /// A remote provider failed at the transport or HTTP level
    #[error("{provider} unavailable: {reason}")]
    ProviderUnavailable {
        provider: &'static str,
        reason: String,
    },

    /// Resolution could not complete
    #[error("translation failed: {0}")]
    TranslationFailed(String),
}

pub type TranslateResult<T> = Result<T, TranslateError>;

impl TranslateError {
    pub fn provider_unavailable(provider: &'static str, reason: impl std::fmt::Display) -> Self {
        Self::ProviderUnavailable {
            provider,
            reason: reason.to_string(),
        }
    }
}

impl IntoResponse for TranslateError {
    fn into_response(self) -> Response {
        match self {
            TranslateError::Validation(message) => {
                (StatusCode::BAD_REQUEST, message).into_response()
            }
            other => {
                error!("{}", other);
                (StatusCode::INTERNAL_SERVER_ERROR, TRANSLATION_FAILED_MESSAGE).into_response()
            }
        }
    }
}
