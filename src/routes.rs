use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    routing::get,
    Json, Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::debug;

use crate::error::{TranslateError, TranslateResult};
use crate::state::AppState;
use crate::translate::{TranslateParams, TranslateRequest};

pub const MISSING_QUERY_PARAMS: &str = "Missing required query parameters: sl, tl, query";
pub const MISSING_BODY_PARAMS: &str = "Missing required body parameters: sl, tl, query";

pub fn create_routes(state: AppState) -> Router {
    Router::new()
        .route("/translate", get(translate_query).post(translate_body))
        .route(
            "/translate-delay",
            get(translate_delay_query).post(translate_delay_body),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn translate_query(
    State(state): State<AppState>,
    params: Result<Query<TranslateParams>, QueryRejection>,
) -> TranslateResult<String> {
    let request = from_query(params)?;
    translate(&state, request).await
}

async fn translate_body(
    State(state): State<AppState>,
    body: Result<Json<TranslateParams>, JsonRejection>,
) -> TranslateResult<String> {
    let request = from_body(body)?;
    translate(&state, request).await
}

async fn translate_delay_query(
    State(state): State<AppState>,
    params: Result<Query<TranslateParams>, QueryRejection>,
) -> TranslateResult<String> {
    let request = from_query(params)?;
    translate_delayed(&state, request).await
}

async fn translate_delay_body(
    State(state): State<AppState>,
    body: Result<Json<TranslateParams>, JsonRejection>,
) -> TranslateResult<String> {
    let request = from_body(body)?;
    translate_delayed(&state, request).await
}

fn from_query(
    params: Result<Query<TranslateParams>, QueryRejection>,
) -> TranslateResult<TranslateRequest> {
    let params = params.map(|Query(p)| p).unwrap_or_else(|rejection| {
        debug!("Rejected query string: {}", rejection);
        TranslateParams::default()
    });
    params.into_request(MISSING_QUERY_PARAMS)
}

fn from_body(
    body: Result<Json<TranslateParams>, JsonRejection>,
) -> TranslateResult<TranslateRequest> {
    let params = body.map(|Json(p)| p).unwrap_or_else(|rejection| {
        debug!("Rejected JSON body: {}", rejection);
        TranslateParams::default()
    });
    params.into_request(MISSING_BODY_PARAMS)
}

async fn translate(state: &AppState, request: TranslateRequest) -> TranslateResult<String> {
    let text = state
        .resolver
        .resolve(&request.source_lang, &request.target_lang, &request.query)
        .await?;
    Ok(or_query(text, request.query))
}

/// Resolve on a scheduled task after the configured delay. The task is
/// aborted if this future is dropped before it completes.
async fn translate_delayed(state: &AppState, request: TranslateRequest) -> TranslateResult<String> {
    let resolver = state.resolver.clone();
    let task = state.delayed_tasks.schedule(state.delay, async move {
        let text = resolver
            .resolve(&request.source_lang, &request.target_lang, &request.query)
            .await?;
        Ok::<_, TranslateError>(or_query(text, request.query))
    });

    task.wait()
        .await
        .map_err(|e| TranslateError::TranslationFailed(format!("delayed task ended: {}", e)))?
}

/// Never answer with a blank body; show the original text instead.
fn or_query(text: String, query: String) -> String {
    if text.is_empty() {
        query
    } else {
        text
    }
}
