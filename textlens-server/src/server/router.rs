use axum::{
    extract::State,
    http::{Method, StatusCode},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use textlens_core::{AnalysisResponse, HealthStatus};
use tower_http::cors::{Any, CorsLayer};

use super::state::AppState;

/// Body of `POST /analyze_text`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TextRequest {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LanguageEntry {
    pub code: String,
    pub name: String,
}

/// Body of `GET /languages`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LanguagesResponse {
    pub languages: Vec<LanguageEntry>,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health_handler))
        .route("/analyze_text", post(analyze_handler))
        .route("/languages", get(languages_handler))
        .layer(cors_layer())
        .with_state(state)
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
}

async fn health_handler(State(state): State<AppState>) -> Json<HealthStatus> {
    Json(HealthStatus::ok(
        state.service_name(),
        env!("CARGO_PKG_VERSION"),
    ))
}

/// Analysis is CPU-bound and runs on the blocking pool
async fn analyze_handler(
    State(state): State<AppState>,
    Json(request): Json<TextRequest>,
) -> Result<Json<AnalysisResponse>, StatusCode> {
    log::debug!("analyze_text: {} bytes", request.text.len());
    let response = tokio::task::spawn_blocking(move || state.analyzer().analyze(&request.text))
        .await
        .map_err(|e| {
            log::error!("Analysis task failed: {e}");
            StatusCode::INTERNAL_SERVER_ERROR
        })?;
    Ok(Json(response))
}

async fn languages_handler(State(state): State<AppState>) -> Json<LanguagesResponse> {
    let languages = state
        .analyzer()
        .profiles()
        .profiles()
        .iter()
        .map(|profile| LanguageEntry {
            code: profile.code().to_string(),
            name: profile.name().to_string(),
        })
        .collect();
    Json(LanguagesResponse { languages })
}
