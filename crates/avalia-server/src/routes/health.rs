use axum::extract::State;
use axum::Json;
use serde::Serialize;

use avalia_gemini::config::API_KEY_ENV;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub model: String,
    pub credential_configured: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

/// Liveness plus the missing-credential notice the form shows.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let credential_configured = state.analyzer.has_credential();
    let warning = (!credential_configured).then(|| {
        format!("{API_KEY_ENV} is not configured. Analysis requests will fail until it is set.")
    });

    Json(HealthResponse {
        status: "ok",
        model: state.analyzer.model().to_string(),
        credential_configured,
        warning,
    })
}
