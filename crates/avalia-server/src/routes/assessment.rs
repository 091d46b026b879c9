use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use avalia_core::chart::{body_composition_chart, ChartBar};
use avalia_core::editor::set_field_by_name;
use avalia_core::models::record::AssessmentRecord;
use avalia_core::prompt::format_prompt;

use crate::error::ApiError;
use crate::state::AppState;

pub async fn get_assessment(State(state): State<AppState>) -> Json<AssessmentRecord> {
    let session = state.session.lock().await;
    Json(session.record.clone())
}

#[derive(Deserialize)]
pub struct UpdateFieldRequest {
    pub value: String,
}

/// Replace one field of the session record.
pub async fn update_field(
    State(state): State<AppState>,
    Path((group, field)): Path<(String, String)>,
    Json(req): Json<UpdateFieldRequest>,
) -> Result<Json<AssessmentRecord>, ApiError> {
    let mut session = state.session.lock().await;
    let next = set_field_by_name(&session.record, &group, &field, req.value)?;
    tracing::debug!(group = %group, field = %field, "field updated");
    session.record = next;
    Ok(Json(session.record.clone()))
}

pub async fn get_chart(State(state): State<AppState>) -> Json<Vec<ChartBar>> {
    let session = state.session.lock().await;
    Json(body_composition_chart(&session.record))
}

#[derive(Serialize)]
pub struct PromptResponse {
    pub prompt: String,
}

pub async fn get_prompt(State(state): State<AppState>) -> Json<PromptResponse> {
    let session = state.session.lock().await;
    Json(PromptResponse {
        prompt: format_prompt(&session.record),
    })
}
