use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use tokio::sync::Mutex;

use avalia_core::models::analysis::{AnalysisStatus, AnalysisView};
use avalia_core::prompt::format_prompt;
use avalia_gemini::AnalysisService;

use crate::error::ApiError;
use crate::state::{AppState, Session};

/// The only failure text a client ever sees. Causes go to the log.
pub const ANALYSIS_FAILED_MESSAGE: &str =
    "An error occurred while analyzing the data. Please try again.";

pub async fn get_analysis(State(state): State<AppState>) -> Json<AnalysisView> {
    let session = state.session.lock().await;
    Json(session.analysis.view())
}

/// Analyze the current record and render the reply.
///
/// The record is snapshotted when the request starts; edits made while the
/// model call is outstanding do not affect it. The call runs on its own task
/// so a disconnecting client cannot leave the session stuck in `requesting`,
/// and a task that dies is recorded as a failed analysis.
pub async fn run_analysis(State(state): State<AppState>) -> Result<Json<AnalysisView>, ApiError> {
    let prompt = {
        let mut session = state.session.lock().await;
        session.analysis.begin()?;
        format_prompt(&session.record)
    };

    let analyzer = Arc::clone(&state.analyzer);
    let session = Arc::clone(&state.session);
    match tokio::spawn(complete_analysis(analyzer, session, prompt)).await {
        Ok(view) => Ok(Json(view?)),
        Err(e) => {
            tracing::error!(error = %e, "analysis task did not complete");
            let mut session = state.session.lock().await;
            if session.analysis.status() == AnalysisStatus::Requesting {
                session.analysis.fail(ANALYSIS_FAILED_MESSAGE)?;
            }
            Ok(Json(session.analysis.view()))
        }
    }
}

async fn complete_analysis(
    analyzer: Arc<dyn AnalysisService>,
    session: Arc<Mutex<Session>>,
    prompt: String,
) -> Result<AnalysisView, ApiError> {
    let outcome = analyzer.analyze(&prompt).await;

    let mut session = session.lock().await;
    match outcome {
        Ok(reply) => {
            let html = avalia_render::render(&reply);
            session.analysis.succeed(html)?;
        }
        Err(e) => {
            tracing::error!(model = analyzer.model(), error = %e, "analysis failed");
            session.analysis.fail(ANALYSIS_FAILED_MESSAGE)?;
        }
    }

    Ok(session.analysis.view())
}
