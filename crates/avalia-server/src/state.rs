use std::sync::Arc;

use tokio::sync::Mutex;

use avalia_core::models::analysis::AnalysisState;
use avalia_core::models::record::AssessmentRecord;
use avalia_gemini::AnalysisService;

/// The single in-memory session: the record being edited and the state of
/// its analysis.
#[derive(Debug, Clone)]
pub struct Session {
    pub record: AssessmentRecord,
    pub analysis: AnalysisState,
}

impl Session {
    pub fn new(record: AssessmentRecord) -> Self {
        Self {
            record,
            analysis: AnalysisState::default(),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(AssessmentRecord::default_snapshot())
    }
}

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub session: Arc<Mutex<Session>>,
    pub analyzer: Arc<dyn AnalysisService>,
}

impl AppState {
    pub fn new(session: Session, analyzer: Arc<dyn AnalysisService>) -> Self {
        Self {
            session: Arc::new(Mutex::new(session)),
            analyzer,
        }
    }
}
