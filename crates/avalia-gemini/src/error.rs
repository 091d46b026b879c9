use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("not authenticated with the analysis service: {0}")]
    Unauthenticated(String),

    #[error("could not reach the analysis service: {0}")]
    Transport(String),

    #[error("analysis service returned {status}: {message}")]
    Service { status: u16, message: String },

    #[error("response parsing failed: {0}")]
    ResponseParse(String),
}
