use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid field reference: {group}.{field}")]
    InvalidFieldReference { group: String, field: String },

    #[error("an analysis is already in progress")]
    AnalysisInProgress,

    #[error("cannot {action} while analysis is {from}")]
    InvalidTransition {
        from: &'static str,
        action: &'static str,
    },
}
