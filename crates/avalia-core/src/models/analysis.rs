use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Lifecycle of the analyze-and-render flow for one session.
///
/// `Idle -> Requesting -> {Rendered | ErrorShown}`. Starting a new request
/// from either terminal state clears the previous result or error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "status", rename_all = "snake_case")]
#[ts(export)]
pub enum AnalysisState {
    #[default]
    Idle,
    Requesting,
    Rendered {
        html: String,
        completed_at: jiff::Timestamp,
    },
    ErrorShown {
        message: String,
        completed_at: jiff::Timestamp,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AnalysisStatus {
    Idle,
    Requesting,
    Rendered,
    ErrorShown,
}

impl AnalysisStatus {
    /// Same text as the serde name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Requesting => "requesting",
            Self::Rendered => "rendered",
            Self::ErrorShown => "error_shown",
        }
    }
}

/// What a presentation layer shows for the current [`AnalysisState`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnalysisView {
    pub status: AnalysisStatus,
    pub loading: bool,
    pub result_html: Option<String>,
    pub error: Option<String>,
}

impl AnalysisState {
    pub fn status(&self) -> AnalysisStatus {
        match self {
            Self::Idle => AnalysisStatus::Idle,
            Self::Requesting => AnalysisStatus::Requesting,
            Self::Rendered { .. } => AnalysisStatus::Rendered,
            Self::ErrorShown { .. } => AnalysisStatus::ErrorShown,
        }
    }

    /// Enter `Requesting`, dropping any previous result or error.
    ///
    /// Fails if a request is already outstanding.
    pub fn begin(&mut self) -> Result<(), CoreError> {
        if matches!(self, Self::Requesting) {
            return Err(CoreError::AnalysisInProgress);
        }
        *self = Self::Requesting;
        Ok(())
    }

    pub fn succeed(&mut self, html: impl Into<String>) -> Result<(), CoreError> {
        self.require_requesting("succeed")?;
        *self = Self::Rendered {
            html: html.into(),
            completed_at: jiff::Timestamp::now(),
        };
        Ok(())
    }

    pub fn fail(&mut self, message: impl Into<String>) -> Result<(), CoreError> {
        self.require_requesting("fail")?;
        *self = Self::ErrorShown {
            message: message.into(),
            completed_at: jiff::Timestamp::now(),
        };
        Ok(())
    }

    pub fn view(&self) -> AnalysisView {
        let (result_html, error) = match self {
            Self::Rendered { html, .. } => (Some(html.clone()), None),
            Self::ErrorShown { message, .. } => (None, Some(message.clone())),
            Self::Idle | Self::Requesting => (None, None),
        };
        AnalysisView {
            status: self.status(),
            loading: matches!(self, Self::Requesting),
            result_html,
            error,
        }
    }

    fn require_requesting(&self, action: &'static str) -> Result<(), CoreError> {
        if matches!(self, Self::Requesting) {
            Ok(())
        } else {
            Err(CoreError::InvalidTransition {
                from: self.status().as_str(),
                action,
            })
        }
    }
}
