//! Gemini `generateContent` over HTTPS.
//!
//! One prompt in, one complete reply out. No streaming, no retries, and no
//! timeout beyond the transport's own.

use serde::{Deserialize, Serialize};
use tracing::{error, info};
use uuid::Uuid;

use crate::config::GeminiConfig;
use crate::error::AnalysisError;
use crate::service::{AnalysisService, BoxFuture};

const API_KEY_HEADER: &str = "x-goog-api-key";

// ── Wire types ───────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<RequestContent<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    role: &'static str,
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
    usage_metadata: Option<UsageMetadata>,
    error: Option<ApiErrorBody>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<ResponseContent>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UsageMetadata {
    prompt_token_count: Option<u32>,
    candidates_token_count: Option<u32>,
    total_token_count: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    message: String,
    status: Option<String>,
    #[serde(default)]
    details: Vec<ErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    reason: Option<String>,
}

// ── Client ───────────────────────────────────────────────────────────────────

/// Analysis client backed by the Gemini REST API.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    config: GeminiConfig,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    /// Send `prompt` as the sole user turn and return the reply text.
    ///
    /// Without a configured key this fails with
    /// [`AnalysisError::Unauthenticated`] and makes no network call.
    pub async fn generate(&self, prompt: &str) -> Result<String, AnalysisError> {
        let api_key = self.config.api_key().ok_or_else(|| {
            AnalysisError::Unauthenticated("no API key configured".to_string())
        })?;

        let request_id = Uuid::new_v4();
        let model = self.config.model.as_str();
        info!(
            request_id = %request_id,
            model,
            prompt_len = prompt.len(),
            "starting analysis request"
        );

        let body = GenerateRequest {
            contents: vec![RequestContent {
                role: "user",
                parts: vec![RequestPart { text: prompt }],
            }],
        };

        let response = self
            .http
            .post(self.config.generate_url())
            .header(API_KEY_HEADER, api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| AnalysisError::Transport(e.to_string()))?;

        let status = response.status();
        let response_text = response
            .text()
            .await
            .map_err(|e| AnalysisError::Transport(e.to_string()))?;

        if !status.is_success() {
            let err = classify_failure(status.as_u16(), &response_text);
            error!(request_id = %request_id, status = status.as_u16(), error = %err, "analysis request failed");
            return Err(err);
        }

        let parsed: GenerateResponse = serde_json::from_str(&response_text)
            .map_err(|e| AnalysisError::ResponseParse(e.to_string()))?;

        let text = extract_text(parsed, request_id)?;

        info!(
            request_id = %request_id,
            model,
            reply_len = text.len(),
            "analysis request complete"
        );

        Ok(text)
    }
}

impl AnalysisService for GeminiClient {
    fn model(&self) -> &str {
        &self.config.model
    }

    fn has_credential(&self) -> bool {
        self.config.has_credential()
    }

    fn analyze<'a>(&'a self, prompt: &'a str) -> BoxFuture<'a, Result<String, AnalysisError>> {
        Box::pin(self.generate(prompt))
    }
}

/// Join the text parts of the first candidate.
fn extract_text(response: GenerateResponse, request_id: Uuid) -> Result<String, AnalysisError> {
    if let Some(err) = response.error {
        return Err(AnalysisError::Service {
            status: 200,
            message: err.message,
        });
    }

    if let Some(usage) = &response.usage_metadata {
        info!(
            request_id = %request_id,
            prompt_tokens = usage.prompt_token_count.unwrap_or(0),
            reply_tokens = usage.candidates_token_count.unwrap_or(0),
            total_tokens = usage.total_token_count.unwrap_or(0),
            "analysis token usage"
        );
    }

    if let Some(reason) = response.prompt_feedback.and_then(|f| f.block_reason) {
        return Err(AnalysisError::Service {
            status: 200,
            message: format!("prompt blocked: {reason}"),
        });
    }

    let candidate = response
        .candidates
        .into_iter()
        .next()
        .ok_or_else(|| AnalysisError::ResponseParse("no candidates in response".to_string()))?;

    let text = candidate
        .content
        .map(|c| {
            c.parts
                .into_iter()
                .filter_map(|p| p.text)
                .collect::<Vec<_>>()
                .join("")
        })
        .unwrap_or_default();

    if text.is_empty() {
        let reason = candidate.finish_reason.unwrap_or_else(|| "unknown".to_string());
        return Err(AnalysisError::ResponseParse(format!(
            "no text in response (finish reason: {reason})"
        )));
    }

    Ok(text)
}

/// Map a non-success HTTP response to an error.
///
/// 401 and 403 are credential failures. Gemini reports a malformed or
/// revoked key as 400 `INVALID_ARGUMENT` with reason `API_KEY_INVALID`, so
/// that is a credential failure too.
fn classify_failure(status: u16, body: &str) -> AnalysisError {
    let parsed = serde_json::from_str::<ErrorEnvelope>(body).ok().map(|e| e.error);

    let key_rejected = parsed.as_ref().is_some_and(|e| {
        e.details
            .iter()
            .any(|d| d.reason.as_deref() == Some("API_KEY_INVALID"))
            || e.message.contains("API key not valid")
    });

    let message = match parsed {
        Some(e) if !e.message.is_empty() => match e.status {
            Some(s) => format!("{s}: {}", e.message),
            None => e.message,
        },
        _ => snippet(body),
    };

    match status {
        401 | 403 => AnalysisError::Unauthenticated(message),
        400 if key_rejected => AnalysisError::Unauthenticated(message),
        _ => AnalysisError::Service { status, message },
    }
}

fn snippet(body: &str) -> String {
    const MAX_CHARS: usize = 200;
    let trimmed = body.trim();
    if trimmed.chars().count() <= MAX_CHARS {
        trimmed.to_string()
    } else {
        let cut: String = trimmed.chars().take(MAX_CHARS).collect();
        format!("{cut}...")
    }
}
