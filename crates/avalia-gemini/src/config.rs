use std::fmt;

use tracing::warn;

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Primary credential variable, with [`GEMINI_API_KEY_ENV`] as fallback.
pub const API_KEY_ENV: &str = "API_KEY";
pub const GEMINI_API_KEY_ENV: &str = "GEMINI_API_KEY";
pub const MODEL_ENV: &str = "AVALIA_MODEL";
pub const BASE_URL_ENV: &str = "AVALIA_GEMINI_BASE_URL";

/// Connection settings for the Gemini API, resolved once at startup.
///
/// A missing credential is not an error here: the host keeps running and
/// every analysis attempt fails as unauthenticated.
#[derive(Clone)]
pub struct GeminiConfig {
    api_key: Option<String>,
    pub model: String,
    pub base_url: String,
}

impl GeminiConfig {
    /// Blank keys count as missing.
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let api_key = [API_KEY_ENV, GEMINI_API_KEY_ENV]
            .into_iter()
            .filter_map(&lookup)
            .find(|k| !k.trim().is_empty());

        if api_key.is_none() {
            warn!(
                "{API_KEY_ENV} is not set (nor {GEMINI_API_KEY_ENV}); analysis requests will fail until it is configured"
            );
        }

        let mut config = Self::new(api_key);
        if let Some(model) = lookup(MODEL_ENV).filter(|m| !m.trim().is_empty()) {
            config.model = model;
        }
        if let Some(base_url) = lookup(BASE_URL_ENV).filter(|u| !u.trim().is_empty()) {
            config.base_url = base_url;
        }
        config
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    /// Redacted form of the key, safe to log or show.
    pub fn key_hint(&self) -> Option<String> {
        self.api_key.as_deref().map(redact_key)
    }

    pub(crate) fn generate_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }
}

impl fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &self.key_hint())
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish()
    }
}

fn redact_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 8 {
        return "****".to_string();
    }
    let prefix: String = chars[..4].iter().collect();
    let suffix: String = chars[chars.len() - 4..].iter().collect();
    format!("{prefix}...{suffix}")
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn defaults_without_variables() {
        let config = GeminiConfig::from_lookup(lookup(&[]));
        assert!(!config.has_credential());
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn api_key_takes_precedence_over_gemini_key() {
        let config = GeminiConfig::from_lookup(lookup(&[
            (API_KEY_ENV, "primary-key-123456"),
            (GEMINI_API_KEY_ENV, "fallback-key-654321"),
        ]));
        assert_eq!(config.api_key(), Some("primary-key-123456"));

        let config = GeminiConfig::from_lookup(lookup(&[
            (API_KEY_ENV, "  "),
            (GEMINI_API_KEY_ENV, "fallback-key-654321"),
        ]));
        assert_eq!(config.api_key(), Some("fallback-key-654321"));
    }

    #[test]
    fn model_and_base_url_overrides() {
        let config = GeminiConfig::from_lookup(lookup(&[
            (MODEL_ENV, "gemini-2.0-flash"),
            (BASE_URL_ENV, "http://localhost:9000/v1beta/"),
        ]));
        assert_eq!(
            config.generate_url(),
            "http://localhost:9000/v1beta/models/gemini-2.0-flash:generateContent"
        );
    }

    #[test]
    fn debug_output_redacts_the_key() {
        let config = GeminiConfig::new(Some("AIzaSyExampleKey1234".to_string()));
        let debug = format!("{config:?}");
        assert!(debug.contains("AIza...1234"));
        assert!(!debug.contains("ExampleKey"));

        assert_eq!(
            GeminiConfig::new(Some("short".into())).key_hint().as_deref(),
            Some("****")
        );
    }

    #[test]
    fn blank_key_counts_as_missing() {
        assert!(!GeminiConfig::new(Some("   ".into())).has_credential());
    }
}
