use std::net::SocketAddr;

use avalia_gemini::GeminiConfig;
use thiserror::Error;

pub const BIND_ENV: &str = "AVALIA_BIND";
pub const DEFAULT_BIND: &str = "127.0.0.1:3000";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {BIND_ENV} value {value:?}: {reason}")]
    InvalidBind { value: String, reason: String },
}

/// Host settings, read once at startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind: SocketAddr,
    pub gemini: GeminiConfig,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let raw = lookup(BIND_ENV)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind = raw
            .trim()
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidBind {
                value: raw.clone(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            bind,
            gemini: GeminiConfig::from_lookup(lookup),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ServerConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.bind.to_string(), DEFAULT_BIND);
        assert!(!config.gemini.has_credential());
    }

    #[test]
    fn reads_bind_and_key() {
        let config = ServerConfig::from_lookup(|name| match name {
            BIND_ENV => Some("0.0.0.0:8080".to_string()),
            "API_KEY" => Some("key-from-env-1234".to_string()),
            _ => None,
        })
        .unwrap();
        assert_eq!(config.bind.port(), 8080);
        assert!(config.gemini.has_credential());
    }

    #[test]
    fn rejects_malformed_bind() {
        let err = ServerConfig::from_lookup(|name| {
            (name == BIND_ENV).then(|| "localhost".to_string())
        })
        .unwrap_err();
        assert!(err.to_string().starts_with("invalid AVALIA_BIND value \"localhost\""));
    }
}
