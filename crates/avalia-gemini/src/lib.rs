//! avalia-gemini
//!
//! Sends assessment prompts to Google's Gemini API and returns the reply.

pub mod client;
pub mod config;
pub mod error;
pub mod service;

pub use client::GeminiClient;
pub use config::GeminiConfig;
pub use error::AnalysisError;
pub use service::{AnalysisService, BoxFuture};
