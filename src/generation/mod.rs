//! Summary and quiz generation backends.
//!
//! Two implementations share the [`TextGenerator`] interface: deterministic sentence
//! heuristics in [`rules`] and the hosted inference models in [`huggingface`]. The backend is
//! picked once from configuration when the service is built.

pub mod huggingface;
pub mod rules;

use crate::config::{Config, GenerationBackend};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use huggingface::HuggingFaceClient;
pub use rules::RuleBasedGenerator;

/// Errors surfaced by generation backends.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// HTTP layer failed before receiving a response.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// Provider responded with a non-success status code.
    #[error("Unexpected response ({status}): {body}")]
    UnexpectedStatus {
        /// HTTP status returned by the provider.
        status: StatusCode,
        /// Body payload associated with the failing response.
        body: String,
    },
    /// Provider response did not have the expected shape.
    #[error("Malformed provider response: {0}")]
    InvalidResponse(String),
}

/// Summary returned by `POST /api/summarize`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryResult {
    /// Condensed text.
    pub summary: String,
}

/// Multiple-choice question returned by `POST /api/quiz`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizResult {
    /// Question prompt.
    pub question: String,
    /// Four answer options; labels are not guaranteed to be distinct.
    pub options: Vec<String>,
    /// The option designated as correct; always one of `options`.
    pub answer: String,
}

/// Interface implemented by summary/quiz backends.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Produce a summary for non-empty `text`.
    async fn summarize(&self, text: &str) -> Result<SummaryResult, GenerationError>;

    /// Produce a multiple-choice question for non-empty `text`.
    async fn quiz(&self, text: &str) -> Result<QuizResult, GenerationError>;

    /// Short backend name used in logs.
    fn name(&self) -> &'static str;
}

/// Build the generation backend selected by configuration.
pub fn get_text_generator(
    config: &Config,
) -> Result<Box<dyn TextGenerator + Send + Sync>, GenerationError> {
    match config.generation_backend {
        GenerationBackend::Rules => Ok(Box::new(RuleBasedGenerator)),
        GenerationBackend::HuggingFace => {
            if config.hf_api_token.is_none() {
                tracing::warn!(
                    "HF_API_TOKEN is not set; inference requests will be unauthenticated"
                );
            }
            Ok(Box::new(HuggingFaceClient::new(
                config.summarization_url.clone(),
                config.quiz_url.clone(),
                config.hf_api_token.clone(),
            )?))
        }
    }
}
