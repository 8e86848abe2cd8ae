//! Hosted inference backend.
//!
//! Summaries come from a summarization model and quiz questions from a text-generation model,
//! both reached over the Hugging Face Inference API. Quiz options are placeholder labels; only
//! the question text is model-generated.

use super::{GenerationError, QuizResult, SummaryResult, TextGenerator};
use crate::text::truncate_chars;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

const SUMMARY_MAX_LENGTH: u32 = 100;
const SUMMARY_MIN_LENGTH: u32 = 30;
const QUIZ_MAX_LENGTH: u32 = 150;
const QUIZ_PROMPT_PREFIX: &str = "Create a multiple-choice question based on: ";
const QUIZ_PROMPT_SOURCE_CHARS: usize = 200;
const PLACEHOLDER_OPTIONS: [&str; 4] = ["Option 1", "Option 2", "Option 3", "Option 4"];

/// HTTP client for the summarization and text-generation endpoints.
pub struct HuggingFaceClient {
    http: Client,
    summarization_url: String,
    quiz_url: String,
    api_token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SummaryItem {
    summary_text: String,
}

#[derive(Debug, Deserialize)]
struct GeneratedItem {
    generated_text: String,
}

impl HuggingFaceClient {
    /// Construct a client for the given model endpoints.
    pub fn new(
        summarization_url: String,
        quiz_url: String,
        api_token: Option<String>,
    ) -> Result<Self, GenerationError> {
        let http = Client::builder().user_agent("newsdesk/0.1").build()?;
        tracing::debug!(
            summarization_url = %summarization_url,
            quiz_url = %quiz_url,
            has_token = api_token.is_some(),
            "Initialized inference client"
        );
        Ok(Self {
            http,
            summarization_url,
            quiz_url,
            api_token,
        })
    }

    async fn infer<T: DeserializeOwned>(
        &self,
        url: &str,
        payload: Value,
    ) -> Result<T, GenerationError> {
        let mut request = self.http.post(url).json(&payload);
        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token);
        }
        let response = request.send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(GenerationError::UnexpectedStatus { status, body });
        }

        let mut items: Vec<T> = response.json().await.map_err(|error| {
            GenerationError::InvalidResponse(format!(
                "failed to decode inference response: {error}"
            ))
        })?;
        if items.is_empty() {
            return Err(GenerationError::InvalidResponse(
                "inference response contained no results".into(),
            ));
        }
        Ok(items.swap_remove(0))
    }
}

#[async_trait]
impl TextGenerator for HuggingFaceClient {
    async fn summarize(&self, text: &str) -> Result<SummaryResult, GenerationError> {
        let payload = json!({
            "inputs": text,
            "parameters": {
                "max_length": SUMMARY_MAX_LENGTH,
                "min_length": SUMMARY_MIN_LENGTH,
            }
        });
        let item: SummaryItem = self.infer(&self.summarization_url, payload).await?;
        Ok(SummaryResult {
            summary: item.summary_text,
        })
    }

    async fn quiz(&self, text: &str) -> Result<QuizResult, GenerationError> {
        let prompt = format!(
            "{QUIZ_PROMPT_PREFIX}{}",
            truncate_chars(text, QUIZ_PROMPT_SOURCE_CHARS)
        );
        let payload = json!({
            "inputs": prompt,
            "parameters": { "max_length": QUIZ_MAX_LENGTH }
        });
        let item: GeneratedItem = self.infer(&self.quiz_url, payload).await?;
        let question = item
            .generated_text
            .split('\n')
            .next()
            .unwrap_or_default()
            .to_string();
        let options: Vec<String> = PLACEHOLDER_OPTIONS.iter().map(|s| s.to_string()).collect();
        let answer = options[0].clone();
        Ok(QuizResult {
            question,
            options,
            answer,
        })
    }

    fn name(&self) -> &'static str {
        "huggingface"
    }
}
