//! Briefing service coordinating news retrieval and text generation.

use crate::{
    config::Config,
    generation::{GenerationError, QuizResult, SummaryResult, TextGenerator, get_text_generator},
    news::{NewsError, NewsItem, NewsProvider, get_news_provider},
};
use async_trait::async_trait;
use axum::http::StatusCode;
use thiserror::Error;

/// Errors returned to the HTTP surface.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Required `text` input was missing or empty.
    #[error("No text provided")]
    MissingText,
    /// Request body could not be read.
    #[error("Invalid request body: {0}")]
    UnreadableBody(String),
    /// The live news source has no API key.
    #[error("NewsAPI key not configured")]
    NewsNotConfigured,
    /// News source failed.
    #[error("Failed to fetch news: {0}")]
    News(NewsError),
    /// Summary backend failed.
    #[error("Summarization failed: {0}")]
    Summarization(GenerationError),
    /// Quiz backend failed.
    #[error("Quiz generation failed: {0}")]
    Quiz(GenerationError),
}

impl ServiceError {
    /// HTTP status code reported for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingText | Self::UnreadableBody(_) => StatusCode::BAD_REQUEST,
            Self::NewsNotConfigured | Self::News(_) | Self::Summarization(_) | Self::Quiz(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<NewsError> for ServiceError {
    fn from(error: NewsError) -> Self {
        match error {
            NewsError::MissingApiKey => Self::NewsNotConfigured,
            other => Self::News(other),
        }
    }
}

/// Errors raised while building the service at startup.
#[derive(Debug, Error)]
pub enum StartupError {
    /// Generation backend could not be constructed.
    #[error("Failed to initialize generation backend: {0}")]
    Generation(#[from] GenerationError),
    /// News source could not be constructed.
    #[error("Failed to initialize news source: {0}")]
    News(#[from] NewsError),
}

/// Abstraction over the briefing operations used by the HTTP surface.
#[async_trait]
pub trait BriefingApi: Send + Sync {
    /// Return the current news list.
    async fn latest_news(&self) -> Result<Vec<NewsItem>, ServiceError>;

    /// Summarize non-empty `text`.
    async fn summarize(&self, text: &str) -> Result<SummaryResult, ServiceError>;

    /// Build a quiz question from non-empty `text`.
    async fn quiz(&self, text: &str) -> Result<QuizResult, ServiceError>;
}

/// Owns the generation backend and news source chosen at startup.
///
/// Construct once near process start and share through an `Arc`; nothing in it is mutated
/// after construction.
pub struct BriefingService {
    generator: Box<dyn TextGenerator + Send + Sync>,
    news: Box<dyn NewsProvider + Send + Sync>,
}

impl BriefingService {
    /// Build the service from configuration.
    pub fn new(config: &Config) -> Result<Self, StartupError> {
        let generator = get_text_generator(config)?;
        let news = get_news_provider(config)?;
        tracing::info!(
            generator = generator.name(),
            news = news.name(),
            "Briefing service ready"
        );
        Ok(Self::with_backends(generator, news))
    }

    /// Build the service from explicit backends.
    pub fn with_backends(
        generator: Box<dyn TextGenerator + Send + Sync>,
        news: Box<dyn NewsProvider + Send + Sync>,
    ) -> Self {
        Self { generator, news }
    }
}

#[async_trait]
impl BriefingApi for BriefingService {
    async fn latest_news(&self) -> Result<Vec<NewsItem>, ServiceError> {
        tracing::info!(source = self.news.name(), "Fetching news");
        let items = self.news.fetch_news().await?;
        tracing::debug!(count = items.len(), "News fetched");
        Ok(items)
    }

    async fn summarize(&self, text: &str) -> Result<SummaryResult, ServiceError> {
        if text.is_empty() {
            return Err(ServiceError::MissingText);
        }
        let result = self
            .generator
            .summarize(text)
            .await
            .map_err(ServiceError::Summarization)?;
        tracing::info!(backend = self.generator.name(), "Summarization successful");
        Ok(result)
    }

    async fn quiz(&self, text: &str) -> Result<QuizResult, ServiceError> {
        if text.is_empty() {
            return Err(ServiceError::MissingText);
        }
        let result = self
            .generator
            .quiz(text)
            .await
            .map_err(ServiceError::Quiz)?;
        tracing::info!(backend = self.generator.name(), "Quiz generation successful");
        Ok(result)
    }
}
