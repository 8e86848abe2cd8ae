//! News item sources.
//!
//! The default source is a fixed list held in memory for the life of the process. The live
//! source queries the NewsAPI search endpoint on every call.

pub mod newsapi;

use crate::config::{Config, NewsSource};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

pub use newsapi::NewsApiClient;

/// Errors surfaced by news sources.
#[derive(Debug, Error)]
pub enum NewsError {
    /// The live source was selected but no API key was configured.
    #[error("NewsAPI key not configured")]
    MissingApiKey,
    /// HTTP layer failed before receiving a response.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// Upstream responded with a non-success status code.
    #[error("Unexpected response ({status}): {body}")]
    UnexpectedStatus {
        /// HTTP status returned by the upstream.
        status: StatusCode,
        /// Body payload associated with the failing response.
        body: String,
    },
    /// Upstream response did not have the expected shape.
    #[error("Malformed news response: {0}")]
    InvalidResponse(String),
}

/// A single news entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsItem {
    /// Headline.
    pub title: String,
    /// Body text or description.
    pub content: String,
    /// Publisher name.
    pub source: String,
    /// Publication date (ISO 8601).
    pub date: String,
}

impl NewsItem {
    fn new(title: &str, content: &str, source: &str, date: &str) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            source: source.into(),
            date: date.into(),
        }
    }
}

/// Interface implemented by news sources.
#[async_trait]
pub trait NewsProvider: Send + Sync {
    /// Return the current list of news items.
    async fn fetch_news(&self) -> Result<Vec<NewsItem>, NewsError>;

    /// Short source name used in logs.
    fn name(&self) -> &'static str;
}

static MOCK_NEWS: LazyLock<Vec<NewsItem>> = LazyLock::new(|| {
    vec![
        NewsItem::new(
            "Operation Sindoor: India's Response to Terrorism",
            "On May 6-7, 2025, Indian forces conducted Operation Sindoor in retaliation to the Pahalgam attack, targeting terrorist bases.",
            "Utkarsh Classes",
            "2025-05-07",
        ),
        NewsItem::new(
            "8th Pay Commission Approved",
            "The Union government approved the 8th Pay Commission on February 2, 2025, to revise salaries and pensions for government employees.",
            "Indian Express",
            "2025-02-02",
        ),
    ]
});

/// The built-in news list, in display order.
pub fn mock_news() -> &'static [NewsItem] {
    &MOCK_NEWS
}

/// Source backed by [`mock_news`].
#[derive(Debug, Clone, Copy, Default)]
pub struct MockNewsProvider;

#[async_trait]
impl NewsProvider for MockNewsProvider {
    async fn fetch_news(&self) -> Result<Vec<NewsItem>, NewsError> {
        Ok(mock_news().to_vec())
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}

/// Build the news source selected by configuration.
pub fn get_news_provider(
    config: &Config,
) -> Result<Box<dyn NewsProvider + Send + Sync>, NewsError> {
    match config.news_source {
        NewsSource::Mock => Ok(Box::new(MockNewsProvider)),
        NewsSource::NewsApi => {
            if config.newsapi_key.is_none() {
                tracing::warn!(
                    "NEWS_SOURCE=newsapi but NEWSAPI_KEY is not set; news requests will fail"
                );
            }
            Ok(Box::new(NewsApiClient::new(
                config.newsapi_url.clone(),
                config.news_query.clone(),
                config.newsapi_key.clone(),
            )?))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn mock_provider_returns_fixed_list_in_order() {
        let first = MockNewsProvider.fetch_news().await.expect("news");
        let second = MockNewsProvider.fetch_news().await.expect("news");
        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
        assert_eq!(first[0].title, "Operation Sindoor: India's Response to Terrorism");
        assert_eq!(first[1].date, "2025-02-02");
    }

    #[tokio::test]
    async fn live_source_without_key_reports_configuration_error() {
        let config = Config {
            news_source: NewsSource::NewsApi,
            ..Config::default()
        };
        let provider = get_news_provider(&config).expect("provider");
        assert_eq!(provider.name(), "newsapi");
        let error = provider.fetch_news().await.expect_err("missing key");
        assert!(matches!(error, NewsError::MissingApiKey));
    }
}
