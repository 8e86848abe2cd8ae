//! NewsAPI search client.

use super::{NewsError, NewsItem, NewsProvider};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

const MAX_ARTICLES: usize = 5;

/// HTTP client for the NewsAPI `everything` endpoint.
pub struct NewsApiClient {
    http: Client,
    url: String,
    query: String,
    api_key: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    articles: Vec<Article>,
}

#[derive(Debug, Deserialize)]
struct Article {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    source: Option<ArticleSource>,
    #[serde(default, rename = "publishedAt")]
    published_at: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ArticleSource {
    #[serde(default)]
    name: Option<String>,
}

impl From<Article> for NewsItem {
    fn from(article: Article) -> Self {
        Self {
            title: article.title.unwrap_or_default(),
            content: article
                .content
                .filter(|content| !content.is_empty())
                .or(article.description)
                .unwrap_or_default(),
            source: article
                .source
                .and_then(|source| source.name)
                .unwrap_or_default(),
            date: article.published_at.unwrap_or_default(),
        }
    }
}

impl NewsApiClient {
    /// Construct a client for `url`, searching for `query`.
    pub fn new(url: String, query: String, api_key: Option<String>) -> Result<Self, NewsError> {
        let http = Client::builder().user_agent("newsdesk/0.1").build()?;
        tracing::debug!(
            url = %url,
            query = %query,
            has_api_key = api_key.is_some(),
            "Initialized NewsAPI client"
        );
        Ok(Self {
            http,
            url,
            query,
            api_key,
        })
    }
}

#[async_trait]
impl NewsProvider for NewsApiClient {
    async fn fetch_news(&self) -> Result<Vec<NewsItem>, NewsError> {
        let api_key = self.api_key.as_deref().ok_or(NewsError::MissingApiKey)?;
        let response = self
            .http
            .get(&self.url)
            .query(&[("q", self.query.as_str()), ("apiKey", api_key)])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(NewsError::UnexpectedStatus { status, body });
        }

        let payload: SearchResponse = response.json().await.map_err(|error| {
            NewsError::InvalidResponse(format!("failed to decode search response: {error}"))
        })?;
        Ok(payload
            .articles
            .into_iter()
            .take(MAX_ARTICLES)
            .map(NewsItem::from)
            .collect())
    }

    fn name(&self) -> &'static str {
        "newsapi"
    }
}
