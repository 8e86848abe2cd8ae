use axum::http::HeaderValue;
use std::env;
use std::sync::OnceLock;
use thiserror::Error;

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_SUMMARIZATION_URL: &str =
    "https://api-inference.huggingface.co/models/facebook/bart-large-cnn";
const DEFAULT_QUIZ_URL: &str = "https://api-inference.huggingface.co/models/distilgpt2";
const DEFAULT_NEWSAPI_URL: &str = "https://newsapi.org/v2/everything";
const DEFAULT_NEWS_QUERY: &str = "india ssc";
const DEFAULT_CORS_ORIGINS: [&str; 2] =
    ["https://your-ssc-app.netlify.app", "http://localhost:3000"];

/// Errors encountered while loading configuration from environment variables.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Environment variable contained a value that could not be parsed.
    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(String),
}

/// Runtime configuration for the Newsdesk server.
#[derive(Debug, Clone)]
pub struct Config {
    /// Port the HTTP listener binds to.
    pub server_port: u16,
    /// Enables debug-level logging when no `RUST_LOG` filter is set.
    pub debug: bool,
    /// Backend producing summaries and quiz questions.
    pub generation_backend: GenerationBackend,
    /// Bearer token for the hosted inference API.
    pub hf_api_token: Option<String>,
    /// Summarization model endpoint.
    pub summarization_url: String,
    /// Text-generation model endpoint used for quiz questions.
    pub quiz_url: String,
    /// Where news items come from.
    pub news_source: NewsSource,
    /// API key for the live news search endpoint.
    pub newsapi_key: Option<String>,
    /// Live news search endpoint.
    pub newsapi_url: String,
    /// Query string sent to the live news search endpoint.
    pub news_query: String,
    /// Browser origins allowed to call the `/api` routes.
    pub cors_origins: Vec<String>,
}

/// Supported summary/quiz backends.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GenerationBackend {
    /// Deterministic sentence heuristics; never calls out.
    Rules,
    /// Hosted Hugging Face inference models.
    HuggingFace,
}

/// Supported news sources.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NewsSource {
    /// Fixed in-memory list.
    Mock,
    /// NewsAPI search results.
    NewsApi,
}

impl Config {
    /// Load configuration from environment variables, performing validation along the way.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key/value source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let optional = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        Ok(Self {
            server_port: optional("PORT")
                .map(|value| {
                    value
                        .trim()
                        .parse()
                        .map_err(|_| ConfigError::InvalidValue("PORT".into()))
                })
                .transpose()?
                .unwrap_or(DEFAULT_PORT),
            debug: optional("DEBUG")
                .map(|value| parse_flag(&value).ok_or(ConfigError::InvalidValue("DEBUG".into())))
                .transpose()?
                .unwrap_or(false),
            generation_backend: optional("GENERATION_BACKEND")
                .map(|value| {
                    value
                        .parse()
                        .map_err(|()| ConfigError::InvalidValue("GENERATION_BACKEND".into()))
                })
                .transpose()?
                .unwrap_or(GenerationBackend::Rules),
            hf_api_token: optional("HF_API_TOKEN"),
            summarization_url: optional("HF_SUMMARIZATION_URL")
                .unwrap_or_else(|| DEFAULT_SUMMARIZATION_URL.to_string()),
            quiz_url: optional("HF_QUIZ_URL").unwrap_or_else(|| DEFAULT_QUIZ_URL.to_string()),
            news_source: optional("NEWS_SOURCE")
                .map(|value| {
                    value
                        .parse()
                        .map_err(|()| ConfigError::InvalidValue("NEWS_SOURCE".into()))
                })
                .transpose()?
                .unwrap_or(NewsSource::Mock),
            newsapi_key: optional("NEWSAPI_KEY"),
            newsapi_url: optional("NEWSAPI_URL").unwrap_or_else(|| DEFAULT_NEWSAPI_URL.to_string()),
            news_query: optional("NEWS_QUERY").unwrap_or_else(|| DEFAULT_NEWS_QUERY.to_string()),
            cors_origins: optional("CORS_ORIGINS")
                .map(|value| parse_origins(&value))
                .transpose()?
                .unwrap_or_else(default_cors_origins),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: DEFAULT_PORT,
            debug: false,
            generation_backend: GenerationBackend::Rules,
            hf_api_token: None,
            summarization_url: DEFAULT_SUMMARIZATION_URL.to_string(),
            quiz_url: DEFAULT_QUIZ_URL.to_string(),
            news_source: NewsSource::Mock,
            newsapi_key: None,
            newsapi_url: DEFAULT_NEWSAPI_URL.to_string(),
            news_query: DEFAULT_NEWS_QUERY.to_string(),
            cors_origins: default_cors_origins(),
        }
    }
}

fn default_cors_origins() -> Vec<String> {
    DEFAULT_CORS_ORIGINS.iter().map(|origin| origin.to_string()).collect()
}

/// Comma-separated origin list; every entry must be a valid header value.
fn parse_origins(value: &str) -> Result<Vec<String>, ConfigError> {
    let origins: Vec<String> = value
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect();
    if origins.is_empty()
        || origins
            .iter()
            .any(|origin| HeaderValue::from_str(origin).is_err())
    {
        return Err(ConfigError::InvalidValue("CORS_ORIGINS".into()));
    }
    Ok(origins)
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

impl std::str::FromStr for GenerationBackend {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "rules" | "rule-based" => Ok(Self::Rules),
            "huggingface" | "hf" => Ok(Self::HuggingFace),
            _ => Err(()),
        }
    }
}

impl std::str::FromStr for NewsSource {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mock" => Ok(Self::Mock),
            "newsapi" => Ok(Self::NewsApi),
            _ => Err(()),
        }
    }
}

/// Global configuration cache populated during process start.
pub static CONFIG: OnceLock<Config> = OnceLock::new();

/// Retrieve the loaded configuration, panicking if initialization has not occurred.
pub fn get_config() -> &'static Config {
    CONFIG.get().expect("Config not initialized")
}

/// Load configuration from the environment and install it in the global cache.
pub fn init_config() -> Result<(), ConfigError> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;
    CONFIG.get_or_init(|| config);
    Ok(())
}
