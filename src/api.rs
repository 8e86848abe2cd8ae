//! HTTP surface for Newsdesk.
//!
//! This module exposes a compact Axum router:
//!
//! - `GET /` – Capability descriptor listing the API endpoints.
//! - `GET /api/news` – Current news items (mock list or live search, per configuration).
//! - `POST /api/summarize` – Summarize `{ "text": ... }` into `{ "summary": ... }`.
//! - `POST /api/quiz` – Turn `{ "text": ... }` into `{ "question", "options", "answer" }`.
//!
//! Every failure is reported as `{ "error": <message> }` with a 400 or 500 status. The `/api`
//! routes answer CORS requests from the configured frontend origins only.

use crate::generation::{QuizResult, SummaryResult};
use crate::news::NewsItem;
use crate::service::{BriefingApi, ServiceError};
use axum::{
    Json, Router,
    body::Bytes,
    extract::{State, rejection::BytesRejection},
    http::{HeaderValue, Method, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Build the HTTP router exposing the briefing API surface.
///
/// `cors_origins` lists the browser origins allowed to call the `/api` routes.
pub fn create_router<S>(service: Arc<S>, cors_origins: &[String]) -> Router
where
    S: BriefingApi + 'static,
{
    let api_routes = Router::new()
        .route("/news", get(get_news::<S>))
        .route("/summarize", post(summarize::<S>))
        .route("/quiz", post(quiz::<S>))
        .layer(cors_layer(cors_origins));

    Router::new()
        .route("/", get(get_capabilities))
        .nest("/api", api_routes)
        .with_state(service)
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
}

/// Request body shared by the generation endpoints.
#[derive(Deserialize)]
struct TextRequest {
    #[serde(default)]
    text: Option<String>,
}

/// Pull a non-empty `text` field out of a raw request body.
///
/// Absent bodies, invalid JSON, and non-string `text` values are all treated as missing. A body
/// the framework refused to buffer (e.g. over the size limit) is reported as unreadable.
fn require_text(body: Result<Bytes, BytesRejection>) -> Result<String, AppError> {
    let body = body.map_err(|rejection| ServiceError::UnreadableBody(rejection.body_text()))?;
    serde_json::from_slice::<TextRequest>(&body)
        .ok()
        .and_then(|request| request.text)
        .filter(|text| !text.is_empty())
        .ok_or(AppError(ServiceError::MissingText))
}

async fn get_news<S>(State(service): State<Arc<S>>) -> Result<Json<Vec<NewsItem>>, AppError>
where
    S: BriefingApi,
{
    let items = service.latest_news().await?;
    Ok(Json(items))
}

async fn summarize<S>(
    State(service): State<Arc<S>>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<SummaryResult>, AppError>
where
    S: BriefingApi,
{
    let text = require_text(body)?;
    let result = service.summarize(&text).await?;
    Ok(Json(result))
}

async fn quiz<S>(
    State(service): State<Arc<S>>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<QuizResult>, AppError>
where
    S: BriefingApi,
{
    let text = require_text(body)?;
    let result = service.quiz(&text).await?;
    Ok(Json(result))
}

/// Descriptor for a single endpoint in the capability listing.
#[derive(Serialize)]
struct EndpointDescriptor {
    method: &'static str,
    path: &'static str,
    description: &'static str,
}

/// Response body for `GET /`.
#[derive(Serialize)]
struct CapabilitiesResponse {
    status: &'static str,
    endpoints: Vec<EndpointDescriptor>,
}

async fn get_capabilities() -> Json<CapabilitiesResponse> {
    Json(CapabilitiesResponse {
        status: "ok",
        endpoints: vec![
            EndpointDescriptor {
                method: "GET",
                path: "/api/news",
                description: "Return the current list of news items.",
            },
            EndpointDescriptor {
                method: "POST",
                path: "/api/summarize",
                description: "Summarize { \"text\": string } into { \"summary\": string }.",
            },
            EndpointDescriptor {
                method: "POST",
                path: "/api/quiz",
                description: "Build a multiple-choice question from { \"text\": string }.",
            },
        ],
    })
}

struct AppError(ServiceError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.0.status_code();
        let message = self.0.to_string();
        if status.is_client_error() {
            tracing::warn!(error = %message, "Rejected request");
        } else {
            tracing::error!(error = %message, "Request failed");
        }
        (status, Json(json!({ "error": message }))).into_response()
    }
}

impl From<ServiceError> for AppError {
    fn from(inner: ServiceError) -> Self {
        Self(inner)
    }
}
