use std::sync::Arc;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode},
};
use httpmock::{Method::GET, Method::POST, MockServer};
use newsdesk::{
    api,
    config::{Config, GenerationBackend, NewsSource},
    news,
    service::BriefingService,
};
use serde_json::{Value, json};
use tower::ServiceExt;

fn router(config: &Config) -> Router {
    let service = BriefingService::new(config).expect("service");
    api::create_router(Arc::new(service), &config.cors_origins)
}

async fn call(app: Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(body.map_or_else(Body::empty, |value| Body::from(value.to_string())))
        .expect("request");
    let response = app.oneshot(request).await.expect("router response");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body bytes");
    (status, serde_json::from_slice(&bytes).expect("json body"))
}

#[tokio::test]
async fn root_describes_capabilities() {
    let (status, body) = call(router(&Config::default()), Method::GET, "/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["endpoints"].as_array().map(Vec::len), Some(3));
}

#[tokio::test]
async fn default_news_is_the_mock_list_in_order() {
    let app = router(&Config::default());
    let (status, body) = call(app.clone(), Method::GET, "/api/news", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::to_value(news::mock_news()).expect("json"));

    let (_, again) = call(app, Method::GET, "/api/news", None).await;
    assert_eq!(body, again);
}

#[tokio::test]
async fn rule_based_summary_scenario() {
    let app = router(&Config::default());
    let input = json!({ "text": "Cats are mammals. They have fur. They purr." });

    let (status, first) = call(
        app.clone(),
        Method::POST,
        "/api/summarize",
        Some(input.clone()),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first, json!({ "summary": "Cats are mammals. They have fur." }));

    let (_, second) = call(app, Method::POST, "/api/summarize", Some(input)).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn empty_text_is_400_for_every_backend() {
    let remote = Config {
        generation_backend: GenerationBackend::HuggingFace,
        summarization_url: "http://127.0.0.1:9/unused".into(),
        quiz_url: "http://127.0.0.1:9/unused".into(),
        ..Config::default()
    };
    for config in [Config::default(), remote] {
        for uri in ["/api/summarize", "/api/quiz"] {
            let (status, body) =
                call(router(&config), Method::POST, uri, Some(json!({ "text": "" }))).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(body, json!({ "error": "No text provided" }));
        }
    }
}

#[tokio::test]
async fn rule_based_quiz_marks_counter_terrorism_topic() {
    let app = router(&Config::default());
    for _ in 0..10 {
        let (status, body) = call(
            app.clone(),
            Method::POST,
            "/api/quiz",
            Some(json!({
                "text": "Indian forces launched Operation Sindoor. Camps were targeted."
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let options = body["options"].as_array().expect("options");
        assert_eq!(options.len(), 4);
        assert!(options.contains(&json!("Counter-terrorism efforts")));
        assert!(options.contains(&body["answer"]));
    }
}

#[tokio::test]
async fn remote_backend_relays_model_output() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/summarize");
            then.status(200)
                .json_body(json!([{ "summary_text": "Model summary." }]));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/generate");
            then.status(200)
                .json_body(json!([{ "generated_text": "Which operation?\nmore" }]));
        })
        .await;

    let config = Config {
        generation_backend: GenerationBackend::HuggingFace,
        hf_api_token: Some("hf_test".into()),
        summarization_url: server.url("/summarize"),
        quiz_url: server.url("/generate"),
        ..Config::default()
    };
    let app = router(&config);

    let input = json!({ "text": "Some text." });
    let (status, body) = call(
        app.clone(),
        Method::POST,
        "/api/summarize",
        Some(input.clone()),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "summary": "Model summary." }));

    let (status, body) = call(app, Method::POST, "/api/quiz", Some(input)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["question"], "Which operation?");
    assert_eq!(body["answer"], "Option 1");
}

#[tokio::test]
async fn remote_backend_failure_is_500_envelope() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/summarize");
            then.status(401).body("unauthorized");
        })
        .await;

    let config = Config {
        generation_backend: GenerationBackend::HuggingFace,
        summarization_url: server.url("/summarize"),
        quiz_url: server.url("/generate"),
        ..Config::default()
    };
    let (status, body) = call(
        router(&config),
        Method::POST,
        "/api/summarize",
        Some(json!({ "text": "Some text." })),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let message = body["error"].as_str().expect("error");
    assert!(message.starts_with("Summarization failed: "));
}

#[tokio::test]
async fn live_news_without_key_is_configuration_error() {
    let config = Config {
        news_source: NewsSource::NewsApi,
        ..Config::default()
    };
    let (status, body) = call(router(&config), Method::GET, "/api/news", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "NewsAPI key not configured" }));
}

#[tokio::test]
async fn live_news_is_fetched_from_search_endpoint() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/v2/everything")
                .query_param("apiKey", "key-1");
            then.status(200).json_body(json!({
                "articles": [{
                    "title": "Budget passed",
                    "content": null,
                    "description": "Parliament approved the budget.",
                    "source": { "name": "Daily" },
                    "publishedAt": "2025-03-01T08:00:00Z"
                }]
            }));
        })
        .await;

    let config = Config {
        news_source: NewsSource::NewsApi,
        newsapi_key: Some("key-1".into()),
        newsapi_url: server.url("/v2/everything"),
        ..Config::default()
    };
    let (status, body) = call(router(&config), Method::GET, "/api/news", None).await;

    mock.assert_async().await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([{
            "title": "Budget passed",
            "content": "Parliament approved the budget.",
            "source": "Daily",
            "date": "2025-03-01T08:00:00Z"
        }])
    );
}
