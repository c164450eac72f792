use std::env;

use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value as JsonValue};
use tower::ServiceExt;

// Config is process-global; every test pins the same mock-provider
// environment, so initialization order between tests does not matter.
fn test_app() -> Router {
    env::set_var("QUIZ_PROVIDER", "mock");
    env::set_var("PORT", "0");
    let _ = stuttee_backend::config::init_config();
    stuttee_backend::routes::router(stuttee_backend::AppState::new())
}

async fn send_json(app: Router, method: Method, uri: &str, body: JsonValue) -> (StatusCode, JsonValue) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(JsonValue::Null);
    (status, value)
}

#[tokio::test]
async fn health_reports_service_and_model() {
    let request = Request::builder()
        .method(Method::GET)
        .uri("/")
        .body(Body::empty())
        .unwrap();
    let response = test_app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: JsonValue = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], json!("ok"));
    assert_eq!(body["service"], json!("Stuttee backend"));
    assert_eq!(body["model"], json!("mock"));
}

#[tokio::test]
async fn strict_endpoint_rejects_blank_text() {
    let (status, _) = send_json(
        test_app(),
        Method::POST,
        "/api/generate-quiz",
        json!({"text": "   "}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send_json(test_app(), Method::POST, "/api/generate-quiz", json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn strict_endpoint_requires_a_live_provider() {
    let (status, body) = send_json(
        test_app(),
        Method::POST,
        "/api/generate-quiz",
        json!({"text": "광합성은 빛 에너지를 화학 에너지로 전환한다."}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn generate_degrades_to_mock_and_respects_the_invariants() {
    let (status, body) = send_json(
        test_app(),
        Method::POST,
        "/generate",
        json!({
            "text": "Photosynthesis converts light into chemical energy.",
            "level": "easy",
            "count": 3,
            "type": "mixed"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["meta"]["mode"], json!("mock"));
    assert_eq!(body["meta"]["source"], json!("mock"));
    assert_eq!(body["meta"]["level"], json!("easy"));
    assert_eq!(body["meta"]["type"], json!("mixed"));

    let items = body["items"].as_array().unwrap();
    assert_eq!(items.len(), 3);

    // mixed alternates starting with multiple-choice
    assert_eq!(items[0]["type"], json!("multiple-choice"));
    assert_eq!(items[1]["type"], json!("short-answer"));
    assert_eq!(items[2]["type"], json!("multiple-choice"));

    for (idx, item) in items.iter().enumerate() {
        assert_eq!(item["id"], json!(idx + 1));
        if item["type"] == json!("multiple-choice") {
            let options = item["options"].as_array().unwrap();
            assert_eq!(options.len(), 4);
            let answer = item["answer"].as_str().unwrap();
            assert!(options.iter().any(|opt| opt.as_str() == Some(answer)));
        } else {
            assert!(item["options"].is_null());
        }
    }
}

#[tokio::test]
async fn generate_clamps_the_question_count() {
    // mock-provider deployments cap at 50
    let (status, body) = send_json(
        test_app(),
        Method::POST,
        "/generate",
        json!({"count": 1000, "text": "주제"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["items"].as_array().unwrap().len(), 50);
    assert_eq!(body["meta"]["count"], json!(50));

    let (_, body) = send_json(
        test_app(),
        Method::POST,
        "/generate",
        json!({"count": 0, "text": "주제"}),
    )
    .await;
    assert_eq!(body["items"].as_array().unwrap().len(), 1);

    let (_, body) = send_json(
        test_app(),
        Method::POST,
        "/generate",
        json!({"count": -7, "text": "주제"}),
    )
    .await;
    assert_eq!(body["items"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn generate_defaults_unknown_level_and_type() {
    let (status, body) = send_json(
        test_app(),
        Method::POST,
        "/generate",
        json!({"level": "extreme", "type": "essay", "count": 2, "text": "주제"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["meta"]["level"], json!("medium"));
    assert_eq!(body["meta"]["type"], json!("multiple-choice"));
}

#[tokio::test]
async fn generate_works_with_an_empty_body() {
    let (status, body) = send_json(test_app(), Method::POST, "/generate", json!({})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["meta"]["mode"], json!("mock"));
    assert_eq!(body["items"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn translate_rejects_missing_or_non_array_items() {
    let (status, _) = send_json(test_app(), Method::POST, "/translate", json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send_json(
        test_app(),
        Method::POST,
        "/translate",
        json!({"items": "not an array"}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send_json(test_app(), Method::POST, "/translate", json!({"items": []})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn translate_degrades_to_tagged_mock_output() {
    let items = json!([
        {
            "id": 1,
            "question": "물의 화학식은?",
            "options": ["H2O", "CO2", "O2", "N2"],
            "answer": "H2O",
            "explanation": "물 분자는 H2O이다.",
            "type": "multiple-choice"
        },
        {
            "id": 2,
            "question": "요약하시오",
            "options": null,
            "answer": "핵심 개념",
            "explanation": "해설",
            "type": "short-answer"
        }
    ]);

    let (status, body) = send_json(
        test_app(),
        Method::POST,
        "/translate",
        json!({"items": items, "targetLang": "ja"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["meta"]["mode"], json!("mock"));
    assert_eq!(body["meta"]["targetLang"], json!("ja"));
    assert_eq!(body["meta"]["count"], json!(2));

    let out = body["items"].as_array().unwrap();
    assert_eq!(out.len(), 2);
    assert_eq!(out[0]["id"], json!(1));
    assert_eq!(out[0]["type"], json!("multiple-choice"));
    assert_eq!(out[0]["question"], json!("[ja] 물의 화학식은?"));
    assert_eq!(out[0]["answer"], json!("[ja] H2O"));
    assert_eq!(out[0]["options"][0], json!("[ja] H2O"));
    assert_eq!(out[1]["options"], JsonValue::Null);
    assert_eq!(out[1]["answer"], json!("[ja] 핵심 개념"));
}

#[tokio::test]
async fn translate_defaults_the_target_language() {
    let items = json!([{
        "id": 1,
        "question": "요약하시오",
        "options": null,
        "answer": "핵심 개념",
        "explanation": "해설",
        "type": "short-answer"
    }]);

    let (status, body) = send_json(
        test_app(),
        Method::POST,
        "/translate",
        json!({"items": items}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["meta"]["targetLang"], json!("en"));
    assert!(body["items"][0]["question"]
        .as_str()
        .unwrap()
        .starts_with("[en] "));
}
