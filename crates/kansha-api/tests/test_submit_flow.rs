/// End-to-end handler tests against mocked Google endpoints
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use serde_json::{Value, json};
use tower::ServiceExt;
use wiremock::matchers::{body_string_contains, header as req_header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use kansha_api::{ApiContext, router};
use kansha_core::models::{GoogleConfig, ServiceAccountKey};

const TEST_KEY: &str = include_str!("fixtures/service-account.pem");

fn test_config(server: &MockServer, private_key: &str) -> GoogleConfig {
    GoogleConfig {
        spreadsheet_id: "test-sheet".to_string(),
        sheet_range: "Messages!A2".to_string(),
        sheets_base_url: server.uri(),
        credentials: ServiceAccountKey {
            client_email: "svc@test-project.iam.gserviceaccount.com".to_string(),
            private_key: private_key.to_string(),
            token_uri: format!("{}/token", server.uri()),
        },
    }
}

fn submission_body() -> Value {
    json!({
        "from": "Alice",
        "fromMemberId": "m-001",
        "to": "Bob",
        "toMemberIds": "m-002,m-003",
        "message": "Thanks for covering the release!"
    })
}

async fn post_message(server: &MockServer, private_key: &str, body: Value) -> (StatusCode, Value) {
    let ctx = ApiContext::from_config(test_config(server, private_key)).unwrap();
    let app = router(ctx);

    let request = Request::builder()
        .method("POST")
        .uri("/v1/messages")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let parsed = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, parsed)
}

fn mount_token_success() -> Mock {
    Mock::given(method("POST"))
        .and(path("/token"))
        .and(body_string_contains("grant-type%3Ajwt-bearer"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "ya29.test-token",
            "expires_in": 3600,
            "token_type": "Bearer"
        })))
}

#[tokio::test]
async fn test_submit_appends_row_and_returns_metadata() {
    let server = MockServer::start().await;

    mount_token_success().expect(1).mount(&server).await;

    Mock::given(method("POST"))
        .and(path("/v4/spreadsheets/test-sheet/values/Messages!A2:append"))
        .and(req_header("authorization", "Bearer ya29.test-token"))
        .and(body_string_contains("Thanks for covering the release!"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "spreadsheetId": "test-sheet",
            "tableRange": "Messages!A1:F1",
            "updates": {
                "spreadsheetId": "test-sheet",
                "updatedRange": "Messages!A2:F2",
                "updatedRows": 1,
                "updatedColumns": 6,
                "updatedCells": 6
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (status, body) = post_message(&server, TEST_KEY, submission_body()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["error"], Value::Null);
    assert_eq!(body["data"]["updates"]["updatedRange"], "Messages!A2:F2");
    assert_eq!(body["data"]["updates"]["updatedRows"], 1);
}

#[tokio::test]
async fn test_token_failure_skips_append() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/token"))
        .respond_with(
            ResponseTemplate::new(500).set_body_string(r#"{"error":"internal_failure"}"#),
        )
        .expect(1)
        .mount(&server)
        .await;

    // The sheets endpoint must never be called when the exchange fails
    Mock::given(method("POST"))
        .and(path("/v4/spreadsheets/test-sheet/values/Messages!A2:append"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let (status, body) = post_message(&server, TEST_KEY, submission_body()).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["data"], Value::Null);
    let error = body["error"].as_str().unwrap();
    assert!(error.contains("500"));
    assert!(error.contains("internal_failure"));
}

#[tokio::test]
async fn test_invalid_private_key_never_reaches_google() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let (status, body) = post_message(&server, "not a PEM key", submission_body()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["data"], Value::Null);
    assert!(body["error"].as_str().unwrap().contains("Invalid private key"));
}

#[tokio::test]
async fn test_sheets_failure_reported_to_caller() {
    let server = MockServer::start().await;

    mount_token_success().mount(&server).await;

    Mock::given(method("POST"))
        .and(path("/v4/spreadsheets/test-sheet/values/Messages!A2:append"))
        .respond_with(ResponseTemplate::new(403).set_body_string(
            r#"{"error":{"code":403,"message":"The caller does not have permission"}}"#,
        ))
        .expect(1)
        .mount(&server)
        .await;

    let (status, body) = post_message(&server, TEST_KEY, submission_body()).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    let error = body["error"].as_str().unwrap();
    assert!(error.contains("403"));
    assert!(error.contains("does not have permission"));
}

#[tokio::test]
async fn test_empty_fields_rejected_before_token_exchange() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let mut body = submission_body();
    body["message"] = json!("");
    let (status, body) = post_message(&server, TEST_KEY, body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["data"], Value::Null);
    assert!(body["error"].as_str().unwrap().contains("required"));
}

#[tokio::test]
async fn test_missing_fields_rejected_by_extractor() {
    let server = MockServer::start().await;

    let mut body = submission_body();
    body.as_object_mut().unwrap().remove("message");
    let (status, _body) = post_message(&server, TEST_KEY, body).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_health_reports_credential_status() {
    let server = MockServer::start().await;

    let ctx = ApiContext::from_config(test_config(&server, TEST_KEY)).unwrap();
    let response = router(ctx)
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/v1/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["checks"]["credentials"], "ok");
}

#[tokio::test]
async fn test_health_degraded_on_bad_key() {
    let server = MockServer::start().await;

    let ctx = ApiContext::from_config(test_config(&server, "garbage")).unwrap();
    let response = router(ctx)
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/v1/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["checks"]["credentials"], "error");
}
