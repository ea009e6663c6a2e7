use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use locustgen::server::build_router;
use tower::util::ServiceExt; // for oneshot

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body_bytes).unwrap()
}

fn post_generate(body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/generate")
        .header("Content-Type", "application/json")
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap()
}

#[tokio::test]
async fn test_health() {
    let response = build_router()
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, serde_json::json!({"status": "ok"}));
}

#[tokio::test]
async fn test_generate_returns_locustfile() {
    let request = post_generate(serde_json::json!({
        "openapi": {"paths": {"/users": {"get": {"summary": "List users"}}}},
        "host": "https://api.example.com",
        "client_type": "http",
        "user_class_name": "ApiUser",
        "task_weight": 2
    }));

    let response = build_router().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let locustfile = body["locustfile"].as_str().unwrap();
    assert!(locustfile.contains("class ApiUser(HttpUser):"));
    assert!(locustfile.contains("    @task(2)\n    def list_users(self) -> None:"));
    assert!(locustfile.contains("host = \"https://api.example.com\""));
}

#[tokio::test]
async fn test_generate_with_empty_paths() {
    let request = post_generate(serde_json::json!({
        "openapi": {"paths": {}},
        "host": "https://api.example.com"
    }));

    let response = build_router().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let locustfile = body["locustfile"].as_str().unwrap();
    assert!(locustfile.contains("class GeneratedUser(FastHttpUser):"));
    assert!(locustfile.contains("No operations were discovered"));
}

#[tokio::test]
async fn test_generate_rejects_bogus_client_type() {
    let request = post_generate(serde_json::json!({
        "openapi": {"paths": {}},
        "host": "https://api.example.com",
        "client_type": "bogus"
    }));

    let response = build_router().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    let detail = body["detail"].as_str().unwrap();
    assert!(detail.contains("bogus"), "unexpected detail: {detail}");
    assert!(body.get("locustfile").is_none());
}

#[tokio::test]
async fn test_generate_rejects_missing_host() {
    let request = post_generate(serde_json::json!({"openapi": {"paths": {}}}));

    let response = build_router().oneshot(request).await.unwrap();
    assert!(response.status().is_client_error());
}
