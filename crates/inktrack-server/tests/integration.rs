use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

fn test_router(dir: &tempfile::TempDir) -> Router {
    inktrack_server::build_router(dir.path().to_path_buf()).unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn login(router: &Router) -> String {
    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/session")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"passphrase":"password"}"#))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let cookie = response
        .headers()
        .get("set-cookie")
        .unwrap()
        .to_str()
        .unwrap();
    cookie.split(';').next().unwrap().to_string()
}

async fn create_commission(router: &Router, cookie: &str, client_name: &str) -> String {
    let body = serde_json::json!({
        "client_name": client_name,
        "title": format!("{client_name} piece"),
        "category": "standard",
        "price": 1200.0,
    });
    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/commissions")
                .header("content-type", "application/json")
                .header("cookie", cookie)
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    json["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn login_with_wrong_passphrase_is_rejected() {
    let dir = tempfile::TempDir::new().unwrap();
    let router = test_router(&dir);

    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/session")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"passphrase":"hunter2"}"#))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn mutations_require_a_session() {
    let dir = tempfile::TempDir::new().unwrap();
    let router = test_router(&dir);

    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/commissions")
                .header("content-type", "application/json")
                .body(Body::from(
                    r#"{"client_name":"x","title":"y","category":"standard"}"#,
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn create_then_fetch_by_id() {
    let dir = tempfile::TempDir::new().unwrap();
    let router = test_router(&dir);
    let cookie = login(&router).await;
    let id = create_commission(&router, &cookie, "StoryLover99").await;

    // Public fetch by exact id, no session needed.
    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .uri(format!("/api/commissions/{id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["client_name"], "StoryLover99");
    assert_eq!(json["status"], "not_started");
    assert_eq!(json["owner_id"], "inkwell");
}

#[tokio::test]
async fn unknown_commission_is_404() {
    let dir = tempfile::TempDir::new().unwrap();
    let router = test_router(&dir);

    let response = router
        .oneshot(
            Request::builder()
                .uri("/api/commissions/c-doesnotexist")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn advance_and_direct_set_move_the_lifecycle() {
    let dir = tempfile::TempDir::new().unwrap();
    let router = test_router(&dir);
    let cookie = login(&router).await;
    let id = create_commission(&router, &cookie, "MomoChan").await;

    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(format!("/api/commissions/{id}/advance"))
                .header("cookie", &cookie)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "in_progress");

    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri(format!("/api/commissions/{id}/status"))
                .header("content-type", "application/json")
                .header("cookie", &cookie)
                .body(Body::from(r#"{"status":"completed"}"#))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "completed");

    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(format!("/api/commissions/{id}/revert"))
                .header("cookie", &cookie)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let json = body_json(response).await;
    assert_eq!(json["status"], "revision");
}

#[tokio::test]
async fn client_view_gates_and_searches() {
    let dir = tempfile::TempDir::new().unwrap();
    let router = test_router(&dir);
    let cookie = login(&router).await;
    create_commission(&router, &cookie, "StoryLover99").await;

    // No search text: placeholder gate, empty list, counts still present.
    let response = router
        .clone()
        .oneshot(Request::builder().uri("/api/view").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let json = body_json(response).await;
    assert_eq!(json["gate"], "awaiting_query");
    assert_eq!(json["visible"].as_array().unwrap().len(), 0);
    assert_eq!(json["counts"]["queue"], 1);

    // Case-insensitive substring search finds the record.
    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/view?search=lov")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let json = body_json(response).await;
    assert_eq!(json["gate"], "visible");
    assert_eq!(json["visible"][0]["client_name"], "StoryLover99");
}

#[tokio::test]
async fn owner_view_without_session_requires_login() {
    let dir = tempfile::TempDir::new().unwrap();
    let router = test_router(&dir);

    let response = router
        .oneshot(
            Request::builder()
                .uri("/api/view?mode=owner")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let json = body_json(response).await;
    assert_eq!(json["gate"], "login_required");
    assert_eq!(json["visible"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn owner_view_with_session_lists_without_search() {
    let dir = tempfile::TempDir::new().unwrap();
    let router = test_router(&dir);
    let cookie = login(&router).await;
    create_commission(&router, &cookie, "MomoChan").await;

    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/view?mode=owner")
                .header("cookie", &cookie)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let json = body_json(response).await;
    assert_eq!(json["gate"], "visible");
    assert_eq!(json["visible"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn delete_removes_the_record() {
    let dir = tempfile::TempDir::new().unwrap();
    let router = test_router(&dir);
    let cookie = login(&router).await;
    let id = create_commission(&router, &cookie, "Viper007").await;

    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/api/commissions/{id}"))
                .header("cookie", &cookie)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .uri(format!("/api/commissions/{id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn logout_invalidates_the_session() {
    let dir = tempfile::TempDir::new().unwrap();
    let router = test_router(&dir);
    let cookie = login(&router).await;

    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/api/session")
                .header("cookie", &cookie)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/commissions")
                .header("content-type", "application/json")
                .header("cookie", &cookie)
                .body(Body::from(
                    r#"{"client_name":"x","title":"y","category":"standard"}"#,
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn create_validation_errors_are_400() {
    let dir = tempfile::TempDir::new().unwrap();
    let router = test_router(&dir);
    let cookie = login(&router).await;

    let body = serde_json::json!({
        "client_name": "x",
        "title": "y",
        "category": "standard",
        "price": -10.0,
    });
    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/commissions")
                .header("content-type", "application/json")
                .header("cookie", &cookie)
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn assistant_degrades_to_notice_without_api_key() {
    let dir = tempfile::TempDir::new().unwrap();
    // Point the assistant at an env var that is guaranteed unset.
    let mut config = inktrack_core::config::Config::default();
    config.assistant.api_key_env = "INKTRACK_TEST_UNSET_KEY".to_string();
    config.save(dir.path()).unwrap();

    let router = test_router(&dir);
    let cookie = login(&router).await;
    let id = create_commission(&router, &cookie, "MomoChan").await;

    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(format!("/api/commissions/{id}/assistant/update"))
                .header("cookie", &cookie)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(
        json["text"],
        inktrack_server::routes::assistant::NO_KEY_NOTICE
    );
}
