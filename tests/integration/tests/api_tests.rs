//! API Integration Tests
//!
//! These tests require a running PostgreSQL instance reachable through
//! `DATABASE_URL`. Each test returns early when it is not set.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, check_test_env, fixtures::*, TestServer,
};
use reqwest::StatusCode;
use serde_json::{json, Value};

async fn create_user(server: &TestServer) -> (CreateUserRequest, PrivateUser) {
    let request = CreateUserRequest::unique();
    let response = server.post("/users", &request).await.unwrap();
    let user: PrivateUser = assert_json(response, StatusCode::CREATED).await.unwrap();
    (request, user)
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_ping() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/ping").await.expect("Request failed");
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.text().await.unwrap(), "pong");
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["checks"]["database"], true);
}

// ============================================================================
// User Tests
// ============================================================================

#[tokio::test]
async fn test_create_and_get_user() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (request, created) = create_user(&server).await;

    assert!(created.id > 0);
    assert_eq!(created.email, request.email.to_lowercase());
    assert_eq!(created.status, "active");
    assert_eq!(created.date_created.len(), "2024-01-01 00:00:00".len());

    let response = server.get(&format!("/users/{}", created.id)).await.unwrap();
    let fetched: PrivateUser = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.first_name, created.first_name);
    assert_eq!(fetched.last_name, created.last_name);
    assert_eq!(fetched.email, created.email);
    assert_eq!(fetched.date_created, created.date_created);
}

#[tokio::test]
async fn test_public_view_hides_identity() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = CreateUserRequest::unique();
    let response = server.post_public("/users", &request).await.unwrap();
    let body: Value = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert!(body.get("email").is_none());
    assert!(body.get("password").is_none());

    let id = body["id"].as_i64().unwrap();
    let response = server.get_public(&format!("/users/{id}")).await.unwrap();
    let user: PublicUser = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(user.id, id);
    assert_eq!(user.status, "active");
    assert!(!user.date_created.is_empty());
}

#[tokio::test]
async fn test_create_user_errors() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.post_raw("/users", "{\"email\":").await.unwrap();
    let err: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(err.message, "invalid json body");
    assert_eq!(err.status, 400);
    assert_eq!(err.error, "bad_request");

    let response = server
        .post("/users", &json!({ "email": "", "password": "x" }))
        .await
        .unwrap();
    let err: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(err.message, "invalid email address");

    let (request, _) = create_user(&server).await;
    let response = server.post("/users", &request).await.unwrap();
    let err: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(
        err.message,
        format!("email {} already exists", request.email.to_lowercase())
    );
}

#[tokio::test]
async fn test_get_user_errors() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/users/not-a-number").await.unwrap();
    let err: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(err.message, "user id should be a number");

    let response = server.get(&format!("/users/{}", i64::MAX)).await.unwrap();
    let err: ErrorBody = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(err.error, "not_found");
}

#[tokio::test]
async fn test_partial_and_full_update() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, created) = create_user(&server).await;
    let path = format!("/users/{}", created.id);

    let response = server
        .patch(&path, &json!({ "first_name": "Patched" }))
        .await
        .unwrap();
    let patched: PrivateUser = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(patched.first_name, "Patched");
    assert_eq!(patched.last_name, created.last_name);
    assert_eq!(patched.email, created.email);

    let response = server
        .put(&path, &json!({ "first_name": "Replaced", "email": created.email }))
        .await
        .unwrap();
    let replaced: PrivateUser = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(replaced.first_name, "Replaced");
    assert_eq!(replaced.last_name, "");

    let response = server.get(&path).await.unwrap();
    let fetched: PrivateUser = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched.first_name, "Replaced");
    assert_eq!(fetched.last_name, "");
    assert_eq!(fetched.date_created, created.date_created);
    assert_eq!(fetched.status, "active");
}

#[tokio::test]
async fn test_delete_user() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, created) = create_user(&server).await;
    let path = format!("/users/{}", created.id);

    let response = server.delete(&path).await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body, json!({ "status": "deleted" }));

    let response = server.get(&path).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Deleting again still succeeds
    let response = server.delete(&path).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_search_by_status() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, first) = create_user(&server).await;
    let (_, second) = create_user(&server).await;

    let response = server.get("/users?status=active").await.unwrap();
    let users: Vec<PrivateUser> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(users.iter().all(|u| u.status == "active"));
    assert!(users.windows(2).all(|pair| pair[0].id < pair[1].id));

    let ids: Vec<i64> = users.iter().map(|u| u.id).collect();
    assert!(ids.contains(&first.id));
    assert!(ids.contains(&second.id));

    let response = server
        .get("/users?status=no_such_status_value")
        .await
        .unwrap();
    let err: ErrorBody = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(err.message, "no users matching status no_such_status_value");
}
