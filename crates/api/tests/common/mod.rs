#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use petadopt_api::config::ServerConfig;
use petadopt_api::router::build_app_router;
use petadopt_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
    }
}

/// Build the full application router, middleware included, on `pool`.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

async fn send(app: Router, method: Method, uri: &str, body: Option<serde_json::Value>) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(serde_json::to_vec(&json).unwrap())
        }
        None => Body::empty(),
    };
    app.oneshot(builder.body(body).unwrap()).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, json: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(json)).await
}

pub async fn put_json(app: Router, uri: &str, json: serde_json::Value) -> Response<Body> {
    send(app, Method::PUT, uri, Some(json)).await
}

pub async fn patch_json(app: Router, uri: &str, json: serde_json::Value) -> Response<Body> {
    send(app, Method::PATCH, uri, Some(json)).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

pub fn user_body(email: &str) -> serde_json::Value {
    serde_json::json!({
        "email": email,
        "role": "standard",
        "first_name": "Ana",
        "last_name": "García",
        "phone_number": "555-0100",
        "birth_date": "1990-05-17",
    })
}

pub fn facility_body(name: &str) -> serde_json::Value {
    serde_json::json!({
        "name": name,
        "address": "Calle Mayor 1",
        "description": "Rescue centre",
        "capacity": 20,
        "phone_number": "555-0199",
    })
}

pub fn animal_body(name: &str) -> serde_json::Value {
    serde_json::json!({
        "name": name,
        "age": 3,
        "gender": "female",
        "breed": "Mixed",
        "description": "Calm and friendly",
        "status": "available",
        "location": "Madrid",
        "type_key": "dog",
        "size_key": "small",
    })
}

/// POST `body` to `uri` and return the created id as a string.
pub async fn create(pool: &PgPool, uri: &str, body: serde_json::Value) -> String {
    let response = post_json(build_test_app(pool.clone()), uri, body).await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED, "POST {uri}");
    let json = body_json(response).await;
    match &json["id"] {
        serde_json::Value::String(id) => id.clone(),
        other => other.to_string(),
    }
}
