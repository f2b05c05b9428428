//! Shared helpers for the HTTP tests
#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use http::{Method, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use grubdash_server::{Config, MemoryDb, ServerState, build_app};

/// Seeded dish ids
pub const DISH_ID: &str = "3c637d011d844ebab1205fef8a7e36ea";
/// Seeded orders, one per interesting status
pub const OUT_FOR_DELIVERY_ORDER_ID: &str = "f6069a542257054114138301947672ba";
pub const DELIVERED_ORDER_ID: &str = "5a887d326e83d3c5bdcbee398ea32aff";
pub const PENDING_ORDER_ID: &str = "2c24f52bd4bd2e1f0b9d5a3c4e7f8a61";

/// Test app over the embedded seed data, plus its state for inspection
pub fn test_app() -> (Router, ServerState) {
    let db = MemoryDb::seeded().expect("seed data");
    let state = ServerState::new(Config::with_overrides(0, true), db);
    (build_app(state.clone()), state)
}

/// Test app over empty collections
pub fn empty_app() -> Router {
    let state = ServerState::new(Config::with_overrides(0, false), MemoryDb::new());
    build_app(state)
}

pub struct TestResponse {
    pub status: StatusCode,
    pub text: String,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.text).expect("json body")
    }

    pub fn data(&self) -> Value {
        self.json()["data"].clone()
    }

    pub fn error(&self) -> String {
        self.json()["error"].as_str().expect("error message").to_string()
    }
}

/// Send one request through the full middleware stack
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> TestResponse {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(value) => {
            builder = builder.header("content-type", "application/json");
            Body::from(value.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    TestResponse {
        status,
        text: String::from_utf8(bytes.to_vec()).unwrap(),
    }
}

pub async fn get(app: &Router, uri: &str) -> TestResponse {
    send(app, Method::GET, uri, None).await
}

pub async fn post(app: &Router, uri: &str, body: Value) -> TestResponse {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put(app: &Router, uri: &str, body: Value) -> TestResponse {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn delete(app: &Router, uri: &str) -> TestResponse {
    send(app, Method::DELETE, uri, None).await
}
