//! Shared helpers for HTTP integration tests.

#![allow(dead_code)]

use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use phone_validator_api::{
    build_router, Config, LibPhoneNumberPlan, PhoneNumberService, PhoneValidator,
};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

/// Router backed by the real numbering plan and default configuration.
pub fn test_router() -> Router {
    router_with_service(Arc::new(PhoneValidator::new(LibPhoneNumberPlan::new())))
}

/// Router backed by an arbitrary service.
pub fn router_with_service(service: Arc<dyn PhoneNumberService>) -> Router {
    build_router(service, &Config::default())
}

/// Percent-encode the characters that matter in our query values.
pub fn encode(value: &str) -> String {
    value.replace('+', "%2B").replace(' ', "%20")
}

/// `GET /v1/phone-numbers` with the given query values.
pub fn get_request(phone_number: Option<&str>, country_code: Option<&str>) -> Request<Body> {
    let mut params = Vec::new();
    if let Some(phone) = phone_number {
        params.push(format!("phoneNumber={}", encode(phone)));
    }
    if let Some(code) = country_code {
        params.push(format!("countryCode={}", encode(code)));
    }

    Request::builder()
        .method(Method::GET)
        .uri(format!("/v1/phone-numbers?{}", params.join("&")))
        .body(Body::empty())
        .unwrap()
}

/// `GET /v1/phone-numbers` with an already-encoded query string.
pub fn get_request_with_query(query: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(format!("/v1/phone-numbers?{}", query))
        .body(Body::empty())
        .unwrap()
}

/// `POST /v1/phone-numbers` with a raw JSON body.
pub fn post_request(body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/v1/phone-numbers")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Send a request through the router and return the raw response.
pub async fn send_raw(router: Router, request: Request<Body>) -> Response {
    router.oneshot(request).await.unwrap()
}

/// Send a request and decode the JSON body.
pub async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = send_raw(router, request).await;
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}
