//! Integration tests for routing, middleware and the health probe.

mod common;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use common::*;
use phone_validator_api::error::ValidationResult;
use phone_validator_api::{PhoneComponents, PhoneNumberService};
use std::sync::Arc;

struct PanickingService;

impl PhoneNumberService for PanickingService {
    fn normalize(
        &self,
        _phone_number: &str,
        _region_hint: &str,
    ) -> ValidationResult<PhoneComponents> {
        panic!("numbering plan blew up");
    }
}

#[tokio::test]
async fn test_health_probe() {
    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();

    let (status, body) = send(test_router(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_panicking_service_returns_500() {
    let router = router_with_service(Arc::new(PanickingService));

    let (status, body) = send(router, get_request(Some("+34915872200"), None)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "internal server error");
}

#[tokio::test]
async fn test_request_id_is_propagated() {
    let response = send_raw(test_router(), get_request(Some("+34915872200"), None)).await;

    assert!(response.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn test_client_request_id_is_kept() {
    let request = Request::builder()
        .uri("/health")
        .header("x-request-id", "abc-123")
        .body(Body::empty())
        .unwrap();

    let response = send_raw(test_router(), request).await;

    assert_eq!(response.headers()["x-request-id"], "abc-123");
}

#[tokio::test]
async fn test_unsupported_method() {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri("/v1/phone-numbers")
        .body(Body::empty())
        .unwrap();

    let response = send_raw(test_router(), request).await;

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_unknown_route() {
    let request = Request::builder()
        .uri("/v2/phone-numbers")
        .body(Body::empty())
        .unwrap();

    let response = send_raw(test_router(), request).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
