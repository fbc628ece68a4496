//! HTTP middleware stack for the Phone Validator API.
//!
//! Layers are listed outermost first: the first layer sees the request first
//! on the way in and the response last on the way out.

use super::responses::internal_error;
use crate::config::Config;
use axum::http::header::HeaderName;
use axum::http::{Method, StatusCode};
use axum::response::Response;
use axum::Router;
use std::any::Any;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{AllowOrigin, Any as AnyHeader, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

/// Wraps every route of `router` in the HTTP middleware stack.
///
/// **Middleware ordering (outermost to innermost):**
/// 1. `SetRequestId` -- assigns a UUID `X-Request-Id` to every request
/// 2. `Tracing` -- request/response spans
/// 3. `CORS` -- configured origins, GET and POST only
/// 4. `CatchPanic` -- a panicking handler becomes a 500 instead of a dropped connection
/// 5. `Timeout` -- 408 once the configured request timeout elapses
/// 6. `PropagateRequestId` -- copies `X-Request-Id` onto the response
pub fn apply_http_layers<S>(router: Router<S>, config: &Config) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    let x_request_id = HeaderName::from_static("x-request-id");

    router.layer(
        ServiceBuilder::new()
            .layer(SetRequestIdLayer::new(x_request_id.clone(), MakeRequestUuid))
            .layer(TraceLayer::new_for_http())
            .layer(build_cors_layer(&config.cors_origins))
            .layer(CatchPanicLayer::custom(handle_panic))
            .layer(TimeoutLayer::with_status_code(
                StatusCode::REQUEST_TIMEOUT,
                config.request_timeout(),
            ))
            .layer(PropagateRequestIdLayer::new(x_request_id)),
    )
}

/// Builds the CORS layer from the configured list of allowed origins.
///
/// A wildcard `"*"` in the origins list allows any origin. Otherwise,
/// each origin string is parsed and added to an explicit allowlist.
fn build_cors_layer(origins: &[String]) -> CorsLayer {
    let allow_origin = if origins.iter().any(|o| o == "*") {
        AllowOrigin::any()
    } else {
        let parsed: Vec<_> = origins.iter().filter_map(|o| o.parse().ok()).collect();
        AllowOrigin::list(parsed)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(AnyHeader)
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let details = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        *s
    } else {
        "Unknown panic message"
    };

    tracing::error!("Request handler panicked: {}", details);
    internal_error()
}
