//! Request handlers for the phone-number endpoints.
//!
//! Both endpoints share one flow: pull `phoneNumber`/`countryCode` out of the
//! request, run them through the [`PhoneNumberService`], and map the outcome
//! to a JSON response.

use crate::domain::PhoneComponents;
use crate::error::ApiError;
use crate::services::PhoneNumberService;
use axum::body::Bytes;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::debug;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<dyn PhoneNumberService>,
}

/// Query string of `GET /v1/phone-numbers`.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct PhoneNumberQuery {
    pub phone_number: Option<String>,
    pub country_code: Option<String>,
}

impl PhoneNumberQuery {
    /// Collect the known keys from decoded query pairs.
    ///
    /// A repeated key keeps its first value; unknown keys are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "phoneNumber" => &mut query.phone_number,
                "countryCode" => &mut query.country_code,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        query
    }
}

/// JSON body of `POST /v1/phone-numbers`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhoneNumberRequest {
    pub phone_number: String,
    #[serde(default)]
    pub country_code: Option<String>,
}

/// `GET /v1/phone-numbers?phoneNumber=...&countryCode=...`
pub async fn get_phone_number(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<PhoneComponents>, ApiError> {
    let Query(pairs) = query.map_err(|rejection| {
        debug!("Rejected query string: {}", rejection);
        ApiError::MissingParameter
    })?;
    let query = PhoneNumberQuery::from_pairs(pairs);

    let phone_number = query
        .phone_number
        .filter(|phone| !phone.is_empty())
        .ok_or(ApiError::MissingParameter)?;

    normalize(&state, phone_number, query.country_code.unwrap_or_default())
}

/// `POST /v1/phone-numbers` with `{"phoneNumber": ..., "countryCode": ...}`.
///
/// The body is read as JSON whatever the `Content-Type` header says.
pub async fn create_phone_number(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<PhoneComponents>, ApiError> {
    let request: PhoneNumberRequest = serde_json::from_slice(&body).map_err(|e| {
        debug!("Rejected request body: {}", e);
        ApiError::InvalidInput
    })?;

    if request.phone_number.is_empty() {
        return Err(ApiError::InvalidInput);
    }

    normalize(
        &state,
        request.phone_number,
        request.country_code.unwrap_or_default(),
    )
}

/// Liveness probe: always 200 while the process is serving.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

fn normalize(
    state: &AppState,
    phone_number: String,
    country_code: String,
) -> Result<Json<PhoneComponents>, ApiError> {
    match state.service.normalize(&phone_number, &country_code) {
        Ok(components) => Ok(Json(components)),
        Err(source) => Err(ApiError::Validation {
            phone_number,
            source,
        }),
    }
}
