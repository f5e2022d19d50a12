//! HTTP handlers mapping verb+path to service calls.

use axum::extract::{OriginalUri, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;

use crate::constants;
use crate::dto::{CustomerDto, ResponseDto};
use crate::error::{self, AccountsError};
use crate::state::AppState;
use crate::validation;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MobileNumberParam {
    #[serde(default)]
    pub mobile_number: String,
}

fn mobile_number_fault() -> AccountsError {
    AccountsError::Validation(vec!["Mobile number must be 10 digits".to_string()])
}

/// POST /api/v1/accounts/create
pub async fn create_account(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    Json(payload): Json<CustomerDto>,
) -> Response {
    let result = validation::validate_customer(&payload);
    if !result.is_valid {
        return error::error_response(uri.path(), &AccountsError::Validation(result.errors));
    }

    match state.service.create_account(&payload).await {
        Ok(()) => (
            StatusCode::CREATED,
            Json(ResponseDto::new(constants::STATUS_201, constants::MESSAGE_201)),
        )
            .into_response(),
        Err(err) => error::error_response(uri.path(), &err),
    }
}

/// GET /api/v1/accounts/fetch?mobileNumber=
pub async fn fetch_account(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    Query(params): Query<MobileNumberParam>,
) -> Response {
    if !validation::validate_mobile_number(&params.mobile_number) {
        return error::error_response(uri.path(), &mobile_number_fault());
    }

    match state.service.fetch_account(&params.mobile_number).await {
        Ok(dto) => (StatusCode::OK, Json(dto)).into_response(),
        Err(err) => error::error_response(uri.path(), &err),
    }
}

/// PUT /api/v1/accounts/update
pub async fn update_account(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    Json(payload): Json<CustomerDto>,
) -> Response {
    let result = validation::validate_customer(&payload);
    if !result.is_valid {
        return error::error_response(uri.path(), &AccountsError::Validation(result.errors));
    }

    match state.service.update_account(&payload).await {
        Ok(true) => (
            StatusCode::OK,
            Json(ResponseDto::new(constants::STATUS_200, constants::MESSAGE_200)),
        )
            .into_response(),
        Ok(false) => (
            StatusCode::EXPECTATION_FAILED,
            Json(ResponseDto::new(
                constants::STATUS_417,
                constants::MESSAGE_417_UPDATE,
            )),
        )
            .into_response(),
        Err(err) => error::error_response(uri.path(), &err),
    }
}

/// DELETE /api/v1/accounts/delete?mobileNumber=
pub async fn delete_account(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    Query(params): Query<MobileNumberParam>,
) -> Response {
    if !validation::validate_mobile_number(&params.mobile_number) {
        return error::error_response(uri.path(), &mobile_number_fault());
    }

    match state.service.delete_account(&params.mobile_number).await {
        Ok(true) => (
            StatusCode::OK,
            Json(ResponseDto::new(constants::STATUS_200, constants::MESSAGE_200)),
        )
            .into_response(),
        Ok(false) => (
            StatusCode::EXPECTATION_FAILED,
            Json(ResponseDto::new(
                constants::STATUS_417,
                constants::MESSAGE_417_DELETE,
            )),
        )
            .into_response(),
        Err(err) => error::error_response(uri.path(), &err),
    }
}

/// GET /api/v1/accounts/build-info
pub async fn build_info() -> impl IntoResponse {
    env!("CARGO_PKG_VERSION")
}

/// GET /api/v1/accounts/env-info
pub async fn env_info() -> impl IntoResponse {
    let hostname = std::env::var("HOSTNAME").unwrap_or_else(|_| "unknown".to_string());
    format!("{} ({})", std::env::consts::OS, hostname)
}

/// GET /api/v1/accounts/contact-info
pub async fn contact_info(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.contact.clone())
}
