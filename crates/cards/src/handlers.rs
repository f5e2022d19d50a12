//! HTTP handlers for the cards API.

use axum::extract::Query;
use axum::http::StatusCode;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MobileNumberParam {
    #[serde(default)]
    pub mobile_number: String,
}

/// POST /api/v1/cards/create
///
/// TODO: persist the card once the cards data model is wired up.
pub async fn create_card(Query(_params): Query<MobileNumberParam>) -> StatusCode {
    StatusCode::OK
}
