//! Transfer shapes for the cards API.

use serde::{Deserialize, Serialize};

/// Public shape of a card. Nothing persists or serves this yet.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardDto {
    pub mobile_number: String,
    pub card_number: String,
    pub card_type: String,
    pub card_limit: i32,
    pub amount_used: i32,
    pub card_balance: i32,
}
