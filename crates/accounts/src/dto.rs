//! Transfer shapes exposed at the API boundary.
//!
//! DTOs mirror the entities minus internal identifiers and audit fields.

use serde::{Deserialize, Serialize};

use crate::model::{Account, AccountType, Customer};

/// Public shape of a customer and the account bound to it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDto {
    pub name: String,
    pub email: String,
    pub mobile_number: String,
    /// Absent on create requests; populated on fetch responses and
    /// required for updates.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account: Option<AccountDto>,
}

/// Public shape of an account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountDto {
    pub account_number: i64,
    pub account_type: AccountType,
    pub branch_address: String,
}

impl CustomerDto {
    /// Map a persisted customer/account pair into the response shape.
    pub fn from_entities(customer: &Customer, account: &Account) -> Self {
        Self {
            name: customer.name.clone(),
            email: customer.email.clone(),
            mobile_number: customer.mobile_number.clone(),
            account: Some(AccountDto {
                account_number: account.account_number,
                account_type: account.account_type,
                branch_address: account.branch_address.clone(),
            }),
        }
    }
}

/// Fixed success envelope for create/update/delete responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseDto {
    pub status_code: String,
    pub status_msg: String,
}

impl ResponseDto {
    pub fn new(status_code: &str, status_msg: &str) -> Self {
        Self {
            status_code: status_code.to_string(),
            status_msg: status_msg.to_string(),
        }
    }
}

/// Static contact object served by the contact-info endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    pub message: String,
    pub contact_name: String,
    pub contact_email: String,
}
