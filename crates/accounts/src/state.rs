//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::dto::ContactInfo;
use crate::service::AccountsService;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<AccountsService>,
    pub contact: ContactInfo,
}

impl AppState {
    pub fn new(service: AccountsService, config: &AppConfig) -> Self {
        Self {
            service: Arc::new(service),
            contact: config.contact_info(),
        }
    }
}
