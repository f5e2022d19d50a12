//! Configuration loaded from environment variables.

use serde::{Deserialize, Serialize};
use std::env;

use crate::dto::ContactInfo;

/// Accounts service configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    /// Actor id stamped onto every write.
    pub audit_actor: String,
    pub contact_message: String,
    pub contact_name: String,
    pub contact_email: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            database_url: "sqlite:accounts.db".to_string(),
            audit_actor: "accounts-ms".to_string(),
            contact_message: "Welcome to the Microbank accounts microservice".to_string(),
            contact_name: "Microbank Accounts Team".to_string(),
            contact_email: "accounts@microbank.dev".to_string(),
        }
    }
}

impl AppConfig {
    /// Load config from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            host: env::var("HOST").unwrap_or(defaults.host),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            database_url: env::var("DATABASE_URL").unwrap_or(defaults.database_url),
            audit_actor: env::var("AUDIT_ACTOR").unwrap_or(defaults.audit_actor),
            contact_message: env::var("CONTACT_MESSAGE").unwrap_or(defaults.contact_message),
            contact_name: env::var("CONTACT_NAME").unwrap_or(defaults.contact_name),
            contact_email: env::var("CONTACT_EMAIL").unwrap_or(defaults.contact_email),
        }
    }

    /// Full bind address for the HTTP listener.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Static contact object served by the contact-info endpoint.
    pub fn contact_info(&self) -> ContactInfo {
        ContactInfo {
            message: self.contact_message.clone(),
            contact_name: self.contact_name.clone(),
            contact_email: self.contact_email.clone(),
        }
    }
}
