//! Accounts microservice - CRUD REST API over customers and their accounts.
//!
//! Request flow: handler validates shape -> service applies the business
//! rule -> repository performs one read/write -> service maps entities back
//! into DTOs -> handler wraps the result in a response envelope.

pub mod config;
pub mod constants;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod model;
pub mod repository;
pub mod routes;
pub mod service;
pub mod state;
pub mod validation;

pub use error::{AccountsError, Result};
pub use service::AccountsService;
