//! Cards microservice - skeleton REST API.
//!
//! The service boots like its siblings; the card data model exists but is
//! not wired to any persistence or business logic yet.

pub mod config;
pub mod dto;
pub mod handlers;
pub mod routes;
