//! Shared library for the calendar service.
//!
//! This crate provides the record store, authentication, configuration,
//! and error types used by the HTTP API.

pub mod auth;
pub mod bootstrap;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod password;
pub mod store;

pub use auth::{issue_token, verify_token, AuthenticatedUser, TokenClaims};
pub use config::Config;
pub use error::{Error, Result};
pub use models::{Credential, Event};
pub use store::Store;
