//! Configuration loaded from the process environment.

use std::env;

use crate::{Error, Result};

/// Signing secret used when none is configured in development.
const DEV_JWT_SECRET: &str = "insecure-dev-secret";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Port the HTTP server listens on
    pub port: u16,
    /// Path of the SQLite database file
    pub database_path: String,
    /// Secret used to sign session tokens
    pub jwt_secret: String,
    /// Password for the default admin credential created at bootstrap
    pub admin_password: String,
    /// Deployment environment name
    pub environment: String,
    /// Origin allowed by CORS; permissive when unset
    pub frontend_origin: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Fails when `JWT_SECRET` is unset outside development; a signed
    /// token must never depend on a baked-in secret in production.
    pub fn from_env() -> Result<Self> {
        let environment = env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());

        let jwt_secret = match env::var("JWT_SECRET") {
            Ok(secret) if !secret.is_empty() => secret,
            _ if environment == "development" => {
                tracing::warn!("JWT_SECRET not set, using development fallback");
                DEV_JWT_SECRET.to_string()
            }
            _ => {
                return Err(Error::Config(
                    "JWT_SECRET must be set outside development".to_string(),
                ));
            }
        };

        let port = env::var("PORT")
            .ok()
            .map(|p| p.parse::<u16>())
            .transpose()
            .map_err(|_| Error::Config("PORT must be a number".to_string()))?
            .unwrap_or(5000);

        Ok(Self {
            port,
            database_path: env::var("DATABASE_PATH").unwrap_or_else(|_| "calendar.db".to_string()),
            jwt_secret,
            admin_password: env::var("ADMIN_PASSWORD").unwrap_or_else(|_| "password".to_string()),
            environment,
            frontend_origin: env::var("FRONTEND_ORIGIN").ok(),
        })
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}
