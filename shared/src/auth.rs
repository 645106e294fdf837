//! Session token issuance and verification.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::models::Credential;
use crate::{Error, Result};

/// How long an issued token stays valid. There is no revocation; a
/// token outlives credential changes for its full window.
const TOKEN_VALIDITY_DAYS: i64 = 7;

/// Claims carried by a session token.
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Credential id
    pub sub: i64,
    /// Username at issuance time
    pub username: String,
    /// Issued at (unix seconds)
    pub iat: i64,
    /// Expiration (unix seconds)
    pub exp: i64,
}

/// Verified identity attached to admin requests.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: i64,
    pub username: String,
}

impl From<TokenClaims> for AuthenticatedUser {
    fn from(claims: TokenClaims) -> Self {
        Self {
            user_id: claims.sub,
            username: claims.username,
        }
    }
}

/// Issue a signed token for a verified credential.
pub fn issue_token(credential: &Credential, secret: &str) -> Result<String> {
    let now = Utc::now();
    let claims = TokenClaims {
        sub: credential.id,
        username: credential.username.clone(),
        iat: now.timestamp(),
        exp: (now + Duration::days(TOKEN_VALIDITY_DAYS)).timestamp(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| Error::Internal(format!("Failed to sign token: {}", e)))
}

/// Verify a token's signature and expiry and return its claims.
///
/// Malformed, tampered, and expired tokens are all rejected the same
/// way; callers cannot tell them apart and neither can clients.
pub fn verify_token(token: &str, secret: &str) -> Result<TokenClaims> {
    let token = token.strip_prefix("Bearer ").unwrap_or(token);

    decode::<TokenClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| Error::Unauthorized("Invalid token".to_string()))
}
