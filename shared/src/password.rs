//! Password hashing and verification.
//!
//! bcrypt work runs on the blocking thread pool so request tasks are
//! not stalled behind key stretching.

use crate::{Error, Result};

/// Hash a plaintext password with bcrypt at the default cost.
pub async fn hash_password(password: &str) -> Result<String> {
    let password = password.to_string();

    tokio::task::spawn_blocking(move || bcrypt::hash(password, bcrypt::DEFAULT_COST))
        .await
        .map_err(|e| Error::Internal(format!("Hashing task failed: {}", e)))?
        .map_err(|e| Error::Internal(format!("Failed to hash password: {}", e)))
}

/// Check a plaintext password against a stored bcrypt hash. bcrypt's
/// own comparison is the constant-time-safe primitive here.
pub async fn verify_password(password: &str, hash: &str) -> Result<bool> {
    let password = password.to_string();
    let hash = hash.to_string();

    tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
        .await
        .map_err(|e| Error::Internal(format!("Verification task failed: {}", e)))?
        .map_err(|e| Error::Internal(format!("Failed to verify password: {}", e)))
}
