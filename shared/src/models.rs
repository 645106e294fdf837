//! Shared data models.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// One calendar entry.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: i64,
    pub title: String,
    /// Opaque `YYYY-MM-DD` string; compared lexicographically, never
    /// parsed or shifted between time zones.
    pub date: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One admin login identity.
///
/// Deliberately not `Serialize`: the password hash must not leave the
/// store and auth layers.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Credential {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}
