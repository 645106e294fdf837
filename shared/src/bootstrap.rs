//! First-run initialization: schema, default credential, sample data.

use chrono::Utc;
use tracing::info;

use crate::{db, password, Config, Result, Store};

/// Username of the default admin credential.
pub const ADMIN_USERNAME: &str = "admin";

/// Marker recorded once the sample events have been inserted.
const SAMPLE_EVENTS_SEED: &str = "sample-events-v1";

/// Sample events inserted on first run.
const SAMPLE_EVENTS: [(&str, &str, &str); 6] = [
    ("New Year Celebration", "2025-01-01", "Welcome 2025!"),
    ("Team Meeting", "2025-01-15", "Monthly team sync"),
    ("Product Launch", "2025-02-01", "Launch new features"),
    ("Valentine's Day", "2025-02-14", "Day of love"),
    ("Spring Conference", "2025-03-20", "Annual spring conference"),
    ("Earth Day", "2025-04-22", "Environmental awareness day"),
];

/// Ensure the schema, the default admin credential, and the sample
/// events exist.
///
/// Safe to run on every start. The sample batch is keyed by a seed
/// marker rather than table emptiness, so samples an admin has deleted
/// stay deleted across restarts.
pub async fn bootstrap(store: &Store, config: &Config) -> Result<()> {
    db::init_schema(store.pool()).await?;

    if store
        .get_credential_by_username(ADMIN_USERNAME)
        .await?
        .is_none()
    {
        let password_hash = password::hash_password(&config.admin_password).await?;
        store
            .insert_credential_if_absent(ADMIN_USERNAME, &password_hash)
            .await?;
        info!(username = ADMIN_USERNAME, "Created default admin credential");
    }

    if seed_applied(store, SAMPLE_EVENTS_SEED).await? {
        return Ok(());
    }

    for (title, date, description) in SAMPLE_EVENTS {
        store.insert_event(title, date, description).await?;
    }
    mark_seed_applied(store, SAMPLE_EVENTS_SEED).await?;
    info!(seed = SAMPLE_EVENTS_SEED, "Inserted sample events");

    Ok(())
}

async fn seed_applied(store: &Store, name: &str) -> Result<bool> {
    let row: Option<(String,)> = sqlx::query_as("SELECT name FROM seed_markers WHERE name = ?")
        .bind(name)
        .fetch_optional(store.pool())
        .await?;

    Ok(row.is_some())
}

async fn mark_seed_applied(store: &Store, name: &str) -> Result<()> {
    sqlx::query("INSERT OR IGNORE INTO seed_markers (name, applied_at) VALUES (?, ?)")
        .bind(name)
        .bind(Utc::now())
        .execute(store.pool())
        .await?;

    Ok(())
}
