//! Record store for credentials and events.

use chrono::Utc;
use sqlx::SqlitePool;

use crate::models::{Credential, Event};
use crate::{Error, Result};

/// Durable keyed storage for credentials and events.
///
/// Constructed once at startup around the connection pool and handed
/// to the API layer; tests build their own over an in-memory pool.
/// Every read goes to the database, so it reflects the latest
/// committed write.
#[derive(Clone)]
pub struct Store {
    pool: SqlitePool,
}

impl Store {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Look up a credential by its exact username.
    pub async fn get_credential_by_username(&self, username: &str) -> Result<Option<Credential>> {
        let credential = sqlx::query_as::<_, Credential>(
            "SELECT id, username, password_hash, created_at FROM users WHERE username = ?",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(credential)
    }

    /// Insert a credential unless the username is already taken.
    /// Idempotent; bootstrap relies on this.
    pub async fn insert_credential_if_absent(
        &self,
        username: &str,
        password_hash: &str,
    ) -> Result<()> {
        sqlx::query(
            "INSERT OR IGNORE INTO users (username, password_hash, created_at) VALUES (?, ?, ?)",
        )
        .bind(username)
        .bind(password_hash)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// All events, date ascending, insertion order breaking ties.
    pub async fn list_events(&self) -> Result<Vec<Event>> {
        let events = sqlx::query_as::<_, Event>(
            "SELECT id, title, date, description, created_at, updated_at \
             FROM events ORDER BY date ASC, id ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(events)
    }

    /// Events with `start <= date <= end`, compared as strings,
    /// inclusive on both ends. An inverted range yields an empty list
    /// rather than an error; missing bounds are a validation failure.
    pub async fn list_events_in_range(&self, start: &str, end: &str) -> Result<Vec<Event>> {
        if start.is_empty() || end.is_empty() {
            return Err(Error::Validation(
                "Start date and end date required".to_string(),
            ));
        }

        let events = sqlx::query_as::<_, Event>(
            "SELECT id, title, date, description, created_at, updated_at \
             FROM events WHERE date BETWEEN ? AND ? ORDER BY date ASC, id ASC",
        )
        .bind(start)
        .bind(end)
        .fetch_all(&self.pool)
        .await?;

        Ok(events)
    }

    /// Insert an event and return it with its assigned id.
    ///
    /// The date is stored as given; nothing here checks calendar
    /// validity beyond it being non-empty.
    pub async fn insert_event(&self, title: &str, date: &str, description: &str) -> Result<Event> {
        if title.is_empty() || date.is_empty() {
            return Err(Error::Validation("Title and date required".to_string()));
        }

        let now = Utc::now();
        let event = sqlx::query_as::<_, Event>(
            "INSERT INTO events (title, date, description, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?) \
             RETURNING id, title, date, description, created_at, updated_at",
        )
        .bind(title)
        .bind(date)
        .bind(description)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(event)
    }

    /// Overwrite an event's fields and refresh `updated_at`. The id
    /// and `created_at` never change.
    pub async fn update_event(
        &self,
        id: i64,
        title: &str,
        date: &str,
        description: &str,
    ) -> Result<()> {
        if title.is_empty() || date.is_empty() {
            return Err(Error::Validation("Title and date required".to_string()));
        }

        let result = sqlx::query(
            "UPDATE events SET title = ?, date = ?, description = ?, updated_at = ? WHERE id = ?",
        )
        .bind(title)
        .bind(date)
        .bind(description)
        .bind(Utc::now())
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(Error::NotFound("Event not found".to_string()));
        }

        Ok(())
    }

    /// Delete an event permanently.
    pub async fn delete_event(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM events WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(Error::NotFound("Event not found".to_string()));
        }

        Ok(())
    }
}
