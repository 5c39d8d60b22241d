use sqlx::SqlitePool;
use std::sync::Arc;

use crate::clock::{Clock, SystemClock};
use crate::models::entry::{timestamp_text, Entry};

/// Persistence for journal entries.
///
/// Cloning is cheap: clones share the same pool and clock. Ids and
/// timestamps are always assigned here, never by callers.
#[derive(Clone, Debug)]
pub struct EntryStore {
    pool: SqlitePool,
    clock: Arc<dyn Clock>,
}

impl EntryStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self::with_clock(pool, Arc::new(SystemClock))
    }

    pub fn with_clock(pool: SqlitePool, clock: Arc<dyn Clock>) -> Self {
        Self { pool, clock }
    }

    /// Insert a new entry. Callers are expected to have checked that both
    /// fields are non-empty.
    pub async fn create(&self, content: &str, feeling: &str) -> Result<Entry, sqlx::Error> {
        let timestamp = timestamp_text(self.clock.now());

        let entry: Entry = sqlx::query_as(
            r#"
            INSERT INTO entries (content, feeling, timestamp)
            VALUES (?, ?, ?)
            RETURNING id, content, feeling, timestamp
            "#,
        )
        .bind(content)
        .bind(feeling)
        .bind(&timestamp)
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!(id = entry.id, feeling = %entry.feeling, "entry created");
        Ok(entry)
    }

    /// Every entry, newest first.
    pub async fn list_all(&self) -> Result<Vec<Entry>, sqlx::Error> {
        sqlx::query_as(
            r#"
            SELECT id, content, feeling, timestamp
            FROM entries
            ORDER BY timestamp DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
    }

    /// Entries whose feeling is exactly `feeling` (case-sensitive), newest first.
    pub async fn list_by_feeling(&self, feeling: &str) -> Result<Vec<Entry>, sqlx::Error> {
        sqlx::query_as(
            r#"
            SELECT id, content, feeling, timestamp
            FROM entries
            WHERE feeling = ?
            ORDER BY timestamp DESC, id DESC
            "#,
        )
        .bind(feeling)
        .fetch_all(&self.pool)
        .await
    }

    /// Each feeling present in storage once, ascending.
    pub async fn distinct_feelings(&self) -> Result<Vec<String>, sqlx::Error> {
        let rows: Vec<(String,)> =
            sqlx::query_as("SELECT DISTINCT feeling FROM entries ORDER BY feeling")
                .fetch_all(&self.pool)
                .await?;

        Ok(rows.into_iter().map(|(feeling,)| feeling).collect())
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}
