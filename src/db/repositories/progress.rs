use anyhow::{Context, Result};
use chrono::Utc;
use rusqlite::{params, OptionalExtension};

use crate::db::{
    connection::Database,
    helpers::{to_i64, to_u64},
};

const TOTAL_COMPLETED_KEY: &str = "totalChallengesCompleted";

impl Database {
    /// Lifetime number of completed challenges; 0 when never written.
    pub async fn load_total_completed(&self) -> Result<u64> {
        self.execute(|conn| {
            let value: Option<i64> = conn
                .query_row(
                    "SELECT value FROM challenge_progress WHERE key = ?1",
                    params![TOTAL_COMPLETED_KEY],
                    |row| row.get(0),
                )
                .optional()
                .context("failed to read challenge progress")?;

            value.map_or(Ok(0), |raw| to_u64(raw, TOTAL_COMPLETED_KEY))
        })
        .await
    }

    /// Never lowers the stored total.
    pub async fn save_total_completed(&self, total: u64) -> Result<()> {
        self.execute(move |conn| {
            conn.execute(
                "INSERT INTO challenge_progress (key, value, updated_at)
                 VALUES (?1, ?2, ?3)
                 ON CONFLICT(key) DO UPDATE
                 SET value = MAX(value, excluded.value), updated_at = excluded.updated_at",
                params![TOTAL_COMPLETED_KEY, to_i64(total)?, Utc::now().to_rfc3339()],
            )
            .context("failed to write challenge progress")?;
            Ok(())
        })
        .await
    }
}
