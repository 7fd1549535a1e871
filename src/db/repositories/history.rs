use std::convert::TryFrom;

use anyhow::{anyhow, Context, Result};
use log::warn;
use rusqlite::{params, Row};

use crate::{
    db::{
        connection::Database,
        helpers::{parse_datetime, parse_mood},
    },
    models::MoodLogEntry,
};

fn row_to_entry(row: &Row) -> Result<MoodLogEntry> {
    let date: String = row.get("date")?;
    let mood: String = row.get("mood")?;
    let rating: i64 = row.get("rating")?;

    Ok(MoodLogEntry {
        id: row.get("id")?,
        date: parse_datetime(&date, "date")?,
        day: row.get("day")?,
        mood: parse_mood(&mood)?,
        note: row.get("note")?,
        answer: row.get("answer")?,
        rating: u8::try_from(rating).map_err(|_| anyhow!("rating {rating} out of range"))?,
    })
}

impl Database {
    /// Stores an entry and drops everything older than the newest `keep`.
    pub async fn insert_mood_entry(&self, entry: &MoodLogEntry, keep: usize) -> Result<()> {
        let record = entry.clone();
        let keep = i64::try_from(keep).map_err(|_| anyhow!("history cap {keep} too large"))?;
        self.execute(move |conn| {
            let tx = conn.transaction().context("failed to open history transaction")?;
            tx.execute(
                "INSERT INTO mood_history (id, date, day, mood, note, answer, rating)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                params![
                    record.id,
                    record.date.to_rfc3339(),
                    record.day,
                    record.mood.as_str(),
                    record.note,
                    record.answer,
                    record.rating,
                ],
            )
            .context("failed to insert mood entry")?;

            tx.execute(
                "DELETE FROM mood_history
                 WHERE id NOT IN (
                     SELECT id FROM mood_history ORDER BY date DESC, rowid DESC LIMIT ?1
                 )",
                params![keep],
            )
            .context("failed to trim mood history")?;

            tx.commit().context("failed to commit mood entry")?;
            Ok(())
        })
        .await
    }

    /// Newest first. Rows that no longer parse are skipped.
    pub async fn list_mood_entries(&self) -> Result<Vec<MoodLogEntry>> {
        self.execute(|conn| {
            let mut stmt = conn.prepare(
                "SELECT id, date, day, mood, note, answer, rating
                 FROM mood_history
                 ORDER BY date DESC, rowid DESC",
            )?;

            let mut rows = stmt.query([])?;
            let mut entries = Vec::new();
            while let Some(row) = rows.next()? {
                match row_to_entry(row) {
                    Ok(entry) => entries.push(entry),
                    Err(err) => warn!("Skipping unreadable mood entry: {err:#}"),
                }
            }

            Ok(entries)
        })
        .await
    }

    pub async fn clear_mood_history(&self) -> Result<()> {
        self.execute(|conn| {
            conn.execute("DELETE FROM mood_history", [])
                .context("failed to clear mood history")?;
            Ok(())
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Mood;
    use chrono::{Duration, TimeZone, Utc};

    fn entry(id: &str, minutes: i64, mood: Mood) -> MoodLogEntry {
        MoodLogEntry {
            id: id.to_string(),
            date: Utc.with_ymd_and_hms(2025, 6, 6, 8, 0, 0).unwrap() + Duration::minutes(minutes),
            day: "Friday".to_string(),
            mood,
            note: String::new(),
            answer: "slept well".to_string(),
            rating: 4,
        }
    }

    #[tokio::test]
    async fn keeps_only_newest_entries() {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::new(dir.path().join("history.sqlite3")).unwrap();

        for i in 0..9 {
            db.insert_mood_entry(&entry(&format!("e{i}"), i, Mood::Calm), 7)
                .await
                .unwrap();
        }

        let entries = db.list_mood_entries().await.unwrap();
        let ids: Vec<_> = entries.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["e8", "e7", "e6", "e5", "e4", "e3", "e2"]);
        assert_eq!(entries[0].answer, "slept well");
    }

    #[tokio::test]
    async fn skips_rows_with_unknown_mood() {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::new(dir.path().join("history.sqlite3")).unwrap();
        db.insert_mood_entry(&entry("good", 0, Mood::Sad), 7).await.unwrap();
        db.execute(|conn| {
            conn.execute(
                "INSERT INTO mood_history (id, date, day, mood, note, answer, rating)
                 VALUES ('bad', '2025-06-06T09:00:00+00:00', 'Friday', 'bored', '', '', 3)",
                [],
            )?;
            Ok(())
        })
        .await
        .unwrap();

        let entries = db.list_mood_entries().await.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].mood, Mood::Sad);

        db.clear_mood_history().await.unwrap();
        assert!(db.list_mood_entries().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn rejects_out_of_range_rating() {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::new(dir.path().join("history.sqlite3")).unwrap();
        let mut bad = entry("x", 0, Mood::Happy);
        bad.rating = 9;
        assert!(db.insert_mood_entry(&bad, 7).await.is_err());
    }
}
