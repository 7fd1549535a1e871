//! Weekly mood journal: a short, newest-first log of user reflections.

use anyhow::{bail, Result};
use chrono::{DateTime, Datelike, Local, TimeZone, Utc, Weekday};
use log::error;
use uuid::Uuid;

use crate::{
    db::Database,
    models::{Mood, MoodLogEntry, MoodLogInput},
};

pub const MAX_ENTRIES: usize = 7;

/// Full English weekday name for `date` in its own timezone.
pub fn weekday_label<Tz: TimeZone>(date: &DateTime<Tz>) -> &'static str {
    match date.weekday() {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

#[derive(Clone)]
pub struct MoodJournal {
    db: Database,
}

impl MoodJournal {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub async fn add_entry(&self, input: MoodLogInput, now: DateTime<Utc>) -> Result<MoodLogEntry> {
        if !(1..=5).contains(&input.rating) {
            bail!("rating must be between 1 and 5, got {}", input.rating);
        }

        let entry = MoodLogEntry {
            id: Uuid::new_v4().to_string(),
            date: now,
            day: input
                .day
                .unwrap_or_else(|| weekday_label(&now.with_timezone(&Local)).to_string()),
            mood: input.mood,
            note: input.note,
            answer: input.answer,
            rating: input.rating,
        };
        self.db.insert_mood_entry(&entry, MAX_ENTRIES).await?;
        Ok(entry)
    }

    /// Newest first. A broken store reads as empty.
    pub async fn entries(&self) -> Vec<MoodLogEntry> {
        match self.db.list_mood_entries().await {
            Ok(entries) => entries,
            Err(err) => {
                error!("Failed to load mood history: {err:#}");
                Vec::new()
            }
        }
    }

    pub async fn recent_moods(&self, count: usize) -> Vec<Mood> {
        self.entries()
            .await
            .into_iter()
            .take(count)
            .map(|entry| entry.mood)
            .collect()
    }

    pub async fn clear(&self) -> Result<()> {
        self.db.clear_mood_history().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn input(mood: Mood, rating: u8) -> MoodLogInput {
        MoodLogInput {
            day: Some("Wednesday".into()),
            mood,
            note: "long day".into(),
            answer: String::new(),
            rating,
        }
    }

    #[test]
    fn weekday_labels() {
        let wednesday = Utc.with_ymd_and_hms(2025, 6, 4, 12, 0, 0).unwrap();
        assert_eq!(weekday_label(&wednesday), "Wednesday");
        assert_eq!(weekday_label(&(wednesday + Duration::days(4))), "Sunday");
    }

    #[tokio::test]
    async fn journal_is_capped_and_newest_first() {
        let dir = tempfile::tempdir().unwrap();
        let journal = MoodJournal::new(Database::new(dir.path().join("j.sqlite3")).unwrap());
        let start = Utc.with_ymd_and_hms(2025, 6, 1, 20, 0, 0).unwrap();

        let moods = [
            Mood::Happy,
            Mood::Sad,
            Mood::Calm,
            Mood::Tired,
            Mood::Angry,
            Mood::Excited,
            Mood::Nervous,
            Mood::Overwhelmed,
            Mood::Happy,
        ];
        for (i, mood) in moods.iter().enumerate() {
            journal
                .add_entry(input(*mood, 3), start + Duration::days(i as i64))
                .await
                .unwrap();
        }

        let entries = journal.entries().await;
        assert_eq!(entries.len(), MAX_ENTRIES);
        assert_eq!(entries[0].mood, Mood::Happy);
        assert_eq!(entries[1].mood, Mood::Overwhelmed);
        assert_eq!(entries[6].mood, Mood::Calm);
        assert_eq!(
            journal.recent_moods(3).await,
            vec![Mood::Happy, Mood::Overwhelmed, Mood::Nervous]
        );

        journal.clear().await.unwrap();
        assert!(journal.entries().await.is_empty());
    }

    #[tokio::test]
    async fn missing_day_uses_local_weekday() {
        let dir = tempfile::tempdir().unwrap();
        let journal = MoodJournal::new(Database::new(dir.path().join("j.sqlite3")).unwrap());
        let now = Utc.with_ymd_and_hms(2025, 6, 4, 12, 0, 0).unwrap();

        let entry = journal
            .add_entry(MoodLogInput { day: None, ..input(Mood::Sad, 2) }, now)
            .await
            .unwrap();
        assert_eq!(entry.day, weekday_label(&now.with_timezone(&Local)));
        assert_eq!(entry.rating_emoji(), "😕");
    }

    #[tokio::test]
    async fn unreadable_history_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::new(dir.path().join("j.sqlite3")).unwrap();
        let journal = MoodJournal::new(db.clone());
        journal.add_entry(input(Mood::Calm, 4), Utc::now()).await.unwrap();

        db.execute(|conn| {
            conn.execute_batch("DROP TABLE mood_history")?;
            Ok(())
        })
        .await
        .unwrap();

        assert!(journal.entries().await.is_empty());
        assert!(journal.recent_moods(3).await.is_empty());
        assert!(journal.add_entry(input(Mood::Calm, 4), Utc::now()).await.is_err());
    }

    #[tokio::test]
    async fn rejects_rating_out_of_range() {
        let dir = tempfile::tempdir().unwrap();
        let journal = MoodJournal::new(Database::new(dir.path().join("j.sqlite3")).unwrap());
        let now = Utc::now();
        assert!(journal.add_entry(input(Mood::Calm, 0), now).await.is_err());
        assert!(journal.add_entry(input(Mood::Calm, 6), now).await.is_err());
        assert!(journal.entries().await.is_empty());
    }
}
