//! Turns raw collector samples into the values a [`SignalSnapshot`] holds.
//!
//! Windows are matched on sample start time: steps and exercise count from
//! local midnight, heart rate looks back 24 hours, sleep looks back 8 hours.

use chrono::{DateTime, Duration, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{SignalSnapshot, SleepStage};

const HEART_RATE_LOOKBACK_HOURS: i64 = 24;
const HEART_RATE_SAMPLES: usize = 5;
const SLEEP_LOOKBACK_HOURS: i64 = 8;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuantitySample {
    pub value: f64,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SleepSample {
    pub stage: SleepStage,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// Sum of samples that started today, in the timezone of `now`.
pub fn total_today<Tz: TimeZone>(samples: &[QuantitySample], now: &DateTime<Tz>) -> f64 {
    let from = start_of_day(now);
    let until = now.with_timezone(&Utc);
    samples
        .iter()
        .filter(|sample| sample.start >= from && sample.start <= until)
        .map(|sample| sample.value)
        .sum()
}

/// Mean of the five most recent heart-rate samples from the last day, or 0.
pub fn recent_heart_rate(samples: &[QuantitySample], now: DateTime<Utc>) -> f64 {
    let from = now - Duration::hours(HEART_RATE_LOOKBACK_HOURS);
    let mut recent: Vec<&QuantitySample> = samples
        .iter()
        .filter(|sample| sample.start >= from && sample.start <= now)
        .collect();
    recent.sort_by(|a, b| b.end.cmp(&a.end));
    recent.truncate(HEART_RATE_SAMPLES);

    if recent.is_empty() {
        return 0.0;
    }
    recent.iter().map(|sample| sample.value).sum::<f64>() / recent.len() as f64
}

/// Stage of the latest sleep sample from the last eight hours.
pub fn latest_sleep_stage(samples: &[SleepSample], now: DateTime<Utc>) -> SleepStage {
    let from = now - Duration::hours(SLEEP_LOOKBACK_HOURS);
    samples
        .iter()
        .filter(|sample| sample.start >= from && sample.start <= now)
        .max_by_key(|sample| sample.end)
        .map(|sample| sample.stage)
        .unwrap_or_default()
}

pub fn build_snapshot<Tz: TimeZone>(
    steps: &[QuantitySample],
    exercise: &[QuantitySample],
    heart_rate: &[QuantitySample],
    sleep: &[SleepSample],
    now: &DateTime<Tz>,
) -> SignalSnapshot {
    let now_utc = now.with_timezone(&Utc);
    SignalSnapshot {
        heart_rate: recent_heart_rate(heart_rate, now_utc),
        steps: total_today(steps, now),
        exercise_minutes: total_today(exercise, now),
        sleep_stage: latest_sleep_stage(sleep, now_utc),
    }
}

fn start_of_day<Tz: TimeZone>(now: &DateTime<Tz>) -> DateTime<Utc> {
    let Some(midnight) = now.date_naive().and_hms_opt(0, 0, 0) else {
        return now.with_timezone(&Utc);
    };
    now.timezone()
        .from_local_datetime(&midnight)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|| Utc.from_utc_datetime(&midnight))
}
