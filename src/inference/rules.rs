use chrono::{Local, Timelike};
use log::debug;
use serde::Serialize;

use crate::models::{Mood, SignalSnapshot, SleepStage};

/// Which branch of the rule ladder produced a mood.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum MoodRule {
    NoData,
    DeepSleepLowHeartRate,
    RemSleepLowHeartRate,
    VeryActive,
    ModeratelyActive,
    RacingHeartRate,
    ElevatedHeartRateAtRest,
    LowHeartRate,
    VeryLowActivity,
    LowActivity,
    LateHours,
    Morning,
    Fallback,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Inference {
    pub mood: Mood,
    pub rule: MoodRule,
}

/// Infers a mood using the current local hour for the time-of-day tier.
pub fn infer(snapshot: &SignalSnapshot) -> Mood {
    infer_at(snapshot, Local::now().hour())
}

/// Same as [`infer`] with the local hour (0-23) supplied by the caller.
pub fn infer_at(snapshot: &SignalSnapshot, hour: u32) -> Mood {
    explain(snapshot, hour).mood
}

/// Runs the rule ladder and reports which rule matched first.
pub fn explain(snapshot: &SignalSnapshot, hour: u32) -> Inference {
    let inference = evaluate(snapshot, hour);
    debug!(
        "inferred {} via {:?} (hr={}, steps={}, exercise={}, sleep={}, hour={})",
        inference.mood,
        inference.rule,
        snapshot.heart_rate,
        snapshot.steps,
        snapshot.exercise_minutes,
        snapshot.sleep_stage,
        hour
    );
    inference
}

fn evaluate(snapshot: &SignalSnapshot, hour: u32) -> Inference {
    let hr = snapshot.heart_rate;
    let steps = snapshot.steps;
    let exercise = snapshot.exercise_minutes;
    let stage = snapshot.sleep_stage;
    let has_hr = hr > 0.0;

    if hr <= 0.0 && steps <= 0.0 && exercise <= 0.0 {
        return matched(Mood::Happy, MoodRule::NoData);
    }

    // Sleep stage alone is not enough; each branch needs a resting heart rate.
    if stage.is_sleep_signal() {
        if matches!(stage, SleepStage::Deep | SleepStage::Core) && has_hr && hr < 65.0 {
            return matched(Mood::Tired, MoodRule::DeepSleepLowHeartRate);
        }
        if stage == SleepStage::Rem && has_hr && hr < 70.0 {
            let mood = if steps < 100.0 { Mood::Sad } else { Mood::Tired };
            return matched(mood, MoodRule::RemSleepLowHeartRate);
        }
    }

    if steps > 0.0 && exercise > 0.0 {
        if steps > 8000.0 || exercise > 30.0 {
            let mood = if hr > 90.0 { Mood::Excited } else { Mood::Happy };
            return matched(mood, MoodRule::VeryActive);
        }
        if steps > 3000.0 && exercise > 15.0 {
            let mood = if has_hr && hr < 80.0 { Mood::Calm } else { Mood::Happy };
            return matched(mood, MoodRule::ModeratelyActive);
        }
    }

    if has_hr {
        if hr > 100.0 {
            let mood = if steps < 500.0 { Mood::Nervous } else { Mood::Excited };
            return matched(mood, MoodRule::RacingHeartRate);
        }
        if hr > 85.0 && steps < 1000.0 && exercise < 5.0 {
            let mood = if stage == SleepStage::Awake {
                Mood::Nervous
            } else {
                Mood::Angry
            };
            return matched(mood, MoodRule::ElevatedHeartRateAtRest);
        }
        if hr < 55.0 {
            return matched(Mood::Tired, MoodRule::LowHeartRate);
        }
    }

    if steps > 0.0 || exercise > 0.0 {
        if steps < 500.0 && exercise < 5.0 {
            return matched(Mood::Overwhelmed, MoodRule::VeryLowActivity);
        }
        if steps < 1500.0 && exercise < 10.0 {
            let mood = if has_hr && hr < 70.0 { Mood::Sad } else { Mood::Tired };
            return matched(mood, MoodRule::LowActivity);
        }
    }

    if hour < 7 || hour > 22 {
        return matched(Mood::Tired, MoodRule::LateHours);
    }
    if hour < 12 {
        return matched(Mood::Happy, MoodRule::Morning);
    }

    matched(Mood::Happy, MoodRule::Fallback)
}

fn matched(mood: Mood, rule: MoodRule) -> Inference {
    Inference { mood, rule }
}

#[cfg(test)]
mod tests {
    use super::*;

    const AFTERNOON: u32 = 15;

    fn snap(hr: f64, steps: f64, exercise: f64, stage: SleepStage) -> SignalSnapshot {
        SignalSnapshot::new(hr, steps, exercise, stage)
    }

    fn check(snapshot: SignalSnapshot, hour: u32, mood: Mood, rule: MoodRule) {
        let inference = explain(&snapshot, hour);
        assert_eq!(inference, Inference { mood, rule }, "snapshot {snapshot:?} at {hour}h");
    }

    #[test]
    fn all_zero_is_happy_regardless_of_stage_and_hour() {
        for stage in [SleepStage::Unknown, SleepStage::Deep, SleepStage::Rem, SleepStage::Awake] {
            for hour in [0, 3, 9, 15, 23] {
                check(snap(0.0, 0.0, 0.0, stage), hour, Mood::Happy, MoodRule::NoData);
            }
        }
    }

    #[test]
    fn negative_readings_count_as_no_data() {
        check(snap(-1.0, -5.0, 0.0, SleepStage::Unknown), 2, Mood::Happy, MoodRule::NoData);
    }

    #[test]
    fn deep_or_core_sleep_with_low_heart_rate_is_tired() {
        check(snap(50.0, 0.0, 0.0, SleepStage::Deep), AFTERNOON, Mood::Tired, MoodRule::DeepSleepLowHeartRate);
        check(snap(64.9, 4000.0, 20.0, SleepStage::Core), AFTERNOON, Mood::Tired, MoodRule::DeepSleepLowHeartRate);
    }

    #[test]
    fn rem_sleep_splits_on_steps() {
        check(snap(50.0, 50.0, 0.0, SleepStage::Rem), AFTERNOON, Mood::Sad, MoodRule::RemSleepLowHeartRate);
        check(snap(50.0, 500.0, 0.0, SleepStage::Rem), AFTERNOON, Mood::Tired, MoodRule::RemSleepLowHeartRate);
    }

    #[test]
    fn sleep_stage_without_matching_heart_rate_falls_through() {
        // Deep sleep at 65 bpm misses the sleep tier and lands on activity.
        check(snap(65.0, 200.0, 0.0, SleepStage::Deep), AFTERNOON, Mood::Overwhelmed, MoodRule::VeryLowActivity);
        // In Bed never matches a sleep branch.
        check(snap(50.0, 0.0, 0.0, SleepStage::InBed), AFTERNOON, Mood::Tired, MoodRule::LowHeartRate);
        // Sleep stage with no heart rate at all.
        check(snap(0.0, 9000.0, 40.0, SleepStage::Deep), AFTERNOON, Mood::Happy, MoodRule::VeryActive);
    }

    #[test]
    fn very_active_day_depends_on_heart_rate() {
        check(snap(95.0, 9000.0, 40.0, SleepStage::Unknown), AFTERNOON, Mood::Excited, MoodRule::VeryActive);
        check(snap(70.0, 9000.0, 40.0, SleepStage::Unknown), AFTERNOON, Mood::Happy, MoodRule::VeryActive);
        check(snap(90.0, 100.0, 31.0, SleepStage::Unknown), AFTERNOON, Mood::Happy, MoodRule::VeryActive);
    }

    #[test]
    fn moderate_activity_is_calm_with_moderate_heart_rate() {
        check(snap(75.0, 4000.0, 20.0, SleepStage::Unknown), AFTERNOON, Mood::Calm, MoodRule::ModeratelyActive);
        check(snap(80.0, 4000.0, 20.0, SleepStage::Unknown), AFTERNOON, Mood::Happy, MoodRule::ModeratelyActive);
        check(snap(0.0, 4000.0, 20.0, SleepStage::Unknown), AFTERNOON, Mood::Happy, MoodRule::ModeratelyActive);
    }

    #[test]
    fn activity_tier_needs_both_steps_and_exercise() {
        // No exercise minutes: skip tier 3, heart rate decides.
        check(snap(110.0, 9000.0, 0.0, SleepStage::Unknown), AFTERNOON, Mood::Excited, MoodRule::RacingHeartRate);
    }

    #[test]
    fn racing_heart_rate_splits_on_steps() {
        check(snap(110.0, 50.0, 0.0, SleepStage::Unknown), AFTERNOON, Mood::Nervous, MoodRule::RacingHeartRate);
        check(snap(110.0, 1000.0, 0.0, SleepStage::Unknown), AFTERNOON, Mood::Excited, MoodRule::RacingHeartRate);
    }

    #[test]
    fn elevated_heart_rate_at_rest_depends_on_awake() {
        check(snap(90.0, 200.0, 1.0, SleepStage::Awake), AFTERNOON, Mood::Nervous, MoodRule::ElevatedHeartRateAtRest);
        check(snap(90.0, 200.0, 1.0, SleepStage::Unknown), AFTERNOON, Mood::Angry, MoodRule::ElevatedHeartRateAtRest);
        check(snap(90.0, 200.0, 1.0, SleepStage::Deep), AFTERNOON, Mood::Angry, MoodRule::ElevatedHeartRateAtRest);
    }

    #[test]
    fn very_low_heart_rate_is_tired() {
        check(snap(54.0, 0.0, 0.0, SleepStage::Unknown), AFTERNOON, Mood::Tired, MoodRule::LowHeartRate);
    }

    #[test]
    fn activity_only_fallbacks() {
        check(snap(0.0, 400.0, 0.0, SleepStage::Unknown), AFTERNOON, Mood::Overwhelmed, MoodRule::VeryLowActivity);
        check(snap(0.0, 1000.0, 0.0, SleepStage::Unknown), AFTERNOON, Mood::Tired, MoodRule::LowActivity);
        check(snap(65.0, 1000.0, 0.0, SleepStage::Unknown), AFTERNOON, Mood::Sad, MoodRule::LowActivity);
        check(snap(72.0, 1000.0, 0.0, SleepStage::Unknown), AFTERNOON, Mood::Tired, MoodRule::LowActivity);
    }

    #[test]
    fn time_of_day_fallbacks() {
        // Normal heart rate, no activity: only the clock is left.
        let resting = snap(70.0, 0.0, 0.0, SleepStage::Unknown);
        check(resting, 3, Mood::Tired, MoodRule::LateHours);
        check(resting, 6, Mood::Tired, MoodRule::LateHours);
        check(resting, 23, Mood::Tired, MoodRule::LateHours);
        check(resting, 7, Mood::Happy, MoodRule::Morning);
        check(resting, 11, Mood::Happy, MoodRule::Morning);
        check(resting, 12, Mood::Happy, MoodRule::Fallback);
        check(resting, 22, Mood::Happy, MoodRule::Fallback);
    }

    #[test]
    fn inference_is_total_over_a_grid() {
        let values = [0.0, 40.0, 60.0, 75.0, 95.0, 120.0];
        let steps = [0.0, 90.0, 450.0, 1200.0, 5000.0, 9000.0];
        let minutes = [0.0, 3.0, 8.0, 20.0, 45.0];
        let stages = [
            SleepStage::Unknown,
            SleepStage::Awake,
            SleepStage::InBed,
            SleepStage::Core,
            SleepStage::Deep,
            SleepStage::Rem,
        ];
        for hr in values {
            for s in steps {
                for m in minutes {
                    for stage in stages {
                        for hour in 0..24 {
                            let snapshot = snap(hr, s, m, stage);
                            let first = infer_at(&snapshot, hour);
                            assert!(Mood::ALL.contains(&first));
                            assert_eq!(first, infer_at(&snapshot, hour));
                        }
                    }
                }
            }
        }
    }
}
