// SPDX-License-Identifier: MIT

//! Rolling per-user statistics, updated once per completed workout.
//!
//! The aggregation arithmetic is pure so it can be tested without a
//! backend; the service layer is responsible for fetching, applying, and
//! persisting.

use chrono::{DateTime, Days, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{NewWorkoutProgress, WorkoutCategory, WorkoutProgress};
use crate::time_utils::parse_stored_date;

/// Per-user statistics document, upserted by the aggregator.
///
/// Invariant: `total_workouts == mental_workouts + physical_workouts`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    #[serde(rename = "$id", default, skip_serializing)]
    pub id: String,
    pub user_id: String,
    pub total_workouts: u32,
    pub total_minutes: u32,
    pub mental_workouts: u32,
    pub physical_workouts: u32,
    pub favorite_category: WorkoutCategory,
    /// Consecutive-day counter, reset by any gap day
    pub current_streak: u32,
    /// Full timestamp of the most recent workout (RFC 3339), empty if none
    pub last_workout_date: String,
    pub updated_at: String,
}

impl UserStats {
    /// Zero-initialized stats for a user's first read.
    pub fn initial(user_id: &str, now: &str) -> Self {
        Self {
            id: String::new(),
            user_id: user_id.to_string(),
            total_workouts: 0,
            total_minutes: 0,
            mental_workouts: 0,
            physical_workouts: 0,
            favorite_category: WorkoutCategory::Mental,
            current_streak: 0,
            last_workout_date: String::new(),
            updated_at: now.to_string(),
        }
    }

    /// Fold one completed workout into the aggregates.
    ///
    /// `today` is the current calendar date used for streak arithmetic;
    /// `now` is the full timestamp written to `last_workout_date` and
    /// `updated_at`.
    pub fn apply_workout(&mut self, workout: &NewWorkoutProgress, today: NaiveDate, now: &str) {
        let workout_minutes = (f64::from(workout.duration) / 60.0).round() as u32;

        self.current_streak = match parse_stored_date(&self.last_workout_date) {
            // First workout ever
            None => 1,
            Some(last_day) => match (today - last_day).num_days() {
                // Same-day repeat keeps the streak
                0 => self.current_streak,
                // Consecutive day
                1 => self.current_streak + 1,
                // Gap day, or clock skew (negative): reset
                _ => 1,
            },
        };

        self.total_workouts += 1;
        self.total_minutes += workout_minutes;
        match workout.workout_category {
            WorkoutCategory::Mental => self.mental_workouts += 1,
            WorkoutCategory::Physical => self.physical_workouts += 1,
        }

        // Strictly greater wins; a tie keeps the previous favorite.
        if self.mental_workouts > self.physical_workouts {
            self.favorite_category = WorkoutCategory::Mental;
        } else if self.physical_workouts > self.mental_workouts {
            self.favorite_category = WorkoutCategory::Physical;
        }

        self.last_workout_date = now.to_string();
        self.updated_at = now.to_string();
    }
}

/// This week's workout summary, computed on demand for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeeklyProgress {
    pub total_workouts: u32,
    pub total_minutes: u32,
    pub mental_workouts: u32,
    pub physical_workouts: u32,
}

/// Summarize the workouts completed in the last seven days.
///
/// Records with unparsable timestamps are skipped. Minutes are the summed
/// durations in seconds, divided by 60 and rounded.
pub fn calculate_weekly_progress(workouts: &[WorkoutProgress], now: DateTime<Utc>) -> WeeklyProgress {
    let week_ago = now - Days::new(7);

    let this_week: Vec<&WorkoutProgress> = workouts
        .iter()
        .filter(|w| {
            DateTime::parse_from_rfc3339(&w.completed_at)
                .map(|completed| completed.with_timezone(&Utc) >= week_ago)
                .unwrap_or(false)
        })
        .collect();

    let total_seconds: u64 = this_week.iter().map(|w| u64::from(w.duration)).sum();

    WeeklyProgress {
        total_workouts: this_week.len() as u32,
        total_minutes: (total_seconds as f64 / 60.0).round() as u32,
        mental_workouts: this_week
            .iter()
            .filter(|w| w.workout_category == WorkoutCategory::Mental)
            .count() as u32,
        physical_workouts: this_week
            .iter()
            .filter(|w| w.workout_category == WorkoutCategory::Physical)
            .count() as u32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_workout(category: WorkoutCategory, duration: u32) -> NewWorkoutProgress {
        NewWorkoutProgress {
            user_id: "user1".to_string(),
            workout_id: "1".to_string(),
            workout_title: "Test Workout".to_string(),
            workout_category: category,
            completed_at: "2024-03-10T09:00:00Z".to_string(),
            duration,
            exercises_completed: 4,
            total_exercises: 4,
            difficulty: "Beginner".to_string(),
        }
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_first_workout_starts_streak_at_one() {
        let mut stats = UserStats::initial("user1", "2024-03-10T09:00:00Z");
        assert_eq!(stats.last_workout_date, "");

        stats.apply_workout(
            &make_workout(WorkoutCategory::Mental, 300),
            day(2024, 3, 10),
            "2024-03-10T09:05:00Z",
        );

        assert_eq!(stats.current_streak, 1);
        assert_eq!(stats.total_workouts, 1);
        assert_eq!(stats.total_minutes, 5);
        assert_eq!(stats.mental_workouts, 1);
        assert_eq!(stats.last_workout_date, "2024-03-10T09:05:00Z");
    }

    #[test]
    fn test_consecutive_day_extends_streak() {
        let mut stats = UserStats::initial("user1", "now");
        stats.current_streak = 4;
        stats.last_workout_date = "2024-03-09T20:00:00Z".to_string();

        stats.apply_workout(
            &make_workout(WorkoutCategory::Physical, 600),
            day(2024, 3, 10),
            "2024-03-10T09:00:00Z",
        );

        assert_eq!(stats.current_streak, 5);
    }

    #[test]
    fn test_same_day_repeat_keeps_streak_but_counts_workout() {
        let mut stats = UserStats::initial("user1", "now");
        stats.current_streak = 4;
        stats.total_workouts = 10;
        stats.mental_workouts = 10;
        stats.last_workout_date = "2024-03-10T07:00:00Z".to_string();

        stats.apply_workout(
            &make_workout(WorkoutCategory::Mental, 300),
            day(2024, 3, 10),
            "2024-03-10T18:00:00Z",
        );

        assert_eq!(stats.current_streak, 4);
        assert_eq!(stats.total_workouts, 11);
    }

    #[test]
    fn test_gap_resets_streak() {
        let mut stats = UserStats::initial("user1", "now");
        stats.current_streak = 4;
        stats.last_workout_date = "2024-03-05T09:00:00Z".to_string();

        stats.apply_workout(
            &make_workout(WorkoutCategory::Mental, 300),
            day(2024, 3, 10),
            "2024-03-10T09:00:00Z",
        );

        assert_eq!(stats.current_streak, 1);
    }

    #[test]
    fn test_clock_skew_resets_streak() {
        let mut stats = UserStats::initial("user1", "now");
        stats.current_streak = 4;
        // Stored date is in the future relative to "today".
        stats.last_workout_date = "2024-03-12T09:00:00Z".to_string();

        stats.apply_workout(
            &make_workout(WorkoutCategory::Mental, 300),
            day(2024, 3, 10),
            "2024-03-10T09:00:00Z",
        );

        assert_eq!(stats.current_streak, 1);
    }

    #[test]
    fn test_favorite_category_tie_is_preserved() {
        let mut stats = UserStats::initial("user1", "now");
        stats.mental_workouts = 3;
        stats.physical_workouts = 2;
        stats.total_workouts = 5;
        stats.favorite_category = WorkoutCategory::Mental;

        // Physical pulls even: 3-3 after the increment.
        stats.apply_workout(
            &make_workout(WorkoutCategory::Physical, 300),
            day(2024, 3, 10),
            "2024-03-10T09:00:00Z",
        );

        assert_eq!(stats.mental_workouts, stats.physical_workouts);
        assert_eq!(stats.favorite_category, WorkoutCategory::Mental);

        // One more physical breaks the tie.
        stats.apply_workout(
            &make_workout(WorkoutCategory::Physical, 300),
            day(2024, 3, 10),
            "2024-03-10T10:00:00Z",
        );
        assert_eq!(stats.favorite_category, WorkoutCategory::Physical);
    }

    #[test]
    fn test_total_is_sum_of_categories() {
        let mut stats = UserStats::initial("user1", "now");
        for i in 0..7u32 {
            let category = if i % 2 == 0 {
                WorkoutCategory::Mental
            } else {
                WorkoutCategory::Physical
            };
            stats.apply_workout(
                &make_workout(category, 90),
                day(2024, 3, 10),
                "2024-03-10T09:00:00Z",
            );
        }

        assert_eq!(
            stats.total_workouts,
            stats.mental_workouts + stats.physical_workouts
        );
    }

    #[test]
    fn test_minutes_are_rounded() {
        let mut stats = UserStats::initial("user1", "now");

        // 90 seconds rounds to 2 minutes, 89 rounds to 1.
        stats.apply_workout(
            &make_workout(WorkoutCategory::Mental, 90),
            day(2024, 3, 10),
            "2024-03-10T09:00:00Z",
        );
        assert_eq!(stats.total_minutes, 2);

        stats.apply_workout(
            &make_workout(WorkoutCategory::Mental, 89),
            day(2024, 3, 10),
            "2024-03-10T10:00:00Z",
        );
        assert_eq!(stats.total_minutes, 3);
    }

    fn completed(category: WorkoutCategory, completed_at: &str, duration: u32) -> WorkoutProgress {
        WorkoutProgress {
            id: "doc".to_string(),
            user_id: "user1".to_string(),
            workout_id: "1".to_string(),
            workout_title: "Test".to_string(),
            workout_category: category,
            completed_at: completed_at.to_string(),
            duration,
            exercises_completed: 4,
            total_exercises: 4,
            difficulty: "Beginner".to_string(),
        }
    }

    #[test]
    fn test_weekly_progress_filters_to_last_seven_days() {
        let now = DateTime::parse_from_rfc3339("2024-03-11T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc);

        let workouts = vec![
            completed(WorkoutCategory::Physical, "2024-03-10T12:00:00Z", 600),
            completed(WorkoutCategory::Mental, "2024-03-01T12:00:00Z", 300),
        ];

        let weekly = calculate_weekly_progress(&workouts, now);
        assert_eq!(
            weekly,
            WeeklyProgress {
                total_workouts: 1,
                total_minutes: 10,
                mental_workouts: 0,
                physical_workouts: 1,
            }
        );
    }

    #[test]
    fn test_weekly_progress_skips_unparsable_timestamps() {
        let now = Utc::now();
        let workouts = vec![completed(WorkoutCategory::Mental, "not-a-date", 300)];

        let weekly = calculate_weekly_progress(&workouts, now);
        assert_eq!(weekly.total_workouts, 0);
        assert_eq!(weekly.total_minutes, 0);
    }
}
