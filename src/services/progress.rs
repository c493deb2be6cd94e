// SPDX-License-Identifier: MIT

//! Workout progress persistence and statistics aggregation.
//!
//! The workflow per completed session:
//! 1. Persist the immutable progress document (load-bearing write)
//! 2. Fetch-or-create the user's stats document
//! 3. Fold the workout into the aggregates (pure, in `models::stats`)
//! 4. Persist the updated stats (best effort)

use chrono::Utc;

use crate::backend::{collections, execute_with_retry, BackendClient, Query};
use crate::error::Result;
use crate::models::{
    calculate_weekly_progress, NewWorkoutProgress, UserStats, WeeklyProgress, WorkoutProgress,
};
use crate::time_utils::format_utc_rfc3339;

/// Progress records and rolling statistics for the signed-in user.
#[derive(Clone)]
pub struct ProgressService {
    client: BackendClient,
}

/// Everything the progress dashboard needs, fetched in one call.
#[derive(Debug, Clone)]
pub struct WorkoutStats {
    pub user_stats: UserStats,
    pub recent_workouts: Vec<WorkoutProgress>,
    pub weekly_progress: WeeklyProgress,
}

impl ProgressService {
    pub fn new(client: BackendClient) -> Self {
        Self { client }
    }

    /// Persist a completed workout and update the user's rolling stats.
    ///
    /// The progress write propagates failures; the stats update is best
    /// effort — a completed workout must never be lost because the derived
    /// statistics could not be recomputed.
    pub async fn save_workout_progress(
        &self,
        progress: &NewWorkoutProgress,
    ) -> Result<WorkoutProgress> {
        let created: WorkoutProgress = execute_with_retry(|| {
            self.client.create_document(
                collections::DATABASE_ID,
                collections::WORKOUT_PROGRESS,
                progress,
            )
        })
        .await?;

        tracing::info!(
            user_id = %progress.user_id,
            workout_id = %progress.workout_id,
            duration_secs = progress.duration,
            "Workout progress saved"
        );

        self.update_user_stats(progress).await;

        Ok(created)
    }

    /// All completed workouts for a user, newest first.
    pub async fn get_workout_history(&self, user_id: &str) -> Result<Vec<WorkoutProgress>> {
        let queries = [
            Query::equal("userId", user_id),
            Query::order_desc("completedAt"),
        ];
        let list = execute_with_retry(|| {
            self.client.list_documents(
                collections::DATABASE_ID,
                collections::WORKOUT_PROGRESS,
                &queries,
            )
        })
        .await?;
        Ok(list.documents)
    }

    /// The user's stats document, creating a zero-initialized one on the
    /// first read.
    ///
    /// The list-then-create is not exactly-once under concurrent first-time
    /// completions; a uniqueness constraint on `userId` in the collection
    /// rejects the losing create.
    pub async fn get_user_stats(&self, user_id: &str) -> Result<UserStats> {
        let queries = [Query::equal("userId", user_id), Query::limit(1)];
        let list: crate::backend::DocumentList<UserStats> = execute_with_retry(|| {
            self.client
                .list_documents(collections::DATABASE_ID, collections::USER_STATS, &queries)
        })
        .await?;

        if let Some(stats) = list.documents.into_iter().next() {
            return Ok(stats);
        }

        self.create_initial_user_stats(user_id).await
    }

    /// Stats, history, and the weekly summary, fetched concurrently.
    pub async fn get_workout_stats(&self, user_id: &str) -> Result<WorkoutStats> {
        let (user_stats, recent_workouts) = tokio::try_join!(
            self.get_user_stats(user_id),
            self.get_workout_history(user_id),
        )?;

        let weekly_progress = calculate_weekly_progress(&recent_workouts, Utc::now());

        Ok(WorkoutStats {
            user_stats,
            recent_workouts,
            weekly_progress,
        })
    }

    async fn create_initial_user_stats(&self, user_id: &str) -> Result<UserStats> {
        let now = format_utc_rfc3339(Utc::now());
        let initial = UserStats::initial(user_id, &now);

        let created = execute_with_retry(|| {
            self.client
                .create_document(collections::DATABASE_ID, collections::USER_STATS, &initial)
        })
        .await?;

        tracing::info!(user_id = %user_id, "Initial user stats created");
        Ok(created)
    }

    /// Best-effort stats update: errors are logged, never propagated.
    ///
    /// The read-modify-write carries no optimistic-concurrency token, so
    /// two concurrent completions by the same user are last-writer-wins.
    /// Accepted for single-device usage per account.
    async fn update_user_stats(&self, workout: &NewWorkoutProgress) {
        if let Err(err) = self.try_update_user_stats(workout).await {
            tracing::warn!(
                user_id = %workout.user_id,
                error = %err,
                "Failed to update user stats, workout progress is still saved"
            );
        }
    }

    async fn try_update_user_stats(&self, workout: &NewWorkoutProgress) -> Result<()> {
        let mut stats = self.get_user_stats(&workout.user_id).await?;

        let now = Utc::now();
        stats.apply_workout(workout, now.date_naive(), &format_utc_rfc3339(now));

        let document_id = stats.id.clone();
        let _: UserStats = execute_with_retry(|| {
            self.client.update_document(
                collections::DATABASE_ID,
                collections::USER_STATS,
                &document_id,
                &stats,
            )
        })
        .await?;

        tracing::debug!(
            user_id = %workout.user_id,
            streak = stats.current_streak,
            total = stats.total_workouts,
            "User stats updated"
        );
        Ok(())
    }
}
