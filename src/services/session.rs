// SPDX-License-Identifier: MIT

//! Workout session runner: the state machine that drives a user through a
//! sequence of exercises, plus the 1 Hz ticker that owns elapsed time.
//!
//! States: NotStarted → InProgress → Completed. Only full completions are
//! recorded; abandoning a session is simply dropping the runner (and its
//! ticker) — nothing was persisted yet, so there is nothing to undo.

use std::sync::Arc;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::{interval, Duration, MissedTickBehavior};

use crate::models::{Exercise, NewWorkoutProgress, Workout};
use crate::time_utils::format_utc_rfc3339;

/// Session lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    NotStarted,
    InProgress,
    Completed,
}

/// In-memory state for one workout session. Ephemeral: the only persistent
/// artifact is the [`NewWorkoutProgress`] produced on completion.
#[derive(Debug)]
pub struct SessionRunner {
    workout: Workout,
    exercises: Vec<Exercise>,
    current_index: usize,
    elapsed_secs: u64,
    state: SessionState,
}

impl SessionRunner {
    /// Build a runner for a workout, expanding its raw exercise names once.
    pub fn new(workout: Workout) -> Self {
        let exercises = workout
            .exercises
            .iter()
            .map(|name| Exercise::expand(name, workout.category))
            .collect();
        Self {
            workout,
            exercises,
            current_index: 0,
            elapsed_secs: 0,
            state: SessionState::NotStarted,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn workout(&self) -> &Workout {
        &self.workout
    }

    pub fn exercises(&self) -> &[Exercise] {
        &self.exercises
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// The exercise under the cursor, if any exist.
    pub fn current_exercise(&self) -> Option<&Exercise> {
        self.exercises.get(self.current_index)
    }

    /// Frozen once the session completes.
    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed_secs
    }

    /// Completion fraction in [0, 1]; defined as 0 for an empty list.
    pub fn progress(&self) -> f64 {
        if self.exercises.is_empty() {
            0.0
        } else {
            (self.current_index + 1) as f64 / self.exercises.len() as f64
        }
    }

    /// NotStarted → InProgress. No-op in any other state.
    pub fn start(&mut self) {
        if self.state == SessionState::NotStarted {
            self.state = SessionState::InProgress;
        }
    }

    /// Add one elapsed second. Only counts while InProgress, which is what
    /// freezes the timer the instant the session completes.
    pub fn tick(&mut self) {
        if self.state == SessionState::InProgress {
            self.elapsed_secs += 1;
        }
    }

    /// Advance to the next exercise, completing the session on the last
    /// one. An empty exercise list completes immediately. Returns the new
    /// state.
    pub fn advance(&mut self) -> SessionState {
        if self.state == SessionState::InProgress {
            if self.current_index + 1 < self.exercises.len() {
                self.current_index += 1;
            } else {
                self.state = SessionState::Completed;
            }
        }
        self.state
    }

    /// Step back one exercise. No-op at index 0 and outside InProgress.
    pub fn go_back(&mut self) {
        if self.state == SessionState::InProgress && self.current_index > 0 {
            self.current_index -= 1;
        }
    }

    /// The progress record for a completed session, or `None` if the
    /// session has not completed (abandoned sessions leave no trace).
    pub fn completed_progress(&self, user_id: &str) -> Option<NewWorkoutProgress> {
        if self.state != SessionState::Completed {
            return None;
        }
        let total = self.exercises.len() as u32;
        Some(NewWorkoutProgress {
            user_id: user_id.to_string(),
            workout_id: self.workout.id.clone(),
            workout_title: self.workout.title.clone(),
            workout_category: self.workout.category,
            completed_at: format_utc_rfc3339(chrono::Utc::now()),
            duration: self.elapsed_secs as u32,
            exercises_completed: total,
            total_exercises: total,
            difficulty: self.workout.difficulty.clone(),
        })
    }
}

/// Drives a shared [`SessionRunner`]'s timer at one tick per second.
///
/// The spawned task exits on its own as soon as the session leaves
/// InProgress, and is aborted when the handle is dropped or stopped, so a
/// dangling timer can never outlive its owning session.
pub struct SessionTicker {
    handle: JoinHandle<()>,
}

impl SessionTicker {
    /// Spawn the ticker task for a started session.
    pub fn spawn(runner: Arc<Mutex<SessionRunner>>) -> Self {
        let handle = tokio::spawn(async move {
            let mut ticker = interval(Duration::from_secs(1));
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            // The first tick fires immediately; skip it so a full second
            // passes before elapsed time moves.
            ticker.tick().await;
            loop {
                ticker.tick().await;
                let mut session = runner.lock().await;
                if session.state() != SessionState::InProgress {
                    break;
                }
                session.tick();
            }
        });
        Self { handle }
    }

    /// Cancel the ticker task explicitly (screen teardown).
    pub fn stop(&self) {
        self.handle.abort();
    }
}

impl Drop for SessionTicker {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
