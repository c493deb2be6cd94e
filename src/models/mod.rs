// SPDX-License-Identifier: MIT

//! Data models for the application.

pub mod exercise;
pub mod progress;
pub mod stats;
pub mod workout;

pub use exercise::Exercise;
pub use progress::{BodyPart, NewProgressPhoto, NewWorkoutProgress, ProgressPhoto, WorkoutProgress};
pub use stats::{calculate_weekly_progress, UserStats, WeeklyProgress};
pub use workout::{Workout, WorkoutCategory};
