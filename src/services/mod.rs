// SPDX-License-Identifier: MIT

//! Services module - business logic layer.

pub mod auth;
pub mod photos;
pub mod progress;
pub mod session;

pub use auth::{AuthError, AuthService};
pub use photos::PhotoService;
pub use progress::{ProgressService, WorkoutStats};
pub use session::{SessionRunner, SessionState, SessionTicker};
