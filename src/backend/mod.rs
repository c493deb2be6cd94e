//! Remote service layer: REST client and the retry wrapper.

pub mod client;
pub mod retry;

pub use client::{Account, BackendClient, DocumentList, Query, Session};
pub use retry::{execute_with_retry, execute_with_retry_config};

/// Database, collection, and bucket identifiers as constants.
pub mod collections {
    pub const DATABASE_ID: &str = "fit-app-db";
    pub const WORKOUT_PROGRESS: &str = "workout-progress";
    pub const USER_STATS: &str = "user-stats";
    pub const PROGRESS_PHOTOS: &str = "progress-photos";
    /// Storage bucket for progress photo blobs.
    pub const PROGRESS_PHOTOS_BUCKET: &str = "progress-photos-bucket";
}
