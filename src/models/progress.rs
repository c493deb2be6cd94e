// SPDX-License-Identifier: MIT

//! Stored progress records: completed workouts and progress photos.
//!
//! Wire field names are camelCase; document ids ride on the `$id`
//! attribute and are absent from create payloads.

use serde::{Deserialize, Serialize};

use crate::models::WorkoutCategory;

/// A completed workout session. Created exactly once per completion,
/// immutable thereafter, owned by the completing user.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutProgress {
    #[serde(rename = "$id")]
    pub id: String,
    pub user_id: String,
    pub workout_id: String,
    pub workout_title: String,
    pub workout_category: WorkoutCategory,
    /// Completion timestamp (RFC 3339)
    pub completed_at: String,
    /// Session duration in seconds
    pub duration: u32,
    pub exercises_completed: u32,
    pub total_exercises: u32,
    /// Free-text difficulty label
    pub difficulty: String,
}

/// Create payload for a [`WorkoutProgress`] document (no id yet).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewWorkoutProgress {
    pub user_id: String,
    pub workout_id: String,
    pub workout_title: String,
    pub workout_category: WorkoutCategory,
    pub completed_at: String,
    pub duration: u32,
    pub exercises_completed: u32,
    pub total_exercises: u32,
    pub difficulty: String,
}

/// Body part tag on a progress photo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BodyPart {
    Front,
    Side,
    Back,
    Other,
}

/// A stored progress photo: blob handle plus metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressPhoto {
    #[serde(rename = "$id")]
    pub id: String,
    pub user_id: String,
    /// Handle into blob storage
    pub file_id: String,
    /// Public view URL for the blob
    pub file_url: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Body weight at photo time, in the user's display unit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    pub body_part: BodyPart,
    /// Upload timestamp (RFC 3339)
    pub uploaded_at: String,
}

/// Caller-supplied metadata for a photo upload; `file_id` and `file_url`
/// are filled in after the blob phase succeeds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProgressPhoto {
    pub user_id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    pub body_part: BodyPart,
    pub uploaded_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_round_trip_with_document_id() {
        let doc = serde_json::json!({
            "$id": "doc1",
            "$collectionId": "workout-progress",
            "userId": "user1",
            "workoutId": "7",
            "workoutTitle": "Full Body HIIT",
            "workoutCategory": "physical",
            "completedAt": "2024-03-01T09:30:00Z",
            "duration": 612,
            "exercisesCompleted": 4,
            "totalExercises": 4,
            "difficulty": "Medium",
        });

        let progress: WorkoutProgress = serde_json::from_value(doc).unwrap();
        assert_eq!(progress.id, "doc1");
        assert_eq!(progress.workout_category, WorkoutCategory::Physical);
        assert_eq!(progress.duration, 612);
    }

    #[test]
    fn test_new_progress_payload_has_no_id() {
        let data = NewWorkoutProgress {
            user_id: "user1".to_string(),
            workout_id: "1".to_string(),
            workout_title: "Focus Builder".to_string(),
            workout_category: WorkoutCategory::Mental,
            completed_at: "2024-03-01T09:30:00Z".to_string(),
            duration: 300,
            exercises_completed: 4,
            total_exercises: 4,
            difficulty: "Beginner".to_string(),
        };

        let value = serde_json::to_value(&data).unwrap();
        assert!(value.get("$id").is_none());
        assert_eq!(value["workoutCategory"], "mental");
        assert_eq!(value["userId"], "user1");
    }

    #[test]
    fn test_photo_optional_fields_skipped() {
        let photo = NewProgressPhoto {
            user_id: "user1".to_string(),
            title: "Week 1".to_string(),
            description: None,
            weight: None,
            body_part: BodyPart::Front,
            uploaded_at: "2024-03-01T09:30:00Z".to_string(),
        };

        let value = serde_json::to_value(&photo).unwrap();
        assert!(value.get("description").is_none());
        assert!(value.get("weight").is_none());
        assert_eq!(value["bodyPart"], "front");
    }
}
