// SPDX-License-Identifier: MIT

//! Workout catalog model.
//!
//! Workouts partition into two categories: mental (cognitive/focus) and
//! physical (exertion). The built-in catalog ships with the app; a workout
//! carries only raw exercise names, which the session runner expands into
//! detailed [`Exercise`](crate::models::Exercise) entries.

use serde::{Deserialize, Serialize};

/// Workout category, partitioning workouts and statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutCategory {
    Mental,
    Physical,
}

impl std::fmt::Display for WorkoutCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WorkoutCategory::Mental => write!(f, "mental"),
            WorkoutCategory::Physical => write!(f, "physical"),
        }
    }
}

/// A workout definition from the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Workout {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Display label, e.g. "10 mins"
    pub duration: String,
    /// Free-text difficulty label, e.g. "Beginner"
    pub difficulty: String,
    pub category: WorkoutCategory,
    #[serde(default)]
    pub benefits: Vec<String>,
    /// Raw exercise names, expanded at session start
    #[serde(default)]
    pub exercises: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quote: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quote_author: Option<String>,
}

impl Workout {
    /// The built-in workout catalog: six mental, four physical.
    pub fn catalog() -> Vec<Workout> {
        fn strings(items: &[&str]) -> Vec<String> {
            items.iter().map(|s| s.to_string()).collect()
        }

        fn workout(
            id: &str,
            title: &str,
            description: &str,
            duration: &str,
            difficulty: &str,
            category: WorkoutCategory,
            benefits: &[&str],
            exercises: &[&str],
            quote: &str,
            quote_author: &str,
        ) -> Workout {
            Workout {
                id: id.to_string(),
                title: title.to_string(),
                description: description.to_string(),
                duration: duration.to_string(),
                difficulty: difficulty.to_string(),
                category,
                benefits: strings(benefits),
                exercises: strings(exercises),
                quote: Some(quote.to_string()),
                quote_author: Some(quote_author.to_string()),
            }
        }

        vec![
            workout(
                "1",
                "Focus Builder",
                "Mental exercises designed to enhance your concentration and focus during competition",
                "10 mins",
                "Beginner",
                WorkoutCategory::Mental,
                &["Improved focus", "Better concentration", "Reduced distractions"],
                &[
                    "Single-point focus meditation",
                    "Visual tracking exercises",
                    "Mindful breathing techniques",
                    "Distraction challenge tasks",
                ],
                "Concentration is the secret of strength in politics, in war, in trade, in short, in all the management of human affairs.",
                "Ralph Waldo Emerson",
            ),
            workout(
                "2",
                "Quick Decision Making",
                "Train your brain to make faster and smarter decisions under pressure",
                "15 mins",
                "Medium",
                WorkoutCategory::Mental,
                &["Faster reaction time", "Better decision making", "Improved judgment"],
                &[
                    "Situational scenario analysis",
                    "Rapid pattern recognition tasks",
                    "Timed decision challenges",
                    "Choice prioritization exercises",
                ],
                "A good decision is based on knowledge and not on numbers.",
                "Plato",
            ),
            workout(
                "3",
                "Memory Enhancement",
                "Exercises to improve memory recall and processing for game strategies",
                "12 mins",
                "Beginner",
                WorkoutCategory::Mental,
                &["Better memory retention", "Improved recall", "Enhanced learning"],
                &[
                    "Sequential pattern memorization",
                    "Visual memory games",
                    "Strategy recall challenges",
                    "Association techniques practice",
                ],
                "The true art of memory is the art of attention.",
                "Samuel Johnson",
            ),
            workout(
                "4",
                "Pre-Game Meditation",
                "Guided meditation to calm your mind and prepare for competition",
                "8 mins",
                "Beginner",
                WorkoutCategory::Mental,
                &["Reduced anxiety", "Mental clarity", "Improved focus"],
                &[
                    "Guided visualization",
                    "Body scan relaxation",
                    "Controlled breathing exercises",
                    "Mindfulness meditation",
                ],
                "The mind is everything. What you think you become.",
                "Buddha",
            ),
            workout(
                "5",
                "Mental Endurance",
                "Build your mental stamina to stay focused throughout long competitions",
                "20 mins",
                "Advanced",
                WorkoutCategory::Mental,
                &[
                    "Increased mental stamina",
                    "Improved resilience",
                    "Better performance under pressure",
                ],
                &[
                    "Extended focus exercises",
                    "Progressive distraction training",
                    "Mental fatigue resistance drills",
                    "Cognitive load management",
                ],
                "Mental toughness is to physical as four is to one.",
                "Bobby Knight",
            ),
            workout(
                "6",
                "Prayer & Reflection",
                "Faith-based reflection to find inner peace and spiritual balance",
                "10 mins",
                "Beginner",
                WorkoutCategory::Mental,
                &["Spiritual connection", "Inner peace", "Mental clarity"],
                &[
                    "Guided spiritual reflection",
                    "Gratitude practice",
                    "Scripture meditation",
                    "Contemplative prayer",
                ],
                "Prayer does not change God, but it changes him who prays.",
                "Søren Kierkegaard",
            ),
            workout(
                "7",
                "Full Body HIIT",
                "High-intensity interval training to work your entire body",
                "25 mins",
                "Medium",
                WorkoutCategory::Physical,
                &[],
                &[
                    "Burpees (30 seconds)",
                    "Mountain climbers (45 seconds)",
                    "Jump squats (30 seconds)",
                    "Plank jacks (45 seconds)",
                ],
                "The only bad workout is the one that didn't happen.",
                "Unknown",
            ),
            workout(
                "8",
                "Core Strength",
                "Focused exercises to build core strength and stability",
                "15 mins",
                "Beginner",
                WorkoutCategory::Physical,
                &[],
                &[
                    "Plank variations (3 sets, 30 seconds each)",
                    "Russian twists (3 sets, 20 reps)",
                    "Bicycle crunches (3 sets, 15 reps)",
                    "Leg raises (3 sets, 12 reps)",
                ],
                "The core is the powerhouse of the body.",
                "Joseph Pilates",
            ),
            workout(
                "9",
                "Upper Body Power",
                "Build strength in your arms, chest and shoulders",
                "30 mins",
                "Advanced",
                WorkoutCategory::Physical,
                &[],
                &[
                    "Push-ups (4 sets, 15 reps)",
                    "Dumbbell rows (3 sets, 12 reps per arm)",
                    "Shoulder presses (3 sets, 10 reps)",
                    "Tricep dips (3 sets, to failure)",
                ],
                "Strength does not come from physical capacity. It comes from an indomitable will.",
                "Mahatma Gandhi",
            ),
            workout(
                "10",
                "Leg Day Challenge",
                "Intense lower body workout for maximum gains",
                "35 mins",
                "Expert",
                WorkoutCategory::Physical,
                &[],
                &[
                    "Squats (4 sets, 15 reps)",
                    "Lunges (3 sets, 12 reps per leg)",
                    "Deadlifts (3 sets, 10 reps)",
                    "Calf raises (4 sets, 20 reps)",
                ],
                "The legs feed the wolf.",
                "Herb Brooks",
            ),
        ]
    }
}
