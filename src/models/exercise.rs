// SPDX-License-Identifier: MIT

//! Exercise detail expansion.
//!
//! Workouts store only raw exercise names; [`Exercise::expand`] maps a name
//! to a detailed entry by matching keywords against a fixed catalog of
//! archetypes. The mapping is pure: the same name and category always
//! produce the same expansion.

use serde::{Deserialize, Serialize};

use crate::models::WorkoutCategory;

/// Detailed exercise shown during a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    pub name: String,
    /// Time-based exercises, e.g. "3-5 minutes"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    /// Rep-based exercises, e.g. "15 reps"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reps: Option<String>,
    pub description: String,
    pub instructions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quote: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quote_author: Option<String>,
}

/// Either a duration label or a reps label for an archetype.
enum Effort {
    Duration(&'static str),
    Reps(&'static str),
}

impl Exercise {
    /// Expand a raw exercise name into a detailed entry.
    pub fn expand(name: &str, category: WorkoutCategory) -> Exercise {
        let lower = name.to_lowercase();

        let archetype = match category {
            WorkoutCategory::Mental => mental_archetype(&lower),
            WorkoutCategory::Physical => physical_archetype(&lower),
        };

        match archetype {
            Some((effort, description, instructions, quote, quote_author)) => {
                let (duration, reps) = match effort {
                    Effort::Duration(d) => (Some(d.to_string()), None),
                    Effort::Reps(r) => (None, Some(r.to_string())),
                };
                Exercise {
                    name: name.to_string(),
                    duration,
                    reps,
                    description: description.to_string(),
                    instructions: instructions.iter().map(|s| s.to_string()).collect(),
                    quote: Some(quote.to_string()),
                    quote_author: Some(quote_author.to_string()),
                }
            }
            None => Exercise::generic(name),
        }
    }

    /// Fallback entry for names that match no archetype.
    fn generic(name: &str) -> Exercise {
        Exercise {
            name: name.to_string(),
            duration: Some("2-3 minutes".to_string()),
            reps: None,
            description: "Complete this exercise with focus and proper form".to_string(),
            instructions: [
                "Read the exercise name carefully",
                "Prepare your space and mindset",
                "Execute the exercise with proper form",
                "Focus on quality over quantity",
                "Rest briefly before the next exercise",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            quote: Some("Success is where preparation and opportunity meet.".to_string()),
            quote_author: Some("Bobby Unser".to_string()),
        }
    }

    /// The duration or reps label, whichever this exercise carries.
    pub fn effort_label(&self) -> &str {
        self.duration
            .as_deref()
            .or(self.reps.as_deref())
            .unwrap_or("")
    }
}

type Archetype = (Effort, &'static str, &'static [&'static str], &'static str, &'static str);

fn mental_archetype(lower: &str) -> Option<Archetype> {
    if lower.contains("meditation") {
        Some((
            Effort::Duration("3-5 minutes"),
            "Focus on your breathing and clear your mind",
            &[
                "Find a comfortable seated position",
                "Close your eyes and take deep breaths",
                "Focus on the sensation of breathing",
                "When thoughts arise, gently return focus to breath",
                "Continue until the timer ends",
            ],
            "Peace comes from within. Do not seek it without.",
            "Buddha",
        ))
    } else if lower.contains("focus") || lower.contains("tracking") {
        Some((
            Effort::Duration("2-3 minutes"),
            "Enhance your concentration and visual tracking",
            &[
                "Sit comfortably with good posture",
                "Focus on a single point in front of you",
                "Maintain unwavering attention",
                "Notice when your mind wanders and gently refocus",
                "Gradually increase focus intensity",
            ],
            "Concentrate all your thoughts upon the work at hand. The sun's rays do not burn until brought to a focus.",
            "Alexander Graham Bell",
        ))
    } else if lower.contains("decision") || lower.contains("scenario") {
        Some((
            Effort::Duration("5-8 minutes"),
            "Practice quick decision making under pressure",
            &[
                "Review the presented scenario carefully",
                "Identify key decision points",
                "Consider multiple options quickly",
                "Make decisive choices within time limits",
                "Reflect on decision quality",
            ],
            "In any moment of decision, the best thing you can do is the right thing.",
            "Theodore Roosevelt",
        ))
    } else if lower.contains("memory") || lower.contains("pattern") {
        Some((
            Effort::Duration("4-6 minutes"),
            "Strengthen memory recall and pattern recognition",
            &[
                "Study the presented pattern or sequence",
                "Memorize the details carefully",
                "Wait for the recall prompt",
                "Reproduce the pattern accurately",
                "Challenge yourself with increasing complexity",
            ],
            "Memory is the treasury and guardian of all things.",
            "Cicero",
        ))
    } else if lower.contains("breathing") {
        Some((
            Effort::Duration("3-4 minutes"),
            "Controlled breathing for relaxation and focus",
            &[
                "Sit or lie down comfortably",
                "Place one hand on chest, one on belly",
                "Breathe in slowly through nose (4 counts)",
                "Hold your breath (4 counts)",
                "Exhale slowly through mouth (6 counts)",
            ],
            "Breath is the bridge which connects life to consciousness.",
            "Thich Nhat Hanh",
        ))
    } else if lower.contains("visualization") {
        Some((
            Effort::Duration("5-7 minutes"),
            "Mental imagery for performance enhancement",
            &[
                "Close your eyes and relax completely",
                "Visualize your ideal performance scenario",
                "Engage all senses in the visualization",
                "See yourself succeeding confidently",
                "Feel the emotions of success",
            ],
            "Visualization is daydreaming with a purpose.",
            "Bo Bennett",
        ))
    } else if lower.contains("prayer") || lower.contains("spiritual") || lower.contains("reflection")
    {
        Some((
            Effort::Duration("5-10 minutes"),
            "Spiritual reflection and inner peace",
            &[
                "Find a quiet, peaceful space",
                "Begin with gratitude and thanksgiving",
                "Reflect on your purpose and values",
                "Seek guidance and strength",
                "End with positive affirmations",
            ],
            "Prayer is not asking. It is a longing of the soul.",
            "Mahatma Gandhi",
        ))
    } else {
        None
    }
}

fn physical_archetype(lower: &str) -> Option<Archetype> {
    if lower.contains("burpees") {
        Some((
            Effort::Reps("30 seconds"),
            "Full body explosive exercise",
            &[
                "Start in standing position",
                "Drop to squat, hands on ground",
                "Jump feet back to plank position",
                "Do a push-up (optional)",
                "Jump feet back to squat, then jump up with arms overhead",
            ],
            "The body achieves what the mind believes.",
            "Napoleon Hill",
        ))
    } else if lower.contains("mountain climbers") {
        Some((
            Effort::Reps("45 seconds"),
            "Cardio and core strengthening exercise",
            &[
                "Start in plank position",
                "Bring right knee toward chest",
                "Quickly switch legs",
                "Continue alternating at rapid pace",
                "Keep core engaged throughout",
            ],
            "Every mountain top is within reach if you just keep climbing.",
            "Barry Finlay",
        ))
    } else if lower.contains("squats") {
        let jump = lower.contains("jump");
        Some((
            Effort::Reps(if jump { "30 seconds" } else { "15 reps" }),
            "Lower body strength and power",
            if jump {
                &[
                    "Stand with feet shoulder-width apart",
                    "Lower body by bending knees and hips",
                    "Keep chest up and knees behind toes",
                    "Explosively jump up at the top",
                    "Repeat for specified duration/reps",
                ]
            } else {
                &[
                    "Stand with feet shoulder-width apart",
                    "Lower body by bending knees and hips",
                    "Keep chest up and knees behind toes",
                    "Return to standing position",
                    "Repeat for specified duration/reps",
                ]
            },
            "Strength does not come from winning. Your struggles develop your strengths.",
            "Arnold Schwarzenegger",
        ))
    } else if lower.contains("plank") {
        Some((
            Effort::Reps("30-60 seconds"),
            "Core stability and strength",
            &[
                "Start in push-up position",
                "Lower to forearms if doing forearm plank",
                "Keep body in straight line",
                "Engage core muscles",
                "Hold position for specified time",
            ],
            "Core strength is the foundation of all movement.",
            "Pilates Principle",
        ))
    } else if lower.contains("push-ups") || lower.contains("push ups") {
        Some((
            Effort::Reps("15 reps"),
            "Upper body and core strength",
            &[
                "Start in plank position",
                "Lower chest toward ground",
                "Keep body in straight line",
                "Push back up to starting position",
                "Modify on knees if needed",
            ],
            "Push yourself because no one else is going to do it for you.",
            "Unknown",
        ))
    } else if lower.contains("lunges") {
        Some((
            Effort::Reps("12 reps per leg"),
            "Lower body strength and balance",
            &[
                "Stand with feet hip-width apart",
                "Step forward with one leg",
                "Lower hips until both knees are 90 degrees",
                "Push back to starting position",
                "Alternate legs or complete one side first",
            ],
            "Balance is not something you find, it's something you create.",
            "Jana Kingsford",
        ))
    } else if lower.contains("deadlifts") {
        Some((
            Effort::Reps("10 reps"),
            "Full body strength, focus on posterior chain",
            &[
                "Stand with feet hip-width apart",
                "Hold weights in front of thighs",
                "Hinge at hips, lower weights toward ground",
                "Keep back straight and chest up",
                "Drive through heels to return to standing",
            ],
            "The deadlift: because picking things up and putting them down is a primal movement.",
            "Mark Rippetoe",
        ))
    } else if lower.contains("calf raises") {
        Some((
            Effort::Reps("20 reps"),
            "Calf muscle strengthening",
            &[
                "Stand with feet hip-width apart",
                "Rise up onto balls of feet",
                "Hold for a moment at the top",
                "Lower back down slowly",
                "Use wall for balance if needed",
            ],
            "Every step forward is a step toward achieving something bigger than yourself.",
            "Brian Tracy",
        ))
    } else {
        None
    }
}
