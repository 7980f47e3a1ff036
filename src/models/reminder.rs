use serde::{Deserialize, Serialize};
use std::fmt;

use super::entry_id::EntryId;
use super::workout::ScheduledWorkout;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReminderKind {
    Workout,
}

/// A reminder shown on the dashboard.
///
/// `workout_id` only records which workout the reminder is about; it is used
/// to avoid reminding twice and is never followed to delete anything.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reminder {
    pub id: EntryId,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: ReminderKind,
    pub workout_id: EntryId,
}

impl Reminder {
    pub fn for_workout(id: EntryId, workout: &ScheduledWorkout) -> Self {
        Self {
            id,
            message: format!("Workout: {} at {}", workout.name, workout.time_label()),
            kind: ReminderKind::Workout,
            workout_id: workout.id,
        }
    }
}

impl fmt::Display for Reminder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
