use serde::{Deserialize, Serialize};

use super::entry_id::EntryId;
use super::food_entry::FoodEntry;
use super::goals::Goals;
use super::reminder::Reminder;
use super::workout::{CompletedWorkout, ScheduledWorkout};

/// Everything the tracker knows about the user.
///
/// Serialized as one JSON document whose layout matches the browser
/// client's `motionx-data` blob, so an export from there loads as-is.
///
/// Days are local calendar days here: new food entries are dated with the
/// local date and completed workouts are grouped by the local day of their
/// timestamp. The browser client used UTC days, so imported entries logged
/// close to midnight can show up one day earlier or later than they did
/// there.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    #[serde(rename = "user", default)]
    pub goals: Goals,
    #[serde(default)]
    pub food_log: Vec<FoodEntry>,
    #[serde(default)]
    pub workouts: Workouts,
    #[serde(default)]
    pub reminders: Vec<Reminder>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Workouts {
    #[serde(default)]
    pub scheduled: Vec<ScheduledWorkout>,
    #[serde(default)]
    pub history: Vec<CompletedWorkout>,
}

impl AppState {
    /// Whether any reminder already points at the given workout.
    pub fn has_reminder_for(&self, workout_id: EntryId) -> bool {
        self.reminders.iter().any(|r| r.workout_id == workout_id)
    }

    /// Largest id in use across every collection.
    pub fn max_id(&self) -> Option<EntryId> {
        let food = self.food_log.iter().map(|e| e.id);
        let scheduled = self.workouts.scheduled.iter().map(|w| w.id);
        let history = self.workouts.history.iter().map(|w| w.id);
        let reminders = self.reminders.iter().map(|r| r.id);
        food.chain(scheduled).chain(history).chain(reminders).max()
    }
}
