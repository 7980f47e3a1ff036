//! The application controller.
//!
//! [`Tracker`] owns the state store and the clock. All writes go through
//! its methods. Each one re-reads the state file first, so records written
//! by another `motionx` process in the meantime are kept, and saves before
//! returning.

use chrono::{DateTime, Local, NaiveDate, NaiveTime, Utc};

use crate::clock::{Clock, SystemClock};
use crate::models::{
    AppState, CompletedWorkout, DayOfWeek, FoodEntry, Goals, IdSequence, MealCategory, Reminder,
    ScheduledWorkout,
};
use crate::reminders::{self, DueReminder, ReminderWindow};
use crate::store::{StateStore, StoreError};

/// Input for [`Tracker::add_food`].
#[derive(Debug, Clone)]
pub struct NewFood {
    pub name: String,
    pub category: MealCategory,
    pub calories: u32,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

/// Input for [`Tracker::schedule_workout`].
#[derive(Debug, Clone)]
pub struct NewScheduledWorkout {
    pub name: String,
    pub day: DayOfWeek,
    pub time: NaiveTime,
    pub duration: u32,
}

/// Input for [`Tracker::log_workout`].
#[derive(Debug, Clone)]
pub struct NewCompletedWorkout {
    pub name: String,
    pub duration: u32,
    pub calories_burned: u32,
    pub notes: String,
}

pub struct Tracker<C: Clock = SystemClock> {
    store: StateStore,
    clock: C,
    ids: IdSequence,
}

impl<C: Clock> Tracker<C> {
    pub fn new(store: StateStore, clock: C) -> Self {
        let ids = IdSequence::starting_after(store.state().max_id());
        Self { store, clock, ids }
    }

    pub fn state(&self) -> &AppState {
        self.store.state()
    }

    pub fn store(&self) -> &StateStore {
        &self.store
    }

    pub fn now(&self) -> DateTime<Local> {
        self.clock.now()
    }

    /// Today's local calendar day.
    pub fn today(&self) -> NaiveDate {
        self.clock.now().date_naive()
    }

    /// Re-reads the state file and keeps new ids ahead of what it holds.
    pub fn reload(&mut self) -> Result<(), StoreError> {
        self.store.reload()?;
        self.ids.skip_past(self.store.state().max_id());
        Ok(())
    }

    pub fn add_food(&mut self, food: NewFood) -> Result<FoodEntry, StoreError> {
        self.reload()?;
        let now = self.clock.now();
        let entry = FoodEntry {
            id: self.ids.next(&now),
            name: food.name,
            category: food.category,
            calories: food.calories,
            protein: food.protein,
            carbs: food.carbs,
            fat: food.fat,
            date: now.date_naive(),
        };

        self.store.update(|state| state.food_log.push(entry.clone()))?;
        tracing::debug!("Logged food '{}' ({} cal) as {}", entry.name, entry.calories, entry.id);

        Ok(entry)
    }

    /// Adds a weekly workout and immediately posts a reminder announcing it.
    pub fn schedule_workout(
        &mut self,
        workout: NewScheduledWorkout,
    ) -> Result<ScheduledWorkout, StoreError> {
        self.reload()?;
        let now = self.clock.now();
        let scheduled = ScheduledWorkout {
            id: self.ids.next(&now),
            name: workout.name,
            day: workout.day,
            time: workout.time,
            duration: workout.duration,
        };
        let reminder = Reminder::for_workout(self.ids.next(&now), &scheduled);

        self.store.update(|state| {
            state.workouts.scheduled.push(scheduled.clone());
            state.reminders.push(reminder);
        })?;
        tracing::info!(
            "Scheduled '{}' on {} at {}",
            scheduled.name,
            scheduled.day,
            scheduled.time_label()
        );

        Ok(scheduled)
    }

    pub fn log_workout(
        &mut self,
        workout: NewCompletedWorkout,
    ) -> Result<CompletedWorkout, StoreError> {
        self.reload()?;
        let now = self.clock.now();
        let completed = CompletedWorkout {
            id: self.ids.next(&now),
            name: workout.name,
            duration: workout.duration,
            calories_burned: workout.calories_burned,
            notes: workout.notes,
            timestamp: now.with_timezone(&Utc),
        };

        self.store
            .update(|state| state.workouts.history.push(completed.clone()))?;
        tracing::debug!("Logged workout '{}' ({} min)", completed.name, completed.duration);

        Ok(completed)
    }

    pub fn set_goals(&mut self, goals: Goals) -> Result<(), StoreError> {
        self.reload()?;
        self.store.update(|state| state.goals = goals)?;
        tracing::debug!("Updated daily goals");
        Ok(())
    }

    /// Removes every reminder, making their workouts eligible again.
    pub fn clear_reminders(&mut self) -> Result<usize, StoreError> {
        self.reload()?;
        let removed = self.store.update(|state| {
            let count = state.reminders.len();
            state.reminders.clear();
            count
        })?;
        tracing::info!("Cleared {} reminder(s)", removed);
        Ok(removed)
    }

    /// Posts reminders for today's workouts starting within `window`.
    ///
    /// Only saves when something was added.
    pub fn check_reminders(
        &mut self,
        window: ReminderWindow,
    ) -> Result<Vec<DueReminder>, StoreError> {
        self.reload()?;
        let now = self.clock.now();
        let due = reminders::due_reminders(self.store.state(), &now, &mut self.ids, window);

        if !due.is_empty() {
            self.store.update(|state| {
                state
                    .reminders
                    .extend(due.iter().map(|item| item.reminder.clone()))
            })?;
            for item in &due {
                tracing::info!(
                    "Reminder for '{}' starting in {:.0} minute(s)",
                    item.workout_name,
                    item.minutes_until
                );
            }
        }

        Ok(due)
    }
}
