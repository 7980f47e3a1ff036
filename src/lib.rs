//! MotionX Core Library
//!
//! Meal and workout logging, daily and weekly progress views, workout
//! reminders and a keyword-based fitness assistant, all backed by a single
//! local JSON document.

pub mod clock;
pub mod models;
pub mod projections;
pub mod reminders;
pub mod responder;
pub mod store;
pub mod tracker;

pub use clock::{Clock, ManualClock, SystemClock};
pub use models::{
    AppState, CompletedWorkout, DayOfWeek, EntryId, FoodEntry, Goals, MealCategory, Reminder,
    ReminderKind, ScheduledWorkout,
};
pub use reminders::{
    ConsoleNotifier, DueReminder, Notifier, ReminderTask, ReminderWindow, SilentNotifier,
};
pub use store::{CorruptStatePolicy, StateStore, StoreError};
pub use tracker::{NewCompletedWorkout, NewFood, NewScheduledWorkout, Tracker};

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
