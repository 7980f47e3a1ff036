mod app_state;
mod day_of_week;
mod entry_id;
mod food_entry;
mod goals;
mod meal_category;
mod reminder;
mod workout;

pub use app_state::{AppState, Workouts};
pub use day_of_week::DayOfWeek;
pub use entry_id::{EntryId, IdSequence};
pub use food_entry::FoodEntry;
pub use goals::Goals;
pub use meal_category::MealCategory;
pub use reminder::{Reminder, ReminderKind};
pub use workout::{parse_time_of_day, CompletedWorkout, ScheduledWorkout};
