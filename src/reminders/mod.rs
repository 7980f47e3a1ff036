//! Workout reminders.
//!
//! A reminder is posted for a workout scheduled today that starts within the
//! reminder window. A workout that already has a reminder (from any day) is
//! skipped, so a weekly slot is reminded once until its reminder is cleared.

mod notifier;
mod task;

use chrono::{DateTime, Datelike, TimeZone};
use std::collections::HashSet;
use std::time::Duration;

use crate::models::{AppState, DayOfWeek, IdSequence, Reminder};

pub use notifier::{ConsoleNotifier, Notifier, SilentNotifier};
pub use task::{check_and_notify, ReminderTask};

/// Title used for reminder notifications.
pub const NOTIFICATION_TITLE: &str = "MotionX Workout Reminder";

/// How often the background task looks for upcoming workouts.
pub const DEFAULT_CHECK_INTERVAL: Duration = Duration::from_secs(5 * 60);

/// How far ahead a workout may start and still be reminded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReminderWindow {
    minutes: u32,
}

impl ReminderWindow {
    pub fn minutes(minutes: u32) -> Self {
        Self { minutes }
    }

    pub fn as_minutes(&self) -> u32 {
        self.minutes
    }
}

impl Default for ReminderWindow {
    fn default() -> Self {
        Self { minutes: 60 }
    }
}

/// A reminder that was just created, with what is needed to announce it.
#[derive(Debug, Clone, PartialEq)]
pub struct DueReminder {
    pub reminder: Reminder,
    pub workout_name: String,
    /// Fractional minutes between now and the workout start.
    pub minutes_until: f64,
}

impl DueReminder {
    pub fn notification_body(&self) -> String {
        format!(
            "Your {} workout is scheduled in {} minutes.",
            self.workout_name,
            self.minutes_until.round()
        )
    }
}

/// Finds today's workouts that start in `(0, window]` minutes and have no
/// reminder yet. The returned reminders are not added to `state`.
pub fn due_reminders<Tz: TimeZone>(
    state: &AppState,
    now: &DateTime<Tz>,
    ids: &mut IdSequence,
    window: ReminderWindow,
) -> Vec<DueReminder> {
    let today = DayOfWeek::from(now.weekday());
    let local_now = now.naive_local();
    let window_minutes = f64::from(window.minutes);

    let mut seen = HashSet::new();
    let mut due = Vec::new();

    for workout in state.workouts.scheduled.iter().filter(|w| w.day == today) {
        let starts_at = local_now.date().and_time(workout.time);
        let minutes_until = (starts_at - local_now).num_milliseconds() as f64 / 60_000.0;

        if minutes_until <= 0.0 || minutes_until > window_minutes {
            continue;
        }
        if state.has_reminder_for(workout.id) || !seen.insert(workout.id) {
            continue;
        }

        due.push(DueReminder {
            reminder: Reminder::for_workout(ids.next(now), workout),
            workout_name: workout.name.clone(),
            minutes_until,
        });
    }

    due
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EntryId, ScheduledWorkout};
    use chrono::{Duration as ChronoDuration, Local, NaiveTime, Timelike};

    fn monday_at(hour: u32, minute: u32) -> DateTime<Local> {
        // 2025-01-06 is a Monday
        Local.with_ymd_and_hms(2025, 1, 6, hour, minute, 0).unwrap()
    }

    fn workout_at(id: i64, day: DayOfWeek, time: DateTime<Local>) -> ScheduledWorkout {
        ScheduledWorkout {
            id: EntryId::new(id),
            name: format!("Workout {}", id),
            day,
            time: NaiveTime::from_hms_opt(time.hour(), time.minute(), 0).unwrap(),
            duration: 45,
        }
    }

    fn run(state: &mut AppState, now: DateTime<Local>) -> Vec<DueReminder> {
        let mut ids = IdSequence::starting_after(state.max_id());
        let due = due_reminders(state, &now, &mut ids, ReminderWindow::default());
        state
            .reminders
            .extend(due.iter().map(|item| item.reminder.clone()));
        due
    }

    #[test]
    fn test_workout_in_thirty_minutes_is_reminded_once() {
        let now = monday_at(9, 0);
        let mut state = AppState::default();
        state
            .workouts
            .scheduled
            .push(workout_at(1, DayOfWeek::Monday, now + ChronoDuration::minutes(30)));

        let due = run(&mut state, now);
        assert_eq!(due.len(), 1);
        assert_eq!(due[0].reminder.workout_id, EntryId::new(1));
        assert_eq!(due[0].minutes_until, 30.0);
        assert_eq!(state.reminders.len(), 1);

        let again = run(&mut state, now);
        assert!(again.is_empty());
        assert_eq!(state.reminders.len(), 1);
    }

    #[test]
    fn test_workout_outside_window_is_not_reminded() {
        let now = monday_at(9, 0);
        let mut state = AppState::default();
        state
            .workouts
            .scheduled
            .push(workout_at(1, DayOfWeek::Monday, now + ChronoDuration::minutes(90)));

        assert!(run(&mut state, now).is_empty());
        assert!(state.reminders.is_empty());
    }

    #[test]
    fn test_workout_already_started_is_not_reminded() {
        let now = monday_at(9, 0);
        let mut state = AppState::default();
        state
            .workouts
            .scheduled
            .push(workout_at(1, DayOfWeek::Monday, now - ChronoDuration::minutes(5)));
        state
            .workouts
            .scheduled
            .push(workout_at(2, DayOfWeek::Monday, now));

        assert!(run(&mut state, now).is_empty());
    }

    #[test]
    fn test_window_edge_is_inclusive() {
        let now = monday_at(9, 0);
        let mut state = AppState::default();
        state
            .workouts
            .scheduled
            .push(workout_at(1, DayOfWeek::Monday, now + ChronoDuration::minutes(60)));
        state
            .workouts
            .scheduled
            .push(workout_at(2, DayOfWeek::Monday, now + ChronoDuration::minutes(61)));

        let due = run(&mut state, now);
        assert_eq!(due.len(), 1);
        assert_eq!(due[0].reminder.workout_id, EntryId::new(1));
    }

    #[test]
    fn test_other_days_are_ignored() {
        let now = monday_at(9, 0);
        let mut state = AppState::default();
        state
            .workouts
            .scheduled
            .push(workout_at(1, DayOfWeek::Tuesday, now + ChronoDuration::minutes(30)));

        assert!(run(&mut state, now).is_empty());
    }

    #[test]
    fn test_existing_reminder_from_earlier_week_blocks_new_one() {
        let now = monday_at(9, 0);
        let workout = workout_at(1, DayOfWeek::Monday, now + ChronoDuration::minutes(20));
        let mut state = AppState::default();
        state
            .reminders
            .push(Reminder::for_workout(EntryId::new(50), &workout));
        state.workouts.scheduled.push(workout);

        // A week later the same slot is still considered handled
        assert!(run(&mut state, now + ChronoDuration::days(7)).is_empty());
    }

    #[test]
    fn test_duplicate_workout_ids_produce_one_reminder() {
        let now = monday_at(9, 0);
        let workout = workout_at(1, DayOfWeek::Monday, now + ChronoDuration::minutes(15));
        let mut state = AppState::default();
        state.workouts.scheduled.push(workout.clone());
        state.workouts.scheduled.push(workout);

        assert_eq!(run(&mut state, now).len(), 1);
    }

    #[test]
    fn test_notification_body_rounds_minutes() {
        let due = DueReminder {
            reminder: Reminder {
                id: EntryId::new(1),
                message: "Workout: Row at 10:00".to_string(),
                kind: crate::models::ReminderKind::Workout,
                workout_id: EntryId::new(2),
            },
            workout_name: "Row".to_string(),
            minutes_until: 29.6,
        };
        assert_eq!(
            due.notification_body(),
            "Your Row workout is scheduled in 30 minutes."
        );
    }
}
