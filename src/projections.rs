//! Read-only views over [`AppState`].
//!
//! Everything here is recomputed from the raw logs on each call. `today`
//! is passed in so the views can be checked against any date.

use chrono::{DateTime, Duration, Local, NaiveDate, Utc};
use serde::Serialize;

use crate::models::{
    AppState, CompletedWorkout, DayOfWeek, FoodEntry, Goals, MealCategory, ScheduledWorkout,
};

/// Number of history entries the dashboard shows.
pub const RECENT_HISTORY_LIMIT: usize = 5;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NutritionTotals {
    pub calories: u64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl NutritionTotals {
    fn add(&mut self, entry: &FoodEntry) {
        self.calories += u64::from(entry.calories);
        self.protein += entry.protein;
        self.carbs += entry.carbs;
        self.fat += entry.fat;
    }
}

/// Consumption against one daily goal.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Progress {
    pub consumed: f64,
    pub goal: f64,
    /// Share of the goal reached, capped at 100.
    pub percent: f64,
}

impl Progress {
    fn new(consumed: f64, goal: f64) -> Self {
        let percent = if goal > 0.0 {
            (consumed / goal * 100.0).min(100.0)
        } else {
            100.0
        };
        Self {
            consumed,
            goal,
            percent,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoalProgress {
    pub calories: Progress,
    pub protein: Progress,
    pub carbs: Progress,
    pub fat: Progress,
}

/// One day of the weekly overview.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayPoint {
    pub date: NaiveDate,
    /// Short weekday name, e.g. `Mon`.
    pub label: String,
    pub calories: u64,
    pub workout_minutes: u64,
}

fn local_day(timestamp: &DateTime<Utc>) -> NaiveDate {
    timestamp.with_timezone(&Local).date_naive()
}

fn foods_on(state: &AppState, day: NaiveDate) -> impl Iterator<Item = &FoodEntry> {
    state.food_log.iter().filter(move |entry| entry.date == day)
}

fn workouts_on(state: &AppState, day: NaiveDate) -> impl Iterator<Item = &CompletedWorkout> {
    state
        .workouts
        .history
        .iter()
        .filter(move |workout| local_day(&workout.timestamp) == day)
}

pub fn daily_totals(state: &AppState, day: NaiveDate) -> NutritionTotals {
    foods_on(state, day).fold(NutritionTotals::default(), |mut totals, entry| {
        totals.add(entry);
        totals
    })
}

pub fn goal_progress(totals: &NutritionTotals, goals: &Goals) -> GoalProgress {
    GoalProgress {
        calories: Progress::new(totals.calories as f64, f64::from(goals.calories)),
        protein: Progress::new(totals.protein, goals.protein),
        carbs: Progress::new(totals.carbs, goals.carbs),
        fat: Progress::new(totals.fat, goals.fat),
    }
}

/// The day's food grouped by meal, in display order.
pub fn foods_by_category(state: &AppState, day: NaiveDate) -> Vec<(MealCategory, Vec<&FoodEntry>)> {
    MealCategory::ALL
        .into_iter()
        .map(|category| {
            let entries = foods_on(state, day)
                .filter(|entry| entry.category == category)
                .collect();
            (category, entries)
        })
        .collect()
}

pub fn workout_done_on(state: &AppState, day: NaiveDate) -> bool {
    workouts_on(state, day).next().is_some()
}

/// Calories eaten and workout minutes for the seven days ending on `today`.
pub fn weekly_series(state: &AppState, today: NaiveDate) -> Vec<DayPoint> {
    (0..7)
        .rev()
        .map(|days_back| {
            let date = today - Duration::days(days_back);
            DayPoint {
                date,
                label: date.format("%a").to_string(),
                calories: daily_totals(state, date).calories,
                workout_minutes: workouts_on(state, date)
                    .map(|workout| u64::from(workout.duration))
                    .sum(),
            }
        })
        .collect()
}

/// Most recent completed workouts first.
pub fn recent_history(state: &AppState, limit: usize) -> Vec<&CompletedWorkout> {
    let mut history: Vec<&CompletedWorkout> = state.workouts.history.iter().collect();
    history.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    history.truncate(limit);
    history
}

/// Scheduled workouts grouped Monday through Sunday.
pub fn schedule_by_day(state: &AppState) -> Vec<(DayOfWeek, Vec<&ScheduledWorkout>)> {
    DayOfWeek::ALL
        .into_iter()
        .map(|day| {
            let workouts = state
                .workouts
                .scheduled
                .iter()
                .filter(|workout| workout.day == day)
                .collect();
            (day, workouts)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EntryId;
    use chrono::{NaiveTime, TimeZone};

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, d).unwrap()
    }

    fn food(id: i64, category: MealCategory, calories: u32, date: NaiveDate) -> FoodEntry {
        FoodEntry {
            id: EntryId::new(id),
            name: format!("Food {}", id),
            category,
            calories,
            protein: 10.0,
            carbs: 20.0,
            fat: 5.5,
            date,
        }
    }

    fn completed(id: i64, duration: u32, date: NaiveDate, hour: u32) -> CompletedWorkout {
        let local = Local
            .from_local_datetime(&date.and_hms_opt(hour, 0, 0).unwrap())
            .unwrap();
        CompletedWorkout {
            id: EntryId::new(id),
            name: format!("Workout {}", id),
            duration,
            calories_burned: duration * 8,
            notes: String::new(),
            timestamp: local.with_timezone(&Utc),
        }
    }

    #[test]
    fn test_daily_totals_sums_only_that_day() {
        let mut state = AppState::default();
        state.food_log.push(food(1, MealCategory::Breakfast, 300, day(10)));
        state.food_log.push(food(2, MealCategory::Lunch, 450, day(10)));
        state.food_log.push(food(3, MealCategory::Snack, 120, day(10)));
        state.food_log.push(food(4, MealCategory::Dinner, 900, day(9)));

        let totals = daily_totals(&state, day(10));
        assert_eq!(totals.calories, 870);
        assert_eq!(totals.protein, 30.0);
        assert_eq!(totals.carbs, 60.0);
        assert_eq!(totals.fat, 16.5);
    }

    #[test]
    fn test_daily_totals_empty_day() {
        let state = AppState::default();
        assert_eq!(daily_totals(&state, day(10)), NutritionTotals::default());
    }

    #[test]
    fn test_goal_progress_caps_at_100() {
        let totals = NutritionTotals {
            calories: 3000,
            protein: 60.0,
            carbs: 0.0,
            fat: 65.0,
        };
        let progress = goal_progress(&totals, &Goals::default());
        assert_eq!(progress.calories.percent, 100.0);
        assert_eq!(progress.calories.consumed, 3000.0);
        assert_eq!(progress.protein.percent, 50.0);
        assert_eq!(progress.carbs.percent, 0.0);
        assert_eq!(progress.fat.percent, 100.0);
    }

    #[test]
    fn test_foods_by_category_keeps_insertion_order() {
        let mut state = AppState::default();
        state.food_log.push(food(1, MealCategory::Snack, 100, day(10)));
        state.food_log.push(food(2, MealCategory::Breakfast, 200, day(10)));
        state.food_log.push(food(3, MealCategory::Snack, 150, day(10)));
        state.food_log.push(food(4, MealCategory::Snack, 150, day(11)));

        let grouped = foods_by_category(&state, day(10));
        let categories: Vec<MealCategory> = grouped.iter().map(|(c, _)| *c).collect();
        assert_eq!(categories, MealCategory::ALL.to_vec());

        let snack_ids: Vec<i64> = grouped[3].1.iter().map(|e| e.id.value()).collect();
        assert_eq!(snack_ids, vec![1, 3]);
        assert_eq!(grouped[0].1.len(), 1);
        assert!(grouped[1].1.is_empty());
    }

    #[test]
    fn test_workout_done_on() {
        let mut state = AppState::default();
        assert!(!workout_done_on(&state, day(10)));

        state.workouts.history.push(completed(1, 30, day(9), 18));
        assert!(!workout_done_on(&state, day(10)));

        state.workouts.history.push(completed(2, 30, day(10), 7));
        assert!(workout_done_on(&state, day(10)));
    }

    #[test]
    fn test_late_evening_workout_counts_for_local_day() {
        let mut state = AppState::default();
        let late = Local
            .from_local_datetime(&day(10).and_hms_opt(23, 45, 0).unwrap())
            .unwrap();
        state.workouts.history.push(CompletedWorkout {
            id: EntryId::new(1),
            name: "Night Run".to_string(),
            duration: 20,
            calories_burned: 200,
            notes: String::new(),
            timestamp: late.with_timezone(&Utc),
        });

        assert!(workout_done_on(&state, day(10)));
        assert!(!workout_done_on(&state, day(11)));
        let series = weekly_series(&state, day(11));
        assert_eq!(series[5].workout_minutes, 20);
        assert_eq!(series[6].workout_minutes, 0);
    }

    #[test]
    fn test_weekly_series_has_seven_days_in_order() {
        let mut state = AppState::default();
        state.food_log.push(food(1, MealCategory::Lunch, 500, day(4)));
        state.food_log.push(food(2, MealCategory::Lunch, 700, day(10)));
        state.food_log.push(food(3, MealCategory::Dinner, 300, day(10)));
        // Outside the window
        state.food_log.push(food(4, MealCategory::Lunch, 999, day(3)));
        state.workouts.history.push(completed(5, 45, day(7), 8));
        state.workouts.history.push(completed(6, 15, day(7), 19));

        let series = weekly_series(&state, day(10));
        assert_eq!(series.len(), 7);

        let dates: Vec<NaiveDate> = series.iter().map(|p| p.date).collect();
        assert_eq!(dates, (4..=10).map(day).collect::<Vec<_>>());

        // 2025-03-10 is a Monday
        assert_eq!(series[6].label, "Mon");
        assert_eq!(series[0].label, "Tue");

        assert_eq!(series[0].calories, 500);
        assert_eq!(series[6].calories, 1000);
        assert_eq!(series[3].workout_minutes, 60);
        assert_eq!(series[1].calories, 0);
        assert_eq!(series[1].workout_minutes, 0);
    }

    #[test]
    fn test_recent_history_sorted_and_truncated() {
        let mut state = AppState::default();
        for (id, d) in [(1, 3), (2, 9), (3, 5), (4, 8), (5, 1), (6, 7), (7, 2)] {
            state.workouts.history.push(completed(id, 30, day(d), 12));
        }

        let recent = recent_history(&state, RECENT_HISTORY_LIMIT);
        let ids: Vec<i64> = recent.iter().map(|w| w.id.value()).collect();
        assert_eq!(ids, vec![2, 4, 6, 3, 1]);
    }

    #[test]
    fn test_schedule_by_day() {
        let mut state = AppState::default();
        let slots = [
            (1, DayOfWeek::Friday),
            (2, DayOfWeek::Monday),
            (3, DayOfWeek::Friday),
        ];
        for (id, weekday) in slots {
            state.workouts.scheduled.push(ScheduledWorkout {
                id: EntryId::new(id),
                name: format!("Slot {}", id),
                day: weekday,
                time: NaiveTime::from_hms_opt(7, 0, 0).unwrap(),
                duration: 30,
            });
        }

        let plan = schedule_by_day(&state);
        assert_eq!(plan.len(), 7);
        assert_eq!(plan[0].0, DayOfWeek::Monday);
        assert_eq!(plan[0].1.len(), 1);
        let friday: Vec<i64> = plan[4].1.iter().map(|w| w.id.value()).collect();
        assert_eq!(friday, vec![1, 3]);
        assert!(plan[6].1.is_empty());
    }
}
