use chrono::{Datelike, Local};
use clap::Args;

use motionx::projections::{
    daily_totals, goal_progress, recent_history, weekly_series, workout_done_on,
    RECENT_HISTORY_LIMIT,
};
use motionx::{Clock, DayOfWeek, Tracker};

use super::{bar, OutputFormat};

/// Today's summary: calories, macros, workouts and reminders.
#[derive(Args)]
pub struct DashboardCommand {
    /// Output format
    #[arg(long, short, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

impl DashboardCommand {
    pub fn run<C: Clock>(&self, tracker: &Tracker<C>) -> Result<(), Box<dyn std::error::Error>> {
        let today = tracker.today();
        let weekday = DayOfWeek::from(today.weekday());
        let state = tracker.state();

        let totals = daily_totals(state, today);
        let progress = goal_progress(&totals, &state.goals);
        let done = workout_done_on(state, today);
        let scheduled_today: Vec<_> = state
            .workouts
            .scheduled
            .iter()
            .filter(|workout| workout.day == weekday)
            .collect();
        let recent = recent_history(state, RECENT_HISTORY_LIMIT);

        match self.format {
            OutputFormat::Json => {
                let output = serde_json::json!({
                    "date": today,
                    "totals": totals,
                    "progress": progress,
                    "workoutDone": done,
                    "scheduledToday": scheduled_today,
                    "recentWorkouts": recent,
                    "reminders": state.reminders,
                });
                println!("{}", serde_json::to_string_pretty(&output)?);
            }
            OutputFormat::Text => {
                println!("MotionX - {} ({})", today, weekday);
                println!("{}", "=".repeat(50));
                println!(
                    "Calories  {} {}/{}",
                    bar(progress.calories.percent, 20),
                    totals.calories,
                    state.goals.calories
                );
                println!(
                    "Macros    P {}/{}g  C {}/{}g  F {}/{}g",
                    totals.protein,
                    state.goals.protein,
                    totals.carbs,
                    state.goals.carbs,
                    totals.fat,
                    state.goals.fat
                );
                println!(
                    "Workout   {}",
                    if done { "done today" } else { "not yet today" }
                );

                println!();
                println!("Scheduled today:");
                if scheduled_today.is_empty() {
                    println!("  (rest day)");
                }
                for workout in &scheduled_today {
                    println!("  {}", workout);
                }

                println!();
                println!("Recent workouts:");
                if recent.is_empty() {
                    println!("  (none yet)");
                }
                for workout in &recent {
                    println!(
                        "  {} {} ({} min)",
                        workout.timestamp.with_timezone(&Local).format("%a %d %b"),
                        workout.name,
                        workout.duration
                    );
                }

                if !state.reminders.is_empty() {
                    println!();
                    println!("Reminders:");
                    for reminder in &state.reminders {
                        println!("  {}", reminder.message);
                    }
                }
            }
        }

        Ok(())
    }
}

/// Calories and workout minutes for the last seven days.
#[derive(Args)]
pub struct WeeklyCommand {
    /// Output format
    #[arg(long, short, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

impl WeeklyCommand {
    pub fn run<C: Clock>(&self, tracker: &Tracker<C>) -> Result<(), Box<dyn std::error::Error>> {
        let series = weekly_series(tracker.state(), tracker.today());

        match self.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&series)?);
            }
            OutputFormat::Text => {
                let goal = f64::from(tracker.state().goals.calories);
                let max_minutes = series
                    .iter()
                    .map(|point| point.workout_minutes)
                    .max()
                    .unwrap_or(0);

                println!(
                    "{:<4} {:<28} {:>6}   {:<20} {:>4}",
                    "DAY", "CALORIES", "", "WORKOUT", "MIN"
                );
                for point in &series {
                    let calorie_percent = if goal > 0.0 {
                        point.calories as f64 / goal * 100.0
                    } else {
                        0.0
                    };
                    let minute_percent = if max_minutes > 0 {
                        point.workout_minutes as f64 / max_minutes as f64 * 100.0
                    } else {
                        0.0
                    };
                    println!(
                        "{:<4} {:<28} {:>6}   {:<20} {:>4}",
                        point.label,
                        bar(calorie_percent, 26),
                        point.calories,
                        bar(minute_percent, 18),
                        point.workout_minutes
                    );
                }
            }
        }

        Ok(())
    }
}
