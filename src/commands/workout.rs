use chrono::{Local, NaiveTime};
use clap::{Args, Subcommand};

use motionx::models::parse_time_of_day;
use motionx::projections::{recent_history, schedule_by_day, RECENT_HISTORY_LIMIT};
use motionx::{Clock, DayOfWeek, NewCompletedWorkout, NewScheduledWorkout, Tracker};

use super::OutputFormat;

#[derive(Args)]
pub struct WorkoutCommand {
    #[command(subcommand)]
    pub command: WorkoutSubcommand,
}

#[derive(Subcommand)]
pub enum WorkoutSubcommand {
    /// Add a recurring weekly workout
    Schedule {
        /// Workout name
        name: String,

        /// Day of the week (e.g. monday, tue)
        #[arg(long, short)]
        day: DayOfWeek,

        /// Start time (HH:MM, 24-hour)
        #[arg(long, short, value_parser = parse_time_of_day)]
        time: NaiveTime,

        /// Planned duration in minutes
        #[arg(long)]
        duration: u32,
    },

    /// Record a workout you just finished
    Log {
        /// Workout name
        name: String,

        /// Duration in minutes
        #[arg(long)]
        duration: u32,

        /// Calories burned
        #[arg(long)]
        calories: u32,

        /// Free-form notes
        #[arg(long, short, default_value = "")]
        notes: String,
    },

    /// Show the weekly schedule
    Plan {
        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Show completed workouts, most recent first
    History {
        /// Maximum number of workouts to show
        #[arg(long, short, default_value_t = RECENT_HISTORY_LIMIT)]
        limit: usize,

        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },
}

impl WorkoutCommand {
    pub fn run<C: Clock>(
        &self,
        tracker: &mut Tracker<C>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        match &self.command {
            WorkoutSubcommand::Schedule {
                name,
                day,
                time,
                duration,
            } => {
                let scheduled = tracker.schedule_workout(NewScheduledWorkout {
                    name: name.clone(),
                    day: *day,
                    time: *time,
                    duration: *duration,
                })?;
                println!("Scheduled for {}: {}", scheduled.day, scheduled);
                Ok(())
            }
            WorkoutSubcommand::Log {
                name,
                duration,
                calories,
                notes,
            } => {
                let completed = tracker.log_workout(NewCompletedWorkout {
                    name: name.clone(),
                    duration: *duration,
                    calories_burned: *calories,
                    notes: notes.clone(),
                })?;
                println!(
                    "Logged {} ({} min, {} cal burned)",
                    completed.name, completed.duration, completed.calories_burned
                );
                Ok(())
            }
            WorkoutSubcommand::Plan { format } => self.show_plan(format, tracker),
            WorkoutSubcommand::History { limit, format } => {
                self.show_history(*limit, format, tracker)
            }
        }
    }

    fn show_plan<C: Clock>(
        &self,
        format: &OutputFormat,
        tracker: &Tracker<C>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let state = tracker.state();

        match format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&state.workouts.scheduled)?);
            }
            OutputFormat::Text => {
                if state.workouts.scheduled.is_empty() {
                    println!("No workouts scheduled.");
                    return Ok(());
                }
                for (day, workouts) in schedule_by_day(state) {
                    if workouts.is_empty() {
                        continue;
                    }
                    println!("{}", day);
                    for workout in workouts {
                        println!("  {}", workout);
                    }
                }
            }
        }

        Ok(())
    }

    fn show_history<C: Clock>(
        &self,
        limit: usize,
        format: &OutputFormat,
        tracker: &Tracker<C>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let history = recent_history(tracker.state(), limit);

        match format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&history)?);
            }
            OutputFormat::Text => {
                if history.is_empty() {
                    println!("No workouts logged yet.");
                    return Ok(());
                }
                println!(
                    "{:<17} {:<24} {:>6} {:>6}",
                    "DATE", "WORKOUT", "MIN", "CAL"
                );
                println!("{}", "-".repeat(56));
                for workout in history {
                    let when = workout.timestamp.with_timezone(&Local);
                    println!(
                        "{:<17} {:<24} {:>6} {:>6}",
                        when.format("%Y-%m-%d %H:%M").to_string(),
                        workout.name,
                        workout.duration,
                        workout.calories_burned
                    );
                    if !workout.notes.is_empty() {
                        println!("  {}", workout.notes);
                    }
                }
            }
        }

        Ok(())
    }
}
