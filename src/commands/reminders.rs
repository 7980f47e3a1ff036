use clap::{Args, Subcommand};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use motionx::reminders::check_and_notify;
use motionx::{
    Clock, ConsoleNotifier, Notifier, ReminderTask, ReminderWindow, SilentNotifier, Tracker,
};

use crate::config::Config;

use super::OutputFormat;

fn notifier_for(config: &Config) -> Arc<dyn Notifier> {
    if config.notifications.value {
        Arc::new(ConsoleNotifier)
    } else {
        Arc::new(SilentNotifier)
    }
}

#[derive(Args)]
pub struct RemindersCommand {
    #[command(subcommand)]
    pub command: RemindersSubcommand,
}

#[derive(Subcommand)]
pub enum RemindersSubcommand {
    /// List posted reminders
    List {
        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Run one reminder check now
    Check {
        /// Remind about workouts starting within this many minutes
        #[arg(long, short)]
        window: Option<u32>,
    },

    /// Remove all reminders so their workouts can be reminded again
    Clear,
}

impl RemindersCommand {
    pub fn run<C: Clock>(
        &self,
        tracker: &mut Tracker<C>,
        config: &Config,
    ) -> Result<(), Box<dyn std::error::Error>> {
        match &self.command {
            RemindersSubcommand::List { format } => {
                let reminders = &tracker.state().reminders;
                match format {
                    OutputFormat::Json => {
                        println!("{}", serde_json::to_string_pretty(reminders)?);
                    }
                    OutputFormat::Text => {
                        if reminders.is_empty() {
                            println!("No reminders.");
                        }
                        for reminder in reminders {
                            println!("{}  {}", reminder.id, reminder.message);
                        }
                    }
                }
                Ok(())
            }
            RemindersSubcommand::Check { window } => {
                let window = ReminderWindow::minutes(
                    window.unwrap_or(config.reminder_window_minutes.value),
                );
                let notifier = notifier_for(config);
                let due = check_and_notify(tracker, notifier.as_ref(), window)?;

                if due.is_empty() {
                    println!(
                        "No workouts due in the next {} minutes.",
                        window.as_minutes()
                    );
                }
                for item in &due {
                    println!("{}", item.reminder.message);
                }
                Ok(())
            }
            RemindersSubcommand::Clear => {
                let removed = tracker.clear_reminders()?;
                println!("Cleared {} reminder(s).", removed);
                Ok(())
            }
        }
    }
}

/// Check for upcoming workouts in the background until Ctrl-C.
#[derive(Args)]
pub struct WatchCommand {
    /// Minutes between checks (overrides config)
    #[arg(long, short)]
    pub interval: Option<u64>,

    /// Remind about workouts starting within this many minutes (overrides config)
    #[arg(long, short)]
    pub window: Option<u32>,
}

impl WatchCommand {
    pub async fn run<C: Clock + 'static>(
        &self,
        tracker: Tracker<C>,
        config: &Config,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let interval = self
            .interval
            .unwrap_or(config.reminder_interval_minutes.value);
        if interval == 0 {
            return Err("--interval must be at least 1 minute".into());
        }
        let window =
            ReminderWindow::minutes(self.window.unwrap_or(config.reminder_window_minutes.value));

        let tracker = Arc::new(Mutex::new(tracker));
        let task = ReminderTask::start(
            tracker,
            notifier_for(config),
            Duration::from_secs(interval * 60),
            window,
        );

        println!(
            "Watching for workouts within {} minutes, checking every {} minute(s). Press Ctrl-C to stop.",
            window.as_minutes(),
            interval
        );

        let signal = tokio::signal::ctrl_c().await;
        task.stop().await;
        signal?;

        println!("Stopped.");
        Ok(())
    }
}
