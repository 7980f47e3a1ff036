mod assistant;
mod config_cmd;
mod dashboard;
mod food;
mod goals;
mod reminders;
mod workout;

use clap::ValueEnum;

pub use assistant::{AskCommand, ChatCommand};
pub use config_cmd::ConfigCommand;
pub use dashboard::{DashboardCommand, WeeklyCommand};
pub use food::FoodCommand;
pub use goals::GoalsCommand;
pub use reminders::{RemindersCommand, WatchCommand};
pub use workout::WorkoutCommand;

#[derive(Clone, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Parses a gram amount, rejecting negatives.
pub(crate) fn parse_grams(value: &str) -> Result<f64, String> {
    let grams: f64 = value
        .parse()
        .map_err(|_| format!("'{}' is not a number", value))?;
    if !grams.is_finite() || grams < 0.0 {
        return Err(format!("'{}' must be zero or more grams", value));
    }
    Ok(grams)
}

/// Text progress bar, e.g. `[#####-----]`.
pub(crate) fn bar(percent: f64, width: usize) -> String {
    let filled = ((percent / 100.0) * width as f64).round() as usize;
    let filled = filled.min(width);
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_grams() {
        assert_eq!(parse_grams("12.5").unwrap(), 12.5);
        assert_eq!(parse_grams("0").unwrap(), 0.0);
        assert!(parse_grams("-1").is_err());
        assert!(parse_grams("lots").is_err());
        assert!(parse_grams("NaN").is_err());
    }

    #[test]
    fn test_bar() {
        assert_eq!(bar(0.0, 10), "[----------]");
        assert_eq!(bar(50.0, 10), "[#####-----]");
        assert_eq!(bar(100.0, 4), "[####]");
    }
}
