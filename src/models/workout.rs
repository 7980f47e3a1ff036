use chrono::{DateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::day_of_week::DayOfWeek;
use super::entry_id::EntryId;

/// A recurring weekly workout slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledWorkout {
    pub id: EntryId,
    pub name: String,
    pub day: DayOfWeek,
    #[serde(with = "time_of_day")]
    pub time: NaiveTime,
    /// Planned length in minutes
    pub duration: u32,
}

impl ScheduledWorkout {
    /// The start time as shown to the user, e.g. `07:30`.
    pub fn time_label(&self) -> String {
        self.time.format(time_of_day::FORMAT).to_string()
    }
}

impl fmt::Display for ScheduledWorkout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({} min)", self.time_label(), self.name, self.duration)
    }
}

/// A workout that was actually done.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletedWorkout {
    pub id: EntryId,
    pub name: String,
    pub duration: u32,
    pub calories_burned: u32,
    #[serde(default)]
    pub notes: String,
    #[serde(rename = "date")]
    pub timestamp: DateTime<Utc>,
}

/// `HH:MM` wire format for scheduled start times.
pub(crate) mod time_of_day {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%H:%M";

    pub fn parse(value: &str) -> Result<NaiveTime, chrono::ParseError> {
        NaiveTime::parse_from_str(value, FORMAT)
            .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
    }

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).map_err(serde::de::Error::custom)
    }
}

/// Parses a user supplied start time (`HH:MM`).
pub fn parse_time_of_day(value: &str) -> Result<NaiveTime, String> {
    time_of_day::parse(value)
        .map_err(|_| format!("Invalid time '{}'. Use HH:MM (24-hour).", value))
}
