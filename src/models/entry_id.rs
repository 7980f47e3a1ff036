use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier for any logged record.
///
/// Ids are derived from the creation time in milliseconds since the Unix
/// epoch, which keeps them compatible with data exported by the browser
/// client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(i64);

impl EntryId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Hands out time-derived ids that never repeat within a session.
///
/// Two records created in the same millisecond get consecutive ids.
#[derive(Debug, Clone, Default)]
pub struct IdSequence {
    last: Option<EntryId>,
}

impl IdSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts the sequence after an id already in use.
    pub fn starting_after(last: Option<EntryId>) -> Self {
        Self { last }
    }

    /// Moves the sequence past `id` if it is newer than anything handed out.
    pub fn skip_past(&mut self, id: Option<EntryId>) {
        if id > self.last {
            self.last = id;
        }
    }

    pub fn next<Tz: TimeZone>(&mut self, now: &DateTime<Tz>) -> EntryId {
        let candidate = now.timestamp_millis();
        let id = match self.last {
            Some(last) if candidate <= last.0 => EntryId(last.0 + 1),
            _ => EntryId(candidate),
        };
        self.last = Some(id);
        id
    }
}
