//! JSON file persistence for [`AppState`].
//!
//! The whole state lives in one document. Every mutation goes through
//! [`StateStore::update`], which writes the document back before returning.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

use crate::models::AppState;

/// Default file name, matching the browser client's storage key.
pub const STATE_FILE_NAME: &str = "motionx-data.json";

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("I/O error on '{}': {}", .0.display(), .1)]
    Io(PathBuf, #[source] io::Error),

    #[error("Saved state '{}' could not be read: {}", .0.display(), .1)]
    Corrupt(PathBuf, #[source] serde_json::Error),

    #[error("Failed to serialize state: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// What to do when the saved state exists but cannot be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CorruptStatePolicy {
    /// Refuse to start so nothing gets overwritten.
    #[default]
    Fail,
    /// Move the unreadable file aside and start from defaults.
    Reset,
}

impl fmt::Display for CorruptStatePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CorruptStatePolicy::Fail => write!(f, "fail"),
            CorruptStatePolicy::Reset => write!(f, "reset"),
        }
    }
}

impl FromStr for CorruptStatePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fail" => Ok(CorruptStatePolicy::Fail),
            "reset" => Ok(CorruptStatePolicy::Reset),
            _ => Err(format!(
                "Invalid corrupt state policy '{}'. Valid options: fail, reset",
                s
            )),
        }
    }
}

/// Owns the in-memory state and the file it is saved to.
///
/// Other processes may write the same file, so callers that hold a store
/// for a long time should [`reload`](StateStore::reload) before acting on
/// what it contains.
#[derive(Debug)]
pub struct StateStore {
    path: PathBuf,
    policy: CorruptStatePolicy,
    state: AppState,
}

impl StateStore {
    /// Loads the state at `path`, or starts fresh if the file does not exist.
    pub fn open(path: impl Into<PathBuf>, policy: CorruptStatePolicy) -> Result<Self, StoreError> {
        let path = path.into();
        let state = load(&path, policy)?;
        Ok(Self {
            path,
            policy,
            state,
        })
    }

    /// Replaces the in-memory state with what is currently on disk.
    pub fn reload(&mut self) -> Result<(), StoreError> {
        self.state = load(&self.path, self.policy)?;
        Ok(())
    }

    /// Wraps an in-memory state without touching disk.
    pub fn with_state(path: impl Into<PathBuf>, state: AppState) -> Self {
        Self {
            path: path.into(),
            policy: CorruptStatePolicy::default(),
            state,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Applies `mutate` to a copy of the state and saves it.
    ///
    /// The in-memory state only changes once the copy is on disk.
    pub fn update<T>(&mut self, mutate: impl FnOnce(&mut AppState) -> T) -> Result<T, StoreError> {
        let mut next = self.state.clone();
        let result = mutate(&mut next);
        write_state(&self.path, &next)?;
        self.state = next;
        Ok(result)
    }

    /// Writes the state to disk, replacing the previous file atomically.
    pub fn save(&self) -> Result<(), StoreError> {
        write_state(&self.path, &self.state)
    }
}

fn load(path: &Path, policy: CorruptStatePolicy) -> Result<AppState, StoreError> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::debug!("No saved state at {}, starting fresh", path.display());
            return Ok(AppState::default());
        }
        Err(e) => return Err(StoreError::Io(path.to_path_buf(), e)),
    };

    match serde_json::from_str::<AppState>(&contents) {
        Ok(state) => {
            tracing::debug!(
                "Loaded state from {} ({} food entries, {} scheduled, {} completed)",
                path.display(),
                state.food_log.len(),
                state.workouts.scheduled.len(),
                state.workouts.history.len()
            );
            Ok(state)
        }
        Err(e) => match policy {
            CorruptStatePolicy::Fail => Err(StoreError::Corrupt(path.to_path_buf(), e)),
            CorruptStatePolicy::Reset => {
                let backup = corrupt_backup_path(path);
                fs::rename(path, &backup).map_err(|e| StoreError::Io(path.to_path_buf(), e))?;
                tracing::warn!(
                    "Saved state {} is unreadable ({}); moved to {} and starting fresh",
                    path.display(),
                    e,
                    backup.display()
                );
                Ok(AppState::default())
            }
        },
    }
}

fn write_state(path: &Path, state: &AppState) -> Result<(), StoreError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| StoreError::Io(parent.to_path_buf(), e))?;
    }

    let json = serde_json::to_string_pretty(state)?;
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, json).map_err(|e| StoreError::Io(tmp.clone(), e))?;
    fs::rename(&tmp, path).map_err(|e| StoreError::Io(path.to_path_buf(), e))?;

    Ok(())
}

fn corrupt_backup_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".corrupt");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        CompletedWorkout, DayOfWeek, EntryId, FoodEntry, MealCategory, Reminder, ScheduledWorkout,
    };
    use chrono::{NaiveDate, NaiveTime, TimeZone, Utc};
    use tempfile::TempDir;

    fn state_path(dir: &TempDir) -> PathBuf {
        dir.path().join(STATE_FILE_NAME)
    }

    fn populated_state() -> AppState {
        let mut state = AppState::default();
        state.goals.calories = 2200;
        for (i, (name, calories)) in [("Oats", 300), ("Salad", 450), ("Yogurt", 120)]
            .into_iter()
            .enumerate()
        {
            state.food_log.push(FoodEntry {
                id: EntryId::new(100 + i as i64),
                name: name.to_string(),
                category: MealCategory::ALL[i],
                calories,
                protein: 10.5,
                carbs: 20.0,
                fat: 3.25,
                date: NaiveDate::from_ymd_opt(2025, 4, 7).unwrap(),
            });
        }
        for (i, day) in [DayOfWeek::Monday, DayOfWeek::Thursday].into_iter().enumerate() {
            state.workouts.scheduled.push(ScheduledWorkout {
                id: EntryId::new(200 + i as i64),
                name: format!("Session {}", i),
                day,
                time: NaiveTime::from_hms_opt(6 + i as u32, 15, 0).unwrap(),
                duration: 45,
            });
        }
        let scheduled = state.workouts.scheduled[0].clone();
        state.reminders.push(Reminder::for_workout(EntryId::new(250), &scheduled));
        state.workouts.history.push(CompletedWorkout {
            id: EntryId::new(300),
            name: "Row".to_string(),
            duration: 25,
            calories_burned: 240,
            notes: "steady".to_string(),
            timestamp: Utc.with_ymd_and_hms(2025, 4, 7, 6, 50, 0).unwrap(),
        });
        state
    }

    #[test]
    fn test_open_missing_file_starts_fresh() {
        let dir = TempDir::new().unwrap();
        let store = StateStore::open(state_path(&dir), CorruptStatePolicy::Fail).unwrap();
        assert_eq!(store.state(), &AppState::default());
        assert!(!state_path(&dir).exists());
    }

    #[test]
    fn test_save_and_load_roundtrip_preserves_order() {
        let dir = TempDir::new().unwrap();
        let original = populated_state();
        StateStore::with_state(state_path(&dir), original.clone())
            .save()
            .unwrap();

        let loaded = StateStore::open(state_path(&dir), CorruptStatePolicy::Fail).unwrap();
        assert_eq!(loaded.state(), &original);

        let names: Vec<&str> = loaded.state().food_log.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Oats", "Salad", "Yogurt"]);
    }

    #[test]
    fn test_update_persists_immediately() {
        let dir = TempDir::new().unwrap();
        let mut store = StateStore::open(state_path(&dir), CorruptStatePolicy::Fail).unwrap();

        let len = store
            .update(|state| {
                state.goals.protein = 150.0;
                state.food_log.len()
            })
            .unwrap();
        assert_eq!(len, 0);

        let reloaded = StateStore::open(state_path(&dir), CorruptStatePolicy::Fail).unwrap();
        assert_eq!(reloaded.state().goals.protein, 150.0);
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("nested").join("data").join(STATE_FILE_NAME);
        StateStore::with_state(&nested, AppState::default())
            .save()
            .unwrap();
        assert!(nested.exists());
        assert!(!nested.with_extension("json.tmp").exists());
    }

    #[test]
    fn test_corrupt_state_fails_by_default() {
        let dir = TempDir::new().unwrap();
        fs::write(state_path(&dir), "{ not json").unwrap();

        let err = StateStore::open(state_path(&dir), CorruptStatePolicy::Fail).unwrap_err();
        assert!(matches!(err, StoreError::Corrupt(_, _)));
        assert!(err.to_string().contains("could not be read"));
        // File is left untouched
        assert_eq!(fs::read_to_string(state_path(&dir)).unwrap(), "{ not json");
    }

    #[test]
    fn test_corrupt_state_reset_keeps_backup() {
        let dir = TempDir::new().unwrap();
        fs::write(state_path(&dir), "{ not json").unwrap();

        let store = StateStore::open(state_path(&dir), CorruptStatePolicy::Reset).unwrap();
        assert_eq!(store.state(), &AppState::default());

        let backup = dir.path().join(format!("{}.corrupt", STATE_FILE_NAME));
        assert_eq!(fs::read_to_string(backup).unwrap(), "{ not json");
    }

    #[test]
    fn test_reload_picks_up_other_writers() {
        let dir = TempDir::new().unwrap();
        let mut first = StateStore::open(state_path(&dir), CorruptStatePolicy::Fail).unwrap();
        let mut second = StateStore::open(state_path(&dir), CorruptStatePolicy::Fail).unwrap();

        second.update(|state| state.goals.calories = 1750).unwrap();
        assert_eq!(first.state().goals.calories, 2000);

        first.reload().unwrap();
        assert_eq!(first.state().goals.calories, 1750);
    }

    #[test]
    fn test_failed_save_leaves_state_unchanged() {
        let dir = TempDir::new().unwrap();
        let data_dir = dir.path().join("data");
        let mut store =
            StateStore::with_state(data_dir.join(STATE_FILE_NAME), AppState::default());

        // A plain file where the data directory should be
        fs::write(&data_dir, "in the way").unwrap();
        let result = store.update(|state| state.goals.fat = 80.0);
        assert!(matches!(result, Err(StoreError::Io(_, _))));
        assert_eq!(store.state(), &AppState::default());

        fs::remove_file(&data_dir).unwrap();
        store.update(|state| state.goals.fat = 80.0).unwrap();
        assert_eq!(store.state().goals.fat, 80.0);
        let reloaded =
            StateStore::open(data_dir.join(STATE_FILE_NAME), CorruptStatePolicy::Fail).unwrap();
        assert_eq!(reloaded.state().goals.fat, 80.0);
    }

    #[test]
    fn test_policy_from_str() {
        assert_eq!("RESET".parse::<CorruptStatePolicy>().unwrap(), CorruptStatePolicy::Reset);
        assert_eq!("fail".parse::<CorruptStatePolicy>().unwrap(), CorruptStatePolicy::Fail);
        assert!("ignore".parse::<CorruptStatePolicy>().is_err());
    }
}
