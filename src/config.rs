use motionx::reminders::DEFAULT_CHECK_INTERVAL;
use motionx::store::STATE_FILE_NAME;
use motionx::{CorruptStatePolicy, ReminderWindow};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Source of a configuration value
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigSource {
    Default,
    File,
    Environment,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigSource::Default => write!(f, "default"),
            ConfigSource::File => write!(f, "file"),
            ConfigSource::Environment => write!(f, "environment"),
        }
    }
}

/// A configuration value with its source
#[derive(Debug, Clone, Serialize)]
pub struct ConfigValue<T> {
    pub value: T,
    pub source: ConfigSource,
}

impl<T> ConfigValue<T> {
    pub fn new(value: T, source: ConfigSource) -> Self {
        Self { value, source }
    }
}

/// Application configuration with source tracking
#[derive(Debug, Clone, Serialize)]
pub struct Config {
    /// Path to the JSON state file
    pub data_path: ConfigValue<PathBuf>,
    /// Minutes between background reminder checks
    pub reminder_interval_minutes: ConfigValue<u64>,
    /// How many minutes ahead a workout gets reminded
    pub reminder_window_minutes: ConfigValue<u32>,
    /// Show notifications when a reminder is posted
    pub notifications: ConfigValue<bool>,
    /// What to do when the state file cannot be parsed
    pub on_corrupt_state: ConfigValue<CorruptStatePolicy>,
    /// Config file path used (if any)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_file: Option<PathBuf>,
}

/// Internal struct for deserializing config file
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct ConfigFile {
    data_path: Option<PathBuf>,
    reminder_interval_minutes: Option<u64>,
    reminder_window_minutes: Option<u32>,
    notifications: Option<bool>,
    on_corrupt_state: Option<CorruptStatePolicy>,
}

impl Config {
    /// Load configuration with priority: env vars > config file > defaults
    pub fn load(config_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        // Start with defaults
        let mut data_path = ConfigValue::new(
            Self::default_data_dir().join(STATE_FILE_NAME),
            ConfigSource::Default,
        );
        let mut reminder_interval_minutes = ConfigValue::new(
            DEFAULT_CHECK_INTERVAL.as_secs() / 60,
            ConfigSource::Default,
        );
        let mut reminder_window_minutes =
            ConfigValue::new(ReminderWindow::default().as_minutes(), ConfigSource::Default);
        let mut notifications = ConfigValue::new(true, ConfigSource::Default);
        let mut on_corrupt_state =
            ConfigValue::new(CorruptStatePolicy::default(), ConfigSource::Default);
        let mut config_file = None;

        // Try to load from config file
        let path = config_path.unwrap_or_else(Self::default_config_path);
        if path.exists() {
            let contents = std::fs::read_to_string(&path)
                .map_err(|e| ConfigError::ReadError(path.clone(), e))?;
            let file_config: ConfigFile = serde_yaml::from_str(&contents)
                .map_err(|e| ConfigError::ParseError(path.clone(), e))?;

            config_file = Some(path.clone());

            if let Some(file_data_path) = file_config.data_path {
                // Resolve relative paths against config file's directory
                let resolved_path = if file_data_path.is_relative() {
                    path.parent()
                        .map(|p| p.join(&file_data_path))
                        .unwrap_or(file_data_path)
                } else {
                    file_data_path
                };
                data_path = ConfigValue::new(resolved_path, ConfigSource::File);
            }
            if let Some(minutes) = file_config.reminder_interval_minutes {
                reminder_interval_minutes = ConfigValue::new(minutes, ConfigSource::File);
            }
            if let Some(minutes) = file_config.reminder_window_minutes {
                reminder_window_minutes = ConfigValue::new(minutes, ConfigSource::File);
            }
            if let Some(enabled) = file_config.notifications {
                notifications = ConfigValue::new(enabled, ConfigSource::File);
            }
            if let Some(policy) = file_config.on_corrupt_state {
                on_corrupt_state = ConfigValue::new(policy, ConfigSource::File);
            }
        }

        // Apply environment variable overrides
        if let Ok(value) = std::env::var("MOTIONX_DATA_PATH") {
            data_path = ConfigValue::new(PathBuf::from(value), ConfigSource::Environment);
        }
        if let Some(minutes) =
            env_override("MOTIONX_REMINDER_INTERVAL", |v| v.parse::<u64>().ok())?
        {
            reminder_interval_minutes = ConfigValue::new(minutes, ConfigSource::Environment);
        }
        if let Some(minutes) =
            env_override("MOTIONX_REMINDER_WINDOW", |v| v.parse::<u32>().ok())?
        {
            reminder_window_minutes = ConfigValue::new(minutes, ConfigSource::Environment);
        }
        if let Some(enabled) = env_override("MOTIONX_NOTIFICATIONS", parse_bool)? {
            notifications = ConfigValue::new(enabled, ConfigSource::Environment);
        }
        if let Some(policy) = env_override("MOTIONX_ON_CORRUPT_STATE", |v| v.parse().ok())? {
            on_corrupt_state = ConfigValue::new(policy, ConfigSource::Environment);
        }

        if reminder_interval_minutes.value == 0 {
            return Err(ConfigError::InvalidValue(
                "reminder_interval_minutes".to_string(),
                "must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            data_path,
            reminder_interval_minutes,
            reminder_window_minutes,
            notifications,
            on_corrupt_state,
            config_file,
        })
    }

    /// Default config directory (platform-specific):
    /// - Linux: ~/.config/motionx/
    /// - macOS: ~/Library/Application Support/motionx/
    /// - Windows: %APPDATA%/motionx/
    pub fn default_config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("motionx")
    }

    /// Default data directory (platform-specific):
    /// - Linux: ~/.local/share/motionx/
    /// - macOS: ~/Library/Application Support/motionx/
    /// - Windows: %APPDATA%/motionx/
    pub fn default_data_dir() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("motionx")
    }

    /// Default config file path (platform-specific config dir + config.yaml)
    pub fn default_config_path() -> PathBuf {
        Self::default_config_dir().join("config.yaml")
    }
}

fn env_override<T>(
    var: &str,
    parse: impl Fn(&str) -> Option<T>,
) -> Result<Option<T>, ConfigError> {
    match std::env::var(var) {
        Ok(raw) => parse(raw.trim())
            .map(Some)
            .ok_or_else(|| ConfigError::InvalidEnv(var.to_string(), raw)),
        Err(_) => Ok(None),
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[derive(Debug)]
pub enum ConfigError {
    ReadError(PathBuf, std::io::Error),
    ParseError(PathBuf, serde_yaml::Error),
    InvalidEnv(String, String),
    InvalidValue(String, String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::ReadError(path, e) => {
                write!(f, "Failed to read config file '{}': {}", path.display(), e)
            }
            ConfigError::ParseError(path, e) => {
                write!(f, "Failed to parse config file '{}': {}", path.display(), e)
            }
            ConfigError::InvalidEnv(var, value) => {
                write!(f, "Invalid value '{}' for environment variable {}", value, var)
            }
            ConfigError::InvalidValue(key, reason) => {
                write!(f, "Invalid configuration for {}: {}", key, reason)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
