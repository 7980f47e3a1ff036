use clap::{Args, Subcommand};
use std::fs;
use std::io::Write;

use crate::config::Config;

use super::OutputFormat;

#[derive(Args)]
pub struct ConfigCommand {
    #[command(subcommand)]
    pub command: ConfigSubcommand,
}

#[derive(Subcommand)]
pub enum ConfigSubcommand {
    /// Show current configuration values
    Show {
        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Initialize configuration file
    Init,
}

const DEFAULT_CONFIG: &str = r#"# motionx configuration

# Path to the JSON state file (default: platform data dir, motionx/motionx-data.json)
# data_path: ~/.local/share/motionx/motionx-data.json

# Minutes between reminder checks while `motionx watch` runs
reminder_interval_minutes: 5

# Remind about workouts starting within this many minutes
reminder_window_minutes: 60

# Ring the terminal bell and print reminders to stderr
notifications: true

# What to do with an unreadable state file: fail or reset
on_corrupt_state: fail
"#;

impl ConfigCommand {
    pub fn run(&self, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
        match &self.command {
            ConfigSubcommand::Show { format } => {
                match format {
                    OutputFormat::Json => {
                        println!("{}", serde_json::to_string_pretty(config)?);
                    }
                    OutputFormat::Text => {
                        println!("Configuration");
                        println!("=============\n");

                        if let Some(path) = &config.config_file {
                            println!("Config file: {}", path.display());
                        } else {
                            println!(
                                "Config file: {} (not found)",
                                Config::default_config_path().display()
                            );
                        }
                        println!();

                        println!("data_path: {}", config.data_path.value.display());
                        println!("  source: {}", config.data_path.source);
                        println!();

                        println!(
                            "reminder_interval_minutes: {}",
                            config.reminder_interval_minutes.value
                        );
                        println!("  source: {}", config.reminder_interval_minutes.source);
                        println!();

                        println!(
                            "reminder_window_minutes: {}",
                            config.reminder_window_minutes.value
                        );
                        println!("  source: {}", config.reminder_window_minutes.source);
                        println!();

                        println!("notifications: {}", config.notifications.value);
                        println!("  source: {}", config.notifications.source);
                        println!();

                        println!("on_corrupt_state: {}", config.on_corrupt_state.value);
                        println!("  source: {}", config.on_corrupt_state.source);
                    }
                }
                Ok(())
            }

            ConfigSubcommand::Init => {
                let config_path = Config::default_config_path();

                if config_path.exists() {
                    println!("Config file already exists: {}", config_path.display());
                    println!("Use 'motionx config show' to view current configuration.");
                    return Ok(());
                }

                if let Some(parent) = config_path.parent() {
                    fs::create_dir_all(parent)?;
                }

                let mut file = fs::File::create(&config_path)?;
                file.write_all(DEFAULT_CONFIG.as_bytes())?;

                println!("Created config file: {}", config_path.display());
                println!("\nEdit this file to customize your settings.");
                Ok(())
            }
        }
    }
}
