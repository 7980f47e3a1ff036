use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;

use commands::{
    AskCommand, ChatCommand, ConfigCommand, DashboardCommand, FoodCommand, GoalsCommand,
    RemindersCommand, WatchCommand, WeeklyCommand, WorkoutCommand,
};
use config::Config;
use motionx::{StateStore, SystemClock, Tracker};

#[derive(Parser)]
#[command(name = "motionx")]
#[command(version)]
#[command(about = "Track meals, workouts and goals from the terminal", long_about = None)]
struct Cli {
    /// Path to config file
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Log and review food
    Food(FoodCommand),

    /// Schedule, log and review workouts
    Workout(WorkoutCommand),

    /// Today's progress at a glance
    Dashboard(DashboardCommand),

    /// Calories and workout minutes for the last seven days
    Weekly(WeeklyCommand),

    /// Show or change daily nutrition goals
    Goals(GoalsCommand),

    /// List, check or clear workout reminders
    Reminders(RemindersCommand),

    /// Keep checking for upcoming workouts until Ctrl-C
    Watch(WatchCommand),

    /// Ask the fitness assistant a question
    Ask(AskCommand),

    /// Chat with the fitness assistant
    Chat(ChatCommand),

    /// Manage configuration
    Config(ConfigCommand),
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(default_filter: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn open_tracker(config: &Config) -> Result<Tracker, Box<dyn std::error::Error>> {
    let store = StateStore::open(
        config.data_path.value.clone(),
        config.on_corrupt_state.value,
    )?;
    tracing::debug!("Using state file {}", store.path().display());
    Ok(Tracker::new(store, SystemClock))
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let default_filter = match cli.command {
        Some(Commands::Watch(_)) => "motionx=info",
        _ => "motionx=warn",
    };
    init_tracing(default_filter);

    let config = Config::load(cli.config)?;

    match cli.command {
        Some(Commands::Food(cmd)) => cmd.run(&mut open_tracker(&config)?)?,
        Some(Commands::Workout(cmd)) => cmd.run(&mut open_tracker(&config)?)?,
        Some(Commands::Dashboard(cmd)) => cmd.run(&open_tracker(&config)?)?,
        Some(Commands::Weekly(cmd)) => cmd.run(&open_tracker(&config)?)?,
        Some(Commands::Goals(cmd)) => cmd.run(&mut open_tracker(&config)?)?,
        Some(Commands::Reminders(cmd)) => cmd.run(&mut open_tracker(&config)?, &config)?,
        Some(Commands::Watch(cmd)) => cmd.run(open_tracker(&config)?, &config).await?,
        Some(Commands::Ask(cmd)) => cmd.run()?,
        Some(Commands::Chat(cmd)) => cmd.run()?,
        Some(Commands::Config(cmd)) => cmd.run(&config)?,
        None => {
            println!("Use --help to see available commands");
        }
    }

    Ok(())
}
