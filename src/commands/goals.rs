use clap::{Args, Subcommand};

use motionx::{Clock, Goals, Tracker};

use super::{parse_grams, OutputFormat};

#[derive(Args)]
pub struct GoalsCommand {
    #[command(subcommand)]
    pub command: GoalsSubcommand,
}

#[derive(Subcommand)]
pub enum GoalsSubcommand {
    /// Show the daily calorie and macro goals
    Show {
        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Change one or more daily goals
    Set {
        /// Daily calorie goal
        #[arg(long)]
        calories: Option<u32>,

        /// Daily protein goal in grams
        #[arg(long, value_parser = parse_grams)]
        protein: Option<f64>,

        /// Daily carbohydrate goal in grams
        #[arg(long, value_parser = parse_grams)]
        carbs: Option<f64>,

        /// Daily fat goal in grams
        #[arg(long, value_parser = parse_grams)]
        fat: Option<f64>,
    },
}

impl GoalsCommand {
    pub fn run<C: Clock>(
        &self,
        tracker: &mut Tracker<C>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        match &self.command {
            GoalsSubcommand::Show { format } => {
                let goals = &tracker.state().goals;
                match format {
                    OutputFormat::Json => println!("{}", serde_json::to_string_pretty(goals)?),
                    OutputFormat::Text => println!("{}", goals),
                }
                Ok(())
            }
            GoalsSubcommand::Set {
                calories,
                protein,
                carbs,
                fat,
            } => {
                if calories.is_none() && protein.is_none() && carbs.is_none() && fat.is_none() {
                    return Err(
                        "Nothing to change. Pass at least one of --calories, --protein, --carbs or --fat"
                            .into(),
                    );
                }

                let current = &tracker.state().goals;
                let goals = Goals {
                    calories: calories.unwrap_or(current.calories),
                    protein: protein.unwrap_or(current.protein),
                    carbs: carbs.unwrap_or(current.carbs),
                    fat: fat.unwrap_or(current.fat),
                };
                tracker.set_goals(goals)?;

                println!("{}", tracker.state().goals);
                Ok(())
            }
        }
    }
}
