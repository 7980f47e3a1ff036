use clap::{Args, Subcommand};

use motionx::projections::{daily_totals, foods_by_category, goal_progress};
use motionx::{Clock, MealCategory, NewFood, Tracker};

use super::{bar, parse_grams, OutputFormat};

#[derive(Args)]
pub struct FoodCommand {
    #[command(subcommand)]
    pub command: FoodSubcommand,
}

#[derive(Subcommand)]
pub enum FoodSubcommand {
    /// Log something you ate today
    Add {
        /// Food name
        name: String,

        /// Meal category (breakfast, lunch, dinner, snack)
        #[arg(long, short = 't', value_name = "CATEGORY")]
        category: MealCategory,

        /// Calories (kcal)
        #[arg(long)]
        calories: u32,

        /// Protein in grams
        #[arg(long, value_parser = parse_grams, default_value = "0")]
        protein: f64,

        /// Carbohydrates in grams
        #[arg(long, value_parser = parse_grams, default_value = "0")]
        carbs: f64,

        /// Fat in grams
        #[arg(long, value_parser = parse_grams, default_value = "0")]
        fat: f64,
    },

    /// Show today's food by meal with progress toward goals
    Today {
        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },
}

impl FoodCommand {
    pub fn run<C: Clock>(
        &self,
        tracker: &mut Tracker<C>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        match &self.command {
            FoodSubcommand::Add {
                name,
                category,
                calories,
                protein,
                carbs,
                fat,
            } => {
                let entry = tracker.add_food(NewFood {
                    name: name.clone(),
                    category: *category,
                    calories: *calories,
                    protein: *protein,
                    carbs: *carbs,
                    fat: *fat,
                })?;

                println!("Logged {}: {}", entry.category, entry);
                println!();
                let totals = daily_totals(tracker.state(), entry.date);
                println!(
                    "Today so far: {}/{} cal",
                    totals.calories,
                    tracker.state().goals.calories
                );
                Ok(())
            }
            FoodSubcommand::Today { format } => self.show_today(format, tracker),
        }
    }

    fn show_today<C: Clock>(
        &self,
        format: &OutputFormat,
        tracker: &Tracker<C>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let today = tracker.today();
        let state = tracker.state();
        let grouped = foods_by_category(state, today);
        let totals = daily_totals(state, today);
        let progress = goal_progress(&totals, &state.goals);

        match format {
            OutputFormat::Json => {
                let meals: serde_json::Map<String, serde_json::Value> = grouped
                    .iter()
                    .map(|(category, entries)| {
                        Ok((category.to_string(), serde_json::to_value(entries)?))
                    })
                    .collect::<Result<_, serde_json::Error>>()?;
                let output = serde_json::json!({
                    "date": today,
                    "meals": meals,
                    "totals": totals,
                    "progress": progress,
                });
                println!("{}", serde_json::to_string_pretty(&output)?);
            }
            OutputFormat::Text => {
                println!("{}", today);
                println!("{}", "-".repeat(60));
                for (category, entries) in &grouped {
                    println!("{}", capitalize(&category.to_string()));
                    if entries.is_empty() {
                        println!("  (nothing logged)");
                    }
                    for entry in entries {
                        println!("  {:30} {:>5} cal", entry.name, entry.calories);
                    }
                }

                println!();
                let rows = [
                    ("Calories", &progress.calories, ""),
                    ("Protein", &progress.protein, "g"),
                    ("Carbs", &progress.carbs, "g"),
                    ("Fat", &progress.fat, "g"),
                ];
                for (label, p, unit) in rows {
                    println!(
                        "  {:9} {} {}{}/{}{}",
                        label,
                        bar(p.percent, 20),
                        p.consumed,
                        unit,
                        p.goal,
                        unit
                    );
                }
            }
        }

        Ok(())
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}
