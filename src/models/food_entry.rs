use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::entry_id::EntryId;
use super::meal_category::MealCategory;

/// A food item eaten on a given day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodEntry {
    pub id: EntryId,
    pub name: String,
    pub category: MealCategory,
    pub calories: u32,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub date: NaiveDate,
}

impl fmt::Display for FoodEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} cal | P {}g | C {}g | F {}g)",
            self.name, self.calories, self.protein, self.carbs, self.fat
        )
    }
}
