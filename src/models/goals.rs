use serde::{Deserialize, Serialize};
use std::fmt;

/// Daily nutrition targets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goals {
    #[serde(rename = "dailyCalorieGoal")]
    pub calories: u32,
    #[serde(rename = "dailyProteinGoal")]
    pub protein: f64,
    #[serde(rename = "dailyCarbsGoal")]
    pub carbs: f64,
    #[serde(rename = "dailyFatGoal")]
    pub fat: f64,
}

impl Default for Goals {
    fn default() -> Self {
        Self {
            calories: 2000,
            protein: 120.0,
            carbs: 250.0,
            fat: 65.0,
        }
    }
}

impl fmt::Display for Goals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Daily Goals")?;
        writeln!(f, "{}", "=".repeat(11))?;
        writeln!(f, "Calories: {}", self.calories)?;
        writeln!(f, "Protein:  {}g", self.protein)?;
        writeln!(f, "Carbs:    {}g", self.carbs)?;
        write!(f, "Fat:      {}g", self.fat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_goals() {
        let goals = Goals::default();
        assert_eq!(goals.calories, 2000);
        assert_eq!(goals.protein, 120.0);
        assert_eq!(goals.carbs, 250.0);
        assert_eq!(goals.fat, 65.0);
    }

    #[test]
    fn test_goals_wire_names() {
        let json = serde_json::to_value(Goals::default()).unwrap();
        assert_eq!(json["dailyCalorieGoal"], 2000);
        assert_eq!(json["dailyFatGoal"], 65.0);
    }
}
