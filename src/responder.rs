//! Rule-based fitness assistant.
//!
//! The assistant lowercases the question and walks [`RULES`] top to bottom,
//! answering with the first rule whose keywords are present. Keywords are
//! plain substrings, not words ("ab" also matches "about"). Order matters:
//! combined keywords sit above the single keywords they would otherwise
//! be hidden behind.

use self::Pattern::{All, Any, Has};

/// Keyword test over lowercased input.
#[derive(Debug, Clone, Copy)]
pub enum Pattern {
    Has(&'static str),
    All(&'static [Pattern]),
    Any(&'static [Pattern]),
}

impl Pattern {
    pub fn matches(&self, text: &str) -> bool {
        match self {
            Has(keyword) => text.contains(keyword),
            All(patterns) => patterns.iter().all(|p| p.matches(text)),
            Any(patterns) => patterns.iter().any(|p| p.matches(text)),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub topic: &'static str,
    pub pattern: Pattern,
    pub response: &'static str,
}

/// First rule matching `input`, if any.
///
/// Callers should not pass blank input; the chat surface drops it.
pub fn matching_rule(input: &str) -> Option<&'static Rule> {
    let lowered = input.to_lowercase();
    RULES.iter().find(|rule| rule.pattern.matches(&lowered))
}

/// Answers a question with a canned response.
pub fn respond(input: &str) -> &'static str {
    matching_rule(input)
        .map(|rule| rule.response)
        .unwrap_or(DEFAULT_RESPONSE)
}

pub static RULES: &[Rule] = &[
    Rule {
        topic: "workout_plan",
        pattern: All(&[Has("workout"), Any(&[Has("recommend"), Has("suggest")])]),
        response: "For a balanced week, I'd recommend: 2 days of strength training, 2 days of cardio, 1 day of flexibility work like yoga, and 2 rest days. Start with 30-minute sessions and gradually increase duration as your fitness improves.",
    },
    Rule {
        topic: "beginner_workout",
        pattern: All(&[Any(&[Has("beginner"), Has("new")]), Has("workout")]),
        response: "Great beginner workout: Start with 3 days/week. Day 1: Full body strength (squats, push-ups, assisted pull-ups, 2 sets each). Day 2: 20-min walk/jog intervals. Day 3: Yoga or mobility work. Focus on form, not intensity, and gradually increase over 4-6 weeks.",
    },
    Rule {
        topic: "home_workout",
        pattern: All(&[Has("home"), Has("workout")]),
        response: "Effective home workout: 4 rounds of: 12 squats, 10 push-ups (modify on knees if needed), 10 walking lunges, 30-second plank, 30 jumping jacks. Rest 60 seconds between rounds. No equipment needed and it targets all major muscle groups.",
    },
    Rule {
        topic: "calorie_deficit",
        pattern: All(&[Has("calorie"), Any(&[Has("burn"), Has("deficit")])]),
        response: "A safe calorie deficit is 500 calories per day, which leads to about 1 pound of weight loss per week. Combine reduced calorie intake with increased physical activity for best results.",
    },
    Rule {
        topic: "calorie_estimate",
        pattern: All(&[Has("calculate"), Has("calories")]),
        response: "To estimate daily calories: Multiply your weight (in pounds) by 15 if you're moderately active, 13 if sedentary, or 18 if very active. For weight loss, subtract 500 from this number. For weight gain, add 300-500 calories. Adjust based on results after 2-3 weeks.",
    },
    Rule {
        topic: "weight_loss",
        pattern: All(&[Has("weight"), Has("loss")]),
        response: "Sustainable weight loss combines nutrition, exercise, and lifestyle changes. Aim for 1-2 pounds per week through a moderate calorie deficit and increased activity. Focus on whole foods and consistency rather than quick fixes.",
    },
    Rule {
        topic: "weight_gain",
        pattern: All(&[Has("weight"), Has("gain")]),
        response: "For healthy weight gain, aim for a 300-500 calorie surplus daily. Focus on nutrient-dense foods like nuts, avocados, olive oil, whole grains, and lean proteins. Combine with strength training 3-4 times weekly to promote muscle growth. Track progress weekly.",
    },
    Rule {
        topic: "protein_sources",
        pattern: All(&[Has("protein"), Has("source")]),
        response: "Top protein sources: Chicken breast (31g per 100g), Greek yogurt (10g per 100g), eggs (6g each), lentils (9g per 100g), tofu (8g per 100g), cottage cheese (11g per 100g), whey protein (25g per scoop), quinoa (4g per 100g cooked), tuna (25g per 100g), and tempeh (19g per 100g).",
    },
    Rule {
        topic: "plant_protein",
        pattern: All(&[Any(&[Has("vegetarian"), Has("vegan")]), Has("protein")]),
        response: "Great plant-based proteins: Lentils (18g/cup), tofu (20g/cup), tempeh (31g/cup), seitan (25g/100g), edamame (17g/cup), chickpeas (15g/cup), quinoa (8g/cup), nutritional yeast (8g/2 tbsp), hemp seeds (10g/3 tbsp), and plant protein powders (20-30g/scoop).",
    },
    Rule {
        topic: "protein_macros",
        pattern: Any(&[Has("protein"), Has("macros")]),
        response: "For active individuals, aim for 1.6-2.2g of protein per kg of bodyweight daily. For a balanced macro split, try 40% carbs, 30% protein, and 30% fat to start, then adjust based on your specific goals and how your body responds.",
    },
    Rule {
        topic: "quick_meal",
        pattern: Any(&[Has("recipe"), Has("meal")]),
        response: "Quick high-protein meal: Grilled chicken breast (30g protein), 1 cup quinoa (8g protein), and roasted vegetables. Season with olive oil, garlic, and herbs. Takes 20 minutes to prepare and provides balanced nutrition.",
    },
    Rule {
        topic: "meal_prep",
        pattern: Any(&[Has("meal prep"), Has("prep")]),
        response: "Efficient meal prep: Sunday batch cook: 1) Bake 6 chicken breasts with different seasonings, 2) Cook 2 cups quinoa and 2 cups brown rice, 3) Roast 2 trays of mixed vegetables, 4) Prepare overnight oats in 5 containers. Store in portions for grab-and-go meals all week.",
    },
    Rule {
        topic: "snacks",
        pattern: Has("snack"),
        response: "Nutritious snacks under 200 calories: 1 apple with 1 tbsp almond butter, 1/4 cup hummus with vegetables, 1 hard-boiled egg with fruit, Greek yogurt with berries, 1/4 cup nuts, cottage cheese with pineapple, or a protein shake with berries and water.",
    },
    Rule {
        topic: "motivation",
        pattern: Any(&[Has("motivation"), Has("habit")]),
        response: "To build a fitness habit: 1) Start small (even just 10 minutes), 2) Schedule workouts like important meetings, 3) Find activities you enjoy, 4) Track your progress, 5) Reward yourself after consistency milestones, and 6) Find an accountability partner or community.",
    },
    Rule {
        topic: "tracking_progress",
        pattern: Any(&[Has("track"), Has("progress")]),
        response: "Track fitness progress using multiple metrics: 1) Workout performance (weights/reps/speed), 2) Body measurements (not just weight), 3) Progress photos (every 4 weeks), 4) Energy levels and mood, 5) Recovery quality, and 6) Fitness tests every 6-8 weeks.",
    },
    Rule {
        topic: "recovery",
        pattern: Any(&[Has("recovery"), Has("sore")]),
        response: "Optimize recovery: 1) Ensure 7-9 hours of quality sleep, 2) Stay hydrated (aim for clear/light yellow urine), 3) Consume protein within 30-60 minutes post-workout, 4) Implement active recovery (light walking or yoga) between intense sessions, 5) Consider foam rolling for tight muscles.",
    },
    Rule {
        topic: "muscle_building",
        pattern: Any(&[Has("muscle"), Has("strength")]),
        response: "To build muscle, focus on progressive overload (gradually increasing weight/reps), consume sufficient protein (1.6-2g per kg bodyweight), ensure adequate recovery between workouts, and maintain a slight caloric surplus.",
    },
    Rule {
        topic: "chest_exercises",
        pattern: All(&[Has("chest"), Has("exercise")]),
        response: "Top chest exercises: 1) Bench press (flat, incline, decline), 2) Push-ups and variations, 3) Dumbbell flyes, 4) Cable crossovers, 5) Chest dips. For balanced development, include various angles (incline/decline) and both compound and isolation movements.",
    },
    Rule {
        topic: "leg_exercises",
        pattern: All(&[Has("leg"), Has("exercise")]),
        response: "Effective leg exercises: 1) Squats (back, front, goblet), 2) Deadlifts (conventional, Romanian), 3) Lunges (walking, reverse, lateral), 4) Leg press, 5) Hip thrusts, 6) Calf raises, 7) Bulgarian split squats. Include both hip-dominant and knee-dominant movements for complete development.",
    },
    Rule {
        topic: "back_exercises",
        pattern: All(&[Has("back"), Has("exercise")]),
        response: "Complete back workout: 1) Pull-ups or lat pulldowns, 2) Rows (bent-over, cable, seated), 3) Deadlifts, 4) Face pulls, 5) Reverse flyes. Aim to include vertical pulling, horizontal pulling, and rear deltoid work for balanced development.",
    },
    Rule {
        topic: "arm_exercises",
        pattern: All(&[Any(&[Has("arm"), Has("bicep"), Has("tricep")]), Has("exercise")]),
        response: "Balanced arm workout: Biceps: 1) Barbell curls, 2) Hammer curls, 3) Incline dumbbell curls. Triceps: 1) Dips, 2) Skull crushers, 3) Pushdowns. Perform 3 sets of 8-12 reps for each. For best results, train arms 2x weekly with 48 hours recovery between.",
    },
    Rule {
        topic: "cardio",
        pattern: Any(&[Has("cardio"), Has("running")]),
        response: "Effective cardio training varies by fitness level. For beginners, try 20-30 minutes of moderate activity 3x weekly. Include a mix of steady-state cardio and interval training for optimal results. Always warm up properly to prevent injury.",
    },
    Rule {
        topic: "hiit",
        pattern: Any(&[Has("hiit"), All(&[Has("high"), Has("intensity")])]),
        response: "Sample HIIT workout: Warm up 5 min, then 8 rounds of: 30s jumping squats, 30s mountain climbers, 30s burpees, 30s rest. Cool down 5 min. Total time: 25 min. Start with 4 rounds if you're new to HIIT, and ensure proper form throughout.",
    },
    Rule {
        topic: "stretching",
        pattern: Any(&[Has("stretch"), Has("flexibility")]),
        response: "Daily stretching routine (10 mins): Hold each for 30s/side: 1) Standing hamstring stretch, 2) Quadriceps pull, 3) Chest doorway stretch, 4) Cat-cow for spine, 5) Hip flexor lunge, 6) Shoulder cross-body pull, 7) Seated spinal twist, 8) Downward dog for full body.",
    },
    Rule {
        topic: "injury_prevention",
        pattern: Any(&[Has("injury"), Has("prevent")]),
        response: "Prevent injuries by: 1) Always warming up properly (5-10 min), 2) Focusing on proper technique over heavy weights, 3) Increasing intensity gradually (5-10% weekly), 4) Balancing opposing muscle groups, 5) Taking adequate rest days, 6) Incorporating mobility work, 7) Listening to your body's signals.",
    },
    Rule {
        topic: "supplements",
        pattern: Has("supplement"),
        response: "Evidence-based supplements: 1) Protein powder (convenience for intake goals), 2) Creatine monohydrate (5g daily for strength/performance), 3) Vitamin D (if deficient/limited sun exposure), 4) Omega-3s (overall health, may reduce inflammation), 5) Caffeine (pre-workout performance). Always prioritize whole foods first.",
    },
    Rule {
        topic: "sleep",
        pattern: Has("sleep"),
        response: "Sleep significantly impacts fitness results. Aim for 7-9 quality hours nightly. Poor sleep increases stress hormones, reduces recovery, lowers workout performance, and can increase hunger hormones. Establish a consistent sleep schedule and limit screen time before bed.",
    },
    Rule {
        topic: "fasting",
        pattern: Any(&[Has("fasting"), Has("intermittent")]),
        response: "Intermittent fasting can work with fitness goals. Common protocols include 16:8 (16hr fast, 8hr eating window) or 14:10. Schedule intense workouts during/near your eating window. Ensure adequate protein intake (1.6-2.2g/kg) within your eating window to support muscle maintenance and recovery.",
    },
    Rule {
        topic: "pre_workout_nutrition",
        pattern: All(&[Has("pre"), Has("workout")]),
        response: "Ideal pre-workout nutrition: Eat 1-3 hours before training with a meal containing carbs (for energy) and moderate protein. Close to workout time (30-60min), aim for easily digestible options like a banana with a small protein shake. Hydrate with 16-20oz of water in the 2 hours before exercise.",
    },
    Rule {
        topic: "post_workout_nutrition",
        pattern: All(&[Has("post"), Has("workout")]),
        response: "Post-workout, aim to consume protein (20-40g) and carbs within 30-60 minutes to optimize recovery. Good options include a protein shake with fruit, Greek yogurt with berries, or chicken with rice. This timing helps replenish glycogen stores and provides amino acids for muscle repair.",
    },
    Rule {
        topic: "weight_plateau",
        pattern: All(&[Any(&[Has("plateau"), Has("stuck")]), Has("weight")]),
        response: "To break through a weight plateau: 1) Recalculate your calorie needs (metabolism changes), 2) Track food intake meticulously for a week (portions often creep up), 3) Increase protein intake slightly, 4) Add more NEAT activity (daily walking), 5) Consider cycling calories (higher some days, lower others), 6) Change up your workout routine to create new stimulus.",
    },
    Rule {
        topic: "hydration",
        pattern: Any(&[Has("water"), Has("hydration")]),
        response: "Proper hydration improves performance by up to 25%. Aim for 0.5-1oz of water per pound of bodyweight daily, with additional 16-20oz for every hour of exercise. Signs of dehydration include dark urine, headaches, fatigue, and decreased performance. Electrolytes are important for intense or long-duration activities.",
    },
    Rule {
        topic: "beginner_lifting",
        pattern: All(&[Any(&[Has("weight"), Has("strength")]), Has("beginner")]),
        response: "Beginner weightlifting tips: 1) Start with compound movements (squat, deadlift, bench, row), 2) Begin with bodyweight or light weights to master form, 3) Follow a structured program (3 days/week is perfect), 4) Rest 48 hours between training the same muscle group, 5) Progressive overload by adding small weight increases (2.5-5lbs) when you can complete all reps with good form.",
    },
    Rule {
        topic: "morning_workout",
        pattern: All(&[Has("morning"), Has("workout")]),
        response: "Morning workout tips: 1) Prepare workout clothes/equipment the night before, 2) Hydrate immediately upon waking, 3) Have a simple carb source if needed (banana or toast), 4) Do a thorough warm-up as your body is stiffer, 5) Start with dynamic movements rather than static stretches, 6) Consider caffeine 15-30 minutes pre-workout if tolerated.",
    },
    Rule {
        topic: "evening_workout",
        pattern: All(&[Any(&[Has("evening"), Has("night")]), Has("workout")]),
        response: "Evening workout advantages: Often higher natural strength, better hydration/nutrition status, and can help transition from work to home life. Tips: 1) Avoid intense exercise 1-2 hours before bed if sleep is affected, 2) Consider limiting caffeine if used pre-workout, 3) Have a light carb/protein meal 1-2 hours before, 4) Use as stress relief from the workday.",
    },
    Rule {
        topic: "rest_days",
        pattern: All(&[Has("rest"), Has("day")]),
        response: "Rest days are essential for progress. Benefits include: muscle repair, glycogen replenishment, nervous system recovery, hormonal balance, and injury prevention. Active recovery (light walking, swimming, yoga) can enhance recovery while maintaining activity. Most people benefit from 2-3 rest days weekly, depending on workout intensity.",
    },
    Rule {
        topic: "busy_schedule",
        pattern: Any(&[Has("busy"), All(&[Has("no"), Has("time")])]),
        response: "Fitness for busy schedules: 1) High-intensity intervals (20min), 2) Supersetting exercises to save time, 3) Split workouts into 2 shorter sessions if possible (morning/evening), 4) Schedule workouts like meetings, 5) Prepare quick protein-rich meals in batch, 6) Mini-workouts throughout day (desk squats, walking meetings), 7) 7-minute scientific workout app for ultra-busy days.",
    },
    Rule {
        topic: "home_gym",
        pattern: All(&[Has("home"), Has("gym")]),
        response: "Home gym essentials on a budget: 1) Adjustable dumbbells (most versatile), 2) Resistance bands set, 3) Pull-up bar (doorway), 4) Yoga/exercise mat, 5) Jump rope. With these items, you can train all major muscle groups effectively. Add a bench and kettlebells if budget allows.",
    },
    Rule {
        topic: "kettlebell",
        pattern: Has("kettlebell"),
        response: "Full-body kettlebell circuit: 3-5 rounds of: 1) 10 kettlebell swings, 2) 8 goblet squats, 3) 8 single-arm rows each side, 4) 10 overhead presses alternating sides, 5) 10 Russian twists each side. Rest 60s between rounds. One kettlebell provides an efficient full-body workout targeting strength, power, and cardiovascular fitness.",
    },
    Rule {
        topic: "bodyweight",
        pattern: Any(&[Has("bodyweight"), Has("no equipment")]),
        response: "Advanced bodyweight workout: 4 rounds of: 1) 15 push-up variations, 2) 12 single-leg squats per leg, 3) 10 burpees, 4) 30s handstand or pike hold, 5) 20 mountain climbers, 6) 10 tuck jumps. Rest 90s between rounds. Bodyweight training can be scaled to any fitness level by modifying leverage and stability factors.",
    },
    Rule {
        topic: "mobility",
        pattern: Has("mobility"),
        response: "Daily 10-minute mobility routine: 1) Hip 90/90 transitions (1min), 2) Thoracic rotations (1min), 3) Shoulder CARs (1min), 4) Squat-to-stand (1min), 5) Ankle rocks (1min), 6) Wrist circles (30s), 7) Neck half-circles (30s), 8) Hip CARs (2min), 9) World's greatest stretch (2min). Movement quality trumps quantity - move slowly and mindfully.",
    },
    Rule {
        topic: "core",
        pattern: Any(&[Has("ab"), Has("core")]),
        response: "Functional core circuit: 3 rounds of: 1) Plank with shoulder taps (45s), 2) Dead bugs (45s), 3) Side planks (30s each), 4) Bird-dogs (45s), 5) Hollow body hold (30s). Rest 30s between exercises. Effective core training should include anti-rotation, anti-extension, and anti-lateral flexion movements, not just flexion (sit-ups).",
    },
    Rule {
        topic: "exercise_frequency",
        pattern: All(&[Has("how"), Has("often"), Has("exercise")]),
        response: "Exercise frequency depends on goals and recovery capacity. General guidelines: Strength training: 3-5x weekly with at least 48hrs between sessions for same muscle groups. Cardio: 2-5x weekly varying intensity. Beginners: Start with 3 total sessions/week (mix of cardio/strength) and gradually increase. Advanced: Up to 6 sessions with proper periodization.",
    },
    Rule {
        topic: "exercise_when_sick",
        pattern: All(&[Any(&[Has("sick"), Has("ill")]), Has("exercise")]),
        response: "Exercise when sick: Use the 'neck check' - symptoms only above the neck (mild cold, nasal congestion)? Reduce intensity to 50% and duration to 30-50% of normal. Symptoms below neck (fever, cough, body aches, stomach issues)? Rest completely until recovered. Always prioritize sleep and hydration when fighting illness.",
    },
    Rule {
        topic: "healthy_weight",
        pattern: All(&[Has("healthy"), Has("weight")]),
        response: "Healthy weight varies by individual factors. BMI (18.5-24.9) provides general guidelines but doesn't account for muscle mass or body composition. Waist-to-height ratio (under 0.5) can be more useful. Focus on health markers like energy levels, sleep quality, and bloodwork rather than just scale weight.",
    },
    Rule {
        topic: "fiber",
        pattern: Has("fiber"),
        response: "Dietary fiber: Aim for 25-35g daily. Soluble fiber (oats, beans, fruits) helps with blood glucose and cholesterol. Insoluble fiber (whole grains, vegetables) supports digestion and regularity. Increase fiber intake gradually to avoid discomfort, and pair with adequate hydration. Top sources: chia seeds (10g/oz), beans (15g/cup), berries (8g/cup), avocados (10g/each), and whole grains.",
    },
    Rule {
        topic: "fat_loss",
        pattern: All(&[Has("fat"), Has("loss")]),
        response: "Optimize fat loss: 1) Maintain protein intake (0.8-1g per lb bodyweight), 2) Create moderate calorie deficit (15-20% below maintenance), 3) Preserve muscle with resistance training 3-4x weekly, 4) Include both HIIT and moderate-intensity cardio, 5) Prioritize sleep (poor sleep increases hunger hormones), 6) Manage stress levels (high cortisol can inhibit fat loss), 7) Stay consistent for at least 8-12 weeks.",
    },
];

pub const DEFAULT_RESPONSE: &str = "I'm your fitness assistant. I can help with workout recommendations, nutrition advice, recovery tips, and more. What specific fitness information are you looking for today?";

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn response_for(topic: &str) -> &'static str {
        RULES
            .iter()
            .find(|rule| rule.topic == topic)
            .map(|rule| rule.response)
            .unwrap()
    }

    fn position(topic: &str) -> usize {
        RULES.iter().position(|rule| rule.topic == topic).unwrap()
    }

    #[test]
    fn test_workout_recommendation_wins_over_other_keywords() {
        let balanced_week = response_for("workout_plan");
        assert!(balanced_week.starts_with("For a balanced week"));

        for input in [
            "Can you recommend a workout?",
            "suggest a home workout",
            "Recommend a beginner workout with protein and sleep tips",
            "WORKOUT SUGGESTIONS for a busy morning",
        ] {
            assert_eq!(respond(input), balanced_week, "input: {}", input);
        }
    }

    #[test]
    fn test_protein_source_routes_to_sources() {
        let answer = respond("protein source");
        assert_eq!(answer, response_for("protein_sources"));
        assert_ne!(answer, response_for("protein_macros"));
        assert!(answer.starts_with("Top protein sources"));
    }

    #[test]
    fn test_plain_protein_routes_to_macros() {
        assert_eq!(respond("How much protein?"), response_for("protein_macros"));
        assert_eq!(respond("what are macros"), response_for("protein_macros"));
    }

    #[test]
    fn test_vegan_protein_routes_to_plant_sources() {
        assert_eq!(respond("best vegan protein?"), response_for("plant_protein"));
    }

    #[test]
    fn test_unmatched_input_gets_default() {
        assert_eq!(respond("xyz123"), DEFAULT_RESPONSE);
        assert!(matching_rule("xyz123").is_none());
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        assert_eq!(respond("HIIT please"), response_for("hiit"));
        assert_eq!(respond("High Intensity training"), response_for("hiit"));
    }

    #[test]
    fn test_keywords_are_substrings() {
        // "about" contains "ab"
        assert_eq!(respond("what about it"), response_for("core"));
        assert_eq!(matching_rule("what about it").unwrap().topic, "core");
    }

    #[test]
    fn test_first_match_order() {
        // "weight loss" appears before "fat loss" and "healthy weight"
        assert_eq!(
            respond("healthy weight loss and fat loss"),
            response_for("weight_loss")
        );
        // "meal" is checked before "meal prep"
        assert_eq!(respond("meal prep ideas"), response_for("quick_meal"));
        assert_eq!(respond("how do I prep"), response_for("meal_prep"));
    }

    #[test]
    fn test_rule_table_is_well_formed() {
        let topics: HashSet<&str> = RULES.iter().map(|rule| rule.topic).collect();
        assert_eq!(topics.len(), RULES.len());
        assert_eq!(RULES.len(), 47);
        assert_eq!(RULES[0].topic, "workout_plan");
        assert!(position("protein_sources") < position("protein_macros"));
        assert!(position("plant_protein") < position("protein_macros"));
        assert!(RULES.iter().all(|rule| !rule.response.is_empty()));
    }

    #[test]
    fn test_respond_is_deterministic() {
        let input = "Any tips for recovery when sore?";
        assert_eq!(respond(input), respond(input));
        assert_eq!(respond(input), response_for("recovery"));
    }
}
