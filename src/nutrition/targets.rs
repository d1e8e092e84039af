use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Calories per gram of each macronutrient.
pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
pub const KCAL_PER_G_CARBS: f64 = 4.0;
pub const KCAL_PER_G_FAT: f64 = 9.0;

// Default calorie split at profile creation: 40% protein, 40% carbs, 20% fat.
const PROTEIN_SHARE: f64 = 0.40;
const CARBS_SHARE: f64 = 0.40;
const FAT_SHARE: f64 = 0.20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BiologicalSex {
    Male,
    Female,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Active,
    #[serde(rename = "Very active")]
    VeryActive,
}

impl ActivityLevel {
    pub fn multiplier(self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::VeryActive => 1.9,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Goal {
    #[serde(rename = "Lose fat")]
    LoseFat,
    #[serde(rename = "Maintain weight")]
    MaintainWeight,
    #[serde(rename = "Build muscle")]
    BuildMuscle,
}

impl Goal {
    pub fn calorie_adjustment(self) -> f64 {
        match self {
            Goal::LoseFat => -500.0,
            Goal::MaintainWeight => 0.0,
            Goal::BuildMuscle => 500.0,
        }
    }
}

impl BiologicalSex {
    pub fn as_str(self) -> &'static str {
        match self {
            BiologicalSex::Male => "Male",
            BiologicalSex::Female => "Female",
            BiologicalSex::Other => "Other",
        }
    }
}

impl FromStr for BiologicalSex {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Male" => Ok(BiologicalSex::Male),
            "Female" => Ok(BiologicalSex::Female),
            "Other" => Ok(BiologicalSex::Other),
            other => anyhow::bail!("unknown biological sex: {other}"),
        }
    }
}

impl ActivityLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentary",
            ActivityLevel::Light => "Light",
            ActivityLevel::Moderate => "Moderate",
            ActivityLevel::Active => "Active",
            ActivityLevel::VeryActive => "Very active",
        }
    }
}

impl FromStr for ActivityLevel {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Sedentary" => Ok(ActivityLevel::Sedentary),
            "Light" => Ok(ActivityLevel::Light),
            "Moderate" => Ok(ActivityLevel::Moderate),
            "Active" => Ok(ActivityLevel::Active),
            "Very active" => Ok(ActivityLevel::VeryActive),
            other => anyhow::bail!("unknown activity level: {other}"),
        }
    }
}

impl Goal {
    pub fn as_str(self) -> &'static str {
        match self {
            Goal::LoseFat => "Lose fat",
            Goal::MaintainWeight => "Maintain weight",
            Goal::BuildMuscle => "Build muscle",
        }
    }
}

impl FromStr for Goal {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Lose fat" => Ok(Goal::LoseFat),
            "Maintain weight" => Ok(Goal::MaintainWeight),
            "Build muscle" => Ok(Goal::BuildMuscle),
            other => anyhow::bail!("unknown goal: {other}"),
        }
    }
}

/// Physiological inputs for the target calculation. Callers must reject
/// non-positive age/height/weight before building one of these.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfileMetrics {
    pub biological_sex: BiologicalSex,
    pub age: u32,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub activity_level: ActivityLevel,
    pub goal: Goal,
}

/// Daily energy and macronutrient targets, in kcal and grams.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NutritionTargets {
    pub calories: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
}

/// Derive daily targets from a user's physiological profile.
///
/// Mifflin-St Jeor BMR, scaled by the activity multiplier, shifted by the
/// goal adjustment, then split 40/40/20 across protein/carbs/fat at
/// 4/4/9 kcal per gram. Total over its numeric domain: degenerate inputs
/// produce degenerate (possibly non-positive) calorie targets unmodified.
pub fn compute_targets(metrics: &ProfileMetrics) -> NutritionTargets {
    // Non-male profiles take the female coefficient.
    let sex_offset = match metrics.biological_sex {
        BiologicalSex::Male => 5.0,
        BiologicalSex::Female | BiologicalSex::Other => -161.0,
    };

    let bmr =
        10.0 * metrics.weight_kg + 6.25 * metrics.height_cm - 5.0 * f64::from(metrics.age) + sex_offset;
    let tdee = bmr * metrics.activity_level.multiplier();
    let calories = tdee + metrics.goal.calorie_adjustment();

    NutritionTargets {
        calories,
        protein_g: calories * PROTEIN_SHARE / KCAL_PER_G_PROTEIN,
        carbs_g: calories * CARBS_SHARE / KCAL_PER_G_CARBS,
        fat_g: calories * FAT_SHARE / KCAL_PER_G_FAT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn moderate_male() -> ProfileMetrics {
        ProfileMetrics {
            biological_sex: BiologicalSex::Male,
            age: 30,
            height_cm: 180.0,
            weight_kg: 80.0,
            activity_level: ActivityLevel::Moderate,
            goal: Goal::MaintainWeight,
        }
    }

    #[test]
    fn reference_male_maintain_scenario() {
        // BMR = 10*80 + 6.25*180 - 5*30 + 5 = 1780; TDEE = 1780 * 1.55 = 2759
        let targets = compute_targets(&moderate_male());
        assert!((targets.calories - 2759.0).abs() < 1e-9);
        assert!((targets.protein_g - 275.9).abs() < 1e-9);
        assert!((targets.carbs_g - 275.9).abs() < 1e-9);
        assert!((targets.fat_g - 2759.0 * 0.2 / 9.0).abs() < 1e-9);
    }

    #[test]
    fn macro_energy_adds_up_to_calories() {
        let profiles = [
            moderate_male(),
            ProfileMetrics {
                biological_sex: BiologicalSex::Female,
                age: 45,
                height_cm: 162.5,
                weight_kg: 55.3,
                activity_level: ActivityLevel::Light,
                goal: Goal::LoseFat,
            },
            ProfileMetrics {
                biological_sex: BiologicalSex::Other,
                age: 19,
                height_cm: 171.0,
                weight_kg: 102.0,
                activity_level: ActivityLevel::VeryActive,
                goal: Goal::BuildMuscle,
            },
        ];
        for profile in profiles {
            let t = compute_targets(&profile);
            let energy = t.protein_g * KCAL_PER_G_PROTEIN
                + t.carbs_g * KCAL_PER_G_CARBS
                + t.fat_g * KCAL_PER_G_FAT;
            assert!(
                (energy - t.calories).abs() < 1e-9,
                "macro energy {energy} != calories {}",
                t.calories
            );
        }
    }

    #[test]
    fn female_and_other_share_the_same_offset() {
        let mut female = moderate_male();
        female.biological_sex = BiologicalSex::Female;
        let mut other = moderate_male();
        other.biological_sex = BiologicalSex::Other;

        let f = compute_targets(&female);
        let o = compute_targets(&other);
        assert_eq!(f, o);
        // 166 kcal BMR gap between the male and female formulas, scaled by activity
        let male = compute_targets(&moderate_male());
        assert!((male.calories - f.calories - 166.0 * 1.55).abs() < 1e-9);
    }

    #[test]
    fn goal_shifts_calories_by_500() {
        let maintain = compute_targets(&moderate_male());

        let mut lose = moderate_male();
        lose.goal = Goal::LoseFat;
        assert!((compute_targets(&lose).calories - (maintain.calories - 500.0)).abs() < 1e-9);

        let mut build = moderate_male();
        build.goal = Goal::BuildMuscle;
        assert!((compute_targets(&build).calories - (maintain.calories + 500.0)).abs() < 1e-9);
    }

    #[test]
    fn activity_multipliers_match_the_fixed_table() {
        let expected = [
            (ActivityLevel::Sedentary, 1.2),
            (ActivityLevel::Light, 1.375),
            (ActivityLevel::Moderate, 1.55),
            (ActivityLevel::Active, 1.725),
            (ActivityLevel::VeryActive, 1.9),
        ];
        for (level, mult) in expected {
            assert_eq!(level.multiplier(), mult);
        }
    }

    #[test]
    fn extreme_inputs_pass_through_unclamped() {
        let profile = ProfileMetrics {
            biological_sex: BiologicalSex::Female,
            age: 110,
            height_cm: 120.0,
            weight_kg: 30.0,
            activity_level: ActivityLevel::Sedentary,
            goal: Goal::LoseFat,
        };
        let t = compute_targets(&profile);
        // 10*30 + 6.25*120 - 5*110 - 161 = 339; 339*1.2 - 500 < 0
        assert!(t.calories < 0.0);
    }

    #[test]
    fn enum_labels_round_trip_through_from_str() {
        for level in [
            ActivityLevel::Sedentary,
            ActivityLevel::Light,
            ActivityLevel::Moderate,
            ActivityLevel::Active,
            ActivityLevel::VeryActive,
        ] {
            assert_eq!(level.as_str().parse::<ActivityLevel>().unwrap(), level);
        }
        for goal in [Goal::LoseFat, Goal::MaintainWeight, Goal::BuildMuscle] {
            assert_eq!(goal.as_str().parse::<Goal>().unwrap(), goal);
        }
        assert!("couch potato".parse::<ActivityLevel>().is_err());
    }
}
