use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::nutrition::{
    percentages_from_grams, ActivityLevel, BiologicalSex, Goal, NutritionTargets,
};

/// Self-reported body-fat band. Collected during setup but not an input to
/// the target calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BodyFat {
    Low,
    Medium,
    High,
}

impl BodyFat {
    pub fn as_str(self) -> &'static str {
        match self {
            BodyFat::Low => "Low",
            BodyFat::Medium => "Medium",
            BodyFat::High => "High",
        }
    }
}

impl FromStr for BodyFat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Low" => Ok(BodyFat::Low),
            "Medium" => Ok(BodyFat::Medium),
            "High" => Ok(BodyFat::High),
            other => anyhow::bail!("unknown body fat band: {other}"),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ProfileSetupRequest {
    pub biological_sex: BiologicalSex,
    pub age: u32,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub body_fat: BodyFat,
    pub activity_level: ActivityLevel,
    pub goal: Goal,
}

#[derive(Debug, Deserialize)]
pub struct MacroSplitRequest {
    pub protein_pct: f64,
    pub carbs_pct: f64,
    pub fat_pct: f64,
}

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub biological_sex: BiologicalSex,
    pub age: u32,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub body_fat: BodyFat,
    pub activity_level: ActivityLevel,
    pub goal: Goal,
    pub targets: TargetsResponse,
}

/// Stored targets plus their display percentages (whole percent, matching
/// the editor UI; grams stay raw and the client formats them).
#[derive(Debug, Serialize)]
pub struct TargetsResponse {
    pub calories: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
    pub protein_pct: f64,
    pub carbs_pct: f64,
    pub fat_pct: f64,
}

impl From<&NutritionTargets> for TargetsResponse {
    fn from(t: &NutritionTargets) -> Self {
        let pct = if t.calories == 0.0 {
            crate::nutrition::MacroPercentages {
                protein: 0.0,
                carbs: 0.0,
                fat: 0.0,
            }
        } else {
            percentages_from_grams(t.calories, t.protein_g, t.carbs_g, t.fat_g)
        };
        Self {
            calories: t.calories,
            protein_g: t.protein_g,
            carbs_g: t.carbs_g,
            fat_g: t.fat_g,
            protein_pct: pct.protein.round(),
            carbs_pct: pct.carbs.round(),
            fat_pct: pct.fat.round(),
        }
    }
}
