use serde::{Deserialize, Serialize};

use crate::nutrition::error::NutritionError;
use crate::nutrition::targets::{KCAL_PER_G_CARBS, KCAL_PER_G_FAT, KCAL_PER_G_PROTEIN};

/// Macro split expressed as percentages of daily calories.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroPercentages {
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl MacroPercentages {
    pub fn total(&self) -> f64 {
        self.protein + self.carbs + self.fat
    }
}

/// Gram targets produced by a percentage re-split. Calories stay untouched.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MacroGrams {
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
}

/// Convert an edited percentage split into gram targets.
///
/// The percentages must total exactly 100; anything else is rejected before
/// any conversion happens so a half-applied split never reaches storage.
pub fn apply_macro_percentages(
    calories: f64,
    split: MacroPercentages,
) -> Result<MacroGrams, NutritionError> {
    let total = split.total();
    if total != 100.0 {
        return Err(NutritionError::SplitNotHundred { total });
    }
    Ok(MacroGrams {
        protein_g: calories * (split.protein / 100.0) / KCAL_PER_G_PROTEIN,
        carbs_g: calories * (split.carbs / 100.0) / KCAL_PER_G_CARBS,
        fat_g: calories * (split.fat / 100.0) / KCAL_PER_G_FAT,
    })
}

/// Inverse of [`apply_macro_percentages`], used when stored gram targets are
/// shown as percentages. Display rounds to whole percent; the raw values are
/// returned here.
pub fn percentages_from_grams(
    calories: f64,
    protein_g: f64,
    carbs_g: f64,
    fat_g: f64,
) -> MacroPercentages {
    MacroPercentages {
        protein: protein_g * KCAL_PER_G_PROTEIN / calories * 100.0,
        carbs: carbs_g * KCAL_PER_G_CARBS / calories * 100.0,
        fat: fat_g * KCAL_PER_G_FAT / calories * 100.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nutrition::targets::{
        compute_targets, ActivityLevel, BiologicalSex, Goal, ProfileMetrics,
    };

    #[test]
    fn forty_forty_twenty_on_two_thousand_kcal() {
        let split = MacroPercentages {
            protein: 40.0,
            carbs: 40.0,
            fat: 20.0,
        };
        let grams = apply_macro_percentages(2000.0, split).expect("valid split");
        assert!((grams.protein_g - 200.0).abs() < 1e-9);
        assert!((grams.carbs_g - 200.0).abs() < 1e-9);
        assert!((grams.fat_g - 400.0 / 9.0).abs() < 1e-9);
    }

    #[test]
    fn rejects_splits_that_do_not_total_100() {
        for (p, c, f) in [(40.0, 40.0, 21.0), (30.0, 30.0, 30.0), (0.0, 0.0, 0.0)] {
            let err = apply_macro_percentages(
                2000.0,
                MacroPercentages {
                    protein: p,
                    carbs: c,
                    fat: f,
                },
            )
            .unwrap_err();
            assert_eq!(err, NutritionError::SplitNotHundred { total: p + c + f });
        }
    }

    #[test]
    fn grams_and_percentages_are_inverses() {
        let split = MacroPercentages {
            protein: 35.0,
            carbs: 45.0,
            fat: 20.0,
        };
        let grams = apply_macro_percentages(2450.0, split).expect("valid split");
        let back = percentages_from_grams(2450.0, grams.protein_g, grams.carbs_g, grams.fat_g);
        assert!((back.protein - split.protein).abs() < 1e-9);
        assert!((back.carbs - split.carbs).abs() < 1e-9);
        assert!((back.fat - split.fat).abs() < 1e-9);
    }

    #[test]
    fn computed_targets_display_as_40_40_20() {
        let targets = compute_targets(&ProfileMetrics {
            biological_sex: BiologicalSex::Female,
            age: 28,
            height_cm: 168.0,
            weight_kg: 62.0,
            activity_level: ActivityLevel::Active,
            goal: Goal::MaintainWeight,
        });
        let pct = percentages_from_grams(
            targets.calories,
            targets.protein_g,
            targets.carbs_g,
            targets.fat_g,
        );
        assert!((pct.protein - 40.0).abs() < 1e-9);
        assert!((pct.carbs - 40.0).abs() < 1e-9);
        assert!((pct.fat - 20.0).abs() < 1e-9);
        assert_eq!(pct.protein.round(), 40.0);
    }
}
