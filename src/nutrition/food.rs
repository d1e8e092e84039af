use serde::{Deserialize, Serialize};

use crate::nutrition::error::NutritionError;

fn default_amount_grams() -> f64 {
    100.0
}

/// A logged food entry. Macro fields are totals for `amount_grams`, not
/// per-100g values; lookup clients hand these out as 100g templates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    pub name: String,
    #[serde(default = "default_amount_grams")]
    pub amount_grams: f64,
    pub calories: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
}

impl FoodItem {
    /// Scale this item to a new amount, preserving the per-gram ratios of
    /// the current reference amount.
    ///
    /// The amount stepper in the client has no floor, so zero or negative
    /// results are allowed to propagate. A 0g reference amount has no
    /// per-gram ratio to preserve and fails instead of producing NaN.
    pub fn rescaled(&self, new_amount_grams: f64) -> Result<FoodItem, NutritionError> {
        if self.amount_grams == 0.0 {
            return Err(NutritionError::ZeroReferenceAmount);
        }
        let ratio = new_amount_grams / self.amount_grams;
        Ok(FoodItem {
            name: self.name.clone(),
            amount_grams: new_amount_grams,
            calories: self.calories * ratio,
            protein_g: self.protein_g * ratio,
            carbs_g: self.carbs_g * ratio,
            fat_g: self.fat_g * ratio,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chicken() -> FoodItem {
        FoodItem {
            name: "chicken breast".into(),
            amount_grams: 100.0,
            calories: 165.0,
            protein_g: 31.0,
            carbs_g: 0.0,
            fat_g: 3.6,
        }
    }

    #[test]
    fn doubling_the_amount_doubles_every_macro() {
        let scaled = chicken().rescaled(200.0).expect("rescale");
        assert_eq!(scaled.amount_grams, 200.0);
        assert!((scaled.calories - 330.0).abs() < 1e-9);
        assert!((scaled.protein_g - 62.0).abs() < 1e-9);
        assert!((scaled.carbs_g - 0.0).abs() < 1e-9);
        assert!((scaled.fat_g - 7.2).abs() < 1e-9);
        assert_eq!(scaled.name, "chicken breast");
    }

    #[test]
    fn rescaling_to_the_current_amount_is_identity() {
        let item = chicken();
        assert_eq!(item.rescaled(100.0).expect("rescale"), item);
    }

    #[test]
    fn repeated_rescales_preserve_the_original_ratios() {
        // 100g -> 30g -> 150g must equal a direct 100g -> 150g scale
        let item = chicken();
        let stepped = item
            .rescaled(30.0)
            .and_then(|i| i.rescaled(150.0))
            .expect("rescale chain");
        let direct = item.rescaled(150.0).expect("rescale");
        assert!((stepped.calories - direct.calories).abs() < 1e-9);
        assert!((stepped.protein_g - direct.protein_g).abs() < 1e-9);
    }

    #[test]
    fn zero_and_negative_amounts_propagate() {
        let zeroed = chicken().rescaled(0.0).expect("rescale");
        assert_eq!(zeroed.calories, 0.0);
        let negative = chicken().rescaled(-10.0).expect("rescale");
        assert!(negative.calories < 0.0);
    }

    #[test]
    fn zero_reference_amount_is_an_error_not_nan() {
        let mut item = chicken();
        item.amount_grams = 0.0;
        assert_eq!(
            item.rescaled(50.0).unwrap_err(),
            NutritionError::ZeroReferenceAmount
        );
    }

    #[test]
    fn amount_defaults_to_100g_when_absent() {
        let item: FoodItem = serde_json::from_str(
            r#"{"name":"rice","calories":130.0,"protein_g":2.7,"carbs_g":28.0,"fat_g":0.3}"#,
        )
        .expect("deserialize");
        assert_eq!(item.amount_grams, 100.0);
    }
}
