mod error;
mod food;
mod split;
mod targets;
mod totals;

pub use error::NutritionError;
pub use food::FoodItem;
pub use split::{apply_macro_percentages, percentages_from_grams, MacroGrams, MacroPercentages};
pub use targets::{compute_targets, ActivityLevel, BiologicalSex, Goal, NutritionTargets, ProfileMetrics};
pub use totals::{aggregate, DailyTotals};
