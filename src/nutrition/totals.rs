use serde::Serialize;

use crate::nutrition::food::FoodItem;

/// Field-wise macro sums over a set of logged items. Always recomputed from
/// the items in scope, never stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct DailyTotals {
    pub calories: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
}

impl DailyTotals {
    pub fn add(&mut self, other: DailyTotals) {
        self.calories += other.calories;
        self.protein_g += other.protein_g;
        self.carbs_g += other.carbs_g;
        self.fat_g += other.fat_g;
    }
}

/// Sum the macro fields of every item. Duplicate names are summed as
/// distinct entries; merging same-named items is the meal editor's job.
pub fn aggregate<'a, I>(items: I) -> DailyTotals
where
    I: IntoIterator<Item = &'a FoodItem>,
{
    items.into_iter().fold(DailyTotals::default(), |mut acc, item| {
        acc.calories += item.calories;
        acc.protein_g += item.protein_g;
        acc.carbs_g += item.carbs_g;
        acc.fat_g += item.fat_g;
        acc
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, calories: f64, protein: f64, carbs: f64, fat: f64) -> FoodItem {
        FoodItem {
            name: name.into(),
            amount_grams: 100.0,
            calories,
            protein_g: protein,
            carbs_g: carbs,
            fat_g: fat,
        }
    }

    #[test]
    fn empty_log_sums_to_zero() {
        assert_eq!(aggregate([].iter()), DailyTotals::default());
    }

    #[test]
    fn two_item_reference_scenario() {
        let items = vec![
            item("oats", 200.0, 10.0, 20.0, 5.0),
            item("yogurt", 150.0, 5.0, 15.0, 8.0),
        ];
        let totals = aggregate(&items);
        assert_eq!(totals.calories, 350.0);
        assert_eq!(totals.protein_g, 15.0);
        assert_eq!(totals.carbs_g, 35.0);
        assert_eq!(totals.fat_g, 13.0);
    }

    #[test]
    fn order_does_not_change_the_result() {
        let mut items = vec![
            item("a", 120.5, 3.2, 18.1, 1.0),
            item("b", 87.0, 11.4, 2.2, 4.5),
            item("c", 301.9, 22.0, 40.7, 9.8),
        ];
        let forward = aggregate(&items);
        items.reverse();
        assert_eq!(aggregate(&items), forward);
    }

    #[test]
    fn duplicate_names_are_summed_not_merged() {
        let items = vec![
            item("banana", 89.0, 1.1, 23.0, 0.3),
            item("banana", 89.0, 1.1, 23.0, 0.3),
        ];
        let totals = aggregate(&items);
        assert_eq!(totals.calories, 178.0);
    }

    #[test]
    fn negative_inputs_propagate_unchanged() {
        let items = vec![item("bogus", -50.0, -1.0, 0.0, 0.0)];
        let totals = aggregate(&items);
        assert_eq!(totals.calories, -50.0);
        assert_eq!(totals.protein_g, -1.0);
    }

    #[test]
    fn day_totals_accumulate_across_meals() {
        let breakfast = aggregate(&vec![item("oats", 200.0, 10.0, 20.0, 5.0)]);
        let lunch = aggregate(&vec![item("salad", 150.0, 5.0, 15.0, 8.0)]);
        let mut day = DailyTotals::default();
        day.add(breakfast);
        day.add(lunch);
        assert_eq!(day.calories, 350.0);
        assert_eq!(day.fat_g, 13.0);
    }
}
