use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::{format_description::FormatItem, macros::format_description, Date};

use crate::nutrition::{DailyTotals, FoodItem};
use crate::profile::dto::TargetsResponse;

/// Calendar-date key format used in paths and responses.
pub const DATE_FORMAT: &[FormatItem<'static>] = format_description!("[year]-[month]-[day]");

pub fn parse_date(s: &str) -> Option<Date> {
    Date::parse(s, DATE_FORMAT).ok()
}

pub fn format_date(date: Date) -> String {
    date.format(DATE_FORMAT).expect("static date format")
}

/// One of the fixed meal occasions a day's log is bucketed into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealSlot {
    pub const ALL: [MealSlot; 4] = [
        MealSlot::Breakfast,
        MealSlot::Lunch,
        MealSlot::Dinner,
        MealSlot::Snack,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            MealSlot::Breakfast => "breakfast",
            MealSlot::Lunch => "lunch",
            MealSlot::Dinner => "dinner",
            MealSlot::Snack => "snack",
        }
    }
}

impl FromStr for MealSlot {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "breakfast" => Ok(MealSlot::Breakfast),
            "lunch" => Ok(MealSlot::Lunch),
            "dinner" => Ok(MealSlot::Dinner),
            "snack" => Ok(MealSlot::Snack),
            other => anyhow::bail!("unknown meal slot: {other}"),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ReplaceMealLogRequest {
    pub items: Vec<FoodItem>,
}

#[derive(Debug, Deserialize)]
pub struct AmountPatchRequest {
    pub amount_grams: f64,
}

#[derive(Debug, Serialize)]
pub struct MealLogResponse {
    pub date: String,
    pub slot: MealSlot,
    pub items: Vec<FoodItem>,
    pub totals: DailyTotals,
}

/// A whole day: every slot (empty ones included), day totals, and the
/// user's targets when a profile exists.
#[derive(Debug, Serialize)]
pub struct DayLogResponse {
    pub date: String,
    pub meals: Vec<MealLogResponse>,
    pub totals: DailyTotals,
    pub targets: Option<TargetsResponse>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slots_parse_case_insensitively() {
        assert_eq!("breakfast".parse::<MealSlot>().unwrap(), MealSlot::Breakfast);
        assert_eq!("Lunch".parse::<MealSlot>().unwrap(), MealSlot::Lunch);
        assert_eq!("DINNER".parse::<MealSlot>().unwrap(), MealSlot::Dinner);
        assert!("brunch".parse::<MealSlot>().is_err());
    }

    #[test]
    fn slot_serde_uses_lowercase_labels() {
        assert_eq!(serde_json::to_string(&MealSlot::Snack).unwrap(), r#""snack""#);
        let slot: MealSlot = serde_json::from_str(r#""breakfast""#).unwrap();
        assert_eq!(slot, MealSlot::Breakfast);
    }

    #[test]
    fn dates_round_trip_through_the_path_format() {
        let date = parse_date("2024-03-09").expect("parse");
        assert_eq!(format_date(date), "2024-03-09");
        assert!(parse_date("09/03/2024").is_none());
        assert!(parse_date("2024-13-40").is_none());
    }
}
