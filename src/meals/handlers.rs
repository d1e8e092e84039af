use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use time::Date;
use tracing::{error, info, instrument, warn};

use crate::auth::AuthUser;
use crate::meals::dto::{
    format_date, parse_date, AmountPatchRequest, DayLogResponse, MealLogResponse, MealSlot,
    ReplaceMealLogRequest,
};
use crate::meals::repo;
use crate::nutrition::{aggregate, DailyTotals, NutritionError};
use crate::profile::dto::TargetsResponse;
use crate::state::AppState;

fn parse_key(date: &str, slot: &str) -> Result<(Date, MealSlot), (StatusCode, String)> {
    let date = parse_date(date).ok_or((
        StatusCode::BAD_REQUEST,
        "date must be YYYY-MM-DD".to_string(),
    ))?;
    let slot = slot
        .parse::<MealSlot>()
        .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?;
    Ok((date, slot))
}

fn meal_response(date: Date, slot: MealSlot, items: Vec<crate::nutrition::FoodItem>) -> MealLogResponse {
    let totals = aggregate(&items);
    MealLogResponse {
        date: format_date(date),
        slot,
        items,
        totals,
    }
}

fn internal<E: std::fmt::Display>(e: E) -> (StatusCode, String) {
    error!(error = %e, "meal log store failure");
    (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
}

/// GET /logs/:date returns every slot with per-slot and whole-day totals.
#[instrument(skip(state))]
pub async fn get_day(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(date): Path<String>,
) -> Result<Json<DayLogResponse>, (StatusCode, String)> {
    let date = parse_date(&date).ok_or((
        StatusCode::BAD_REQUEST,
        "date must be YYYY-MM-DD".to_string(),
    ))?;

    let rows = repo::fetch_day(&state.db, user_id, date)
        .await
        .map_err(internal)?;

    let mut meals = Vec::with_capacity(MealSlot::ALL.len());
    let mut day_totals = DailyTotals::default();
    for slot in MealSlot::ALL {
        let items = rows
            .iter()
            .find(|row| row.slot == slot.as_str())
            .map(|row| row.items.0.clone())
            .unwrap_or_default();
        let meal = meal_response(date, slot, items);
        day_totals.add(meal.totals);
        meals.push(meal);
    }

    let targets = crate::profile::repo::find(&state.db, user_id)
        .await
        .map_err(internal)?
        .map(|profile| TargetsResponse::from(&profile.targets));

    Ok(Json(DayLogResponse {
        date: format_date(date),
        meals,
        totals: day_totals,
        targets,
    }))
}

/// GET /logs/:date/:slot reads one slot; an absent row reads as an empty log.
#[instrument(skip(state))]
pub async fn get_meal(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path((date, slot)): Path<(String, String)>,
) -> Result<Json<MealLogResponse>, (StatusCode, String)> {
    let (date, slot) = parse_key(&date, &slot)?;
    let items = repo::fetch_items(&state.db, user_id, date, slot)
        .await
        .map_err(internal)?
        .unwrap_or_default();
    Ok(Json(meal_response(date, slot, items)))
}

/// PUT /logs/:date/:slot replaces the slot's item list wholesale.
#[instrument(skip(state, payload))]
pub async fn replace_meal(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path((date, slot)): Path<(String, String)>,
    Json(payload): Json<ReplaceMealLogRequest>,
) -> Result<Json<MealLogResponse>, (StatusCode, String)> {
    let (date, slot) = parse_key(&date, &slot)?;
    repo::replace_items(&state.db, user_id, date, slot, payload.items.clone())
        .await
        .map_err(internal)?;
    info!(user_id = %user_id, slot = slot.as_str(), items = payload.items.len(), "meal log saved");
    Ok(Json(meal_response(date, slot, payload.items)))
}

/// PATCH /logs/:date/:slot/items/:index re-amounts one logged item,
/// preserving its per-gram ratios.
#[instrument(skip(state, payload))]
pub async fn update_item_amount(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path((date, slot, index)): Path<(String, String, usize)>,
    Json(payload): Json<AmountPatchRequest>,
) -> Result<Json<MealLogResponse>, (StatusCode, String)> {
    let (date, slot) = parse_key(&date, &slot)?;

    let mut items = repo::fetch_items(&state.db, user_id, date, slot)
        .await
        .map_err(internal)?
        .ok_or((StatusCode::NOT_FOUND, "Meal log not found".to_string()))?;

    let item = items
        .get(index)
        .ok_or((StatusCode::NOT_FOUND, "No such item".to_string()))?;

    let rescaled = item.rescaled(payload.amount_grams).map_err(|e| match e {
        NutritionError::ZeroReferenceAmount => {
            warn!(user_id = %user_id, index, "rescale on a 0g item");
            (StatusCode::UNPROCESSABLE_ENTITY, e.to_string())
        }
        other => internal(other),
    })?;
    items[index] = rescaled;

    repo::replace_items(&state.db, user_id, date, slot, items.clone())
        .await
        .map_err(internal)?;
    Ok(Json(meal_response(date, slot, items)))
}
