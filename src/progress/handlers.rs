use axum::{extract::State, http::StatusCode, Json};
use time::OffsetDateTime;
use tracing::{error, info, instrument};

use crate::auth::AuthUser;
use crate::meals::dto::{format_date, parse_date};
use crate::progress::dto::{LogWeightRequest, WeightEntryResponse, WeightHistoryResponse};
use crate::progress::repo;
use crate::state::AppState;

fn internal<E: std::fmt::Display>(e: E) -> (StatusCode, String) {
    error!(error = %e, "weight store failure");
    (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
}

async fn history(
    state: &AppState,
    user_id: uuid::Uuid,
) -> Result<WeightHistoryResponse, (StatusCode, String)> {
    let rows = repo::list(&state.db, user_id).await.map_err(internal)?;
    Ok(WeightHistoryResponse {
        entries: rows
            .into_iter()
            .map(|row| WeightEntryResponse {
                date: format_date(row.entry_date),
                weight_kg: row.weight_kg,
            })
            .collect(),
    })
}

#[instrument(skip(state))]
pub async fn get_history(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<WeightHistoryResponse>, (StatusCode, String)> {
    Ok(Json(history(&state, user_id).await?))
}

/// POST /progress: record today's (or the given date's) weight.
#[instrument(skip(state, payload))]
pub async fn log_weight(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<LogWeightRequest>,
) -> Result<Json<WeightHistoryResponse>, (StatusCode, String)> {
    if !payload.weight_kg.is_finite() || payload.weight_kg <= 0.0 {
        return Err((StatusCode::BAD_REQUEST, "weight must be positive".into()));
    }

    let date = match &payload.date {
        Some(s) => parse_date(s).ok_or((
            StatusCode::BAD_REQUEST,
            "date must be YYYY-MM-DD".to_string(),
        ))?,
        None => OffsetDateTime::now_utc().date(),
    };

    repo::upsert(&state.db, user_id, date, payload.weight_kg)
        .await
        .map_err(internal)?;
    info!(user_id = %user_id, weight_kg = payload.weight_kg, "weight logged");

    Ok(Json(history(&state, user_id).await?))
}
