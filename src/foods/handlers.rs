use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use tracing::{error, instrument, warn};

use crate::auth::AuthUser;
use crate::foods::dto::{RecognizeRequest, RecognizeResponse, SearchQuery};
use crate::foods::error::LookupError;
use crate::nutrition::FoodItem;
use crate::state::AppState;

#[instrument(skip(state))]
pub async fn search_foods(
    State(state): State<AppState>,
    AuthUser(_user_id): AuthUser,
    Query(params): Query<SearchQuery>,
) -> Result<Json<Vec<FoodItem>>, (StatusCode, String)> {
    let query = params.query.trim();
    if query.is_empty() {
        return Err((StatusCode::BAD_REQUEST, "query must not be empty".into()));
    }
    let items = state.foods.search(query).await.map_err(lookup_failure)?;
    Ok(Json(items))
}

#[instrument(skip(state))]
pub async fn lookup_barcode(
    State(state): State<AppState>,
    AuthUser(_user_id): AuthUser,
    Path(barcode): Path<String>,
) -> Result<Json<FoodItem>, (StatusCode, String)> {
    let item = state
        .foods
        .by_barcode(&barcode)
        .await
        .map_err(lookup_failure)?;
    Ok(Json(item))
}

#[instrument(skip(state, payload))]
pub async fn recognize_meal(
    State(state): State<AppState>,
    AuthUser(_user_id): AuthUser,
    Json(payload): Json<RecognizeRequest>,
) -> Result<Json<RecognizeResponse>, (StatusCode, String)> {
    if payload.image_b64.is_empty() {
        return Err((StatusCode::BAD_REQUEST, "image_b64 is required".into()));
    }
    let candidates = state
        .vision
        .recognize(&payload.image_b64)
        .await
        .map_err(lookup_failure)?;
    Ok(Json(RecognizeResponse { candidates }))
}

fn lookup_failure(e: LookupError) -> (StatusCode, String) {
    match e {
        LookupError::NotFound => (StatusCode::NOT_FOUND, "Product details not found".into()),
        LookupError::Request(err) => {
            warn!(error = %err, "lookup provider unreachable");
            (StatusCode::BAD_GATEWAY, "food data service unavailable".into())
        }
        LookupError::Parse(msg) => {
            error!(error = %msg, "lookup provider returned an unexpected payload");
            (StatusCode::BAD_GATEWAY, "food data service unavailable".into())
        }
    }
}
