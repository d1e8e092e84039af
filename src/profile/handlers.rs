use axum::{extract::State, http::StatusCode, Json};
use tracing::{error, info, instrument, warn};

use crate::auth::AuthUser;
use crate::nutrition::{
    apply_macro_percentages, compute_targets, MacroPercentages, NutritionError, ProfileMetrics,
};
use crate::profile::dto::{MacroSplitRequest, ProfileResponse, ProfileSetupRequest, TargetsResponse};
use crate::profile::repo::{self, StoredProfile};
use crate::state::AppState;

fn profile_response(profile: &StoredProfile) -> ProfileResponse {
    ProfileResponse {
        biological_sex: profile.metrics.biological_sex,
        age: profile.metrics.age,
        height_cm: profile.metrics.height_cm,
        weight_kg: profile.metrics.weight_kg,
        body_fat: profile.body_fat,
        activity_level: profile.metrics.activity_level,
        goal: profile.metrics.goal,
        targets: TargetsResponse::from(&profile.targets),
    }
}

fn internal<E: std::fmt::Display>(e: E) -> (StatusCode, String) {
    error!(error = %e, "profile store failure");
    (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
}

/// PUT /profile: validate the form inputs, derive targets, persist both.
#[instrument(skip(state, payload))]
pub async fn setup_profile(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<ProfileSetupRequest>,
) -> Result<Json<ProfileResponse>, (StatusCode, String)> {
    if payload.age == 0 {
        return Err((StatusCode::BAD_REQUEST, "age must be positive".into()));
    }
    if !payload.height_cm.is_finite() || payload.height_cm <= 0.0 {
        return Err((StatusCode::BAD_REQUEST, "height must be positive".into()));
    }
    if !payload.weight_kg.is_finite() || payload.weight_kg <= 0.0 {
        return Err((StatusCode::BAD_REQUEST, "weight must be positive".into()));
    }

    let metrics = ProfileMetrics {
        biological_sex: payload.biological_sex,
        age: payload.age,
        height_cm: payload.height_cm,
        weight_kg: payload.weight_kg,
        activity_level: payload.activity_level,
        goal: payload.goal,
    };
    let targets = compute_targets(&metrics);

    repo::upsert(&state.db, user_id, &metrics, payload.body_fat, &targets)
        .await
        .map_err(internal)?;

    info!(user_id = %user_id, calories = targets.calories, "profile saved");
    Ok(Json(profile_response(&StoredProfile {
        metrics,
        body_fat: payload.body_fat,
        targets,
    })))
}

#[instrument(skip(state))]
pub async fn get_profile(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<ProfileResponse>, (StatusCode, String)> {
    let profile = repo::find(&state.db, user_id)
        .await
        .map_err(internal)?
        .ok_or((StatusCode::NOT_FOUND, "Profile not set up".to_string()))?;
    Ok(Json(profile_response(&profile)))
}

#[instrument(skip(state))]
pub async fn get_targets(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<TargetsResponse>, (StatusCode, String)> {
    let profile = repo::find(&state.db, user_id)
        .await
        .map_err(internal)?
        .ok_or((StatusCode::NOT_FOUND, "Profile not set up".to_string()))?;
    Ok(Json(TargetsResponse::from(&profile.targets)))
}

/// PUT /profile/targets: re-split stored calories across the macros.
#[instrument(skip(state, payload))]
pub async fn update_targets(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<MacroSplitRequest>,
) -> Result<Json<TargetsResponse>, (StatusCode, String)> {
    let profile = repo::find(&state.db, user_id)
        .await
        .map_err(internal)?
        .ok_or((StatusCode::NOT_FOUND, "Profile not set up".to_string()))?;

    let split = MacroPercentages {
        protein: payload.protein_pct,
        carbs: payload.carbs_pct,
        fat: payload.fat_pct,
    };
    let grams = match apply_macro_percentages(profile.targets.calories, split) {
        Ok(g) => g,
        Err(NutritionError::SplitNotHundred { total }) => {
            warn!(user_id = %user_id, total, "macro split rejected");
            return Err((
                StatusCode::BAD_REQUEST,
                "The total of the added percentages must equal 100%".into(),
            ));
        }
        Err(e) => return Err(internal(e)),
    };

    let updated = repo::update_macros(&state.db, user_id, &grams)
        .await
        .map_err(internal)?;
    if !updated {
        return Err((StatusCode::NOT_FOUND, "Profile not set up".into()));
    }

    let targets = crate::nutrition::NutritionTargets {
        calories: profile.targets.calories,
        protein_g: grams.protein_g,
        carbs_g: grams.carbs_g,
        fat_g: grams.fat_g,
    };
    info!(user_id = %user_id, "macro targets re-split");
    Ok(Json(TargetsResponse::from(&targets)))
}
