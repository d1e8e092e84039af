pub mod dto;
pub mod handlers;
pub mod repo;

use crate::state::AppState;
use axum::{routing::get, Router};

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/profile",
            get(handlers::get_profile).put(handlers::setup_profile),
        )
        .route(
            "/profile/targets",
            get(handlers::get_targets).put(handlers::update_targets),
        )
}
