pub mod dto;
pub mod handlers;
mod repo;

use crate::state::AppState;
use axum::{
    routing::{get, patch},
    Router,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/logs/:date", get(handlers::get_day))
        .route(
            "/logs/:date/:slot",
            get(handlers::get_meal).put(handlers::replace_meal),
        )
        .route(
            "/logs/:date/:slot/items/:index",
            patch(handlers::update_item_amount),
        )
}
