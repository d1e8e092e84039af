pub mod dto;
pub mod handlers;
mod repo;

use crate::state::AppState;
use axum::{routing::get, Router};

pub fn router() -> Router<AppState> {
    Router::new().route(
        "/progress",
        get(handlers::get_history).post(handlers::log_weight),
    )
}
