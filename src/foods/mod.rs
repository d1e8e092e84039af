mod client;
mod dto;
mod error;
pub mod handlers;
mod vision;

pub use client::{FoodDataClient, NutritionApi};
pub use error::LookupError;
pub use vision::{ClarifaiVision, VisionClient};

use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/foods/search", get(handlers::search_foods))
        .route("/foods/barcode/:barcode", get(handlers::lookup_barcode))
        .route("/foods/recognize", post(handlers::recognize_meal))
}
