pub mod health;
pub mod quiz;

use crate::AppState;
use axum::{
    routing::{get, post},
    Router,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::health))
        .route("/api/generate-quiz", post(quiz::generate_quiz))
        .route("/generate", post(quiz::generate))
        .route("/translate", post(quiz::translate))
        .with_state(state)
}
