use crate::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

#[axum::debug_handler]
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let provider = state.quiz_service.provider();
    let body = json!({
        "status": "ok",
        "service": "Stuttee backend",
        "model": provider.model(),
    });
    (StatusCode::OK, Json(body))
}
