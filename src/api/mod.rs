mod handlers;
mod models;

use axum::{
    routing::{get, post},
    Router,
};

use crate::AppState;

pub use handlers::{ask, health, not_found};
pub use models::{AskRequest, AskResponse, ErrorResponse, HealthResponse};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/ask", post(ask))
        .fallback(not_found)
        .with_state(state)
}
