use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::{error, info};

use crate::AppState;

use super::models::{AskRequest, AskResponse, ErrorResponse, HealthResponse};

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

pub async fn ask(
    State(state): State<AppState>,
    Json(payload): Json<AskRequest>,
) -> Result<Json<AskResponse>, (StatusCode, Json<ErrorResponse>)> {
    let messages = state.fetcher.fetch_messages().await.map_err(|err| {
        error!(error = %err, "failed to fetch member messages");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                detail: format!("Error fetching messages: {err}"),
            }),
        )
    })?;

    let answer = state
        .generator
        .answer(&payload.question, &messages)
        .await
        .map_err(|err| {
            // The cause stays in the log; callers get a generic detail so
            // provider error text never leaks through the API.
            error!(error = %err, "failed to generate answer");
            (
                StatusCode::BAD_GATEWAY,
                Json(ErrorResponse {
                    detail: "Error generating answer: answer generation is currently unavailable"
                        .to_string(),
                }),
            )
        })?;

    info!(question_len = payload.question.len(), "answered question");
    Ok(Json(AskResponse { answer }))
}

pub async fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            detail: "route not found".to_string(),
        }),
    )
        .into_response()
}
