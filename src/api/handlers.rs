use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::{error::RelayError, upstream::generate_via_api, AppState};

use super::models::{ErrorResponse, GenerateRequest, GenerateResponse};

pub async fn generate(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<GenerateResponse>, RelayError> {
    let job = GenerateRequest::from_body(&body)?.into_job()?;

    tracing::info!(kind = job.kind(), "relaying generation request");

    let prompt = job.render();
    let text = generate_via_api(&prompt, &state).await?;

    Ok(Json(GenerateResponse::for_job(&job, text)))
}

pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

pub async fn method_not_allowed() -> RelayError {
    RelayError::MethodNotAllowed
}

pub async fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: "Not found".to_string(),
            detail: None,
        }),
    )
        .into_response()
}
