use axum::{response::IntoResponse, Json};

use crate::{
    dtos::map_prompt::{MapPromptRequest, MapPromptResponse},
    services::{compose_prompt, record_prompt_composed},
    utils::AppJson,
};

/// Compose an image prompt from map parameters
#[utoipa::path(
    post,
    path = "/map-prompt",
    request_body = MapPromptRequest,
    responses(
        (status = 200, description = "Prompt composed", body = MapPromptResponse),
        (status = 400, description = "Malformed request body", body = ErrorResponse),
        (status = 422, description = "Missing or mistyped field", body = ErrorResponse)
    ),
    tag = "Prompts"
)]
pub async fn map_prompt(AppJson(req): AppJson<MapPromptRequest>) -> impl IntoResponse {
    let gridless = !matches!(req.grid_size, Some(n) if n != 0);
    let prompt = compose_prompt(&req);

    // The privacy policy promises no logs of request contents; only derived
    // metadata is recorded.
    tracing::info!(prompt_length = prompt.len(), gridless, "Prompt composed");
    record_prompt_composed(gridless);

    Json(MapPromptResponse { prompt })
}
