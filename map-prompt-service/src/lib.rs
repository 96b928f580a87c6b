pub mod config;
pub mod dtos;
pub mod handlers;
pub mod services;
pub mod startup;
pub mod utils;

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(title = "Map Prompt Builder"),
    servers(
        (url = "https://map-prompt-builder-production.up.railway.app", description = "Production server")
    ),
    paths(
        handlers::map_prompt::map_prompt,
        handlers::app::root,
        handlers::app::health_check,
        handlers::privacy::privacy_policy,
    ),
    components(
        schemas(
            dtos::map_prompt::MapPromptRequest,
            dtos::map_prompt::MapPromptResponse,
            dtos::ErrorResponse,
        )
    ),
    tags(
        (name = "Prompts", description = "Battle map prompt composition"),
        (name = "Service", description = "Service metadata"),
        (name = "Well-Known", description = "Public service metadata"),
        (name = "Observability", description = "Service health and monitoring"),
    )
)]
pub struct ApiDoc;
