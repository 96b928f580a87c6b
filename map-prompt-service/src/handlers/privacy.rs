use axum::{http::header, response::IntoResponse, Json};
use serde_json::json;

/// Privacy policy for Custom GPT Actions
#[utoipa::path(
    get,
    path = "/privacy",
    responses(
        (status = 200, description = "Privacy policy document")
    ),
    tag = "Well-Known"
)]
pub async fn privacy_policy() -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, "application/json"),
            (header::CACHE_CONTROL, "public, max-age=3600"),
        ],
        Json(json!({
            "privacy_policy": {
                "data_collection": {
                    "what_we_collect": [
                        "Map generation parameters (terrain, encounter, features, etc.)",
                        "Style preferences (art style, color tone, grid size)",
                        "Optional descriptive tags and customizations"
                    ],
                    "what_we_dont_collect": [
                        "Personal identification information",
                        "User account data",
                        "Location information",
                        "Browsing history or cookies"
                    ]
                },
                "data_usage": {
                    "primary_purpose": "Generate TTRPG battle map prompts based on user specifications",
                    "processing": "Input parameters are processed to create optimized prompts for AI image generation",
                    "no_ai_training": "Data is not used to train or improve AI models",
                    "no_profiling": "No user profiling or behavioral analysis is performed"
                },
                "data_retention": {
                    "storage": "No data is permanently stored",
                    "processing": "Data exists only during the API request/response cycle",
                    "logs": "No persistent logs of user requests are maintained",
                    "duration": "Data is discarded immediately after prompt generation"
                },
                "data_sharing": {
                    "third_parties": "No data is shared with any third parties",
                    "openai": "Data is only transmitted to OpenAI's Custom GPT system as part of the API response",
                    "external_services": "No external services or APIs receive user data",
                    "commercial_use": "No data is sold or used for commercial purposes"
                },
                "security": {
                    "encryption": "All API communications use HTTPS encryption",
                    "access": "No user data is accessible to external parties",
                    "compliance": "This service is designed for personal TTRPG use only"
                },
                "contact": {
                    "questions": "For privacy questions, contact the API provider",
                    "updates": "This policy may be updated - check this endpoint for changes"
                }
            }
        })),
    )
}
