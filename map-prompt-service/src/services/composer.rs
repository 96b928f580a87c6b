//! Prompt composition.
//!
//! Turns a [`MapPromptRequest`] into the comma-separated prompt string sent
//! on to the image generator. Pure and total: identical requests always
//! compose identical prompts, and no input shape can make it fail.

use crate::dtos::map_prompt::MapPromptRequest;

/// Fixed opening clause of every prompt.
const BASE_CLAUSE: &str = "Top-down TTRPG battle map";

/// Compose the image prompt for a map request.
///
/// Candidate clauses are assembled in a fixed order, empty ones are
/// discarded, and the survivors are joined with `", "`.
pub fn compose_prompt(req: &MapPromptRequest) -> String {
    let terrain_clause = match non_empty(&req.feature) {
        Some(feature) => format!("of {} with {}", req.terrain, feature),
        None => format!("of {}", req.terrain),
    };

    let grid_clause = match req.grid_size {
        Some(n) if n != 0 => format!("grid-aligned, {}x{} squares", n, n),
        _ => "gridless".to_string(),
    };

    let clauses = [
        BASE_CLAUSE.to_string(),
        terrain_clause,
        non_empty(&req.style)
            .map(|style| format!("{} style", style))
            .unwrap_or_default(),
        non_empty(&req.color_tone)
            .map(|tone| format!("{} colors", tone))
            .unwrap_or_default(),
        format!("{} present", req.encounter),
        grid_clause,
        if req.vtt_ready == Some(true) {
            "playable for VTT".to_string()
        } else {
            String::new()
        },
        non_empty(&req.extra_tags)
            .map(str::to_owned)
            .unwrap_or_default(),
    ];

    let prompt = clauses
        .iter()
        .filter(|clause| !clause.is_empty())
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");

    // Field values ending in whitespace leave a stray " ," at the clause
    // boundary; collapse it. The join itself cannot produce one.
    prompt.replace(" ,", ",")
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}
