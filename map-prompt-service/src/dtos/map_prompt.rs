use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Parameters for one battle map prompt.
///
/// Absent optional fields take their documented default; an explicit `null`
/// clears the default; an empty string is accepted but contributes no
/// clause. No further validation happens at this layer.
#[derive(Debug, Deserialize, ToSchema)]
pub struct MapPromptRequest {
    #[schema(example = "swamp")]
    pub terrain: String,

    #[schema(example = "bandits")]
    pub encounter: String,

    #[serde(default)]
    #[schema(example = "a ruined tower")]
    pub feature: Option<String>,

    /// Squares per map edge. Zero or `null` renders a gridless map.
    #[serde(default = "default_grid_size")]
    #[schema(example = 30)]
    pub grid_size: Option<i64>,

    #[serde(default = "default_style")]
    #[schema(example = "OSR")]
    pub style: Option<String>,

    #[serde(default = "default_color_tone")]
    #[schema(example = "muted")]
    pub color_tone: Option<String>,

    #[serde(default = "default_vtt_ready")]
    #[schema(example = true)]
    pub vtt_ready: Option<bool>,

    /// Free-form tags appended verbatim to the end of the prompt.
    #[serde(default)]
    #[schema(example = "dense fog, night lighting")]
    pub extra_tags: Option<String>,
}

fn default_grid_size() -> Option<i64> {
    Some(30)
}

fn default_style() -> Option<String> {
    Some("OSR".to_string())
}

fn default_color_tone() -> Option<String> {
    Some("muted".to_string())
}

fn default_vtt_ready() -> Option<bool> {
    Some(true)
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MapPromptResponse {
    #[schema(
        example = "Top-down TTRPG battle map, of swamp, OSR style, muted colors, bandits present, grid-aligned, 30x30 squares, playable for VTT"
    )]
    pub prompt: String,
}
