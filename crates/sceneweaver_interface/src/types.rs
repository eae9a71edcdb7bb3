//! Boundary types for the generation and render calls.

use sceneweaver_core::{AspectRatio, DialogLine, QualityMode};
use serde::{Deserialize, Serialize};

/// Input to one scene generation call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationCall {
    /// Full context prompt for the batch
    pub context_prompt: String,
    /// Exact number of scenes the answer must contain
    pub requested_count: usize,
    /// JSON schema the answer must satisfy
    pub response_schema: serde_json::Value,
    /// Reasoning depth to request from the service
    pub quality_mode: QualityMode,
}

/// Input to one asset render call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderCall {
    /// The scene's generation prompt
    pub prompt: String,
    /// Output aspect ratio
    pub aspect_ratio: AspectRatio,
}

/// One scene object as returned by the service, before renumbering.
///
/// `scene_number` is whatever the service claimed; the executor overwrites it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneDraft {
    /// Service-assigned number (untrusted)
    #[serde(default)]
    pub scene_number: Option<u32>,
    /// Prose description of the scene
    pub narrative: String,
    /// Prompt for the asset renderer
    pub generation_prompt: String,
    /// Voice-over narration
    pub voiceover: String,
    /// Optional ordered dialog
    #[serde(default)]
    pub dialog: Option<Vec<DialogLine>>,
}
