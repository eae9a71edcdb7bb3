//! Numbered scenes.

use serde::{Deserialize, Serialize};

/// One spoken line inside a scene.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DialogLine {
    /// Name of the speaking character
    pub character: String,
    /// What they say
    pub line: String,
}

/// One numbered unit of a production.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scene {
    /// Unique, positive position in the production
    pub scene_number: u32,
    /// Prose description of what happens
    pub narrative_line: String,
    /// Prompt handed to the asset renderer
    pub generation_prompt: String,
    /// Voice-over narration for the scene
    pub voiceover_script: String,
    /// Ordered dialog, when the scene has any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dialog: Option<Vec<DialogLine>>,
    /// Reference to a previously rendered asset, kept for reload
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_ref: Option<String>,
}

impl Scene {
    /// Create a scene with no dialog and no cached asset.
    pub fn new(
        scene_number: u32,
        narrative_line: impl Into<String>,
        generation_prompt: impl Into<String>,
        voiceover_script: impl Into<String>,
    ) -> Self {
        Self {
            scene_number,
            narrative_line: narrative_line.into(),
            generation_prompt: generation_prompt.into(),
            voiceover_script: voiceover_script.into(),
            dialog: None,
            asset_ref: None,
        }
    }

    /// Attach dialog lines.
    pub fn with_dialog(mut self, dialog: Vec<DialogLine>) -> Self {
        self.dialog = Some(dialog);
        self
    }
}
