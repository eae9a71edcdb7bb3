//! Productions: the ordered scenes produced for one request.

use crate::{ProductionRequest, Scene};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

/// Whether every requested scene was produced.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ProductionStatus {
    /// All scenes in the requested range are present
    Complete,
    /// Production stopped early; only a prefix of the range is present
    Partial,
}

/// The ordered scenes produced for one request.
///
/// Scenes are ordered ascending by `scene_number`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Production {
    /// The request this production answers
    pub request: ProductionRequest,
    /// Scenes, ascending by number
    pub scenes: Vec<Scene>,
    /// Completion status
    pub status: ProductionStatus,
    /// When the production was created
    pub created_at: DateTime<Utc>,
}

impl Production {
    /// Create a production stamped with the current time.
    pub fn new(request: ProductionRequest, scenes: Vec<Scene>, status: ProductionStatus) -> Self {
        Self {
            request,
            scenes,
            status,
            created_at: Utc::now(),
        }
    }

    /// Whether every requested scene is present.
    pub fn is_complete(&self) -> bool {
        self.status == ProductionStatus::Complete
    }

    /// The highest-numbered scene produced so far.
    pub fn last_scene(&self) -> Option<&Scene> {
        self.scenes.last()
    }

    /// Look up a scene by number.
    pub fn scene(&self, scene_number: u32) -> Option<&Scene> {
        self.scenes.iter().find(|s| s.scene_number == scene_number)
    }

    /// First scene number not yet produced, or `None` when the range is covered.
    pub fn next_scene_number(&self) -> Option<u32> {
        let range = self.request.scene_range;
        let next = match self.last_scene() {
            Some(s) => s.scene_number.checked_add(1)?,
            None => range.start,
        };
        (next <= range.end).then_some(next)
    }

    /// Numbered voice-over script with dialog, for copying out.
    pub fn script_text(&self) -> String {
        let mut out = String::new();
        for scene in &self.scenes {
            let _ = writeln!(out, "Scene {}", scene.scene_number);
            let _ = writeln!(out, "{}", scene.narrative_line);
            let _ = writeln!(out, "VO: {}", scene.voiceover_script);
            if let Some(dialog) = &scene.dialog {
                for line in dialog {
                    let _ = writeln!(out, "  {}: {}", line.character, line.line);
                }
            }
            out.push('\n');
        }
        out.trim_end().to_string()
    }

    /// One generation prompt per line, in scene order.
    pub fn prompt_list(&self) -> String {
        self.scenes
            .iter()
            .map(|s| s.generation_prompt.replace('\n', " "))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
