//! Production requests and their parameters.

use crate::Character;
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// Trade-off between per-call latency and narrative grounding.
///
/// `Fast` asks for larger batches with no extra reasoning; `Thorough` asks
/// for smaller batches and lets the service think before answering.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum QualityMode {
    /// Up to 20 scenes per call
    #[default]
    Fast,
    /// Up to 10 scenes per call
    Thorough,
}

impl QualityMode {
    /// Maximum number of scenes requested in one generation call.
    pub fn batch_size(&self) -> u32 {
        match self {
            QualityMode::Fast => 20,
            QualityMode::Thorough => 10,
        }
    }
}

/// Aspect ratio passed to the asset render call.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
)]
pub enum AspectRatio {
    /// 16:9 widescreen
    #[default]
    #[serde(rename = "16:9")]
    Landscape,
    /// 9:16 vertical video
    #[serde(rename = "9:16")]
    Portrait,
    /// 1:1
    #[serde(rename = "1:1")]
    Square,
    /// 4:3
    #[serde(rename = "4:3")]
    Classic,
    /// 3:4
    #[serde(rename = "3:4")]
    ClassicPortrait,
}

impl AspectRatio {
    /// Ratio as the service expects it, e.g. `"16:9"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            AspectRatio::Landscape => "16:9",
            AspectRatio::Portrait => "9:16",
            AspectRatio::Square => "1:1",
            AspectRatio::Classic => "4:3",
            AspectRatio::ClassicPortrait => "3:4",
        }
    }
}

impl std::fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for AspectRatio {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "16:9" => Ok(AspectRatio::Landscape),
            "9:16" => Ok(AspectRatio::Portrait),
            "1:1" => Ok(AspectRatio::Square),
            "4:3" => Ok(AspectRatio::Classic),
            "3:4" => Ok(AspectRatio::ClassicPortrait),
            other => Err(format!("Unknown aspect ratio: {}", other)),
        }
    }
}

/// Inclusive range of scene numbers to produce.
///
/// No validation happens here; the planner rejects empty ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SceneRange {
    /// First scene number
    pub start: u32,
    /// Last scene number (inclusive)
    pub end: u32,
}

impl SceneRange {
    /// Create a new range `start..=end`.
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Number of scenes in the range; zero when `end < start`.
    pub fn len(&self) -> usize {
        if self.end < self.start {
            0
        } else {
            (self.end - self.start) as usize + 1
        }
    }

    /// Whether the range contains no scenes.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether `scene_number` falls inside the range.
    pub fn contains(&self, scene_number: u32) -> bool {
        scene_number >= self.start && scene_number <= self.end
    }
}

impl std::fmt::Display for SceneRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// Everything needed to produce a sequence of scenes.
///
/// # Examples
///
/// ```
/// use sceneweaver_core::{Character, ProductionRequest, QualityMode, SceneRange};
///
/// let request = ProductionRequest::builder()
///     .synopsis("A lighthouse keeper finds a message in a bottle")
///     .visual_style("Moody watercolor, 16:9")
///     .character_roster(vec![Character::new("Mira", "female", "34", "Red scarf")])
///     .scene_range(SceneRange::new(1, 25))
///     .quality_mode(QualityMode::Thorough)
///     .build()
///     .unwrap();
///
/// assert_eq!(request.scene_range.len(), 25);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(setter(into))]
pub struct ProductionRequest {
    /// Topic or summary of the production
    pub synopsis: String,
    /// Visual style guidance, including any aspect-ratio constraint
    pub visual_style: String,
    /// Ordered character roster
    #[builder(default)]
    pub character_roster: Vec<Character>,
    /// Scene numbers to produce
    pub scene_range: SceneRange,
    /// Batch size and reasoning depth
    #[builder(default)]
    pub quality_mode: QualityMode,
    /// Aspect ratio for rendered assets
    #[builder(default)]
    #[serde(default)]
    pub aspect_ratio: AspectRatio,
}

impl ProductionRequest {
    /// Creates a new request builder.
    pub fn builder() -> ProductionRequestBuilder {
        ProductionRequestBuilder::default()
    }

    /// The roster block sent with every batch.
    ///
    /// Built once from the roster in order; every batch receives this exact text.
    pub fn roster_block(&self) -> String {
        self.character_roster
            .iter()
            .map(Character::roster_line)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Short title for history listings, taken from the synopsis.
    pub fn title(&self) -> String {
        const MAX_TITLE_CHARS: usize = 60;
        let synopsis = self.synopsis.trim();
        if synopsis.chars().count() <= MAX_TITLE_CHARS {
            synopsis.to_string()
        } else {
            let truncated: String = synopsis.chars().take(MAX_TITLE_CHARS).collect();
            format!("{}...", truncated.trim_end())
        }
    }
}
