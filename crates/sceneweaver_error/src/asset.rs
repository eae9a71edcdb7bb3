//! Asset render error types.

/// Ways a single scene render can fail.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum AssetRenderErrorKind {
    /// Network or service failure
    #[display("transport failure: {}", _0)]
    Transport(String),
    /// The service answered without an asset
    #[display("render returned no asset")]
    EmptyResult,
    /// No scene with this number exists in the production
    #[display("unknown scene {}", _0)]
    UnknownScene(u32),
}

/// Asset render error for one scene.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display(
    "Asset Render Error: {} for scene {} at line {} in {}",
    kind,
    scene_number,
    line,
    file
)]
pub struct AssetRenderError {
    /// The specific failure
    pub kind: AssetRenderErrorKind,
    /// Scene whose render failed
    pub scene_number: u32,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl AssetRenderError {
    /// Create a new AssetRenderError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: AssetRenderErrorKind, scene_number: u32) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            scene_number,
            line: location.line(),
            file: location.file(),
        }
    }
}
