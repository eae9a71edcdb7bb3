//! Trait definitions for the external generative service.

use crate::{GenerationCall, RenderCall};
use async_trait::async_trait;
use sceneweaver_error::SceneweaverResult;

/// The structured scene generation capability.
///
/// Implementations send one context prompt and return the service's raw
/// text answer. Schema validation, count checks and renumbering are the
/// caller's job, so implementations must not reshape the payload.
#[async_trait]
pub trait SceneGenerator: Send + Sync {
    /// Issue one generation call and return the raw response text.
    async fn generate(&self, call: &GenerationCall) -> SceneweaverResult<String>;

    /// Provider name (e.g., "gemini").
    fn provider_name(&self) -> &'static str;

    /// Model identifier.
    fn model_name(&self) -> &str;
}

/// The asset render capability.
///
/// Returns an opaque asset reference such as a data URI or URL.
#[async_trait]
pub trait AssetDriver: Send + Sync {
    /// Render one prompt into an asset reference.
    async fn render(&self, call: &RenderCall) -> SceneweaverResult<String>;

    /// Provider name (e.g., "imagen").
    fn provider_name(&self) -> &'static str;
}
