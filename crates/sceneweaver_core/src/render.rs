//! Per-scene asset render state.

/// Render state of a single scene's asset.
///
/// Transitions: `NotStarted → Rendering → Rendered | Failed`. Re-rendering a
/// `Rendered` or `Failed` scene goes back through `Rendering`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum AssetRenderState {
    /// No render has been requested
    #[default]
    NotStarted,
    /// A render call is in flight
    Rendering,
    /// Render succeeded with this asset reference
    Rendered(String),
    /// Render failed with this reason
    Failed(String),
}

impl AssetRenderState {
    /// Whether the scene holds a finished asset.
    pub fn is_rendered(&self) -> bool {
        matches!(self, AssetRenderState::Rendered(_))
    }

    /// Whether a render is in flight.
    pub fn is_rendering(&self) -> bool {
        matches!(self, AssetRenderState::Rendering)
    }

    /// The asset reference, if rendered.
    pub fn asset_ref(&self) -> Option<&str> {
        match self {
            AssetRenderState::Rendered(asset_ref) => Some(asset_ref),
            _ => None,
        }
    }
}
