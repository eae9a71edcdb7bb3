//! Host-facing production session.

use crate::AssetRenderer;
use sceneweaver_core::Production;
use sceneweaver_error::SceneweaverResult;
use sceneweaver_interface::{
    AssetDriver, HostResponse, HostSignal, LoadedProduction, ProductionPayload, ProductionStore,
};

/// One tool panel's current production plus its persistence.
///
/// The session answers [`HostSignal`]s from a host UI: saves go to the
/// injected [`ProductionStore`] with cached asset references stamped in, and
/// loads replace the current production and reset the renderer's states.
/// Signals addressed to another tool are ignored.
pub struct ProductionSession<S: ProductionStore, A: AssetDriver> {
    tool_tag: String,
    store: S,
    renderer: AssetRenderer<A>,
    production: Option<Production>,
}

impl<S: ProductionStore, A: AssetDriver> ProductionSession<S, A> {
    /// Create an empty session for `tool_tag`.
    pub fn new(tool_tag: impl Into<String>, store: S, renderer: AssetRenderer<A>) -> Self {
        Self {
            tool_tag: tool_tag.into(),
            store,
            renderer,
            production: None,
        }
    }

    /// Tag this session saves and loads under.
    pub fn tool_tag(&self) -> &str {
        &self.tool_tag
    }

    /// The current production, if any.
    pub fn production(&self) -> Option<&Production> {
        self.production.as_ref()
    }

    /// The session's renderer.
    pub fn renderer(&self) -> &AssetRenderer<A> {
        &self.renderer
    }

    /// The injected store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Replace the current production and reset render states from it.
    pub fn set_production(&mut self, production: Production) {
        self.renderer.restore(&production);
        self.production = Some(production);
    }

    /// Save the current production with its rendered assets.
    ///
    /// Returns `None` when there is nothing to save.
    ///
    /// # Errors
    ///
    /// Returns the store's error if the save fails.
    #[tracing::instrument(skip(self), fields(tool_tag = %self.tool_tag))]
    pub async fn save(&self) -> SceneweaverResult<Option<String>> {
        let Some(production) = &self.production else {
            tracing::debug!("Nothing to save");
            return Ok(None);
        };

        let mut snapshot = production.clone();
        self.renderer.apply_to(&mut snapshot).await;
        let id = self.store.save(&snapshot, &self.tool_tag).await?;
        Ok(Some(id))
    }

    /// Load a history record by id into the session.
    ///
    /// # Errors
    ///
    /// Returns the store's error if the record is missing or corrupt.
    #[tracing::instrument(skip(self), fields(tool_tag = %self.tool_tag))]
    pub async fn load_record(&mut self, record_id: &str) -> SceneweaverResult<usize> {
        let loaded = self.store.load(record_id).await?;
        Ok(self.install(loaded))
    }

    fn install(&mut self, loaded: LoadedProduction) -> usize {
        let scene_count = loaded.production.scenes.len();
        self.renderer.set_aspect_ratio(loaded.request.aspect_ratio);
        self.renderer.replace_states(loaded.render_states);
        self.production = Some(loaded.production);
        scene_count
    }

    /// Handle one signal from the host.
    ///
    /// # Errors
    ///
    /// Returns an error if saving fails or a load payload cannot be decoded.
    #[tracing::instrument(skip(self, signal), fields(tool_tag = %self.tool_tag))]
    pub async fn handle(&mut self, signal: HostSignal) -> SceneweaverResult<HostResponse> {
        match signal {
            HostSignal::RequestSave { tool_tag } if tool_tag == self.tool_tag => {
                Ok(match self.save().await? {
                    Some(id) => HostResponse::Saved(id),
                    None => HostResponse::Ignored,
                })
            }
            HostSignal::Load { tool_tag, payload } if tool_tag == self.tool_tag => {
                let payload = ProductionPayload::from_value(payload)?;
                let scene_count = self.install(LoadedProduction::from_payload(payload));
                tracing::info!(scene_count, "Loaded production from host");
                Ok(HostResponse::Loaded { scene_count })
            }
            other => {
                tracing::debug!(?other, "Signal addressed to another tool");
                Ok(HostResponse::Ignored)
            }
        }
    }
}
