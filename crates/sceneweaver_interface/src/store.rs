//! Production history persistence contract.

use async_trait::async_trait;
use sceneweaver_core::{AssetRenderState, Production, ProductionRequest};
use sceneweaver_error::{JsonError, SceneweaverResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Serialized body of a history record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductionPayload {
    /// The request that was produced
    pub request: ProductionRequest,
    /// The production, including any cached asset references
    pub production: Production,
}

impl ProductionPayload {
    /// Wrap a production for storage.
    pub fn from_production(production: &Production) -> Self {
        Self {
            request: production.request.clone(),
            production: production.clone(),
        }
    }

    /// Encode as JSON.
    pub fn to_value(&self) -> SceneweaverResult<serde_json::Value> {
        serde_json::to_value(self)
            .map_err(|e| JsonError::new(format!("Failed to encode payload: {}", e)).into())
    }

    /// Decode from JSON.
    pub fn from_value(value: serde_json::Value) -> SceneweaverResult<Self> {
        serde_json::from_value(value)
            .map_err(|e| JsonError::new(format!("Failed to decode payload: {}", e)).into())
    }
}

/// One entry in the shared history list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryRecord {
    /// Unique record identifier
    pub id: String,
    /// Save time in epoch milliseconds
    pub timestamp: i64,
    /// Tool panel that saved the record
    pub tool_tag: String,
    /// Human-readable title
    pub title: String,
    /// Serialized [`ProductionPayload`]
    pub payload: serde_json::Value,
}

/// A production reconstituted from history.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedProduction {
    /// The original request
    pub request: ProductionRequest,
    /// The stored production
    pub production: Production,
    /// Render state per scene: `Rendered` when an asset was cached, else `NotStarted`
    pub render_states: BTreeMap<u32, AssetRenderState>,
}

impl LoadedProduction {
    /// Rebuild request, production and render states from a payload.
    pub fn from_payload(payload: ProductionPayload) -> Self {
        let render_states = payload
            .production
            .scenes
            .iter()
            .map(|scene| {
                let state = match &scene.asset_ref {
                    Some(asset_ref) => AssetRenderState::Rendered(asset_ref.clone()),
                    None => AssetRenderState::NotStarted,
                };
                (scene.scene_number, state)
            })
            .collect();

        Self {
            request: payload.request,
            production: payload.production,
            render_states,
        }
    }
}

/// Tool-scoped production history.
///
/// All tools share one ordered list, most recent first; each record carries
/// the tag of the tool that saved it.
#[async_trait]
pub trait ProductionStore: Send + Sync {
    /// Prepend a record for `production` and return its id.
    async fn save(&self, production: &Production, tool_tag: &str) -> SceneweaverResult<String>;

    /// Records saved under `tool_tag`, most recent first.
    async fn list(&self, tool_tag: &str) -> SceneweaverResult<Vec<HistoryRecord>>;

    /// Reconstitute the production stored under `record_id`.
    async fn load(&self, record_id: &str) -> SceneweaverResult<LoadedProduction>;
}
