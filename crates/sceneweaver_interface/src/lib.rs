//! Trait definitions for the Sceneweaver scene production pipeline.
//!
//! The pipeline talks to the outside world through three seams:
//!
//! - [`SceneGenerator`] - the structured scene generation call
//! - [`AssetDriver`] - the per-scene asset render call
//! - [`ProductionStore`] - tool-scoped production history
//!
//! Progress is reported through [`ProductionObserver`], and a host UI drives
//! persistence with [`HostSignal`]s instead of ambient events.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod host;
mod observer;
mod schema;
mod store;
mod traits;
mod types;

pub use host::{HostResponse, HostSignal};
pub use observer::{NoopObserver, ProductionObserver, ProductionProgress};
pub use schema::scene_array_schema;
pub use store::{HistoryRecord, LoadedProduction, ProductionPayload, ProductionStore};
pub use traits::{AssetDriver, SceneGenerator};
pub use types::{GenerationCall, RenderCall, SceneDraft};
