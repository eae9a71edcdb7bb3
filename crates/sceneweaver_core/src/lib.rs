//! Core data types for the Sceneweaver scene production pipeline.
//!
//! This crate provides the data model shared by the planner, executor,
//! assembler, renderer and store: requests, batches, scenes, productions
//! and per-scene render state.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod batch;
mod character;
mod production;
mod render;
mod request;
mod scene;

pub use batch::Batch;
pub use character::Character;
pub use production::{Production, ProductionStatus};
pub use render::AssetRenderState;
pub use request::{
    AspectRatio, ProductionRequest, ProductionRequestBuilder, ProductionRequestBuilderError,
    QualityMode, SceneRange,
};
pub use scene::{DialogLine, Scene};
