//! Sceneweaver - batched, context-chained scene production.
//!
//! Turns a synopsis, a visual style and a character roster into a long,
//! consistently numbered sequence of scenes, each with a generation prompt
//! and a voice-over script. The generative service only accepts a bounded
//! number of scenes per call, so the range is split into batches that run
//! in order, each continuing from the last scene of the one before.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use sceneweaver::{
//!     BatchExecutor, Character, GeminiSceneGenerator, ProductionRequest, QualityMode,
//!     SceneRange, SceneweaverConfig,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = SceneweaverConfig::load()?;
//!     let generator = GeminiSceneGenerator::new(std::env::var("GEMINI_API_KEY")?, config.generation)?;
//!
//!     let request = ProductionRequest::builder()
//!         .synopsis("A lighthouse keeper befriends a storm")
//!         .visual_style("Moody watercolor, 16:9")
//!         .character_roster(vec![Character::new("Mira", "female", "34", "Red scarf")])
//!         .scene_range(SceneRange::new(1, 25))
//!         .quality_mode(QualityMode::Thorough)
//!         .build()?;
//!
//!     let run = BatchExecutor::new(generator).produce(&request).await?;
//!     println!("{}", run.production.script_text());
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - `sceneweaver_error` - Error types
//! - `sceneweaver_core` - Requests, scenes and productions
//! - `sceneweaver_interface` - Generator, asset driver and store traits
//! - `sceneweaver_rate_limit` - Configuration and render pacing
//! - `sceneweaver_models` - Gemini and Imagen clients
//! - `sceneweaver_storage` - Production history
//! - `sceneweaver_pipeline` - Planning, batch execution, assembly and rendering
//!
//! This crate re-exports everything for convenience.
//!
//! # Cargo Features
//!
//! - `observability` - OpenTelemetry span export (see [`observability`])

pub use sceneweaver_core::*;
pub use sceneweaver_error::*;
pub use sceneweaver_interface::*;
pub use sceneweaver_models::{GeminiSceneGenerator, ImagenAssetDriver};
pub use sceneweaver_pipeline::*;
pub use sceneweaver_rate_limit::*;
pub use sceneweaver_storage::{InMemoryProductionStore, JsonFileProductionStore};

#[cfg(feature = "observability")]
pub mod observability;
