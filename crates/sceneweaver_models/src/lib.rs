//! Generative service clients for Sceneweaver.
//!
//! - [`GeminiSceneGenerator`] implements [`SceneGenerator`](sceneweaver_interface::SceneGenerator)
//!   against the Gemini `generateContent` endpoint with a structured JSON response schema.
//! - [`ImagenAssetDriver`] implements [`AssetDriver`](sceneweaver_interface::AssetDriver)
//!   against the Imagen `predict` endpoint and returns data URIs.
//!
//! # Example
//!
//! ```no_run
//! use sceneweaver_models::GeminiSceneGenerator;
//! use sceneweaver_rate_limit::SceneweaverConfig;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = SceneweaverConfig::load()?;
//! let generator = GeminiSceneGenerator::new(std::env::var("GEMINI_API_KEY")?, config.generation)?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod gemini;
mod http;

pub use gemini::{GeminiSceneGenerator, ImagenAssetDriver};
