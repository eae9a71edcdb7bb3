//! Google Gemini and Imagen REST clients.

mod dto;
mod generator;
mod imagen;

pub use generator::GeminiSceneGenerator;
pub use imagen::ImagenAssetDriver;
