#![cfg(feature = "api")]

// Tests against the live Gemini API. Run with `--features api` and GEMINI_API_KEY set.

use sceneweaver_core::{AspectRatio, QualityMode};
use sceneweaver_interface::{
    AssetDriver, GenerationCall, RenderCall, SceneDraft, SceneGenerator, scene_array_schema,
};
use sceneweaver_models::{GeminiSceneGenerator, ImagenAssetDriver};
use sceneweaver_rate_limit::SceneweaverConfig;

#[tokio::test]
async fn test_generate_two_scenes() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let api_key = std::env::var("GEMINI_API_KEY")?;
    let config = SceneweaverConfig::load()?;
    let generator = GeminiSceneGenerator::new(api_key, config.generation)?;

    let call = GenerationCall {
        context_prompt: "Write exactly 2 scenes numbered 1 to 2 about a cat learning to fish.".to_string(),
        requested_count: 2,
        response_schema: scene_array_schema(2),
        quality_mode: QualityMode::Fast,
    };

    let text = generator.generate(&call).await?;
    let drafts: Vec<SceneDraft> = serde_json::from_str(&text)?;
    assert_eq!(drafts.len(), 2);
    Ok(())
}

#[tokio::test]
async fn test_render_returns_data_uri() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let api_key = std::env::var("GEMINI_API_KEY")?;
    let config = SceneweaverConfig::load()?;
    let driver = ImagenAssetDriver::new(api_key, config.render)?;

    let asset = driver
        .render(&RenderCall {
            prompt: "A watercolor lighthouse at dusk".to_string(),
            aspect_ratio: AspectRatio::Landscape,
        })
        .await?;
    assert!(asset.starts_with("data:image/"));
    Ok(())
}
