mod common;

use common::{EchoGenerator, GatedDriver, request};
use sceneweaver_core::{AspectRatio, AssetRenderState, QualityMode};
use sceneweaver_interface::{HostResponse, HostSignal, ProductionPayload, ProductionStore};
use sceneweaver_pipeline::{AssetRenderer, BatchExecutor, ProductionSession};
use sceneweaver_storage::InMemoryProductionStore;

#[tokio::test]
async fn test_save_and_reload_through_signals() -> anyhow::Result<()> {
    let executor = BatchExecutor::new(EchoGenerator::new());
    let run = executor.produce(&request(1, 4, QualityMode::Fast)).await?;

    let renderer = AssetRenderer::new(GatedDriver::new(), AspectRatio::Landscape);
    let mut session = ProductionSession::new("storyboard", InMemoryProductionStore::new(), renderer);
    session.set_production(run.production);
    let second = session.production().unwrap().scenes[1].clone();
    session.renderer().render(&second).await;

    let response = session
        .handle(HostSignal::RequestSave { tool_tag: "storyboard".to_string() })
        .await?;
    let id = match response {
        HostResponse::Saved(id) => id,
        other => panic!("expected a save, got {:?}", other),
    };

    let records = session.store().list("storyboard").await?;
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, id);
    assert_eq!(records[0].tool_tag, "storyboard");

    let mut other = ProductionSession::new(
        "storyboard",
        InMemoryProductionStore::new(),
        AssetRenderer::new(GatedDriver::new(), AspectRatio::Square),
    );
    let response = other
        .handle(HostSignal::Load {
            tool_tag: "storyboard".to_string(),
            payload: records[0].payload.clone(),
        })
        .await?;
    assert_eq!(response, HostResponse::Loaded { scene_count: 4 });
    assert!(other.renderer().state(2).await.is_rendered());
    assert_eq!(other.renderer().state(1).await, AssetRenderState::NotStarted);
    assert_eq!(other.renderer().aspect_ratio(), AspectRatio::Landscape);
    Ok(())
}

#[tokio::test]
async fn test_signals_for_other_tools_are_ignored() -> anyhow::Result<()> {
    let executor = BatchExecutor::new(EchoGenerator::new());
    let run = executor.produce(&request(1, 2, QualityMode::Fast)).await?;
    let payload = ProductionPayload::from_production(&run.production).to_value()?;

    let mut session = ProductionSession::new(
        "storyboard",
        InMemoryProductionStore::new(),
        AssetRenderer::new(GatedDriver::new(), AspectRatio::Landscape),
    );

    let save = session
        .handle(HostSignal::RequestSave { tool_tag: "storyboard".to_string() })
        .await?;
    assert_eq!(save, HostResponse::Ignored, "nothing to save yet");

    let load = session
        .handle(HostSignal::Load { tool_tag: "thumbnails".to_string(), payload })
        .await?;
    assert_eq!(load, HostResponse::Ignored);
    assert!(session.production().is_none());
    Ok(())
}

#[tokio::test]
async fn test_load_record_by_id() -> anyhow::Result<()> {
    let executor = BatchExecutor::new(EchoGenerator::new());
    let run = executor.produce(&request(1, 3, QualityMode::Fast)).await?;
    let store = InMemoryProductionStore::new();
    let id = store.save(&run.production, "storyboard").await?;

    let mut session = ProductionSession::new(
        "storyboard",
        store,
        AssetRenderer::new(GatedDriver::new(), AspectRatio::Square),
    );
    session.set_production(run.production.clone());
    let first = run.production.scenes[0].clone();
    assert!(session.renderer().render(&first).await.is_rendered());

    assert_eq!(session.load_record(&id).await?, 3);
    assert!(session.renderer().states().await.is_empty());
    assert_eq!(session.renderer().aspect_ratio(), AspectRatio::Landscape);
    assert_eq!(session.production().unwrap().scenes, run.production.scenes);
    Ok(())
}

#[tokio::test]
async fn test_corrupt_payload_is_an_error() {
    let mut session = ProductionSession::new(
        "storyboard",
        InMemoryProductionStore::new(),
        AssetRenderer::new(GatedDriver::new(), AspectRatio::Landscape),
    );
    let result = session
        .handle(HostSignal::Load {
            tool_tag: "storyboard".to_string(),
            payload: serde_json::json!({ "scenes": "nope" }),
        })
        .await;
    assert!(result.is_err());
}
