use sceneweaver_core::{
    AssetRenderState, Character, Production, ProductionRequest, ProductionStatus, Scene, SceneRange,
};
use sceneweaver_interface::ProductionStore;
use sceneweaver_storage::{InMemoryProductionStore, JsonFileProductionStore};

fn production(synopsis: &str) -> Production {
    let request = ProductionRequest::builder()
        .synopsis(synopsis)
        .visual_style("Ink wash")
        .character_roster(vec![Character::new("Kai", "male", "9", "Yellow raincoat")])
        .scene_range(SceneRange::new(1, 3))
        .build()
        .unwrap();
    let mut scenes: Vec<Scene> = (1..=3)
        .map(|n| Scene::new(n, format!("n{}", n), format!("p{}", n), format!("v{}", n)))
        .collect();
    scenes[1].asset_ref = Some("data:image/png;base64,AAAA".to_string());
    Production::new(request, scenes, ProductionStatus::Complete)
}

async fn exercise_store(store: &impl ProductionStore) -> anyhow::Result<()> {
    let first = store.save(&production("First story"), "storyboard").await?;
    let other = store.save(&production("Thumbnail set"), "thumbnails").await?;
    let second = store.save(&production("Second story"), "storyboard").await?;

    let records = store.list("storyboard").await?;
    let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec![second.as_str(), first.as_str()], "newest first");
    assert_eq!(records[0].title, "Second story");
    assert!(records[0].timestamp >= records[1].timestamp);

    let thumbs = store.list("thumbnails").await?;
    assert_eq!(thumbs.len(), 1);
    assert_eq!(thumbs[0].id, other);
    assert!(store.list("unknown").await?.is_empty());

    let loaded = store.load(&first).await?;
    assert_eq!(loaded.request.synopsis, "First story");
    assert_eq!(loaded.production.scenes.len(), 3);
    assert_eq!(loaded.render_states[&1], AssetRenderState::NotStarted);
    assert!(loaded.render_states[&2].is_rendered());

    assert!(store.load("missing").await.is_err());
    Ok(())
}

#[tokio::test]
async fn test_in_memory_store() -> anyhow::Result<()> {
    exercise_store(&InMemoryProductionStore::new()).await
}

#[tokio::test]
async fn test_json_file_store() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let store = JsonFileProductionStore::new(dir.path().join("history"), "sceneweaver_history")?;
    exercise_store(&store).await?;

    assert!(store.path().ends_with("sceneweaver_history.json"));
    assert!(!store.path().with_extension("json.tmp").exists());
    Ok(())
}

#[tokio::test]
async fn test_json_file_store_persists_across_instances() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let id = {
        let store = JsonFileProductionStore::new(dir.path(), "history")?;
        store.save(&production("Persistent"), "storyboard").await?
    };

    let reopened = JsonFileProductionStore::new(dir.path(), "history")?;
    let records = reopened.list("storyboard").await?;
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, id);
    assert_eq!(reopened.load(&id).await?.production.request.synopsis, "Persistent");
    Ok(())
}

#[tokio::test]
async fn test_missing_file_is_empty_history() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let store = JsonFileProductionStore::new(dir.path(), "fresh")?;
    assert!(store.list("storyboard").await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_corrupt_file_is_reported() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    std::fs::write(dir.path().join("broken.json"), b"{ not json")?;
    let store = JsonFileProductionStore::new(dir.path(), "broken")?;
    assert!(store.list("storyboard").await.is_err());
    Ok(())
}
