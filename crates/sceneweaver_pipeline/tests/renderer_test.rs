mod common;

use common::GatedDriver;
use sceneweaver_core::{AspectRatio, AssetRenderState, Production, ProductionStatus, QualityMode, Scene};
use sceneweaver_error::AssetRenderErrorKind;
use sceneweaver_pipeline::{AssetRenderer, CancellationFlag};
use sceneweaver_rate_limit::CourtesyDelay;
use std::time::Duration;

fn scene(n: u32) -> Scene {
    Scene::new(n, format!("Narrative {}", n), format!("prompt {}", n), format!("vo {}", n))
}

fn production(count: u32) -> Production {
    Production::new(
        common::request(1, count, QualityMode::Fast),
        (1..=count).map(scene).collect(),
        ProductionStatus::Complete,
    )
}

async fn wait_until<A: sceneweaver_interface::AssetDriver>(
    renderer: &AssetRenderer<A>,
    scene_number: u32,
    check: impl Fn(&AssetRenderState) -> bool,
) {
    while !check(&renderer.state(scene_number).await) {
        tokio::task::yield_now().await;
    }
}

#[tokio::test]
async fn test_render_success_and_failure() {
    let driver = GatedDriver::new();
    let fail = driver.gate("prompt 2");
    let renderer = AssetRenderer::new(driver, AspectRatio::Portrait);
    fail.send(Err("quota exceeded".to_string())).unwrap();

    assert!(renderer.render(&scene(1)).await.is_rendered());
    match renderer.render(&scene(2)).await {
        AssetRenderState::Failed(reason) => assert!(reason.contains("quota exceeded")),
        other => panic!("expected failure, got {:?}", other),
    }
    assert!(renderer.state(1).await.is_rendered());
    assert_eq!(renderer.state(3).await, AssetRenderState::NotStarted);
}

#[tokio::test]
async fn test_concurrent_renders_are_independent() {
    let driver = GatedDriver::new();
    let gate3 = driver.gate("prompt 3");
    let gate5 = driver.gate("prompt 5");
    let renderer = AssetRenderer::new(driver, AspectRatio::Landscape);
    let (s3, s5) = (scene(3), scene(5));

    let (r3, r5, ()) = tokio::join!(renderer.render(&s3), renderer.render(&s5), async {
        wait_until(&renderer, 3, AssetRenderState::is_rendering).await;
        wait_until(&renderer, 5, AssetRenderState::is_rendering).await;

        gate5.send(Ok("asset-5".to_string())).unwrap();
        wait_until(&renderer, 5, AssetRenderState::is_rendered).await;
        assert!(renderer.state(3).await.is_rendering());

        gate3.send(Err("timeout".to_string())).unwrap();
    });

    assert_eq!(r5, AssetRenderState::Rendered("asset-5".to_string()));
    assert!(matches!(r3, AssetRenderState::Failed(_)));
    assert_eq!(renderer.state(5).await.asset_ref(), Some("asset-5"));
}

#[tokio::test]
async fn test_render_while_rendering_is_ignored() {
    let driver = GatedDriver::new();
    let gate = driver.gate("prompt 4");
    let renderer = AssetRenderer::new(driver, AspectRatio::Square);
    let s4 = scene(4);

    let (first, second) = tokio::join!(renderer.render(&s4), async {
        wait_until(&renderer, 4, AssetRenderState::is_rendering).await;
        let second = renderer.render(&s4).await;
        gate.send(Ok("asset-4".to_string())).unwrap();
        second
    });

    assert_eq!(second, AssetRenderState::Rendering);
    assert_eq!(first, AssetRenderState::Rendered("asset-4".to_string()));
    assert_eq!(renderer.driver().render_count(), 1);
}

#[tokio::test]
async fn test_rerender_replaces_asset() {
    let renderer = AssetRenderer::new(GatedDriver::new(), AspectRatio::Landscape);
    let s1 = scene(1);

    let first = renderer.render(&s1).await;
    let second = renderer.render(&s1).await;

    assert_ne!(first.asset_ref(), second.asset_ref());
    assert_eq!(renderer.state(1).await, second);
    assert_eq!(renderer.states().await.len(), 1);
}

#[tokio::test]
async fn test_render_unknown_scene() {
    let renderer = AssetRenderer::new(GatedDriver::new(), AspectRatio::Landscape);
    let err = renderer.render_scene(&production(3), 9).await.unwrap_err();
    assert_eq!(err.kind, AssetRenderErrorKind::UnknownScene(9));
    assert_eq!(renderer.driver().render_count(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_render_all_skips_rendered_and_paces_calls() {
    let prod = production(4);
    let renderer = AssetRenderer::new(GatedDriver::new(), AspectRatio::Landscape)
        .with_delay(CourtesyDelay::from_millis(1500));
    renderer.render(&prod.scenes[1]).await;

    let before = tokio::time::Instant::now();
    let summary = renderer.render_all(&prod).await;

    assert_eq!(summary.rendered, 3);
    assert_eq!(summary.skipped, 1);
    assert!(!summary.cancelled);
    assert_eq!(before.elapsed(), Duration::from_millis(3000));
    assert_eq!(
        renderer.driver().prompts(),
        vec!["prompt 2", "prompt 1", "prompt 3", "prompt 4"]
    );
}

#[tokio::test]
async fn test_render_all_stops_on_cancel() {
    let prod = production(5);
    let flag = CancellationFlag::new();
    let driver = GatedDriver::new();
    let gate = driver.gate("prompt 2");
    let renderer = AssetRenderer::new(driver, AspectRatio::Landscape).with_cancellation(flag.clone());

    let (summary, ()) = tokio::join!(renderer.render_all(&prod), async {
        wait_until(&renderer, 2, AssetRenderState::is_rendering).await;
        flag.cancel();
        gate.send(Ok("asset-2".to_string())).unwrap();
    });

    assert!(summary.cancelled);
    assert_eq!(summary.rendered, 2);
    assert!(renderer.state(2).await.is_rendered());
    assert_eq!(renderer.state(3).await, AssetRenderState::NotStarted);
}

#[tokio::test]
async fn test_assets_round_trip_through_production() {
    let mut prod = production(3);
    let renderer = AssetRenderer::new(GatedDriver::new(), AspectRatio::Landscape);
    renderer.render(&prod.scenes[0]).await;
    renderer.render(&prod.scenes[2]).await;
    renderer.apply_to(&mut prod).await;

    assert!(prod.scenes[0].asset_ref.is_some());
    assert!(prod.scenes[1].asset_ref.is_none());

    let restored = AssetRenderer::from_production(GatedDriver::new(), &prod);
    assert!(restored.state(1).await.is_rendered());
    assert_eq!(restored.state(2).await, AssetRenderState::NotStarted);
    assert_eq!(restored.state(3).await.asset_ref(), prod.scenes[2].asset_ref.as_deref());
}
