//! Production command handlers.

use super::commands::{ProduceArgs, ResumeArgs, RunOptions};
use super::history::format_production;
use super::roster::load_roster;
use sceneweaver::{
    AssetRenderer, BatchExecutor, CancellationFlag, ConfigError, GeminiSceneGenerator,
    ImagenAssetDriver, JsonFileProductionStore, Production, ProductionProgress, ProductionRequest,
    ProductionRun, ProductionStore, SceneRange, SceneweaverConfig, SceneweaverResult,
};

fn require_api_key(api_key: Option<&str>) -> SceneweaverResult<&str> {
    api_key.filter(|key| !key.trim().is_empty()).ok_or_else(|| {
        ConfigError::new("GEMINI_API_KEY is not set (use --api-key or a .env file)").into()
    })
}

/// Cancel `flag` on Ctrl-C; the batch or render in flight still finishes.
fn cancel_on_ctrl_c(flag: CancellationFlag) {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            eprintln!("Stopping after the current call...");
            flag.cancel();
        }
    });
}

fn report_progress(progress: &ProductionProgress) {
    eprintln!(
        "[{}/{}] {} scenes ({:.0}%)",
        progress.completed_batches,
        progress.total_batches,
        progress.scenes.len(),
        progress.fraction() * 100.0
    );
}

/// Generate a new production from command-line arguments.
#[tracing::instrument(skip_all, fields(range_start = args.start, range_end = args.end))]
pub async fn produce(
    config: &SceneweaverConfig,
    api_key: Option<&str>,
    args: ProduceArgs,
) -> SceneweaverResult<()> {
    let api_key = require_api_key(api_key)?;
    let aspect_ratio = match args.aspect_ratio {
        Some(ratio) => ratio,
        None => config.render.aspect_ratio()?,
    };

    let request = ProductionRequest::builder()
        .synopsis(args.topic)
        .visual_style(args.style)
        .character_roster(load_roster(&args.characters)?)
        .scene_range(SceneRange::new(args.start, args.end))
        .quality_mode(args.quality)
        .aspect_ratio(aspect_ratio)
        .build()
        .map_err(|e| ConfigError::new(format!("Invalid request: {}", e)))?;

    let cancellation = CancellationFlag::new();
    cancel_on_ctrl_c(cancellation.clone());

    let generator = GeminiSceneGenerator::new(api_key, config.generation.clone())?;
    let executor = BatchExecutor::new(generator)
        .with_observer(report_progress)
        .with_cancellation(cancellation.clone());

    let run = executor.produce(&request).await?;
    finish(config, api_key, run, &args.run, cancellation).await
}

/// Continue a partial production from history.
#[tracing::instrument(skip_all, fields(id = %args.id))]
pub async fn resume(
    config: &SceneweaverConfig,
    api_key: Option<&str>,
    args: ResumeArgs,
) -> SceneweaverResult<()> {
    let api_key = require_api_key(api_key)?;
    let store = JsonFileProductionStore::from_config(&config.store)?;
    let loaded = store.load(&args.id).await?;

    if loaded.production.is_complete() {
        eprintln!("Production {} is already complete", args.id);
    }

    let cancellation = CancellationFlag::new();
    cancel_on_ctrl_c(cancellation.clone());

    let generator = GeminiSceneGenerator::new(api_key, config.generation.clone())?;
    let executor = BatchExecutor::new(generator)
        .with_observer(report_progress)
        .with_cancellation(cancellation.clone());

    let run = executor.resume(&loaded.production).await?;
    finish(config, api_key, run, &args.run, cancellation).await
}

async fn finish(
    config: &SceneweaverConfig,
    api_key: &str,
    run: ProductionRun,
    options: &RunOptions,
    cancellation: CancellationFlag,
) -> SceneweaverResult<()> {
    if let Some(interruption) = &run.interruption {
        tracing::warn!(%interruption, "Production stopped early");
        eprintln!(
            "Production is partial ({} of {} scenes): {}",
            run.production.scenes.len(),
            run.production.request.scene_range.len(),
            interruption
        );
    }

    let mut production = run.production;
    if options.render && !cancellation.is_cancelled() {
        render_assets(config, api_key, &mut production, cancellation).await?;
    }

    println!("{}", format_production(&production, options.format)?);

    if options.save {
        let store = JsonFileProductionStore::from_config(&config.store)?;
        let id = store.save(&production, &options.tool).await?;
        eprintln!("Saved as {}", id);
    }
    Ok(())
}

async fn render_assets(
    config: &SceneweaverConfig,
    api_key: &str,
    production: &mut Production,
    cancellation: CancellationFlag,
) -> SceneweaverResult<()> {
    let driver = ImagenAssetDriver::new(api_key, config.render.clone())?;
    let renderer = AssetRenderer::from_production(driver, production)
        .with_delay(config.render.courtesy_delay())
        .with_cancellation(cancellation);

    let summary = renderer.render_all(production).await;
    eprintln!(
        "Rendered {} scenes, {} failed, {} already rendered",
        summary.rendered, summary.failed, summary.skipped
    );
    for (scene_number, state) in renderer.states().await {
        if let sceneweaver::AssetRenderState::Failed(reason) = state {
            eprintln!("  scene {}: {}", scene_number, reason);
        }
    }

    renderer.apply_to(production).await;
    Ok(())
}
