//! On-demand, per-scene asset rendering.

use crate::CancellationFlag;
use sceneweaver_core::{AspectRatio, AssetRenderState, Production, Scene};
use sceneweaver_error::{AssetRenderError, AssetRenderErrorKind};
use sceneweaver_interface::{AssetDriver, LoadedProduction, RenderCall};
use sceneweaver_rate_limit::CourtesyDelay;
use std::collections::{BTreeMap, HashMap};
use tokio::sync::Mutex;

/// Outcome counts of a [`AssetRenderer::render_all`] pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderSummary {
    /// Scenes that ended `Rendered`
    pub rendered: usize,
    /// Scenes that ended `Failed`
    pub failed: usize,
    /// Scenes skipped because they were already rendered or in flight
    pub skipped: usize,
    /// Whether cancellation stopped the pass early
    pub cancelled: bool,
}

/// Renders scene assets independently of one another.
///
/// Each scene owns one [`AssetRenderState`] slot keyed by scene number. The
/// state lock is only held while a slot is read or written, never across a
/// render call, so renders for different scenes can be in flight together.
/// A render requested for a scene that is already `Rendering` is ignored.
pub struct AssetRenderer<A: AssetDriver> {
    driver: A,
    aspect_ratio: AspectRatio,
    delay: CourtesyDelay,
    cancellation: CancellationFlag,
    states: Mutex<HashMap<u32, AssetRenderState>>,
}

impl<A: AssetDriver> AssetRenderer<A> {
    /// Create a renderer with every scene `NotStarted`.
    pub fn new(driver: A, aspect_ratio: AspectRatio) -> Self {
        Self {
            driver,
            aspect_ratio,
            delay: CourtesyDelay::none(),
            cancellation: CancellationFlag::new(),
            states: Mutex::new(HashMap::new()),
        }
    }

    /// Create a renderer for a production, restoring cached assets as `Rendered`.
    pub fn from_production(driver: A, production: &Production) -> Self {
        let mut renderer = Self::new(driver, production.request.aspect_ratio);
        renderer.restore(production);
        renderer
    }

    /// Create a renderer for a production loaded from history.
    pub fn from_loaded(driver: A, loaded: &LoadedProduction) -> Self {
        let mut renderer = Self::new(driver, loaded.request.aspect_ratio);
        renderer.replace_states(loaded.render_states.clone());
        renderer
    }

    /// Pause between consecutive calls of a bulk pass.
    pub fn with_delay(mut self, delay: CourtesyDelay) -> Self {
        self.delay = delay;
        self
    }

    /// Share an existing cancellation flag with bulk passes.
    pub fn with_cancellation(mut self, cancellation: CancellationFlag) -> Self {
        self.cancellation = cancellation;
        self
    }

    /// The underlying driver.
    pub fn driver(&self) -> &A {
        &self.driver
    }

    /// The flag checked between bulk renders.
    pub fn cancellation(&self) -> &CancellationFlag {
        &self.cancellation
    }

    /// Aspect ratio passed with every render call.
    pub fn aspect_ratio(&self) -> AspectRatio {
        self.aspect_ratio
    }

    /// Change the aspect ratio of later render calls.
    pub fn set_aspect_ratio(&mut self, aspect_ratio: AspectRatio) {
        self.aspect_ratio = aspect_ratio;
    }

    /// Reset all states for `production`: cached assets become `Rendered`,
    /// everything else `NotStarted`.
    pub fn restore(&mut self, production: &Production) {
        self.set_aspect_ratio(production.request.aspect_ratio);
        let states: Vec<_> = production
            .scenes
            .iter()
            .filter_map(|scene| {
                scene
                    .asset_ref
                    .as_ref()
                    .map(|asset_ref| (scene.scene_number, AssetRenderState::Rendered(asset_ref.clone())))
            })
            .collect();
        self.replace_states(states);
    }

    /// Replace every state slot.
    pub fn replace_states(&mut self, states: impl IntoIterator<Item = (u32, AssetRenderState)>) {
        *self.states.get_mut() = states.into_iter().collect();
    }

    /// Current state of one scene.
    pub async fn state(&self, scene_number: u32) -> AssetRenderState {
        self.states
            .lock()
            .await
            .get(&scene_number)
            .cloned()
            .unwrap_or_default()
    }

    /// Snapshot of every scene that has left `NotStarted`, ascending.
    pub async fn states(&self) -> BTreeMap<u32, AssetRenderState> {
        self.states
            .lock()
            .await
            .iter()
            .map(|(number, state)| (*number, state.clone()))
            .collect()
    }

    /// Render one scene and return its new state.
    ///
    /// Moves the scene through `Rendering` to `Rendered` or `Failed`. A
    /// success replaces any previous asset reference. Failures stay in the
    /// scene's slot and are never returned as errors.
    #[tracing::instrument(skip(self, scene), fields(scene_number = scene.scene_number))]
    pub async fn render(&self, scene: &Scene) -> AssetRenderState {
        let scene_number = scene.scene_number;
        {
            let mut states = self.states.lock().await;
            let slot = states.entry(scene_number).or_default();
            if slot.is_rendering() {
                tracing::debug!("Render already in flight, ignoring request");
                return AssetRenderState::Rendering;
            }
            *slot = AssetRenderState::Rendering;
        }

        let call = RenderCall {
            prompt: scene.generation_prompt.clone(),
            aspect_ratio: self.aspect_ratio,
        };

        let next = match self.driver.render(&call).await {
            Ok(asset_ref) if !asset_ref.trim().is_empty() => {
                tracing::info!(provider = self.driver.provider_name(), "Scene rendered");
                AssetRenderState::Rendered(asset_ref)
            }
            Ok(_) => Self::failed(AssetRenderError::new(
                AssetRenderErrorKind::EmptyResult,
                scene_number,
            )),
            Err(e) => Self::failed(AssetRenderError::new(
                AssetRenderErrorKind::Transport(e.to_string()),
                scene_number,
            )),
        };

        self.states.lock().await.insert(scene_number, next.clone());
        next
    }

    fn failed(err: AssetRenderError) -> AssetRenderState {
        tracing::warn!(error = %err, "Scene render failed");
        AssetRenderState::Failed(err.kind.to_string())
    }

    /// Render a scene of `production` by number.
    ///
    /// # Errors
    ///
    /// Returns an [`AssetRenderError`] if the production has no such scene.
    pub async fn render_scene(
        &self,
        production: &Production,
        scene_number: u32,
    ) -> Result<AssetRenderState, AssetRenderError> {
        let scene = production.scene(scene_number).ok_or_else(|| {
            AssetRenderError::new(AssetRenderErrorKind::UnknownScene(scene_number), scene_number)
        })?;
        Ok(self.render(scene).await)
    }

    /// Render every scene that is not already rendered, in ascending order.
    ///
    /// Waits the courtesy delay between consecutive calls. Cancellation is
    /// checked before each render; the render in flight always finishes.
    #[tracing::instrument(skip(self, production), fields(scenes = production.scenes.len()))]
    pub async fn render_all(&self, production: &Production) -> RenderSummary {
        let mut scenes: Vec<&Scene> = production.scenes.iter().collect();
        scenes.sort_by_key(|scene| scene.scene_number);

        let mut summary = RenderSummary::default();
        let mut calls = 0usize;

        for scene in scenes {
            let current = self.state(scene.scene_number).await;
            if current.is_rendered() || current.is_rendering() {
                summary.skipped += 1;
                continue;
            }

            if self.cancellation.is_cancelled() {
                summary.cancelled = true;
                break;
            }
            self.delay.pause(calls).await;
            if self.cancellation.is_cancelled() {
                summary.cancelled = true;
                break;
            }

            calls += 1;
            match self.render(scene).await {
                AssetRenderState::Rendered(_) => summary.rendered += 1,
                AssetRenderState::Failed(_) => summary.failed += 1,
                _ => summary.skipped += 1,
            }
        }

        tracing::info!(
            rendered = summary.rendered,
            failed = summary.failed,
            skipped = summary.skipped,
            cancelled = summary.cancelled,
            "Bulk render finished"
        );
        summary
    }

    /// Write each scene's current asset reference into `production`.
    ///
    /// Scenes that are not `Rendered` lose any stale reference.
    pub async fn apply_to(&self, production: &mut Production) {
        let states = self.states.lock().await;
        for scene in &mut production.scenes {
            scene.asset_ref = states
                .get(&scene.scene_number)
                .and_then(AssetRenderState::asset_ref)
                .map(str::to_string);
        }
    }
}
