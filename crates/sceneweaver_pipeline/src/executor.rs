//! Sequential batch execution with continuity chaining.
//!
//! Batches run strictly in order because each batch's prompt carries the
//! last narrative line of the batch before it. Progress is published after
//! every successful batch, so a failure or cancellation still leaves a
//! usable partial production.

use crate::{
    CancellationFlag, assemble, build_context_prompt, compute_batches, parse_scene_drafts,
    plan_range, renumber_batch, validate_request,
};
use sceneweaver_core::{Batch, Production, ProductionRequest, ProductionStatus, Scene, SceneRange};
use sceneweaver_error::{BatchGenerationError, BatchGenerationErrorKind, SceneweaverResult};
use sceneweaver_interface::{
    GenerationCall, NoopObserver, ProductionObserver, ProductionProgress, SceneGenerator,
    scene_array_schema,
};
use std::sync::Arc;

/// Where a production run currently stands.
///
/// `Planned → Running → Done | Failed | Cancelled`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionState {
    /// Batches are computed; nothing has been sent
    Planned {
        /// Number of batches to run
        total_batches: usize,
    },
    /// A batch call is in flight
    Running {
        /// Zero-based position of the batch
        index: usize,
        /// The batch being generated
        batch: Batch,
    },
    /// Every batch succeeded
    Done,
    /// A batch failed and the remaining batches were skipped
    Failed {
        /// The batch that failed
        batch: Batch,
    },
    /// Cancellation stopped the run between batches
    Cancelled,
}

impl ExecutionState {
    /// Whether the run has stopped.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            ExecutionState::Done | ExecutionState::Failed { .. } | ExecutionState::Cancelled
        )
    }
}

/// Why a run ended before covering its range.
#[derive(Debug, Clone)]
pub enum Interruption {
    /// A batch call failed
    Failed(BatchGenerationError),
    /// Cancellation was requested
    Cancelled,
}

impl std::fmt::Display for Interruption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Interruption::Failed(err) => write!(f, "{}", err.kind),
            Interruption::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// Result of [`BatchExecutor::produce`] or [`BatchExecutor::resume`].
///
/// A `Partial` production always comes with an interruption that says why.
#[derive(Debug, Clone)]
pub struct ProductionRun {
    /// The assembled production, complete or partial
    pub production: Production,
    /// Final state of the run
    pub state: ExecutionState,
    /// Failure or cancellation that stopped the run
    pub interruption: Option<Interruption>,
}

impl ProductionRun {
    /// The batch error that stopped the run, if any.
    pub fn failure(&self) -> Option<&BatchGenerationError> {
        match &self.interruption {
            Some(Interruption::Failed(err)) => Some(err),
            _ => None,
        }
    }

    /// Whether the run was stopped by cancellation.
    pub fn was_cancelled(&self) -> bool {
        matches!(self.interruption, Some(Interruption::Cancelled))
    }
}

/// Runs generation batches one after another.
///
/// The executor owns a [`SceneGenerator`], an optional progress observer and
/// a [`CancellationFlag`] checked before each batch and again when a batch
/// returns.
pub struct BatchExecutor<G: SceneGenerator> {
    generator: G,
    observer: Arc<dyn ProductionObserver>,
    cancellation: CancellationFlag,
}

impl<G: SceneGenerator> BatchExecutor<G> {
    /// Create an executor with no observer and a fresh cancellation flag.
    pub fn new(generator: G) -> Self {
        Self {
            generator,
            observer: Arc::new(NoopObserver),
            cancellation: CancellationFlag::new(),
        }
    }

    /// Report progress to `observer` after every successful batch.
    pub fn with_observer(mut self, observer: impl ProductionObserver + 'static) -> Self {
        self.observer = Arc::new(observer);
        self
    }

    /// Share an existing cancellation flag.
    pub fn with_cancellation(mut self, cancellation: CancellationFlag) -> Self {
        self.cancellation = cancellation;
        self
    }

    /// The flag checked between batches.
    pub fn cancellation(&self) -> &CancellationFlag {
        &self.cancellation
    }

    /// The underlying generator.
    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// Produce every scene in the request's range, starting from batch 1.
    ///
    /// Batch failures and cancellation do not return `Err`: the run comes
    /// back `Partial` with the scenes of every batch that succeeded and an
    /// [`Interruption`] saying why it stopped.
    ///
    /// # Errors
    ///
    /// Returns a validation error before any call if the request is rejected,
    /// or an integrity error if the assembled numbering is broken.
    #[tracing::instrument(
        skip(self, request),
        fields(
            provider = self.generator.provider_name(),
            range = %request.scene_range,
            quality = %request.quality_mode,
        )
    )]
    pub async fn produce(&self, request: &ProductionRequest) -> SceneweaverResult<ProductionRun> {
        let batches = compute_batches(request)?;
        self.run(request, Vec::new(), batches).await
    }

    /// Continue a partial production from the scene after its last one.
    ///
    /// Only the remaining sub-range is planned. The first new batch is
    /// anchored on the production's last scene, and new scenes are appended
    /// to the existing ones. A production that already covers its range is
    /// returned as `Complete` without any call.
    ///
    /// # Errors
    ///
    /// Same as [`produce`](Self::produce); existing scenes are also checked
    /// for contiguity before anything is sent.
    #[tracing::instrument(
        skip(self, production),
        fields(
            provider = self.generator.provider_name(),
            range = %production.request.scene_range,
            existing = production.scenes.len(),
        )
    )]
    pub async fn resume(&self, production: &Production) -> SceneweaverResult<ProductionRun> {
        let request = &production.request;
        validate_request(request)?;
        let existing = assemble(
            request.scene_range,
            production.scenes.clone(),
            ProductionStatus::Partial,
        )?;

        let batches = match production.next_scene_number() {
            Some(next) => plan_range(
                SceneRange::new(next, request.scene_range.end),
                request.quality_mode,
            ),
            None => Vec::new(),
        };
        tracing::info!(remaining_batches = batches.len(), "Resuming production");
        self.run(request, existing, batches).await
    }

    async fn run(
        &self,
        request: &ProductionRequest,
        mut scenes: Vec<Scene>,
        batches: Vec<Batch>,
    ) -> SceneweaverResult<ProductionRun> {
        let total_batches = batches.len();
        let mut state = ExecutionState::Planned { total_batches };
        let mut interruption = None;
        tracing::debug!(?state, "Starting production run");

        for (index, batch) in batches.into_iter().enumerate() {
            if self.cancellation.is_cancelled() {
                tracing::info!(%batch, "Cancelled before batch");
                state = ExecutionState::Cancelled;
                interruption = Some(Interruption::Cancelled);
                break;
            }

            state = ExecutionState::Running { index, batch };
            let result = self.execute_batch(request, &batch, scenes.last()).await;

            if self.cancellation.is_cancelled() {
                tracing::info!(%batch, "Cancelled while batch was in flight, discarding result");
                state = ExecutionState::Cancelled;
                interruption = Some(Interruption::Cancelled);
                break;
            }

            match result {
                Ok(batch_scenes) => {
                    scenes.extend(batch_scenes);
                    let progress = ProductionProgress {
                        completed_batches: index + 1,
                        total_batches,
                        scenes: scenes.clone(),
                    };
                    tracing::info!(
                        %batch,
                        completed = progress.completed_batches,
                        total = total_batches,
                        "Batch complete"
                    );
                    self.observer.on_progress(&progress);
                }
                Err(err) => {
                    tracing::error!(%batch, error = %err, "Batch failed, skipping remaining batches");
                    state = ExecutionState::Failed { batch };
                    interruption = Some(Interruption::Failed(err));
                    break;
                }
            }
        }

        let status = if interruption.is_none() {
            state = ExecutionState::Done;
            ProductionStatus::Complete
        } else {
            ProductionStatus::Partial
        };

        let scenes = assemble(request.scene_range, scenes, status)?;
        tracing::info!(scenes = scenes.len(), %status, "Production run finished");

        Ok(ProductionRun {
            production: Production::new(request.clone(), scenes, status),
            state,
            interruption,
        })
    }

    #[tracing::instrument(
        skip(self, request, previous),
        fields(batch_start = batch.start, batch_end = batch.end, anchored = previous.is_some())
    )]
    async fn execute_batch(
        &self,
        request: &ProductionRequest,
        batch: &Batch,
        previous: Option<&Scene>,
    ) -> Result<Vec<Scene>, BatchGenerationError> {
        let call = GenerationCall {
            context_prompt: build_context_prompt(request, batch, previous),
            requested_count: batch.len(),
            response_schema: scene_array_schema(batch.len()),
            quality_mode: request.quality_mode,
        };

        let response = self.generator.generate(&call).await.map_err(|e| {
            BatchGenerationError::new(
                BatchGenerationErrorKind::Transport(e.to_string()),
                batch.start,
                batch.end,
            )
        })?;

        let drafts = parse_scene_drafts(&response, batch)?;
        renumber_batch(batch, drafts)
    }
}
