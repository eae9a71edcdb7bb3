//! Progress reporting for batch execution.

use sceneweaver_core::Scene;

/// Snapshot published after every successful batch.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductionProgress {
    /// Batches finished so far
    pub completed_batches: usize,
    /// Batches planned in total
    pub total_batches: usize,
    /// Scenes assembled so far, ascending
    pub scenes: Vec<Scene>,
}

impl ProductionProgress {
    /// `completed_batches / total_batches`, or 1.0 when nothing was planned.
    pub fn fraction(&self) -> f64 {
        if self.total_batches == 0 {
            1.0
        } else {
            self.completed_batches as f64 / self.total_batches as f64
        }
    }
}

/// Receives incremental progress while a production runs.
pub trait ProductionObserver: Send + Sync {
    /// Called after each successful batch with the scenes assembled so far.
    fn on_progress(&self, progress: &ProductionProgress);
}

impl<F> ProductionObserver for F
where
    F: Fn(&ProductionProgress) + Send + Sync,
{
    fn on_progress(&self, progress: &ProductionProgress) {
        self(progress)
    }
}

/// Observer that ignores all progress.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl ProductionObserver for NoopObserver {
    fn on_progress(&self, _progress: &ProductionProgress) {}
}
