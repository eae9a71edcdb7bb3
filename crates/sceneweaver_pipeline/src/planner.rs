//! Request planning: splitting a scene range into batches.

use sceneweaver_core::{Batch, ProductionRequest, QualityMode, SceneRange};
use sceneweaver_error::{SceneweaverResult, ValidationError, ValidationErrorKind};
use tracing::debug;

/// Reject requests that cannot be produced.
///
/// # Errors
///
/// Returns a [`ValidationError`] when the range is inverted or starts at
/// zero, the synopsis is blank, or the roster is empty.
pub fn validate_request(request: &ProductionRequest) -> SceneweaverResult<()> {
    let range = request.scene_range;
    if range.end < range.start {
        return Err(ValidationError::new(ValidationErrorKind::EmptyRange {
            start: range.start,
            end: range.end,
        })
        .into());
    }
    if range.start == 0 {
        return Err(ValidationError::new(ValidationErrorKind::NonPositiveStart(range.start)).into());
    }
    if request.synopsis.trim().is_empty() {
        return Err(ValidationError::new(ValidationErrorKind::EmptySynopsis).into());
    }
    if request.character_roster.is_empty() {
        return Err(ValidationError::new(ValidationErrorKind::EmptyRoster).into());
    }
    Ok(())
}

/// Walk `range` in steps of the quality mode's batch size.
///
/// The last batch may be shorter. An inverted range yields no batches.
pub fn plan_range(range: SceneRange, quality_mode: QualityMode) -> Vec<Batch> {
    let size = quality_mode.batch_size();
    let mut batches = Vec::with_capacity(range.len().div_ceil(size as usize));
    let mut start = range.start;

    while start <= range.end {
        let end = start.saturating_add(size - 1).min(range.end);
        batches.push(Batch::new(start, end));
        match end.checked_add(1) {
            Some(next) => start = next,
            None => break,
        }
    }
    batches
}

/// Validate a request and split its scene range into batches.
///
/// # Errors
///
/// Returns a [`ValidationError`] if the request is rejected; no batches are
/// produced in that case.
#[tracing::instrument(skip(request), fields(range = %request.scene_range, quality = %request.quality_mode))]
pub fn compute_batches(request: &ProductionRequest) -> SceneweaverResult<Vec<Batch>> {
    validate_request(request)?;
    let batches = plan_range(request.scene_range, request.quality_mode);
    debug!(batches = batches.len(), "Planned production");
    Ok(batches)
}
