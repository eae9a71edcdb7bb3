//! Scene assembly: renumbering batch output and checking contiguity.

use sceneweaver_core::{Batch, ProductionStatus, Scene, SceneRange};
use sceneweaver_error::{
    BatchGenerationError, BatchGenerationErrorKind, IntegrityError, IntegrityErrorKind,
};
use sceneweaver_interface::SceneDraft;

/// Turn one batch's drafts into numbered scenes.
///
/// Scene `i` of the batch is numbered `batch.start + i` whatever number the
/// service reported. Empty dialog lists become `None`.
///
/// # Errors
///
/// Returns a count mismatch when the number of drafts differs from the
/// batch length, and a schema error when a draft has a blank narrative or
/// generation prompt.
pub fn renumber_batch(
    batch: &Batch,
    drafts: Vec<SceneDraft>,
) -> Result<Vec<Scene>, BatchGenerationError> {
    if drafts.len() != batch.len() {
        return Err(BatchGenerationError::new(
            BatchGenerationErrorKind::CountMismatch {
                expected: batch.len(),
                actual: drafts.len(),
            },
            batch.start,
            batch.end,
        ));
    }

    drafts
        .into_iter()
        .zip(batch.scene_numbers())
        .map(|(draft, scene_number)| {
            if draft.narrative.trim().is_empty() || draft.generation_prompt.trim().is_empty() {
                return Err(BatchGenerationError::new(
                    BatchGenerationErrorKind::Schema(format!(
                        "scene {} has a blank narrative or generation prompt",
                        scene_number
                    )),
                    batch.start,
                    batch.end,
                ));
            }
            Ok(Scene {
                scene_number,
                narrative_line: draft.narrative,
                generation_prompt: draft.generation_prompt,
                voiceover_script: draft.voiceover,
                dialog: draft.dialog.filter(|lines| !lines.is_empty()),
                asset_ref: None,
            })
        })
        .collect()
}

/// Check assembled scenes against the requested range.
///
/// Scenes must start at `range.start` and increase by exactly one with no
/// duplicates. A `Complete` production must also cover the whole range; a
/// `Partial` one may stop early.
///
/// # Errors
///
/// Returns an [`IntegrityError`] describing the first violation found.
pub fn assemble(
    range: SceneRange,
    scenes: Vec<Scene>,
    status: ProductionStatus,
) -> Result<Vec<Scene>, IntegrityError> {
    let mut expected = range.start;
    for (index, scene) in scenes.iter().enumerate() {
        let number = scene.scene_number;
        if !range.contains(number) {
            return Err(IntegrityError::new(IntegrityErrorKind::OutOfRange {
                scene: number,
                start: range.start,
                end: range.end,
            }));
        }
        if index > 0 && scenes[index - 1].scene_number == number {
            return Err(IntegrityError::new(IntegrityErrorKind::Duplicate(number)));
        }
        if number != expected {
            return Err(IntegrityError::new(IntegrityErrorKind::Gap {
                expected,
                found: number,
            }));
        }
        expected = expected.saturating_add(1);
    }

    if status == ProductionStatus::Complete && scenes.len() != range.len() {
        return Err(IntegrityError::new(IntegrityErrorKind::CountMismatch {
            expected: range.len(),
            actual: scenes.len(),
        }));
    }

    Ok(scenes)
}
