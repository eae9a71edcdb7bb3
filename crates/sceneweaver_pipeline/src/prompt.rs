//! Context prompts for batch generation calls.

use sceneweaver_core::{Batch, ProductionRequest, Scene};
use std::fmt::Write as _;

/// Build the context prompt for one batch.
///
/// The prompt carries the synopsis, the visual style and the roster block
/// exactly as [`ProductionRequest::roster_block`] renders it, followed by the
/// count and numbering instruction for `batch`. When `previous` is given, its
/// narrative line is appended verbatim as the continuity anchor.
pub fn build_context_prompt(
    request: &ProductionRequest,
    batch: &Batch,
    previous: Option<&Scene>,
) -> String {
    let count = batch.len();
    let mut prompt = String::new();

    prompt.push_str(
        "You are writing a continuous visual story told as a numbered sequence of scenes.\n\n",
    );
    let _ = writeln!(prompt, "Synopsis:\n{}\n", request.synopsis.trim());
    let _ = writeln!(prompt, "Visual style:\n{}\n", request.visual_style.trim());
    let _ = writeln!(
        prompt,
        "Characters (keep every name, appearance and behavior identical in every scene):\n{}\n",
        request.roster_block()
    );

    if count == 1 {
        let _ = writeln!(
            prompt,
            "Write exactly 1 scene, numbered {}.",
            batch.start
        );
    } else {
        let _ = writeln!(
            prompt,
            "Write exactly {} scenes, numbered {} to {} in order.",
            count, batch.start, batch.end
        );
    }
    prompt.push_str(
        "Each scene needs a narrative describing what happens, a self-contained \
         generationPrompt that restates the characters' appearance and the visual style, \
         a voiceover line, and dialog only when characters speak.\n",
    );

    if let Some(scene) = previous {
        let _ = write!(
            prompt,
            "\nContinue directly from scene {}, which ended with:\n{}\n",
            scene.scene_number, scene.narrative_line
        );
    }

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use sceneweaver_core::{Character, SceneRange};

    fn request() -> ProductionRequest {
        ProductionRequest::builder()
            .synopsis("Two rival bakers enter a village contest")
            .visual_style("Pastel claymation, 9:16")
            .character_roster(vec![
                Character::new("Ada", "female", "52", "Flour-dusted apron"),
                Character::new("Bram", "male", "48", "Handlebar moustache"),
            ])
            .scene_range(SceneRange::new(1, 30))
            .build()
            .unwrap()
    }

    #[test]
    fn first_batch_has_no_anchor() {
        let prompt = build_context_prompt(&request(), &Batch::new(1, 20), None);
        assert!(prompt.contains("Two rival bakers enter a village contest"));
        assert!(prompt.contains("Pastel claymation, 9:16"));
        assert!(prompt.contains("Write exactly 20 scenes, numbered 1 to 20"));
        assert!(!prompt.contains("Continue directly"));
    }

    #[test]
    fn roster_block_is_verbatim() {
        let req = request();
        let first = build_context_prompt(&req, &Batch::new(1, 20), None);
        let anchor = Scene::new(20, "The ovens cool.", "prompt", "vo");
        let second = build_context_prompt(&req, &Batch::new(21, 30), Some(&anchor));

        let block = req.roster_block();
        assert!(first.contains(&block));
        assert!(second.contains(&block));
    }

    #[test]
    fn later_batch_carries_previous_narrative() {
        let anchor = Scene::new(
            20,
            "Ada slams the oven door as Bram's soufflé collapses.",
            "prompt",
            "vo",
        );
        let prompt = build_context_prompt(&request(), &Batch::new(21, 30), Some(&anchor));
        assert!(prompt.contains("Ada slams the oven door as Bram's soufflé collapses."));
        assert!(prompt.contains("numbered 21 to 30"));
        assert!(prompt.contains("Write exactly 10 scenes"));
    }

    #[test]
    fn single_scene_batch() {
        let prompt = build_context_prompt(&request(), &Batch::new(7, 7), None);
        assert!(prompt.contains("Write exactly 1 scene, numbered 7."));
    }
}
