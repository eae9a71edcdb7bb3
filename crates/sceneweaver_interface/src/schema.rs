//! JSON schema for the structured scene array.

use serde_json::{Value, json};

/// Schema for an array of exactly `count` scene objects.
///
/// Field names match [`SceneDraft`](crate::SceneDraft)'s wire form.
pub fn scene_array_schema(count: usize) -> Value {
    json!({
        "type": "ARRAY",
        "minItems": count,
        "maxItems": count,
        "items": {
            "type": "OBJECT",
            "properties": {
                "sceneNumber": { "type": "INTEGER" },
                "narrative": {
                    "type": "STRING",
                    "description": "What happens in this scene, in prose."
                },
                "generationPrompt": {
                    "type": "STRING",
                    "description": "Self-contained visual prompt for rendering this scene, restating character appearance and style."
                },
                "voiceover": {
                    "type": "STRING",
                    "description": "Voice-over narration spoken over this scene."
                },
                "dialog": {
                    "type": "ARRAY",
                    "items": {
                        "type": "OBJECT",
                        "properties": {
                            "character": { "type": "STRING" },
                            "line": { "type": "STRING" }
                        },
                        "required": ["character", "line"]
                    }
                }
            },
            "required": ["sceneNumber", "narrative", "generationPrompt", "voiceover"],
            "propertyOrdering": ["sceneNumber", "narrative", "generationPrompt", "voiceover", "dialog"]
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_pins_item_count() {
        let schema = scene_array_schema(7);
        assert_eq!(schema["minItems"], 7);
        assert_eq!(schema["maxItems"], 7);
    }

    #[test]
    fn dialog_is_optional() {
        let schema = scene_array_schema(1);
        let required = schema["items"]["required"].as_array().unwrap();
        assert!(!required.iter().any(|v| v == "dialog"));
        assert!(required.iter().any(|v| v == "generationPrompt"));
    }
}
