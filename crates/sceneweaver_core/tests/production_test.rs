use sceneweaver_core::{
    Character, DialogLine, Production, ProductionRequest, ProductionStatus, SceneRange, Scene,
};

fn request(start: u32, end: u32) -> ProductionRequest {
    ProductionRequest::builder()
        .synopsis("Two siblings restore a derelict lighthouse")
        .visual_style("Soft pastel animation, 16:9")
        .character_roster(vec![
            Character::new("Mira", "female", "34", "Red scarf, calm"),
            Character::new("Tomas", "male", "29", "Tall, restless"),
        ])
        .scene_range(SceneRange::new(start, end))
        .build()
        .unwrap()
}

#[test]
fn next_scene_number_follows_last_scene() {
    let scenes = vec![
        Scene::new(1, "Arrival", "wide shot", "They arrive."),
        Scene::new(2, "Climb", "stairwell", "They climb."),
    ];
    let production = Production::new(request(1, 5), scenes, ProductionStatus::Partial);
    assert_eq!(production.next_scene_number(), Some(3));
}

#[test]
fn next_scene_number_is_start_for_empty_partial() {
    let production = Production::new(request(4, 9), vec![], ProductionStatus::Partial);
    assert_eq!(production.next_scene_number(), Some(4));
}

#[test]
fn next_scene_number_is_none_when_covered() {
    let scenes = vec![Scene::new(1, "Only", "prompt", "vo")];
    let production = Production::new(request(1, 1), scenes, ProductionStatus::Complete);
    assert_eq!(production.next_scene_number(), None);
}

#[test]
fn next_scene_number_is_none_when_last_scene_is_max() {
    let scenes = vec![
        Scene::new(u32::MAX - 1, "Penultimate", "prompt", "vo"),
        Scene::new(u32::MAX, "Final", "prompt", "vo"),
    ];
    let production = Production::new(
        request(u32::MAX - 1, u32::MAX),
        scenes,
        ProductionStatus::Complete,
    );
    assert_eq!(production.next_scene_number(), None);
}

#[test]
fn script_text_includes_dialog_in_order() {
    let scene = Scene::new(7, "The lamp flickers", "close-up of lamp", "Something stirs.")
        .with_dialog(vec![
            DialogLine {
                character: "Mira".to_string(),
                line: "Did you see that?".to_string(),
            },
            DialogLine {
                character: "Tomas".to_string(),
                line: "Just the wind.".to_string(),
            },
        ]);
    let production = Production::new(request(7, 7), vec![scene], ProductionStatus::Complete);

    let script = production.script_text();
    assert!(script.starts_with("Scene 7"));
    let mira = script.find("Mira: Did you see that?").unwrap();
    let tomas = script.find("Tomas: Just the wind.").unwrap();
    assert!(mira < tomas);
}

#[test]
fn prompt_list_has_one_line_per_scene() {
    let scenes = vec![
        Scene::new(1, "a", "first\nprompt", "vo"),
        Scene::new(2, "b", "second prompt", "vo"),
    ];
    let production = Production::new(request(1, 2), scenes, ProductionStatus::Complete);
    assert_eq!(production.prompt_list(), "first prompt\nsecond prompt");
}

#[test]
fn cached_asset_survives_serialization() {
    let mut scene = Scene::new(1, "a", "b", "c");
    scene.asset_ref = Some("data:image/png;base64,AAAA".to_string());
    let production = Production::new(request(1, 1), vec![scene], ProductionStatus::Complete);

    let json = serde_json::to_string(&production).unwrap();
    let restored: Production = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, production);
    assert_eq!(
        restored.scenes[0].asset_ref.as_deref(),
        Some("data:image/png;base64,AAAA")
    );
}
