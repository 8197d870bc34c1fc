use serde_json::json;

use super::*;

const SAMPLE: &str = r#"{
    "root": "eKm3oA1bCdE1",
    "version": "2022-05-04",
    "animations": [
        {
            "s": {"duration": 500},
            "elements": {
                "b": {"opacity": [{"t": 0, "v": 0}, {"t": 1800, "v": 1}]},
                "a": {"stroke-width": [{"t": 0, "v": 1}]}
            },
            "id": 7
        }
    ],
    "options": "MDA0xMGI1"
}"#;

#[test]
fn keeps_unknown_fields() {
    let payload = Payload::from_json(SAMPLE).unwrap();
    assert_eq!(payload.root, "eKm3oA1bCdE1");
    assert_eq!(payload.extra.get("version"), Some(&json!("2022-05-04")));
    assert_eq!(payload.animations[0].extra.get("id"), Some(&json!(7)));

    let back: Value = serde_json::from_str(&payload.to_json().unwrap()).unwrap();
    assert_eq!(back["version"], json!("2022-05-04"));
    assert_eq!(back["animations"][0]["s"], json!({"duration": 500}));
    assert_eq!(back["options"], json!("MDA0xMGI1"));
}

#[test]
fn invalid_literal_is_a_payload_error() {
    let err = Payload::from_json("{\"root\": ").unwrap_err();
    assert!(err.to_string().starts_with("payload error:"));
    assert!(Payload::from_json("[1, 2]").is_err());
}

#[test]
fn null_options_are_not_serialized() {
    let payload = Payload::from_json(r#"{"root": "r", "animations": []}"#).unwrap();
    assert!(payload.options.is_null());
    assert!(!payload.to_json().unwrap().contains("options"));
}

#[test]
fn duration_covers_the_last_keyframe() {
    let payload = Payload::from_json(SAMPLE).unwrap();
    assert_eq!(payload.animations[0].duration(), 1800.0);

    let short = Animation {
        settings: json!({"duration": 3000}),
        ..Animation::default()
    };
    assert_eq!(short.duration(), 3000.0);
}

#[test]
fn element_definitions_come_in_id_order() {
    let payload = Payload::from_json(SAMPLE).unwrap();
    let ids: Vec<String> = payload.animations[0]
        .element_definitions()
        .into_iter()
        .map(|(id, _)| id)
        .collect();
    assert_eq!(ids, vec!["a".to_string(), "b".to_string()]);
}

#[test]
fn prune_drops_ids_from_every_animation() {
    let mut payload = Payload::from_json(SAMPLE).unwrap();
    payload.animations.push(payload.animations[0].clone());
    assert_eq!(payload.element_count(), 4);

    let removed = BTreeSet::from(["a".to_string(), "zz".to_string()]);
    assert_eq!(payload.prune_elements(&removed), 2);
    assert_eq!(payload.element_count(), 2);
    assert_eq!(payload.prune_elements(&BTreeSet::new()), 0);
}
