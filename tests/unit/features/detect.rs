use serde_json::json;

use super::*;

fn payload(v: Value) -> Payload {
    Payload::from_json(&v.to_string()).unwrap()
}

#[test]
fn plain_opacity_payload_needs_nothing_optional() {
    let p = payload(json!({
        "root": "r",
        "animations": [{
            "s": {"duration": 1000},
            "elements": {"a": {"opacity": [{"t": 0, "v": 0}, {"t": 1000, "v": 1}]}}
        }]
    }));
    assert_eq!(detect_capabilities(&p), Capabilities::default());
}

#[test]
fn structural_flags_follow_track_presence() {
    let p = payload(json!({
        "root": "r",
        "options": {"start": "scroll"},
        "animations": [
            {"elements": {"a": {"transform": {"keys": {}}, "mask": [{"t": 0, "v": "url(#m)"}]}}},
            {"s": {"w": [1]}, "elements": {
                "b": {"clip-path": [], "points": [{"t": 0, "v": "0,0"}]},
                "c": {"d": [{"t": 0, "v": "M0 0"}], "filter": [{"t": 0, "v": "url(#f)"}]},
                "d": null
            }}
        ]
    }));
    let caps = detect_capabilities(&p);
    assert!(caps.transform && caps.mask && caps.clip_path);
    assert!(caps.points && caps.path_d && caps.filters);
    assert!(caps.triggers_scroll && caps.integrity_weights);
    assert!(!caps.triggers_hover && !caps.triggers_click);
    assert!(!caps.bezier && !caps.gradients);
}

#[test]
fn easing_and_gradients_are_found_in_any_track() {
    let p = payload(json!({
        "root": "r",
        "options": {"start": "click"},
        "animations": [{"elements": {
            "a": {"fill": [{"t": 0, "v": {"t": "g", "v": {}}}]},
            "b": {"transform": {"keys": {"r": [{"t": 0, "v": 0, "e": [0, 0, 1, 1]}]}}}
        }}]
    }));
    let caps = detect_capabilities(&p);
    assert!(caps.gradients);
    assert!(caps.bezier);
    assert!(caps.triggers_click);
}

#[test]
fn easing_needs_four_numbers() {
    let p = payload(json!({
        "root": "r",
        "animations": [{"elements": {
            "a": {"opacity": [{"t": 0, "v": 0, "e": [0, 0, 1]}]}
        }}]
    }));
    assert!(!detect_capabilities(&p).bezier);
}

#[test]
fn adding_tracks_never_clears_a_flag() {
    let base = json!({
        "root": "r",
        "options": {"start": "hover"},
        "animations": [{"elements": {
            "a": {"stroke": [{"t": 0, "v": {"t": "g"}, "e": [0.4, 0, 0.2, 1]}]}
        }}]
    });
    let before = detect_capabilities(&payload(base.clone()));

    let mut extended = base;
    extended["animations"][0]["elements"]["b"] = json!({"opacity": [{"t": 0, "v": 1}]});
    extended["animations"]
        .as_array_mut()
        .unwrap()
        .push(json!({"elements": {"c": {"d": [{"t": 0, "v": "M0 0"}]}}}));
    let after = detect_capabilities(&payload(extended));

    assert_eq!(after.union(before), after);
    assert!(after.path_d);
}

#[test]
fn union_and_all() {
    let a = Capabilities {
        bezier: true,
        ..Capabilities::default()
    };
    let b = Capabilities {
        points: true,
        ..Capabilities::default()
    };
    let u = a.union(b);
    assert!(u.bezier && u.points && !u.mask);
    assert_eq!(u.union(Capabilities::all()), Capabilities::all());
}
