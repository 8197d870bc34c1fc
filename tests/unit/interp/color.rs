use serde_json::json;

use super::*;

#[test]
fn css_forms() {
    assert_eq!(Color::rgb(255.0, 0.0, 10.4).to_css(), "rgb(255, 0, 10)");
    assert_eq!(
        Color {
            a: 0.5,
            ..Color::rgb(300.0, -4.0, 127.5)
        }
        .to_css(),
        "rgba(255, 0, 128, 0.5)"
    );
    assert_eq!(
        Color {
            a: 0.9999995,
            ..Color::rgb(1.0, 2.0, 3.0)
        }
        .to_css(),
        "rgb(1, 2, 3)"
    );
}

#[test]
fn reads_payload_colors() {
    let c = Color::from_value(&json!({"r": 10, "g": 20, "b": 30})).unwrap();
    assert_eq!(c, Color::rgb(10.0, 20.0, 30.0));
    let c = Color::from_value(&json!({"r": 10, "g": 20, "b": 30, "a": 0.25})).unwrap();
    assert_eq!(c.a, 0.25);
    assert!(Color::from_value(&json!("red")).is_none());
}

#[test]
fn lerp_includes_alpha_and_hits_extremes() {
    let a = Color::rgb(0.0, 100.0, 200.0);
    let b = Color {
        a: 0.0,
        ..Color::rgb(255.0, 50.0, 0.0)
    };
    assert_eq!(Color::lerp(&a, &b, 0.0), a);
    assert_eq!(Color::lerp(&a, &b, 1.0), b);
    let mid = Color::lerp(&a, &b, 0.5);
    assert_eq!(mid.to_css(), "rgba(128, 75, 100, 0.5)");
}
