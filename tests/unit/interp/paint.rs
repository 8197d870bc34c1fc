use serde_json::json;

use super::*;
use crate::animation::track::Interp;

fn solid(r: f64, g: f64, b: f64) -> Paint {
    Paint::Solid(Color::rgb(r, g, b))
}

fn gradient(reference: &str) -> Paint {
    Paint::from_value(&json!({
        "t": "g",
        "r": reference,
        "s": [
            {"o": 0, "c": {"r": 0, "g": 0, "b": 0}},
            {"o": 1, "c": {"r": 200, "g": 200, "b": 200}}
        ]
    }))
}

#[test]
fn reads_every_shape() {
    assert_eq!(Paint::from_value(&json!("none")), Paint::Raw("none".into()));
    assert_eq!(
        Paint::from_value(&json!({"t": "c", "v": {"r": 1, "g": 2, "b": 3}})),
        solid(1.0, 2.0, 3.0)
    );
    assert!(matches!(gradient("g1"), Paint::Gradient(_)));
    assert_eq!(Paint::from_value(&json!({"t": "c"})), Paint::Unknown);
    assert_eq!(Paint::from_value(&json!(7)), Paint::Unknown);
}

#[test]
fn attribute_forms() {
    assert_eq!(solid(1.0, 2.0, 3.0).to_attr(), Some("rgb(1, 2, 3)".into()));
    assert_eq!(gradient("g1").to_attr(), Some("url(#g1)".into()));
    assert_eq!(gradient("").to_attr(), None);
    assert_eq!(Paint::Unknown.to_attr(), None);
}

#[test]
fn solids_blend() {
    let a = json!({"t": "c", "v": {"r": 0, "g": 0, "b": 0}});
    let b = json!({"t": "c", "v": {"r": 255, "g": 255, "b": 255, "a": 0}});
    let p = Paint::sample(Sample::Between(Interp::new(&a, &b, 0.5)));
    assert_eq!(p.to_attr(), Some("rgba(128, 128, 128, 0.5)".into()));
}

#[test]
fn raw_strings_switch_at_half() {
    let a = Paint::Raw("none".into());
    let b = solid(10.0, 10.0, 10.0);
    assert_eq!(Paint::lerp(&a, &b, 0.49), a);
    assert_eq!(Paint::lerp(&a, &b, 0.5), b);
}

#[test]
fn gradients_blend_only_for_the_same_element() {
    let a = gradient("g1");
    let b = gradient("g2");
    assert_eq!(Paint::lerp(&a, &b, 0.3), a);
    assert_eq!(Paint::lerp(&a, &a, 0.3), a);
}

#[test]
fn solid_against_gradient_tints_stops() {
    let s = solid(100.0, 100.0, 100.0);
    let g = gradient("g1");

    let Paint::Gradient(to_grad) = Paint::lerp(&s, &g, 0.5) else {
        panic!("expected a gradient");
    };
    assert_eq!(to_grad.reference, "g1");
    assert_eq!(to_grad.stops[0].color, Color::rgb(50.0, 50.0, 50.0));
    assert_eq!(to_grad.stops[1].color, Color::rgb(150.0, 150.0, 150.0));

    assert_eq!(Paint::lerp(&g, &s, 0.0), g);
    assert_eq!(Paint::lerp(&s, &g, 1.0), g);
}
