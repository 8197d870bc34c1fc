use serde_json::json;

use super::*;
use crate::animation::track::Interp;

#[test]
fn unwraps_css_path_functions() {
    assert_eq!(unwrap_path_fn("path('M0 0L1 1')"), "M0 0L1 1");
    assert_eq!(unwrap_path_fn(" path(\"M2 2\") "), "M2 2");
    assert_eq!(unwrap_path_fn("M0 0"), "M0 0");
    assert_eq!(unwrap_path_fn("path('M0 0\")"), "path('M0 0\")");
}

#[test]
fn samples_evenly_by_length() {
    let s = SampledPath::sample("M0 0 L10 0", 3);
    assert_eq!(s.points.len(), 3);
    assert!((s.points[1].x - 5.0).abs() < 1e-6);
    assert!((s.points[2].x - 10.0).abs() < 1e-6);
    assert!(!s.closed);

    let square = SampledPath::sample("M0 0 H10 V10 H0 Z", 5);
    assert!(square.closed);
    assert!((square.points[2] - Point::new(10.0, 10.0)).hypot() < 1e-3);
}

#[test]
fn broken_path_data_falls_back_to_one_point() {
    assert_eq!(SampledPath::sample("M0 0 Q", 8), SampledPath::fallback());
    let lone = SampledPath::sample("M3 4", 4);
    assert_eq!(lone.points, vec![Point::new(3.0, 4.0); 4]);
}

#[test]
fn morph_blends_samples_into_a_polyline() {
    let mut m = PathMorpher::new(3);
    let d = m.morph("M0 0 L10 0", "M0 10 L10 10", 0.5);
    assert!(d.starts_with("M 0 5 L "), "{d}");
    assert_eq!(d.matches(" L ").count(), 2);
    assert!(!d.ends_with('Z'));

    let closed = m.morph("M0 0 H10 V10 H0 Z", "M0 0 H20 V20 H0 Z", 0.25);
    assert!(closed.ends_with(" Z"));
}

#[test]
fn identical_ends_skip_sampling() {
    let mut m = PathMorpher::new(16);
    assert_eq!(m.morph("path('M0 0L5 5')", "M0 0L5 5", 0.3), "M0 0L5 5");
    assert!(m.cache().is_empty());
}

#[test]
fn samples_are_cached_per_path() {
    let mut m = PathMorpher::new(16);
    for t in [0.1, 0.5, 0.9] {
        m.morph("M0 0 L1 0", "M0 0 L0 1", t);
    }
    let stats = m.cache().stats();
    assert_eq!(stats.entries, 2);
    assert_eq!(stats.misses, 2);
    assert_eq!(stats.hits, 4);
}

#[test]
fn sample_attr_shapes() {
    let mut m = PathMorpher::new(4);
    assert_eq!(
        m.sample_attr(Sample::Value(&json!("path('M1 1')"))),
        Some("M1 1".to_string())
    );
    assert_eq!(m.sample_attr(Sample::Value(&json!(3))), None);
    let (a, b) = (json!("M0 0 L4 0"), json!(null));
    assert_eq!(m.sample_attr(Sample::Between(Interp::new(&a, &b, 0.5))), None);
}
