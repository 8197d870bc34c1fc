use serde_json::json;

use super::*;

const CURVES: [CubicBezier; 4] = [
    CubicBezier {
        x1: 0.0,
        y1: 0.0,
        x2: 1.0,
        y2: 1.0,
    },
    CubicBezier {
        x1: 0.42,
        y1: 0.0,
        x2: 1.0,
        y2: 1.0,
    },
    CubicBezier {
        x1: 0.0,
        y1: 0.0,
        x2: 0.58,
        y2: 1.0,
    },
    CubicBezier {
        x1: 0.25,
        y1: 0.1,
        x2: 0.25,
        y2: 1.0,
    },
];

#[test]
fn endpoints_are_close_to_identity() {
    for curve in CURVES {
        assert!(curve.apply(0.0).abs() < 1e-4);
        assert!((curve.apply(1.0) - 1.0).abs() < 1e-4);
    }
}

#[test]
fn monotonic_spot_check() {
    for curve in CURVES {
        let a = curve.apply(0.25);
        let b = curve.apply(0.5);
        let c = curve.apply(0.75);
        assert!(a < b);
        assert!(b < c);
    }
}

#[test]
fn linear_curve_tracks_input() {
    let linear = CURVES[0];
    for t in [0.1, 0.3, 0.5, 0.9] {
        assert!((linear.apply(t) - t).abs() < 1e-4);
    }
}

#[test]
fn ease_in_lags_behind_linear() {
    assert!(CURVES[1].apply(0.5) < 0.5);
    assert!(CURVES[2].apply(0.5) > 0.5);
}

#[test]
fn parses_only_four_number_tuples() {
    assert_eq!(
        CubicBezier::from_value(&json!([0.42, 0, 0.58, 1])),
        Some(CubicBezier::new(0.42, 0.0, 0.58, 1.0))
    );
    assert_eq!(CubicBezier::from_value(&json!([0.42, 0, 0.58])), None);
    assert_eq!(CubicBezier::from_value(&json!([0.42, "a", 0.58, 1])), None);
    assert_eq!(CubicBezier::from_value(&json!("ease")), None);
}
