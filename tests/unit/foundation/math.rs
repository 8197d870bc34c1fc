use super::*;

#[test]
fn fnv_hash_is_split_independent() {
    let mut a = Fnv1a64::new_default();
    a.write_bytes(b"svgator");
    let mut b = Fnv1a64::new_default();
    b.write_bytes(b"svg");
    b.write_bytes(b"ator");
    assert_eq!(a.finish(), b.finish());
}

#[test]
fn lcm_reconciles_ragged_lengths() {
    assert_eq!(lcm(2, 3), 6);
    assert_eq!(lcm(4, 6), 12);
    assert_eq!(lcm(5, 5), 5);
    assert_eq!(gcd(0, 0), 1);
}

#[test]
fn round6_matches_runtime_rounding() {
    assert_eq!(round6(0.1234564), 0.123456);
    assert_eq!(round6(0.12345678), 0.123457);
    assert_eq!(round6(-1.0000004), -1.0);
}

#[test]
fn js_number_formats_like_the_runtime() {
    assert_eq!(js_number(0.5), "0.5");
    assert_eq!(js_number(1.0), "1");
    assert_eq!(js_number(-0.0), "0");
    assert_eq!(js_number(120.0), "120");
    assert_eq!(js_number(1e-7), "1e-7");
    assert_eq!(js_number(2e21), "2e+21");
    assert_eq!(js_number(f64::NAN), "NaN");
}

#[test]
fn clamp01_bounds() {
    assert_eq!(clamp01(-1.0), 0.0);
    assert_eq!(clamp01(0.25), 0.25);
    assert_eq!(clamp01(4.0), 1.0);
}
