use kurbo::{Point, Size};
use serde_json::Value;

use crate::{
    animation::track::Sample,
    foundation::math::{js_number, lcm, lerp, round6},
    interp::Lerp,
    payload::value::{coerce_number, field_number, js_string},
};

impl Lerp for Point {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Point::new(lerp(a.x, b.x, t), lerp(a.y, b.y, t))
    }
}

impl Lerp for Size {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Size::new(lerp(a.width, b.width, t), lerp(a.height, b.height, t))
    }
}

/// Reads `{x, y}`; missing components take `fallback`'s.
pub fn point_from_value(v: &Value, fallback: Point) -> Option<Point> {
    v.as_object()?;
    Some(Point::new(
        field_number(v, "x").unwrap_or(fallback.x),
        field_number(v, "y").unwrap_or(fallback.y),
    ))
}

pub fn size_from_value(v: &Value) -> Option<Size> {
    v.as_object()?;
    Some(Size::new(
        field_number(v, "width").unwrap_or(f64::NAN),
        field_number(v, "height").unwrap_or(f64::NAN),
    ))
}

/// Scalar sample as an attribute value. Held values pass through as-is;
/// interpolated ends are coerced with `+v || 0`.
pub fn number_attr(sample: Sample<'_>) -> Option<String> {
    match sample {
        Sample::Value(v) => js_string(v),
        Sample::Between(d) => Some(js_number(lerp(
            coerce_number(d.a),
            coerce_number(d.b),
            d.t,
        ))),
    }
}

/// Scalar sample as a number, for composite properties.
pub fn number_sample(sample: Sample<'_>) -> f64 {
    match sample {
        Sample::Value(v) => coerce_number(v),
        Sample::Between(d) => lerp(coerce_number(d.a), coerce_number(d.b), d.t),
    }
}

/// Point sample; held values that are not points fall back.
pub fn point_sample(sample: Sample<'_>, fallback: Point) -> Point {
    match sample {
        Sample::Value(v) => point_from_value(v, fallback).unwrap_or(fallback),
        Sample::Between(d) => {
            let a = point_from_value(d.a, fallback).unwrap_or(fallback);
            let b = point_from_value(d.b, fallback).unwrap_or(fallback);
            <Point as Lerp>::lerp(&a, &b, d.t)
        }
    }
}

pub fn size_sample(sample: Sample<'_>) -> Option<Size> {
    match sample {
        Sample::Value(v) => size_from_value(v),
        Sample::Between(d) => Some(<Size as Lerp>::lerp(
            &size_from_value(d.a)?,
            &size_from_value(d.b)?,
            d.t,
        )),
    }
}

/// Numeric list with ragged-length reconciliation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NumberArray(pub Vec<f64>);

impl NumberArray {
    /// Array items coerced with `+v || 0`; `None` for non-arrays.
    pub fn from_value(v: &Value) -> Option<Self> {
        Some(Self(v.as_array()?.iter().map(coerce_number).collect()))
    }

    /// Space-joined, each number rounded to 6 decimals.
    pub fn to_attr(&self) -> String {
        self.0
            .iter()
            .map(|&x| js_number(round6(x)))
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn sample(sample: Sample<'_>) -> Option<Self> {
        match sample {
            Sample::Value(v) => Self::from_value(v),
            Sample::Between(d) => {
                let a = Self::from_value(d.a).unwrap_or_default();
                let b = Self::from_value(d.b).unwrap_or_default();
                Some(<Self as Lerp>::lerp(&a, &b, d.t))
            }
        }
    }
}

impl Lerp for NumberArray {
    /// An empty side yields the other side. Lengths that differ are first
    /// expanded to their least common multiple by repetition.
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        match (a.0.is_empty(), b.0.is_empty()) {
            (true, true) => return Self::default(),
            (true, false) => return b.clone(),
            (false, true) => return a.clone(),
            (false, false) => {}
        }
        let (a, b) = reconcile(&a.0, &b.0);
        Self(a.iter().zip(&b).map(|(&x, &y)| lerp(x, y, t)).collect())
    }
}

/// Repeats both lists up to `lcm(a.len(), b.len())`.
pub(crate) fn reconcile(a: &[f64], b: &[f64]) -> (Vec<f64>, Vec<f64>) {
    if a.len() == b.len() {
        return (a.to_vec(), b.to_vec());
    }
    let target = lcm(a.len(), b.len());
    (repeat_to(a, target), repeat_to(b, target))
}

fn repeat_to(items: &[f64], len: usize) -> Vec<f64> {
    items.iter().copied().cycle().take(len).collect()
}

#[cfg(test)]
#[path = "../../tests/unit/interp/numeric.rs"]
mod tests;
