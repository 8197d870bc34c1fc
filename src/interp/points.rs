use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::{
    animation::track::Sample,
    foundation::math::{js_number, lerp, round6},
    interp::{Lerp, numeric::reconcile},
    payload::value::coerce_number,
};

static SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s,]+").expect("static pattern"));

/// Flat `x, y, x, y, ...` coordinates of a polygon or polyline.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PointList(pub Vec<f64>);

impl PointList {
    /// Parses a `points` attribute. An odd number of coordinates is rejected.
    pub fn parse(s: &str) -> Option<Self> {
        let coords: Vec<f64> = SEPARATOR
            .split(s.trim())
            .filter(|p| !p.is_empty())
            .map(|p| p.parse::<f64>().unwrap_or(f64::NAN))
            .collect();
        (coords.len() % 2 == 0).then_some(Self(coords))
    }

    /// Strings are parsed, arrays taken as flat coordinates.
    pub fn from_value(v: &Value) -> Option<Self> {
        match v {
            Value::String(s) => Self::parse(s),
            Value::Array(items) => Some(Self(items.iter().map(coerce_number).collect())),
            _ => None,
        }
    }

    /// `x,y x,y ...`, coordinates rounded to 6 decimals.
    pub fn to_attr(&self) -> String {
        if self.0.len() < 2 {
            return String::new();
        }
        self.0
            .chunks_exact(2)
            .map(|p| format!("{},{}", js_number(round6(p[0])), js_number(round6(p[1]))))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Attribute text for a sample. Held strings are written untouched; a
    /// blend with an empty side writes nothing.
    pub fn sample_attr(sample: Sample<'_>) -> Option<String> {
        match sample {
            Sample::Value(Value::String(s)) => Some(s.clone()),
            Sample::Value(v) => Self::from_value(v).map(|p| p.to_attr()),
            Sample::Between(d) => {
                let a = Self::from_value(d.a).filter(|p| !p.0.is_empty())?;
                let b = Self::from_value(d.b).filter(|p| !p.0.is_empty())?;
                Some(Self::lerp(&a, &b, d.t).to_attr())
            }
        }
    }
}

impl Lerp for PointList {
    /// Coordinate lists of different lengths are repeated up to their least
    /// common multiple first. Unparsable coordinates count as `0`.
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        let (a, b) = reconcile(&a.0, &b.0);
        let zero_nan = |x: f64| if x.is_nan() { 0.0 } else { x };
        Self(
            a.iter()
                .zip(&b)
                .map(|(&x, &y)| lerp(zero_nan(x), zero_nan(y), t))
                .collect(),
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/interp/points.rs"]
mod tests;
