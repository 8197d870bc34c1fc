use kurbo::Point;
use serde_json::Value;

use crate::{
    foundation::math::lerp,
    interp::{Color, Lerp, numeric::point_from_value},
    payload::value::{field, field_number, field_str},
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    pub offset: f64,
    pub color: Color,
}

/// Keyframed gradient (`{t: "g", r, s, gt?, c?, rd?, f?, to?}`).
///
/// `reference` names the `<linearGradient>`/`<radialGradient>` element the
/// values are written into.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Gradient {
    pub reference: String,
    pub stops: Vec<GradientStop>,
    pub transform: Option<[f64; 6]>,
    pub center: Option<Point>,
    pub radius: Option<f64>,
    pub from: Option<Point>,
    pub to: Option<Point>,
}

impl Gradient {
    pub fn from_value(v: &Value) -> Option<Self> {
        if field_str(v, "t") != Some("g") {
            return None;
        }
        let stops = field(v, "s")
            .and_then(Value::as_array)
            .map(|stops| {
                stops
                    .iter()
                    .filter_map(|s| {
                        Some(GradientStop {
                            offset: field_number(s, "o").unwrap_or(0.0),
                            color: Color::from_value(field(s, "c")?)?,
                        })
                    })
                    .collect()
            })
            .unwrap_or_default();
        let transform = field(v, "gt")
            .and_then(Value::as_array)
            .and_then(|m| {
                let m: Vec<f64> = m.iter().map(Value::as_f64).collect::<Option<_>>()?;
                m.try_into().ok()
            });
        let point = |key: &str| field(v, key).and_then(|p| point_from_value(p, Point::ZERO));
        Some(Self {
            reference: field_str(v, "r").unwrap_or_default().to_string(),
            stops,
            transform,
            center: point("c"),
            radius: field_number(v, "rd"),
            from: point("f"),
            to: point("to"),
        })
    }

    /// `url(#ref)` paint, or nothing without a reference.
    pub fn to_attr(&self) -> Option<String> {
        (!self.reference.is_empty()).then(|| format!("url(#{})", self.reference))
    }
}

/// `len` stops, repeating the last one past the end of `stops`.
fn extend_stops(stops: &[GradientStop], len: usize) -> Vec<GradientStop> {
    (0..len)
        .filter_map(|i| stops.get(i.min(stops.len().saturating_sub(1))).copied())
        .collect()
}

fn lerp_both<T>(a: &Option<T>, b: &Option<T>, f: impl FnOnce(&T, &T) -> T) -> Option<T> {
    match (a, b) {
        (Some(a), Some(b)) => Some(f(a, b)),
        _ => None,
    }
}

impl Lerp for Gradient {
    /// Stop lists are extended to the longer length; geometry only survives
    /// when both sides define it. The reference stays `a`'s. A side without
    /// stops has nothing to blend with, so the nearer side's list is kept.
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        let len = a.stops.len().max(b.stops.len());
        let stops = if a.stops.is_empty() || b.stops.is_empty() {
            if t < 0.5 { a.stops.clone() } else { b.stops.clone() }
        } else {
            extend_stops(&a.stops, len)
                .iter()
                .zip(extend_stops(&b.stops, len))
                .map(|(sa, sb)| GradientStop {
                    offset: lerp(sa.offset, sb.offset, t),
                    color: Color::lerp(&sa.color, &sb.color, t),
                })
                .collect()
        };
        Self {
            reference: a.reference.clone(),
            stops,
            transform: lerp_both(&a.transform, &b.transform, |ma, mb| {
                std::array::from_fn(|i| lerp(ma[i], mb[i], t))
            }),
            center: lerp_both(&a.center, &b.center, |pa, pb| <Point as Lerp>::lerp(pa, pb, t)),
            radius: lerp_both(&a.radius, &b.radius, |ra, rb| lerp(*ra, *rb, t)),
            from: lerp_both(&a.from, &b.from, |pa, pb| <Point as Lerp>::lerp(pa, pb, t)),
            to: lerp_both(&a.to, &b.to, |pa, pb| <Point as Lerp>::lerp(pa, pb, t)),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/interp/gradient.rs"]
mod tests;
