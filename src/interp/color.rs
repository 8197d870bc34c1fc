use serde_json::Value;

use crate::{
    foundation::math::{EPS, js_number, js_round, lerp},
    interp::Lerp,
    payload::value::field_number,
};

/// Straight RGBA, channels in `0..=255`, alpha in `0..=1`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Color {
    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Reads `{r, g, b, a?}`. Missing alpha is opaque.
    pub fn from_value(v: &Value) -> Option<Self> {
        v.as_object()?;
        Some(Self {
            r: field_number(v, "r").unwrap_or(f64::NAN),
            g: field_number(v, "g").unwrap_or(f64::NAN),
            b: field_number(v, "b").unwrap_or(f64::NAN),
            a: field_number(v, "a").unwrap_or(1.0),
        })
    }

    /// `rgb(r, g, b)` when opaque, `rgba(r, g, b, a)` otherwise.
    pub fn to_css(&self) -> String {
        let channel = |c: f64| {
            let c = js_round(c).clamp(0.0, 255.0);
            if c.is_nan() { 0.0 } else { c }
        };
        let (r, g, b) = (channel(self.r), channel(self.g), channel(self.b));
        if self.a >= 1.0 - EPS {
            format!("rgb({r}, {g}, {b})")
        } else {
            format!("rgba({r}, {g}, {b}, {})", js_number(self.a))
        }
    }
}

impl Lerp for Color {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self {
            r: lerp(a.r, b.r, t),
            g: lerp(a.g, b.g, t),
            b: lerp(a.b, b.b, t),
            a: lerp(a.a, b.a, t),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/interp/color.rs"]
mod tests;
