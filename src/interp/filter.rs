//! Keyframed filter stacks (`#filter`): one slot per driven primitive.

use kurbo::Point;
use serde_json::Value;

use crate::{
    animation::track::Sample,
    foundation::math::{js_number, lerp},
    interp::{Color, Lerp, numeric::point_from_value},
    payload::value::{field, field_str, js_string},
};

#[derive(Clone, Debug, PartialEq)]
pub enum FilterValue {
    Blur(Point),
    HueRotate(f64),
    /// `drop-shadow` and `inner-shadow`.
    Shadow {
        blur: Point,
        offset: Point,
        color: Color,
    },
    Number(f64),
    /// Unrecognized shape; only ever switched, never blended.
    Raw(Value),
    Missing,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FilterSlot {
    pub kind: String,
    pub value: FilterValue,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FilterStack(pub Vec<FilterSlot>);

/// One attribute update on a filter primitive.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterWrite {
    pub id: String,
    pub name: &'static str,
    pub value: String,
}

impl FilterValue {
    fn parse(kind: &str, v: Option<&Value>) -> Self {
        let Some(v) = v.filter(|v| !v.is_null()) else {
            return Self::Missing;
        };
        let parsed = match kind {
            "blur" => point_from_value(v, Point::ZERO).map(Self::Blur),
            "hue-rotate" => v.as_f64().map(Self::HueRotate),
            "drop-shadow" | "inner-shadow" => Self::shadow(v),
            _ => v.as_f64().map(Self::Number),
        };
        parsed.unwrap_or_else(|| Self::Raw(v.clone()))
    }

    fn shadow(v: &Value) -> Option<Self> {
        Some(Self::Shadow {
            blur: point_from_value(field(v, "blur")?, Point::ZERO)?,
            offset: point_from_value(field(v, "offset")?, Point::ZERO)?,
            color: Color::from_value(field(v, "color")?)?,
        })
    }
}

impl Lerp for FilterValue {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        match (a, b) {
            (Self::Missing, other) | (other, Self::Missing) => other.clone(),
            (Self::Blur(pa), Self::Blur(pb)) => Self::Blur(<Point as Lerp>::lerp(pa, pb, t)),
            (Self::HueRotate(x), Self::HueRotate(y)) => Self::HueRotate(lerp(*x, *y, t)),
            (Self::Number(x), Self::Number(y)) => Self::Number(lerp(*x, *y, t)),
            (
                Self::Shadow {
                    blur: ba,
                    offset: oa,
                    color: ca,
                },
                Self::Shadow {
                    blur: bb,
                    offset: ob,
                    color: cb,
                },
            ) => Self::Shadow {
                blur: <Point as Lerp>::lerp(ba, bb, t),
                offset: <Point as Lerp>::lerp(oa, ob, t),
                color: Color::lerp(ca, cb, t),
            },
            _ => {
                if t < 0.5 {
                    a.clone()
                } else {
                    b.clone()
                }
            }
        }
    }
}

impl FilterStack {
    /// Reads `[{type, value}, ...]`; `None` for non-arrays.
    pub fn from_value(v: &Value) -> Option<Self> {
        let slots = v
            .as_array()?
            .iter()
            .map(|slot| {
                let kind = field_str(slot, "type").unwrap_or_default().to_string();
                let value = FilterValue::parse(&kind, field(slot, "value"));
                FilterSlot { kind, value }
            })
            .collect();
        Some(Self(slots))
    }

    pub fn sample(sample: Sample<'_>) -> Option<Self> {
        match sample {
            Sample::Value(v) => Self::from_value(v),
            Sample::Between(d) => {
                let a = Self::from_value(d.a).unwrap_or_default();
                let b = Self::from_value(d.b).unwrap_or_default();
                Some(Self::lerp(&a, &b, d.t))
            }
        }
    }

    /// Attribute updates for the primitives named by `items` (`(type, base id)`
    /// pairs, slot for slot). Empty item slots are skipped.
    pub fn writes(&self, items: &[Option<(String, String)>]) -> Vec<FilterWrite> {
        let mut out = Vec::new();
        for (item, slot) in items.iter().zip(&self.0) {
            let Some((kind, base)) = item else {
                continue;
            };
            let mut push = |id: String, name: &'static str, value: String| {
                out.push(FilterWrite { id, name, value });
            };
            match (kind.as_str(), &slot.value) {
                ("blur", FilterValue::Blur(p)) => {
                    push(base.clone(), "stdDeviation", pair(*p));
                }
                ("hue-rotate", FilterValue::HueRotate(x)) => {
                    push(base.clone(), "values", js_number(*x));
                }
                (
                    "drop-shadow" | "inner-shadow",
                    FilterValue::Shadow {
                        blur,
                        offset,
                        color,
                    },
                ) => {
                    push(format!("{base}-blur"), "stdDeviation", pair(*blur));
                    push(format!("{base}-offset"), "dx", js_number(offset.x));
                    push(format!("{base}-offset"), "dy", js_number(offset.y));
                    if kind.as_str() == "drop-shadow" {
                        push(format!("{base}-flood"), "flood-color", color.to_css());
                    } else {
                        push(format!("{base}-color-matrix"), "values", color_matrix(color));
                    }
                }
                ("blur" | "hue-rotate" | "drop-shadow" | "inner-shadow", _) => {}
                (_, FilterValue::Number(x)) => push(base.clone(), "values", js_number(*x)),
                (_, FilterValue::Raw(v)) => {
                    if let Some(s) = js_string(v) {
                        push(base.clone(), "values", s);
                    }
                }
                _ => {}
            }
        }
        out
    }
}

impl Lerp for FilterStack {
    /// Slot by slot over the shorter stack. Slots of different types switch
    /// at `t = 0.5` instead of blending.
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self(
            a.0.iter()
                .zip(&b.0)
                .map(|(sa, sb)| {
                    if sa.kind != sb.kind {
                        return if t < 0.5 { sa.clone() } else { sb.clone() };
                    }
                    FilterSlot {
                        kind: sa.kind.clone(),
                        value: FilterValue::lerp(&sa.value, &sb.value, t),
                    }
                })
                .collect(),
        )
    }
}

fn pair(p: Point) -> String {
    format!("{},{}", js_number(p.x), js_number(p.y))
}

/// 4x5 matrix flooding every pixel with `c`, alpha taken from `c.a`.
fn color_matrix(c: &Color) -> String {
    #[rustfmt::skip]
    let m = [
        0.0, 0.0, 0.0, 0.0, c.r / 255.0,
        0.0, 0.0, 0.0, 0.0, c.g / 255.0,
        0.0, 0.0, 0.0, 0.0, c.b / 255.0,
        0.0, 0.0, 0.0, c.a, 0.0,
    ];
    m.iter().map(|&x| js_number(x)).collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
#[path = "../../tests/unit/interp/filter.rs"]
mod tests;
