use serde_json::Value;

use crate::{
    animation::track::Sample,
    interp::{Color, Gradient, GradientStop, Lerp},
    payload::value::{field, field_str},
};

/// Fill or stroke value.
#[derive(Clone, Debug, PartialEq)]
pub enum Paint {
    /// Literal attribute text (`none`, `url(#x)`, named colors).
    Raw(String),
    Solid(Color),
    Gradient(Gradient),
    /// Anything else; never written.
    Unknown,
}

impl Paint {
    pub fn from_value(v: &Value) -> Self {
        if let Some(s) = v.as_str() {
            return Self::Raw(s.to_string());
        }
        match field_str(v, "t") {
            Some("c") => field(v, "v")
                .and_then(Color::from_value)
                .map_or(Self::Unknown, Self::Solid),
            Some("g") => Gradient::from_value(v).map_or(Self::Unknown, Self::Gradient),
            _ => Self::Unknown,
        }
    }

    pub fn sample(sample: Sample<'_>) -> Self {
        match sample {
            Sample::Value(v) => Self::from_value(v),
            Sample::Between(d) => {
                Self::lerp(&Self::from_value(d.a), &Self::from_value(d.b), d.t)
            }
        }
    }

    pub fn to_attr(&self) -> Option<String> {
        match self {
            Self::Raw(s) => Some(s.clone()),
            Self::Solid(c) => Some(c.to_css()),
            Self::Gradient(g) => g.to_attr(),
            Self::Unknown => None,
        }
    }

    pub fn gradient(&self) -> Option<&Gradient> {
        match self {
            Self::Gradient(g) => Some(g),
            _ => None,
        }
    }
}

/// Copy of `grad` with every stop recolored, reference and geometry kept.
fn tint(grad: &Gradient, stop_color: impl Fn(&GradientStop) -> Color) -> Gradient {
    Gradient {
        stops: grad
            .stops
            .iter()
            .map(|s| GradientStop {
                offset: s.offset,
                color: stop_color(s),
            })
            .collect(),
        ..grad.clone()
    }
}

impl Lerp for Paint {
    /// Solid pairs blend; gradient pairs blend only when they drive the same
    /// element. Solid against gradient tints the gradient's stops. Everything
    /// else, raw strings included, switches at `t = 0.5`.
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        match (a, b) {
            (Self::Solid(ca), Self::Solid(cb)) => Self::Solid(Color::lerp(ca, cb, t)),
            (Self::Gradient(ga), Self::Gradient(gb)) if ga.reference == gb.reference => {
                Self::Gradient(Gradient::lerp(ga, gb, t))
            }
            (Self::Solid(c), Self::Gradient(g)) => {
                Self::Gradient(tint(g, |s| Color::lerp(c, &s.color, t)))
            }
            (Self::Gradient(g), Self::Solid(c)) => {
                Self::Gradient(tint(g, |s| Color::lerp(&s.color, c, t)))
            }
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

#[cfg(test)]
#[path = "../../tests/unit/interp/paint.rs"]
mod tests;
