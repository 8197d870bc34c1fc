use kurbo::{Affine, Point, Vec2};

use crate::{
    animation::track::{Easing, Sample, Track},
    foundation::math::{js_number, round6},
    interp::numeric::{number_sample, point_from_value, point_sample},
    payload::{
        element::TransformDef,
        value::{coerce_number, field},
    },
};

const UNIT_SCALE: Point = Point::new(1.0, 1.0);

/// Resolved transform parts at one instant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransformParts {
    pub origin: Option<Point>,
    /// Degrees.
    pub rotate: f64,
    pub scale: Point,
    pub translate: Point,
}

impl TransformParts {
    /// Keyed sub-tracks win over the static `data` fallbacks.
    pub fn evaluate(def: &TransformDef, time_ms: f64, easing: Easing) -> Self {
        let data = &def.data;
        let sample = |track| sample_track(track, time_ms, easing);
        let data_point = |key: &str, fallback: Point| {
            field(data, key).and_then(|v| point_from_value(v, fallback))
        };

        let origin = match sample(&def.origin) {
            Some(s) => Some(point_sample(s, data_point("o", Point::ZERO).unwrap_or(Point::ZERO))),
            None => data_point("o", Point::ZERO),
        };
        let rotate = match sample(&def.rotate) {
            Some(s) => number_sample(s),
            None => field(data, "r").map(coerce_number).unwrap_or(0.0),
        };
        let scale_fallback = data_point("s", UNIT_SCALE).unwrap_or(UNIT_SCALE);
        let scale = match sample(&def.scale) {
            Some(s) => point_sample(s, scale_fallback),
            None => scale_fallback,
        };
        let translate_fallback = data_point("t", Point::ZERO).unwrap_or(Point::ZERO);
        let translate = match sample(&def.translate) {
            Some(s) => point_sample(s, translate_fallback),
            None => translate_fallback,
        };

        Self {
            origin,
            rotate,
            scale,
            translate,
        }
    }

    /// `translate(origin) · rotate(deg) · scale · translate(translation)`.
    pub fn to_affine(&self) -> Affine {
        let mut m = Affine::IDENTITY;
        if let Some(o) = self.origin {
            m *= Affine::translate(Vec2::new(o.x, o.y));
        }
        if self.rotate != 0.0 {
            m *= Affine::rotate(self.rotate.to_radians());
        }
        m *= Affine::scale_non_uniform(self.scale.x, self.scale.y);
        m * Affine::translate(self.translate.to_vec2())
    }
}

pub(crate) fn sample_track(track: &Option<Track>, time_ms: f64, easing: Easing) -> Option<Sample<'_>> {
    track.as_ref()?.evaluate(time_ms, easing)
}

/// `matrix(a b c d e f)` with every coefficient rounded to 6 decimals.
pub fn matrix_attr(m: Affine) -> String {
    let c = m.as_coeffs().map(|x| js_number(round6(x)));
    format!("matrix({})", c.join(" "))
}

#[cfg(test)]
#[path = "../../tests/unit/interp/transform.rs"]
mod tests;
