use serde_json::Value;

use crate::{animation::ease::CubicBezier, payload::value::field};

/// "Interpolate from `a` to `b` at local parameter `t`".
///
/// The one contract between track evaluation and every typed interpolator.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Interp<T> {
    pub a: T,
    pub b: T,
    pub t: f64,
}

impl<T> Interp<T> {
    pub fn new(a: T, b: T, t: f64) -> Self {
        Self { a, b, t }
    }

    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Interp<U> {
        Interp {
            a: f(self.a),
            b: f(self.b),
            t: self.t,
        }
    }
}

/// Result of evaluating a track at one instant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Sample<'a> {
    /// Outside the keyed range, or a single-key track.
    Value(&'a Value),
    Between(Interp<&'a Value>),
}

/// How keyframe easing is honored; fixed once per compiled runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Easing {
    Bezier,
    Linear,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Keyframe {
    /// Milliseconds.
    pub time: f64,
    pub value: Value,
    /// Governs the span into the next keyframe.
    pub ease: Option<CubicBezier>,
}

/// Keyframes of one property, times non-decreasing.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Track {
    keys: Vec<Keyframe>,
}

impl Track {
    pub fn new(keys: Vec<Keyframe>) -> Self {
        Self { keys }
    }

    /// Reads `[{t, v, e?}, ...]`. Entries without a numeric `t` are skipped;
    /// anything that is not an array is not a track.
    pub fn from_value(v: &Value) -> Option<Self> {
        let items = v.as_array()?;
        let keys = items
            .iter()
            .filter_map(|k| {
                let time = field(k, "t")?.as_f64()?;
                Some(Keyframe {
                    time,
                    value: field(k, "v").cloned().unwrap_or(Value::Null),
                    ease: field(k, "e").and_then(CubicBezier::from_value),
                })
            })
            .collect();
        Some(Self { keys })
    }

    pub fn keys(&self) -> &[Keyframe] {
        &self.keys
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn max_time(&self) -> f64 {
        self.keys.iter().map(|k| k.time).fold(0.0, f64::max)
    }

    pub fn has_easing(&self) -> bool {
        self.keys.iter().any(|k| k.ease.is_some())
    }

    pub fn evaluate(&self, time_ms: f64, easing: Easing) -> Option<Sample<'_>> {
        let first = self.keys.first()?;
        let last = self.keys.last()?;
        if time_ms <= first.time {
            return Some(Sample::Value(&first.value));
        }
        if time_ms >= last.time {
            return Some(Sample::Value(&last.value));
        }

        let idx = self.keys.partition_point(|k| k.time < time_ms).max(1);
        let a = &self.keys[idx - 1];
        let b = &self.keys[idx];
        let span = b.time - a.time;
        let mut t = if span <= 0.0 {
            1.0
        } else {
            (time_ms - a.time) / span
        };
        if let (Easing::Bezier, Some(curve)) = (easing, a.ease) {
            t = curve.apply(t);
        }
        Some(Sample::Between(Interp::new(&a.value, &b.value, t)))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/track.rs"]
mod tests;
