//! Approximate path morphing.
//!
//! Both ends are sampled at the same number of points spaced evenly by arc
//! length, and the blend is the polyline through the lerped samples. It does
//! not follow segment structure.

use std::sync::LazyLock;

use kurbo::{BezPath, ParamCurve, ParamCurveArclen, PathEl, PathSeg, Point};
use regex::Regex;

use crate::{
    animation::track::Sample,
    eval::cache::{EvictionPolicy, ResourceCache},
    foundation::math::{js_number, lerp},
};

const ARCLEN_ACCURACY: f64 = 1e-4;
const CLOSED_DISTANCE_SQ: f64 = 1e-2;

static PATH_FUNCTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)^\s*path\((?:"(.*)"|'(.*)')\)\s*$"#).expect("static pattern")
});

/// `path("...")` CSS wrappers are reduced to the bare path data.
pub fn unwrap_path_fn(s: &str) -> &str {
    PATH_FUNCTION
        .captures(s)
        .and_then(|c| c.get(1).or_else(|| c.get(2)))
        .map_or(s, |m| m.as_str())
}

#[derive(Clone, Debug, PartialEq)]
pub struct SampledPath {
    pub points: Vec<Point>,
    pub closed: bool,
}

impl SampledPath {
    /// Stand-in for path data that cannot be measured.
    pub fn fallback() -> Self {
        Self {
            points: vec![Point::ZERO],
            closed: false,
        }
    }

    pub fn sample(d: &str, samples: usize) -> Self {
        let Ok(path) = BezPath::from_svg(d) else {
            tracing::debug!(path = d, "unparsable path data, using fallback sample");
            return Self::fallback();
        };
        let segments: Vec<PathSeg> = path.segments().collect();
        if segments.is_empty() {
            let start = path.elements().iter().find_map(|el| match el {
                PathEl::MoveTo(p) => Some(*p),
                _ => None,
            });
            return match start {
                Some(p) => Self::from_points(vec![p; samples.max(1)]),
                None => Self::fallback(),
            };
        }

        let lengths: Vec<f64> = segments.iter().map(|s| s.arclen(ARCLEN_ACCURACY)).collect();
        let total: f64 = lengths.iter().sum();
        let points = (0..samples.max(1))
            .map(|i| {
                let frac = if samples <= 1 {
                    0.0
                } else {
                    i as f64 / (samples - 1) as f64
                };
                point_at_length(&segments, &lengths, total * frac)
            })
            .collect();
        Self::from_points(points)
    }

    fn from_points(points: Vec<Point>) -> Self {
        let closed = match (points.first(), points.last()) {
            (Some(first), Some(last)) if points.len() >= 2 => {
                first.distance_squared(*last) < CLOSED_DISTANCE_SQ
            }
            _ => false,
        };
        Self { points, closed }
    }
}

fn point_at_length(segments: &[PathSeg], lengths: &[f64], mut remaining: f64) -> Point {
    let last = segments.len() - 1;
    for (i, (seg, &len)) in segments.iter().zip(lengths).enumerate() {
        if remaining <= len || i == last {
            let t = seg.inv_arclen(remaining.clamp(0.0, len), ARCLEN_ACCURACY);
            return seg.eval(t);
        }
        remaining -= len;
    }
    segments[last].end()
}

/// Samples and blends path data, caching samples per distinct path.
#[derive(Debug)]
pub struct PathMorpher {
    samples: usize,
    cache: ResourceCache<SampledPath>,
}

impl PathMorpher {
    pub fn new(samples: u32) -> Self {
        Self {
            samples: samples as usize,
            cache: ResourceCache::new(EvictionPolicy::Never),
        }
    }

    pub fn samples(&self) -> usize {
        self.samples
    }

    pub fn cache(&self) -> &ResourceCache<SampledPath> {
        &self.cache
    }

    pub fn sampled(&mut self, d: &str) -> &SampledPath {
        let d = unwrap_path_fn(d);
        let key = ResourceCache::<SampledPath>::key(&[d], self.samples as u64);
        let samples = self.samples;
        self.cache
            .get_or_insert_with(key, || SampledPath::sample(d, samples))
    }

    /// Polyline between `a` and `b` at `t`, closed when both ends are.
    /// Identical ends are returned as-is.
    pub fn morph(&mut self, a: &str, b: &str, t: f64) -> String {
        let (a, b) = (unwrap_path_fn(a), unwrap_path_fn(b));
        if a == b {
            return a.to_string();
        }
        let pa = self.sampled(a).clone();
        let pb = self.sampled(b);

        let mut d = String::new();
        for (i, p) in pa.points.iter().enumerate() {
            let q = pb.points[i.min(pb.points.len() - 1)];
            let (x, y) = (lerp(p.x, q.x, t), lerp(p.y, q.y, t));
            let cmd = if i == 0 { "M" } else { " L" };
            d.push_str(&format!("{cmd} {} {}", js_number(x), js_number(y)));
        }
        if pa.closed && pb.closed {
            d.push_str(" Z");
        }
        d
    }

    /// `d` attribute for a sample: held path data is unwrapped, blended
    /// strings are morphed. Anything else is not drawn.
    pub fn sample_attr(&mut self, sample: Sample<'_>) -> Option<String> {
        match sample {
            Sample::Value(v) => v.as_str().map(|s| unwrap_path_fn(s).to_string()),
            Sample::Between(d) => Some(self.morph(d.a.as_str()?, d.b.as_str()?, d.t)),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/interp/path.rs"]
mod tests;
