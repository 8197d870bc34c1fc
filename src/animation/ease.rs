use serde_json::Value;

/// CSS-style cubic-bezier timing curve through (0,0), (x1,y1), (x2,y2), (1,1).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CubicBezier {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl CubicBezier {
    const ITERATIONS: usize = 32;
    const TOLERANCE: f64 = 1e-5;

    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Reads a keyframe's `e` field: exactly four numbers.
    pub fn from_value(v: &Value) -> Option<Self> {
        let arr = v.as_array()?;
        if arr.len() != 4 {
            return None;
        }
        let mut c = [0.0; 4];
        for (slot, item) in c.iter_mut().zip(arr) {
            *slot = item.as_f64()?;
        }
        Some(Self::new(c[0], c[1], c[2], c[3]))
    }

    /// Eased progress for linear progress `t`; x is inverted by bisection.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        let mut lo = 0.0;
        let mut hi = 1.0;
        let mut mid = 0.0;
        for _ in 0..Self::ITERATIONS {
            mid = (lo + hi) / 2.0;
            let x = bezier(0.0, self.x1, self.x2, 1.0, mid);
            if (x - t).abs() < Self::TOLERANCE {
                break;
            }
            if x < t {
                lo = mid;
            } else {
                hi = mid;
            }
        }
        bezier(0.0, self.y1, self.y2, 1.0, mid)
    }
}

fn bezier(p0: f64, p1: f64, p2: f64, p3: f64, t: f64) -> f64 {
    let u = 1.0 - t;
    u * u * u * p0 + 3.0 * u * u * t * p1 + 3.0 * u * t * t * p2 + t * t * t * p3
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
