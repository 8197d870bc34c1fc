//! Typed interpolation rules, one per property family.
//!
//! Every rule consumes the same [`Interp`](crate::animation::track::Interp)
//! descriptor produced by track evaluation.

pub mod color;
pub mod filter;
pub mod gradient;
pub mod numeric;
pub mod paint;
pub mod path;
pub mod points;
pub mod transform;

pub trait Lerp: Sized {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

pub use color::Color;
pub use filter::{FilterSlot, FilterStack, FilterValue};
pub use gradient::{Gradient, GradientStop};
pub use numeric::NumberArray;
pub use paint::Paint;
pub use path::{PathMorpher, SampledPath};
pub use points::PointList;
