//! Host-side evaluation of the animation: the draw pass the emitted runtime
//! performs, reproduced so conversions can be inspected and tested without a
//! browser.

pub mod cache;
pub mod frame;

pub use cache::{CacheStats, EvictionPolicy, ResourceCache};
pub use frame::{AttrWrite, EvaluatedFrame, FrameEvaluator, WriteTarget};
