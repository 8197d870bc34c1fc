use std::ops::RangeInclusive;

use crate::foundation::error::{ConvertError, ConvertResult};

/// Tuning parameters baked into the emitted runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RuntimeConfig {
    /// Arclength-uniform sample count used to approximate path morphing.
    pub morph_samples: u32,
    /// Minimum visible-area percentage that starts scroll-triggered playback.
    pub scroll_threshold: u32,
}

impl RuntimeConfig {
    pub const DEFAULT_MORPH_SAMPLES: u32 = 80;
    pub const MORPH_SAMPLES_RANGE: RangeInclusive<u32> = 16..=500;
    pub const DEFAULT_SCROLL_THRESHOLD: u32 = 25;
    pub const SCROLL_THRESHOLD_RANGE: RangeInclusive<u32> = 1..=100;

    /// Validated constructor; the core never clamps on its own.
    pub fn new(morph_samples: u32, scroll_threshold: u32) -> ConvertResult<Self> {
        if !Self::MORPH_SAMPLES_RANGE.contains(&morph_samples) {
            return Err(ConvertError::config(format!(
                "morph samples {morph_samples} outside {:?}",
                Self::MORPH_SAMPLES_RANGE
            )));
        }
        if !Self::SCROLL_THRESHOLD_RANGE.contains(&scroll_threshold) {
            return Err(ConvertError::config(format!(
                "scroll threshold {scroll_threshold} outside {:?}",
                Self::SCROLL_THRESHOLD_RANGE
            )));
        }
        Ok(Self {
            morph_samples,
            scroll_threshold,
        })
    }

    /// Command-line behavior: absent values take the default, the rest are clamped into range.
    pub fn clamped(morph_samples: Option<i64>, scroll_threshold: Option<i64>) -> Self {
        fn clamp(v: Option<i64>, default: u32, range: &RangeInclusive<u32>) -> u32 {
            match v {
                None => default,
                Some(v) => v.clamp(i64::from(*range.start()), i64::from(*range.end())) as u32,
            }
        }

        Self {
            morph_samples: clamp(
                morph_samples,
                Self::DEFAULT_MORPH_SAMPLES,
                &Self::MORPH_SAMPLES_RANGE,
            ),
            scroll_threshold: clamp(
                scroll_threshold,
                Self::DEFAULT_SCROLL_THRESHOLD,
                &Self::SCROLL_THRESHOLD_RANGE,
            ),
        }
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            morph_samples: Self::DEFAULT_MORPH_SAMPLES,
            scroll_threshold: Self::DEFAULT_SCROLL_THRESHOLD,
        }
    }
}

/// Options record handed to [`crate::convert`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ConvertOptions {
    /// Keep the authoring tool's UI decoration instead of stripping it.
    pub keep_ui: bool,
    /// Minify the runtime before embedding it.
    pub minify: bool,
    pub runtime: RuntimeConfig,
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/config.rs"]
mod tests;
