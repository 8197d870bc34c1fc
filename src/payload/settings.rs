use serde_json::Value;

use crate::payload::value::{coerce_number, field, field_number, field_str, truthy};

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Normal,
    Reverse,
}

impl Direction {
    pub fn flipped(self) -> Self {
        match self {
            Self::Normal => Self::Reverse,
            Self::Reverse => Self::Normal,
        }
    }
}

/// Resting behavior once a finite animation ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FillMode {
    /// Hold the cycle end (encoded as anything but `-1`).
    Forwards,
    /// Hold the cycle start (encoded as `-1`).
    Backwards,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Iterations {
    Infinite,
    Count(f64),
}

impl Iterations {
    pub fn is_infinite(self) -> bool {
        matches!(self, Self::Infinite)
    }
}

/// Decoded per-animation settings (`s`).
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct PlaybackSettings {
    pub duration: f64,
    /// Frames-per-second cap, `0` for uncapped.
    pub fps: f64,
    pub iterations: Iterations,
    pub alternate: bool,
    pub direction: Direction,
    pub fill: FillMode,
    pub speed: f64,
    /// Auxiliary weighting array; forwarded untouched.
    pub weights: Vec<Value>,
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self {
            duration: 0.0,
            fps: 0.0,
            iterations: Iterations::Count(1.0),
            alternate: false,
            direction: Direction::Normal,
            fill: FillMode::Forwards,
            speed: 1.0,
            weights: Vec::new(),
        }
    }
}

impl PlaybackSettings {
    pub fn from_value(s: &Value) -> Self {
        let iterations = match field_number(s, "iterations") {
            Some(n) if n == 0.0 => Iterations::Infinite,
            Some(n) if n > 0.0 => Iterations::Count(n),
            _ => Iterations::Count(1.0),
        };
        Self {
            duration: field(s, "duration").map(coerce_number).unwrap_or(0.0),
            fps: field_number(s, "fps").unwrap_or(0.0),
            iterations,
            alternate: field(s, "alternate").is_some_and(truthy),
            direction: if field_number(s, "direction") == Some(-1.0) {
                Direction::Reverse
            } else {
                Direction::Normal
            },
            fill: if field_number(s, "fill") == Some(-1.0) {
                FillMode::Backwards
            } else {
                FillMode::Forwards
            },
            speed: field_number(s, "speed").unwrap_or(1.0),
            weights: field(s, "w")
                .and_then(Value::as_array)
                .cloned()
                .unwrap_or_default(),
        }
    }

    /// Length of the whole playback in speed-scaled ms; one cycle when infinite.
    pub fn seekable_span(&self, duration: f64) -> f64 {
        match self.iterations {
            Iterations::Infinite => duration,
            Iterations::Count(n) => n * duration,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StartTrigger {
    Load,
    Click,
    Hover,
    Scroll,
}

/// What leaving the root element does under the hover trigger.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HoverLeave {
    Freeze,
    Reset,
    Reverse,
}

/// Decoded player options.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct TriggerOptions {
    pub start: StartTrigger,
    pub hover: HoverLeave,
    /// Per-document scroll threshold override, in percent.
    pub scroll: Option<f64>,
}

impl TriggerOptions {
    pub fn from_value(options: &Value) -> Self {
        let start = match field_str(options, "start") {
            Some("click") => StartTrigger::Click,
            Some("hover") => StartTrigger::Hover,
            Some("scroll") => StartTrigger::Scroll,
            _ => StartTrigger::Load,
        };
        let hover = match field_str(options, "hover") {
            Some("reset") => HoverLeave::Reset,
            Some("reverse") => HoverLeave::Reverse,
            _ => HoverLeave::Freeze,
        };
        let scroll = field(options, "scroll")
            .filter(|v| truthy(v))
            .map(coerce_number);
        Self {
            start,
            hover,
            scroll,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/payload/settings.rs"]
mod tests;
