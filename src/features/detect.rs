use serde_json::Value;

use crate::payload::{
    model::Payload,
    settings::{StartTrigger, TriggerOptions},
    value::{field, field_str, truthy},
};

/// Tracks scanned for easing descriptors. Reference, filter-stack and
/// transform tracks are scanned on top of these.
const EASED_TRACKS: [&str; 11] = [
    "opacity",
    "fill",
    "stroke",
    "fill-opacity",
    "stroke-opacity",
    "stroke-width",
    "stroke-dashoffset",
    "stroke-dasharray",
    "#size",
    "points",
    "d",
];

/// Which optional runtime capabilities a payload needs.
///
/// Produced once by [`detect_capabilities`] and read-only afterwards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct Capabilities {
    pub bezier: bool,
    pub transform: bool,
    pub gradients: bool,
    pub filters: bool,
    pub mask: bool,
    pub clip_path: bool,
    pub points: bool,
    pub path_d: bool,
    pub triggers_scroll: bool,
    pub triggers_hover: bool,
    pub triggers_click: bool,
    pub integrity_weights: bool,
}

impl Capabilities {
    /// Every capability enabled. Always a safe plan, just a larger one.
    pub fn all() -> Self {
        Self {
            bezier: true,
            transform: true,
            gradients: true,
            filters: true,
            mask: true,
            clip_path: true,
            points: true,
            path_d: true,
            triggers_scroll: true,
            triggers_hover: true,
            triggers_click: true,
            integrity_weights: true,
        }
    }

    /// Field-wise OR.
    pub fn union(self, other: Self) -> Self {
        Self {
            bezier: self.bezier || other.bezier,
            transform: self.transform || other.transform,
            gradients: self.gradients || other.gradients,
            filters: self.filters || other.filters,
            mask: self.mask || other.mask,
            clip_path: self.clip_path || other.clip_path,
            points: self.points || other.points,
            path_d: self.path_d || other.path_d,
            triggers_scroll: self.triggers_scroll || other.triggers_scroll,
            triggers_hover: self.triggers_hover || other.triggers_hover,
            triggers_click: self.triggers_click || other.triggers_click,
            integrity_weights: self.integrity_weights || other.integrity_weights,
        }
    }
}

/// Scans a normalized payload. Works on the raw JSON rather than the typed
/// element views so that a partially malformed property still enables its
/// module.
pub fn detect_capabilities(payload: &Payload) -> Capabilities {
    let mut caps = Capabilities::default();

    match TriggerOptions::from_value(&payload.options).start {
        StartTrigger::Scroll => caps.triggers_scroll = true,
        StartTrigger::Hover => caps.triggers_hover = true,
        StartTrigger::Click => caps.triggers_click = true,
        StartTrigger::Load => {}
    }

    for anim in &payload.animations {
        if field(&anim.settings, "w")
            .and_then(Value::as_array)
            .is_some_and(|w| !w.is_empty())
        {
            caps.integrity_weights = true;
        }

        for el in anim.elements.values() {
            if !truthy(el) {
                continue;
            }
            let present = |key: &str| field(el, key).is_some_and(truthy);

            caps.transform |= present("transform");
            caps.mask |= present("mask");
            caps.clip_path |= present("clip-path");
            caps.points |= present("points");
            caps.path_d |= present("d");
            caps.filters |= present("#filter") || present("filter");

            if !caps.bezier {
                caps.bezier = element_has_easing(el);
            }
            if !caps.gradients {
                caps.gradients = ["fill", "stroke"]
                    .iter()
                    .any(|k| field(el, k).is_some_and(has_gradient_key));
            }
        }
    }

    tracing::debug!(?caps, "detected capabilities");
    caps
}

fn element_has_easing(el: &Value) -> bool {
    let direct = EASED_TRACKS
        .iter()
        .chain(["mask", "clip-path", "filter"].iter())
        .any(|k| field(el, k).is_some_and(has_easing_key));
    if direct {
        return true;
    }
    let filter_keys = field(el, "#filter")
        .and_then(|f| field(f, "keys"))
        .is_some_and(has_easing_key);
    let transform_keys = field(el, "transform")
        .and_then(|t| field(t, "keys"))
        .and_then(Value::as_object)
        .is_some_and(|keys| keys.values().any(has_easing_key));
    filter_keys || transform_keys
}

fn has_easing_key(track: &Value) -> bool {
    track.as_array().is_some_and(|keys| {
        keys.iter().any(|k| {
            field(k, "e")
                .and_then(Value::as_array)
                .is_some_and(|e| e.len() == 4)
        })
    })
}

fn has_gradient_key(track: &Value) -> bool {
    track.as_array().is_some_and(|keys| {
        keys.iter()
            .any(|k| field(k, "v").and_then(|v| field_str(v, "t")) == Some("g"))
    })
}

#[cfg(test)]
#[path = "../../tests/unit/features/detect.rs"]
mod tests;
