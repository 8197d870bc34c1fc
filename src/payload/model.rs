use std::collections::{BTreeMap, BTreeSet};

use serde_json::{Map, Value};

use crate::{
    foundation::error::{ConvertError, ConvertResult},
    payload::{element::ElementDefinition, settings::PlaybackSettings},
};

/// Root of the animation description passed to the player call.
///
/// Only the fields the converter reads are typed; everything else rides along
/// in `extra` so the embedded copy stays complete. Maps are ordered, which
/// keeps the serialized form stable across runs.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Payload {
    /// Id of the root `<svg>` element. Second decoding key.
    #[serde(default)]
    pub root: String,
    /// Trigger configuration. Possibly still encoded.
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub options: Value,
    #[serde(default)]
    pub animations: Vec<Animation>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Animation {
    /// Playback settings. Possibly still encoded.
    #[serde(rename = "s", default, skip_serializing_if = "Value::is_null")]
    pub settings: Value,
    #[serde(default)]
    pub elements: BTreeMap<String, Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Payload {
    pub fn from_json(text: &str) -> ConvertResult<Self> {
        serde_json::from_str(text)
            .map_err(|e| ConvertError::payload(format!("payload literal is not valid JSON: {e}")))
    }

    pub fn to_json(&self) -> ConvertResult<String> {
        serde_json::to_string(self).map_err(|e| ConvertError::serde(e.to_string()))
    }

    /// Drops the given element ids from every animation.
    pub fn prune_elements(&mut self, removed: &BTreeSet<String>) -> usize {
        if removed.is_empty() {
            return 0;
        }
        let mut pruned = 0;
        for anim in &mut self.animations {
            let before = anim.elements.len();
            anim.elements.retain(|id, _| !removed.contains(id));
            pruned += before - anim.elements.len();
        }
        pruned
    }

    pub fn element_count(&self) -> usize {
        self.animations.iter().map(|a| a.elements.len()).sum()
    }
}

impl Animation {
    pub fn playback_settings(&self) -> PlaybackSettings {
        PlaybackSettings::from_value(&self.settings)
    }

    /// Typed views of every element, in id order. Malformed definitions come
    /// back with the offending properties missing.
    pub fn element_definitions(&self) -> Vec<(String, ElementDefinition)> {
        self.elements
            .iter()
            .map(|(id, v)| (id.clone(), ElementDefinition::from_value(v)))
            .collect()
    }

    /// Cycle length: the declared duration or the last keyframe, whichever is later.
    pub fn duration(&self) -> f64 {
        let declared = self.playback_settings().duration;
        self.elements
            .values()
            .map(|v| ElementDefinition::from_value(v).max_key_time())
            .fold(declared, f64::max)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/payload/model.rs"]
mod tests;
