use serde_json::Value;

use crate::{
    animation::track::Track,
    payload::value::{field, truthy},
};

/// Scalar properties written straight through as attributes, with their payload keys.
pub const NUMERIC_PROPERTIES: [&str; 5] = [
    "opacity",
    "fill-opacity",
    "stroke-opacity",
    "stroke-width",
    "stroke-dashoffset",
];

/// Reference properties switched discretely.
pub const REFERENCE_PROPERTIES: [&str; 3] = ["mask", "clip-path", "filter"];

/// Typed view over one element's animated properties.
///
/// A property whose payload shape is wrong is simply absent here, so it is
/// never drawn.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ElementDefinition {
    /// Indexed like [`NUMERIC_PROPERTIES`].
    pub numeric: [Option<Track>; 5],
    pub dasharray: Option<Track>,
    pub size: Option<Track>,
    pub fill: Option<Track>,
    pub stroke: Option<Track>,
    /// Indexed like [`REFERENCE_PROPERTIES`].
    pub references: [Option<Track>; 3],
    pub filter_stack: Option<FilterStackDef>,
    pub points: Option<Track>,
    pub path: Option<Track>,
    pub transform: Option<TransformDef>,
}

/// `#filter`: the primitives to drive plus the keyed stack values.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FilterStackDef {
    /// `(type, base element id)` per slot; malformed entries keep their slot.
    pub items: Vec<Option<(String, String)>>,
    pub keys: Track,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TransformDef {
    /// Static fallbacks (`data`): origin, rotation, scale, translation.
    pub data: Value,
    pub origin: Option<Track>,
    pub rotate: Option<Track>,
    pub scale: Option<Track>,
    pub translate: Option<Track>,
}

impl ElementDefinition {
    pub fn from_value(v: &Value) -> Self {
        let track = |key: &str| field(v, key).and_then(Track::from_value);
        Self {
            numeric: NUMERIC_PROPERTIES.map(track),
            dasharray: track("stroke-dasharray"),
            size: track("#size"),
            fill: track("fill"),
            stroke: track("stroke"),
            references: REFERENCE_PROPERTIES.map(track),
            filter_stack: field(v, "#filter").and_then(FilterStackDef::from_value),
            points: track("points"),
            path: track("d"),
            transform: field(v, "transform")
                .filter(|t| truthy(t))
                .map(TransformDef::from_value),
        }
    }

    /// Every track of the element, sub-tracks included.
    pub fn tracks(&self) -> impl Iterator<Item = &Track> {
        let transform = self.transform.iter().flat_map(|t| {
            [&t.origin, &t.rotate, &t.scale, &t.translate]
                .into_iter()
                .flatten()
        });
        self.numeric
            .iter()
            .chain([
                &self.dasharray,
                &self.size,
                &self.fill,
                &self.stroke,
                &self.points,
                &self.path,
            ])
            .chain(self.references.iter())
            .flatten()
            .chain(self.filter_stack.iter().map(|f| &f.keys))
            .chain(transform)
    }

    pub fn max_key_time(&self) -> f64 {
        self.tracks().map(Track::max_time).fold(0.0, f64::max)
    }
}

impl FilterStackDef {
    /// Needs both `data` and `keys`, like the runtime does.
    pub fn from_value(v: &Value) -> Option<Self> {
        let data = field(v, "data")?;
        let keys = Track::from_value(field(v, "keys")?)?;
        let items = field(data, "items")
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .map(|item| {
                        let pair = item.as_array()?;
                        let kind = pair.first()?.as_str()?;
                        let base = pair.get(1)?.as_str()?;
                        Some((kind.to_string(), base.to_string()))
                    })
                    .collect()
            })
            .unwrap_or_default();
        Some(Self { items, keys })
    }
}

impl TransformDef {
    pub fn from_value(v: &Value) -> Self {
        let keys = field(v, "keys");
        let key = |k: &str| keys.and_then(|keys| field(keys, k)).and_then(Track::from_value);
        Self {
            data: field(v, "data").cloned().unwrap_or(Value::Null),
            origin: key("o"),
            rotate: key("r"),
            scale: key("s"),
            translate: key("t"),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/payload/element.rs"]
mod tests;
