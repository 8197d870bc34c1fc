use kurbo::Point;

use crate::{
    animation::track::{Easing, Sample},
    compile::modules::{ModulePlan, RuntimeModule},
    eval::cache::ResourceCache,
    foundation::{config::RuntimeConfig, math::js_number},
    interp::{
        FilterStack, Gradient, NumberArray, Paint, PathMorpher, PointList,
        numeric::{number_attr, size_sample},
        transform::{TransformParts, matrix_attr, sample_track},
    },
    payload::{
        element::{ElementDefinition, NUMERIC_PROPERTIES, REFERENCE_PROPERTIES},
        value::js_string,
    },
};

/// What an attribute write lands on.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WriteTarget {
    /// Element addressed by id: animated elements, gradient elements and
    /// filter primitives alike.
    Element { id: String },
    /// The `index`-th `<stop>` child of a gradient element.
    GradientStop { gradient: String, index: usize },
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct AttrWrite {
    pub target: WriteTarget,
    pub name: String,
    pub value: String,
}

impl AttrWrite {
    fn element(id: &str, name: impl Into<String>, value: String) -> Self {
        Self {
            target: WriteTarget::Element { id: id.to_string() },
            name: name.into(),
            value,
        }
    }
}

#[derive(Clone, Debug, serde::Serialize)]
pub struct EvaluatedFrame {
    pub time_ms: f64,
    pub writes: Vec<AttrWrite>,
}

impl EvaluatedFrame {
    /// Last value written to `name` on element `id`.
    pub fn attr(&self, id: &str, name: &str) -> Option<&str> {
        self.writes
            .iter()
            .rev()
            .find(|w| {
                w.name == name && matches!(&w.target, WriteTarget::Element { id: t } if t == id)
            })
            .map(|w| w.value.as_str())
    }
}

/// Host-side model of one draw pass of the emitted runtime.
///
/// Produces the same attribute writes the runtime performs for a local
/// timeline position, honoring the module plan: properties whose module is
/// not compiled in are never drawn, and easing is ignored without the bezier
/// module.
#[derive(Debug)]
pub struct FrameEvaluator {
    plan: ModulePlan,
    easing: Easing,
    morpher: PathMorpher,
    /// Highest stop count written per gradient element. Stops are only ever
    /// added to the document, so this never shrinks.
    gradient_stops: ResourceCache<usize>,
}

impl FrameEvaluator {
    pub fn new(plan: ModulePlan, config: &RuntimeConfig) -> Self {
        Self {
            plan,
            easing: plan.easing(),
            morpher: PathMorpher::new(config.morph_samples),
            gradient_stops: ResourceCache::default(),
        }
    }

    pub fn plan(&self) -> ModulePlan {
        self.plan
    }

    pub fn morpher(&self) -> &PathMorpher {
        &self.morpher
    }

    /// Stop count the gradient element `reference` has grown to, if it was
    /// ever written.
    pub fn gradient_stops(&self, reference: &str) -> Option<usize> {
        self.gradient_stops
            .get(ResourceCache::<usize>::key(&[reference], 0))
            .copied()
    }

    #[tracing::instrument(skip(self, elements), fields(elements = elements.len()))]
    pub fn eval_frame(
        &mut self,
        elements: &[(String, ElementDefinition)],
        time_ms: f64,
    ) -> EvaluatedFrame {
        let mut writes = Vec::new();
        for (id, def) in elements {
            self.eval_element(id, def, time_ms, &mut writes);
        }
        EvaluatedFrame { time_ms, writes }
    }

    fn eval_element(
        &mut self,
        id: &str,
        def: &ElementDefinition,
        time_ms: f64,
        out: &mut Vec<AttrWrite>,
    ) {
        let easing = self.easing;
        let sample = |track| sample_track(track, time_ms, easing);

        for (name, track) in NUMERIC_PROPERTIES.iter().zip(&def.numeric) {
            if let Some(value) = sample(track).and_then(number_attr) {
                out.push(AttrWrite::element(id, *name, value));
            }
        }

        if let Some(arr) = sample(&def.dasharray).and_then(NumberArray::sample) {
            out.push(AttrWrite::element(id, "stroke-dasharray", arr.to_attr()));
        }

        if let Some(size) = sample(&def.size).and_then(size_sample) {
            out.push(AttrWrite::element(id, "width", js_number(size.width)));
            out.push(AttrWrite::element(id, "height", js_number(size.height)));
        }

        for (name, track) in [("fill", &def.fill), ("stroke", &def.stroke)] {
            let Some(s) = sample(track) else { continue };
            let paint = Paint::sample(s);
            if let Some(value) = paint.to_attr() {
                out.push(AttrWrite::element(id, name, value));
            }
            if let Some(grad) = paint.gradient()
                && self.plan.contains(RuntimeModule::Gradient)
            {
                self.apply_gradient(grad, out);
            }
        }

        for (name, track) in REFERENCE_PROPERTIES.iter().zip(&def.references) {
            let held = match sample(track) {
                Some(Sample::Value(v)) => v,
                Some(Sample::Between(d)) => {
                    if d.t < 0.5 {
                        d.a
                    } else {
                        d.b
                    }
                }
                None => continue,
            };
            if let Some(value) = js_string(held) {
                out.push(AttrWrite::element(id, *name, value));
            }
        }

        if self.plan.contains(RuntimeModule::Filter)
            && let Some(filter) = &def.filter_stack
            && let Some(stack) = filter
                .keys
                .evaluate(time_ms, easing)
                .and_then(FilterStack::sample)
        {
            out.extend(
                stack
                    .writes(&filter.items)
                    .into_iter()
                    .map(|w| AttrWrite::element(&w.id, w.name, w.value)),
            );
        }

        if self.plan.contains(RuntimeModule::Points)
            && let Some(value) = sample(&def.points).and_then(PointList::sample_attr)
        {
            out.push(AttrWrite::element(id, "points", value));
        }

        if let Some(s) = sample(&def.path) {
            let value = match s {
                Sample::Value(_) => self.morpher.sample_attr(s),
                Sample::Between(_) if self.plan.contains(RuntimeModule::PathMorph) => {
                    self.morpher.sample_attr(s)
                }
                Sample::Between(_) => None,
            };
            if let Some(value) = value {
                out.push(AttrWrite::element(id, "d", value));
            }
        }

        if self.plan.contains(RuntimeModule::Transform)
            && let Some(def) = &def.transform
        {
            let parts = TransformParts::evaluate(def, time_ms, easing);
            out.push(AttrWrite::element(
                id,
                "transform",
                matrix_attr(parts.to_affine()),
            ));
        }
    }

    fn apply_gradient(&mut self, grad: &Gradient, out: &mut Vec<AttrWrite>) {
        let reference = grad.reference.as_str();
        if reference.is_empty() {
            return;
        }

        if !grad.stops.is_empty() {
            let key = ResourceCache::<usize>::key(&[reference], 0);
            let grown = self.gradient_stops.get_or_insert_with(key, || 0);
            *grown = (*grown).max(grad.stops.len());
            for (index, stop) in grad.stops.iter().enumerate() {
                let target = || WriteTarget::GradientStop {
                    gradient: reference.to_string(),
                    index,
                };
                out.push(AttrWrite {
                    target: target(),
                    name: "stop-color".to_string(),
                    value: stop.color.to_css(),
                });
                out.push(AttrWrite {
                    target: target(),
                    name: "offset".to_string(),
                    value: js_number(stop.offset),
                });
            }
        }

        if let Some(m) = grad.transform {
            let coeffs = m.map(js_number);
            out.push(AttrWrite::element(
                reference,
                "gradientTransform",
                format!("matrix({})", coeffs.join(" ")),
            ));
        }
        let mut point = |p: Option<Point>, x: &str, y: &str| {
            if let Some(p) = p {
                out.push(AttrWrite::element(reference, x, js_number(p.x)));
                out.push(AttrWrite::element(reference, y, js_number(p.y)));
            }
        };
        point(grad.center, "cx", "cy");
        point(grad.from, "x1", "y1");
        point(grad.to, "x2", "y2");
        if let Some(r) = grad.radius {
            out.push(AttrWrite::element(reference, "r", js_number(r)));
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/eval/frame.rs"]
mod tests;
