use crate::{
    compile::{
        modules::{ModulePlan, RuntimeModule},
        template::{
            CoreVars, DrawVars, MorphVars, PaintVars, PathDrawVars, PlayerVars, sources,
        },
    },
    features::detect::Capabilities,
    foundation::{config::RuntimeConfig, error::ConvertResult},
    payload::model::Payload,
};

/// Emitted runtime plus the plan it was built from.
#[derive(Clone, Debug, serde::Serialize)]
pub struct RuntimeUnit {
    pub code: String,
    pub plan: ModulePlan,
}

/// Builds the self-contained runtime script embedded into the document.
///
/// Output is a pure function of the payload, the capabilities and the
/// configuration: module order is fixed and the payload serializes with
/// ordered maps.
#[derive(Clone, Copy, Debug, Default)]
pub struct RuntimeCompiler {
    config: RuntimeConfig,
}

impl RuntimeCompiler {
    pub fn new(config: RuntimeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    #[tracing::instrument(skip_all, fields(animations = payload.animations.len()))]
    pub fn compile(&self, payload: &Payload, caps: &Capabilities) -> ConvertResult<RuntimeUnit> {
        let plan = ModulePlan::from(caps);
        let json = embed_json(&payload.to_json()?);

        let mut code = String::with_capacity(json.len() + 16 * 1024);
        code.push_str("(()=>{\"use strict\";\nconst payload=");
        code.push_str(&json);
        code.push_str(";\n");
        for module in plan.modules() {
            code.push_str(&self.module_source(module, plan));
            code.push('\n');
        }
        code.push_str("})();\n");

        tracing::debug!(
            modules = ?plan.modules().map(RuntimeModule::name).collect::<Vec<_>>(),
            bytes = code.len(),
            "runtime assembled"
        );
        Ok(RuntimeUnit { code, plan })
    }

    fn module_source(&self, module: RuntimeModule, plan: ModulePlan) -> String {
        let has = |m| plan.contains(m);
        match module {
            RuntimeModule::Core => sources::CORE.render(&CoreVars {
                scroll_threshold: self.config.scroll_threshold,
            }),
            RuntimeModule::Bezier => sources::BEZIER.render(&()),
            RuntimeModule::Transform => sources::TRANSFORM.render(&()),
            RuntimeModule::Paint => sources::PAINT.render(&PaintVars {
                gradient_blend: if has(RuntimeModule::Gradient) {
                    sources::PAINT_BLEND.content()
                } else {
                    ""
                },
            }),
            RuntimeModule::Gradient => sources::GRADIENT.render(&()),
            RuntimeModule::Filter => sources::FILTER.render(&()),
            RuntimeModule::Points => sources::POINTS.render(&()),
            RuntimeModule::PathMorph => sources::PATH_MORPH.render(&MorphVars {
                samples: self.config.morph_samples,
            }),
            RuntimeModule::Player => sources::PLAYER.render(&PlayerVars {
                ease: if has(RuntimeModule::Bezier) {
                    "applyBezier"
                } else {
                    "null"
                },
                scroll_threshold: self.config.scroll_threshold,
                draw: &draw_body(plan),
            }),
        }
    }
}

/// Per-element draw statements for the compiled modules only.
fn draw_body(plan: ModulePlan) -> String {
    use sources::draw;

    let has = |m| plan.contains(m);
    let mut body = draw::BASE.render(&DrawVars {
        apply_gradient: if has(RuntimeModule::Gradient) {
            draw::GRADIENT.content()
        } else {
            ""
        },
    });
    if has(RuntimeModule::Filter) {
        body.push_str(draw::FILTER.content());
    }
    if has(RuntimeModule::Points) {
        body.push_str(draw::POINTS.content());
    }
    body.push_str(&draw::PATH.render(&PathDrawVars {
        morph: if has(RuntimeModule::PathMorph) {
            draw::PATH_MORPH.content()
        } else {
            ""
        },
    }));
    if has(RuntimeModule::Transform) {
        body.push_str(draw::TRANSFORM.content());
    }
    body
}

/// JSON is valid JS, but not inside a script element: `</` could close it and
/// U+2028/U+2029 break older engines.
fn embed_json(json: &str) -> String {
    json.replace("</", "<\\/")
        .replace('\u{2028}', "\\u2028")
        .replace('\u{2029}', "\\u2029")
}

#[cfg(test)]
#[path = "../../tests/unit/compile/assemble.rs"]
mod tests;
