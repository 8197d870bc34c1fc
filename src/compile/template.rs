//! Typed placeholder injection into the embedded runtime sources.

use std::marker::PhantomData;

/// A set of `__NAME__` substitutions for one template.
pub trait TemplateVars {
    fn apply(&self, content: &str) -> String;
}

/// Placeholder-free source, emitted verbatim.
impl TemplateVars for () {
    fn apply(&self, content: &str) -> String {
        content.to_string()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Template<V> {
    content: &'static str,
    _marker: PhantomData<V>,
}

impl<V> Template<V> {
    pub const fn new(content: &'static str) -> Self {
        Self {
            content,
            _marker: PhantomData,
        }
    }

    pub const fn content(&self) -> &'static str {
        self.content
    }
}

impl<V: TemplateVars> Template<V> {
    pub fn render(&self, vars: &V) -> String {
        vars.apply(self.content)
    }
}

pub struct CoreVars {
    pub scroll_threshold: u32,
}

impl TemplateVars for CoreVars {
    fn apply(&self, content: &str) -> String {
        content.replace("__SCROLL_THRESHOLD__", &self.scroll_threshold.to_string())
    }
}

pub struct PaintVars<'a> {
    /// Gradient-pair blending, empty when gradients are not compiled in.
    pub gradient_blend: &'a str,
}

impl TemplateVars for PaintVars<'_> {
    fn apply(&self, content: &str) -> String {
        content.replace("__GRADIENT_BLEND__\n", self.gradient_blend)
    }
}

pub struct MorphVars {
    pub samples: u32,
}

impl TemplateVars for MorphVars {
    fn apply(&self, content: &str) -> String {
        content.replace("__MORPH_SAMPLES__", &self.samples.to_string())
    }
}

pub struct DrawVars<'a> {
    pub apply_gradient: &'a str,
}

impl TemplateVars for DrawVars<'_> {
    fn apply(&self, content: &str) -> String {
        content.replace("__APPLY_GRADIENT__\n", self.apply_gradient)
    }
}

pub struct PathDrawVars<'a> {
    pub morph: &'a str,
}

impl TemplateVars for PathDrawVars<'_> {
    fn apply(&self, content: &str) -> String {
        content.replace("__PATH_MORPH__\n", self.morph)
    }
}

pub struct PlayerVars<'a> {
    /// Easing function reference, or `null` when easing is ignored.
    pub ease: &'a str,
    pub scroll_threshold: u32,
    /// Per-element draw statements.
    pub draw: &'a str,
}

impl TemplateVars for PlayerVars<'_> {
    fn apply(&self, content: &str) -> String {
        content
            .replace("__EASE__", self.ease)
            .replace("__SCROLL_THRESHOLD__", &self.scroll_threshold.to_string())
            .replace("__DRAW__\n", self.draw)
    }
}

pub mod sources {
    use super::*;

    pub const CORE: Template<CoreVars> = Template::new(include_str!("js/core.js"));
    pub const BEZIER: Template<()> = Template::new(include_str!("js/bezier.js"));
    pub const TRANSFORM: Template<()> = Template::new(include_str!("js/transform.js"));
    pub const PAINT: Template<PaintVars<'static>> = Template::new(include_str!("js/paint.js"));
    pub const PAINT_BLEND: Template<()> = Template::new(include_str!("js/paint_blend.js"));
    pub const GRADIENT: Template<()> = Template::new(include_str!("js/gradient.js"));
    pub const FILTER: Template<()> = Template::new(include_str!("js/filter.js"));
    pub const POINTS: Template<()> = Template::new(include_str!("js/points.js"));
    pub const PATH_MORPH: Template<MorphVars> = Template::new(include_str!("js/path_morph.js"));
    pub const PLAYER: Template<PlayerVars<'static>> = Template::new(include_str!("js/player.js"));

    pub mod draw {
        use super::*;

        pub const BASE: Template<DrawVars<'static>> = Template::new(include_str!("js/draw/base.js"));
        pub const GRADIENT: Template<()> = Template::new(include_str!("js/draw/gradient.js"));
        pub const FILTER: Template<()> = Template::new(include_str!("js/draw/filter.js"));
        pub const POINTS: Template<()> = Template::new(include_str!("js/draw/points.js"));
        pub const PATH: Template<PathDrawVars<'static>> = Template::new(include_str!("js/draw/path.js"));
        pub const PATH_MORPH: Template<()> = Template::new(include_str!("js/draw/path_morph.js"));
        pub const TRANSFORM: Template<()> = Template::new(include_str!("js/draw/transform.js"));
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compile/template.rs"]
mod tests;
