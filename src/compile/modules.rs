use crate::{animation::track::Easing, features::detect::Capabilities};

/// Building blocks of the emitted runtime, in assembly order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RuntimeModule {
    Core,
    Bezier,
    Transform,
    Paint,
    Gradient,
    Filter,
    Points,
    PathMorph,
    /// Timeline, player state machine, triggers and boot. Always last.
    Player,
}

impl RuntimeModule {
    pub const ALL: [Self; 9] = [
        Self::Core,
        Self::Bezier,
        Self::Transform,
        Self::Paint,
        Self::Gradient,
        Self::Filter,
        Self::Points,
        Self::PathMorph,
        Self::Player,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Core => "core",
            Self::Bezier => "bezier",
            Self::Transform => "transform",
            Self::Paint => "paint",
            Self::Gradient => "gradient",
            Self::Filter => "filter",
            Self::Points => "points",
            Self::PathMorph => "path_morph",
            Self::Player => "player",
        }
    }

    fn enabled_by(self, caps: &Capabilities) -> bool {
        match self {
            Self::Core | Self::Paint | Self::Player => true,
            Self::Bezier => caps.bezier,
            Self::Transform => caps.transform,
            Self::Gradient => caps.gradients,
            Self::Filter => caps.filters,
            Self::Points => caps.points,
            Self::PathMorph => caps.path_d,
        }
    }

    fn bit(self) -> u16 {
        1 << self as u16
    }
}

/// The set of modules compiled into one runtime. Decided once from the
/// capabilities; everything downstream asks the plan, never the payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ModulePlan {
    bits: u16,
}

impl ModulePlan {
    pub fn from_capabilities(caps: &Capabilities) -> Self {
        let bits = RuntimeModule::ALL
            .iter()
            .filter(|m| m.enabled_by(caps))
            .fold(0, |acc, m| acc | m.bit());
        Self { bits }
    }

    pub fn full() -> Self {
        Self::from_capabilities(&Capabilities::all())
    }

    pub fn contains(&self, module: RuntimeModule) -> bool {
        self.bits & module.bit() != 0
    }

    /// Included modules in assembly order.
    pub fn modules(&self) -> impl Iterator<Item = RuntimeModule> + '_ {
        RuntimeModule::ALL
            .into_iter()
            .filter(|m| self.contains(*m))
    }

    pub fn easing(&self) -> Easing {
        if self.contains(RuntimeModule::Bezier) {
            Easing::Bezier
        } else {
            Easing::Linear
        }
    }
}

impl From<&Capabilities> for ModulePlan {
    fn from(caps: &Capabilities) -> Self {
        Self::from_capabilities(caps)
    }
}

impl serde::Serialize for ModulePlan {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.modules().map(RuntimeModule::name))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compile/modules.rs"]
mod tests;
