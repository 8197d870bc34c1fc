//! Runtime generation: module planning, template assembly and minification.

pub mod assemble;
pub mod minify;
pub mod modules;
pub mod template;

pub use assemble::{RuntimeCompiler, RuntimeUnit};
pub use minify::{Minifier, MinifyOutcome, minify_runtime};
pub use modules::{ModulePlan, RuntimeModule};
