//! Optional shrinking of the emitted runtime.

/// Which minifier produced the embedded code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Minifier {
    Oxc,
    /// Not requested, not compiled in, or the source failed to parse.
    None,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MinifyOutcome {
    pub code: String,
    pub used: Minifier,
}

/// Minifies `code` when asked to. Never fails: any problem yields the input
/// unchanged.
pub fn minify_runtime(code: String, want: bool) -> MinifyOutcome {
    if !want {
        return MinifyOutcome {
            code,
            used: Minifier::None,
        };
    }
    match minify_js(&code) {
        Some(min) if !min.is_empty() => MinifyOutcome {
            code: min,
            used: Minifier::Oxc,
        },
        _ => {
            tracing::warn!("runtime minification unavailable, embedding unminified code");
            MinifyOutcome {
                code,
                used: Minifier::None,
            }
        }
    }
}

#[cfg(feature = "minify")]
fn minify_js(source: &str) -> Option<String> {
    use oxc::allocator::Allocator;
    use oxc::codegen::{Codegen, CodegenOptions, CommentOptions};
    use oxc::mangler::MangleOptions;
    use oxc::minifier::{CompressOptions, Minifier, MinifierOptions};
    use oxc::parser::Parser;
    use oxc::span::SourceType;

    let allocator = Allocator::default();
    let ret = Parser::new(&allocator, source, SourceType::mjs()).parse();
    if !ret.errors.is_empty() {
        tracing::debug!(errors = ret.errors.len(), "runtime did not parse for minification");
        return None;
    }
    let mut program = ret.program;
    let options = MinifierOptions {
        mangle: Some(MangleOptions::default()),
        compress: Some(CompressOptions::smallest()),
    };
    let ret = Minifier::new(options).minify(&allocator, &mut program);
    let code = Codegen::new()
        .with_options(CodegenOptions {
            minify: true,
            comments: CommentOptions::disabled(),
            ..CodegenOptions::default()
        })
        .with_scoping(ret.scoping)
        .build(&program)
        .code;
    Some(code)
}

#[cfg(not(feature = "minify"))]
fn minify_js(_source: &str) -> Option<String> {
    None
}

#[cfg(test)]
#[path = "../../tests/unit/compile/minify.rs"]
mod tests;
