//! Locating and replacing the exporter's `<script>` block.

use std::sync::LazyLock;

use regex::Regex;

/// Strings that only appear in the exporter's own player script.
pub const PLAYER_SENTINELS: [&str; 2] = ["__SVGATOR_PLAYER__", "__SVGATOR_DEFINE__"];

static SCRIPT_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<script\b[^>]*>.*?</script>").expect("static pattern"));
static CDATA_SECTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<!\[CDATA\[(.*?)\]\]>").expect("static pattern"));
static SCRIPT_BODY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<script\b[^>]*>(.*?)</script>").expect("static pattern")
});

/// Byte range of a script block inside the document, tags included.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScriptBlock {
    pub start: usize,
    pub end: usize,
}

impl ScriptBlock {
    pub fn text<'a>(&self, doc: &'a str) -> &'a str {
        &doc[self.start..self.end]
    }
}

/// First script block carrying one of the [`PLAYER_SENTINELS`].
pub fn find_script_block(doc: &str) -> Option<ScriptBlock> {
    SCRIPT_BLOCK
        .find_iter(doc)
        .find(|m| PLAYER_SENTINELS.iter().any(|s| m.as_str().contains(s)))
        .map(|m| ScriptBlock {
            start: m.start(),
            end: m.end(),
        })
}

/// Script text of a block: the first CDATA section if there is one, the
/// element body otherwise.
pub fn script_content(block: &str) -> &str {
    if let Some(c) = CDATA_SECTION.captures(block).and_then(|c| c.get(1)) {
        return c.as_str();
    }
    SCRIPT_BODY
        .captures(block)
        .and_then(|c| c.get(1))
        .map_or("", |m| m.as_str())
}

pub fn replace_script_block(doc: &str, block: ScriptBlock, replacement: &str) -> String {
    let mut out = String::with_capacity(doc.len() - (block.end - block.start) + replacement.len());
    out.push_str(&doc[..block.start]);
    out.push_str(replacement);
    out.push_str(&doc[block.end..]);
    out
}

/// Wraps runtime code in a CDATA script element. A `]]>` inside the code is
/// split across two sections so the markup stays well formed.
pub fn wrap_runtime(code: &str) -> String {
    format!(
        "<script><![CDATA[{}]]></script>",
        code.replace("]]>", "]]]]><![CDATA[>")
    )
}

#[cfg(test)]
#[path = "../../tests/unit/document/script.rs"]
mod tests;
