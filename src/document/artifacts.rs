//! Removal of the exporter's interactive UI overlay.
//!
//! Ids in the overlay are generated, so the group is recognized by structure
//! alone: all four signals checked in [`looks_like_ui_group`] must be present
//! somewhere inside one top-level `<g>`.

use std::{collections::BTreeSet, sync::LazyLock};

use regex::Regex;

const BUTTON_FILL: &str = "#112346";
const BUTTON_OPACITY: f64 = 0.2;
const MASK_PATH_OPACITY: f64 = 0.8;
const OPACITY_TOLERANCE: f64 = 1e-4;
const MASK_PATH_SCALE: f64 = 0.3;
const SCALE_TOLERANCE: f64 = 0.01;
const SKEW_TOLERANCE: f64 = 1e-9;

macro_rules! static_regex {
    ($name:ident, $pattern:literal) => {
        static $name: LazyLock<Regex> =
            LazyLock::new(|| Regex::new($pattern).expect("static pattern"));
    };
}

static_regex!(GROUP_OPEN, r"(?i)<g\b");
static_regex!(GROUP_CLOSE, r"(?i)</g\b");
static_regex!(RECT_TAG, r"(?i)<rect\b[^>]*>");
static_regex!(PATH_TAG, r"(?i)<path\b[^>]*>");
static_regex!(MASK_TAG, r"(?i)<mask\b[^>]*>");
static_regex!(
    ATTRIBUTE,
    r#"([^\s=/<>"']+)\s*=\s*(?:"([^"]*)"|'([^']*)')"#
);
static_regex!(ID_ATTRIBUTE, r#"\bid=(?:"([^"']+)"|'([^"']+)')"#);
static_regex!(MATRIX, r"(?i)matrix\(\s*([^)]+)\s*\)");
static_regex!(MATRIX_SEPARATOR, r"[\s,]+");

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StrippedDocument {
    pub svg: String,
    /// Ids of every element inside a removed group.
    pub removed_ids: BTreeSet<String>,
    /// Number of merged ranges cut out.
    pub removed_groups: usize,
}

pub fn strip_ui_artifacts(svg: &str) -> StrippedDocument {
    let mut removed_ids = BTreeSet::new();
    let mut ranges: Vec<(usize, usize)> = Vec::new();

    for (start, end) in balanced_group_ranges(svg) {
        let block = &svg[start..end];
        if !looks_like_ui_group(block) {
            continue;
        }
        collect_ids(block, &mut removed_ids);
        ranges.push((start, end));
    }

    if ranges.is_empty() {
        return StrippedDocument {
            svg: svg.to_string(),
            ..StrippedDocument::default()
        };
    }

    ranges.sort_unstable();
    let mut merged: Vec<(usize, usize)> = Vec::with_capacity(ranges.len());
    for (start, end) in ranges {
        match merged.last_mut() {
            Some(last) if start <= last.1 => last.1 = last.1.max(end),
            _ => merged.push((start, end)),
        }
    }

    let mut out = String::with_capacity(svg.len());
    let mut cursor = 0;
    for &(start, end) in &merged {
        out.push_str(&svg[cursor..start]);
        cursor = end;
    }
    out.push_str(&svg[cursor..]);

    tracing::info!(
        groups = merged.len(),
        ids = removed_ids.len(),
        "stripped ui artifacts"
    );
    StrippedDocument {
        svg: out,
        removed_ids,
        removed_groups: merged.len(),
    }
}

/// Outermost `<g>...</g>` ranges, nesting-aware. Self-closing groups are
/// skipped; stray closing tags are ignored.
fn balanced_group_ranges(text: &str) -> Vec<(usize, usize)> {
    let mut ranges = Vec::new();
    let mut stack: Vec<usize> = Vec::new();
    let mut i = 0;

    while i < text.len() {
        let open = GROUP_OPEN.find_at(text, i).map(|m| m.start());
        let close = GROUP_CLOSE.find_at(text, i).map(|m| m.start());
        let (at, is_open) = match (open, close) {
            (None, None) => break,
            (Some(o), Some(c)) if o < c => (o, true),
            (Some(o), None) => (o, true),
            (_, Some(c)) => (c, false),
        };
        let Some(gt) = text[at..].find('>').map(|g| at + g) else {
            break;
        };

        if is_open {
            if !text[at..=gt].trim_end_matches('>').trim_end().ends_with('/') {
                stack.push(at);
            }
        } else if let Some(start) = stack.pop() {
            if stack.is_empty() {
                ranges.push((start, gt + 1));
            }
        }
        i = gt + 1;
    }
    ranges
}

fn looks_like_ui_group(block: &str) -> bool {
    let button = any_tag(&RECT_TAG, block, |tag| {
        attr(tag, "fill").is_some_and(|f| f.eq_ignore_ascii_case(BUTTON_FILL))
            && attr(tag, "opacity")
                .and_then(leading_float)
                .is_some_and(|o| (o - BUTTON_OPACITY).abs() <= OPACITY_TOLERANCE)
    });
    let icon = any_tag(&PATH_TAG, block, |tag| {
        attr(tag, "fill").is_some_and(|f| {
            let f = f.to_ascii_lowercase();
            f == "#fff" || f == "#ffffff" || f == "white"
        })
    });
    let mask = any_tag(&MASK_TAG, block, |tag| {
        attr(tag, "x") == Some("-150%")
            && attr(tag, "y") == Some("-150%")
            && attr(tag, "width") == Some("400%")
            && attr(tag, "height") == Some("400%")
    });
    let mask_path = any_tag(&PATH_TAG, block, |tag| {
        let opaque = attr(tag, "opacity")
            .and_then(leading_float)
            .is_some_and(|o| (o - MASK_PATH_OPACITY).abs() <= OPACITY_TOLERANCE);
        opaque
            && attr(tag, "transform")
                .and_then(parse_matrix)
                .is_some_and(|m| {
                    m[1].abs() <= SKEW_TOLERANCE
                        && m[2].abs() <= SKEW_TOLERANCE
                        && (m[0] - MASK_PATH_SCALE).abs() <= SCALE_TOLERANCE
                        && (m[3] - MASK_PATH_SCALE).abs() <= SCALE_TOLERANCE
                })
    });
    button && icon && mask && mask_path
}

fn any_tag(re: &Regex, block: &str, pred: impl Fn(&str) -> bool) -> bool {
    re.find_iter(block).any(|m| pred(m.as_str()))
}

/// Value of attribute `name` in one opening tag, in either quote style.
fn attr<'a>(tag: &'a str, name: &str) -> Option<&'a str> {
    ATTRIBUTE.captures_iter(tag).find_map(|c| {
        if !c.get(1)?.as_str().eq_ignore_ascii_case(name) {
            return None;
        }
        c.get(2).or_else(|| c.get(3)).map(|v| v.as_str())
    })
}

fn collect_ids(block: &str, out: &mut BTreeSet<String>) {
    for c in ID_ATTRIBUTE.captures_iter(block) {
        if let Some(id) = c.get(1).or_else(|| c.get(2)) {
            out.insert(id.as_str().to_string());
        }
    }
}

fn parse_matrix(transform: &str) -> Option<[f64; 6]> {
    let args = MATRIX.captures(transform)?.get(1)?.as_str().trim();
    let parts: Vec<f64> = MATRIX_SEPARATOR
        .split(args)
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<f64>().ok().filter(|x| x.is_finite()))
        .collect::<Option<_>>()?;
    parts.get(..6)?.try_into().ok()
}

/// Longest numeric prefix, the way `parseFloat` reads attribute values.
fn leading_float(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let end = s
        .char_indices()
        .take_while(|&(_, c)| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'))
        .last()
        .map_or(0, |(i, c)| i + c.len_utf8());
    (1..=end)
        .rev()
        .find_map(|n| s[..n].parse::<f64>().ok())
        .filter(|x| x.is_finite())
}

#[cfg(test)]
#[path = "../../tests/unit/document/artifacts.rs"]
mod tests;
