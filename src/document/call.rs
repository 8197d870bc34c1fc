//! Pulls the payload literal out of the player's invocation:
//! `})('<id>',{...},'__SVGATOR_PLAYER__',window,document)`.

use crate::foundation::error::{ConvertError, ConvertResult};

const CALL_MARKER: &str = "})('";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PayloadLiteral {
    /// First argument of the call. Doubles as the cipher key.
    pub player_id: String,
    /// The object literal, verbatim.
    pub json: String,
}

pub fn extract_payload_literal(js: &str) -> ConvertResult<PayloadLiteral> {
    let marker = js
        .find(CALL_MARKER)
        .ok_or_else(|| ConvertError::extraction(format!("player call marker `{CALL_MARKER}` not found")))?;
    let id_start = marker + CALL_MARKER.len();
    let id_end = js[id_start..]
        .find("',")
        .map(|i| id_start + i)
        .ok_or_else(|| ConvertError::extraction("player id is not terminated"))?;
    let json_start = js[id_end..]
        .find('{')
        .map(|i| id_end + i)
        .ok_or_else(|| ConvertError::extraction("payload literal start not found"))?;
    let json_end = literal_end(js.as_bytes(), json_start)
        .ok_or_else(|| ConvertError::extraction("payload literal is not terminated"))?;

    Ok(PayloadLiteral {
        player_id: js[id_start..id_end].to_string(),
        json: js[json_start..json_end].to_string(),
    })
}

/// Exclusive end of the brace-balanced literal opening at `start`. Braces
/// inside `'`, `"` or `` ` `` strings do not count; backslash escapes are
/// honored inside strings.
fn literal_end(src: &[u8], start: usize) -> Option<usize> {
    let mut depth = 0usize;
    let mut quote: Option<u8> = None;
    let mut escaped = false;

    for (i, &b) in src.iter().enumerate().skip(start) {
        if let Some(q) = quote {
            if escaped {
                escaped = false;
            } else if b == b'\\' {
                escaped = true;
            } else if b == q {
                quote = None;
            }
            continue;
        }
        match b {
            b'\'' | b'"' | b'`' => quote = Some(b),
            b'{' => depth += 1,
            b'}' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return Some(i + 1);
                }
            }
            _ => {}
        }
    }
    None
}

#[cfg(test)]
#[path = "../../tests/unit/document/call.rs"]
mod tests;
