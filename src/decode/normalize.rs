use crate::{
    decode::cipher::CipherDecoder,
    foundation::error::ConvertResult,
    payload::model::Payload,
};

/// Replaces encoded `options` and per-animation settings with their decoded
/// structures. Fields that are already structured pass through untouched.
///
/// Returns how many fields were decoded. Run once, before detection.
pub fn normalize_payload(payload: &mut Payload, player_key: &str) -> ConvertResult<usize> {
    let needs_decoding = payload.options.is_string()
        || payload.animations.iter().any(|a| a.settings.is_string());
    if !needs_decoding {
        return Ok(0);
    }

    let decoder = CipherDecoder::new(&payload.root, player_key)?;
    let mut decoded = 0;
    if payload.options.is_string() {
        payload.options = decoder.decode_value(&payload.options)?;
        decoded += 1;
    }
    for anim in &mut payload.animations {
        if anim.settings.is_string() {
            anim.settings = decoder.decode_value(&anim.settings)?;
            decoded += 1;
        }
    }

    tracing::debug!(decoded, "normalized encoded payload fields");
    Ok(decoded)
}

#[cfg(test)]
#[path = "../../tests/unit/decode/normalize.rs"]
mod tests;
