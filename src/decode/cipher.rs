//! Reversal of the authoring tool's string obfuscation.
//!
//! Encoded fields (player options, per-animation settings) go through four
//! layers: a JSON text whose UTF-16 units are shifted and hex-encoded, noise
//! uppercase letters interleaved into that hex, base64 with rewritten padding,
//! and finally one junk character inserted at key-derived intervals.
//!
//! All seed arithmetic runs on `f64` with the same division and remainder
//! steps as the exporter, so results stay bit-compatible with existing
//! exports even for keys whose hex value exceeds the exact integer range.

use base64::{
    Engine as _, alphabet,
    engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig},
};
use serde_json::Value;

use crate::foundation::error::{ConvertError, ConvertResult};

const DEFAULT_SEED_HEX: &str = "27";
const KEY_DIVISOR: f64 = 27.0;
const FIRST_CUT_DIVISOR: f64 = 5.0;
const CUT_OFFSET: f64 = 5.0;

const LENIENT_BASE64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Decoder bound to the two context keys of one document.
#[derive(Clone, Debug)]
pub struct CipherDecoder {
    root: String,
    seed: f64,
    first_cut: usize,
    next_cut: usize,
}

impl CipherDecoder {
    /// `root` is the payload's root element id, `player_key` the id passed to the
    /// player call expression. Both are used verbatim.
    pub fn new(root: &str, player_key: &str) -> ConvertResult<Self> {
        let seed = key_seed(player_key)?;
        let first_cut = reduce(seed, FIRST_CUT_DIVISOR);
        let next_cut = reduce(seed, KEY_DIVISOR) + CUT_OFFSET;
        Ok(Self {
            root: root.to_string(),
            seed,
            first_cut: as_cut(first_cut)?,
            next_cut: as_cut(next_cut)?,
        })
    }

    /// Decodes an optional field: anything that is not a non-empty string yields `Null`.
    pub fn decode_value(&self, encoded: &Value) -> ConvertResult<Value> {
        match encoded {
            Value::String(s) => self.decode(s),
            _ => Ok(Value::Null),
        }
    }

    pub fn decode(&self, encoded: &str) -> ConvertResult<Value> {
        if encoded.is_empty() {
            return Ok(Value::Null);
        }

        let mut b64 = remove_interleaved(encoded, self.first_cut, self.next_cut);
        if b64.ends_with('|') {
            b64.pop();
            b64.push_str("==");
        }
        if b64.ends_with('/') {
            b64.pop();
            b64.push('=');
        }

        let bytes = LENIENT_BASE64
            .decode(b64.as_bytes())
            .map_err(|e| ConvertError::decode(format!("invalid base64 layer: {e}")))?;
        let text: String = String::from_utf8_lossy(&bytes)
            .chars()
            .filter(|c| !c.is_ascii_uppercase())
            .collect();

        let stripped = text.as_bytes();
        if stripped.len() < 4 {
            return Err(ConvertError::decode("cipher body shorter than its seed"));
        }
        let body_seed = hex_value(&stripped[..4])
            .ok_or_else(|| ConvertError::decode("cipher seed is not hexadecimal"))?;
        let body_seed = f64::from(body_seed);
        if body_seed == 0.0 {
            return Err(ConvertError::decode("cipher seed is zero"));
        }

        let shift = (seed_mod(&self.root, body_seed)? % body_seed) + (self.seed % KEY_DIVISOR);
        let units = decode_units(&stripped[4..], shift)?;
        let json = String::from_utf16_lossy(&units);

        serde_json::from_str(&json)
            .map_err(|e| ConvertError::decode(format!("decoded text is not JSON: {e}")))
    }
}

/// One-shot form of [`CipherDecoder::decode`].
pub fn decode(encoded: &str, root: &str, player_key: &str) -> ConvertResult<Value> {
    CipherDecoder::new(root, player_key)?.decode(encoded)
}

fn decode_units(body: &[u8], shift: f64) -> ConvertResult<Vec<u16>> {
    let mut units = Vec::with_capacity(body.len() / 2);
    let mut idx = 0;
    while idx < body.len() {
        let (digits, step) = if body[idx] == b'|' {
            (body.get(idx + 1..idx + 5), 5)
        } else {
            (body.get(idx..idx + 2), 2)
        };
        let value = digits
            .and_then(hex_value)
            .ok_or_else(|| ConvertError::decode(format!("malformed hex at offset {idx}")))?;
        units.push(to_uint16(f64::from(value) - shift));
        idx += step;
    }
    Ok(units)
}

/// `String.fromCharCode` coercion: truncate, then wrap into 16 bits.
fn to_uint16(v: f64) -> u16 {
    if !v.is_finite() {
        return 0;
    }
    (v.trunc() as i64).rem_euclid(1 << 16) as u16
}

fn hex_value(digits: &[u8]) -> Option<u32> {
    if digits.is_empty() {
        return None;
    }
    digits.iter().try_fold(0u32, |acc, &b| {
        let d = char::from(b).to_digit(16)?;
        Some(acc * 16 + d)
    })
}

/// Hex digits of `s` (all other characters dropped) read as one number.
fn key_seed(s: &str) -> ConvertResult<f64> {
    let hex: String = s.chars().filter(char::is_ascii_hexdigit).collect();
    let hex = if hex.is_empty() { DEFAULT_SEED_HEX } else { &hex };
    let value = parse_hex_f64(hex);
    if !value.is_finite() {
        return Err(ConvertError::decode("key seed overflows"));
    }
    Ok(value)
}

fn seed_mod(s: &str, modulus: f64) -> ConvertResult<f64> {
    let value = key_seed(s)?;
    if modulus == 0.0 || modulus.is_nan() {
        return Ok(value);
    }
    Ok((value % modulus) + modulus)
}

fn parse_hex_f64(hex: &str) -> f64 {
    if hex.len() <= 32 {
        if let Ok(v) = u128::from_str_radix(hex, 16) {
            return v as f64;
        }
    }
    hex.chars()
        .filter_map(|c| c.to_digit(16))
        .fold(0.0, |acc, d| acc * 16.0 + f64::from(d))
}

/// Divides `n` by `divisor` while it divides evenly and returns the first
/// non-zero remainder. Mirrors the exporter's recursion step for step.
fn reduce(mut n: f64, divisor: f64) -> f64 {
    loop {
        if n == 0.0 || n % divisor != 0.0 {
            return n % divisor;
        }
        if divisor == 0.0 || divisor == 1.0 {
            return divisor;
        }
        n /= divisor;
    }
}

fn as_cut(v: f64) -> ConvertResult<usize> {
    if !v.is_finite() || v < 0.0 {
        return Err(ConvertError::decode(format!("invalid cut width {v}")));
    }
    Ok(v as usize)
}

/// Undoes the junk-character insertion: keep `first` characters, drop one,
/// then keep `next` characters and drop one until the input runs short.
fn remove_interleaved(s: &str, first: usize, next: usize) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut out = String::with_capacity(chars.len());
    let mut rest = &chars[..];
    let mut cut = first;
    while !rest.is_empty() && next != 0 && cut <= rest.len() {
        out.extend(&rest[..cut]);
        rest = rest.get(cut + 1..).unwrap_or(&[]);
        cut = next;
    }
    out.extend(rest);
    out
}

#[cfg(test)]
#[path = "../../tests/unit/decode/cipher.rs"]
mod tests;
