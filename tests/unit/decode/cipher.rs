use std::fmt::Write as _;

use base64::engine::general_purpose::STANDARD;
use serde_json::json;

use super::*;

const KEY: &str = "eKm3oA1bCdE1";

const HOVER_OPTIONS: &str = "MDA0xMGI1NVFjYWRhZTliWGFjYWU1YzdRNDxVjYTJhOVhiMDlmYWM1UWM2NjVjYTJYxYTliMDlmYVFjNWM3NDVjWGFjOWZiMDxlRZmFjYWQ5Zlg1Y2I3";

const SETTINGS_WITH_ACCENT: &str = "MDxBhYjkzM1FhN2Mx4ZDhhWDc5OGM4xMThRNzg2M2E1Mxlg0OTRhNDg0UTxg0NDNhODFYOGMx3ZDhhN1E5OGM4xMTg3WDg2OGIzYxTVRMjQ4NDQzYVxg3OTg0OGM3UWQx4YTg2NzlYOGM3xZDNhNVEyOGM4YxThkWDdkNDQzYTxhRNDc5N2E3ZFgx4NDNhNTIzUWE3xYjc5N2VYfDAxMxDEzYVE5NQ|";

/// Exporter-side inverse, used to build fixtures for arbitrary keys.
fn encode(json_text: &str, root: &str, key: &str, body_seed: u32) -> String {
    let seed = key_seed(key).unwrap();
    let first = reduce(seed, 5.0) as usize;
    let next = (reduce(seed, 27.0) + 5.0) as usize;
    let shift = (seed_mod(root, f64::from(body_seed)).unwrap() % f64::from(body_seed)
        + seed % 27.0) as u32;

    let mut body = format!("{body_seed:04x}");
    for unit in json_text.encode_utf16() {
        let v = u32::from(unit) + shift;
        if v < 0x100 {
            write!(body, "{v:02x}").unwrap();
        } else {
            write!(body, "|{v:04x}").unwrap();
        }
    }

    let mut noisy = String::new();
    for (i, c) in body.chars().enumerate() {
        noisy.push(c);
        if i % 7 == 6 {
            noisy.push(if i % 2 == 0 { 'Q' } else { 'X' });
        }
    }

    let b64 = loop {
        let b = STANDARD.encode(noisy.as_bytes());
        if let Some(stem) = b.strip_suffix("==") {
            break format!("{stem}|");
        }
        if let Some(stem) = b.strip_suffix('=') {
            break format!("{stem}/");
        }
        if b.ends_with('/') {
            noisy.push('Z');
            continue;
        }
        break b;
    };

    let chars: Vec<char> = b64.chars().collect();
    let mut out = String::new();
    let mut rest = &chars[..];
    let mut cut = first;
    loop {
        if rest.len() < cut {
            out.extend(rest);
            break;
        }
        out.extend(&rest[..cut]);
        out.push('x');
        rest = &rest[cut..];
        cut = next;
        if rest.is_empty() {
            break;
        }
    }
    out
}

#[test]
fn decodes_known_exported_options() {
    let v = decode(HOVER_OPTIONS, KEY, KEY).unwrap();
    assert_eq!(v, json!({"start": "hover", "hover": "reverse"}));
}

#[test]
fn decodes_wide_characters_and_padding_sentinel() {
    let v = decode(SETTINGS_WITH_ACCENT, KEY, "e1f2").unwrap();
    assert_eq!(
        v,
        json!({"duration": 1200, "iterations": 0, "alternate": true, "label": "café"})
    );
}

#[test]
fn decoding_is_deterministic() {
    let decoder = CipherDecoder::new(KEY, KEY).unwrap();
    let a = decoder.decode(HOVER_OPTIONS).unwrap();
    let b = decoder.decode(HOVER_OPTIONS).unwrap();
    let c = decode(HOVER_OPTIONS, KEY, KEY).unwrap();
    assert_eq!(a, b);
    assert_eq!(a, c);
}

#[test]
fn empty_or_non_string_input_is_null() {
    let decoder = CipherDecoder::new(KEY, KEY).unwrap();
    assert_eq!(decoder.decode("").unwrap(), Value::Null);
    assert_eq!(decoder.decode_value(&Value::Null).unwrap(), Value::Null);
    assert_eq!(decoder.decode_value(&json!(42)).unwrap(), Value::Null);
    assert_eq!(decoder.decode_value(&json!({"start": "click"})).unwrap(), Value::Null);
    assert_eq!(decoder.decode_value(&json!("")).unwrap(), Value::Null);
}

#[test]
fn keys_without_hex_digits_fall_back_to_default_seed() {
    assert_eq!(key_seed("zzz-__").unwrap(), 39.0);
    assert_eq!(key_seed("").unwrap(), 39.0);
    let payload = r#"{"fps":60,"speed":1.5}"#;
    let encoded = encode(payload, "root", "zz", 0x0051);
    assert_eq!(
        decode(&encoded, "root", "zz").unwrap(),
        json!({"fps": 60, "speed": 1.5})
    );
}

#[test]
fn generated_fixtures_decode_for_several_keys() {
    for (key, seed) in [("e1f2", 0x00ab), ("eA93c0", 0x0107), ("a", 0x0fff)] {
        let payload = r#"{"direction":-1,"fill":-1,"w":[1,2,3]}"#;
        let encoded = encode(payload, KEY, key, seed);
        let decoded = CipherDecoder::new(KEY, key)
            .unwrap()
            .decode(&encoded)
            .unwrap();
        assert_eq!(decoded, json!({"direction": -1, "fill": -1, "w": [1, 2, 3]}));
    }
}

#[test]
fn reduce_mirrors_digit_root_recursion() {
    assert_eq!(reduce(0.0, 27.0), 0.0);
    assert_eq!(reduce(28.0, 27.0), 1.0);
    assert_eq!(reduce(27.0 * 27.0 * 2.0, 27.0), 2.0);
    assert_eq!(reduce(25.0, 5.0), 1.0);
    assert_eq!(reduce(12.0, 1.0), 1.0);
}

#[test]
fn junk_removal_keeps_trailing_remainder() {
    assert_eq!(remove_interleaved("abXcdeYfg", 2, 3), "abcdefg");
    assert_eq!(remove_interleaved("Xabc", 0, 5), "abc");
    assert_eq!(remove_interleaved("", 2, 3), "");
}

#[test]
fn malformed_layers_are_decode_errors() {
    let decoder = CipherDecoder::new(KEY, KEY).unwrap();
    assert!(matches!(decoder.decode("@@@@"), Err(ConvertError::Decode(_))));

    let not_hex = STANDARD.encode("zz1234");
    assert!(matches!(decoder.decode(&not_hex), Err(ConvertError::Decode(_))));
}

#[test]
fn overflowing_keys_are_rejected() {
    let key = "f".repeat(300);
    assert!(matches!(
        CipherDecoder::new("root", &key),
        Err(ConvertError::Decode(_))
    ));
}
