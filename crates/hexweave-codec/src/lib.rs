//! Hexweave Codec - Reversible string encoding for persisted values
//!
//! Every persisted field travels as JSON, gzip-compressed and wrapped in
//! base64, so it can live inside the host's string-keyed settings storage
//! and be pasted around as a compact code. Encoding is lossless for valid
//! input; decoding failures surface as a typed [`Error`] that callers in
//! the engine treat as "value absent", never as a crash.

mod error;

pub use error::{Error, Result};

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use hexweave_core::{ItemBundle, Outfit};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::{Read, Write};

/// Encode any serializable value as a compact storage string
pub fn compress_value<T: Serialize>(value: &T) -> Result<String> {
    let json = serde_json::to_vec(value)?;
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(&json)?;
    let compressed = encoder.finish()?;
    Ok(STANDARD.encode(compressed))
}

/// Decode a storage string produced by [`compress_value`]
pub fn decompress_value<T: DeserializeOwned>(encoded: &str) -> Result<T> {
    let compressed = STANDARD.decode(encoded)?;
    let mut json = Vec::new();
    GzDecoder::new(compressed.as_slice()).read_to_end(&mut json)?;
    Ok(serde_json::from_slice(&json)?)
}

/// Encode an ordered outfit as a shareable code
pub fn encode_outfit(outfit: &[ItemBundle]) -> Result<String> {
    compress_value(&outfit)
}

/// Decode an outfit code into its item list
pub fn decode_outfit(code: &str) -> Result<Outfit> {
    decompress_value(code)
}

/// Re-encode `code` keeping only the items that satisfy `allow`.
///
/// A code that does not decode is returned unchanged; callers that rely on
/// the cleaned result must re-validate it.
pub fn clean_code<F>(code: &str, allow: F) -> String
where
    F: Fn(&ItemBundle) -> bool,
{
    match decode_outfit(code) {
        Ok(items) => {
            let kept: Outfit = items.into_iter().filter(|item| allow(item)).collect();
            encode_outfit(&kept).unwrap_or_else(|_| code.to_string())
        }
        Err(_) => code.to_string(),
    }
}

/// Whether `code` decodes to a non-empty item list.
///
/// Configuration surfaces use this to validate pasted codes before
/// storing them.
pub fn looks_like_outfit_code(code: &str) -> bool {
    decode_outfit(code).map(|items| !items.is_empty()).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hexweave_core::Craft;

    fn sample_outfit() -> Outfit {
        vec![
            ItemBundle::new("Cloth", "Maid Dress")
                .with_color(serde_json::json!(["#101010", "Default"])),
            ItemBundle::new("ItemArms", "HempRope")
                .with_craft(Craft::named("Cursed Rope"))
                .with_property(serde_json::json!({"Type": "Hogtied"})),
            ItemBundle::new("ItemNeck", "LeatherCollar"),
        ]
    }

    #[test]
    fn test_outfit_round_trip() {
        let outfit = sample_outfit();
        let code = encode_outfit(&outfit).unwrap();
        assert_eq!(decode_outfit(&code).unwrap(), outfit);
    }

    #[test]
    fn test_code_round_trip() {
        // encode(decode(code)) yields a code that decodes to the same list
        let code = encode_outfit(&sample_outfit()).unwrap();
        let decoded = decode_outfit(&code).unwrap();
        let re_encoded = encode_outfit(&decoded).unwrap();
        assert_eq!(decode_outfit(&re_encoded).unwrap(), decoded);
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(decode_outfit("not a code at all!").is_err());
        // Valid base64 that is not a gzip stream
        assert!(decode_outfit(&STANDARD.encode(b"plain bytes")).is_err());
    }

    #[test]
    fn test_generic_value_round_trip() {
        let value = vec![1u32, 2, 3];
        let encoded = compress_value(&value).unwrap();
        let back: Vec<u32> = decompress_value(&encoded).unwrap();
        assert_eq!(back, value);
    }

    #[test]
    fn test_clean_code_filters() {
        let code = encode_outfit(&sample_outfit()).unwrap();
        let cleaned = clean_code(&code, |item| item.group != "ItemNeck");
        let kept = decode_outfit(&cleaned).unwrap();
        assert_eq!(kept.len(), 2);
        assert!(kept.iter().all(|item| item.group != "ItemNeck"));
    }

    #[test]
    fn test_clean_code_passthrough_on_garbage() {
        let cleaned = clean_code("garbage-code", |_| true);
        assert_eq!(cleaned, "garbage-code");
    }

    #[test]
    fn test_looks_like_outfit_code() {
        let code = encode_outfit(&sample_outfit()).unwrap();
        assert!(looks_like_outfit_code(&code));

        let empty = encode_outfit(&[]).unwrap();
        assert!(!looks_like_outfit_code(&empty));
        assert!(!looks_like_outfit_code("12345"));
    }
}
