//! Launch-Data Loader
//!
//! Turns the Mini App launch parameter into list items.
//! The parameter is base64-encoded JSON: an array of items, or `null`.

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig};
use base64::engine::DecodePaddingMode;
use base64::Engine;

use crate::error::LaunchResult;
use crate::models::Item;

/// Padding is optional: Telegram only allows `[A-Za-z0-9_-]` in `start_param`
const DECODE_CONFIG: GeneralPurposeConfig =
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent);

const STANDARD_LENIENT: GeneralPurpose = GeneralPurpose::new(&alphabet::STANDARD, DECODE_CONFIG);
const URL_SAFE_LENIENT: GeneralPurpose = GeneralPurpose::new(&alphabet::URL_SAFE, DECODE_CONFIG);

/// Outcome of reading the launch parameter
#[derive(Debug, Clone, PartialEq)]
pub enum LaunchData {
    /// No parameter was passed (the view was not opened from the bot's list link)
    Missing,
    /// Decoded items, in payload order
    Items(Vec<Item>),
}

/// Read the launch parameter.
///
/// An absent or blank parameter is `Missing`, not an error.
pub fn load_launch_data(param: Option<&str>) -> LaunchResult<LaunchData> {
    match param.map(str::trim).filter(|p| !p.is_empty()) {
        None => Ok(LaunchData::Missing),
        Some(encoded) => decode_payload(encoded).map(LaunchData::Items),
    }
}

/// Base64-decode then JSON-parse a payload
pub fn decode_payload(encoded: &str) -> LaunchResult<Vec<Item>> {
    let engine = if encoded.contains(['-', '_']) {
        &URL_SAFE_LENIENT
    } else {
        &STANDARD_LENIENT
    };
    let bytes = engine.decode(encoded)?;
    let items: Option<Vec<Item>> = serde_json::from_slice(&bytes)?;
    Ok(items.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LaunchError;
    use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};
    use serde_json::json;

    fn encode(value: serde_json::Value) -> String {
        STANDARD.encode(value.to_string())
    }

    #[test]
    fn test_missing_param() {
        assert_eq!(load_launch_data(None).unwrap(), LaunchData::Missing);
        assert_eq!(load_launch_data(Some("")).unwrap(), LaunchData::Missing);
        assert_eq!(load_launch_data(Some("  \n")).unwrap(), LaunchData::Missing);
    }

    #[test]
    fn test_decode_items_in_order() {
        let encoded = encode(json!([
            {"артикул": "111", "кількість": 1},
            {"артикул": "222", "кількість": "7"},
            {"артикул": "333", "кількість": 12},
        ]));

        let data = load_launch_data(Some(&encoded)).unwrap();

        assert_eq!(
            data,
            LaunchData::Items(vec![
                Item::new("111", 1),
                Item::new("222", "7"),
                Item::new("333", 12),
            ])
        );
    }

    #[test]
    fn test_empty_array() {
        let encoded = encode(json!([]));
        assert_eq!(load_launch_data(Some(&encoded)).unwrap(), LaunchData::Items(vec![]));
    }

    #[test]
    fn test_null_payload_is_empty() {
        let encoded = encode(json!(null));
        assert!(decode_payload(&encoded).unwrap().is_empty());
    }

    #[test]
    fn test_null_field_does_not_reject_payload() {
        let encoded = encode(json!([
            {"артикул": "1", "кількість": null},
            {"артикул": "2", "кількість": 1e2},
        ]));

        let items = decode_payload(&encoded).unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].quantity.to_string(), "null");
        assert_eq!(items[1].article.to_string(), "2");
    }

    #[test]
    fn test_url_safe_unpadded() {
        let payload = json!([{"article": "Щітка ~~~ ???", "quantity": 2}]).to_string();
        let encoded = URL_SAFE_NO_PAD.encode(&payload);
        assert!(encoded.contains('-') && encoded.contains('_'));
        assert!(!encoded.ends_with('='));

        let items = decode_payload(&encoded).unwrap();
        assert_eq!(items, vec![Item::new("Щітка ~~~ ???", 2)]);
    }

    #[test]
    fn test_standard_unpadded() {
        let encoded = encode(json!([{"article": "10", "quantity": 1}]));
        assert!(encoded.ends_with("=="));
        let trimmed = encoded.trim_end_matches('=');
        assert_eq!(decode_payload(trimmed).unwrap(), vec![Item::new("10", 1)]);
    }

    #[test]
    fn test_invalid_base64() {
        let err = load_launch_data(Some("not base64!")).unwrap_err();
        assert!(matches!(err, LaunchError::Decode(_)));
        assert!(err.to_string().contains("base64"));
    }

    #[test]
    fn test_invalid_json() {
        let encoded = STANDARD.encode("[{\"article\": ");
        let err = load_launch_data(Some(&encoded)).unwrap_err();
        assert!(matches!(err, LaunchError::Parse(_)));
        assert!(err.to_string().contains("JSON"));
    }

    #[test]
    fn test_wrong_shape_is_parse_error() {
        let encoded = encode(json!({"article": "1", "quantity": 1}));
        assert!(matches!(decode_payload(&encoded), Err(LaunchError::Parse(_))));
    }
}
