//! Field decode helpers for raw supplier records.
//!
//! Suppliers disagree on key names, casing, and whether numbers arrive as
//! JSON numbers or strings. These helpers resolve a field through a list of
//! candidate keys and substitute the canonical empty value when the field
//! is absent or of the wrong type; the normalizers never touch
//! `serde_json::Value` indexing directly.

use lodgekit_core::Image;
use serde_json::Value;

/// Resolve a string field through candidate keys, trimmed. Missing or
/// non-string values yield `""`.
pub(super) fn str_field(record: &Value, keys: &[&str]) -> String {
    for key in keys {
        if let Some(s) = record.get(key).and_then(Value::as_str) {
            return s.trim().to_string();
        }
    }
    String::new()
}

/// Resolve an identifier field that may arrive as a string or a number
/// (e.g. `DestinationId: 5432`). Missing values yield `""`.
pub(super) fn id_field(record: &Value, keys: &[&str]) -> String {
    for key in keys {
        match record.get(key) {
            Some(Value::String(s)) => return s.trim().to_string(),
            Some(Value::Number(n)) => return n.to_string(),
            _ => {}
        }
    }
    String::new()
}

/// Resolve a numeric field that may arrive as a JSON number or a numeric
/// string. Missing or unparseable values yield `0.0`, the canonical empty
/// value for coordinates.
pub(super) fn f64_field(record: &Value, keys: &[&str]) -> f64 {
    for key in keys {
        let parsed = record.get(key).and_then(|v| {
            v.as_f64()
                .or_else(|| v.as_str().and_then(|s| s.trim().parse::<f64>().ok()))
        });
        if let Some(n) = parsed {
            return n;
        }
    }
    0.0
}

/// Collect an array of strings, trimmed; non-string elements and blank
/// entries are skipped. Anything other than an array yields `[]`.
pub(super) fn str_items(value: Option<&Value>) -> Vec<String> {
    let Some(items) = value.and_then(Value::as_array) else {
        return Vec::new();
    };

    items
        .iter()
        .filter_map(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Collect an array of image objects, resolving the supplier's link and
/// description key names to the canonical pair. Entries without a link are
/// skipped; a missing description becomes `""`.
pub(super) fn image_items(
    value: Option<&Value>,
    link_keys: &[&str],
    desc_keys: &[&str],
) -> Vec<Image> {
    let Some(items) = value.and_then(Value::as_array) else {
        return Vec::new();
    };

    items
        .iter()
        .filter_map(|item| {
            let link = str_field(item, link_keys);
            if link.is_empty() {
                return None;
            }
            Some(Image {
                link,
                description: str_field(item, desc_keys),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn str_field_tries_keys_in_order_and_trims() {
        let record = json!({"Name": "  Beach Villas  "});
        assert_eq!(str_field(&record, &["hotel_name", "Name"]), "Beach Villas");
    }

    #[test]
    fn str_field_defaults_to_empty_on_wrong_type() {
        let record = json!({"Name": 7});
        assert_eq!(str_field(&record, &["Name"]), "");
    }

    #[test]
    fn id_field_stringifies_numbers() {
        let record = json!({"DestinationId": 5432});
        assert_eq!(id_field(&record, &["DestinationId"]), "5432");
    }

    #[test]
    fn f64_field_accepts_number_or_numeric_string() {
        let as_number = json!({"Latitude": 1.264751});
        let as_string = json!({"Latitude": "1.264751"});
        assert!((f64_field(&as_number, &["Latitude"]) - 1.264_751).abs() < 1e-9);
        assert!((f64_field(&as_string, &["Latitude"]) - 1.264_751).abs() < 1e-9);
    }

    #[test]
    fn f64_field_defaults_to_zero() {
        let record = json!({"Latitude": null});
        assert!(f64_field(&record, &["Latitude"]).abs() < f64::EPSILON);
        assert!(f64_field(&record, &["Longitude"]).abs() < f64::EPSILON);
    }

    #[test]
    fn str_items_skips_non_strings_and_blanks() {
        let record = json!({"Facilities": ["Pool ", 3, "  ", "WiFi"]});
        assert_eq!(
            str_items(record.get("Facilities")),
            vec!["Pool".to_string(), "WiFi".to_string()]
        );
    }

    #[test]
    fn str_items_handles_non_array() {
        let record = json!({"Facilities": "Pool"});
        assert!(str_items(record.get("Facilities")).is_empty());
        assert!(str_items(None).is_empty());
    }

    #[test]
    fn image_items_maps_supplier_keys_to_canonical_pair() {
        let record = json!({"rooms": [
            {"url": "https://img.example/1.jpg", "description": "Double room"},
            {"url": "https://img.example/2.jpg"},
            {"description": "no link"}
        ]});
        let images = image_items(record.get("rooms"), &["url"], &["description"]);
        assert_eq!(images.len(), 2, "entry without a link is skipped");
        assert_eq!(images[0].link, "https://img.example/1.jpg");
        assert_eq!(images[0].description, "Double room");
        assert_eq!(images[1].description, "");
    }
}
