//! Normalizer for the `patagonia` supplier.
//!
//! Patagonia uses short lowercase keys with geo at the top level, calls
//! the description `info`, and publishes one flat amenity list covering
//! in-room equipment. Image entries carry `url` instead of the canonical
//! `link`. City and country are never provided.

use lodgekit_core::{Amenities, Hotel, Images, Location};
use serde_json::Value;

use super::decode::{f64_field, id_field, image_items, str_field, str_items};
use super::{normalize_batch, SupplierNormalizer};

pub struct Patagonia;

impl SupplierNormalizer for Patagonia {
    fn name(&self) -> &'static str {
        "patagonia"
    }

    fn normalize(&self, payload: &Value) -> Vec<Hotel> {
        normalize_batch(self.name(), payload, decode_record)
    }
}

fn decode_record(record: &Value) -> Result<Hotel, String> {
    if !record.is_object() {
        return Err("record is not a JSON object".to_string());
    }

    let id = id_field(record, &["id"]);
    if id.is_empty() {
        return Err("missing or empty id".to_string());
    }

    let images = record.get("images");

    Ok(Hotel {
        id,
        destination_id: id_field(record, &["destination"]),
        name: str_field(record, &["name"]),
        location: Location {
            lat: f64_field(record, &["lat"]),
            lng: f64_field(record, &["lng"]),
            address: str_field(record, &["address"]),
            city: String::new(),
            country: String::new(),
        },
        description: str_field(record, &["info"]),
        amenities: Amenities {
            general: Vec::new(),
            // The flat patagonia list names in-room equipment (aircon, tv,
            // coffee machine), so it maps to the room category.
            room: str_items(record.get("amenities")),
        },
        images: Images {
            rooms: image_items(
                images.and_then(|i| i.get("rooms")),
                &["url"],
                &["description"],
            ),
            site: Vec::new(),
            amenities: image_items(
                images.and_then(|i| i.get("amenities")),
                &["url"],
                &["description"],
            ),
        },
        booking_conditions: Vec::new(),
    })
}
