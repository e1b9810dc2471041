//! Normalizer for the `paperflies` supplier.
//!
//! Paperflies is the richest source: snake_case keys, a nested
//! `location` object (address and country only, no coordinates), amenities
//! already split into general/room, image entries captioned with `caption`
//! instead of the canonical `description`, and the only source of booking
//! conditions.

use lodgekit_core::{Amenities, Hotel, Images, Location};
use serde_json::Value;

use super::decode::{id_field, image_items, str_field, str_items};
use super::{normalize_batch, SupplierNormalizer};

pub struct Paperflies;

impl SupplierNormalizer for Paperflies {
    fn name(&self) -> &'static str {
        "paperflies"
    }

    fn normalize(&self, payload: &Value) -> Vec<Hotel> {
        normalize_batch(self.name(), payload, decode_record)
    }
}

fn decode_record(record: &Value) -> Result<Hotel, String> {
    if !record.is_object() {
        return Err("record is not a JSON object".to_string());
    }

    let id = id_field(record, &["hotel_id"]);
    if id.is_empty() {
        return Err("missing or empty hotel_id".to_string());
    }

    let location = record.get("location").unwrap_or(&Value::Null);
    let amenities = record.get("amenities").unwrap_or(&Value::Null);
    let images = record.get("images");

    Ok(Hotel {
        id,
        destination_id: id_field(record, &["destination_id"]),
        name: str_field(record, &["hotel_name"]),
        location: Location {
            lat: 0.0,
            lng: 0.0,
            address: str_field(location, &["address"]),
            city: String::new(),
            country: str_field(location, &["country"]),
        },
        description: str_field(record, &["details"]),
        amenities: Amenities {
            general: str_items(amenities.get("general")),
            room: str_items(amenities.get("room")),
        },
        images: Images {
            rooms: image_items(images.and_then(|i| i.get("rooms")), &["link"], &["caption"]),
            site: image_items(images.and_then(|i| i.get("site")), &["link"], &["caption"]),
            amenities: Vec::new(),
        },
        booking_conditions: str_items(record.get("booking_conditions")),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_record() -> Value {
        json!({
            "hotel_id": "iJhz",
            "destination_id": 5432,
            "hotel_name": "Beach Villas Singapore",
            "location": {
                "address": "8 Sentosa Gateway, Beach Villas, 098269",
                "country": "Singapore"
            },
            "details": "Surrounded by tranquil gardens and an outdoor pool.",
            "amenities": {
                "general": ["outdoor pool", "business center", "childcare"],
                "room": ["tv", "coffee machine", "kettle"]
            },
            "images": {
                "rooms": [
                    {"link": "https://d2ey9sqrvkqdfs.cloudfront.net/0qZF/2.jpg", "caption": "Double room"}
                ],
                "site": [
                    {"link": "https://d2ey9sqrvkqdfs.cloudfront.net/0qZF/1.jpg", "caption": "Front"}
                ]
            },
            "booking_conditions": [
                "All children are welcome.",
                "WiFi is available in all areas and is free of charge."
            ]
        })
    }

    #[test]
    fn decodes_full_record() {
        let hotels = Paperflies.normalize(&json!([sample_record()]));
        assert_eq!(hotels.len(), 1);
        let hotel = &hotels[0];
        assert_eq!(hotel.id, "iJhz");
        assert_eq!(hotel.name, "Beach Villas Singapore");
        assert_eq!(hotel.location.address, "8 Sentosa Gateway, Beach Villas, 098269");
        assert_eq!(hotel.location.country, "Singapore");
        assert!(hotel.location.lat.abs() < f64::EPSILON, "paperflies has no coordinates");
        assert_eq!(hotel.amenities.general.len(), 3);
        assert_eq!(hotel.amenities.room.len(), 3);
        assert_eq!(hotel.images.rooms[0].description, "Double room", "caption maps to description");
        assert_eq!(hotel.images.site[0].link, "https://d2ey9sqrvkqdfs.cloudfront.net/0qZF/1.jpg");
        assert_eq!(hotel.booking_conditions.len(), 2);
    }

    #[test]
    fn missing_location_object_decodes_to_empty_fields() {
        let hotels = Paperflies.normalize(&json!([{"hotel_id": "SjyX", "destination_id": 5432}]));
        let hotel = &hotels[0];
        assert_eq!(hotel.location.address, "");
        assert_eq!(hotel.location.country, "");
        assert!(hotel.amenities.general.is_empty());
        assert!(hotel.booking_conditions.is_empty());
    }

    #[test]
    fn drops_record_without_hotel_id() {
        let payload = json!([{"hotel_name": "Nameless"}, sample_record()]);
        let hotels = Paperflies.normalize(&payload);
        assert_eq!(hotels.len(), 1);
        assert_eq!(hotels[0].id, "iJhz");
    }
}
