//! Normalizer for the `acme` supplier.
//!
//! Acme publishes a flat object per hotel with PascalCase keys and geo
//! coordinates at the top level (`Latitude`/`Longitude`, numbers in most
//! revisions, numeric strings in others). Facilities are a single flat
//! list with no category split; acme has no images and no booking
//! conditions.

use lodgekit_core::{Amenities, Hotel, Images, Location};
use serde_json::Value;

use super::decode::{f64_field, id_field, str_field, str_items};
use super::{normalize_batch, SupplierNormalizer};

pub struct Acme;

impl SupplierNormalizer for Acme {
    fn name(&self) -> &'static str {
        "acme"
    }

    fn normalize(&self, payload: &Value) -> Vec<Hotel> {
        normalize_batch(self.name(), payload, decode_record)
    }
}

fn decode_record(record: &Value) -> Result<Hotel, String> {
    if !record.is_object() {
        return Err("record is not a JSON object".to_string());
    }

    let id = id_field(record, &["Id"]);
    if id.is_empty() {
        return Err("missing or empty Id".to_string());
    }

    Ok(Hotel {
        id,
        destination_id: id_field(record, &["DestinationId"]),
        name: str_field(record, &["Name"]),
        location: Location {
            lat: f64_field(record, &["Latitude"]),
            lng: f64_field(record, &["Longitude"]),
            address: str_field(record, &["Address"]),
            city: str_field(record, &["City"]),
            country: str_field(record, &["Country"]),
        },
        description: str_field(record, &["Description"]),
        amenities: Amenities {
            // Acme does not categorize; the merge reassigns terms that other
            // suppliers file under room.
            general: str_items(record.get("Facilities")),
            room: Vec::new(),
        },
        images: Images::default(),
        booking_conditions: Vec::new(),
    })
}
