use serde::{Deserialize, Serialize};

/// A hotel listing in the canonical catalog schema.
///
/// Every supplier payload is normalized into this shape before
/// reconciliation; the merged catalog contains exactly one `Hotel` per
/// distinct `id`. Absent supplier fields are represented by the canonical
/// empty value for the type (`""`, `0.0`, `[]`); serialized output never
/// contains `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Hotel {
    /// Identity key across suppliers. Non-empty for every record a
    /// normalizer emits; uniqueness is enforced by the merge.
    pub id: String,
    /// Destination grouping key, stored as a string even when a supplier
    /// publishes it as a number. Used for filtering, not identity.
    pub destination_id: String,
    pub name: String,
    pub location: Location,
    pub description: String,
    pub amenities: Amenities,
    pub images: Images,
    /// Free-text booking conditions, deduplicated by exact string equality.
    pub booking_conditions: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
    pub address: String,
    pub city: String,
    pub country: String,
}

/// Amenity terms split by category.
///
/// After reconciliation both lists hold the normalized (lowercased,
/// whitespace-collapsed) form, and no term appears in both lists: `room`
/// wins when a supplier files the same term under both categories.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Amenities {
    pub general: Vec<String>,
    pub room: Vec<String>,
}

/// Image collections keyed by subject, each deduplicated by full
/// `(link, description)` equality.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Images {
    pub rooms: Vec<Image>,
    pub site: Vec<Image>,
    pub amenities: Vec<Image>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Image {
    pub link: String,
    pub description: String,
}
