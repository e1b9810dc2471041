//! Catalog reconciliation: merge-by-identity with field-level conflict
//! resolution.
//!
//! The engine folds a normalized record sequence into one record per
//! distinct hotel id, in a single left-to-right pass. Callers hand it the
//! supplier batches concatenated in declared supplier order, which makes
//! the outcome reproducible regardless of fetch latency. The stage
//! performs no I/O and cannot fail on normalizer output.
//!
//! Field policy (the defensive variant):
//! - scalars: an empty value never overwrites a non-empty one, and the
//!   existing value otherwise wins;
//! - description: the longer non-empty string wins, ties keep existing;
//! - set fields: ordered union, first-processed order wins;
//! - amenities: compared and stored in normalized form (lowercase,
//!   collapsed whitespace), with `room` taking precedence over `general`
//!   for ambiguous terms.

use std::collections::{HashMap, HashSet};

use lodgekit_core::{Amenities, Hotel, Image, Images, Location};

/// Merge normalized records into one record per distinct `id`.
///
/// Output order is the insertion order of first occurrence. Every output
/// record is canonical: amenity lists normalized with room precedence
/// applied, set fields deduplicated.
#[must_use]
pub fn merge_catalog(records: Vec<Hotel>) -> Vec<Hotel> {
    let mut merged: Vec<Hotel> = Vec::new();
    let mut slots: HashMap<String, usize> = HashMap::new();

    for record in records {
        if let Some(&slot) = slots.get(&record.id) {
            let combined = merge_hotels(&merged[slot], &record);
            merged[slot] = combined;
        } else {
            slots.insert(record.id.clone(), merged.len());
            merged.push(canonicalize(record));
        }
    }

    merged
}

/// Merge one update record into a base record, field by field.
///
/// Pure: neither input is mutated; the result is a fresh record. The base
/// record's `id` is kept (callers only merge records sharing an id).
#[must_use]
pub fn merge_hotels(base: &Hotel, update: &Hotel) -> Hotel {
    let mut amenities = Amenities {
        general: union_normalized(&base.amenities.general, &update.amenities.general),
        room: union_normalized(&base.amenities.room, &update.amenities.room),
    };
    apply_room_precedence(&mut amenities);

    Hotel {
        id: base.id.clone(),
        destination_id: prefer_non_empty(&base.destination_id, &update.destination_id),
        name: prefer_non_empty(&base.name, &update.name),
        location: Location {
            lat: prefer_non_zero(base.location.lat, update.location.lat),
            lng: prefer_non_zero(base.location.lng, update.location.lng),
            address: prefer_non_empty(&base.location.address, &update.location.address),
            city: prefer_non_empty(&base.location.city, &update.location.city),
            country: prefer_non_empty(&base.location.country, &update.location.country),
        },
        description: longer_description(&base.description, &update.description),
        amenities,
        images: Images {
            rooms: union_images(&base.images.rooms, &update.images.rooms),
            site: union_images(&base.images.site, &update.images.site),
            amenities: union_images(&base.images.amenities, &update.images.amenities),
        },
        booking_conditions: union_exact(&base.booking_conditions, &update.booking_conditions),
    }
}

/// Bring a first-seen record into canonical form by merging it into an
/// empty record with the same id. This runs every in-record invariant
/// (amenity normalization, room precedence, set dedup) through the same
/// code path as cross-supplier merges.
fn canonicalize(record: Hotel) -> Hotel {
    let seed = Hotel {
        id: record.id.clone(),
        ..Hotel::default()
    };
    merge_hotels(&seed, &record)
}

fn prefer_non_empty(existing: &str, incoming: &str) -> String {
    if existing.is_empty() {
        incoming.to_string()
    } else {
        existing.to_string()
    }
}

// 0.0 is the canonical empty value for coordinates.
fn prefer_non_zero(existing: f64, incoming: f64) -> f64 {
    if existing == 0.0 {
        incoming
    } else {
        existing
    }
}

fn longer_description(existing: &str, incoming: &str) -> String {
    if incoming.len() > existing.len() {
        incoming.to_string()
    } else {
        existing.to_string()
    }
}

/// Comparison and storage form for amenity terms: lowercased, internal
/// whitespace collapsed to single spaces.
fn amenity_key(value: &str) -> String {
    value
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Union two amenity lists as an ordered set over normalized terms.
fn union_normalized(existing: &[String], incoming: &[String]) -> Vec<String> {
    let mut out = Vec::new();
    let mut seen = HashSet::new();

    for value in existing.iter().chain(incoming) {
        let key = amenity_key(value);
        if key.is_empty() {
            continue;
        }
        if seen.insert(key.clone()) {
            out.push(key);
        }
    }

    out
}

/// Remove from `general` every term also present in `room`. Both lists are
/// already in normalized form, so direct equality suffices.
fn apply_room_precedence(amenities: &mut Amenities) {
    let room: HashSet<&String> = amenities.room.iter().collect();
    amenities.general.retain(|term| !room.contains(term));
}

/// Union image lists as an ordered set under full `(link, description)`
/// equality.
fn union_images(existing: &[Image], incoming: &[Image]) -> Vec<Image> {
    let mut out: Vec<Image> = Vec::new();
    for image in existing.iter().chain(incoming) {
        if !out.contains(image) {
            out.push(image.clone());
        }
    }
    out
}

/// Union string lists as an ordered set under exact equality.
fn union_exact(existing: &[String], incoming: &[String]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for value in existing.iter().chain(incoming) {
        if !out.contains(value) {
            out.push(value.clone());
        }
    }
    out
}
