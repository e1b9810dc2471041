//! Catalog filtering by hotel id and destination id.

use std::collections::HashSet;

use lodgekit_core::Hotel;

/// Select records matching both id conditions.
///
/// An empty `hotel_ids` set means "no restriction by hotel id"; same for
/// `destination_ids`. This is a deliberate sentinel: an explicitly empty
/// filter matches everything, never nothing. Surviving records keep the
/// order produced by the merge.
#[must_use]
pub fn filter_catalog(
    records: Vec<Hotel>,
    hotel_ids: &HashSet<String>,
    destination_ids: &HashSet<String>,
) -> Vec<Hotel> {
    records
        .into_iter()
        .filter(|hotel| {
            let hotel_ok = hotel_ids.is_empty() || hotel_ids.contains(&hotel.id);
            let destination_ok =
                destination_ids.is_empty() || destination_ids.contains(&hotel.destination_id);
            hotel_ok && destination_ok
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hotel(id: &str, destination_id: &str) -> Hotel {
        Hotel {
            id: id.to_string(),
            destination_id: destination_id.to_string(),
            ..Hotel::default()
        }
    }

    fn ids(values: &[&str]) -> HashSet<String> {
        values.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn empty_filters_return_everything_unchanged() {
        let records = vec![hotel("iJhz", "5432"), hotel("SjyX", "5432"), hotel("f8c9", "1122")];
        let filtered = filter_catalog(records.clone(), &HashSet::new(), &HashSet::new());
        assert_eq!(filtered, records, "sentinel must preserve content and order");
    }

    #[test]
    fn hotel_id_filter_keeps_only_listed_ids() {
        let records = vec![hotel("iJhz", "5432"), hotel("SjyX", "5432")];
        let filtered = filter_catalog(records, &ids(&["SjyX"]), &HashSet::new());
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "SjyX");
    }

    #[test]
    fn conditions_combine_with_logical_and() {
        let records = vec![hotel("iJhz", "5432"), hotel("f8c9", "1122")];
        let filtered = filter_catalog(records, &ids(&["iJhz", "f8c9"]), &ids(&["1122"]));
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "f8c9");
    }

    #[test]
    fn destination_comparison_uses_string_form() {
        let records = vec![hotel("iJhz", "5432")];
        let filtered = filter_catalog(records, &HashSet::new(), &ids(&["5432"]));
        assert_eq!(filtered.len(), 1);
    }

    #[test]
    fn non_matching_filter_returns_empty() {
        let records = vec![hotel("iJhz", "5432")];
        let filtered = filter_catalog(records, &ids(&["nope"]), &HashSet::new());
        assert!(filtered.is_empty());
    }
}
