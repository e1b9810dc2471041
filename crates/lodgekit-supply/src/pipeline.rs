//! Catalog pipeline: fetch → normalize → merge → filter.

use std::collections::HashSet;

use futures::stream::{self, StreamExt};
use lodgekit_core::{Hotel, SupplierConfig};

use crate::client::SupplierClient;
use crate::error::SupplyError;
use crate::filter::filter_catalog;
use crate::merge::merge_catalog;
use crate::suppliers::{normalizer_for, SupplierNormalizer};

/// Run the full catalog pipeline over the configured suppliers.
///
/// Payloads are fetched concurrently (bounded by `max_concurrent`), but
/// `buffered` yields them back in input order, so normalization and merge
/// always see suppliers in declared order regardless of completion order.
///
/// Malformed payloads and records are recovered inside the normalizers; a
/// failed fetch fails the whole run.
///
/// # Errors
///
/// - [`SupplyError::UnknownSupplier`] — a configured supplier has no
///   registered normalizer; detected before any network traffic.
/// - Any fetch error from [`SupplierClient::fetch_payload`], after the
///   client's transient-error retries are exhausted.
pub async fn run_catalog(
    client: &SupplierClient,
    suppliers: &[SupplierConfig],
    max_concurrent: usize,
    hotel_ids: &HashSet<String>,
    destination_ids: &HashSet<String>,
) -> Result<Vec<Hotel>, SupplyError> {
    // Resolve every normalizer up front so a misconfigured registry fails
    // the run before any fetch starts.
    let mut resolved: Vec<(&SupplierConfig, &'static dyn SupplierNormalizer)> =
        Vec::with_capacity(suppliers.len());
    for supplier in suppliers {
        let normalizer =
            normalizer_for(&supplier.name).ok_or_else(|| SupplyError::UnknownSupplier {
                name: supplier.name.clone(),
            })?;
        resolved.push((supplier, normalizer));
    }

    let payloads: Vec<serde_json::Value> = stream::iter(
        resolved
            .iter()
            .map(|(supplier, _)| client.fetch_payload(&supplier.name, &supplier.url)),
    )
    .buffered(max_concurrent.max(1))
    .collect::<Vec<_>>()
    .await
    .into_iter()
    .collect::<Result<_, _>>()?;

    let mut normalized: Vec<Hotel> = Vec::new();
    for ((supplier, normalizer), payload) in resolved.iter().zip(&payloads) {
        let batch = normalizer.normalize(payload);
        tracing::debug!(
            supplier = %supplier.name,
            records = batch.len(),
            "normalized supplier payload"
        );
        normalized.extend(batch);
    }

    let merged = merge_catalog(normalized);
    tracing::debug!(hotels = merged.len(), "merged catalog");

    Ok(filter_catalog(merged, hotel_ids, destination_ids))
}
