//! Per-supplier payload normalizers.
//!
//! Each supplier publishes the same hotels in an incompatible JSON schema.
//! One [`SupplierNormalizer`] implementation per supplier maps that shape
//! into canonical [`Hotel`] records; schema knowledge lives here and
//! nowhere else. The reconciliation engine never branches on supplier
//! names; new suppliers are added by registering a new implementation.

mod acme;
mod decode;
mod paperflies;
mod patagonia;

pub use acme::Acme;
pub use paperflies::Paperflies;
pub use patagonia::Patagonia;

use lodgekit_core::Hotel;
use serde_json::Value;

/// Maps one supplier's raw payload into canonical hotel records.
///
/// `normalize` is total: a payload that is not a JSON array produces an
/// empty batch (logged as a warning), and a record that cannot be decoded
/// is dropped (logged) without aborting the batch. Output ordering matches
/// input ordering.
pub trait SupplierNormalizer: Send + Sync {
    /// The configured supplier name this normalizer serves.
    fn name(&self) -> &'static str;

    /// Normalize one raw payload into canonical records.
    fn normalize(&self, payload: &Value) -> Vec<Hotel>;
}

/// Look up the normalizer for a configured supplier name.
///
/// Returns `None` for names with no registered implementation; the
/// pipeline treats that as a fatal configuration error.
#[must_use]
pub fn normalizer_for(name: &str) -> Option<&'static dyn SupplierNormalizer> {
    match name {
        "acme" => Some(&Acme),
        "patagonia" => Some(&Patagonia),
        "paperflies" => Some(&Paperflies),
        _ => None,
    }
}

/// Shared batch walk: decode each element of an array payload, dropping
/// elements that fail to decode. Used by every normalizer.
fn normalize_batch<F>(supplier: &'static str, payload: &Value, decode: F) -> Vec<Hotel>
where
    F: Fn(&Value) -> Result<Hotel, String>,
{
    let Some(entries) = payload.as_array() else {
        tracing::warn!(supplier, "invalid payload shape: expected a JSON array");
        return Vec::new();
    };

    entries
        .iter()
        .filter_map(|entry| match decode(entry) {
            Ok(hotel) => Some(hotel),
            Err(reason) => {
                tracing::warn!(supplier, %reason, "dropping unmappable supplier record");
                None
            }
        })
        .collect()
}
