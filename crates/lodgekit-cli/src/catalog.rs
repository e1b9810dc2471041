//! Catalog command handlers for the CLI.

use std::collections::HashSet;

use anyhow::Context;
use lodgekit_core::AppConfig;
use lodgekit_supply::SupplierClient;

/// Translate a CLI id-list argument into the filter set handed to the core.
///
/// The literal `none` (any casing) and blank input both mean "no
/// restriction" and become the empty set, the core's sentinel for
/// match-all. Blank segments from stray commas are dropped.
pub(crate) fn parse_id_filter(raw: &str) -> HashSet<String> {
    if raw.trim().is_empty() || raw.trim().eq_ignore_ascii_case("none") {
        return HashSet::new();
    }

    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Run the full pipeline and print the filtered catalog as pretty JSON.
pub(crate) async fn run_catalog_command(
    config: &AppConfig,
    hotels: &str,
    destinations: &str,
) -> anyhow::Result<()> {
    let hotel_ids = parse_id_filter(hotels);
    let destination_ids = parse_id_filter(destinations);

    let suppliers_file = lodgekit_core::load_suppliers(&config.suppliers_path)
        .with_context(|| format!("loading suppliers from {}", config.suppliers_path.display()))?;

    let client = SupplierClient::new(
        config.fetch_timeout_secs,
        &config.fetch_user_agent,
        config.fetch_max_retries,
        config.fetch_retry_backoff_base_secs,
    )
    .context("building supplier HTTP client")?;

    let catalog = lodgekit_supply::run_catalog(
        &client,
        &suppliers_file.suppliers,
        config.fetch_max_concurrent_suppliers,
        &hotel_ids,
        &destination_ids,
    )
    .await
    .context("catalog pipeline failed")?;

    tracing::info!(hotels = catalog.len(), "catalog ready");
    println!("{}", serde_json::to_string_pretty(&catalog)?);

    Ok(())
}

/// Print the configured suppliers in declared merge order.
pub(crate) fn run_suppliers_command(config: &AppConfig) -> anyhow::Result<()> {
    let suppliers_file = lodgekit_core::load_suppliers(&config.suppliers_path)
        .with_context(|| format!("loading suppliers from {}", config.suppliers_path.display()))?;

    println!("{} configured supplier(s), in merge order:", suppliers_file.suppliers.len());
    for supplier in &suppliers_file.suppliers {
        println!("  {:<12} {}", supplier.name, supplier.url);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_sentinel_means_no_restriction() {
        assert!(parse_id_filter("none").is_empty());
        assert!(parse_id_filter("NONE").is_empty());
        assert!(parse_id_filter(" none ").is_empty());
        assert!(parse_id_filter("").is_empty());
    }

    #[test]
    fn splits_comma_separated_ids() {
        let ids = parse_id_filter("iJhz,SjyX");
        assert_eq!(ids.len(), 2);
        assert!(ids.contains("iJhz"));
        assert!(ids.contains("SjyX"));
    }

    #[test]
    fn trims_segments_and_drops_blanks() {
        let ids = parse_id_filter(" iJhz , ,SjyX,");
        assert_eq!(ids.len(), 2);
        assert!(ids.contains("iJhz"));
        assert!(ids.contains("SjyX"));
    }

    #[test]
    fn literal_none_inside_a_list_is_an_ordinary_id() {
        // Only the whole argument equal to "none" is the sentinel.
        let ids = parse_id_filter("none,iJhz");
        assert_eq!(ids.len(), 2);
        assert!(ids.contains("none"));
    }
}
