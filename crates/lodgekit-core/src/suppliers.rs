use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// One configured hotel supplier.
///
/// The position of an entry in `suppliers.yaml` is significant: payloads are
/// concatenated in declared file order before the merge, which is what makes
/// reconciliation deterministic regardless of fetch completion order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupplierConfig {
    pub name: String,
    pub url: String,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SuppliersFile {
    pub suppliers: Vec<SupplierConfig>,
}

/// Load and validate the supplier registry from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails
/// validation.
pub fn load_suppliers(path: &Path) -> Result<SuppliersFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::SuppliersFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let suppliers_file: SuppliersFile =
        serde_yaml::from_str(&content).map_err(ConfigError::SuppliersFileParse)?;

    validate_suppliers(&suppliers_file)?;

    Ok(suppliers_file)
}

fn validate_suppliers(suppliers_file: &SuppliersFile) -> Result<(), ConfigError> {
    if suppliers_file.suppliers.is_empty() {
        return Err(ConfigError::Validation(
            "suppliers file must declare at least one supplier".to_string(),
        ));
    }

    let mut seen_names = HashSet::new();

    for supplier in &suppliers_file.suppliers {
        if supplier.name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "supplier name must be non-empty".to_string(),
            ));
        }

        if !supplier.url.starts_with("http://") && !supplier.url.starts_with("https://") {
            return Err(ConfigError::Validation(format!(
                "supplier '{}' has invalid url '{}'; must be http(s)",
                supplier.name, supplier.url
            )));
        }

        let lower_name = supplier.name.to_lowercase();
        if !seen_names.insert(lower_name) {
            return Err(ConfigError::Validation(format!(
                "duplicate supplier name: '{}'",
                supplier.name
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn supplier(name: &str, url: &str) -> SupplierConfig {
        SupplierConfig {
            name: name.to_string(),
            url: url.to_string(),
            notes: None,
        }
    }

    #[test]
    fn validate_accepts_distinct_suppliers() {
        let file = SuppliersFile {
            suppliers: vec![
                supplier("acme", "https://suppliers.example/acme"),
                supplier("patagonia", "https://suppliers.example/patagonia"),
            ],
        };
        assert!(validate_suppliers(&file).is_ok());
    }

    #[test]
    fn validate_rejects_empty_file() {
        let file = SuppliersFile { suppliers: vec![] };
        assert!(matches!(
            validate_suppliers(&file),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn validate_rejects_blank_name() {
        let file = SuppliersFile {
            suppliers: vec![supplier("  ", "https://suppliers.example/x")],
        };
        assert!(matches!(
            validate_suppliers(&file),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn validate_rejects_duplicate_name_case_insensitive() {
        let file = SuppliersFile {
            suppliers: vec![
                supplier("acme", "https://suppliers.example/a"),
                supplier("Acme", "https://suppliers.example/b"),
            ],
        };
        let err = validate_suppliers(&file).unwrap_err();
        assert!(
            matches!(err, ConfigError::Validation(ref msg) if msg.contains("duplicate")),
            "expected duplicate-name validation error, got: {err:?}"
        );
    }

    #[test]
    fn validate_rejects_non_http_url() {
        let file = SuppliersFile {
            suppliers: vec![supplier("acme", "ftp://suppliers.example/acme")],
        };
        assert!(matches!(
            validate_suppliers(&file),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn parses_yaml_with_declared_order_preserved() {
        let yaml = r"
suppliers:
  - name: acme
    url: https://suppliers.example/acme
  - name: patagonia
    url: https://suppliers.example/patagonia
    notes: geo at top level
  - name: paperflies
    url: https://suppliers.example/paperflies
";
        let file: SuppliersFile = serde_yaml::from_str(yaml).expect("valid yaml");
        validate_suppliers(&file).expect("valid suppliers");
        let names: Vec<_> = file.suppliers.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["acme", "patagonia", "paperflies"]);
        assert_eq!(
            file.suppliers[1].notes.as_deref(),
            Some("geo at top level")
        );
    }

    #[test]
    fn load_suppliers_from_real_file() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("..")
            .join("..")
            .join("config")
            .join("suppliers.yaml");
        assert!(
            path.exists(),
            "suppliers.yaml missing at {path:?} — required for this test"
        );
        let suppliers_file = load_suppliers(&path).expect("failed to load suppliers.yaml");
        assert!(
            !suppliers_file.suppliers.is_empty(),
            "suppliers.yaml should contain at least one supplier"
        );
    }
}
