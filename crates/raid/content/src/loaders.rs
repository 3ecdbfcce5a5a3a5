//! Catalog loader for reading upgrade data from RON files.

use std::path::Path;

use crate::catalog::UpgradeCatalog;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Loads upgrade catalogs from RON data.
pub struct CatalogLoader;

impl CatalogLoader {
    /// Loads a catalog from a RON file on disk.
    pub fn load(path: &Path) -> LoadResult<UpgradeCatalog> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read catalog file {}: {}", path.display(), e))?;
        Self::from_str(&content)
    }

    /// Parses a catalog from RON text.
    pub fn from_str(content: &str) -> LoadResult<UpgradeCatalog> {
        ron::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse catalog RON: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
(
    upgrades: [
        (
            key: "run_watch",
            name: "Runner's Watch",
            description: "Counts every run one extra minute per level.",
            sport: run,
            max_level: 10,
            base_price: 100,
            effect: duration_boost(minutes_per_level: 1),
        ),
        (
            key: "run_super",
            name: "Titanium Sneaker",
            description: "Doubles all damage.",
            sport: run,
            max_level: 1,
            base_price: 2000,
            effect: super_charge,
            prerequisites: ["run_watch"],
        ),
    ],
)
"#;

    #[test]
    fn parses_a_catalog_from_ron() {
        let catalog = CatalogLoader::from_str(SAMPLE).unwrap();
        assert_eq!(catalog.upgrades.len(), 2);

        let registry = catalog.into_registry().unwrap();
        let sneaker = registry.get("run_super").unwrap();
        assert_eq!(sneaker.prerequisites(), ["run_watch"]);
        assert_eq!(sneaker.price(0), Some(2000));
    }

    #[test]
    fn missing_prerequisites_field_defaults_to_empty() {
        let catalog = CatalogLoader::from_str(SAMPLE).unwrap();
        let watch = &catalog.upgrades[0];
        assert!(watch.prerequisites().is_empty());
    }

    #[test]
    fn malformed_ron_reports_a_parse_error() {
        let err = CatalogLoader::from_str("(upgrades: [").unwrap_err();
        assert!(err.to_string().contains("parse"));
    }

    #[test]
    fn builtin_catalog_round_trips_through_ron() {
        let builtin = crate::builtin_catalog();
        let text = ron::to_string(&builtin).unwrap();
        let reparsed = CatalogLoader::from_str(&text).unwrap();
        assert_eq!(reparsed, builtin);
    }
}
