use std::fmt;
use std::path::{Path, PathBuf};

use ekz_core::Record;

use crate::app_config::DataConfig;
use crate::file_loader::{group_records, read_records, GroupedRecords, LoadStatus, VENDOR_KEY};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    Vendors,
    ShippingTiers,
    Products,
    Categories,
    Brands,
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DataSource::Vendors => "vendors",
            DataSource::ShippingTiers => "shipping_tiers",
            DataSource::Products => "products",
            DataSource::Categories => "categories",
            DataSource::Brands => "brands",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone)]
pub struct SourceReport {
    pub source: DataSource,
    pub path: PathBuf,
    pub status: LoadStatus,
    pub records: usize,
}

/// How each data file fared at startup. Clients never see this; an empty
/// response looks the same whether the file was missing or the vendor has
/// no records.
#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    pub sources: Vec<SourceReport>,
}

impl LoadReport {
    pub fn status_of(&self, source: DataSource) -> Option<LoadStatus> {
        self.sources
            .iter()
            .find(|s| s.source == source)
            .map(|s| s.status)
    }

    pub fn is_degraded(&self) -> bool {
        self.sources.iter().any(|s| s.status != LoadStatus::Loaded)
    }
}

/// Read-only records loaded once at startup and shared by every request.
#[derive(Debug, Default)]
pub struct CatalogState {
    vendors: Vec<Record>,
    shipping_tiers: GroupedRecords,
    products: GroupedRecords,
    categories: GroupedRecords,
    brands: GroupedRecords,
    report: LoadReport,
}

impl CatalogState {
    /// Reads every configured data file. Never fails; unreadable files
    /// contribute no records.
    pub fn load(data: &DataConfig) -> Self {
        let mut report = LoadReport::default();

        let vendors = read_source(&mut report, DataSource::Vendors, &data.vendors);
        let shipping_tiers =
            read_source(&mut report, DataSource::ShippingTiers, &data.shipping_tiers);
        let products = read_source(&mut report, DataSource::Products, &data.products);
        let categories = read_source(&mut report, DataSource::Categories, &data.categories);
        let brands = read_source(&mut report, DataSource::Brands, &data.brands);

        let mut state = Self::from_records(vendors, shipping_tiers, products, categories, brands);
        state.report = report;
        state.log_sample(1);
        state
    }

    /// Builds the state from records already in memory.
    pub fn from_records(
        vendors: Vec<Record>,
        shipping_tiers: Vec<Record>,
        products: Vec<Record>,
        categories: Vec<Record>,
        brands: Vec<Record>,
    ) -> Self {
        Self {
            vendors,
            shipping_tiers: group_records(shipping_tiers, VENDOR_KEY),
            products: group_records(products, VENDOR_KEY),
            categories: group_records(categories, VENDOR_KEY),
            brands: group_records(brands, VENDOR_KEY),
            report: LoadReport::default(),
        }
    }

    pub fn vendors(&self) -> &[Record] {
        &self.vendors
    }

    pub fn shipping_tiers(&self, vendor_id: i64) -> &[Record] {
        lookup(&self.shipping_tiers, vendor_id)
    }

    pub fn products(&self, vendor_id: i64) -> &[Record] {
        lookup(&self.products, vendor_id)
    }

    pub fn categories(&self, vendor_id: i64) -> &[Record] {
        lookup(&self.categories, vendor_id)
    }

    pub fn brands(&self, vendor_id: i64) -> &[Record] {
        lookup(&self.brands, vendor_id)
    }

    pub fn load_report(&self) -> &LoadReport {
        &self.report
    }

    fn log_sample(&self, vendor_id: i64) {
        tracing::debug!(
            vendor_id,
            shipping_tiers = ?self.shipping_tiers(vendor_id),
            "Shipping tiers for vendor"
        );
        tracing::debug!(
            vendor_id,
            categories = ?self.categories(vendor_id),
            "Categories for vendor"
        );
        tracing::debug!(vendor_id, brands = ?self.brands(vendor_id), "Brands for vendor");
    }
}

fn read_source(report: &mut LoadReport, source: DataSource, path: &Path) -> Vec<Record> {
    let outcome = read_records(path);
    match outcome.status {
        LoadStatus::Loaded => tracing::info!(
            source = %source,
            path = %path.display(),
            records = outcome.records.len(),
            "Loaded data file"
        ),
        status => tracing::warn!(
            source = %source,
            path = %path.display(),
            status = %status,
            "Serving empty data for source"
        ),
    }
    report.sources.push(SourceReport {
        source,
        path: path.to_path_buf(),
        status: outcome.status,
        records: outcome.records.len(),
    });
    outcome.records
}

fn lookup(grouped: &GroupedRecords, vendor_id: i64) -> &[Record] {
    grouped
        .get(&Some(vendor_id))
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};
    use std::fs;

    fn records(value: Value) -> Vec<Record> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_lookups_filter_by_vendor() {
        let state = CatalogState::from_records(
            records(json!([{"vendor_id": 1, "name": "Evergreen"}])),
            records(json!([
                {
                    "shipping_tier": "Standard", "shipping_tier_id": 1,
                    "vendor_id": 1, "shipping_cost": 5
                },
                {
                    "shipping_tier": "Express", "shipping_tier_id": 2,
                    "vendor_id": 2, "shipping_cost": 15
                }
            ])),
            Vec::new(),
            records(json!([{"name": "Tools", "category_id": 1, "vendor_id": 3}])),
            Vec::new(),
        );

        assert_eq!(state.vendors().len(), 1);
        assert_eq!(state.shipping_tiers(1).len(), 1);
        assert_eq!(state.shipping_tiers(2)[0]["shipping_tier"], "Express");
        assert_eq!(state.categories(3).len(), 1);
        assert!(state.categories(1).is_empty());
        assert!(state.products(1).is_empty());
        assert!(state.brands(99).is_empty());
    }

    #[test]
    fn test_load_reports_missing_sources() {
        let dir = tempfile::tempdir().unwrap();
        let vendors = dir.path().join("vendors.json");
        let brands = dir.path().join("brands.json");
        fs::write(&vendors, r#"[{"vendor_id": 1, "name": "Evergreen"}]"#).unwrap();
        fs::write(&brands, r#"[{"name": "Acme", "brand_id": 1, "vendor_id": 1}"#).unwrap();

        let data = DataConfig {
            vendors,
            shipping_tiers: dir.path().join("missing.json"),
            products: dir.path().join("missing.json"),
            categories: dir.path().join("missing.json"),
            brands,
        };
        let state = CatalogState::load(&data);

        assert_eq!(state.vendors().len(), 1);
        assert!(state.shipping_tiers(1).is_empty());
        assert!(state.brands(1).is_empty());

        let report = state.load_report();
        assert!(report.is_degraded());
        assert_eq!(report.status_of(DataSource::Vendors), Some(LoadStatus::Loaded));
        assert_eq!(report.status_of(DataSource::ShippingTiers), Some(LoadStatus::Missing));
        assert_eq!(report.status_of(DataSource::Brands), Some(LoadStatus::Malformed));
    }
}
