//! Fallback sample rows shown while the backend has nothing to offer.
//!
//! The fallback is opt-in through configuration and every view that shows
//! sample rows labels them as such.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::info;

use crate::domain::entities::filter::FilterSelection;
use crate::domain::entities::record::{ManufacturerRecord, MedicineRecord, PriceRecord};
use crate::infra::import::csv::load_records_csv;
use crate::usecase::endpoints::params;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FallbackSource {
    #[default]
    Disabled,
    BuiltIn,
    /// Directory holding `medicines.csv`, `manufacturers.csv`, `prices.csv`.
    Directory(PathBuf),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampleData {
    pub medicines: Vec<MedicineRecord>,
    pub manufacturers: Vec<ManufacturerRecord>,
    pub prices: Vec<PriceRecord>,
}

impl SampleData {
    pub fn load(source: &FallbackSource) -> Result<Self> {
        let data = match source {
            FallbackSource::Disabled => Self::default(),
            FallbackSource::BuiltIn => Self::built_in(),
            FallbackSource::Directory(dir) => Self {
                medicines: load_if_present(&dir.join("medicines.csv"))?,
                manufacturers: load_if_present(&dir.join("manufacturers.csv"))?,
                prices: load_if_present(&dir.join("prices.csv"))?,
            },
        };
        info!(
            ?source,
            medicines = data.medicines.len(),
            manufacturers = data.manufacturers.len(),
            prices = data.prices.len(),
            "fallback sample data ready"
        );
        Ok(data)
    }

    pub fn built_in() -> Self {
        let medicine = |trade_name: &str, inn: &str, drug_type: &str, country: &str, manufacturer: &str, year: i32| {
            MedicineRecord {
                trade_name: trade_name.to_string(),
                inn: inn.to_string(),
                drug_type: drug_type.to_string(),
                country: country.to_string(),
                manufacturer: manufacturer.to_string(),
                registration_year: Some(year),
            }
        };
        let manufacturer = |name: &str, country: &str, product_count: u64| ManufacturerRecord {
            manufacturer: name.to_string(),
            country: country.to_string(),
            product_count,
        };
        let price = |trade_name: &str, dosage: &str, area: &str, drug_type: &str, value: f64| PriceRecord {
            trade_name: trade_name.to_string(),
            dosage: dosage.to_string(),
            area: area.to_string(),
            drug_type: drug_type.to_string(),
            price: value,
            currency: "USD".to_string(),
        };

        Self {
            medicines: vec![
                medicine("Panadol", "Paracetamol", "Tablet", "United Kingdom", "GSK", 2015),
                medicine("Nurofen", "Ibuprofen", "Tablet", "United Kingdom", "Reckitt", 2017),
                medicine("Augmentin", "Amoxicillin/Clavulanate", "Powder", "United Kingdom", "GSK", 2012),
                medicine("Lipitor", "Atorvastatin", "Tablet", "United States", "Pfizer", 2009),
                medicine("Glucophage", "Metformin", "Tablet", "France", "Merck KGaA", 2011),
                medicine("Ventolin", "Salbutamol", "Inhaler", "United Kingdom", "GSK", 2014),
                medicine("Nexium", "Esomeprazole", "Capsule", "Sweden", "AstraZeneca", 2013),
                medicine("Concor", "Bisoprolol", "Tablet", "Germany", "Merck KGaA", 2016),
                medicine("Ceftriaxone-KMP", "Ceftriaxone", "Injection", "Kazakhstan", "Khimpharm", 2019),
                medicine("Lantus", "Insulin glargine", "Injection", "Germany", "Sanofi", 2010),
                medicine("Eliquis", "Apixaban", "Tablet", "United States", "Bristol-Myers Squibb", 2018),
                medicine("Humira", "Adalimumab", "Injection", "United States", "AbbVie", 2008),
            ],
            manufacturers: vec![
                manufacturer("Pfizer", "United States", 412),
                manufacturer("GSK", "United Kingdom", 388),
                manufacturer("Sanofi", "France", 356),
                manufacturer("Novartis", "Switzerland", 341),
                manufacturer("AstraZeneca", "Sweden", 297),
                manufacturer("Merck KGaA", "Germany", 264),
                manufacturer("Teva", "Israel", 251),
                manufacturer("Khimpharm", "Kazakhstan", 118),
            ],
            prices: vec![
                price("Panadol", "500 mg x 24", "Almaty", "Tablet", 2.4),
                price("Panadol", "500 mg x 24", "Astana", "Tablet", 2.6),
                price("Nurofen", "200 mg x 24", "Almaty", "Tablet", 3.9),
                price("Augmentin", "875/125 mg x 14", "Shymkent", "Powder", 11.2),
                price("Lipitor", "20 mg x 30", "Astana", "Tablet", 18.5),
                price("Ventolin", "100 mcg/dose", "Almaty", "Inhaler", 6.75),
                price("Lantus", "100 IU/ml 3 ml x 5", "Astana", "Injection", 74.0),
                price("Ceftriaxone-KMP", "1 g vial", "Shymkent", "Injection", 1.35),
            ],
        }
    }
}

fn load_if_present<R>(path: &Path) -> Result<Vec<R>>
where
    R: serde::de::DeserializeOwned,
{
    if !path.is_file() {
        return Ok(Vec::new());
    }
    load_records_csv(path)
}

/// Exposes a record's value for a filter parameter name.
pub trait FilterFields {
    fn filter_field(&self, name: &str) -> Option<String>;
}

impl FilterFields for MedicineRecord {
    fn filter_field(&self, name: &str) -> Option<String> {
        match name {
            params::DRUG_TYPE => Some(self.drug_type.clone()),
            params::COUNTRY => Some(self.country.clone()),
            _ => None,
        }
    }
}

impl FilterFields for ManufacturerRecord {
    fn filter_field(&self, name: &str) -> Option<String> {
        match name {
            params::COUNTRY => Some(self.country.clone()),
            _ => None,
        }
    }
}

impl FilterFields for PriceRecord {
    fn filter_field(&self, name: &str) -> Option<String> {
        match name {
            params::AREA => Some(self.area.clone()),
            params::DRUG_TYPE => Some(self.drug_type.clone()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedRows<R> {
    pub rows: Vec<R>,
    pub from_sample: bool,
}

/// Live rows when there are any; otherwise the sample rows the current
/// filters admit. An empty sample set yields empty live rows.
pub fn resolve_rows<R>(live: &[R], sample: &[R], filters: &FilterSelection) -> ResolvedRows<R>
where
    R: Clone + FilterFields,
{
    if !live.is_empty() || sample.is_empty() {
        return ResolvedRows {
            rows: live.to_vec(),
            from_sample: false,
        };
    }
    ResolvedRows {
        rows: sample
            .iter()
            .filter(|row| filters.admits(|name| row.filter_field(name)))
            .cloned()
            .collect(),
        from_sample: true,
    }
}

/// Sorted distinct non-empty values of one filter field, for option lists
/// when the backend sent none.
pub fn distinct_values<R: FilterFields>(rows: &[R], name: &str) -> Vec<String> {
    rows.iter()
        .filter_map(|row| row.filter_field(name))
        .filter(|value| !value.trim().is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
