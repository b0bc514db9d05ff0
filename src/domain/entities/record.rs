use serde::{Deserialize, Serialize};

/// One registered medicine as listed by the registry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MedicineRecord {
    pub trade_name: String,
    pub inn: String,
    pub drug_type: String,
    pub country: String,
    pub manufacturer: String,
    pub registration_year: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ManufacturerRecord {
    pub manufacturer: String,
    pub country: String,
    pub product_count: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriceRecord {
    pub trade_name: String,
    pub dosage: String,
    pub area: String,
    pub drug_type: String,
    pub price: f64,
    pub currency: String,
}

/// Pre-aggregated count for one category (drug type, country, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryCount {
    pub category: String,
    pub value: f64,
}

impl CategoryCount {
    pub fn new(category: impl Into<String>, value: f64) -> Self {
        Self {
            category: category.into(),
            value,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CountryVolume {
    pub country: String,
    pub lat: f64,
    pub lng: f64,
    pub count: f64,
}

/// Supply route between a producing and a receiving country.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TradeRoute {
    pub from_country: String,
    pub from_lat: f64,
    pub from_lng: f64,
    pub to_country: String,
    pub to_lat: f64,
    pub to_lng: f64,
    pub volume: f64,
}
