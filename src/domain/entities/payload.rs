//! Shapes of the payloads the registry backend returns inside its envelopes.
//!
//! Every field defaults so a response that omits an optional sub-field
//! deserialises to an empty collection instead of failing.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::entities::record::{
    CategoryCount, CountryVolume, ManufacturerRecord, MedicineRecord, PriceRecord, TradeRoute,
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MedicinesPayload {
    pub medicines: Vec<MedicineRecord>,
    pub drug_types: Vec<String>,
    pub countries: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ManufacturersPayload {
    pub manufacturers: Vec<ManufacturerRecord>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricesPayload {
    pub prices: Vec<PriceRecord>,
    pub areas: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoriesPayload {
    pub categories: Vec<CategoryCount>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DistributionPayload {
    pub countries: Vec<CountryVolume>,
    pub routes: Vec<TradeRoute>,
}

/// `{ chart: { labels, series } }` time series.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartPayload {
    pub labels: Vec<String>,
    pub series: Vec<SeriesPayload>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeriesPayload {
    pub name: String,
    pub data: Vec<f64>,
}

/// `{ metrics, meta }` summary block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverviewPayload {
    pub metrics: BTreeMap<String, f64>,
    pub meta: OverviewMeta,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverviewMeta {
    pub updated_at: Option<String>,
    pub source: Option<String>,
}
