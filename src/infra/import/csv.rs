use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

/// Reads a headed CSV file into records, matching columns by header name.
pub fn load_records_csv<R>(csv_path: &Path) -> Result<Vec<R>>
where
    R: DeserializeOwned,
{
    let mut reader = csv::Reader::from_path(csv_path)
        .with_context(|| format!("failed to open csv: {}", csv_path.display()))?;

    let headers = reader
        .headers()
        .with_context(|| format!("failed to read headers from csv: {}", csv_path.display()))?;
    if headers.is_empty() {
        anyhow::bail!("csv header is required: {}", csv_path.display())
    }

    let mut records = Vec::new();
    for (row_idx, record) in reader.deserialize::<R>().enumerate() {
        let record = record.with_context(|| {
            format!(
                "failed to parse csv record {} in {}",
                row_idx + 1,
                csv_path.display()
            )
        })?;
        records.push(record);
    }

    Ok(records)
}
