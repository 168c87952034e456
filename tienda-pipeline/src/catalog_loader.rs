//! CSV product catalog loader.
//!
//! Parses the shop's spreadsheet export into `ProductRecord` structs.
//! Expected CSV columns (the dataset keeps its legacy Spanish headers):
//!   producto, referencia, codigo, cantidad, precio

use std::io::Read;

use serde::Deserialize;

use crate::types::ProductCandidate;

/// One row of the product catalog.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductRecord {
    #[serde(rename = "producto")]
    pub name: String,
    #[serde(rename = "referencia")]
    pub reference: String,
    #[serde(rename = "codigo")]
    pub code: String,
    #[serde(rename = "cantidad")]
    pub quantity: i64,
    #[serde(rename = "precio")]
    pub price: f64,
}

impl ProductRecord {
    /// Convert to a pipeline candidate with enrichment fields unset.
    pub fn to_candidate(&self) -> ProductCandidate {
        ProductCandidate {
            name: self.name.clone(),
            reference: self.reference.clone(),
            code: self.code.clone(),
            quantity: self.quantity,
            price: self.price,
            stock_level: None,
            tier: None,
            relevance_score: None,
        }
    }
}

/// Load catalog records from a CSV reader.
pub fn load_catalog<R: Read>(reader: R) -> Result<Vec<ProductRecord>, String> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    for (line_num, result) in csv_reader.deserialize().enumerate() {
        let record: ProductRecord =
            result.map_err(|e| format!("CSV parse error at line {}: {}", line_num + 2, e))?;
        records.push(record);
    }

    Ok(records)
}

/// Load catalog records from a CSV file path.
pub fn load_catalog_file(path: &str) -> Result<Vec<ProductRecord>, String> {
    let file = std::fs::File::open(path).map_err(|e| format!("Failed to open '{}': {}", path, e))?;
    load_catalog(file)
}
