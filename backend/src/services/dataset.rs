//! Reading table loading
//!
//! CSV format (header required):
//! `state,district,block,lat,lon,level_m,status`

use std::io::Read;
use std::str::FromStr;

use serde::Deserialize;
use shared::{Reading, ReadingStore, WaterStatus};

use crate::config::DatasetConfig;
use crate::error::{AppError, AppResult};

#[derive(Debug, Deserialize)]
struct CsvRow {
    state: String,
    district: String,
    block: String,
    lat: f64,
    lon: f64,
    level_m: f64,
    status: String,
}

impl CsvRow {
    fn into_reading(self, row: usize) -> AppResult<Reading> {
        let status = WaterStatus::from_str(&self.status).map_err(|e| AppError::Validation {
            field: format!("row {} status", row),
            message: e,
            message_hi: format!("पंक्ति {} में अज्ञात स्थिति", row),
        })?;

        Ok(Reading {
            state: self.state.trim().to_string(),
            district: self.district.trim().to_string(),
            block: self.block.trim().to_string(),
            lat: self.lat,
            lon: self.lon,
            level_m: self.level_m,
            status,
        })
    }
}

/// Build the store named by the configuration, or the shipped table
pub fn load_store(config: &DatasetConfig) -> AppResult<ReadingStore> {
    let Some(path) = config.csv_path.as_deref() else {
        tracing::info!("Using shipped reading table");
        return Ok(ReadingStore::shipped());
    };

    tracing::info!("Loading reading table from {}", path);
    let file = std::fs::File::open(path)
        .map_err(|e| AppError::Configuration(format!("Cannot open dataset {}: {}", path, e)))?;
    let store = parse_csv(file)?;
    tracing::info!("Loaded {} readings", store.len());
    Ok(store)
}

/// Parse a CSV reading table; rows keep file order
pub fn parse_csv<R: Read>(reader: R) -> AppResult<ReadingStore> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut readings = Vec::new();
    for (row, record) in csv_reader.deserialize::<CsvRow>().enumerate() {
        let record = record.map_err(|e| AppError::Configuration(format!("Invalid CSV row {}: {}", row, e)))?;
        readings.push(record.into_reading(row)?);
    }

    Ok(ReadingStore::from_readings(readings)?)
}
