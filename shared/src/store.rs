//! Reference table of monitoring readings
//!
//! The store is built once at start-up and never mutated afterwards, so a
//! single instance can be shared by any number of sessions.

use thiserror::Error;

use crate::models::{Reading, WaterStatus};
use crate::validation::validate_reading;

/// Errors raised while building a reading store
#[derive(Debug, Error, PartialEq)]
pub enum DatasetError {
    #[error("Invalid reading at row {row}: {reason}")]
    InvalidRow { row: usize, reason: &'static str },
}

/// Immutable, ordered collection of readings
///
/// Iteration order is the table order and is the tie-break order for every
/// lookup.
#[derive(Debug, Clone, Default)]
pub struct ReadingStore {
    readings: Vec<Reading>,
}

impl ReadingStore {
    /// Build a store from a table, validating every row
    pub fn from_readings(readings: Vec<Reading>) -> Result<Self, DatasetError> {
        for (row, reading) in readings.iter().enumerate() {
            validate_reading(reading).map_err(|reason| DatasetError::InvalidRow { row, reason })?;
        }
        Ok(Self { readings })
    }

    /// The reference table shipped with the application
    pub fn shipped() -> Self {
        let readings = SHIPPED_READINGS
            .iter()
            .map(|&(state, district, block, lat, lon, level_m, status)| Reading {
                state: state.to_string(),
                district: district.to_string(),
                block: block.to_string(),
                lat,
                lon,
                level_m,
                status,
            })
            .collect();
        Self { readings }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Reading> {
        self.readings.iter()
    }

    pub fn readings(&self) -> &[Reading] {
        &self.readings
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }
}

type ShippedRow = (&'static str, &'static str, &'static str, f64, f64, f64, WaterStatus);

const SHIPPED_READINGS: &[ShippedRow] = &[
    ("Maharashtra", "Pune", "Haveli", 18.5204, 73.8567, 12.0, WaterStatus::Critical),
    ("Maharashtra", "Nagpur", "Nagpur", 21.1458, 79.0882, 22.5, WaterStatus::Moderate),
    ("Maharashtra", "Mumbai", "Mumbai Suburban", 19.0760, 72.8777, 8.5, WaterStatus::Critical),
    ("Delhi", "New Delhi", "Central", 28.6139, 77.2090, 25.0, WaterStatus::Warning),
    ("Karnataka", "Bengaluru", "Bangalore Urban", 12.9716, 77.5946, 18.2, WaterStatus::Moderate),
    ("Karnataka", "Mysuru", "Mysuru", 12.2958, 76.6394, 28.5, WaterStatus::Good),
    ("Tamil Nadu", "Chennai", "Chennai", 13.0827, 80.2707, 15.8, WaterStatus::Warning),
    ("Tamil Nadu", "Coimbatore", "Coimbatore", 11.0168, 76.9558, 32.1, WaterStatus::Good),
    ("Rajasthan", "Jaipur", "Jaipur", 26.9124, 75.7873, 9.1, WaterStatus::Critical),
    ("Rajasthan", "Jodhpur", "Jodhpur", 26.2389, 73.0243, 6.8, WaterStatus::Critical),
    ("Gujarat", "Ahmedabad", "Ahmedabad", 23.0225, 72.5714, 19.5, WaterStatus::Warning),
    ("Gujarat", "Surat", "Surat", 21.1702, 72.8311, 24.7, WaterStatus::Moderate),
    ("West Bengal", "Kolkata", "Kolkata", 22.5726, 88.3639, 35.2, WaterStatus::Good),
    ("Uttar Pradesh", "Lucknow", "Lucknow", 26.8467, 80.9462, 16.8, WaterStatus::Warning),
    ("Punjab", "Chandigarh", "Chandigarh", 30.7333, 76.7794, 21.4, WaterStatus::Moderate),
];
