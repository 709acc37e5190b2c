//! Validation utilities for the groundwater advisory
//!
//! Used when loading a reading table and at the API boundary.

use crate::models::Reading;

/// Deepest plausible water table, in metres below ground
pub const MAX_WATER_LEVEL_M: f64 = 500.0;

// ============================================================================
// Coordinate Validations
// ============================================================================

/// Validate latitude is a finite value in [-90, 90]
pub fn validate_latitude(latitude: f64) -> Result<(), &'static str> {
    if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
        return Err("Latitude must be between -90 and 90 degrees");
    }
    Ok(())
}

/// Validate longitude is a finite value in [-180, 180]
pub fn validate_longitude(longitude: f64) -> Result<(), &'static str> {
    if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
        return Err("Longitude must be between -180 and 180 degrees");
    }
    Ok(())
}

/// Validate a coordinate pair
pub fn validate_coordinates(latitude: f64, longitude: f64) -> Result<(), &'static str> {
    validate_latitude(latitude)?;
    validate_longitude(longitude)
}

/// Check if a point falls inside the rough bounding box of India
pub fn is_in_india(latitude: f64, longitude: f64) -> bool {
    (6.0..=37.5).contains(&latitude) && (68.0..=97.5).contains(&longitude)
}

// ============================================================================
// Reading Validations
// ============================================================================

/// Validate depth to water is finite, non-negative and plausible
pub fn validate_water_level(level_m: f64) -> Result<(), &'static str> {
    if !level_m.is_finite() {
        return Err("Water level must be a finite number");
    }
    if level_m < 0.0 {
        return Err("Water level cannot be negative");
    }
    if level_m > MAX_WATER_LEVEL_M {
        return Err("Water level exceeds maximum plausible depth");
    }
    Ok(())
}

/// Validate a place name is present and reasonably short
pub fn validate_place_name(name: &str) -> Result<(), &'static str> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err("Place name cannot be empty");
    }
    if trimmed.chars().count() > 100 {
        return Err("Place name must be at most 100 characters");
    }
    Ok(())
}

/// Validate that a reading row satisfies the dataset schema
pub fn validate_reading(reading: &Reading) -> Result<(), &'static str> {
    validate_place_name(&reading.state).map_err(|_| "State name cannot be empty")?;
    validate_place_name(&reading.district).map_err(|_| "District name cannot be empty")?;
    validate_coordinates(reading.lat, reading.lon)?;
    validate_water_level(reading.level_m)
}
