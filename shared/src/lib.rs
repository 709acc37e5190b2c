//! Shared advisory core for the Jal-Mitra groundwater assistant
//!
//! This crate contains the models and the pure advisory pipeline shared
//! between the backend service and the browser bindings (via WASM).

pub mod alerts;
pub mod catalog;
pub mod compose;
pub mod geo;
pub mod intent;
pub mod models;
pub mod pipeline;
pub mod scoring;
pub mod store;
pub mod trend;
pub mod types;
pub mod validation;

pub use alerts::generate_alerts;
pub use geo::haversine_km;
pub use intent::classify;
pub use models::*;
pub use pipeline::AdvisoryPipeline;
pub use scoring::{compute_score, score_reading, ScoreBand};
pub use store::{DatasetError, ReadingStore};
pub use types::*;
pub use validation::*;
