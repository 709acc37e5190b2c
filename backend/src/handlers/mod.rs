//! HTTP handlers

mod assistant;
mod health;
mod readings;
mod sessions;

pub use assistant::*;
pub use health::*;
pub use readings::*;
pub use sessions::*;
