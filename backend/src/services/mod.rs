//! Business logic services for the Jal-Mitra advisory service

pub mod advisory;
pub mod dataset;
pub mod prompt;
pub mod session;

pub use advisory::AdvisoryService;
pub use session::SessionRegistry;
