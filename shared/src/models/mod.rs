//! Domain models for the groundwater advisory

mod advisory;
mod alert;
mod intent;
mod reading;
mod session;

pub use advisory::*;
pub use alert::*;
pub use intent::*;
pub use reading::*;
pub use session::*;
