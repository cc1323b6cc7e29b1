//! Domain-based type organization
//!
//! - asic: ASIC model variants, default tables and option-set responses
//! - settings: device info, form state and update payloads

pub mod asic;
pub mod settings;

pub use asic::*;
pub use settings::*;
