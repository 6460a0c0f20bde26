//! Configuration module for stroke-engine.
//!
//! Provides machine geometry, speed limits and session settings, loaded from
//! TOML files (with `std` feature) or built in code.

mod limits;
mod machine;
mod settings;
mod system;
pub mod units;
#[cfg(feature = "std")]
mod loader;
mod validation;

pub use limits::SpeedLimits;
pub use machine::MachineConfig;
pub use settings::{is_change_significant, SettingPercents, SPEED_CHANGE_THRESHOLD};
pub use system::EngineConfig;
pub use validation::{validate_config, validate_settings};

#[cfg(feature = "std")]
pub use loader::{load_config, parse_config};

// Re-export unit types at config level
pub use units::{Millimeters, MillimetersPerSec, MillimetersPerSecSquared, Steps};
