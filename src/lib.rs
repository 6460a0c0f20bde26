//! # stroke-engine
//!
//! Stroke pattern engine for reciprocating linear actuators.
//!
//! A pattern turns a handful of user tunables (speed, stroke length, depth
//! and a signed "sensation") into one trapezoidal motion command per
//! half-stroke. The motor driver consumes the commands; this crate never
//! touches hardware.
//!
//! ## Features
//!
//! - **Seven patterns**: simple, teasing/pounding, robo, half'n'half,
//!   deeper, stop'n'go and insist, switchable at runtime
//! - **Always valid output**: every command is clamped to the machine's
//!   speed limits and to `[0, depth]`
//! - **Non-blocking**: pauses are skip commands, time comes from an
//!   injected [`Clock`]
//! - **Configuration-driven**: machine geometry and start settings from TOML
//! - **no_std compatible**: core library works without standard library
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use stroke_engine::{Session, SystemClock};
//!
//! let config = stroke_engine::load_config("machine.toml")?;
//! let mut session = Session::from_config(&config, SystemClock::new())?;
//!
//! loop {
//!     let command = session.tick();
//!     if !command.skip {
//!         driver.move_to(command.target, command.velocity, command.acceleration);
//!     }
//! }
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables file I/O, TOML parsing and [`SystemClock`]
//! - `alloc`: Enables heap allocation for no_std with allocator
//! - `defmt`: Enables defmt formatting and the `DefmtTrace` sink

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]
// Allow large error types - necessary for no_std with heapless strings
#![allow(clippy::result_large_err)]

#[cfg(feature = "alloc")]
extern crate alloc;

// Core modules
pub mod config;
pub mod error;
pub mod motion;
pub mod pattern;
pub mod session;

// Re-exports for ergonomic API
pub use config::{validate_config, EngineConfig, MachineConfig, SettingPercents, SpeedLimits};
pub use error::{Error, Result};
pub use motion::{
    Clock, LogTrace, ManualClock, MotionCommand, NoTrace, StrokeExecutor, TickTrace, TraceSink,
};
pub use pattern::{Pattern, PatternKind, StrokePattern};
pub use session::Session;

// Configuration loading (std only)
#[cfg(feature = "std")]
pub use config::{load_config, parse_config};
#[cfg(feature = "std")]
pub use motion::SystemClock;

// Unit types
pub use config::units::{Millimeters, MillimetersPerSec, MillimetersPerSecSquared, Steps};
