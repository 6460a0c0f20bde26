//! Motion module for stroke-engine.
//!
//! Provides the per-tick motion command, trapezoid profile math, range
//! mapping, the pause timer and the executor that polls a pattern.

mod command;
mod executor;
mod mapping;
mod profile;
mod timer;
mod trace;

pub use command::MotionCommand;
pub use executor::StrokeExecutor;
pub use mapping::{map_range, map_range_curved};
pub use profile::{StrokeSplit, TrapezoidProfile};
#[cfg(feature = "std")]
pub use timer::SystemClock;
pub use timer::{Clock, DelayTimer, ManualClock};
#[cfg(feature = "defmt")]
pub use trace::DefmtTrace;
pub use trace::{LogTrace, NoTrace, TickTrace, TraceSink};
