//! Machine geometry and drive limits from configuration.

use serde::Deserialize;

use super::limits::SpeedLimits;
use super::units::{Millimeters, MillimetersPerSec, MillimetersPerSecSquared, Steps};

/// Physical description of the stroking machine.
///
/// Everything a pattern needs in step units is derived from here once per
/// session.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MachineConfig {
    /// Maximum linear velocity.
    #[serde(rename = "max_velocity_mm_per_sec")]
    pub max_velocity: MillimetersPerSec,

    /// Maximum linear acceleration.
    #[serde(rename = "max_acceleration_mm_per_sec2")]
    pub max_acceleration: MillimetersPerSecSquared,

    /// Drive resolution.
    pub steps_per_mm: u32,

    /// Usable travel measured during homing.
    #[serde(rename = "travel_mm")]
    pub travel: Millimeters,
}

impl MachineConfig {
    /// Speed limits in steps, as passed to `set_speed_limit`.
    pub fn speed_limits(&self) -> SpeedLimits {
        let steps_per_mm = self.steps_per_mm as f32;
        SpeedLimits {
            max_velocity: (self.max_velocity.0 * steps_per_mm) as u32,
            max_acceleration: (self.max_acceleration.0 * steps_per_mm) as u32,
            steps_per_mm: self.steps_per_mm,
        }
    }

    /// Usable travel in steps.
    pub fn travel_steps(&self) -> Steps {
        self.travel.to_steps(self.steps_per_mm)
    }

    /// Fraction of travel, given in percent, as steps.
    pub fn travel_percent_steps(&self, percent: f32) -> i32 {
        (self.travel * (percent.clamp(0.0, 100.0) / 100.0))
            .to_steps(self.steps_per_mm)
            .value()
    }

    /// Fraction of maximum velocity, given in percent, as steps/sec.
    pub fn velocity_percent_steps(&self, percent: f32) -> i32 {
        let velocity = self.max_velocity * (percent.clamp(0.0, 100.0) / 100.0);
        (velocity.0 * self.steps_per_mm as f32) as i32
    }
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            max_velocity: MillimetersPerSec(600.0),
            max_acceleration: MillimetersPerSecSquared(30000.0),
            steps_per_mm: 50,
            travel: Millimeters(150.0),
        }
    }
}
