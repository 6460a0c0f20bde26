//! User settings expressed as percentages.

use serde::Deserialize;

use crate::pattern::PatternKind;

/// Changes of speed at or below this many percentage points are ignored.
pub const SPEED_CHANGE_THRESHOLD: f32 = 1.0;

/// User-facing settings, each in `[0, 100]`.
///
/// Sensation 50 is neutral; [`Session`](crate::session::Session) converts
/// everything to step units.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct SettingPercents {
    /// Active stroke pattern.
    pub pattern: PatternKind,

    /// Speed as percentage of maximum velocity.
    #[serde(rename = "speed_percent")]
    pub speed: f32,

    /// Stroke length as percentage of travel.
    #[serde(rename = "stroke_percent")]
    pub stroke: f32,

    /// Insertion depth as percentage of travel.
    #[serde(rename = "depth_percent")]
    pub depth: f32,

    /// Sensation, 0-100 with 50 neutral.
    #[serde(rename = "sensation_percent")]
    pub sensation: f32,
}

impl Default for SettingPercents {
    fn default() -> Self {
        Self {
            pattern: PatternKind::SimplePenetration,
            speed: 0.0,
            stroke: 50.0,
            depth: 50.0,
            sensation: 50.0,
        }
    }
}

impl SettingPercents {
    /// Iterate over `(name, value)` for range validation.
    pub fn fields(&self) -> [(&'static str, f32); 4] {
        [
            ("speed_percent", self.speed),
            ("stroke_percent", self.stroke),
            ("depth_percent", self.depth),
            ("sensation_percent", self.sensation),
        ]
    }
}

/// Whether a speed change is worth pushing to the pattern.
///
/// Small jitter from an analog knob is ignored, but reaching or leaving
/// zero always counts so pausing is never swallowed.
pub fn is_change_significant(old: f32, new: f32) -> bool {
    if (old == 0.0) != (new == 0.0) {
        return true;
    }
    libm::fabsf(new - old) > SPEED_CHANGE_THRESHOLD
}
