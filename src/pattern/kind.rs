//! The closed set of stroke patterns and how to name them.

use core::fmt;

use heapless::String;
use serde::Deserialize;

use crate::error::{Error, PatternError, Result};

/// Selector for one of the seven stroke patterns.
///
/// Menu order is stable: [`index`](Self::index) is what a UI stores.
/// Configuration files name a pattern by its [`key`](Self::key).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(rename_all = "snake_case")]
pub enum PatternKind {
    /// Symmetric full-depth stroke.
    #[default]
    SimplePenetration,
    /// Asymmetric in/out timing.
    TeasingPounding,
    /// Sensation reshapes the trapezoid.
    RoboStroke,
    /// Alternating full and half strokes.
    HalfnHalf,
    /// Sawtooth ramp of insertion depth.
    Deeper,
    /// Stroke series separated by pauses.
    StopNGo,
    /// Shortened strokes at full speed.
    Insist,
}

impl PatternKind {
    /// Every pattern in menu order.
    pub const ALL: [PatternKind; 7] = [
        PatternKind::SimplePenetration,
        PatternKind::TeasingPounding,
        PatternKind::RoboStroke,
        PatternKind::HalfnHalf,
        PatternKind::Deeper,
        PatternKind::StopNGo,
        PatternKind::Insist,
    ];

    /// Position in the menu.
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Human readable name shown on a display.
    pub const fn name(self) -> &'static str {
        match self {
            PatternKind::SimplePenetration => "Simple Penetration",
            PatternKind::TeasingPounding => "Teasing Pounding",
            PatternKind::RoboStroke => "Robo Stroke",
            PatternKind::HalfnHalf => "Half'n'Half",
            PatternKind::Deeper => "Deeper",
            PatternKind::StopNGo => "Stop'n'Go",
            PatternKind::Insist => "Insist",
        }
    }

    /// Identifier used in configuration files.
    pub const fn key(self) -> &'static str {
        match self {
            PatternKind::SimplePenetration => "simple_penetration",
            PatternKind::TeasingPounding => "teasing_pounding",
            PatternKind::RoboStroke => "robo_stroke",
            PatternKind::HalfnHalf => "halfn_half",
            PatternKind::Deeper => "deeper",
            PatternKind::StopNGo => "stop_n_go",
            PatternKind::Insist => "insist",
        }
    }

    /// Look a pattern up by menu index.
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(usize::from(index)).copied()
    }

    /// Look a pattern up by display name or key, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.name().eq_ignore_ascii_case(name) || kind.key().eq_ignore_ascii_case(name))
    }

    /// Like [`from_name`](Self::from_name), reporting unknown names.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError::UnknownName`] carrying (a prefix of) `name`.
    pub fn from_name_or_error(name: &str) -> Result<Self> {
        Self::from_name(name).ok_or_else(|| Error::Pattern(PatternError::UnknownName(truncated(name))))
    }
}

impl TryFrom<u8> for PatternKind {
    type Error = Error;

    fn try_from(index: u8) -> Result<Self> {
        Self::from_index(index).ok_or(Error::Pattern(PatternError::UnknownIndex(index)))
    }
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Longest prefix of `s` that fits, cut on a char boundary.
fn truncated<const N: usize>(s: &str) -> String<N> {
    let mut out = String::new();
    for c in s.chars() {
        if out.push(c).is_err() {
            break;
        }
    }
    out
}
