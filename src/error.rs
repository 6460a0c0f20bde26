//! Error types for stroke-engine.
//!
//! The pattern engine itself never fails: every tunable is clamped and a
//! paused session degrades to the idle command. Errors only exist at the
//! configuration and pattern-selection boundary.

use core::fmt;

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for all stroke-engine operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Configuration parsing or validation error
    Config(ConfigError),
    /// Pattern selection error
    Pattern(PatternError),
}

/// Configuration-related errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Failed to parse TOML configuration
    ParseError(heapless::String<128>),
    /// Invalid max velocity (must be > 0)
    InvalidMaxVelocity(f32),
    /// Invalid max acceleration (must be > 0)
    InvalidMaxAcceleration(f32),
    /// Invalid steps per millimeter (must be > 0)
    InvalidStepsPerMm(u32),
    /// Invalid measured travel (must be > 0)
    InvalidTravel(f32),
    /// A session percentage is outside 0-100
    InvalidPercent {
        /// Name of the offending setting
        field: &'static str,
        /// Value found in the configuration
        value: f32,
    },
    /// File I/O error (std only)
    #[cfg(feature = "std")]
    IoError(heapless::String<128>),
}

/// Pattern selection errors.
#[derive(Debug, Clone, PartialEq)]
pub enum PatternError {
    /// No pattern is registered under this menu index
    UnknownIndex(u8),
    /// No pattern matches this name
    UnknownName(heapless::String<32>),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Configuration error: {}", e),
            Error::Pattern(e) => write!(f, "Pattern error: {}", e),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::InvalidMaxVelocity(v) => write!(f, "Invalid max velocity: {}. Must be > 0", v),
            ConfigError::InvalidMaxAcceleration(v) => {
                write!(f, "Invalid max acceleration: {}. Must be > 0", v)
            }
            ConfigError::InvalidStepsPerMm(v) => write!(f, "Invalid steps per mm: {}. Must be > 0", v),
            ConfigError::InvalidTravel(v) => write!(f, "Invalid travel: {} mm. Must be > 0", v),
            ConfigError::InvalidPercent { field, value } => {
                write!(f, "Invalid {}: {}. Must be 0-100", field, value)
            }
            #[cfg(feature = "std")]
            ConfigError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternError::UnknownIndex(i) => write!(f, "No pattern at index {}. Valid: 0-6", i),
            PatternError::UnknownName(name) => write!(
                f,
                "Unknown pattern '{}'. Available: simple_penetration, teasing_pounding, \
                 robo_stroke, halfn_half, deeper, stop_n_go, insist",
                name
            ),
        }
    }
}

// Conversion impls
impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<PatternError> for Error {
    fn from(e: PatternError) -> Self {
        Error::Pattern(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for PatternError {}
