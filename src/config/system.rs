//! Engine configuration - root configuration structure.

use serde::Deserialize;

use super::machine::MachineConfig;
use super::settings::SettingPercents;

/// Root configuration structure from TOML.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct EngineConfig {
    /// Machine geometry and drive limits.
    pub machine: MachineConfig,

    /// Settings applied when the session starts.
    #[serde(default)]
    pub session: SettingPercents,
}
