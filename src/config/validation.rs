//! Configuration validation.

use crate::error::{ConfigError, Error, Result};

use super::{EngineConfig, MachineConfig, SettingPercents};

/// Validate an engine configuration.
///
/// Checks:
/// - Velocity, acceleration, resolution and travel are strictly positive
/// - Session percentages are within 0-100
pub fn validate_config(config: &EngineConfig) -> Result<()> {
    validate_machine(&config.machine)?;
    validate_settings(&config.session)?;
    Ok(())
}

fn validate_machine(machine: &MachineConfig) -> Result<()> {
    // NaN fails every comparison, so test for "not greater than zero"
    if !(machine.max_velocity.0 > 0.0) {
        return Err(Error::Config(ConfigError::InvalidMaxVelocity(machine.max_velocity.0)));
    }

    if !(machine.max_acceleration.0 > 0.0) {
        return Err(Error::Config(ConfigError::InvalidMaxAcceleration(
            machine.max_acceleration.0,
        )));
    }

    if machine.steps_per_mm == 0 {
        return Err(Error::Config(ConfigError::InvalidStepsPerMm(machine.steps_per_mm)));
    }

    if !(machine.travel.0 > 0.0) {
        return Err(Error::Config(ConfigError::InvalidTravel(machine.travel.0)));
    }

    Ok(())
}

/// Validate session percentages.
pub fn validate_settings(settings: &SettingPercents) -> Result<()> {
    for (field, value) in settings.fields() {
        if !(0.0..=100.0).contains(&value) {
            return Err(Error::Config(ConfigError::InvalidPercent { field, value }));
        }
    }
    Ok(())
}
