use thiserror::Error;

use crate::rigid_body_system::BodyHandle;

/// Rejected configuration. Raised at construction time so bad settings never
/// reach the simulation loop.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("terminal velocity must be >= 0, got {0}")]
    NegativeTerminalVelocity(f32),
    #[error("friction coefficient must be >= 0, got {0}")]
    NegativeFriction(f32),
    #[error("restitution coefficient must be >= 0, got {0}")]
    NegativeRestitution(f32),
    #[error("max speed must be >= 0, got {0}")]
    NegativeMaxSpeed(f32),
    #[error("{field} must be finite")]
    NonFinite { field: &'static str },
    #[error("invalid settings json: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A tick that could not be completed. Body state is left untouched.
#[derive(Error, Debug)]
pub enum PhysicsError {
    #[error("time step must be finite and >= 0, got {0}")]
    InvalidTimeStep(f32),
    #[error("simulation diverged at body {handle}")]
    Diverged { handle: BodyHandle },
}

pub(crate) fn ensure_finite(value: f32, field: &'static str) -> Result<f32, ConfigError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ConfigError::NonFinite { field })
    }
}
