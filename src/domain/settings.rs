//! Plain configuration records handed to the controller and body constructors.
//!
//! Every record deserializes from camelCase JSON, with defaults for optional
//! fields, and validates itself before it is used.

use serde::{Deserialize, Serialize};

use super::error::{ensure_finite, ConfigError};

/// Global simulation settings
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhysicsSettings {
    /// Downward velocity delta applied to every body each tick
    pub gravity: f32,
    /// Ceiling for downward (positive y) velocity
    pub terminal_velocity: f32,
}

impl PhysicsSettings {
    pub fn new(gravity: f32, terminal_velocity: f32) -> Self {
        Self { gravity, terminal_velocity }
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure_finite(self.gravity, "gravity")?;
        ensure_finite(self.terminal_velocity, "terminalVelocity")?;
        if self.terminal_velocity < 0.0 {
            return Err(ConfigError::NegativeTerminalVelocity(self.terminal_velocity));
        }
        Ok(())
    }
}

/// Which edges of a body take part in collision tests
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollisionBox {
    pub top: bool,
    pub left: bool,
    pub right: bool,
    pub bottom: bool,
}

/// One edge of a rectangle
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Top,
    Bottom,
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::Top => Side::Bottom,
            Side::Bottom => Side::Top,
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

impl CollisionBox {
    pub const fn all() -> Self {
        Self { top: true, left: true, right: true, bottom: true }
    }

    pub const fn none() -> Self {
        Self { top: false, left: false, right: false, bottom: false }
    }

    pub fn side(&self, side: Side) -> bool {
        match side {
            Side::Top => self.top,
            Side::Bottom => self.bottom,
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    /// `side` of this box may hit the opposing side of `other`.
    pub fn allows(&self, side: Side, other: &CollisionBox) -> bool {
        self.side(side) && other.side(side.opposite())
    }
}

impl Default for CollisionBox {
    fn default() -> Self {
        Self::all()
    }
}

/// Per-body settings shared by plain bodies and surfaces
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BodySettings {
    pub collision_box: CollisionBox,
    pub is_static: bool,
    /// Horizontal speed cap (magnitude, sign preserved). `None` = uncapped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_speed: Option<f32>,
}

impl BodySettings {
    pub fn dynamic(collision_box: CollisionBox) -> Self {
        Self { collision_box, is_static: false, max_speed: None }
    }

    pub fn fixed(collision_box: CollisionBox) -> Self {
        Self { collision_box, is_static: true, max_speed: None }
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(max_speed) = self.max_speed {
            ensure_finite(max_speed, "maxSpeed")?;
            if max_speed < 0.0 {
                return Err(ConfigError::NegativeMaxSpeed(max_speed));
            }
        }
        Ok(())
    }
}

/// How a surface derives its normal reaction
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NormalModel {
    /// Cancel the velocity component pressing into the surface along its
    /// inclined normal.
    #[default]
    Projected,
    /// Decompose per axis and cancel only the axes on which the other body
    /// is heading toward the surface centre.
    PerAxis,
}

/// Settings for a surface body (a body that exerts normal force and friction)
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SurfaceSettings {
    #[serde(flatten)]
    pub body: BodySettings,
    /// Single friction coefficient used against every other body
    pub friction_coefficient: f32,
    /// Bounciness; conventionally in [0, 1] but not clamped
    pub restitution_coefficient: f32,
    /// Degrees, 0 = flat
    pub incline: f32,
    pub normal_model: NormalModel,
}

impl Default for SurfaceSettings {
    fn default() -> Self {
        Self {
            body: BodySettings::default(),
            friction_coefficient: 0.8,
            restitution_coefficient: 0.0,
            incline: 0.0,
            normal_model: NormalModel::Projected,
        }
    }
}

impl SurfaceSettings {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.body.validate()?;
        ensure_finite(self.friction_coefficient, "frictionCoefficient")?;
        ensure_finite(self.restitution_coefficient, "restitutionCoefficient")?;
        ensure_finite(self.incline, "incline")?;
        if self.friction_coefficient < 0.0 {
            return Err(ConfigError::NegativeFriction(self.friction_coefficient));
        }
        if self.restitution_coefficient < 0.0 {
            return Err(ConfigError::NegativeRestitution(self.restitution_coefficient));
        }
        Ok(())
    }
}
