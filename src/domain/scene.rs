use serde::{Deserialize, Serialize};

use crate::core::Rect;

use super::error::ConfigError;
use super::settings::{BodySettings, PhysicsSettings, SurfaceSettings};

/// A complete scene: global settings plus every body in registration order.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneBundle {
    pub physics: PhysicsSettings,
    #[serde(default)]
    pub bodies: Vec<SceneBody>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum SceneBody {
    Body {
        rect: Rect,
        #[serde(default)]
        settings: BodySettings,
    },
    Surface {
        rect: Rect,
        #[serde(default)]
        settings: SurfaceSettings,
    },
}

impl SceneBundle {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let bundle: SceneBundle = serde_json::from_str(json)?;
        bundle.validate()?;
        Ok(bundle)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.physics.validate()?;
        for body in &self.bodies {
            match body {
                SceneBody::Body { settings, .. } => settings.validate()?,
                SceneBody::Surface { settings, .. } => settings.validate()?,
            }
        }
        Ok(())
    }
}
