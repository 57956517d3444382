//! Domain records: configuration, scene bundles and the error taxonomy.

pub mod error;
pub mod scene;
pub mod settings;

pub use error::{ConfigError, PhysicsError};
pub use scene::{SceneBody, SceneBundle};
pub use settings::{BodySettings, CollisionBox, NormalModel, PhysicsSettings, Side, SurfaceSettings};
