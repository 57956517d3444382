//! Body - a simulated axis-aligned box
//!
//! A body owns its rectangle, velocity, per-edge collision mask and static
//! flag. Surfaces are bodies that additionally exert a normal reaction and
//! friction on whatever collides with them.

mod body;
mod impact;
mod surface;

pub use body::{Body, BodyKind};
pub use impact::resolve_impact;
pub use surface::SurfaceProps;
