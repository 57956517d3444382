//! PhysicsController - the per-tick simulation loop
//!
//! Bodies live in an arena addressed by stable `BodyHandle`s and are
//! simulated in registration order. Each tick, for every body:
//! - apply gravity
//! - broad phase: boundary (rect inflated by 1) against every later body
//! - skip static/static pairs; on an edge crossing fire both impacts
//! - clamp fall speed (and horizontal speed, if capped)
//! - record last position, integrate `position += velocity * dt`
//!
//! The pair scan is O(n²) with no spatial partitioning.

mod collision;
mod system;

pub use system::{BodyHandle, PhysicsController, TickStats};
