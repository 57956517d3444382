//! Simulation systems: bodies and the controller that drives them.

pub mod rigid_body;
pub mod rigid_body_system;
