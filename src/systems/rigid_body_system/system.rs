use std::fmt;

use crate::core::{Rect, Vec2};
use crate::domain::{ConfigError, PhysicsError, PhysicsSettings};
use crate::rigid_body::Body;

use super::collision::{collect_candidates, pair_mut, BOUNDARY_MARGIN};

/// Stable handle to a registered body. Handles are never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyHandle(u32);

impl BodyHandle {
    pub fn from_raw(raw: u32) -> Self {
        BodyHandle(raw)
    }

    pub fn raw(self) -> u32 {
        self.0
    }

    fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for BodyHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Counters for one committed tick
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickStats {
    /// Live bodies processed
    pub bodies: u32,
    /// Pairs whose boundaries overlapped
    pub candidate_pairs: u32,
    /// Candidate pairs skipped because both bodies are static
    pub static_pairs_skipped: u32,
    /// Pairs that passed the edge test and were resolved
    pub collisions: u32,
}

/// Owns every body in registration order and advances them tick by tick.
pub struct PhysicsController {
    bodies: Vec<Option<Body>>,
    /// Working copy for the in-flight tick; swapped in on success
    scratch: Vec<Option<Body>>,
    candidates: Vec<usize>,
    gravity: f32,
    terminal_velocity: f32,
}

impl PhysicsController {
    pub fn new(settings: PhysicsSettings) -> Result<Self, ConfigError> {
        settings.validate()?;
        Ok(Self {
            bodies: Vec::new(),
            scratch: Vec::new(),
            candidates: Vec::new(),
            gravity: settings.gravity,
            terminal_velocity: settings.terminal_velocity,
        })
    }

    pub fn gravity(&self) -> f32 {
        self.gravity
    }

    pub fn set_gravity(&mut self, gravity: f32) -> Result<(), ConfigError> {
        PhysicsSettings::new(gravity, self.terminal_velocity).validate()?;
        self.gravity = gravity;
        Ok(())
    }

    pub fn terminal_velocity(&self) -> f32 {
        self.terminal_velocity
    }

    pub fn set_terminal_velocity(&mut self, terminal_velocity: f32) -> Result<(), ConfigError> {
        PhysicsSettings::new(self.gravity, terminal_velocity).validate()?;
        self.terminal_velocity = terminal_velocity;
        Ok(())
    }

    // === REGISTRATION ===

    /// Register a body. It is simulated after every body registered before it.
    pub fn add_body(&mut self, body: Body) -> BodyHandle {
        let handle = BodyHandle(self.bodies.len() as u32);
        log::debug!(
            "registered body {} at {:?} (static: {}, surface: {})",
            handle,
            body.rect(),
            body.is_static(),
            body.surface_props().is_some()
        );
        self.bodies.push(Some(body));
        handle
    }

    pub fn add_bodies<I>(&mut self, bodies: I) -> Vec<BodyHandle>
    where
        I: IntoIterator<Item = Body>,
    {
        bodies.into_iter().map(|b| self.add_body(b)).collect()
    }

    /// Detach a body (entity despawn). Other handles stay valid.
    pub fn remove_body(&mut self, handle: BodyHandle) -> Option<Body> {
        let removed = self.bodies.get_mut(handle.index())?.take();
        if removed.is_some() {
            log::debug!("removed body {}", handle);
        }
        removed
    }

    // === ACCESS ===

    pub fn body(&self, handle: BodyHandle) -> Option<&Body> {
        self.bodies.get(handle.index())?.as_ref()
    }

    pub fn body_mut(&mut self, handle: BodyHandle) -> Option<&mut Body> {
        self.bodies.get_mut(handle.index())?.as_mut()
    }

    pub fn rect(&self, handle: BodyHandle) -> Option<Rect> {
        self.body(handle).map(Body::rect)
    }

    pub fn velocity(&self, handle: BodyHandle) -> Option<Vec2> {
        self.body(handle).map(Body::velocity)
    }

    /// Returns false if the handle is unknown.
    pub fn apply_force(&mut self, handle: BodyHandle, force: Vec2) -> bool {
        match self.body_mut(handle) {
            Some(body) => {
                body.apply_force(force);
                true
            }
            None => false,
        }
    }

    /// Live bodies in registration order
    pub fn iter(&self) -> impl Iterator<Item = (BodyHandle, &Body)> {
        self.bodies
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|b| (BodyHandle(i as u32), b)))
    }

    /// Number of live bodies
    pub fn len(&self) -> usize {
        self.bodies.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // === SIMULATION ===

    /// Advance every body by `dt`.
    ///
    /// The tick is all-or-nothing: it runs on a working copy and is only
    /// committed when every body ends up with a finite rect and velocity.
    pub fn update(&mut self, dt: f32) -> Result<TickStats, PhysicsError> {
        if !dt.is_finite() || dt < 0.0 {
            return Err(PhysicsError::InvalidTimeStep(dt));
        }

        self.scratch.clone_from(&self.bodies);
        let stats = step_bodies(
            &mut self.scratch,
            &mut self.candidates,
            Vec2::new(0.0, self.gravity),
            self.terminal_velocity,
            dt,
        );

        if let Some(index) = self
            .scratch
            .iter()
            .position(|slot| matches!(slot, Some(body) if !body.is_finite()))
        {
            let handle = BodyHandle(index as u32);
            log::warn!("tick rejected: body {} diverged (dt = {})", handle, dt);
            return Err(PhysicsError::Diverged { handle });
        }

        std::mem::swap(&mut self.bodies, &mut self.scratch);
        Ok(stats)
    }

    /// Reset every body to its spawn state, in registration order.
    pub fn reset(&mut self) {
        for body in self.bodies.iter_mut().flatten() {
            body.reset();
        }
    }
}

/// One tick over `slots`, in registration order.
fn step_bodies(
    slots: &mut [Option<Body>],
    candidates: &mut Vec<usize>,
    gravity: Vec2,
    terminal_velocity: f32,
    dt: f32,
) -> TickStats {
    let mut stats = TickStats::default();

    for i in 0..slots.len() {
        let boundary = match slots[i].as_mut() {
            Some(body) => {
                body.apply_force(gravity);
                body.rect().inflate(BOUNDARY_MARGIN)
            }
            None => continue,
        };
        stats.bodies += 1;

        collect_candidates(slots, i, &boundary, candidates);
        stats.candidate_pairs += candidates.len() as u32;

        for &j in candidates.iter() {
            let Some((body, other)) = pair_mut(slots, i, j) else {
                continue;
            };
            // nothing can move
            if body.is_static() && other.is_static() {
                stats.static_pairs_skipped += 1;
                continue;
            }
            if body.colliding(other) {
                body.impact(other);
                other.impact(body);
                stats.collisions += 1;
                log::trace!("collision #{} <-> #{}", i, j);
            }
        }

        if let Some(body) = slots[i].as_mut() {
            body.clamp_fall_speed(terminal_velocity);
            body.clamp_horizontal_speed();
            body.record_last_position();
            body.integrate(dt);
        }
    }

    stats
}
