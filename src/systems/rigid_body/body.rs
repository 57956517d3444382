use crate::core::{Rect, Vec2};
use crate::domain::{BodySettings, CollisionBox, ConfigError, Side, SurfaceSettings};

use super::impact::resolve_impact;
use super::surface::SurfaceProps;

/// Closed set of body variants. Behaviour that differs per variant is
/// dispatched centrally in `resolve_impact`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BodyKind {
    Plain,
    Surface(SurfaceProps),
}

/// Rigid Body - an axis-aligned box moved by the controller
#[derive(Clone, Debug, PartialEq)]
pub struct Body {
    // === Physics State ===
    rect: Rect,
    /// Velocity (units per second of `dt`)
    velocity: Vec2,
    /// Top-left recorded at the end of the previous tick
    last_position: Vec2,

    // === Configuration ===
    collision_box: CollisionBox,
    is_static: bool,
    max_speed: Option<f32>,
    kind: BodyKind,

    // === Spawn state (for reset) ===
    origin: Vec2,
    original_size: Vec2,
}

impl Body {
    /// Create a plain body at `rect`
    pub fn new(settings: &BodySettings, rect: Rect) -> Result<Self, ConfigError> {
        settings.validate()?;
        Ok(Self::with_kind(settings, rect, BodyKind::Plain))
    }

    /// Create a surface body at `rect`
    pub fn surface(settings: &SurfaceSettings, rect: Rect) -> Result<Self, ConfigError> {
        settings.validate()?;
        let props = SurfaceProps::from_settings(settings);
        Ok(Self::with_kind(&settings.body, rect, BodyKind::Surface(props)))
    }

    fn with_kind(settings: &BodySettings, rect: Rect, kind: BodyKind) -> Self {
        Self {
            rect,
            velocity: Vec2::zero(),
            last_position: rect.top_left(),
            collision_box: settings.collision_box,
            is_static: settings.is_static,
            max_speed: settings.max_speed,
            kind,
            origin: rect.top_left(),
            original_size: rect.size(),
        }
    }

    pub fn rect(&self) -> Rect { self.rect }

    pub fn velocity(&self) -> Vec2 { self.velocity }

    pub fn last_position(&self) -> Vec2 { self.last_position }

    pub fn collision_box(&self) -> CollisionBox { self.collision_box }

    pub fn is_static(&self) -> bool { self.is_static }

    pub fn max_speed(&self) -> Option<f32> { self.max_speed }

    pub fn kind(&self) -> &BodyKind { &self.kind }

    /// Surface parameters, if this body is a surface
    pub fn surface_props(&self) -> Option<&SurfaceProps> {
        match &self.kind {
            BodyKind::Surface(props) => Some(props),
            BodyKind::Plain => None,
        }
    }

    /// Apply an instantaneous velocity delta. Static bodies ignore it.
    pub fn apply_force(&mut self, force: Vec2) {
        if !self.is_static {
            self.velocity += force;
        }
    }

    /// Overwrite velocity (e.g. player input). Static bodies ignore it.
    pub fn set_velocity(&mut self, velocity: Vec2) {
        if !self.is_static {
            self.velocity = velocity;
        }
    }

    /// Teleport without touching velocity or the last-position reference
    pub fn set_top_left(&mut self, top_left: Vec2) {
        self.rect.set_top_left(top_left);
    }

    pub(crate) fn translate(&mut self, by: Vec2) {
        self.rect.translate(by);
    }

    pub(crate) fn clamp_fall_speed(&mut self, terminal_velocity: f32) {
        self.velocity.y = self.velocity.y.min(terminal_velocity);
    }

    /// Cap horizontal speed magnitude, keeping the direction of travel.
    pub(crate) fn clamp_horizontal_speed(&mut self) {
        if let Some(max_speed) = self.max_speed {
            self.velocity.x = self.velocity.x.clamp(-max_speed, max_speed);
        }
    }

    pub(crate) fn record_last_position(&mut self) {
        self.last_position = self.rect.top_left();
    }

    pub(crate) fn integrate(&mut self, dt: f32) {
        self.rect.translate(self.velocity * dt);
    }

    /// Per-axis: is this body's velocity heading toward `point`, measured
    /// from its centre?
    pub fn moving_towards(&self, point: Vec2) -> (bool, bool) {
        let center = self.rect.center();
        let dx = point.x - center.x;
        let dy = point.y - center.y;
        (dx * self.velocity.x > 0.0, dy * self.velocity.y > 0.0)
    }

    /// Did one of this body's edges pass through the facing edge of `other`
    /// between the last tick and now?
    ///
    /// Each edge pair is only checked when both collision boxes enable it.
    /// All four pairs are evaluated and OR-ed together.
    pub fn colliding(&self, other: &Body) -> bool {
        let curr = self.rect.top_left();
        let last = self.last_position;
        let (w, h) = (self.rect.w, self.rect.h);
        let o = &other.rect;
        let cb = &self.collision_box;
        let ocb = &other.collision_box;

        let mut colliding = false;

        if cb.allows(Side::Top, ocb) {
            colliding |= last.y >= o.bottom() && o.bottom() >= curr.y;
        }
        if cb.allows(Side::Bottom, ocb) {
            colliding |= last.y + h <= o.top() && o.top() <= curr.y + h;
        }
        if cb.allows(Side::Left, ocb) {
            colliding |= last.x >= o.right() && o.right() >= curr.x;
        }
        if cb.allows(Side::Right, ocb) {
            colliding |= last.x + w <= o.left() && o.left() <= curr.x + w;
        }

        colliding
    }

    /// React onto `other` after a detected collision (see `resolve_impact`).
    pub fn impact(&self, other: &mut Body) {
        resolve_impact(self, other);
    }

    /// Back to the spawn rectangle with zero velocity.
    pub fn reset(&mut self) {
        self.rect = Rect::from_top_left(self.origin, self.original_size);
        self.velocity = Vec2::zero();
        self.last_position = self.origin;
    }

    pub(crate) fn is_finite(&self) -> bool {
        self.rect.is_finite() && self.velocity.is_finite()
    }
}
