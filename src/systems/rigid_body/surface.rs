//! Surface response: normal reaction, friction and overlap correction.
//!
//! A surface is a body with a single inclined plane. Incline is in degrees;
//! a positive incline tilts the outward normal toward +x.

use crate::core::{Rect, Vec2};
use crate::domain::{NormalModel, SurfaceSettings};

use super::body::Body;

/// Material parameters carried by `BodyKind::Surface`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceProps {
    pub incline: f32,
    pub friction_coefficient: f32,
    pub restitution_coefficient: f32,
    pub normal_model: NormalModel,
}

impl SurfaceProps {
    pub fn from_settings(settings: &SurfaceSettings) -> Self {
        Self {
            incline: settings.incline,
            friction_coefficient: settings.friction_coefficient,
            restitution_coefficient: settings.restitution_coefficient,
            normal_model: settings.normal_model,
        }
    }

    /// Outward unit normal: straight up (-y) rotated by the incline.
    pub fn unit_normal(&self) -> Vec2 {
        let (sin, cos) = self.incline.to_radians().sin_cos();
        Vec2::new(sin, -cos)
    }

    /// Normal reaction the surface exerts on `other`.
    ///
    /// Zero when `other` is at rest or moving away from the surface.
    pub fn normal(&self, surface_rect: &Rect, other: &Body) -> Vec2 {
        let v = other.velocity();
        if v.is_zero() {
            return Vec2::zero();
        }
        match self.normal_model {
            NormalModel::Projected => {
                let n = self.unit_normal();
                // velocity component pressing into the plane
                let pressing = -v.dot(n);
                if pressing <= 0.0 {
                    return Vec2::zero();
                }
                n * pressing
            }
            NormalModel::PerAxis => {
                let (toward_x, toward_y) = other.moving_towards(surface_rect.center());
                let theta = self.incline.to_radians();
                let mx = if toward_x { -v.x * (std::f32::consts::FRAC_PI_2 - theta).cos() } else { 0.0 };
                let my = if toward_y { -v.y * theta.cos() } else { 0.0 };
                Vec2::new(mx, my)
            }
        }
    }

    /// Friction opposing `net_force`, resolved along the surface plane.
    ///
    /// Each component is clamped to the magnitude of the matching
    /// `net_force` component, so friction can stop motion but never reverse it.
    pub fn friction(&self, net_force: Vec2) -> Vec2 {
        let Some(direction) = (-net_force).normalize() else {
            return Vec2::zero();
        };
        let theta = self.incline.to_radians();
        // magnitudes only: the sign comes from `direction`, whatever the incline
        let coefficient = Vec2::new(
            self.friction_coefficient * theta.cos().abs(),
            self.friction_coefficient * theta.sin().abs(),
        );
        coefficient.mul_elementwise(direction).clamp_abs(net_force)
    }

    /// Push `other` out of the surface along the normal, never farther than
    /// the overlap extents on either axis.
    pub fn fix_overlap(&self, surface_rect: &Rect, other: &mut Body) {
        let overlap = other.rect().clip(surface_rect);
        let push = self.normal(surface_rect, other).clamp_abs(overlap.size());
        other.translate(push);
    }

    /// Surface side of a collision: correct overlap (dynamic bodies only),
    /// then apply the restituted normal, then friction against the
    /// resulting velocity.
    pub fn impact(&self, surface_rect: &Rect, other: &mut Body) {
        if !other.is_static() {
            self.fix_overlap(surface_rect, other);
        }
        let normal = self.normal(surface_rect, other);
        other.apply_force(normal * (1.0 + self.restitution_coefficient));
        let friction = self.friction(other.velocity());
        other.apply_force(friction);
    }
}
