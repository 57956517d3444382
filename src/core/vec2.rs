use serde::{Deserialize, Serialize};

/// 2D Vector for physics calculations
///
/// Screen space: +x to the right, +y downward.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    pub fn length(&self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    pub fn dot(&self, other: Vec2) -> f32 {
        self.x * other.x + self.y * other.y
    }

    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Unit vector in the same direction.
    ///
    /// A zero-length vector has no direction, so this returns `None`
    /// instead of dividing by zero.
    pub fn normalize(&self) -> Option<Self> {
        let len = self.length();
        if len > 0.0 && len.is_finite() {
            Some(Self { x: self.x / len, y: self.y / len })
        } else {
            None
        }
    }

    /// Component-wise product
    pub fn mul_elementwise(&self, other: Vec2) -> Self {
        Self { x: self.x * other.x, y: self.y * other.y }
    }

    /// Clamp each component into `[-|limit.c|, |limit.c|]`.
    ///
    /// Uses max/min rather than `f32::clamp` so a NaN limit can not panic
    /// mid-tick; divergence is caught when the tick is committed.
    pub fn clamp_abs(&self, limit: Vec2) -> Self {
        let lx = limit.x.abs();
        let ly = limit.y.abs();
        Self {
            x: self.x.max(-lx).min(lx),
            y: self.y.max(-ly).min(ly),
        }
    }
}

impl std::ops::AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl std::ops::Mul<f32> for Vec2 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        Self { x: self.x * rhs, y: self.y * rhs }
    }
}

impl std::ops::Neg for Vec2 {
    type Output = Self;
    fn neg(self) -> Self {
        Self { x: -self.x, y: -self.y }
    }
}
