use serde::{Deserialize, Serialize};

use super::vec2::Vec2;

/// Axis-aligned rectangle (top-left origin, y grows downward)
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f32; 4]", into = "[f32; 4]")]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn from_top_left(top_left: Vec2, size: Vec2) -> Self {
        Self { x: top_left.x, y: top_left.y, w: size.x, h: size.y }
    }

    #[inline]
    pub fn left(&self) -> f32 { self.x }
    #[inline]
    pub fn right(&self) -> f32 { self.x + self.w }
    #[inline]
    pub fn top(&self) -> f32 { self.y }
    #[inline]
    pub fn bottom(&self) -> f32 { self.y + self.h }

    pub fn top_left(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.w, self.h)
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w * 0.5, self.y + self.h * 0.5)
    }

    pub fn set_top_left(&mut self, top_left: Vec2) {
        self.x = top_left.x;
        self.y = top_left.y;
    }

    pub fn translate(&mut self, by: Vec2) {
        self.x += by.x;
        self.y += by.y;
    }

    /// Grow by `margin` on every side.
    pub fn inflate(&self, margin: f32) -> Self {
        Self {
            x: self.x - margin,
            y: self.y - margin,
            w: self.w + 2.0 * margin,
            h: self.h + 2.0 * margin,
        }
    }

    /// Strict overlap test: rectangles that only share an edge do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    /// Intersection of the two rectangles.
    ///
    /// Disjoint or edge-touching rectangles yield a zero-sized rect, so the
    /// extents can always be used as a clamp range.
    pub fn clip(&self, other: &Rect) -> Rect {
        let left = self.left().max(other.left());
        let top = self.top().max(other.top());
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        if right <= left || bottom <= top {
            return Rect::new(left, top, 0.0, 0.0);
        }
        Rect::new(left, top, right - left, bottom - top)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.w.is_finite() && self.h.is_finite()
    }
}

impl From<[f32; 4]> for Rect {
    fn from([x, y, w, h]: [f32; 4]) -> Self {
        Self { x, y, w, h }
    }
}

impl From<Rect> for [f32; 4] {
    fn from(r: Rect) -> Self {
        [r.x, r.y, r.w, r.h]
    }
}
