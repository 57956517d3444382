//! Core value math shared by every system: vectors and rectangles.

pub mod rect;
pub mod vec2;

pub use rect::Rect;
pub use vec2::Vec2;
