//! .
//!
//! The origin of coordinate system is in top-left corner, one unit per pixel. Shapes are defined
//! by integer anchor points, while distances are measured in floating point.

use {
  euclid::{Box2D, Point2D},
  crate::sdf::SDF
};

pub mod shapes;
pub use shapes::*;

/// Pixel coordinate basis
#[derive(Debug, Copy, Clone)]
pub struct PixelSpace;

pub type P2 = Point2D<i32, PixelSpace>;

/// Pixels covered by the shape itself, `max` being exclusive. Anti-aliasing margin is not
/// included.
pub trait BoundingBox {
  fn bounding_box(&self) -> Box2D<i32, PixelSpace>;
}

/// Something inside a rectangular area.
pub trait Shape: SDF<f32> + BoundingBox {
  fn texture<T>(self, texture: T) -> crate::drawing::Texture<Self, T> where Self: Sized {
    crate::drawing::Texture { shape: self, texture }
  }
}
impl <T> Shape for T where T: SDF<f32> + BoundingBox {}

/// Inclusive pixel extent `[min, max]` as a box with exclusive `max`.
pub(crate) fn pixel_extent(min: P2, max: P2) -> Box2D<i32, PixelSpace> {
  Box2D::new(min, max + euclid::Vector2D::splat(1))
}
