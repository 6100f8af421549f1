use {
  super::{pixel_extent, BoundingBox, PixelSpace, P2},
  euclid::{Box2D, Vector2D as V2}
};

/// Line segment between two pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Segment {
  pub from: P2,
  pub to: P2
}

/// Circle outline.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ring {
  pub center: P2,
  pub radius: i32
}

/// Filled circle.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Disc {
  pub center: P2,
  pub radius: i32
}

impl Segment {
  pub fn new(from: P2, to: P2) -> Self { Self { from, to } }
}

impl Ring {
  pub fn new(center: P2, radius: i32) -> Self { Self { center, radius } }
}

impl Disc {
  pub fn new(center: P2, radius: i32) -> Self { Self { center, radius } }
}

impl BoundingBox for Segment {
  fn bounding_box(&self) -> Box2D<i32, PixelSpace> {
    pixel_extent(self.from.min(self.to), self.from.max(self.to))
  }}

impl BoundingBox for Ring {
  fn bounding_box(&self) -> Box2D<i32, PixelSpace> {
    let r = V2::splat(self.radius);
    pixel_extent(self.center - r, self.center + r)
  }}

impl BoundingBox for Disc {
  fn bounding_box(&self) -> Box2D<i32, PixelSpace> {
    Ring::new(self.center, self.radius).bounding_box()
  }}
