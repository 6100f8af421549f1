use {
  euclid::{Point2D, Vector2D as V2},
  crate::geometry::{PixelSpace, Segment, Ring, Disc}
};

/// Distance function, evaluated at pixel centers.
///
/// Unlike a true signed distance, the shapes here are never negative: the stroked ones measure
/// the distance to the stroke, the filled ones are zero on the inside.
pub trait SDF<T> {
  fn sdf(&self, pixel: Point2D<T, PixelSpace>) -> T;
}

impl SDF<f32> for Segment {
  fn sdf(&self, pixel: Point2D<f32, PixelSpace>) -> f32 {
    let a = self.from.to_f32();
    let ab = self.to.to_f32() - a;
    let length = ab.length();
    // a degenerate segment is a point
    let direction = if length > 0.0 { ab / length } else { V2::zero() };
    let t = (pixel - a).dot(direction).clamp(0.0, length);
    let closest = a + direction * t;
    (pixel - closest).length()
  }
}

impl SDF<f32> for Ring {
  fn sdf(&self, pixel: Point2D<f32, PixelSpace>) -> f32 {
    ((pixel - self.center.to_f32()).length() - self.radius as f32).abs()
  }
}

impl SDF<f32> for Disc {
  fn sdf(&self, pixel: Point2D<f32, PixelSpace>) -> f32 {
    ((pixel - self.center.to_f32()).length() - self.radius as f32).max(0.0)
  }
}
