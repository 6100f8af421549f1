//! Anti-aliased scanline rasterization into an [`RgbImage`].
//!
//! Every shape is drawn the same way: scan its bounding box padded by [`AA_PADDING`] and clamped
//! to the image, map the distance from each pixel to the shape through a [`smooth_step`] falloff
//! over [`AA_WIDTH`] pixels, and blend the texture color over the existing pixel.

use {
  crate::{
    geometry::{BoundingBox, PixelSpace, Shape, Segment, Ring, Disc, P2},
    sdf::SDF
  },
  euclid::{Box2D, Point2D, Vector2D as V2},
  image::{Pixel, Rgb, RgbImage},
  num_traits::AsPrimitive
};


/// Margin around the shape's bounding box, in pixels.
pub const AA_PADDING: i32 = 4;
/// Coverage falls from 1 at distance 0 to 0 at this distance.
pub const AA_WIDTH: f32 = 2.0;

pub trait Draw<Backend>: Shape {
  fn draw(&self, image: &mut Backend);
}

#[derive(Debug, Copy, Clone)]
pub struct Texture<S, T> {
  pub shape: S,
  pub texture: T
}
impl <S, T> SDF<f32> for Texture<S, T> where S: SDF<f32> {
  fn sdf(&self, pixel: Point2D<f32, PixelSpace>) -> f32 { self.shape.sdf(pixel) } }
impl <S, T> BoundingBox for Texture<S, T> where S: BoundingBox {
  fn bounding_box(&self) -> Box2D<i32, PixelSpace> { self.shape.bounding_box() } }

/// Cubic Hermite falloff `3x² - 2x³`, `x = clamp((value - min) / (max - min), 0, 1)`.
/// With `min > max` it decreases instead of rising.
pub fn smooth_step(value: f32, min: f32, max: f32) -> f32 {
  let x = ((value - min) / (max - min)).clamp(0.0, 1.0);
  3.0 * x * x - 2.0 * x * x * x
}

pub fn lerp<T>(a: T, b: T, t: f32) -> T
  where T: AsPrimitive<f32>,
        f32: AsPrimitive<T> {
  (a.as_() * (1.0 - t) + b.as_() * t).as_()
}

/// Region of the image to scan for a shape: its bounding box with the anti-aliasing margin,
/// clipped to the image. `None` if nothing is visible.
pub fn scan_box(
  bounding_box: Box2D<i32, PixelSpace>,
  (width, height): (u32, u32)
) -> Option<Box2D<i32, PixelSpace>> {
  let image = Box2D::new(
    Point2D::zero(),
    Point2D::new(width as i32, height as i32)
  );
  bounding_box
    .inflate(AA_PADDING, AA_PADDING)
    .intersection(&image)
}

impl <Cutie> Draw<RgbImage> for Texture<Cutie, Rgb<u8>>
  where Cutie: Shape
{
  fn draw(&self, image: &mut RgbImage) {
    let bounding_box = match scan_box(self.bounding_box(), image.dimensions()) {
      Some(x) => x,
      None => return // bounding box has no intersection with screen at all
    };

    itertools::iproduct!(bounding_box.y_range(), bounding_box.x_range())
      .map(|(y, x)| Point2D::<_, PixelSpace>::new(x, y))
      .for_each(|pixel| {
        let alpha = smooth_step(self.sdf(pixel.to_f32()), AA_WIDTH, 0.0);
        if alpha > 0.0 {
          let pixel = image.get_pixel_mut(pixel.x as u32, pixel.y as u32);
          *pixel = pixel.map2(&self.texture, |p1, p2| lerp(p1, p2, alpha));
        }
      });
  }
}

pub fn draw_line(image: &mut RgbImage, from: P2, to: P2, color: Rgb<u8>) {
  Segment::new(from, to)
    .texture(color)
    .draw(image);
}

pub fn draw_circle(image: &mut RgbImage, center: P2, radius: i32, color: Rgb<u8>) {
  Ring::new(center, radius)
    .texture(color)
    .draw(image);
}

pub fn draw_circle_filled(image: &mut RgbImage, center: P2, radius: i32, color: Rgb<u8>) {
  Disc::new(center, radius)
    .texture(color)
    .draw(image);
}

/// Place `tiles` side by side, left to right; each row of tiles starts below the tallest tile of
/// the previous row.
pub fn tile(rows: &[&[&RgbImage]]) -> RgbImage {
  let row_size = |row: &[&RgbImage]| row.iter()
    .fold((0, 0), |(w, h), tile| (w + tile.width(), h.max(tile.height())));
  let (width, height) = rows.iter()
    .map(|row| row_size(row))
    .fold((0, 0), |(w, h), (row_w, row_h)| (w.max(row_w), h + row_h));

  let mut composite = RgbImage::new(width, height);
  let mut offset = V2::<i64, PixelSpace>::zero();
  for row in rows {
    offset.x = 0;
    for tile in row.iter() {
      image::imageops::replace(&mut composite, *tile, offset.x, offset.y);
      offset.x += tile.width() as i64;
    }
    offset.y += row_size(row).1 as i64;
  }
  composite
}
