//! Circle and numberline views of a sample sequence, one composite PNG per frame.
//!
//! ```text
//! +---------------+---------------+
//! | circle, all   | circle, newer |
//! +---------------+---------------+
//! | line, all     | line, newer   |
//! +---------------+---------------+
//! ```
//! The left column shows every sample up to the current frame, the right column only the
//! samples from the second half of the animation.

use {
  crate::{
    consts::PI,
    drawing::{self, Draw},
    error::{Error, Result},
    geometry::{Shape, Segment, P2}
  },
  image::{ImageOutputFormat, Rgb, RgbImage},
  std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf}
  }
};

pub const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);
pub const REFERENCE: Rgb<u8> = Rgb([0, 0, 0]);
pub const CURRENT: Rgb<u8> = Rgb([255, 0, 0]);

#[derive(Debug, Clone, PartialEq)]
pub struct FrameLayout {
  pub frames: usize,
  pub circle_size: u32,
  pub circle_radius: i32,
  pub numberline_width: u32,
  pub numberline_height: u32,
  pub numberline_start_x: i32,
  pub numberline_size_x: i32,
  /// half length of a sample tick on the numberline
  pub tick_half_height: i32
}

impl Default for FrameLayout {
  fn default() -> Self {
    Self::new(16, 256, 120)
  }
}

impl FrameLayout {
  /// Numberline dimensions follow the circle view: as wide, a quarter as tall, the line itself
  /// spanning the middle 80%.
  pub fn new(frames: usize, circle_size: u32, circle_radius: i32) -> Self {
    let width = circle_size as i32;
    Self {
      frames,
      circle_size,
      circle_radius,
      numberline_width: circle_size,
      numberline_height: circle_size / 4,
      numberline_start_x: width / 10,
      numberline_size_x: width * 8 / 10,
      tick_half_height: 10
    }
  }

  pub fn circle_center(&self) -> P2 {
    P2::splat(self.circle_size as i32 / 2)
  }

  /// `2W × (W + W/4)`
  pub fn composite_size(&self) -> (u32, u32) {
    (self.circle_size * 2, self.circle_size + self.numberline_height)
  }

  /// Samples before this index only appear in the left column.
  pub fn second_half(&self) -> usize {
    self.frames / 2
  }

  /// Point on the circle at `2π·value`.
  pub fn circle_point(&self, value: f32) -> P2 {
    let angle = value * PI as f32 * 2.0;
    let radius = self.circle_radius as f32;
    P2::new(
      (angle.cos() * radius) as i32,
      (angle.sin() * radius) as i32
    ) + self.circle_center().to_vector()
  }

  pub fn numberline_x(&self, value: f32) -> i32 {
    (value * self.numberline_size_x as f32) as i32 + self.numberline_start_x
  }

  /// The newest sample is red, older ones fade from orange to yellow as `sample` grows.
  pub fn sample_color(&self, sample: usize, frame: usize) -> Rgb<u8> {
    if sample == frame {
      return CURRENT;
    }
    let last = self.frames.saturating_sub(1).max(1) as f32;
    let percent = (255.0 - 255.0 * sample as f32 / last) as u8;
    Rgb([192, percent, 0])
  }

  fn spoke(&self, value: f32) -> Segment {
    Segment::new(self.circle_center(), self.circle_point(value))
  }

  fn tick(&self, value: f32) -> Segment {
    let x = self.numberline_x(value);
    let y = self.numberline_height as i32 / 2;
    Segment::new(
      P2::new(x, y - self.tick_half_height),
      P2::new(x, y + self.tick_half_height)
    )
  }

  fn circle_canvas(&self) -> RgbImage {
    let mut canvas = RgbImage::from_pixel(self.circle_size, self.circle_size, BACKGROUND);
    drawing::draw_circle(&mut canvas, self.circle_center(), self.circle_radius, REFERENCE);
    canvas
  }

  fn numberline_canvas(&self) -> RgbImage {
    let mut canvas = RgbImage::from_pixel(self.numberline_width, self.numberline_height, BACKGROUND);
    let y = self.numberline_height as i32 / 2;
    drawing::draw_line(
      &mut canvas,
      P2::new(self.numberline_start_x, y),
      P2::new(self.numberline_start_x + self.numberline_size_x, y),
      REFERENCE
    );
    canvas
  }

  /// Composite for the frame showing `samples`, the last of them being the current one.
  pub fn compose_frame(&self, samples: &[f32]) -> RgbImage {
    let frame = samples.len().saturating_sub(1);
    let (mut circle_left, mut circle_right) = (self.circle_canvas(), self.circle_canvas());
    let (mut line_left, mut line_right) = (self.numberline_canvas(), self.numberline_canvas());

    samples.iter().enumerate().for_each(|(sample, &value)| {
      let color = self.sample_color(sample, frame);
      let spoke = self.spoke(value).texture(color);
      let tick = self.tick(value).texture(color);

      spoke.draw(&mut circle_left);
      tick.draw(&mut line_left);
      if sample >= self.second_half() {
        spoke.draw(&mut circle_right);
        tick.draw(&mut line_right);
      }
    });

    drawing::tile(&[
      &[&circle_left, &circle_right],
      &[&line_left, &line_right]
    ])
  }
}

/// `<out_dir>/<name>_<frame>.png`
pub fn frame_path(out_dir: &Path, name: &str, frame: usize) -> PathBuf {
  out_dir.join(format!("{}_{}.png", name, frame))
}

/// Encode `image` as PNG at `path`. Failing to create or flush the file is [`Error::Io`].
fn write_png(image: &RgbImage, path: &Path) -> Result<()> {
  let file = File::create(path)
    .map_err(|e| Error::io(path, e))?;
  let mut writer = BufWriter::new(file);
  image.write_to(&mut writer, ImageOutputFormat::Png)?;
  writer.flush()
    .map_err(|e| Error::io(path, e))
}

/// Render one composite per frame for the first `layout.frames` samples. Returns the written
/// paths.
#[tracing::instrument(skip(samples, layout))]
pub fn render_frames(
  name: &str,
  samples: impl IntoIterator<Item = f32>,
  layout: &FrameLayout,
  out_dir: &Path
) -> Result<Vec<PathBuf>> {
  fs::create_dir_all(out_dir)
    .map_err(|e| Error::io(out_dir, e))?;

  let mut history = Vec::with_capacity(layout.frames);
  samples.into_iter()
    .take(layout.frames)
    .enumerate()
    .map(|(frame, value)| {
      history.push(value);
      tracing::debug!(frame, value, "composing");
      let path = frame_path(out_dir, name, frame);
      write_png(&layout.compose_frame(&history), &path)?;
      tracing::info!("wrote {}", path.display());
      Ok(path)
    })
    .collect()
}
