//! Continued fractions, and why the golden ratio makes a good low discrepancy sequence.
//!
//! The crate has two independent halves:
//! - [`cont_frac`] expands a real number into a continued fraction, and evaluates its
//!   convergents, either as `f64` or as an exact fraction. [`report`] prints and tabulates them.
//! - [`sequence`] generates samples on `[0, 1)`: Mitchell's best candidate blue noise, and the
//!   additive recurrence `fract(x + r)` for an irrational `r`. [`frame`] draws them on a circle and
//!   a numberline with the anti-aliased primitives from [`drawing`].
//!
//! # Basic usage
//! ```no_run
//! # use {
//! #   cfrac_viz::{
//! #     error::Result,
//! #     frame::{self, FrameLayout},
//! #     sequence::AdditiveRecurrence,
//! #     consts::GOLDEN_RATIO_CONJUGATE
//! #   },
//! #   std::path::Path
//! # };
//! # fn main() -> Result<()> {
//! let layout = FrameLayout::default(); // 16 frames, 256px circle
//! // writes out/golden_0.png .. out/golden_15.png
//! frame::render_frames(
//!   "golden",
//!   AdditiveRecurrence::new(GOLDEN_RATIO_CONJUGATE as f32),
//!   &layout,
//!   Path::new("out")
//! )?;
//! #   Ok(())
//! # }
//! ```
//! The golden ratio's continued fraction is all ones, the slowest converging there is:
//! ```
//! # use cfrac_viz::{cont_frac::ContinuedFraction, consts::GOLDEN_RATIO};
//! let cf = ContinuedFraction::from_value(GOLDEN_RATIO).unwrap();
//! assert!(cf.terms().iter().all(|&a| a == 1));
//! assert_eq!(cf.to_fraction(10).unwrap().to_string(), "89/55");
//! ```

pub mod error;
pub mod consts;
pub mod cont_frac;
pub mod sdf;
pub mod geometry;
pub mod drawing;
pub mod sequence;
pub mod frame;
pub mod report;
pub mod util;
