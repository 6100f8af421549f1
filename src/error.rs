//! .
//!
//! Numeric edge cases of the continued fraction engine are surfaced here instead of producing
//! garbage; output failures carry the offending path.
use std::path::{Path, PathBuf};

#[derive(thiserror::Error, Debug)]
pub enum Error {
  #[error("unable to open {path:?} for writing: {source}")]
  Io {
    path: PathBuf,
    source: std::io::Error
  },

  #[error(transparent)]
  Image(#[from] image::ImageError),

  #[error(transparent)]
  Csv(#[from] csv::Error),

  /// The fractional remainder at `index` could not be inverted.
  #[error("division by zero while expanding term #{index}")]
  DivisionByZero { index: usize },

  /// Numerator or denominator no longer fits, or an integer part exceeds `i64`.
  #[error("integer overflow at term #{index}")]
  Overflow { index: usize },

  #[error("cannot expand non-finite value {0}")]
  NonFinite(f64),

  #[error("invalid continued fraction term {term} at #{index}")]
  InvalidTerm { index: usize, term: i64 },
}

impl Error {
  pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
    Self::Io { path: path.as_ref().to_path_buf(), source }
  }
}

/// Convenient wrapper around `std::Result`.
pub type Result<T> = std::result::Result<T, Error>;
