//! Shared numeric constants.

pub use std::f64::consts::{PI, E, SQRT_2};

/// φ = (1 + √5) / 2
pub const GOLDEN_RATIO: f64 = 1.618_033_988_749_894_8;
/// φ - 1 = 1 / φ
pub const GOLDEN_RATIO_CONJUGATE: f64 = 0.618_033_988_749_894_8;

/// While expanding a continued fraction, a fractional remainder below this is considered zero.
pub const ZERO_THRESHOLD: f64 = 1e-6;
/// Default cap on the number of continued fraction terms.
pub const DEFAULT_MAX_TERMS: usize = 20;

pub const BLUE_NOISE_SEED: u64 = 0x1337beef;
