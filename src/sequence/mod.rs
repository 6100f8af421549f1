//! One dimensional sample sequences on the periodic domain `[0, 1)`.

use {
  crate::consts::{BLUE_NOISE_SEED, GOLDEN_RATIO_CONJUGATE, PI, SQRT_2},
  rand::{Rng, SeedableRng},
  rand_pcg::Pcg64
};


/// Fractional part, `x - floor(x)`.
pub fn fract(x: f32) -> f32 {
  x - x.floor()
}

/// Distance on a circle of circumference 1: `min(|a - b|, 1 - |a - b|)`.
pub fn toroidal_distance(a: f32, b: f32) -> f32 {
  let d = (a - b).abs();
  d.min(1.0 - d)
}

/// Mitchell's best candidate blue noise.
///
/// The first sample is `0`. Every following sample is the best of `n + 1` uniform candidates,
/// `n` being the number of samples so far, where best means the farthest (toroidally) from its
/// closest existing sample.
#[derive(Debug, Clone)]
pub struct BestCandidate<R> {
  rng: R,
  samples: Vec<f32>
}

impl BestCandidate<Pcg64> {
  pub fn seeded(seed: u64) -> Self {
    Self::new(Pcg64::seed_from_u64(seed))
  }
}

impl<R: Rng> BestCandidate<R> {
  pub fn new(rng: R) -> Self {
    Self { rng, samples: vec![] }
  }

  /// Samples generated so far.
  pub fn samples(&self) -> &[f32] {
    &self.samples
  }

  fn next_sample(&mut self) -> f32 {
    let Self { rng, samples } = self;
    if samples.is_empty() {
      return 0.0;
    }
    let candidate_count = samples.len() + 1;
    let mut best = (0.0, -1.0);
    for _ in 0..candidate_count {
      let candidate: f32 = rng.gen_range(0.0..1.0);
      let score = samples.iter()
        .map(|&s| toroidal_distance(s, candidate))
        .fold(f32::MAX, f32::min);
      // ties keep the earlier candidate
      if score > best.1 {
        best = (candidate, score);
      }
    }
    best.0
  }
}

impl<R: Rng> Iterator for BestCandidate<R> {
  type Item = f32;

  fn next(&mut self) -> Option<f32> {
    let sample = self.next_sample();
    self.samples.push(sample);
    Some(sample)
  }
}

/// Additive recurrence (Weyl sequence) `x(n+1) = fract(x(n) + increment)`, starting at `0`.
#[derive(Debug, Copy, Clone)]
pub struct AdditiveRecurrence {
  pub value: f32,
  pub increment: f32
}

impl AdditiveRecurrence {
  pub fn new(increment: f32) -> Self {
    Self { value: 0.0, increment }
  }
}

impl Iterator for AdditiveRecurrence {
  type Item = f32;

  fn next(&mut self) -> Option<f32> {
    let value = self.value;
    self.value = fract(self.value + self.increment);
    Some(value)
  }
}

/// The sequences rendered by the batch driver.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SequenceKind {
  BlueNoise,
  Golden,
  Pi,
  Sqrt2
}

impl SequenceKind {
  pub const ALL: [SequenceKind; 4] = [
    SequenceKind::BlueNoise,
    SequenceKind::Golden,
    SequenceKind::Pi,
    SequenceKind::Sqrt2
  ];

  /// Base name of the output files.
  pub fn name(&self) -> &'static str {
    match self {
      SequenceKind::BlueNoise => "blue",
      SequenceKind::Golden => "golden",
      SequenceKind::Pi => "pi",
      SequenceKind::Sqrt2 => "sqrt2"
    }
  }

  /// Increment of the additive recurrence, `None` for blue noise.
  pub fn increment(&self) -> Option<f32> {
    match self {
      SequenceKind::BlueNoise => None,
      SequenceKind::Golden => Some(GOLDEN_RATIO_CONJUGATE as f32),
      SequenceKind::Pi => Some(PI as f32),
      SequenceKind::Sqrt2 => Some(SQRT_2 as f32)
    }
  }

  pub fn samples(&self) -> Box<dyn Iterator<Item = f32>> {
    match self.increment() {
      Some(increment) => Box::new(AdditiveRecurrence::new(increment)),
      None => Box::new(BestCandidate::seeded(BLUE_NOISE_SEED))
    }
  }
}
