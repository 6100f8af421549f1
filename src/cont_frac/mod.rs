//! Regular continued fractions `a0 + 1/(a1 + 1/(a2 + ...))`.
//!
//! Expansion works on `f64` and stops once the fractional remainder drops below
//! [`ZERO_THRESHOLD`](crate::consts::ZERO_THRESHOLD), or the term cap is reached. Reconstruction
//! either folds back into a `f64`, or into an exact `u64` numerator/denominator pair.

use {
  crate::{
    consts::{DEFAULT_MAX_TERMS, ZERO_THRESHOLD},
    error::{Error, Result}
  },
  std::fmt
};

#[cfg(test)] mod tests;

/// Terms of a regular continued fraction. The first term is the integer part and may have any
/// sign, every following term is strictly positive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContinuedFraction(Vec<i64>);

/// Exact rational `numerator / denominator`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Fraction {
  pub numerator: u64,
  pub denominator: u64
}

/// Value of a continued fraction truncated to its first `count` terms.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Convergent {
  pub count: usize,
  /// last term taken into account
  pub term: i64,
  pub value: f64,
  pub fraction: Fraction
}

/// Expand `value` into at most `max_terms` terms, `0` meaning no cap.
///
/// Without a cap only the zero threshold stops the loop, which for irrationals happens after
/// float noise has produced hundreds of thousands of meaningless terms. Pass a cap such as
/// [`DEFAULT_MAX_TERMS`] for anything but exact rationals.
pub fn to_continued_fraction(value: f64, max_terms: usize) -> Result<ContinuedFraction> {
  to_continued_fraction_with_threshold(value, max_terms, ZERO_THRESHOLD)
}

/// Same as [`to_continued_fraction`], with a custom zero threshold for the fractional remainder.
/// A threshold of `0.0` only stops on exactly representable rationals, and fails with
/// [`Error::DivisionByZero`] if a remainder cannot be inverted.
pub fn to_continued_fraction_with_threshold(
  value: f64,
  max_terms: usize,
  zero_threshold: f64
) -> Result<ContinuedFraction> {
  if !value.is_finite() {
    return Err(Error::NonFinite(value));
  }
  let mut terms = vec![];
  let mut f = value;

  while max_terms == 0 || terms.len() < max_terms {
    let integer_part = f.floor();
    if integer_part.abs() >= i64::MAX as f64 {
      return Err(Error::Overflow { index: terms.len() });
    }
    let fractional_part = f - integer_part;
    terms.push(integer_part as i64);

    if fractional_part < zero_threshold { break; }

    f = fractional_part.recip();
    if !f.is_finite() {
      return Err(Error::DivisionByZero { index: terms.len() });
    }
  }
  Ok(ContinuedFraction(terms))
}

/// Evaluate the first `count` terms (`0` = all of them), folding right to left.
pub fn from_continued_fraction(terms: &[i64], count: usize) -> f64 {
  truncate(terms, count).iter()
    .rev()
    .fold(0.0, |acc, &term| {
      let acc = if acc != 0.0 { acc.recip() } else { acc };
      acc + term as f64
    })
}

/// Exact rational value of the first `count` terms (`0` = all of them).
pub fn to_fraction(terms: &[i64], count: usize) -> Result<Fraction> {
  let (numerator, denominator) = truncate(terms, count).iter()
    .enumerate()
    .rev()
    .try_fold((0u64, 1u64), |(mut n, mut d), (index, &term)| {
      let a = u64::try_from(term)
        .map_err(|_| Error::InvalidTerm { index, term })?;
      if n != 0 { std::mem::swap(&mut n, &mut d); }
      let n = a.checked_mul(d)
        .and_then(|ad| ad.checked_add(n))
        .ok_or(Error::Overflow { index })?;
      Ok::<_, Error>((n, d))
    })?;
  Ok(Fraction { numerator, denominator })
}

fn truncate(terms: &[i64], count: usize) -> &[i64] {
  match count {
    0 => terms,
    count => &terms[..count.min(terms.len())]
  }
}

impl ContinuedFraction {
  /// Expansion capped at [`DEFAULT_MAX_TERMS`].
  pub fn from_value(value: f64) -> Result<Self> {
    to_continued_fraction(value, DEFAULT_MAX_TERMS)
  }

  pub fn from_terms(terms: Vec<i64>) -> Result<Self> {
    if let Some((index, &term)) = terms.iter()
      .enumerate()
      .skip(1)
      .find(|&(_, &term)| term <= 0) {
      return Err(Error::InvalidTerm { index, term });
    }
    Ok(Self(terms))
  }

  pub fn terms(&self) -> &[i64] { &self.0 }
  pub fn len(&self) -> usize { self.0.len() }
  pub fn is_empty(&self) -> bool { self.0.is_empty() }

  pub fn value(&self) -> f64 {
    from_continued_fraction(&self.0, 0)
  }

  pub fn to_fraction(&self, count: usize) -> Result<Fraction> {
    to_fraction(&self.0, count)
  }

  /// Convergent of the first `count` terms, `0` meaning all of them.
  pub fn convergent(&self, count: usize) -> Result<Convergent> {
    let count = match count {
      0 => self.len(),
      count => count.min(self.len())
    }.max(1);
    Ok(Convergent {
      count,
      term: self.0.get(count - 1).copied().unwrap_or(0),
      value: from_continued_fraction(&self.0, count),
      fraction: to_fraction(&self.0, count)?
    })
  }

  /// Successive convergents, from the integer part alone up to the full expansion.
  pub fn convergents(&self) -> impl Iterator<Item = Result<Convergent>> + '_ {
    (1..=self.len()).map(move |count| self.convergent(count))
  }
}

impl AsRef<[i64]> for ContinuedFraction {
  fn as_ref(&self) -> &[i64] { &self.0 }
}

impl fmt::Display for ContinuedFraction {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "[")?;
    for (i, term) in self.0.iter().enumerate() {
      if i > 0 { write!(f, ", ")?; }
      write!(f, "{}", term)?;
    }
    write!(f, "]")
  }
}

impl Fraction {
  pub fn value(&self) -> f64 {
    self.numerator as f64 / self.denominator as f64
  }
}

impl fmt::Display for Fraction {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "{}/{}", self.numerator, self.denominator)
  }
}
