use {
  super::*,
  crate::consts::{GOLDEN_RATIO, GOLDEN_RATIO_CONJUGATE, PI, E, SQRT_2},
  anyhow::Result
};

fn gcd(a: u64, b: u64) -> u64 {
  if b == 0 { a } else { gcd(b, a % b) }
}

fn relative_errors(x: f64) -> Result<Vec<f64>> {
  let cf = ContinuedFraction::from_value(x)?;
  Ok((1..=cf.len())
    .map(|count| (from_continued_fraction(cf.terms(), count) / x - 1.0).abs())
    .collect())
}

#[test] fn known_expansions() -> Result<()> {
  assert_eq!(ContinuedFraction::from_value(1.0)?.terms(), &[1]);
  assert_eq!(ContinuedFraction::from_value(8.25)?.terms(), &[8, 4]);
  assert_eq!(ContinuedFraction::from_value(0.0)?.terms(), &[0]);
  assert_eq!(ContinuedFraction::from_value(4.5)?.terms(), &[4, 2]);
  Ok(())
}

#[test] fn golden_ratio_is_all_ones() -> Result<()> {
  let cf = ContinuedFraction::from_value(GOLDEN_RATIO)?;
  assert_eq!(cf.terms(), &[1; 20]);

  let conjugate = ContinuedFraction::from_value(GOLDEN_RATIO_CONJUGATE)?;
  assert_eq!(conjugate.terms()[0], 0);
  assert!(conjugate.terms()[1..].iter().all(|&a| a == 1));
  Ok(())
}

#[test] fn pi_leading_terms() -> Result<()> {
  let cf = ContinuedFraction::from_value(PI)?;
  assert_eq!(&cf.terms()[..5], &[3, 7, 15, 1, 292]);
  assert_eq!(cf.to_fraction(2)?, Fraction { numerator: 22, denominator: 7 });
  assert_eq!(cf.to_fraction(4)?, Fraction { numerator: 355, denominator: 113 });
  Ok(())
}

#[test] fn sqrt2_is_periodic() -> Result<()> {
  let cf = ContinuedFraction::from_value(SQRT_2)?;
  assert_eq!(cf.terms()[0], 1);
  assert!(cf.terms()[1..12].iter().all(|&a| a == 2));
  Ok(())
}

#[test] fn term_cap() -> Result<()> {
  assert_eq!(to_continued_fraction(PI, 3)?.len(), 3);
  assert_eq!(to_continued_fraction(GOLDEN_RATIO, 7)?.len(), 7);
  assert_eq!(ContinuedFraction::from_value(PI)?.len(), crate::consts::DEFAULT_MAX_TERMS);
  // unlimited, bounded by the zero threshold
  let cf = to_continued_fraction(8.25, 0)?;
  assert_eq!(cf.terms(), &[8, 4]);
  Ok(())
}

#[test] fn rational_round_trip() -> Result<()> {
  for q in 1..=60u64 {
    for p in 0..=3 * q {
      if gcd(p, q) != 1 { continue; }
      let cf = ContinuedFraction::from_value(p as f64 / q as f64)?;
      assert_eq!(
        cf.to_fraction(0)?,
        Fraction { numerator: p, denominator: q },
        "{}/{} -> {}", p, q, cf
      );
    }
  }
  Ok(())
}

#[test] fn evaluation_matches_fraction() -> Result<()> {
  let cf = ContinuedFraction::from_value(E)?;
  for convergent in cf.convergents() {
    let convergent = convergent?;
    assert!((convergent.value - convergent.fraction.value()).abs() < 1e-12);
  }
  Ok(())
}

#[test] fn convergent_count() -> Result<()> {
  let cf = ContinuedFraction::from_value(PI)?;
  let all = cf.convergent(0)?;
  assert_eq!(all.count, cf.len());
  assert_eq!(all.fraction, cf.to_fraction(0)?);
  assert_eq!(all.value, cf.value());
  // past the end clamps to the full expansion
  assert_eq!(cf.convergent(cf.len() + 5)?, all);
  let first = cf.convergent(1)?;
  assert_eq!((first.count, first.term), (1, 3));
  assert_eq!(first.fraction.to_string(), "3/1");
  Ok(())
}

#[test] fn monotone_convergence() -> Result<()> {
  for x in [GOLDEN_RATIO, GOLDEN_RATIO_CONJUGATE, SQRT_2, 3f64.sqrt(), 5f64.sqrt(), 7f64.sqrt(), PI, E] {
    let errors = relative_errors(x)?;
    errors.windows(2).for_each(|w| assert!(
      w[1] <= w[0] + 1e-15,
      "{}: {:e} -> {:e}", x, w[0], w[1]
    ));
  }
  Ok(())
}

#[test] fn evaluate_prefix() {
  let terms = [3, 7, 15, 1];
  assert_eq!(from_continued_fraction(&terms, 1), 3.0);
  assert!((from_continued_fraction(&terms, 2) - 22.0 / 7.0).abs() < 1e-15);
  // count beyond the length, and 0, both mean "all terms"
  assert_eq!(from_continued_fraction(&terms, 0), from_continued_fraction(&terms, 10));
  assert_eq!(from_continued_fraction(&[], 0), 0.0);
}

#[test] fn fraction_overflow() {
  let terms = [1, 1_000_000_000, 1_000_000_000, 1_000_000_000];
  assert!(matches!(to_fraction(&terms, 0), Err(Error::Overflow { .. })));
  assert!(to_fraction(&terms, 2).is_ok());
}

#[test] fn negative_integer_part() -> Result<()> {
  let cf = ContinuedFraction::from_value(-1.5)?;
  assert_eq!(cf.terms(), &[-2, 2]);
  assert_eq!(cf.value(), -1.5);
  assert!(matches!(cf.to_fraction(0), Err(Error::InvalidTerm { index: 0, term: -2 })));
  Ok(())
}

#[test] fn non_finite_input() {
  assert!(matches!(to_continued_fraction(f64::NAN, 20), Err(Error::NonFinite(_))));
  assert!(matches!(to_continued_fraction(f64::INFINITY, 20), Err(Error::NonFinite(_))));
}

#[test] fn zero_threshold_division_by_zero() {
  // 8.25 is exact in binary, so the remainder hits zero exactly
  assert!(matches!(
    to_continued_fraction_with_threshold(8.25, 0, 0.0),
    Err(Error::DivisionByZero { index: 2 })
  ));
}

#[test] fn from_terms_validation() {
  assert!(ContinuedFraction::from_terms(vec![-3, 1, 2]).is_ok());
  assert!(matches!(
    ContinuedFraction::from_terms(vec![1, 2, 0, 4]),
    Err(Error::InvalidTerm { index: 2, term: 0 })
  ));
}

#[test] fn display() -> Result<()> {
  assert_eq!(ContinuedFraction::from_value(8.25)?.to_string(), "[8, 4]");
  assert_eq!(Fraction { numerator: 355, denominator: 113 }.to_string(), "355/113");
  Ok(())
}
