//! Console listings and CSV tables of how well continued fraction convergents approximate a
//! number.

use {
  crate::{
    cont_frac::{from_continued_fraction, to_continued_fraction, ContinuedFraction},
    consts::{DEFAULT_MAX_TERMS, E, GOLDEN_RATIO, GOLDEN_RATIO_CONJUGATE, PI, SQRT_2},
    error::{Error, Result}
  },
  csv::{QuoteStyle, WriterBuilder},
  std::{fs::File, path::Path}
};

/// A number with a name, for reporting only.
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledNumber {
  pub label: String,
  pub value: f64
}

impl LabeledNumber {
  pub fn new(label: impl Into<String>, value: f64) -> Self {
    Self { label: label.into(), value }
  }
}

/// `label = value = [a0, a1, ...]`, or `value = [a0, a1, ...]` without a label.
pub fn format_continued_fraction(value: f64, label: Option<&str>, max_terms: usize) -> Result<String> {
  let cf = to_continued_fraction(value, max_terms)?;
  Ok(match label {
    Some(label) => format!("{} = {:.6} = {}", label, value, cf),
    None => format!("{:.6} = {}", value, cf)
  })
}

/// One line per convergent, all but the full expansion: `[term] value aka n/d (error)`.
pub fn convergent_table(value: f64) -> Result<Vec<String>> {
  let cf = ContinuedFraction::from_value(value)?;
  cf.convergents()
    .take(cf.len().saturating_sub(1))
    .map(|convergent| {
      let convergent = convergent?;
      Ok(format!(
        "[{}] {:.6} aka {} ({:.6})",
        convergent.term,
        convergent.value,
        convergent.fraction,
        (convergent.value / value - 1.0).abs()
      ))
    })
    .collect()
}

/// Absolute relative error of the convergents with `1..len` terms.
pub fn relative_errors(value: f64) -> Result<Vec<f64>> {
  let cf = ContinuedFraction::from_value(value)?;
  Ok((1..cf.len())
    .map(|count| (from_continued_fraction(cf.terms(), count) / value - 1.0).abs())
    .collect())
}

/// One ragged row per number: the label, then [`relative_errors`]. Every field is quoted.
#[tracing::instrument(skip(numbers))]
pub fn write_error_csv(path: &Path, numbers: &[LabeledNumber]) -> Result<()> {
  let file = File::create(path)
    .map_err(|e| Error::io(path, e))?;
  let mut writer = WriterBuilder::new()
    .quote_style(QuoteStyle::Always)
    .flexible(true)
    .from_writer(file);

  for number in numbers {
    let errors = relative_errors(number.value)?;
    let row = std::iter::once(number.label.clone())
      .chain(errors.iter().map(|e| format!("{:.6}", e)));
    writer.write_record(row)?;
  }
  writer.flush()
    .map_err(|e| Error::io(path, e))?;
  tracing::info!("wrote {}", path.display());
  Ok(())
}

/// Numbers whose continued fractions repeat `1, 2`, `1, 1, 2` and `1, 1, 1, 2`.
pub fn made_up_numbers() -> Vec<LabeledNumber> {
  let patterns: [(&str, &[i64]); 3] = [("A", &[1, 2]), ("B", &[1, 1, 2]), ("C", &[1, 1, 1, 2])];
  patterns.into_iter()
    .map(|(label, pattern)| {
      let terms = pattern.iter()
        .cycle()
        .take(DEFAULT_MAX_TERMS)
        .copied()
        .collect::<Vec<_>>();
      LabeledNumber::new(label, from_continued_fraction(&terms, 0))
    })
    .collect()
}

pub fn well_known_numbers() -> Vec<LabeledNumber> {
  vec![
    LabeledNumber::new("Golden Ratio", GOLDEN_RATIO),
    LabeledNumber::new("Golden Ratio Conjugate", GOLDEN_RATIO_CONJUGATE),
    LabeledNumber::new("Pi", PI),
    LabeledNumber::new("Sqrt(2)", SQRT_2),
    LabeledNumber::new("Sqrt(3)", 3f64.sqrt()),
    LabeledNumber::new("Sqrt(5)", 5f64.sqrt()),
    LabeledNumber::new("Sqrt(7)", 7f64.sqrt()),
  ]
}

/// Print continued fraction listings and convergent tables, then write `cfabsrelerror.csv` and
/// `madeup.csv` into `out_dir`.
pub fn run(out_dir: &Path) -> Result<()> {
  std::fs::create_dir_all(out_dir)
    .map_err(|e| Error::io(out_dir, e))?;

  println!("Continued Fractions...");
  for value in [0.0, 1.0, 8.25, 4.1] {
    println!("{}", format_continued_fraction(value, None, DEFAULT_MAX_TERMS)?);
  }
  let listed = [
    ("Pi", PI),
    ("Golden Ratio", GOLDEN_RATIO),
    ("Golden Ratio Conjugate", GOLDEN_RATIO_CONJUGATE),
    ("e", E),
    ("sqrt(2)", SQRT_2),
    ("sqrt(3)", 3f64.sqrt()),
    ("sqrt(5)", 5f64.sqrt()),
    ("sqrt(7)", 7f64.sqrt()),
  ];
  for (label, value) in listed {
    println!("{}", format_continued_fraction(value, Some(label), DEFAULT_MAX_TERMS)?);
  }

  for (label, value) in [("pi", PI), ("golden ratio", GOLDEN_RATIO), ("golden ratio conjugate", GOLDEN_RATIO_CONJUGATE)] {
    println!("\n\nShowing evaluation of continued fraction of {} ({:.6})...", label, value);
    for line in convergent_table(value)? {
      println!("{}", line);
    }
  }

  println!("\n");
  write_error_csv(&out_dir.join("cfabsrelerror.csv"), &well_known_numbers())?;

  println!("\n\nMade Up Numbers");
  let made_up = made_up_numbers();
  for number in &made_up {
    println!("{}", format_continued_fraction(number.value, Some(number.label.as_str()), DEFAULT_MAX_TERMS)?);
  }
  let compared = [
    LabeledNumber::new("Golden Ratio", GOLDEN_RATIO),
    LabeledNumber::new("Pi", PI),
  ];
  let rows = compared.into_iter()
    .chain(made_up)
    .collect::<Vec<_>>();
  write_error_csv(&out_dir.join("madeup.csv"), &rows)
}
