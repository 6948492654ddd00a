use super::perfect_square::{narrate_square, perfect_square_trinomial};
use super::{expanded, factored, Detection, Narrated};
use crate::oracle::Oracle;
use crate::steps::{FactoringStep, Technique};
use crate::syntax::{render_factor, Polynomial};
use log::debug;

/// The oracle factors `expr` as a single `(base)^power`, `power >= 2`.
///
/// Squares of linear binomials go to [`perfect_square_trinomial`].
/// Other squares must match `a^2 x^4 + 2ab x^2 + b^2` exactly or pass
/// the `(2k, k, 0)` middle-term check within `tolerance`. Cubes and
/// higher powers are narrated as a generic perfect power.
pub fn perfect_power(
  oracle: &dyn Oracle,
  expr: &str,
  tolerance: f64,
) -> Option<Detection> {
  let (text, factorization) = factored(oracle, expr)?;
  let (base, power) = factorization.single_power()?;
  if power == 2 && base.degree() == 1 && base.term_count() == 2 {
    return perfect_square_trinomial(oracle, expr);
  }

  let poly = expanded(oracle, expr)?;
  if power == 2 {
    if quartic_square(&poly, base) || square_by_terms(&poly, base, tolerance)
    {
      return Some(narrate_square(&poly, base));
    }
    debug!("{poly} = {text} does not fit a square trinomial");
    return None;
  }

  let name = match power {
    3 => "cube".to_string(),
    n => format!("{n}th power"),
  };
  let step = FactoringStep::new(
    Technique::Other,
    format!("Recognize a perfect {name}"),
    format!("{poly} = {text}"),
    format!(
      "Expanding {} with the binomial theorem reproduces every term of \
       {poly}, so the expression is a perfect {name}.",
      render_factor(base, power)
    ),
  );
  Some(Detection {
    steps: vec![Narrated::claiming(step, &text, poly.to_string())],
    factored: text,
  })
}

/// `(a x^2 + b)^2 = a^2 x^4 + 2ab x^2 + b^2`.
fn quartic_square(poly: &Polynomial, base: &Polynomial) -> bool {
  if base.exponents() != [2, 0] || poly.exponents() != [4, 2, 0] {
    return false;
  }
  let a = base.coefficient(2);
  let b = base.coefficient(0);
  let expected = [
    a.checked_mul(a),
    a.checked_mul(b).and_then(|ab| ab.checked_mul(2)),
    b.checked_mul(b),
  ];
  expected
    == [
      Some(poly.coefficient(4)),
      Some(poly.coefficient(2)),
      Some(poly.coefficient(0)),
    ]
}

/// Terms at exponents `2k`, `k`, `0` with `|middle| = 2 sqrt(outer)
/// sqrt(inner)`, and a base of the matching `a x^k +/- b` shape.
fn square_by_terms(
  poly: &Polynomial,
  base: &Polynomial,
  tolerance: f64,
) -> bool {
  let exps = poly.exponents();
  let [high, k, 0] = exps[..] else {
    return false;
  };
  if high != 2 * k || base.exponents() != [k, 0] {
    return false;
  }
  let outer = poly.coefficient(high) as f64;
  let middle = poly.coefficient(k) as f64;
  let inner = poly.coefficient(0) as f64;
  if outer <= 0.0 || inner <= 0.0 {
    return false;
  }
  (middle.abs() - 2.0 * outer.sqrt() * inner.sqrt()).abs() <= tolerance
}
