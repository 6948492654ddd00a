use super::{expanded, factored, Detection, Narrated};
use crate::numeric::integer_cbrt;
use crate::oracle::Oracle;
use crate::steps::{FactoringStep, Technique};
use crate::syntax::{Monomial, Polynomial};
use log::debug;

/// `<term> +/- <term>` where both terms are perfect cubes in their
/// coefficient and exponent.
pub fn is_cubes_shape(poly: &Polynomial) -> bool {
  poly.term_count() == 2
    && poly.terms[0].coeff > 0
    && poly.terms.iter().all(|m| {
      m.exp % 3 == 0
        && m.coeff.checked_abs().and_then(integer_cbrt).is_some()
    })
}

fn cube_root(m: &Monomial) -> Option<Monomial> {
  Some(Monomial {
    coeff: integer_cbrt(m.coeff.checked_abs()?)?,
    exp: m.exp / 3,
  })
}

/// `a^3 + b^3 = (a + b)(a^2 - ab + b^2)` and
/// `a^3 - b^3 = (a - b)(a^2 + ab + b^2)`, narrated around the oracle's
/// factorization.
pub fn sum_difference_of_cubes(
  oracle: &dyn Oracle,
  expr: &str,
) -> Option<Detection> {
  let poly = expanded(oracle, expr)?;
  if !is_cubes_shape(&poly) {
    debug!("{poly} is not a sum or difference of cubes");
    return None;
  }
  let (text, _) = factored(oracle, expr)?;
  if text == poly.to_string() || !text.contains('(') {
    debug!("oracle left {poly} unfactored");
    return None;
  }

  let var = poly.var();
  let a = cube_root(&poly.terms[0])?.render(var);
  let b = cube_root(&poly.terms[1])?.render(var);
  let sum = poly.terms[1].coeff > 0;
  let (kind, op, formula) = if sum {
    ("sum", "+", "a^3 + b^3 = (a + b)(a^2 - ab + b^2)")
  } else {
    ("difference", "-", "a^3 - b^3 = (a - b)(a^2 + ab + b^2)")
  };
  let first = poly.terms[0].render(var);
  let second = Monomial {
    coeff: poly.terms[1].coeff.abs(),
    exp: poly.terms[1].exp,
  }
  .render(var);
  let cubes = format!("({a})^3 {op} ({b})^3");

  let recognize = FactoringStep::new(
    Technique::SumDifferenceCubes,
    format!("Recognize a {kind} of cubes"),
    format!("{poly} = {cubes}"),
    format!("{first} = ({a})^3 and {second} = ({b})^3."),
  );
  let apply = FactoringStep::new(
    Technique::SumDifferenceCubes,
    format!("Apply the {kind} of cubes formula"),
    format!("{poly} = {text}"),
    format!("{formula} with a = {a} and b = {b}."),
  )
  .with_tip(
    "The binomial keeps the sign of the original, and the middle term of \
     the trinomial takes the opposite sign.",
  );

  Some(Detection {
    steps: vec![
      Narrated::claiming(recognize, cubes, poly.to_string()),
      Narrated::claiming(apply, &text, poly.to_string()),
    ],
    factored: text,
  })
}
