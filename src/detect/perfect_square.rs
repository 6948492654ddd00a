use super::{expanded, factored, Detection, Narrated};
use crate::oracle::Oracle;
use crate::steps::{FactoringStep, Technique};
use crate::syntax::{render_factor, Monomial, Polynomial};
use log::debug;

/// `a^2 x^2 +/- 2ab x + b^2 = (a x +/- b)^2`, read off the oracle's
/// `(a*x +/- b)^2` and checked coefficient by coefficient against the
/// expanded form.
pub fn perfect_square_trinomial(
  oracle: &dyn Oracle,
  expr: &str,
) -> Option<Detection> {
  let (_, factorization) = factored(oracle, expr)?;
  let (base, power) = factorization.single_power()?;
  if power != 2 || base.degree() != 1 || base.term_count() != 2 {
    debug!("{expr} is not the square of a linear binomial");
    return None;
  }
  let a = base.coefficient(1);
  let b = base.coefficient(0);

  let poly = expanded(oracle, expr)?;
  let matches = poly.degree() == 2
    && poly.coefficient(2) == a.checked_mul(a)?
    && poly.coefficient(1) == a.checked_mul(b)?.checked_mul(2)?
    && poly.coefficient(0) == b.checked_mul(b)?;
  if !matches {
    debug!("{poly} does not match the square of {base}");
    return None;
  }
  Some(narrate_square(&poly, base))
}

/// Two steps for `poly = (base)^2` where `base` is `a*x^k +/- b`: name
/// the `a^2 +/- 2ab + b^2` pattern, then write the square.
pub(super) fn narrate_square(
  poly: &Polynomial,
  base: &Polynomial,
) -> Detection {
  let var = base.var();
  let lead = base.leading().unwrap_or(Monomial { coeff: 0, exp: 0 });
  let k = lead.exp;
  let b0 = base.coefficient(0);
  let (sign, twice, b) = if b0 < 0 {
    ("-", "-2", -b0)
  } else {
    ("+", "2", b0)
  };

  let root = lead.render(var);
  let first = poly.terms.first().map(|m| m.render(poly.var()));
  let middle = poly
    .terms
    .iter()
    .find(|m| m.exp == k)
    .map(|m| m.render(poly.var()));
  let pattern = format!("({root})^2 {sign} 2*({root})*({b}) + ({b})^2");
  let square = render_factor(base, 2);

  let identify = FactoringStep::new(
    Technique::PerfectSquare,
    "Recognize a perfect square trinomial",
    format!("{poly} = {pattern}"),
    format!(
      "The first term {} is the square of {root} and the last term {} \
       is the square of {b}. The middle term {} is {twice}*({root})*({b}), \
       so the trinomial has the form a^2 {sign} 2ab + b^2.",
      first.unwrap_or_default(),
      b * b,
      middle.unwrap_or_default(),
    ),
  )
  .with_tip(
    "Check the middle term: it must be twice the product of the two \
     square roots.",
  );
  let write = FactoringStep::new(
    Technique::PerfectSquare,
    "Write it as a square",
    format!("{poly} = {square}"),
    format!(
      "a^2 {sign} 2ab + b^2 = (a {sign} b)^2 with a = {root} and b = {b}."
    ),
  );

  Detection {
    steps: vec![
      Narrated::claiming(identify, pattern, poly.to_string()),
      Narrated::claiming(write, &square, poly.to_string()),
    ],
    factored: square,
  }
}
