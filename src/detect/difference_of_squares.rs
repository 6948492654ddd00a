use super::{expanded, Detection, Narrated};
use crate::config::NestingPolicy;
use crate::numeric::is_perfect_square;
use crate::oracle::Oracle;
use crate::steps::{FactoringStep, Technique};
use crate::syntax::{Monomial, Polynomial};
use log::debug;

/// Exactly `<term> - <term>` with a positive leading term.
pub fn is_difference_shape(poly: &Polynomial) -> bool {
  poly.term_count() == 2 && poly.terms[0].coeff > 0 && poly.terms[1].coeff < 0
}

/// `a^2 - b^2 = (a + b)*(a - b)`. Under [`NestingPolicy::Recursive`]
/// the `a - b` factor is split again while it is itself a difference of
/// squares.
pub fn difference_of_squares(
  oracle: &dyn Oracle,
  expr: &str,
  nesting: NestingPolicy,
) -> Option<Detection> {
  let poly = expanded(oracle, expr)?;
  if !is_difference_shape(&poly) {
    debug!("{poly} is not a two-term difference");
    return None;
  }
  let var = poly.var();
  let first = poly.terms[0].render(var);
  let second = Monomial {
    coeff: -poly.terms[1].coeff,
    exp: poly.terms[1].exp,
  }
  .render(var);

  let a = is_perfect_square(oracle, &first)?;
  let b = is_perfect_square(oracle, &second)?;
  let plus = oracle.run(&format!("{a} + {b}")).ok()?;
  let minus = oracle.run(&format!("{a} - {b}")).ok()?;
  let product = format!("({plus})*({minus})");

  let step = FactoringStep::new(
    Technique::DifferenceOfSquares,
    "Factor the difference of squares",
    format!("{poly} = {product}"),
    format!(
      "{first} = ({a})^2 and {second} = ({b})^2, so this is a^2 - b^2 \
       with a = {a} and b = {b}, which factors as (a + b)(a - b)."
    ),
  )
  .with_tip("A difference of two squares always splits as (a + b)(a - b).");

  let mut detection = Detection {
    steps: vec![Narrated::claiming(step, &product, poly.to_string())],
    factored: product,
  };

  if nesting == NestingPolicy::Recursive {
    if let Some(inner) = difference_of_squares(oracle, &minus, nesting) {
      debug!("{minus} is again a difference of squares");
      detection.steps.extend(inner.steps);
      detection.factored = format!("({plus})*{}", inner.factored);
    }
  }
  Some(detection)
}
