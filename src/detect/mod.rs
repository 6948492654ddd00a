//! Shape detectors. Each looks at the working expression through the
//! oracle and either narrates a factorization or declines with `None`.

mod cubes;
mod difference_of_squares;
mod fallback;
mod gcf;
mod perfect_power;
mod perfect_square;
mod quadratic;
mod substitution;

pub use cubes::{is_cubes_shape, sum_difference_of_cubes};
pub use difference_of_squares::{difference_of_squares, is_difference_shape};
pub use fallback::fallback;
pub use gcf::{extract_gcf, narrate_gcf};
pub use perfect_power::perfect_power;
pub use perfect_square::perfect_square_trinomial;
pub use quadratic::{is_quadratic_shape, quadratic};
pub use substitution::{find_substitution, substitute, Substitution};

use crate::oracle::Oracle;
use crate::steps::FactoringStep;
use crate::syntax::{Factorization, Polynomial};
use log::debug;

/// A step together with the equality it asserts, `factored == of`,
/// which the builder checks with the oracle.
#[derive(Debug, Clone)]
pub struct Narrated {
  pub step: FactoringStep,
  pub claim: Option<Claim>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Claim {
  pub factored: String,
  pub of: String,
}

impl Narrated {
  pub fn plain(step: FactoringStep) -> Self {
    Narrated { step, claim: None }
  }

  pub fn claiming(
    step: FactoringStep,
    factored: impl Into<String>,
    of: impl Into<String>,
  ) -> Self {
    Narrated {
      step,
      claim: Some(Claim {
        factored: factored.into(),
        of: of.into(),
      }),
    }
  }
}

/// Narration of one factorization of the working expression.
#[derive(Debug, Clone)]
pub struct Detection {
  pub steps: Vec<Narrated>,
  pub factored: String,
}

/// Expanded form of `expr` as a structured polynomial.
pub(crate) fn expanded(oracle: &dyn Oracle, expr: &str) -> Option<Polynomial> {
  let text = oracle
    .expand(expr)
    .map_err(|e| debug!("expand({expr}) failed: {e}"))
    .ok()?;
  let poly = Polynomial::parse(&text);
  if poly.is_none() {
    debug!("{text} is not a single-variable polynomial");
  }
  poly
}

/// The oracle's factorization of `expr` as text and structure.
pub(crate) fn factored(
  oracle: &dyn Oracle,
  expr: &str,
) -> Option<(String, Factorization)> {
  let text = oracle
    .factor(expr)
    .map_err(|e| debug!("factor({expr}) failed: {e}"))
    .ok()?;
  let structure = Factorization::parse(&text)?;
  Some((text, structure))
}

/// `(text)` unless `text` is a single atom or monomial.
pub(crate) fn group(text: &str) -> String {
  match Polynomial::parse(text) {
    Some(p)
      if p.term_count() <= 1
        && p.leading().map_or(true, |m| m.coeff >= 0) =>
    {
      text.to_string()
    }
    _ => format!("({text})"),
  }
}

/// `text` as the first factor of a product: a lone monomial such as
/// `-2` or `3*x` stays bare, anything else is grouped.
pub(crate) fn leading_factor(text: &str) -> String {
  match Polynomial::parse(text) {
    Some(p) if p.term_count() <= 1 => text.to_string(),
    _ => format!("({text})"),
  }
}
