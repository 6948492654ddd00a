use super::quadratic::{is_quadratic_shape, quadratic};
use super::{expanded, Detection, Narrated};
use crate::config::FactorConfig;
use crate::numeric::gcd_int;
use crate::oracle::Oracle;
use crate::steps::{FactoringStep, Technique};
use crate::syntax::{Factorization, Polynomial};
use log::debug;

/// `original` rewritten in `new_var = var^step`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitution {
  pub var: String,
  pub new_var: String,
  pub step: u32,
  pub original: Polynomial,
  pub reduced: Polynomial,
}

/// Propose a substitution when at least two distinct non-zero exponents
/// share a GCD above one, e.g. `x^4 - 5*x^2 + 4` with `u = x^2`.
pub fn find_substitution(
  oracle: &dyn Oracle,
  expr: &str,
  config: &FactorConfig,
) -> Option<Substitution> {
  let poly = expanded(oracle, expr)?;
  let var = poly.var()?.to_string();
  let exps: Vec<u32> =
    poly.exponents().into_iter().filter(|&e| e > 0).collect();
  if exps.len() < 2 {
    return None;
  }
  let g = exps
    .iter()
    .fold(0i128, |acc, &e| gcd_int(acc, i128::from(e)));
  if g <= 1 {
    return None;
  }
  let step = u32::try_from(g).ok()?;
  let new_var = config.fresh_variable(&var)?.to_string();
  let reduced = poly.compress_exponents(step, &new_var)?;
  debug!("{poly} is {reduced} with {new_var} = {var}^{step}");
  Some(Substitution {
    var,
    new_var,
    step,
    original: poly,
    reduced,
  })
}

/// Factor the reduced polynomial, using the quadratic narration when it
/// applies and the oracle otherwise, then substitute back. `None` when
/// the reduced polynomial does not factor.
pub fn substitute(
  oracle: &dyn Oracle,
  sub: &Substitution,
) -> Option<Detection> {
  let Substitution {
    var,
    new_var,
    step,
    original,
    reduced,
  } = sub;
  let reduced_text = reduced.to_string();
  let power = format!("{var}^{step}");

  let inner = if is_quadratic_shape(reduced) {
    quadratic(oracle, &reduced_text)
  } else {
    None
  }
  .or_else(|| factor_reduced(oracle, &reduced_text))?;

  let reduced_factors = Factorization::parse(&inner.factored)?;
  let back = Factorization {
    constant: reduced_factors.constant,
    factors: reduced_factors
      .factors
      .iter()
      .map(|(p, e)| (p.stretch_exponents(*step, var), *e))
      .collect(),
  }
  .to_string();

  let forward = FactoringStep::new(
    Technique::Other,
    format!("Substitute {new_var} = {power}"),
    format!("{original} = {reduced_text}, where {new_var} = {power}"),
    format!(
      "Every exponent of {var} is a multiple of {step}, so the expression \
       is a polynomial in {power}. Writing {new_var} for {power} gives \
       {reduced_text}."
    ),
  )
  .with_tip("Look for exponents that share a common factor.");
  let backward = FactoringStep::new(
    Technique::Other,
    "Substitute back",
    format!("{} = {back}", inner.factored),
    format!("Replace {new_var} with {power} in every factor."),
  );

  let mut steps = vec![Narrated::plain(forward)];
  steps.extend(inner.steps);
  steps.push(Narrated::claiming(backward, &back, original.to_string()));
  Some(Detection {
    steps,
    factored: back,
  })
}

fn factor_reduced(oracle: &dyn Oracle, reduced: &str) -> Option<Detection> {
  let text = oracle.factor(reduced).ok()?;
  if text == reduced || !text.contains('(') {
    debug!("{reduced} does not factor");
    return None;
  }
  let step = FactoringStep::new(
    Technique::Other,
    "Factor the reduced polynomial",
    format!("{reduced} = {text}"),
    format!("In the new variable the expression factors as {text}."),
  );
  Some(Detection {
    steps: vec![Narrated::claiming(step, &text, reduced)],
    factored: text,
  })
}
